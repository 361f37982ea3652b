/// Per-pixel "already painted" flags, same dimensions as the owning buffer
///
/// Every committed pixel write sets its flag; flood fills consult it so that
/// no pixel is processed twice.
#[derive(Clone, Default)]
pub struct TouchedMask {
    marks: Vec<bool>,
    width: u32,
    height: u32,
}

impl TouchedMask {
    /// All-false mask of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            marks: vec![false; width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Flag at (x, y); false outside the mask
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.marks[i])
    }

    /// Raise the flag at (x, y); ignored outside the mask
    #[inline]
    pub fn mark(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.marks[i] = true;
        }
    }

    /// Raise every flag
    pub fn mark_all(&mut self) {
        self.marks.fill(true);
    }

    /// Lower every flag without reallocating
    pub fn clear(&mut self) {
        self.marks.fill(false);
    }

    /// Number of raised flags
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }
}
