//! Image file I/O through the `image` crate
//!
//! Every decoded image is normalized to RGBA8 on the way in. Formats without
//! an alpha channel (JPEG, PNM) drop it on the way out.

use crate::canvas::PixelBuffer;
use crate::error::{Error, Result};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader, RgbaImage};
use log::{debug, info};
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Decode an in-memory image of any supported format and depth
pub fn decode(bytes: &[u8]) -> Result<PixelBuffer> {
    let image = image::load_from_memory(bytes).map_err(Error::Decode)?;
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::from_rgba(width, height, rgba.into_raw())
}

/// Encode a buffer in the given format
pub fn encode(buffer: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>> {
    if !format.writing_enabled() {
        return Err(Error::UnsupportedFormat(format!("{format:?}")));
    }

    let rgba = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec())
        .ok_or_else(|| Error::DataLength {
            width: buffer.width(),
            height: buffer.height(),
            len: buffer.as_bytes().len(),
        })?;
    let image = match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => {
            DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8())
        },
        _ => DynamicImage::ImageRgba8(rgba),
    };

    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).map_err(Error::Encode)?;
    debug!(
        "encoded {}x{} as {format:?} ({} bytes)",
        buffer.width(),
        buffer.height(),
        out.get_ref().len()
    );
    Ok(out.into_inner())
}

/// Load an image file; the format is detected from its content
pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let buffer = decode(&bytes)?;
    info!(
        "loaded {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Save a buffer; the format is chosen from the file extension
///
/// Missing parent directories are created.
pub fn save(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .map_err(|_| Error::UnsupportedFormat(path.display().to_string()))?;
    let bytes = encode(buffer, format)?;
    ensure_parent_dir(path)?;
    fs::write(path, bytes)?;
    info!(
        "saved {} ({}x{}, {format:?})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

// ============================================================================
// Image info
// ============================================================================

/// What an image file holds, before normalization to RGBA8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub color: ColorType,
    pub format: Option<ImageFormat>,
}

impl ImageInfo {
    pub fn bits_per_pixel(&self) -> u16 {
        self.color.bits_per_pixel()
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self
            .format
            .map_or_else(|| "unknown".to_string(), |fmt| format!("{fmt:?}"));
        write!(
            f,
            "{}x{} {:?} ({} bits per pixel), format {}",
            self.width,
            self.height,
            self.color,
            self.bits_per_pixel(),
            format
        )
    }
}

/// Describe an in-memory image without converting it
pub fn probe(bytes: &[u8]) -> Result<ImageInfo> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format();
    let image = reader.decode().map_err(Error::Decode)?;
    Ok(ImageInfo {
        width: image.width(),
        height: image.height(),
        color: image.color(),
        format,
    })
}

/// Describe an image file
pub fn info(path: impl AsRef<Path>) -> Result<ImageInfo> {
    let bytes = fs::read(path.as_ref())?;
    probe(&bytes)
}
