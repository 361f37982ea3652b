//! JSON edit scripts: an ordered list of operations replayed on a buffer
//!
//! ```json
//! { "ops": [
//!     { "op": "set_size", "width": 64, "height": 48 },
//!     { "op": "clear", "color": "#ffffff" },
//!     { "op": "circle", "center": [32, 24], "radius": 10, "color": [255, 0, 0], "fill": [0, 0, 255] },
//!     { "op": "fill", "at": [0, 0], "color": [0, 128, 0] }
//! ] }
//! ```

use crate::canvas::PixelBuffer;
use crate::color::{Channel, Color};
use crate::error::Result;
use crate::geometry::Coord;
use crate::transform::{Reflection, Rotation};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const fn default_thickness() -> i32 {
    1
}

/// One editing step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Reallocate the canvas, transparent and untouched
    SetSize { width: i32, height: i32 },
    /// Reset to transparent, or paint everything one color
    Clear {
        #[serde(default)]
        color: Option<Color>,
    },
    Line {
        from: Coord,
        to: Coord,
        #[serde(default = "default_thickness")]
        thickness: i32,
        color: Color,
    },
    Circle {
        center: Coord,
        radius: i32,
        #[serde(default = "default_thickness")]
        thickness: i32,
        color: Color,
        #[serde(default)]
        fill: Option<Color>,
    },
    Polygon {
        vertices: Vec<Coord>,
        #[serde(default = "default_thickness")]
        thickness: i32,
        color: Color,
        #[serde(default)]
        fill: Option<Color>,
    },
    /// Same-color region fill from a seed
    Fill { at: Coord, color: Color },
    /// Fill bounded only by pixels already drawn
    FloodFill { at: Coord, color: Color },
    ReplaceColor { from: Color, to: Color },
    ChannelFilter { channel: Channel, value: u8 },
    Invert,
    Grayscale,
    /// New canvas size with the old image placed at `offset`
    Resize {
        #[serde(default)]
        offset: Coord,
        width: i32,
        height: i32,
    },
    Crop { from: Coord, to: Coord },
    Rotate { rotation: Rotation },
    Reflect { axis: Reflection },
}

impl Operation {
    /// Whether the operation draws onto existing content (and so does nothing
    /// on an empty canvas)
    fn draws(&self) -> bool {
        matches!(
            self,
            Self::Line { .. }
                | Self::Circle { .. }
                | Self::Polygon { .. }
                | Self::Fill { .. }
                | Self::FloodFill { .. }
        )
    }

    pub fn apply(&self, buffer: &mut PixelBuffer) -> Result<()> {
        match self {
            Self::SetSize { width, height } => buffer.set_size(*width, *height)?,
            Self::Clear { color: None } => buffer.clear(),
            Self::Clear { color: Some(c) } => buffer.clear_to(*c),
            Self::Line {
                from,
                to,
                thickness,
                color,
            } => buffer.draw_line(from.x, from.y, to.x, to.y, *thickness, *color),
            Self::Circle {
                center,
                radius,
                thickness,
                color,
                fill,
            } => buffer.draw_circle(center.x, center.y, *radius, *thickness, *color, *fill),
            Self::Polygon {
                vertices,
                thickness,
                color,
                fill,
            } => buffer.draw_polygon(vertices, *thickness, *color, *fill),
            Self::Fill { at, color } => {
                buffer.fill(at.x, at.y, *color);
            },
            Self::FloodFill { at, color } => {
                buffer.flood_fill(at.x, at.y, *color);
            },
            Self::ReplaceColor { from, to } => {
                buffer.replace_color(*from, *to);
            },
            Self::ChannelFilter { channel, value } => buffer.channel_filter(*channel, *value),
            Self::Invert => buffer.invert_colors(),
            Self::Grayscale => buffer.gray_colors(),
            Self::Resize {
                offset,
                width,
                height,
            } => buffer.resize(offset.x, offset.y, *width, *height)?,
            Self::Crop { from, to } => buffer.crop(from.x, from.y, to.x, to.y)?,
            Self::Rotate { rotation } => buffer.rotate(*rotation),
            Self::Reflect { axis } => buffer.reflect(*axis),
        }
        Ok(())
    }
}

/// An ordered list of operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub ops: Vec<Operation>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a script from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save the script to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Run every operation in order, stopping at the first error
    pub fn apply(&self, buffer: &mut PixelBuffer) -> Result<()> {
        for (i, op) in self.ops.iter().enumerate() {
            if op.draws() && buffer.is_empty() {
                warn!("op {i} draws on an empty canvas: {op:?}");
            }
            debug!("op {i}: {op:?}");
            op.apply(buffer)?;
        }
        Ok(())
    }
}
