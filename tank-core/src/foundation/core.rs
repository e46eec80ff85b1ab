use crate::foundation::error::{TankError, TankResult};

/// Which layer of the tank a matrix belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Front layer, biased toward white.
    Top,
    /// Back layer, biased toward black.
    Bottom,
}

impl Role {
    /// Canvas value shown where this layer does not cover the shared canvas.
    pub fn background(self) -> u8 {
        match self {
            Role::Top => 255,
            Role::Bottom => 0,
        }
    }
}

/// Pixel dimensions of a matrix or canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl Canvas {
    /// Canvas of `width x height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Smallest canvas that holds both `self` and `other`.
    pub fn union(self, other: Canvas) -> Canvas {
        Canvas {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Number of cells.
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Rectangular 8-bit luminance grid, row-major.
///
/// Width and height are always at least 1, so row 0 exists for every matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayMatrix {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayMatrix {
    /// A `width x height` matrix with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> TankResult<Self> {
        let len = checked_len(width, height, 1)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Wrap an existing row-major buffer.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> TankResult<Self> {
        let len = checked_len(width, height, 1)?;
        if data.len() != len {
            return Err(TankError::validation(format!(
                "gray buffer has {} bytes, expected {width}x{height}={len}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from nested rows; every row must have the first row's length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> TankResult<Self> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(TankError::validation(format!(
                    "row {y} has {} values, expected {width}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        let width = u32::try_from(width)
            .map_err(|_| TankError::validation("matrix width exceeds u32"))?;
        let height = u32::try_from(rows.len())
            .map_err(|_| TankError::validation("matrix height exceeds u32"))?;
        Self::from_raw(width, height, data)
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Value at column `x`, row `y`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.row(y)[x as usize]
    }

    /// Row `y` as a slice of `width` values.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.data[start..start + w]
    }

    /// Mutable row `y`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.width as usize;
        let start = (y as usize) * w;
        &mut self.data[start..start + w]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Iterate mutable rows top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(self.width as usize)
    }

    /// Row-major backing buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Take the row-major backing buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Copy `src` verbatim with its top-left corner at (`row`, `col`).
    ///
    /// The caller guarantees `src` fits inside `self` at that offset.
    pub(crate) fn blit(&mut self, src: &GrayMatrix, row: u32, col: u32) {
        let col = col as usize;
        let w = src.width as usize;
        for (y, src_row) in src.rows().enumerate() {
            let dst_row = self.row_mut(row + y as u32);
            dst_row[col..col + w].copy_from_slice(src_row);
        }
    }
}

/// Straight-alpha RGBA8 output of the merge step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeImage {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// `width * height * 4` bytes, non-premultiplied.
    pub data: Vec<u8>,
}

impl CompositeImage {
    pub(crate) fn transparent(width: u32, height: u32) -> TankResult<Self> {
        let len = checked_len(width, height, 4)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// `[r, g, b, a]` at column `x`, row `y`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Copy into an `image` crate buffer, e.g. for saving in other formats.
    pub fn to_rgba_image(&self) -> TankResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            TankError::validation("composite buffer does not match width*height*4")
        })
    }
}

fn checked_len(width: u32, height: u32, channels: usize) -> TankResult<usize> {
    if width == 0 || height == 0 {
        return Err(TankError::validation(format!(
            "matrix dimensions must be >= 1, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| TankError::validation("matrix buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
