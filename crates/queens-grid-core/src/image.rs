use crate::Rgb8;

/// Borrowed RGB8 image, row-major, 3 bytes per pixel.
#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // len = w*h*3
}

impl RgbImageView<'_> {
    /// Number of bytes a well-formed view of this size holds.
    #[inline]
    pub fn expected_len(&self) -> Option<usize> {
        self.width.checked_mul(self.height)?.checked_mul(3)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        let px = self.data.get(idx..idx + 3)?;
        Some(Rgb8::new(px[0], px[1], px[2]))
    }
}
