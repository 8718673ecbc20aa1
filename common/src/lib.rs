#![no_std]

use bitflags::bitflags;
use zerocopy::byteorder::big_endian::U16;

/// A packed 16-bit pixel in wire order.
///
/// Stored big-endian regardless of host endianness so a buffer of these can be
/// handed to the display as-is.
pub type RawPixel = U16;

bitflags! {
    /// Pixel formats a display reports support for.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PixelFormats: u32 {
        const RGB565 = 1 << 0;
        const BGR565 = 1 << 1;
    }
}

/// Channel order used when packing a pixel. Fixed for a session once
/// negotiated with the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb565,
    Bgr565,
}

impl PixelFormat {
    pub const fn flag(self) -> PixelFormats {
        match self {
            PixelFormat::Rgb565 => PixelFormats::RGB565,
            PixelFormat::Bgr565 => PixelFormats::BGR565,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCapabilities {
    pub x_resolution: u16,
    pub y_resolution: u16,
    pub supported_pixel_formats: PixelFormats,
}

/// Describes the rectangle a pixel payload covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDescriptor {
    pub width: u16,
    pub height: u16,
    /// row stride in pixels, normally equal to `width`
    pub pitch: u16,
    /// payload size in bytes
    pub buf_size: usize,
}

/// A caller-owned 2D grid of packed pixels, row-major.
///
/// The storage slice must hold `height * pitch` elements with `pitch >= width`.
/// Writes outside the declared geometry or past the end of the storage are
/// dropped, which is what clips drawing at the right edge.
pub struct PixelBuffer<'a> {
    pixels: &'a mut [RawPixel],
    width: u16,
    height: u16,
    pitch: u16,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(pixels: &'a mut [RawPixel], width: u16, height: u16) -> Self {
        Self::with_pitch(pixels, width, height, width)
    }

    pub fn with_pitch(pixels: &'a mut [RawPixel], width: u16, height: u16, pitch: u16) -> Self {
        Self {
            pixels,
            width,
            height,
            pitch,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pitch(&self) -> u16 {
        self.pitch
    }

    pub fn fill(&mut self, color: RawPixel) {
        self.pixels.fill(color);
    }

    /// Sets one pixel. Coordinates at or beyond the declared geometry are
    /// silently dropped.
    pub fn set(&mut self, x: usize, y: usize, color: RawPixel) {
        if x >= usize::from(self.width) || y >= usize::from(self.height) {
            return;
        }
        let offset = y * usize::from(self.pitch) + x;
        if offset >= self.pixels.len() {
            return;
        }
        self.pixels[offset] = color;
    }

    pub fn get(&self, x: usize, y: usize) -> Option<RawPixel> {
        if x >= usize::from(self.width) || y >= usize::from(self.height) {
            return None;
        }
        self.pixels.get(y * usize::from(self.pitch) + x).copied()
    }

    pub fn pixels(&self) -> &[RawPixel] {
        self.pixels
    }

    pub fn descriptor(&self) -> BufferDescriptor {
        BufferDescriptor {
            width: self.width,
            height: self.height,
            pitch: self.pitch,
            buf_size: usize::from(self.height)
                * usize::from(self.pitch)
                * core::mem::size_of::<RawPixel>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::IntoBytes;

    #[test]
    fn raw_pixel_is_big_endian_on_the_wire() {
        let px = RawPixel::new(0xf800);
        assert_eq!(px.as_bytes(), &[0xf8, 0x00]);
        assert_eq!(px.get(), 0xf800);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut storage = [RawPixel::new(0); 4 * 3];
        let mut buf = PixelBuffer::new(&mut storage, 4, 3);
        buf.set(2, 1, RawPixel::new(0xabcd));
        assert_eq!(buf.get(2, 1), Some(RawPixel::new(0xabcd)));
        assert_eq!(buf.get(3, 2), Some(RawPixel::new(0)));
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut storage = [RawPixel::new(0); 4 * 3];
        let mut buf = PixelBuffer::new(&mut storage, 4, 3);
        buf.set(4, 0, RawPixel::new(0xffff));
        buf.set(0, 3, RawPixel::new(0xffff));
        assert!(storage.iter().all(|px| px.get() == 0));
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut storage = [RawPixel::new(0); 8];
        let mut buf = PixelBuffer::new(&mut storage, 4, 2);
        buf.fill(RawPixel::new(0x1234));
        assert!(storage.iter().all(|px| px.get() == 0x1234));
    }

    #[test]
    fn descriptor_matches_geometry() {
        let mut storage = [RawPixel::new(0); 6 * 7];
        let buf = PixelBuffer::new(&mut storage, 6, 7);
        let desc = buf.descriptor();
        assert_eq!(desc.width, 6);
        assert_eq!(desc.height, 7);
        assert_eq!(desc.pitch, 6);
        assert_eq!(desc.buf_size, 6 * 7 * 2);
    }
}
