#![no_std]

pub mod error;
pub mod fill;
pub mod pixel;
pub mod selftest;
pub mod text;

use common::{BufferDescriptor, DisplayCapabilities, PixelFormat, RawPixel};

pub use error::DisplayError;
pub use fill::{LINE_BUFFER_PIXELS, LineBuffer, fill_solid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

/// The device abstraction the pipeline draws through. Anything that can
/// report its geometry and accept pixel rectangles can back it, which keeps
/// the whole pipeline runnable against an in-memory sink.
pub trait DisplaySink {
    type Error;

    fn capabilities(&self) -> DisplayCapabilities;

    fn set_pixel_format(&mut self, format: PixelFormat) -> Result<(), Self::Error>;

    /// Transfers `pixels` into the rectangle described by `descriptor`, whose
    /// top-left corner lands at (x, y).
    fn write(
        &mut self,
        x: u16,
        y: u16,
        descriptor: &BufferDescriptor,
        pixels: &[RawPixel],
    ) -> Result<(), Self::Error>;

    fn blanking_off(&mut self) -> Result<(), Self::Error>;

    fn clear(&mut self);
}
