use crate::DisplaySink;
use crate::error::DisplayError;
use crate::pixel::pack;
use common::{BufferDescriptor, DisplayCapabilities, PixelFormat, RawPixel};

/// Widest display a [`LineBuffer`] can serve.
pub const LINE_BUFFER_PIXELS: usize = 320;

/// Reusable one-row scratch for whole-screen fills.
///
/// The caller allocates one of these at startup and passes it into each fill;
/// it is a single-writer resource, so concurrent fills must be serialized by
/// the caller.
pub struct LineBuffer {
    pixels: heapless::Vec<RawPixel, LINE_BUFFER_PIXELS>,
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            pixels: heapless::Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        LINE_BUFFER_PIXELS
    }

    fn fill(&mut self, width: usize, color: RawPixel) -> Result<&[RawPixel], ()> {
        self.pixels.clear();
        self.pixels.resize(width, color)?;
        Ok(&self.pixels)
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Paints the whole display one color by sending the same row buffer at every
/// line, top to bottom.
///
/// Fails up front with no writes issued when the display is wider than the
/// line buffer. A failed row write aborts the remaining rows; rows already
/// sent stay as they are.
pub fn fill_solid<S: DisplaySink>(
    sink: &mut S,
    caps: &DisplayCapabilities,
    line: &mut LineBuffer,
    format: PixelFormat,
    r5: u8,
    g6: u8,
    b5: u8,
) -> Result<(), DisplayError<S::Error>> {
    let width = caps.x_resolution;
    let color = pack(format, r5, g6, b5);
    let row = line.fill(usize::from(width), color).map_err(|()| {
        log::error!("line buffer too small for width {width}");
        DisplayError::LineBufferOverflow {
            width,
            capacity: LINE_BUFFER_PIXELS,
        }
    })?;

    let descriptor = BufferDescriptor {
        width,
        height: 1,
        pitch: width,
        buf_size: row.len() * core::mem::size_of::<RawPixel>(),
    };
    for y in 0..caps.y_resolution {
        if let Err(e) = sink.write(0, y, &descriptor, row) {
            log::error!("row write failed at line {y}");
            return Err(DisplayError::Sink(e));
        }
    }
    Ok(())
}
