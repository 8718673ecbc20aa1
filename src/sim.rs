use common::{BufferDescriptor, DisplayCapabilities, PixelFormat, PixelFormats, RawPixel};
use display::DisplaySink;
use display::pixel::unpack;
use std::fmt;

/// In-memory display with the contract checks a strict driver would apply:
/// writes need a negotiated format, rectangles must fit the panel, and the
/// descriptor must agree with the payload.
pub struct SimDisplay {
    caps: DisplayCapabilities,
    format: Option<PixelFormat>,
    framebuffer: Vec<RawPixel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    FormatNotSet,
    UnsupportedFormat(PixelFormat),
    OutOfBounds { x: u16, y: u16, width: u16, height: u16 },
    DescriptorMismatch,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::FormatNotSet => f.write_str("no pixel format negotiated"),
            SimError::UnsupportedFormat(format) => write!(f, "unsupported pixel format {format:?}"),
            SimError::OutOfBounds { x, y, width, height } => {
                write!(f, "rectangle {width}x{height} at ({x}, {y}) does not fit the panel")
            }
            SimError::DescriptorMismatch => f.write_str("descriptor does not match the payload"),
        }
    }
}

impl SimDisplay {
    pub fn new(x_resolution: u16, y_resolution: u16, supported: PixelFormats) -> Self {
        Self {
            caps: DisplayCapabilities {
                x_resolution,
                y_resolution,
                supported_pixel_formats: supported,
            },
            format: None,
            framebuffer: vec![
                RawPixel::new(0);
                usize::from(x_resolution) * usize::from(y_resolution)
            ],
        }
    }

    pub fn pixel(&self, x: u16, y: u16) -> RawPixel {
        self.framebuffer[usize::from(y) * usize::from(self.caps.x_resolution) + usize::from(x)]
    }

    /// Expands the framebuffer to 8-bit RGB, replicating the high channel bits
    /// into the low ones.
    pub fn to_rgb888(&self) -> Vec<u8> {
        let format = self.format.unwrap_or(PixelFormat::Rgb565);
        let mut rgb = Vec::with_capacity(self.framebuffer.len() * 3);
        for px in &self.framebuffer {
            let (r5, g6, b5) = unpack(format, *px);
            rgb.push(r5 << 3 | r5 >> 2);
            rgb.push(g6 << 2 | g6 >> 4);
            rgb.push(b5 << 3 | b5 >> 2);
        }
        rgb
    }
}

impl DisplaySink for SimDisplay {
    type Error = SimError;

    fn capabilities(&self) -> DisplayCapabilities {
        self.caps
    }

    fn set_pixel_format(&mut self, format: PixelFormat) -> Result<(), SimError> {
        if !self.caps.supported_pixel_formats.contains(format.flag()) {
            return Err(SimError::UnsupportedFormat(format));
        }
        self.format = Some(format);
        Ok(())
    }

    fn write(
        &mut self,
        x: u16,
        y: u16,
        descriptor: &BufferDescriptor,
        pixels: &[RawPixel],
    ) -> Result<(), SimError> {
        if self.format.is_none() {
            return Err(SimError::FormatNotSet);
        }

        let width = usize::from(descriptor.width);
        let height = usize::from(descriptor.height);
        let pitch = usize::from(descriptor.pitch);
        let needed = if height == 0 {
            0
        } else {
            (height - 1) * pitch + width
        };
        if pitch < width
            || pixels.len() < needed
            || descriptor.buf_size != pixels.len() * size_of::<RawPixel>()
        {
            return Err(SimError::DescriptorMismatch);
        }

        if u32::from(x) + u32::from(descriptor.width) > u32::from(self.caps.x_resolution)
            || u32::from(y) + u32::from(descriptor.height) > u32::from(self.caps.y_resolution)
        {
            return Err(SimError::OutOfBounds {
                x,
                y,
                width: descriptor.width,
                height: descriptor.height,
            });
        }

        let stride = usize::from(self.caps.x_resolution);
        for row in 0..height {
            let src = &pixels[row * pitch..row * pitch + width];
            let dst_start = (usize::from(y) + row) * stride + usize::from(x);
            self.framebuffer[dst_start..dst_start + width].copy_from_slice(src);
        }
        Ok(())
    }

    fn blanking_off(&mut self) -> Result<(), SimError> {
        Ok(())
    }

    fn clear(&mut self) {
        self.framebuffer.fill(RawPixel::new(0));
    }
}
