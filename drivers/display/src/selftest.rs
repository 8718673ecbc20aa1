use crate::DisplaySink;
use crate::error::DisplayError;
use crate::fill::{LineBuffer, fill_solid};
use crate::text::{centered_origin, render_text, text_extent};
use common::{DisplayCapabilities, PixelBuffer, PixelFormat, PixelFormats, RawPixel};
use glyph_font::FONT_5X7;

/// Pause after clearing, before the first fill.
const SETTLE_DELAY_MS: u32 = 10;
/// Pause between the red, green and blue fill phases.
const PHASE_DELAY_MS: u32 = 300;

/// Picks the session pixel format from the capability mask, preferring BGR565
/// when the display offers it.
pub fn negotiate_format(caps: &DisplayCapabilities) -> Option<PixelFormat> {
    if caps.supported_pixel_formats.contains(PixelFormats::BGR565) {
        Some(PixelFormat::Bgr565)
    } else if caps.supported_pixel_formats.contains(PixelFormats::RGB565) {
        Some(PixelFormat::Rgb565)
    } else {
        None
    }
}

/// Runs the full display exercise: negotiate a format, unblank, fill the
/// screen red, green and blue in turn, then draw `text` centered.
///
/// `text_scratch` provides the pixel storage for the rendered text; when it
/// cannot hold the full string the text clips at the right edge. `delay_ms`
/// is called between phases so the core itself never sleeps. The first
/// failure short-circuits the sequence.
pub fn run<S, D>(
    sink: &mut S,
    line: &mut LineBuffer,
    text_scratch: &mut [RawPixel],
    text: &str,
    mut delay_ms: D,
) -> Result<(), DisplayError<S::Error>>
where
    S: DisplaySink,
    D: FnMut(u32),
{
    let caps = sink.capabilities();
    log::info!(
        "display {}x{} formats={:?}",
        caps.x_resolution,
        caps.y_resolution,
        caps.supported_pixel_formats
    );

    let format = match negotiate_format(&caps) {
        Some(format) => format,
        None => {
            log::error!(
                "no RGB/BGR565 support (formats={:?})",
                caps.supported_pixel_formats
            );
            return Err(DisplayError::FormatUnsupported {
                supported: caps.supported_pixel_formats,
            });
        }
    };

    sink.set_pixel_format(format).map_err(DisplayError::Sink)?;
    log::info!("pixel format set to {format:?}");

    sink.blanking_off().map_err(DisplayError::Sink)?;
    sink.clear();
    delay_ms(SETTLE_DELAY_MS);

    fill_solid(sink, &caps, line, format, 31, 0, 0)?;
    delay_ms(PHASE_DELAY_MS);
    fill_solid(sink, &caps, line, format, 0, 63, 0)?;
    delay_ms(PHASE_DELAY_MS);
    fill_solid(sink, &caps, line, format, 0, 0, 31)?;
    log::info!("color fills ok");

    let font = &FONT_5X7;
    let (text_width, text_height) = text_extent(font, text);
    let width = usize::from(text_width).min(text_scratch.len() / usize::from(text_height)) as u16;
    let storage = &mut text_scratch[..usize::from(width) * usize::from(text_height)];
    let mut buf = PixelBuffer::new(storage, width, text_height);
    render_text(&mut buf, font, text, format);

    let origin = centered_origin(&caps, width, text_height);
    let descriptor = buf.descriptor();
    sink.write(origin.x, origin.y, &descriptor, buf.pixels())
        .map_err(DisplayError::Sink)?;
    log::info!(
        "\"{text}\" drawn at ({}, {}), {}x{}",
        origin.x,
        origin.y,
        descriptor.width,
        descriptor.height
    );
    Ok(())
}
