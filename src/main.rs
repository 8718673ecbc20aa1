use anyhow::{Context, anyhow};
use common::{PixelFormats, RawPixel};
use display::fill::LineBuffer;
use display::selftest;
use display::text::{centered_origin, text_extent};
use display::DisplaySink;
use glyph_font::FONT_5X7;
use std::{fs, thread, time::Duration};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_ppm::PPMEncoder;

mod sim;
use sim::SimDisplay;

const GREETING: &str = "Hello world";
const OUTPUT_PATH: &str = "display.ppm";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display = SimDisplay::new(240, 135, PixelFormats::RGB565 | PixelFormats::BGR565);
    let mut line = LineBuffer::new();
    let mut text_scratch =
        vec![RawPixel::new(0); FONT_5X7.text_width(GREETING) * FONT_5X7.height];

    selftest::run(&mut display, &mut line, &mut text_scratch, GREETING, |ms| {
        thread::sleep(Duration::from_millis(ms.into()))
    })
    .map_err(|e| anyhow!("display self test failed: {e}"))?;

    print_text_region(&display);

    let ppm = encode_ppm(&display)?;
    fs::write(OUTPUT_PATH, &ppm).with_context(|| format!("failed to write {OUTPUT_PATH}"))?;
    log::info!("framebuffer written to {OUTPUT_PATH}");
    Ok(())
}

/// Dumps the greeting area of the framebuffer to stdout, one character per
/// pixel.
fn print_text_region(display: &SimDisplay) {
    let caps = display.capabilities();
    let (width, height) = text_extent(&FONT_5X7, GREETING);
    let origin = centered_origin(&caps, width, height);

    for y in origin.y..origin.y + height {
        for x in origin.x..origin.x + width {
            let ch = if display.pixel(x, y).get() != 0 { "*" } else { " " };
            print!("{}", ch);
        }
        println!("");
    }
}

fn encode_ppm(display: &SimDisplay) -> anyhow::Result<Vec<u8>> {
    let caps = display.capabilities();
    let rgb = display.to_rgb888();
    let options = EncoderOptions::new(
        usize::from(caps.x_resolution),
        usize::from(caps.y_resolution),
        ColorSpace::RGB,
        BitDepth::Eight,
    );
    let mut encoder = PPMEncoder::new(&rgb, options);
    encoder
        .encode()
        .map_err(|e| anyhow!("ppm encoding failed: {e:?}"))
}
