use crate::Position;
use crate::pixel::pack;
use common::{DisplayCapabilities, PixelBuffer, PixelFormat};
use glyph_font::Font;

/// Renders `text` into `buf`: background first, then one glyph cell per
/// character, left to right.
///
/// Foreground is full intensity, background black, both packed for `format`.
/// Columns falling at or beyond the buffer width are dropped, so an
/// under-sized buffer clips at the right edge instead of failing.
pub fn render_text(buf: &mut PixelBuffer<'_>, font: &Font, text: &str, format: PixelFormat) {
    let fg = pack(format, 31, 63, 31);
    let bg = pack(format, 0, 0, 0);

    buf.fill(bg);

    for (i, ch) in text.chars().enumerate() {
        let x0 = i * font.advance();
        font.render_char(ch, |x, y, lit| {
            if lit {
                buf.set(x0 + x, y, fg);
            }
        });
    }
}

/// Buffer geometry needed to hold `text` rendered with `font`.
pub fn text_extent(font: &Font, text: &str) -> (u16, u16) {
    (font.text_width(text) as u16, font.height as u16)
}

/// Top-left corner that centers a `width` x `height` rectangle on the
/// display. An axis where the display is not strictly larger aligns to 0 and
/// leaves clipping to the sink.
pub fn centered_origin(caps: &DisplayCapabilities, width: u16, height: u16) -> Position {
    let x = if caps.x_resolution > width {
        (caps.x_resolution - width) / 2
    } else {
        0
    };
    let y = if caps.y_resolution > height {
        (caps.y_resolution - height) / 2
    } else {
        0
    };
    Position { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{PixelFormats, RawPixel};
    use glyph_font::FONT_5X7;

    const TEXT: &str = "Hello world";

    fn caps(x: u16, y: u16) -> DisplayCapabilities {
        DisplayCapabilities {
            x_resolution: x,
            y_resolution: y,
            supported_pixel_formats: PixelFormats::RGB565,
        }
    }

    #[test]
    fn extent_is_six_pixels_per_character() {
        assert_eq!(text_extent(&FONT_5X7, TEXT), (66, 7));
        assert_eq!(text_extent(&FONT_5X7, "o"), (6, 7));
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut first = [RawPixel::new(0); 66 * 7];
        let mut second = [RawPixel::new(0xaaaa); 66 * 7];
        let mut buf = PixelBuffer::new(&mut first, 66, 7);
        render_text(&mut buf, &FONT_5X7, TEXT, PixelFormat::Rgb565);
        let mut buf = PixelBuffer::new(&mut second, 66, 7);
        render_text(&mut buf, &FONT_5X7, TEXT, PixelFormat::Rgb565);
        assert_eq!(first, second);
    }

    #[test]
    fn h_cell_draws_two_bars_and_a_crossbar() {
        let mut storage = [RawPixel::new(0); 66 * 7];
        let mut buf = PixelBuffer::new(&mut storage, 66, 7);
        render_text(&mut buf, &FONT_5X7, TEXT, PixelFormat::Rgb565);

        let fg = pack(PixelFormat::Rgb565, 31, 63, 31);
        let bg = pack(PixelFormat::Rgb565, 0, 0, 0);
        for y in 0..7 {
            for x in 0..5 {
                let expected = if y == 3 || x == 0 || x == 4 { fg } else { bg };
                assert_eq!(buf.get(x, y), Some(expected), "H cell pixel ({x}, {y})");
            }
            // trailing spacing column stays background
            assert_eq!(buf.get(5, y), Some(bg));
        }
    }

    #[test]
    fn undefined_characters_render_as_background_only() {
        let mut storage = [RawPixel::new(0xffff); 4 * 6 * 7];
        let mut buf = PixelBuffer::new(&mut storage, 4 * 6, 7);
        render_text(&mut buf, &FONT_5X7, "a? !", PixelFormat::Rgb565);
        let bg = pack(PixelFormat::Rgb565, 0, 0, 0);
        assert!(storage.iter().all(|px| *px == bg));
    }

    #[test]
    fn under_sized_buffer_clips_at_the_right_edge() {
        // room for the first glyph cell plus two columns of the second
        let mut storage = [RawPixel::new(0); 8 * 7];
        let mut buf = PixelBuffer::new(&mut storage, 8, 7);
        render_text(&mut buf, &FONT_5X7, "ll", PixelFormat::Rgb565);

        let fg = pack(PixelFormat::Rgb565, 31, 63, 31);
        // 'l' is a single bar at column 2 of its cell; the second cell's bar
        // at absolute x=8 must have been dropped
        for y in 0..6 {
            assert_eq!(buf.get(2, y), Some(fg));
        }
        let lit = storage.iter().filter(|px| **px == fg).count();
        assert_eq!(lit, 6);
    }

    #[test]
    fn centering_on_the_reference_display() {
        let origin = centered_origin(&caps(240, 135), 66, 7);
        assert_eq!(origin, Position { x: 87, y: 64 });
    }

    #[test]
    fn centering_degrades_to_top_left_on_small_displays() {
        assert_eq!(centered_origin(&caps(64, 7), 66, 7), Position { x: 0, y: 0 });
        assert_eq!(centered_origin(&caps(66, 7), 66, 7), Position { x: 0, y: 0 });
        assert_eq!(centered_origin(&caps(67, 8), 66, 7), Position { x: 0, y: 0 });
    }
}
