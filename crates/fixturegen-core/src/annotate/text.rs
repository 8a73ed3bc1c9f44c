//! Outlined text rendering with edge anchoring.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use super::glyphs::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Glyph rows plus one row of leading make up one em.
const EM_ROWS: u32 = GLYPH_HEIGHT + 1;

/// Edge a label is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gravity {
    Center,
    North,
    South,
    East,
    West,
}

/// Size and colours for a text label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Font size in pixels (one em).
    pub size: u32,
    pub fill: Rgb<u8>,
    pub stroke: Rgb<u8>,
    pub stroke_width: u32,
}

impl TextStyle {
    /// White text with a 1px black outline, sized to a twentieth of the
    /// longest image edge.
    pub fn for_dimension(dimension: u32) -> Self {
        Self {
            size: (dimension / 20).max(1),
            fill: Rgb([255, 255, 255]),
            stroke: Rgb([0, 0, 0]),
            stroke_width: 1,
        }
    }

    /// Pixels per glyph cell. Fractional, so the rendered height tracks
    /// `size` to within a pixel.
    pub fn scale(&self) -> f32 {
        self.size as f32 / EM_ROWS as f32
    }

    /// Rendered size of one glyph in pixels.
    fn glyph_box(&self) -> (u32, u32) {
        let scale = self.scale();
        (scaled(GLYPH_WIDTH, scale), scaled(GLYPH_HEIGHT, scale))
    }

    /// Left edge of the `index`th character relative to the text origin.
    fn char_offset(&self, index: usize) -> i64 {
        (index as f32 * (GLYPH_WIDTH + 1) as f32 * self.scale()).round() as i64
    }
}

fn scaled(cells: u32, scale: f32) -> u32 {
    ((cells as f32 * scale).round() as u32).max(1)
}

/// Width and height of the filled area of `text`, outline excluded.
pub fn measure_text(text: &str, style: &TextStyle) -> (u32, u32) {
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    let (glyph_w, glyph_h) = style.glyph_box();
    let width = style.char_offset(count as usize - 1) as u32 + glyph_w;
    (width, glyph_h)
}

/// Draw `text` anchored by `gravity`. Pixels falling outside the image are
/// clipped.
pub fn draw_text(image: &mut RgbImage, text: &str, gravity: Gravity, style: &TextStyle) {
    let origin = anchor(image.dimensions(), measure_text(text, style), gravity, style);
    let reach = style.stroke_width as i64;

    if reach > 0 {
        for_each_lit_pixel(text, origin, style, |x, y| {
            for dy in -reach..=reach {
                for dx in -reach..=reach {
                    put(image, x + dx, y + dy, style.stroke);
                }
            }
        });
    }
    for_each_lit_pixel(text, origin, style, |x, y| put(image, x, y, style.fill));
}

fn anchor(
    (width, height): (u32, u32),
    (text_w, text_h): (u32, u32),
    gravity: Gravity,
    style: &TextStyle,
) -> (i64, i64) {
    let (w, h) = (width as i64, height as i64);
    let (tw, th) = (text_w as i64, text_h as i64);
    let margin = style.stroke_width as i64;

    let centered_x = (w - tw) / 2;
    let centered_y = (h - th) / 2;

    match gravity {
        Gravity::Center => (centered_x, centered_y),
        Gravity::North => (centered_x, margin),
        Gravity::South => (centered_x, h - th - margin),
        Gravity::West => (margin, centered_y),
        Gravity::East => (w - tw - margin, centered_y),
    }
}

fn for_each_lit_pixel(
    text: &str,
    (x0, y0): (i64, i64),
    style: &TextStyle,
    mut f: impl FnMut(i64, i64),
) {
    let (glyph_w, glyph_h) = style.glyph_box();

    for (i, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let gx = x0 + style.char_offset(i);

        // Sample each destination pixel at the centre of its glyph cell
        for dy in 0..glyph_h {
            let bits = rows[((2 * dy + 1) * GLYPH_HEIGHT / (2 * glyph_h)) as usize];
            for dx in 0..glyph_w {
                let col = (2 * dx + 1) * GLYPH_WIDTH / (2 * glyph_w);
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    f(gx + dx as i64, y0 + dy as i64);
                }
            }
        }
    }
}

#[inline]
fn put(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn canvas(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, GRAY)
    }

    /// Bounding box (min_x, min_y, max_x, max_y) of pixels equal to `color`.
    fn bounds_of(img: &RgbImage, color: Rgb<u8>) -> Option<(u32, u32, u32, u32)> {
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for (x, y, p) in img.enumerate_pixels() {
            if *p == color {
                found = Some(match found {
                    None => (x, y, x, y),
                    Some((a, b, c, d)) => (a.min(x), b.min(y), c.max(x), d.max(y)),
                });
            }
        }
        found
    }

    #[test]
    fn test_style_for_dimension() {
        let style = TextStyle::for_dimension(800);
        assert_eq!(style.size, 40);
        assert_eq!(style.scale(), 5.0);
        assert_eq!(style.glyph_box(), (25, 35));
        assert_eq!(TextStyle::for_dimension(10).size, 1);
        assert_eq!(TextStyle::for_dimension(10).glyph_box(), (1, 1));
    }

    #[test]
    fn test_measure_text() {
        let style = TextStyle::for_dimension(800);
        // 3 glyphs of 5 columns with 1 column gaps, times scale 5
        assert_eq!(measure_text("top", &style), (85, 35));
        // Scale 1.25: offsets 0, 8, 15 and 6x9 glyphs
        assert_eq!(measure_text("top", &TextStyle::for_dimension(200)), (21, 9));
        assert_eq!(measure_text("", &style), (0, 0));
    }

    #[test]
    fn test_rendered_height_tracks_font_size() {
        let mut previous = 0;
        for dimension in [160, 200, 300, 319, 320, 800] {
            let style = TextStyle::for_dimension(dimension);
            let mut img = canvas(dimension, dimension);
            draw_text(&mut img, "8", Gravity::Center, &style);

            let (_, min_y, _, max_y) = bounds_of(&img, WHITE).unwrap();
            let height = max_y - min_y + 1;
            let expected = style.size as f32 * GLYPH_HEIGHT as f32 / EM_ROWS as f32;
            assert!(
                (height as f32 - expected).abs() <= 1.0,
                "dimension {}: height {} for size {}",
                dimension,
                height,
                style.size
            );
            assert!(height >= previous, "dimension {} renders smaller text", dimension);
            previous = height;
        }
    }

    #[test]
    fn test_north_label_touches_top_margin() {
        let mut img = canvas(200, 200);
        let style = TextStyle::for_dimension(200);
        draw_text(&mut img, "top", Gravity::North, &style);

        let (tw, th) = measure_text("top", &style);
        let (min_x, min_y, max_x, max_y) = bounds_of(&img, WHITE).unwrap();
        assert_eq!(min_y, 1);
        assert!(max_y < 1 + th);
        assert!(min_x >= (200 - tw) / 2 && max_x < (200 + tw) / 2 + 1);
    }

    #[test]
    fn test_south_east_west_anchors() {
        let style = TextStyle::for_dimension(160);

        let mut img = canvas(160, 120);
        draw_text(&mut img, "bottom", Gravity::South, &style);
        let (_, _, _, max_y) = bounds_of(&img, WHITE).unwrap();
        assert_eq!(max_y, 120 - 2);

        let mut img = canvas(160, 120);
        draw_text(&mut img, "right", Gravity::East, &style);
        let (_, _, max_x, _) = bounds_of(&img, WHITE).unwrap();
        assert_eq!(max_x, 160 - 2);

        let mut img = canvas(160, 120);
        draw_text(&mut img, "left", Gravity::West, &style);
        let (min_x, _, _, _) = bounds_of(&img, WHITE).unwrap();
        // 'l' has an empty first column
        assert_eq!(min_x, 2);
    }

    #[test]
    fn test_center_label_is_centered() {
        let mut img = canvas(100, 100);
        let style = TextStyle::for_dimension(400);
        draw_text(&mut img, "8", Gravity::Center, &style);

        let (min_x, min_y, max_x, max_y) = bounds_of(&img, WHITE).unwrap();
        let (tw, th) = measure_text("8", &style);
        assert_eq!((max_x - min_x + 1, max_y - min_y + 1), (tw, th));
        assert_eq!(min_x, (100 - tw) / 2);
        assert_eq!(min_y, (100 - th) / 2);
    }

    #[test]
    fn test_fill_is_outlined() {
        let mut img = canvas(100, 100);
        let style = TextStyle::for_dimension(100);
        draw_text(&mut img, "1", Gravity::Center, &style);

        // Every fill pixel sits inside the outline: no fill touches the background
        for (x, y, p) in img.enumerate_pixels() {
            if *p != WHITE {
                continue;
            }
            for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                assert_ne!(*img.get_pixel(nx, ny), GRAY, "fill at ({}, {}) is exposed", x, y);
            }
        }
        assert!(bounds_of(&img, BLACK).is_some());
    }

    #[test]
    fn test_no_stroke_draws_fill_only() {
        let mut img = canvas(60, 60);
        let mut style = TextStyle::for_dimension(60);
        style.stroke_width = 0;
        draw_text(&mut img, "0", Gravity::Center, &style);
        assert!(bounds_of(&img, BLACK).is_none());
        assert!(bounds_of(&img, WHITE).is_some());
    }

    #[test]
    fn test_text_wider_than_image_is_clipped() {
        let mut img = canvas(6, 6);
        let style = TextStyle::for_dimension(200);
        draw_text(&mut img, "bottom", Gravity::South, &style);
        draw_text(&mut img, "right", Gravity::East, &style);
        assert_eq!(img.dimensions(), (6, 6));
    }
}
