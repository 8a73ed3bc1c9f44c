//! Positional text markers burned into each fixture.
//!
//! Every fixture gets its orientation code in the middle and the words
//! "top", "bottom", "left" and "right" along the matching edges, drawn before
//! the geometric transform so they show where each edge ended up.

mod glyphs;
mod text;

pub use text::{draw_text, measure_text, Gravity, TextStyle};

use image::RgbImage;

/// Edge labels and their anchors.
pub const EDGE_LABELS: [(&str, Gravity); 4] = [
    ("top", Gravity::North),
    ("bottom", Gravity::South),
    ("right", Gravity::East),
    ("left", Gravity::West),
];

/// Draw the orientation code and the four edge labels.
pub fn annotate_fixture(image: &mut RgbImage, code: u16) {
    let style = TextStyle::for_dimension(image.width().max(image.height()));
    draw_text(image, &code.to_string(), Gravity::Center, &style);
    for (label, gravity) in EDGE_LABELS {
        draw_text(image, label, gravity, &style);
    }
}
