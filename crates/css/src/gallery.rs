//! Random gradient gallery.
//!
//! Each entry picks a gradient type, two to four random stops, and a type
//! specific angle or position. All choices come from the supplied
//! [`RandomSource`], so a seeded source reproduces a gallery exactly.

use serde::Serialize;
use style_studio_core::RandomSource;

pub const DEFAULT_COUNT: usize = 20;
/// Upper bound on one gallery; larger requests are clamped.
pub const MAX_COUNT: usize = 200;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";
const SHAPES: &[&str] = &["circle", "ellipse"];
const POSITIONS: &[&str] = &["center", "top left", "top right", "bottom left", "bottom right"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryGradient {
    /// Gradient image, e.g. `linear-gradient(12deg, #A1B2C3, #000000)`.
    pub css: String,
    /// Human-readable label, e.g. `Linear 12°`.
    pub name: String,
    pub colors: Vec<String>,
}

impl GalleryGradient {
    /// The copyable declaration.
    pub fn declaration(&self) -> String {
        format!("background: {};", self.css)
    }
}

/// Uppercase `#RRGGBB`, one draw per digit.
pub fn random_hex<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut hex = String::with_capacity(7);
    hex.push('#');
    for _ in 0..6 {
        hex.push(HEX_DIGITS[rng.next_index(HEX_DIGITS.len())] as char);
    }
    hex
}

pub fn random_gradient<R: RandomSource + ?Sized>(rng: &mut R) -> GalleryGradient {
    let kind = rng.next_index(3);
    let count = rng.next_index(3) + 2;
    let colors: Vec<String> = (0..count).map(|_| random_hex(&mut *rng)).collect();
    let stops = colors.join(", ");

    let (css, name) = match kind {
        0 => {
            let angle = rng.next_index(360);
            (
                format!("linear-gradient({angle}deg, {stops})"),
                format!("Linear {angle}°"),
            )
        }
        1 => {
            let shape = SHAPES[rng.next_index(SHAPES.len())];
            let position = POSITIONS[rng.next_index(POSITIONS.len())];
            (
                format!("radial-gradient({shape} at {position}, {stops})"),
                format!("Radial {shape} at {position}"),
            )
        }
        _ => {
            let angle = rng.next_index(360);
            (
                format!("conic-gradient(from {angle}deg, {stops})"),
                format!("Conic from {angle}°"),
            )
        }
    };
    GalleryGradient { css, name, colors }
}

/// `count` independent gradients, at most [`MAX_COUNT`].
pub fn gallery<R: RandomSource + ?Sized>(count: usize, rng: &mut R) -> Vec<GalleryGradient> {
    if count > MAX_COUNT {
        tracing::warn!(requested = count, max = MAX_COUNT, "clamping gallery size");
    }
    let count = count.min(MAX_COUNT);
    let gradients: Vec<GalleryGradient> = (0..count).map(|_| random_gradient(&mut *rng)).collect();
    tracing::debug!(count, "generated gradient gallery");
    gradients
}
