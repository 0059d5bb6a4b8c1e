//! Neighborhood color sampling.
//!
//! [`neighborhood`] is the single window walk shared by the stored sample
//! ([`sample_neighborhood`]) and the magnifier preview, so what the preview
//! outlines is exactly what gets averaged.

use image::RgbaImage;

/// 8-bit RGB color. Alpha is ignored by sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Parse `#RRGGBB` (case-insensitive). Anything else is `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Format channels as `#RRGGBB`, each zero-padded uppercase hex.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// One cell of a square window around a center pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowCell {
    /// Column offset from the center, in `-radius..=radius`.
    pub dx: i64,
    /// Row offset from the center, in `-radius..=radius`.
    pub dy: i64,
    /// Pixel color, or `None` when the cell falls outside the image.
    pub color: Option<Rgb>,
}

/// Walk the `(2 * radius + 1)^2` window centered on `(cx, cy)`, row by row.
pub fn neighborhood(
    buffer: &RgbaImage,
    cx: u32,
    cy: u32,
    radius: u32,
) -> impl Iterator<Item = WindowCell> + '_ {
    let r = radius as i64;
    let (w, h) = (buffer.width() as i64, buffer.height() as i64);
    let (cx, cy) = (cx as i64, cy as i64);

    (-r..=r).flat_map(move |dy| {
        (-r..=r).map(move |dx| {
            let px = cx + dx;
            let py = cy + dy;
            let color = (px >= 0 && py >= 0 && px < w && py < h).then(|| {
                let p = buffer.get_pixel(px as u32, py as u32).0;
                Rgb::new(p[0], p[1], p[2])
            });
            WindowCell { dx, dy, color }
        })
    })
}

/// Average the in-bounds pixels of the window around `(cx, cy)`.
///
/// Each channel is averaged independently and rounded half up; the
/// denominator is the number of in-bounds pixels. Returns `None` if the
/// center lies outside the image.
pub fn sample_neighborhood(buffer: &RgbaImage, cx: u32, cy: u32, radius: u32) -> Option<Rgb> {
    if cx >= buffer.width() || cy >= buffer.height() {
        return None;
    }

    let (mut r, mut g, mut b, mut n) = (0u64, 0u64, 0u64, 0u64);
    for color in neighborhood(buffer, cx, cy, radius).filter_map(|cell| cell.color) {
        r += color.r as u64;
        g += color.g as u64;
        b += color.b as u64;
        n += 1;
    }

    let avg = |sum: u64| ((sum + n / 2) / n) as u8;
    Some(Rgb::new(avg(r), avg(g), avg(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_accepts_lowercase() {
        assert_eq!(Rgb::from_hex("#0b00a0"), Some(Rgb::new(11, 0, 160)));
    }

    #[test]
    fn hex_parse_rejects_malformed() {
        assert_eq!(Rgb::from_hex("0B00A0"), None);
        assert_eq!(Rgb::from_hex("#0B00A"), None);
        assert_eq!(Rgb::from_hex("#GG0000"), None);
        assert_eq!(Rgb::from_hex(""), None);
    }

    #[test]
    fn window_has_full_cell_count() {
        let img = RgbaImage::new(2, 2);
        assert_eq!(neighborhood(&img, 0, 0, 1).count(), 9);
        assert_eq!(neighborhood(&img, 0, 0, 1).filter(|c| c.color.is_some()).count(), 4);
    }
}
