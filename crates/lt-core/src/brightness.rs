//! Perceptual brightness of an RGB triple.
//!
//! Uses the ITU-R BT.601 luma weights scaled to integers, with truncating
//! division. Boundary behaviour matters: per-level populations depend on
//! truncation, not rounding.

/// Number of distinct 24-bit RGB values.
pub const RGB_SPACE_SIZE: usize = 1 << 24;

/// Number of brightness levels (0..=255).
pub const LEVEL_COUNT: usize = 256;

const RED_WEIGHT: u32 = 299;
const GREEN_WEIGHT: u32 = 587;
const BLUE_WEIGHT: u32 = 114;
const WEIGHT_SCALE: u32 = 1000;

/// Brightness level of `(r, g, b)`: `floor((299r + 587g + 114b) / 1000)`.
#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> u8 {
    let weighted = RED_WEIGHT * r as u32 + GREEN_WEIGHT * g as u32 + BLUE_WEIGHT * b as u32;
    // max is 255_000 / 1000 = 255
    (weighted / WEIGHT_SCALE) as u8
}

/// Brightness level of a packed `0xRRGGBB` value. Bits above 24 are ignored.
#[inline]
pub fn brightness_of(rgb: u32) -> u8 {
    let (r, g, b) = unpack_rgb(rgb);
    brightness(r, g, b)
}

/// Pack a triple as `(r << 16) | (g << 8) | b`.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub fn unpack_rgb(rgb: u32) -> (u8, u8, u8) {
    ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}
