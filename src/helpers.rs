use crate::common::Colour;

pub fn rgba_bytes(c: Colour) -> [u8; 4] {
    c.to_be_bytes()
}

// Expands a 2-bit channel value (0-3) to the full 8-bit range.
pub const fn scale_channel(c: u32) -> u32 {
    c * 0x55
}

pub const fn pack_rgb(r: u32, g: u32, b: u32) -> Colour {
    (r << 24) | (g << 16) | (b << 8) | 0xff
}
