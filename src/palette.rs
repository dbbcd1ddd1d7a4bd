// The fixed 64-colour palette: every combination of 2-bit red, green and blue.
use crate::{
    common::{Colour, ColourIdx, COLOURS},
    helpers::{pack_rgb, scale_channel},
};

pub const PALETTE: [Colour; COLOURS] = build_palette();

const fn build_palette() -> [Colour; COLOURS] {
    let mut colours = [0; COLOURS];
    let mut n = 0;
    while n < COLOURS {
        let i = n as u32;
        colours[n] = pack_rgb(
            scale_channel((i >> 4) & 3),
            scale_channel((i >> 2) & 3),
            scale_channel(i & 3),
        );
        n += 1;
    }
    colours
}

pub fn colour(idx: ColourIdx) -> Colour {
    PALETTE[idx as usize]
}
