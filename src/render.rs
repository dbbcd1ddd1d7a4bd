// Module for rasterizing palette buttons, sprite tiles and the zoomed canvas into the screen buffer.
use itertools::iproduct;

use crate::{
    common::{
        Colour, SpriteIdx, BACKGROUND, BUTTON_SIZE, CANVAS_SIZE, CANVAS_X, CANVAS_Y, GRID,
        HIGHLIGHT, RENDER_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, SHEET_SCALE, TILE_SIZE,
    },
    helpers::rgba_bytes,
    palette,
    state::{ColourButton, Sprite},
};

pub struct PixelBuffer {
    pixels: Vec<Colour>,
}

impl PixelBuffer {
    pub fn new(fill: Colour) -> Self {
        Self {
            pixels: vec![fill; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Colour {
        self.pixels[x + y * SCREEN_WIDTH]
    }

    pub fn set(&mut self, x: usize, y: usize, c: Colour) {
        self.pixels[x + y * SCREEN_WIDTH] = c;
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, c: Colour) {
        for row in y..y + h {
            let start = x + row * SCREEN_WIDTH;
            self.pixels[start..start + w].fill(c);
        }
    }

    // Byte layout expected by the host image: R, G, B, A per pixel.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&c| rgba_bytes(c)).collect()
    }
}

// Writes a `size` x `size` square at (x, y). Selected squares get a one-pixel
// highlight on their outermost ring; everything else comes from `sample`.
fn blit(
    buffer: &mut PixelBuffer,
    x: usize,
    y: usize,
    size: usize,
    selected: bool,
    sample: impl Fn(usize, usize) -> Colour,
) {
    for (j, i) in iproduct!(0..size, 0..size) {
        let border = selected && (i == 0 || i == size - 1 || j == 0 || j == size - 1);
        let c = if border { HIGHLIGHT } else { sample(i, j) };
        buffer.set(x + i, y + j, c);
    }
}

pub fn draw_background(buffer: &mut PixelBuffer) {
    buffer.fill_rect(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT, BACKGROUND);

    // Working grid around the canvas, centred on the screen.
    let cx = (SCREEN_WIDTH / 2) as i32;
    let cy = (SCREEN_HEIGHT / 2) as i32;
    let step = RENDER_SIZE as i32;
    for (i, j) in iproduct!(
        CANVAS_X..=CANVAS_X + CANVAS_SIZE,
        CANVAS_Y..=CANVAS_Y + CANVAS_SIZE
    ) {
        if (i as i32 - cx) % step == 0 || (j as i32 - cy) % step == 0 {
            buffer.set(i, j, GRID);
        }
    }
}

pub fn draw_colour_button(buffer: &mut PixelBuffer, button: &ColourButton, selected: bool) {
    blit(buffer, button.x, button.y, BUTTON_SIZE, selected, |_, _| {
        button.colour
    });
}

pub fn draw_sprite(buffer: &mut PixelBuffer, sprite: &Sprite, scale: usize, selected: bool) {
    blit(
        buffer,
        sprite.x,
        sprite.y,
        scale * TILE_SIZE,
        selected,
        |i, j| palette::colour(sprite.pixel(i / scale, j / scale)),
    );
}

pub fn draw_canvas(buffer: &mut PixelBuffer, sprite: &Sprite) {
    blit(buffer, CANVAS_X, CANVAS_Y, CANVAS_SIZE, false, |i, j| {
        palette::colour(sprite.pixel(i / RENDER_SIZE, j / RENDER_SIZE))
    });
}

pub fn draw_sprite_sheet(buffer: &mut PixelBuffer, sheet: &[Sprite], current: SpriteIdx) {
    for sprite in sheet {
        draw_sprite(buffer, sprite, SHEET_SCALE, sprite.index == current);
    }
}
