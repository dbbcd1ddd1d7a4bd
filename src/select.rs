// Hit-testing of the mouse position against palette buttons, sheet tiles and the canvas.
use crate::{
    common::{
        ColourIdx, PixelCoord, ScreenCoord, SpriteIdx, CANVAS_X, CANVAS_Y, RENDER_SIZE, TILE_SIZE,
    },
    state::{ColourButton, MouseInput, Sprite},
};

/// Returns the colour index of the last button containing the mouse, if any.
pub fn colour_select(buttons: &[ColourButton], mouse: &MouseInput) -> Option<ColourIdx> {
    buttons
        .iter()
        .rev()
        .find(|b| b.contains(mouse.x, mouse.y))
        .map(|b| b.colour_idx)
}

/// Returns the index of the last sheet tile containing the mouse, if any.
pub fn sprite_select(sheet: &[Sprite], mouse: &MouseInput) -> Option<SpriteIdx> {
    sheet
        .iter()
        .rev()
        .find(|s| s.contains(mouse.x, mouse.y))
        .map(|s| s.index)
}

/// Maps a screen position to a cell of the zoomed canvas.
pub fn canvas_pixel(x: ScreenCoord, y: ScreenCoord) -> Option<(PixelCoord, PixelCoord)> {
    let size = RENDER_SIZE as ScreenCoord;
    let px = (x - CANVAS_X as ScreenCoord).div_euclid(size);
    let py = (y - CANVAS_Y as ScreenCoord).div_euclid(size);
    let range = 0..TILE_SIZE as ScreenCoord;
    if range.contains(&px) && range.contains(&py) {
        Some((px as PixelCoord, py as PixelCoord))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CANVAS_SIZE;

    fn mouse(x: ScreenCoord, y: ScreenCoord) -> MouseInput {
        MouseInput {
            pressed: true,
            x,
            y,
        }
    }

    #[test]
    fn test_colour_select_hit_and_miss() {
        let buttons = [ColourButton::new(3, 10, 10), ColourButton::new(4, 26, 10)];
        assert_eq!(colour_select(&buttons, &mouse(10, 10)), Some(3));
        assert_eq!(colour_select(&buttons, &mouse(25, 25)), Some(3));
        assert_eq!(colour_select(&buttons, &mouse(26, 10)), Some(4));
        assert_eq!(colour_select(&buttons, &mouse(9, 10)), None);
        assert_eq!(colour_select(&buttons, &mouse(10, 26)), None);
        assert_eq!(colour_select(&buttons, &mouse(42, 10)), None);
    }

    #[test]
    fn test_overlapping_buttons_last_scanned_wins() {
        let buttons = [ColourButton::new(1, 0, 0), ColourButton::new(2, 8, 8)];
        assert_eq!(colour_select(&buttons, &mouse(10, 10)), Some(2));
        assert_eq!(colour_select(&buttons, &mouse(2, 2)), Some(1));
    }

    #[test]
    fn test_sprite_select_uses_doubled_tile_bounds() {
        let sheet = [Sprite::new(0, 50, 50), Sprite::new(1, 66, 50)];
        assert_eq!(sprite_select(&sheet, &mouse(50, 50)), Some(0));
        assert_eq!(sprite_select(&sheet, &mouse(65, 65)), Some(0));
        assert_eq!(sprite_select(&sheet, &mouse(66, 65)), Some(1));
        assert_eq!(sprite_select(&sheet, &mouse(66, 66)), None);
        assert_eq!(sprite_select(&sheet, &mouse(49, 50)), None);
    }

    #[test]
    fn test_canvas_pixel_bounds() {
        let x0 = CANVAS_X as ScreenCoord;
        let y0 = CANVAS_Y as ScreenCoord;
        let size = CANVAS_SIZE as ScreenCoord;
        assert_eq!(canvas_pixel(x0, y0), Some((0, 0)));
        assert_eq!(canvas_pixel(x0 + 23, y0 + 24), Some((0, 1)));
        assert_eq!(canvas_pixel(x0 + size - 1, y0 + size - 1), Some((7, 7)));
        assert_eq!(canvas_pixel(x0 + size, y0), None);
        assert_eq!(canvas_pixel(x0, y0 + size), None);
    }

    #[test]
    fn test_canvas_pixel_rejects_points_just_before_canvas() {
        let x0 = CANVAS_X as ScreenCoord;
        let y0 = CANVAS_Y as ScreenCoord;
        assert_eq!(canvas_pixel(x0 - 1, y0), None);
        assert_eq!(canvas_pixel(x0, y0 - 1), None);
        assert_eq!(canvas_pixel(x0 - 23, y0 - 23), None);
    }
}
