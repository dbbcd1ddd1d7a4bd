pub type Colour = u32; // Packed RGBA, 0xRRGGBBAA
pub type ColourIdx = u8; // Index into the 64-entry palette
pub type SpriteIdx = u8; // Index into the sprite sheet
pub type PixelCoord = u8; // Coordinate inside an 8x8 tile (0-7)
pub type ScreenCoord = i32; // Coordinate in the screen buffer, may fall outside it

pub const SCREEN_WIDTH: usize = 640;
pub const SCREEN_HEIGHT: usize = 360;
pub const DEFAULT_WINDOW_SCALE: u32 = 2;

pub const BUTTON_SIZE: usize = 16;
pub const COLOURS: usize = 64;
pub const COLUMNS: usize = 4;
pub const PALETTE_X: usize = 512;
pub const PALETTE_Y: usize = 64;

pub const TILE_SIZE: usize = 8;
pub const N_TILES: usize = 128;
pub const SPRITE_COLUMNS: usize = 8;
pub const SHEET_SCALE: usize = 2;
pub const SPRITE_SHEET_X: usize = 50;
pub const SPRITE_SHEET_Y: usize = 50;

// Zoom factor of the drawing canvas
pub const RENDER_SIZE: usize = 24;
pub const CANVAS_SIZE: usize = RENDER_SIZE * TILE_SIZE;
pub const CANVAS_X: usize = SCREEN_WIDTH / 2 - CANVAS_SIZE / 2;
pub const CANVAS_Y: usize = SCREEN_HEIGHT / 2 - CANVAS_SIZE / 2;

pub const BACKGROUND: Colour = 0x232324ff;
pub const GRID: Colour = 0x000000ff;
pub const HIGHLIGHT: Colour = 0xfefefeff; // Must not be a palette colour

pub const DEFAULT_FPS: u32 = 60;
