use hashbrown::HashSet;
use iced::{
    keyboard::{self, Key},
    time::Instant,
};
use log::{debug, trace};

use crate::{
    common::{
        Colour, ColourIdx, PixelCoord, ScreenCoord, SpriteIdx, BACKGROUND, BUTTON_SIZE, COLOURS,
        COLUMNS, N_TILES, PALETTE_X, PALETTE_Y, SHEET_SCALE, SPRITE_COLUMNS, SPRITE_SHEET_X,
        SPRITE_SHEET_Y, TILE_SIZE,
    },
    message::MouseEvent,
    pacing::FramePacer,
    palette,
    render::{self, PixelBuffer},
    select,
};

#[derive(Debug, Clone, Copy)]
pub struct ColourButton {
    pub colour: Colour,
    pub colour_idx: ColourIdx,
    pub x: usize,
    pub y: usize,
}

impl ColourButton {
    pub fn new(colour_idx: ColourIdx, x: usize, y: usize) -> Self {
        Self {
            colour: palette::colour(colour_idx),
            colour_idx,
            x,
            y,
        }
    }

    pub fn contains(&self, x: ScreenCoord, y: ScreenCoord) -> bool {
        within(x, self.x, BUTTON_SIZE) && within(y, self.y, BUTTON_SIZE)
    }
}

#[derive(Debug, Clone)]
pub struct Sprite {
    pub colour_data: [ColourIdx; TILE_SIZE * TILE_SIZE],
    pub index: SpriteIdx,
    pub x: usize,
    pub y: usize,
}

impl Sprite {
    pub fn new(index: SpriteIdx, x: usize, y: usize) -> Self {
        Self {
            colour_data: [0; TILE_SIZE * TILE_SIZE],
            index,
            x,
            y,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> ColourIdx {
        self.colour_data[x + y * TILE_SIZE]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, idx: ColourIdx) {
        self.colour_data[x + y * TILE_SIZE] = idx;
    }

    pub fn contains(&self, x: ScreenCoord, y: ScreenCoord) -> bool {
        let size = SHEET_SCALE * TILE_SIZE;
        within(x, self.x, size) && within(y, self.y, size)
    }
}

fn within(p: ScreenCoord, start: usize, len: usize) -> bool {
    let d = p - start as ScreenCoord;
    0 <= d && d < len as ScreenCoord
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub pressed: bool,
    pub x: ScreenCoord,
    pub y: ScreenCoord,
}

impl MouseInput {
    pub fn apply(&mut self, event: MouseEvent) {
        match event {
            MouseEvent::Pressed(x, y) => *self = MouseInput { pressed: true, x, y },
            MouseEvent::Released(x, y) => *self = MouseInput { pressed: false, x, y },
            MouseEvent::Moved(x, y) => {
                self.x = x;
                self.y = y;
            }
            MouseEvent::Left => self.pressed = false,
        }
    }
}

// Keys currently held down.
#[derive(Debug, Default)]
pub struct KeyInput {
    held: HashSet<Key>,
}

impl KeyInput {
    pub fn apply(&mut self, event: &keyboard::Event) {
        match event {
            keyboard::Event::KeyPressed { key, .. } => {
                self.held.insert(key.clone());
            }
            keyboard::Event::KeyReleased { key, .. } => {
                self.held.remove(key);
            }
            _ => {}
        }
    }

    #[cfg(test)]
    pub fn is_pressed(&self, key: &Key) -> bool {
        self.held.contains(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Quit,
}

pub struct EditorState {
    pub buttons: [ColourButton; COLOURS],
    pub sheet: [Sprite; N_TILES],
    pub mouse: MouseInput,
    pub keys: KeyInput,

    // Sole active selection; exactly one button and one tile are highlighted.
    pub colour_idx: ColourIdx,
    pub sprite_idx: SpriteIdx,

    pub buffer: PixelBuffer,
    pub pacer: FramePacer,
    pub run_state: RunState,
}

impl EditorState {
    pub fn new(fps: u32, now: Instant) -> Self {
        let rows = COLOURS / COLUMNS;
        let buttons = std::array::from_fn(|n| {
            let (i, j) = (n % rows, n / rows);
            ColourButton::new(
                n as ColourIdx,
                PALETTE_X + j * BUTTON_SIZE,
                PALETTE_Y + i * BUTTON_SIZE,
            )
        });
        let step = SHEET_SCALE * TILE_SIZE;
        let sheet = std::array::from_fn(|k| {
            Sprite::new(
                k as SpriteIdx,
                SPRITE_SHEET_X + step * (k % SPRITE_COLUMNS),
                SPRITE_SHEET_Y + step * (k / SPRITE_COLUMNS),
            )
        });

        let mut buffer = PixelBuffer::new(BACKGROUND);
        render::draw_background(&mut buffer);

        let mut state = EditorState {
            buttons,
            sheet,
            mouse: MouseInput::default(),
            keys: KeyInput::default(),
            colour_idx: 0,
            sprite_idx: 0,
            buffer,
            pacer: FramePacer::new(fps, now),
            run_state: RunState::Running,
        };
        state.render();
        state
    }

    pub fn current_sprite(&self) -> &Sprite {
        &self.sheet[self.sprite_idx as usize]
    }

    pub fn draw_pixel(&mut self, x: PixelCoord, y: PixelCoord) {
        let colour_idx = self.colour_idx;
        trace!(
            "Painting ({}, {}) of sprite {} with colour {}",
            x,
            y,
            self.current_sprite().index,
            colour_idx
        );
        self.sheet[self.sprite_idx as usize].set_pixel(x as usize, y as usize, colour_idx);
    }

    pub fn apply_click(&mut self) {
        if let Some(idx) = select::colour_select(&self.buttons, &self.mouse) {
            if idx != self.colour_idx {
                debug!("Selected colour {}", idx);
            }
            self.colour_idx = idx;
        }
        if let Some(idx) = select::sprite_select(&self.sheet, &self.mouse) {
            if idx != self.sprite_idx {
                debug!("Selected sprite {}", idx);
            }
            self.sprite_idx = idx;
        }
        if let Some((x, y)) = select::canvas_pixel(self.mouse.x, self.mouse.y) {
            self.draw_pixel(x, y);
        }
    }

    pub fn render(&mut self) {
        for button in &self.buttons {
            render::draw_colour_button(
                &mut self.buffer,
                button,
                button.colour_idx == self.colour_idx,
            );
        }
        render::draw_canvas(&mut self.buffer, &self.sheet[self.sprite_idx as usize]);
        render::draw_sprite_sheet(&mut self.buffer, &self.sheet, self.sprite_idx);
    }

    /// Runs one frame if the pacer allows it; returns whether a frame was drawn.
    pub fn frame(&mut self, now: Instant) -> bool {
        if !self.pacer.due(now) {
            return false;
        }
        if self.mouse.pressed {
            self.apply_click();
        }
        self.render();
        true
    }
}
