use clap::Parser;
use iced::Size;

use crate::common::{DEFAULT_FPS, DEFAULT_WINDOW_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Parser, Debug)]
#[command(about = "Minimal pixel-art sprite editor")]
pub struct Args {
    /// Frames rendered per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Initial window size as a multiple of the 640x360 screen
    #[arg(long, default_value_t = DEFAULT_WINDOW_SCALE, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,
}

impl Args {
    pub fn window_size(&self) -> Size {
        Size::new(
            (SCREEN_WIDTH as u32 * self.scale) as f32,
            (SCREEN_HEIGHT as u32 * self.scale) as f32,
        )
    }
}

pub fn min_window_size() -> Size {
    Size::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)
}
