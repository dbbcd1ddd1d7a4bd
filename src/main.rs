use anyhow::{Context, Result};
use clap::Parser;
use config::Args;
use iced::{time::Instant, window, Task, Theme};
use log::{error, info};
use state::EditorState;

mod common;
mod config;
mod helpers;
mod message;
mod pacing;
mod palette;
mod render;
mod select;
mod state;
mod update;
mod view;

fn theme(_state: &EditorState) -> Theme {
    match dark_light::detect().unwrap_or(dark_light::Mode::Unspecified) {
        dark_light::Mode::Light => Theme::Light,
        dark_light::Mode::Dark | dark_light::Mode::Unspecified => Theme::Dark,
    }
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let size = args.window_size();
    info!(
        "Opening {}x{} window at {} fps",
        size.width, size.height, args.fps
    );

    let fps = args.fps;
    let result = iced::application("Sprite Editor", update::update, view::view)
        .subscription(update::subscription)
        .theme(theme)
        .window(window::Settings {
            size,
            min_size: Some(config::min_window_size()),
            resizable: true,
            exit_on_close_request: false,
            ..Default::default()
        })
        .run_with(move || (EditorState::new(fps, Instant::now()), Task::none()));

    if let Err(e) = &result {
        error!("Could not create window: {}", e);
    }
    result.context("Could not create window")
}
