use iced::{time::Instant, window};

use crate::common::ScreenCoord;

#[derive(Debug, Clone)]
pub enum Message {
    Event(iced::Event),
    Mouse(MouseEvent),
    Tick(Instant),
    WindowClose(window::Id),
}

// Mouse activity over the screen, already mapped to buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Pressed(ScreenCoord, ScreenCoord),
    Released(ScreenCoord, ScreenCoord),
    Moved(ScreenCoord, ScreenCoord),
    Left,
}
