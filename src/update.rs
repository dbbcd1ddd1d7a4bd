use iced::{window, Event, Subscription, Task};
use log::info;

use crate::{
    message::Message,
    state::{EditorState, RunState},
};

pub fn update(state: &mut EditorState, message: Message) -> Task<Message> {
    match message {
        Message::Event(event) => match event {
            Event::Keyboard(keyboard_event) => state.keys.apply(&keyboard_event),
            _ => {}
        },
        Message::Mouse(mouse_event) => state.mouse.apply(mouse_event),
        Message::Tick(now) => {
            if state.run_state == RunState::Running {
                state.frame(now);
            }
        }
        Message::WindowClose(id) => {
            info!("Close requested, exiting.");
            state.run_state = RunState::Quit;
            return window::close(id);
        }
    }
    Task::none()
}

pub fn subscription(state: &EditorState) -> Subscription<Message> {
    if state.run_state == RunState::Quit {
        return Subscription::none();
    }
    Subscription::batch([
        iced::event::listen().map(Message::Event),
        window::close_requests().map(Message::WindowClose),
        iced::time::every(state.pacer.interval()).map(Message::Tick),
    ])
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::{keyboard, time::Instant};

    use super::*;
    use crate::{
        common::{ScreenCoord, CANVAS_X, CANVAS_Y},
        message::MouseEvent,
    };

    fn key_press(c: &str, code: keyboard::key::Code) -> Message {
        let key = keyboard::Key::Character(c.into());
        Message::Event(Event::Keyboard(keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key,
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
        }))
    }

    fn key_release(c: &str) -> Message {
        Message::Event(Event::Keyboard(keyboard::Event::KeyReleased {
            key: keyboard::Key::Character(c.into()),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
        }))
    }

    #[test]
    fn test_key_state_follows_events() {
        let s = keyboard::Key::Character("s".into());
        let mut state = EditorState::new(60, Instant::now());
        let _ = update(&mut state, key_press("s", keyboard::key::Code::KeyS));
        assert!(state.keys.is_pressed(&s));
        let _ = update(&mut state, key_release("s"));
        assert!(!state.keys.is_pressed(&s));
    }

    #[test]
    fn test_key_release_only_clears_that_key() {
        let s = keyboard::Key::Character("s".into());
        let d = keyboard::Key::Character("d".into());
        let mut state = EditorState::new(60, Instant::now());
        let _ = update(&mut state, key_press("s", keyboard::key::Code::KeyS));
        let _ = update(&mut state, key_press("d", keyboard::key::Code::KeyD));
        let _ = update(&mut state, key_release("d"));
        assert!(state.keys.is_pressed(&s));
        assert!(!state.keys.is_pressed(&d));
    }

    #[test]
    fn test_mouse_press_then_tick_paints() {
        let start = Instant::now();
        let mut state = EditorState::new(60, start);
        state.colour_idx = 11;
        let (x, y) = (CANVAS_X as ScreenCoord + 30, CANVAS_Y as ScreenCoord + 50);
        let _ = update(&mut state, Message::Mouse(MouseEvent::Pressed(x, y)));
        let _ = update(&mut state, Message::Tick(start + Duration::from_millis(16)));
        assert_eq!(state.current_sprite().pixel(1, 2), 11);
    }

    #[test]
    fn test_quit_stops_frames() {
        let start = Instant::now();
        let mut state = EditorState::new(60, start);
        let _ = update(&mut state, Message::WindowClose(window::Id::unique()));
        assert_eq!(state.run_state, RunState::Quit);

        state.colour_idx = 11;
        state.mouse.apply(MouseEvent::Pressed(CANVAS_X as ScreenCoord, CANVAS_Y as ScreenCoord));
        let _ = update(&mut state, Message::Tick(start + Duration::from_millis(16)));
        assert_eq!(state.current_sprite().pixel(0, 0), 0);
    }
}
