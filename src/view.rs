mod screen;

use iced::{widget::canvas, Element, Length};
use screen::Screen;

use crate::{message::Message, state::EditorState};

pub fn view(state: &EditorState) -> Element<Message> {
    canvas(Screen {
        buffer: &state.buffer,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
