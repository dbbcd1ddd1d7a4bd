// Module for presenting the screen buffer and translating mouse input back into buffer coordinates.
use iced::{mouse, widget::canvas, Point, Rectangle, Size};

use crate::{
    common::{ScreenCoord, SCREEN_HEIGHT, SCREEN_WIDTH},
    message::{Message, MouseEvent},
    render::PixelBuffer,
};

/// Placement of the screen buffer inside the window: the largest integer
/// scale that fits, centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: Point,
}

impl Viewport {
    pub fn fit(size: Size) -> Self {
        let width = SCREEN_WIDTH as f32;
        let height = SCREEN_HEIGHT as f32;
        let scale = f32::min(
            (size.width / width).floor(),
            (size.height / height).floor(),
        )
        .max(1.0);
        let offset = Point {
            x: f32::max((size.width - width * scale) / 2.0, 0.0).floor(),
            y: f32::max((size.height - height * scale) / 2.0, 0.0).floor(),
        };
        Self { scale, offset }
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.offset,
            Size {
                width: SCREEN_WIDTH as f32 * self.scale,
                height: SCREEN_HEIGHT as f32 * self.scale,
            },
        )
    }

    pub fn to_buffer(&self, p: Point) -> (ScreenCoord, ScreenCoord) {
        let x = ((p.x - self.offset.x) / self.scale).floor() as ScreenCoord;
        let y = ((p.y - self.offset.y) / self.scale).floor() as ScreenCoord;
        (x, y)
    }
}

pub struct Screen<'a> {
    pub buffer: &'a PixelBuffer,
}

impl<'a> canvas::Program<Message> for Screen<'a> {
    // No internal state
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let canvas::Event::Mouse(mouse_event) = event else {
            return (canvas::event::Status::Ignored, None);
        };
        if matches!(mouse_event, mouse::Event::CursorLeft) {
            return (
                canvas::event::Status::Captured,
                Some(Message::Mouse(MouseEvent::Left)),
            );
        }
        let Some(p) = cursor.position_in(bounds) else {
            return (canvas::event::Status::Ignored, None);
        };

        let (x, y) = Viewport::fit(bounds.size()).to_buffer(p);
        let event = match mouse_event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => MouseEvent::Pressed(x, y),
            mouse::Event::ButtonReleased(mouse::Button::Left) => MouseEvent::Released(x, y),
            mouse::Event::CursorMoved { .. } => MouseEvent::Moved(x, y),
            _ => return (canvas::event::Status::Ignored, None),
        };
        (canvas::event::Status::Captured, Some(Message::Mouse(event)))
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let viewport = Viewport::fit(bounds.size());

        let image = iced::advanced::image::Image::new(iced::advanced::image::Handle::from_rgba(
            SCREEN_WIDTH as u32,
            SCREEN_HEIGHT as u32,
            self.buffer.to_rgba(),
        ))
        .filter_method(iced::widget::image::FilterMethod::Nearest)
        .snap(true);

        frame.draw_image(viewport.bounds(), image);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_exact_double_size() {
        let viewport = Viewport::fit(Size::new(1280.0, 720.0));
        assert_eq!(viewport.scale, 2.0);
        assert_eq!(viewport.offset, Point::ORIGIN);
        assert_eq!(viewport.to_buffer(Point::new(1279.0, 719.0)), (639, 359));
    }

    #[test]
    fn test_fit_uses_integer_scale_and_centres() {
        // Width allows 3x but height only 2x.
        let viewport = Viewport::fit(Size::new(2000.0, 800.0));
        assert_eq!(viewport.scale, 2.0);
        assert_eq!(viewport.offset, Point::new(360.0, 40.0));
        assert_eq!(viewport.to_buffer(Point::new(360.0, 40.0)), (0, 0));
        assert_eq!(viewport.to_buffer(Point::new(363.0, 43.0)), (1, 1));
    }

    #[test]
    fn test_letterbox_maps_outside_buffer() {
        let viewport = Viewport::fit(Size::new(2000.0, 800.0));
        assert_eq!(viewport.to_buffer(Point::new(359.0, 39.0)), (-1, -1));
        let (x, _) = viewport.to_buffer(Point::new(1640.0, 100.0));
        assert_eq!(x, 640);
    }

    #[test]
    fn test_fit_never_scales_below_one() {
        let viewport = Viewport::fit(Size::new(320.0, 180.0));
        assert_eq!(viewport.scale, 1.0);
        assert_eq!(viewport.offset, Point::ORIGIN);
        assert_eq!(viewport.bounds().size(), Size::new(640.0, 360.0));
    }
}
