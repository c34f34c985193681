// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the lightbox image and reporting presses on it.
//!
//! The stage sits at the bottom of the lightbox stack, under the controls, so
//! buttons keep receiving their own clicks whatever the zoom factor. Presses
//! are published with their window position, which is the coordinate space
//! of the window-wide stroke listener.

use super::component::Message;
use super::view::{fit_box, image_interaction};
use iced::advanced::image::Renderer as _;
use iced::widget::canvas;
use iced::widget::image;
use iced::{mouse, touch, Point, Rectangle, Size, Vector};
use std::cell::Cell;

/// Rectangle covered by the image inside `stage`.
///
/// The image is fitted (`ContentFit::Contain`) into the unzoomed box, scaled
/// by `zoom` around its center, then moved by `offset`. Without intrinsic
/// dimensions the image fills the box.
#[must_use]
pub fn image_bounds(
    stage: Rectangle,
    intrinsic: Option<Size>,
    zoom: f32,
    offset: Vector,
) -> Rectangle {
    let fit = fit_box(stage.size());

    let fitted = match intrinsic {
        Some(size) if size.width > 0.0 && size.height > 0.0 => {
            let scale = (fit.width / size.width).min(fit.height / size.height);
            Size::new(size.width * scale, size.height * scale)
        }
        _ => fit,
    };

    let size = Size::new(fitted.width * zoom, fitted.height * zoom);
    let center = stage.center() + offset;

    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

/// Per-widget state kept by the canvas between frames.
#[derive(Debug, Default)]
pub struct StageState {
    /// Image dimensions measured during the last draw.
    intrinsic: Cell<Option<Size>>,
}

/// Canvas program used to draw the current card and route presses.
#[derive(Debug, Clone)]
pub struct Stage {
    pub handle: image::Handle,
    pub zoom: f32,
    /// Pan offset plus slide-in offset.
    pub offset: Vector,
    pub opacity: f32,
    pub is_zoomed: bool,
    pub is_dragging: bool,
}

impl Stage {
    fn bounds_in(&self, state: &StageState, stage: Rectangle) -> Rectangle {
        image_bounds(stage, state.intrinsic.get(), self.zoom, self.offset)
    }

    /// Message for a press at `position` (window coordinates).
    fn press(&self, state: &StageState, stage: Rectangle, position: Point) -> Message {
        if self.bounds_in(state, stage).contains(position) {
            Message::ImagePressed(position)
        } else {
            Message::BackdropPressed(position)
        }
    }
}

impl canvas::Program<Message> for Stage {
    type State = StageState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let position = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_over(bounds)?
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. })
                if bounds.contains(*position) =>
            {
                *position
            }
            _ => return None,
        };

        Some(canvas::Action::publish(self.press(state, bounds, position)).and_capture())
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        #[allow(clippy::cast_precision_loss)]
        let measured = renderer
            .measure_image(&self.handle)
            .map(|size| Size::new(size.width as f32, size.height as f32));
        state.intrinsic.set(measured);

        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // The frame is local to the canvas; image bounds are in window space.
        let target = self.bounds_in(state, bounds) - Vector::new(bounds.x, bounds.y);
        frame.draw_image(
            target,
            canvas::Image::new(self.handle.clone()).opacity(self.opacity),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let over_image = cursor
            .position_over(bounds)
            .is_some_and(|position| self.bounds_in(state, bounds).contains(position));

        if over_image || self.is_dragging {
            image_interaction(self.is_zoomed, self.is_dragging)
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(1000.0, 800.0))
    }

    fn stage(zoom: f32, offset: Vector) -> Stage {
        Stage {
            handle: image::Handle::from_path("card1.png"),
            zoom,
            offset,
            opacity: 1.0,
            is_zoomed: zoom > 1.0,
            is_dragging: false,
        }
    }

    fn approx(a: Rectangle, b: Rectangle) -> bool {
        (a.x - b.x).abs() < 1e-3
            && (a.y - b.y).abs() < 1e-3
            && (a.width - b.width).abs() < 1e-3
            && (a.height - b.height).abs() < 1e-3
    }

    #[test]
    fn unknown_dimensions_fill_the_fit_box() {
        let bounds = image_bounds(window(), None, 1.0, Vector::ZERO);
        let expected = Rectangle::new(Point::new(50.0, 80.0), Size::new(900.0, 640.0));
        assert!(approx(bounds, expected));
    }

    #[test]
    fn portrait_card_is_contained_and_centered() {
        let card = Some(Size::new(320.0, 640.0));
        let bounds = image_bounds(window(), card, 1.0, Vector::ZERO);
        let expected = Rectangle::new(Point::new(340.0, 80.0), Size::new(320.0, 640.0));
        assert!(approx(bounds, expected));
    }

    #[test]
    fn zoom_scales_around_center_and_offset_moves() {
        let bounds = image_bounds(
            window(),
            Some(Size::new(320.0, 640.0)),
            2.0,
            Vector::new(30.0, -10.0),
        );
        let expected = Rectangle::new(Point::new(210.0, -250.0), Size::new(640.0, 1280.0));
        assert!(approx(bounds, expected));
    }

    #[test]
    fn presses_are_split_between_image_and_backdrop() {
        let state = StageState::default();
        let stage = stage(1.0, Vector::ZERO);

        assert!(matches!(
            stage.press(&state, window(), Point::new(500.0, 400.0)),
            Message::ImagePressed(p) if p == Point::new(500.0, 400.0)
        ));
        assert!(matches!(
            stage.press(&state, window(), Point::new(10.0, 10.0)),
            Message::BackdropPressed(_)
        ));
    }

    #[test]
    fn panned_image_follows_its_offset() {
        let state = StageState::default();
        let stage = stage(1.5, Vector::new(400.0, 0.0));

        // The zoomed box now spans x in [225, 1575].
        assert!(matches!(
            stage.press(&state, window(), Point::new(100.0, 400.0)),
            Message::BackdropPressed(_)
        ));
        assert!(matches!(
            stage.press(&state, window(), Point::new(990.0, 400.0)),
            Message::ImagePressed(_)
        ));
    }
}
