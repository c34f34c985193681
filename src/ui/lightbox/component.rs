// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating state and update logic.
//!
//! Wraps the [`Controller`] state machine with the pointer bookkeeping of the
//! [`GestureAdapter`] and the slide-in cue, and turns user input into
//! [`Effect`]s for the application to record.

use super::controller::{Controller, Navigation};
use super::gesture::{GestureAdapter, Swipe};
use super::transition::SlideIn;
use crate::ui::state::ZoomSteps;
use iced::{event, keyboard, mouse, time, touch, window, Point, Subscription};
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Interval between slide-in animation frames (~60 FPS).
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Messages emitted by the lightbox overlay and its listeners.
#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    Close,
    Next,
    Previous,
    ToggleZoom,
    /// Primary button or finger went down on the image (window coordinates).
    ImagePressed(Point),
    /// Primary button or finger went down beside the image.
    BackdropPressed(Point),
    /// Window-wide pointer movement during a stroke.
    StrokeMoved(Point),
    /// Window-wide pointer release during a stroke.
    StrokeReleased,
    /// The stroke was interrupted (touch lost, cursor left, focus lost).
    StrokeCancelled,
    Tick(Instant),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    Opened(usize),
    Closed,
    Navigated(Navigation),
    Swiped {
        swipe: Swipe,
        navigation: Navigation,
    },
    ZoomChanged(f32),
    DragStarted,
    DragEnded,
}

/// Complete lightbox state.
#[derive(Debug, Clone)]
pub struct State {
    controller: Controller,
    gesture: GestureAdapter,
    slide: Option<SlideIn>,
}

impl State {
    #[must_use]
    pub fn new(len: NonZeroUsize, steps: ZoomSteps, swipe_threshold: f32) -> Self {
        Self {
            controller: Controller::new(len, steps),
            gesture: GestureAdapter::new(swipe_threshold),
            slide: None,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    #[must_use]
    pub fn slide(&self) -> Option<&SlideIn> {
        self.slide.as_ref()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Whether a press is being followed window-wide (a pan or a swipe).
    #[must_use]
    pub fn has_active_stroke(&self) -> bool {
        self.controller.is_dragging() || self.gesture.is_tracking_swipe()
    }

    /// Handle a lightbox message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(index) => {
                if self.controller.open(index) {
                    self.gesture.cancel();
                    self.slide = None;
                    Effect::Opened(index)
                } else {
                    Effect::None
                }
            }
            Message::Close => {
                if !self.controller.is_open() {
                    return Effect::None;
                }
                self.controller.close();
                self.gesture.cancel();
                self.slide = None;
                Effect::Closed
            }
            Message::Next => self.navigate(Controller::next),
            Message::Previous => self.navigate(Controller::prev),
            Message::ToggleZoom => {
                if !self.controller.is_open() {
                    return Effect::None;
                }
                self.gesture.cancel();
                Effect::ZoomChanged(self.controller.toggle_zoom())
            }
            Message::ImagePressed(position) => self.press_image(position),
            Message::BackdropPressed(position) => {
                // Swipes start anywhere on the stage; pans only on the image.
                if self.controller.is_open() && !self.controller.is_zoomed() {
                    self.gesture.begin_swipe(position);
                }
                Effect::None
            }
            Message::StrokeMoved(position) => {
                self.gesture.pointer_moved(position);
                self.controller.update_drag(position);
                Effect::None
            }
            Message::StrokeReleased => self.release_stroke(),
            Message::StrokeCancelled => {
                self.gesture.cancel();
                if self.controller.is_dragging() {
                    self.controller.end_drag();
                    Effect::DragEnded
                } else {
                    Effect::None
                }
            }
            Message::Tick(now) => {
                self.tick(now);
                Effect::None
            }
        }
    }

    /// Advances the slide-in cue, dropping it once finished.
    pub fn tick(&mut self, now: Instant) {
        if let Some(slide) = self.slide.as_mut() {
            if !slide.tick(now) {
                self.slide = None;
            }
        }
    }

    fn navigate(&mut self, step: fn(&mut Controller) -> Navigation) -> Effect {
        match self.step(step) {
            Some(navigation) => Effect::Navigated(navigation),
            None => Effect::None,
        }
    }

    fn step(&mut self, step: fn(&mut Controller) -> Navigation) -> Option<Navigation> {
        if !self.controller.is_open() {
            return None;
        }
        self.gesture.cancel();
        let navigation = step(&mut self.controller);
        self.slide = Some(SlideIn::start(navigation.direction, Instant::now()));
        Some(navigation)
    }

    fn press_image(&mut self, position: Point) -> Effect {
        if !self.controller.is_open() {
            return Effect::None;
        }
        if self.controller.begin_drag(position) {
            return Effect::DragStarted;
        }
        self.gesture.begin_swipe(position);
        Effect::None
    }

    fn release_stroke(&mut self) -> Effect {
        if self.controller.is_dragging() {
            self.controller.end_drag();
            return Effect::DragEnded;
        }

        // Swipes only navigate while unzoomed.
        if self.controller.is_zoomed() {
            self.gesture.cancel();
            return Effect::None;
        }

        match self.gesture.end_swipe() {
            Some(swipe) => {
                let step = match swipe {
                    Swipe::Left => Controller::next,
                    Swipe::Right => Controller::prev,
                };
                self.step(step)
                    .map_or(Effect::None, |navigation| Effect::Swiped { swipe, navigation })
            }
            None => Effect::None,
        }
    }

    /// Listeners owned by the lightbox.
    ///
    /// - While open: keyboard shortcuts.
    /// - While a stroke is active: window-wide move/release/cancel. The
    ///   listener only exists in that state, so every way out of a stroke
    ///   drops it.
    /// - While the slide-in cue plays: animation frames.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.controller.is_open() {
            return Subscription::none();
        }

        let open = event::listen_with(open_listener);

        let stroke = if self.has_active_stroke() {
            event::listen_with(stroke_listener)
        } else {
            Subscription::none()
        };

        let animation = if self.is_animating() {
            time::every(ANIMATION_FRAME).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([open, stroke, animation])
    }
}

fn open_listener(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            key_message(&key)
        }
        _ => None,
    }
}

fn stroke_listener(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position })
        | event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::StrokeMoved(position))
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | event::Event::Touch(touch::Event::FingerLifted { .. }) => Some(Message::StrokeReleased),
        event::Event::Touch(touch::Event::FingerLost { .. })
        | event::Event::Mouse(mouse::Event::CursorLeft)
        | event::Event::Window(window::Event::Unfocused) => Some(Message::StrokeCancelled),
        _ => None,
    }
}

/// Keyboard shortcuts available while the lightbox is open.
fn key_message(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Close),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Next),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Character(c) if c.as_str().eq_ignore_ascii_case("z") => {
            Some(Message::ToggleZoom)
        }
        _ => None,
    }
}
