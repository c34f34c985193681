// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to their owner; the resulting effects are
//! recorded in the activity log or turned into widget operations.

use super::Message;
use crate::diagnostics::{DiagnosticsCollector, UserAction};
use crate::ui::{grid, lightbox};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub grid_reveal: &'a mut grid::Reveal,
    pub lightbox: &'a mut lightbox::State,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

/// Dispatches a top-level message.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Grid(message) => handle_grid_message(ctx, message),
        Message::Lightbox(message) => handle_lightbox_message(ctx, message),
    }
}

fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    match message {
        grid::Message::Open(index) => handle_lightbox_message(ctx, lightbox::Message::Open(index)),
        grid::Message::ScrollToTop => {
            ctx.diagnostics.log_action(UserAction::ScrollToTop);
            operation::snap_to(
                Id::new(grid::SCROLLABLE_ID),
                RelativeOffset { x: 0.0, y: 0.0 },
            )
        }
        grid::Message::ScrollToBottom => {
            ctx.diagnostics.log_action(UserAction::ScrollToBottom);
            operation::snap_to(
                Id::new(grid::SCROLLABLE_ID),
                RelativeOffset { x: 0.0, y: 1.0 },
            )
        }
        grid::Message::Scrolled { bottom } => {
            ctx.grid_reveal.scrolled_to(bottom);
            Task::none()
        }
    }
}

fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    let effect = ctx.lightbox.handle(message);
    record_effect(ctx.diagnostics, effect);
    Task::none()
}

/// Writes the user action behind a lightbox effect to the activity log.
fn record_effect(diagnostics: &mut DiagnosticsCollector, effect: lightbox::Effect) {
    let action = match effect {
        lightbox::Effect::None => return,
        lightbox::Effect::Opened(index) => UserAction::OpenLightbox { index },
        lightbox::Effect::Closed => UserAction::CloseLightbox,
        lightbox::Effect::Navigated(navigation) => UserAction::navigate(navigation),
        lightbox::Effect::Swiped { swipe, navigation } => UserAction::swipe(swipe, navigation),
        lightbox::Effect::ZoomChanged(factor) => UserAction::ToggleZoom { factor },
        lightbox::Effect::DragStarted => UserAction::PanStarted,
        lightbox::Effect::DragEnded => UserAction::PanEnded,
    };
    diagnostics.log_action(action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::ui::state::ZoomSteps;
    use std::num::NonZeroUsize;

    fn lightbox_state(len: usize) -> lightbox::State {
        lightbox::State::new(
            NonZeroUsize::new(len).expect("non-zero"),
            ZoomSteps::default(),
            10.0,
        )
    }

    fn actions(diagnostics: &DiagnosticsCollector) -> Vec<UserAction> {
        diagnostics
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::UserAction { action } => Some(*action),
                DiagnosticEventKind::Warning { .. } => None,
            })
            .collect()
    }

    #[test]
    fn grid_click_opens_lightbox_and_is_logged() {
        let mut lightbox = lightbox_state(3);
        let mut diagnostics = DiagnosticsCollector::default();
        let mut ctx = UpdateContext {
            grid_reveal: &mut grid::Reveal::default(),
            lightbox: &mut lightbox,
            diagnostics: &mut diagnostics,
        };

        let _ = update(&mut ctx, Message::Grid(grid::Message::Open(2)));

        assert!(lightbox.is_open());
        assert_eq!(lightbox.controller().current_index(), 2);
        assert_eq!(actions(&diagnostics), vec![UserAction::OpenLightbox { index: 2 }]);
    }

    #[test]
    fn out_of_range_click_logs_nothing() {
        let mut lightbox = lightbox_state(3);
        let mut diagnostics = DiagnosticsCollector::default();
        let mut ctx = UpdateContext {
            grid_reveal: &mut grid::Reveal::default(),
            lightbox: &mut lightbox,
            diagnostics: &mut diagnostics,
        };

        let _ = update(&mut ctx, Message::Grid(grid::Message::Open(7)));

        assert!(!lightbox.is_open());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn lightbox_session_is_recorded_in_order() {
        let mut lightbox = lightbox_state(3);
        let mut diagnostics = DiagnosticsCollector::default();
        let mut ctx = UpdateContext {
            grid_reveal: &mut grid::Reveal::default(),
            lightbox: &mut lightbox,
            diagnostics: &mut diagnostics,
        };

        for message in [
            lightbox::Message::Open(2),
            lightbox::Message::Next,
            lightbox::Message::ToggleZoom,
            lightbox::Message::Close,
        ] {
            let _ = update(&mut ctx, Message::Lightbox(message));
        }

        assert_eq!(
            actions(&diagnostics),
            vec![
                UserAction::OpenLightbox { index: 2 },
                UserAction::Navigate {
                    from: 2,
                    to: 0,
                    forward: true
                },
                UserAction::ToggleZoom { factor: 1.5 },
                UserAction::CloseLightbox,
            ]
        );
    }

    #[test]
    fn scroll_shortcuts_are_logged() {
        let mut lightbox = lightbox_state(3);
        let mut diagnostics = DiagnosticsCollector::default();
        let mut ctx = UpdateContext {
            grid_reveal: &mut grid::Reveal::default(),
            lightbox: &mut lightbox,
            diagnostics: &mut diagnostics,
        };

        let _ = update(&mut ctx, Message::Grid(grid::Message::ScrollToBottom));
        let _ = update(&mut ctx, Message::Grid(grid::Message::ScrollToTop));

        assert_eq!(
            actions(&diagnostics),
            vec![UserAction::ScrollToBottom, UserAction::ScrollToTop]
        );
    }

    #[test]
    fn no_effect_records_nothing() {
        let mut diagnostics = DiagnosticsCollector::default();
        record_effect(&mut diagnostics, lightbox::Effect::None);
        assert!(diagnostics.is_empty());
    }
}
