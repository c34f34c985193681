// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The grid relies on widget events only; every native listener belongs to
//! the lightbox and exists only while the lightbox needs it.

use super::Message;
use crate::ui::lightbox;
use iced::Subscription;

/// Routes the lightbox listeners into top-level messages.
pub fn create_event_subscription(lightbox: &lightbox::State) -> Subscription<Message> {
    lightbox.subscription().map(Message::Lightbox)
}
