// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox for viewing a single card.
//!
//! - [`controller`] - open/close, navigation, zoom and pan state machine
//! - [`gesture`] - swipe detection and stroke bookkeeping
//! - [`transition`] - slide-in cue after navigation
//! - [`component`] - messages, effects and event listeners
//! - [`stage`] - canvas drawing the transformed image and routing presses
//! - [`view`] - overlay rendering

pub mod component;
pub mod controller;
pub mod gesture;
pub mod stage;
pub mod transition;
pub mod view;

pub use component::{Effect, Message, State};
pub use controller::{Controller, Navigation, SlideDirection};
pub use gesture::Swipe;
