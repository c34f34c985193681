// SPDX-License-Identifier: MPL-2.0
//! `card_gallery` is a static card image gallery built with the Iced GUI framework.
//!
//! A scrollable thumbnail grid opens a full-window lightbox with wrap-around
//! navigation, a cyclic zoom, drag-to-pan while zoomed and horizontal swipes
//! while unzoomed. Strings are localized with Fluent.

#![doc(html_root_url = "https://docs.rs/card_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
