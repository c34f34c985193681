// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop and its captions.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn indicator_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn indicator_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Full-window backdrop behind the lightbox image.
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Generic style for overlay indicators like the caption and position counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(indicator_background())),
        text_color: Some(WHITE),
        border: Border {
            color: indicator_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}
