// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Pill-shaped buttons for the grid's scroll shortcuts.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_900,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Translucent buttons floating over the lightbox backdrop.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Frameless button wrapping a thumbnail; highlights its border on hover.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let highlight = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => Color::TRANSPARENT,
    };
    let elevation = match status {
        button::Status::Hovered => shadow::MD,
        _ => shadow::SM,
    };

    button::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        text_color: theme.palette().text,
        border: Border {
            color: highlight,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: elevation,
        snap: true,
    }
}
