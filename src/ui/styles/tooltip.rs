// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for alt text and button hints.
//!
//! Tooltips invert the theme (dark on light, light on dark) so they stay
//! readable over thumbnails.

use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip bubble, inverted relative to the theme background.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let theme_is_dark = (bg.r + bg.g + bg.b) / 3.0 < 0.5;

    let (surface, text) = if theme_is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_PRESSED,
            ..surface
        })),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::MD,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
