// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: backdrop, transformed image and floating controls.

use super::component::{Message, State};
use super::stage::Stage;
use crate::catalog::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::state::zoom::format_number;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::mouse;
use iced::widget::canvas::Canvas;
use iced::widget::image;
use iced::widget::{button, opaque, tooltip, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Size, Vector,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub record: &'a ImageRecord,
    pub handle: image::Handle,
}

/// Size of the unzoomed image box for the given window area.
#[must_use]
pub fn fit_box(available: Size) -> Size {
    Size::new(
        (available.width * sizing::LIGHTBOX_MAX_WIDTH).max(1.0),
        (available.height * sizing::LIGHTBOX_MAX_HEIGHT).max(1.0),
    )
}

/// Cursor shown over the image: grabbing while panning, grab while zoomed.
#[must_use]
pub fn image_interaction(is_zoomed: bool, is_dragging: bool) -> mouse::Interaction {
    if is_dragging {
        mouse::Interaction::Grabbing
    } else if is_zoomed {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::Pointer
    }
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let controller = state.controller();

    let zoom = controller.zoom_factor();
    let pan = controller.pan_offset();
    let (slide_x, alpha) = state
        .slide()
        .map_or((0.0, opacity::OPAQUE), |slide| (slide.offset_x(), slide.opacity()));

    let image_layer = Canvas::new(Stage {
        handle: ctx.handle,
        zoom,
        offset: Vector::new(pan.x + slide_x, pan.y),
        opacity: alpha,
        is_zoomed: controller.is_zoomed(),
        is_dragging: controller.is_dragging(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let overlay_text = ctx.colors.overlay_text;
    let overlay_button = move || {
        styles::button::overlay(overlay_text, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER)
    };

    let close = styles::tooltip::styled(
        button(
            Text::new("✕")
                .size(typography::TITLE_MD)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fixed(sizing::OVERLAY_BUTTON))
        .height(Length::Fixed(sizing::OVERLAY_BUTTON))
        .on_press(Message::Close)
        .style(overlay_button()),
        ctx.i18n.tr("lightbox-close-tooltip"),
        tooltip::Position::Left,
    );

    let current = (controller.current_index() + 1).to_string();
    let total = controller.len().get().to_string();
    let counter = Container::new(
        Text::new(ctx.i18n.tr_with_args(
            "lightbox-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        ))
        .size(typography::BODY),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    let top_bar = Row::new()
        .align_y(Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let arrow = |glyph: &'static str, message: Message, tip: String, position| {
        styles::tooltip::styled(
            button(Text::new(glyph).size(typography::TITLE_MD))
                .width(Length::Fixed(sizing::OVERLAY_BUTTON))
                .height(Length::Fixed(sizing::OVERLAY_BUTTON))
                .on_press(message)
                .style(overlay_button()),
            tip,
            position,
        )
    };

    let arrows = Row::new()
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(arrow(
            "◀",
            Message::Previous,
            ctx.i18n.tr("lightbox-previous-tooltip"),
            tooltip::Position::Right,
        ))
        .push(Space::new().width(Length::Fill))
        .push(arrow(
            "▶",
            Message::Next,
            ctx.i18n.tr("lightbox-next-tooltip"),
            tooltip::Position::Left,
        ));

    let factor = format_number(zoom);
    let zoom_label = ctx
        .i18n
        .tr_with_args("lightbox-zoom-label", &[("factor", factor.as_str())]);
    let zoom_button = styles::tooltip::styled(
        button(
            Text::new(zoom_label)
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fixed(sizing::ZOOM_BUTTON_WIDTH))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::ToggleZoom)
        .style(overlay_button()),
        ctx.i18n.tr("lightbox-zoom-tooltip"),
        tooltip::Position::Top,
    );

    let id = ctx.record.id.to_string();
    let alt_text = ctx.i18n.tr_with_args("card-alt-text", &[("id", id.as_str())]);
    let mut caption = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(Text::new(alt_text).size(typography::BODY));
    if controller.is_zoomed() {
        caption = caption.push(
            Text::new(ctx.i18n.tr("lightbox-drag-hint"))
                .size(typography::CAPTION)
                .color(WHITE),
        );
    }

    let bottom_bar = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XS)
        .push(
            Container::new(caption)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::MD)),
        )
        .push(zoom_button);

    let controls = Column::new()
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top_bar)
        .push(arrows)
        .push(
            Container::new(bottom_bar)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    let stage = Container::new(Stack::new().push(image_layer).push(controls))
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(styles::overlay::backdrop(ctx.colors.overlay_background));

    opaque(stage)
}
