// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The grid is always rendered; the lightbox is stacked on top of it while
//! open so the grid keeps its scroll position underneath.

use super::Message;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::grid::{self, ViewContext as GridViewContext};
use crate::ui::lightbox::{self, view::ViewContext as LightboxViewContext};
use crate::ui::theming::ColorScheme;
use iced::widget::{image, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub catalog: &'a Catalog,
    pub thumbnails: &'a [image::Handle],
    pub thumbnail_height: f32,
    pub grid_reveal: grid::Reveal,
    pub lightbox: &'a lightbox::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let is_open = ctx.lightbox.is_open();

    let grid = grid::view(GridViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        catalog: ctx.catalog,
        thumbnails: ctx.thumbnails,
        thumbnail_height: ctx.thumbnail_height,
        reveal: ctx.grid_reveal,
        show_scroll_buttons: !is_open,
    })
    .map(Message::Grid);

    if !is_open {
        return grid;
    }

    let index = ctx.lightbox.controller().current_index();
    let (Some(record), Some(handle)) = (ctx.catalog.get(index), ctx.thumbnails.get(index)) else {
        return grid;
    };

    let overlay = lightbox::view::view(
        ctx.lightbox,
        LightboxViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            record,
            handle: handle.clone(),
        },
    )
    .map(Message::Lightbox);

    Stack::new()
        .push(grid)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
