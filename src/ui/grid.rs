// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid listing every card of the catalog.
//!
//! Clicking thumbnail `i` asks the application to open the lightbox at `i`.
//! Images load lazily: rows further than one screen below the deepest scroll
//! position reached so far show an empty placeholder of the same size, so
//! their files are not read until the user scrolls near them.

use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{self, Image};
use iced::widget::{
    button, responsive, tooltip, Column, Container, Row, Scrollable, Space, Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::Id,
    ContentFit, Element, Length, Size,
};

/// Identifier used for the grid scrollable widget.
pub const SCROLLABLE_ID: &str = "gallery-grid-scrollable";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Thumbnail at this display position was clicked.
    Open(usize),
    ScrollToTop,
    ScrollToBottom,
    /// The grid scrolled; carries the bottom edge of the viewport in content
    /// coordinates.
    Scrolled { bottom: f32 },
}

/// How far down the grid content images have been revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reveal {
    bottom: f32,
}

impl Reveal {
    /// Records a viewport whose bottom edge sits at `bottom`. Revealed rows
    /// stay revealed when scrolling back up.
    pub fn scrolled_to(&mut self, bottom: f32) {
        if bottom.is_finite() {
            self.bottom = self.bottom.max(bottom);
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Whether a row starting at `row_top` shows its images, looking one
    /// viewport ahead of the deepest position reached.
    #[must_use]
    pub fn shows(&self, row_top: f32, viewport_height: f32) -> bool {
        row_top <= self.bottom.max(viewport_height) + viewport_height
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub catalog: &'a Catalog,
    pub thumbnails: &'a [image::Handle],
    pub thumbnail_height: f32,
    pub reveal: Reveal,
    /// The scroll shortcuts are hidden while the lightbox is open.
    pub show_scroll_buttons: bool,
}

/// Number of thumbnails that fit on one row, at least one.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn column_count(available_width: f32, thumbnail_width: f32, gap: f32) -> usize {
    if !(available_width.is_finite() && thumbnail_width > 0.0) {
        return 1;
    }
    ((available_width + gap) / (thumbnail_width + gap))
        .floor()
        .max(1.0) as usize
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = ctx.i18n.tr("gallery-title");
    let instructions = ctx.i18n.tr("gallery-instructions");
    let title_color = ctx.colors.brand_primary;
    let instructions_color = ctx.colors.text_secondary;

    let thumbnail_height = ctx.thumbnail_height;
    let thumbnail_width = thumbnail_height * sizing::CARD_ASPECT;
    let i18n = ctx.i18n;
    let catalog = ctx.catalog;
    let thumbnails = ctx.thumbnails;
    let reveal = ctx.reveal;
    // Thumbnail plus the button padding around it, then the row gap.
    let row_pitch = thumbnail_height + 2.0 * spacing::XXS + spacing::MD;

    let grid = responsive(move |available: Size| {
        let columns = column_count(
            available.width - 2.0 * spacing::LG,
            thumbnail_width,
            spacing::MD,
        );

        let mut rows = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fill)
            .align_x(Horizontal::Center);
        let mut row = Row::new().spacing(spacing::MD);
        let mut filled = 0;

        for (index, record) in catalog.iter().enumerate() {
            let Some(handle) = thumbnails.get(index) else {
                break;
            };
            let id = record.id.to_string();
            let alt_text = i18n.tr_with_args("card-alt-text", &[("id", id.as_str())]);

            // Row tops ignore the header above the rows, which only makes
            // images load a little earlier.
            #[allow(clippy::cast_precision_loss)]
            let row_top = (index / columns) as f32 * row_pitch;
            let picture: Element<'_, Message> = if reveal.shows(row_top, available.height) {
                Image::new(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fixed(thumbnail_width))
                    .height(Length::Fixed(thumbnail_height))
                    .into()
            } else {
                Space::new()
                    .width(Length::Fixed(thumbnail_width))
                    .height(Length::Fixed(thumbnail_height))
                    .into()
            };

            let thumbnail = button(picture)
                .padding(spacing::XXS)
                .on_press(Message::Open(index))
                .style(styles::button::thumbnail);

            row = row.push(styles::tooltip::styled(
                thumbnail,
                alt_text,
                tooltip::Position::Bottom,
            ));
            filled += 1;

            if filled == columns {
                rows = rows.push(row);
                row = Row::new().spacing(spacing::MD);
                filled = 0;
            }
        }
        if filled > 0 {
            rows = rows.push(row);
        }

        let header = Column::new()
            .spacing(spacing::XS)
            .max_width(sizing::HEADER_MAX_WIDTH)
            .align_x(Horizontal::Center)
            .push(
                Text::new(title.clone())
                    .size(typography::TITLE_LG)
                    .color(title_color),
            )
            .push(
                Text::new(instructions.clone())
                    .size(typography::BODY)
                    .color(instructions_color)
                    .align_x(Horizontal::Center),
            );

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .push(header)
            .push(rows);

        Scrollable::new(content)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport| Message::Scrolled {
                bottom: viewport.absolute_offset().y + viewport.bounds().height,
            })
            .into()
    });

    let mut stack = Stack::new().push(grid);

    if ctx.show_scroll_buttons {
        let scroll_button = |label: String, message: Message, tip: String| {
            styles::tooltip::styled(
                button(Text::new(label).size(typography::BODY_SM))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(message)
                    .style(styles::button::primary),
                tip,
                tooltip::Position::Left,
            )
        };

        let shortcuts = Column::new()
            .spacing(spacing::XS)
            .push(scroll_button(
                ctx.i18n.tr("gallery-scroll-top"),
                Message::ScrollToTop,
                ctx.i18n.tr("gallery-scroll-top-tooltip"),
            ))
            .push(scroll_button(
                ctx.i18n.tr("gallery-scroll-bottom"),
                Message::ScrollToBottom,
                ctx.i18n.tr("gallery-scroll-bottom-tooltip"),
            ));

        stack = stack.push(
            Container::new(shortcuts)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom),
        );
    }

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_fits_whole_thumbnails() {
        // 3 * 100 + 2 * 10 = 320
        assert_eq!(column_count(320.0, 100.0, 10.0), 3);
        assert_eq!(column_count(319.0, 100.0, 10.0), 2);
    }

    #[test]
    fn column_count_is_at_least_one() {
        assert_eq!(column_count(10.0, 100.0, 10.0), 1);
        assert_eq!(column_count(0.0, 100.0, 10.0), 1);
        assert_eq!(column_count(f32::INFINITY, 100.0, 10.0), 1);
        assert_eq!(column_count(500.0, 0.0, 10.0), 1);
    }

    #[test]
    fn first_screens_are_revealed_before_any_scroll() {
        let reveal = Reveal::default();
        assert!(reveal.shows(0.0, 700.0));
        assert!(reveal.shows(1400.0, 700.0));
        assert!(!reveal.shows(1401.0, 700.0));
    }

    #[test]
    fn scrolling_reveals_one_viewport_ahead() {
        let mut reveal = Reveal::default();
        reveal.scrolled_to(3000.0);
        assert!(reveal.shows(3700.0, 700.0));
        assert!(!reveal.shows(3800.0, 700.0));
    }

    #[test]
    fn scrolling_back_up_keeps_rows_revealed() {
        let mut reveal = Reveal::default();
        reveal.scrolled_to(5000.0);
        reveal.scrolled_to(700.0);
        assert!((reveal.bottom() - 5000.0).abs() < f32::EPSILON);
        assert!(reveal.shows(5500.0, 700.0));
    }

    #[test]
    fn non_finite_positions_are_ignored() {
        let mut reveal = Reveal::default();
        reveal.scrolled_to(f32::NAN);
        reveal.scrolled_to(f32::INFINITY);
        assert!(reveal.bottom().abs() < f32::EPSILON);
    }
}
