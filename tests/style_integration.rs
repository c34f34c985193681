// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use card_gallery::ui::design_tokens::{opacity, palette, sizing, spacing};
    use card_gallery::ui::styles::{button, overlay, tooltip};
    use card_gallery::ui::theming::{ColorScheme, ThemeMode};
    use iced::Theme;

    #[test]
    fn all_button_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, iced::widget::button::Status::Active);
            let _ = button::thumbnail(&theme, iced::widget::button::Status::Hovered);
            let _ = button::overlay(palette::WHITE, 0.5, 0.8)(
                &theme,
                iced::widget::button::Status::Pressed,
            );
        }
    }

    #[test]
    fn overlay_styles_follow_scheme() {
        let colors = ColorScheme::dark();
        let style = overlay::backdrop(colors.overlay_background)(&Theme::Dark);
        assert!(style.background.is_some());

        let _ = overlay::indicator(4.0)(&Theme::Dark);
        let _ = tooltip::tooltip_container(&Theme::Light);
    }

    #[test]
    fn lightbox_tokens_leave_room_for_controls() {
        assert!(sizing::LIGHTBOX_MAX_WIDTH < 1.0);
        assert!(sizing::LIGHTBOX_MAX_HEIGHT < 1.0);
        assert!(sizing::OVERLAY_BUTTON > spacing::LG);
        assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ThemeMode::Light.colors();
        let dark = ThemeMode::Dark.colors();

        assert!(light.surface_primary.r > dark.surface_primary.r);
        assert!(light.text_primary.r < dark.text_primary.r);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
    }
}
