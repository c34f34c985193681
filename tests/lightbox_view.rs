// SPDX-License-Identifier: MPL-2.0
//! Rendered lightbox driven through a headless simulator.

use card_gallery::app::{App, Flags, Message};
use card_gallery::ui::lightbox;
use iced::{mouse, Event, Point, Vector};
use iced_test::simulator;
use tempfile::{tempdir, TempDir};

/// Simulator window size (iced's default).
const WINDOW_WIDTH: f32 = 1024.0;
const WINDOW_HEIGHT: f32 = 768.0;

fn opened_app() -> (TempDir, App) {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut app = App::from_flags(Flags {
        lang: Some("en-US".into()),
        config_dir: Some(dir.path().to_path_buf()),
        assets: Some(dir.path().to_path_buf()),
        ..Flags::default()
    });
    dispatch(&mut app, vec![Message::Lightbox(lightbox::Message::Open(0))]);
    (dir, app)
}

fn dispatch(app: &mut App, messages: Vec<Message>) {
    for message in messages {
        let _ = app.update(message);
    }
}

/// Replays a window-wide stroke the way the stroke listener reports it.
fn finish_stroke(app: &mut App, to: Point) {
    dispatch(
        app,
        vec![
            Message::Lightbox(lightbox::Message::StrokeMoved(to)),
            Message::Lightbox(lightbox::Message::StrokeReleased),
        ],
    );
}

fn lightbox_messages(messages: &[Message]) -> Vec<&lightbox::Message> {
    messages
        .iter()
        .filter_map(|message| match message {
            Message::Lightbox(message) => Some(message),
            Message::Grid(_) => None,
        })
        .collect()
}

fn click(app: &App, label: &str) -> Vec<Message> {
    let mut ui = simulator(app.view());
    ui.click(label).expect("control should be visible");
    ui.into_messages().collect()
}

fn press_at(app: &App, position: Point) -> Vec<Message> {
    let mut ui = simulator(app.view());
    ui.point_at(position);
    let _ = ui.simulate([Event::Mouse(mouse::Event::ButtonPressed(
        mouse::Button::Left,
    ))]);
    ui.into_messages().collect()
}

fn zoom_label(app: &App) -> String {
    let factor = app.lightbox().controller().zoom_factor();
    format!("Zoom {}x", card_gallery::ui::state::zoom::format_number(factor))
}

#[test]
fn zoom_button_cycles_through_every_level() {
    let (_dir, mut app) = opened_app();

    for expected in [1.5, 2.0, 2.5, 1.0] {
        let messages = click(&app, &zoom_label(&app));
        assert!(
            matches!(
                lightbox_messages(&messages).as_slice(),
                [lightbox::Message::ToggleZoom]
            ),
            "zoom button produced {messages:?}"
        );

        dispatch(&mut app, messages);
        assert!((app.lightbox().controller().zoom_factor() - expected).abs() < f32::EPSILON);
    }
}

#[test]
fn controls_stay_clickable_at_every_zoom_level() {
    let (_dir, mut app) = opened_app();

    for _ in 0..4 {
        for (label, expected) in [("✕", "Close"), ("◀", "Previous"), ("▶", "Next")] {
            let messages = click(&app, label);
            let produced = lightbox_messages(&messages);
            assert_eq!(produced.len(), 1, "{label} produced {messages:?}");
            assert_eq!(
                format!("{:?}", produced[0]),
                expected,
                "{label} at zoom {}",
                app.lightbox().controller().zoom_factor()
            );
        }

        dispatch(&mut app, vec![Message::Lightbox(lightbox::Message::ToggleZoom)]);
    }
}

#[test]
fn arrows_stay_clickable_while_the_image_slides_in() {
    let (_dir, mut app) = opened_app();
    dispatch(&mut app, vec![Message::Lightbox(lightbox::Message::Next)]);
    assert!(app.lightbox().is_animating());

    let messages = click(&app, "▶");
    assert!(matches!(
        lightbox_messages(&messages).as_slice(),
        [lightbox::Message::Next]
    ));
}

#[test]
fn press_and_drag_pans_the_zoomed_image() {
    let (_dir, mut app) = opened_app();
    dispatch(&mut app, vec![Message::Lightbox(lightbox::Message::ToggleZoom)]);

    // No cursor movement precedes the press.
    let press = Point::new(WINDOW_WIDTH / 2.0 + 40.0, WINDOW_HEIGHT / 2.0 + 10.0);
    let messages = press_at(&app, press);
    assert!(matches!(
        lightbox_messages(&messages).as_slice(),
        [lightbox::Message::ImagePressed(position)] if *position == press
    ));
    dispatch(&mut app, messages);
    assert!(app.lightbox().controller().is_dragging());

    finish_stroke(&mut app, press + Vector::new(20.0, 30.0));
    assert_eq!(
        app.lightbox().controller().pan_offset(),
        Vector::new(20.0, 30.0)
    );
    assert!(!app.lightbox().controller().is_dragging());
}

#[test]
fn swipe_starting_on_the_backdrop_navigates() {
    let (_dir, mut app) = opened_app();

    // Left margin, above the arrow buttons.
    let press = Point::new(20.0, 150.0);
    let messages = press_at(&app, press);
    assert!(matches!(
        lightbox_messages(&messages).as_slice(),
        [lightbox::Message::BackdropPressed(position)] if *position == press
    ));
    dispatch(&mut app, messages);

    finish_stroke(&mut app, Point::new(-100.0, 160.0));
    assert_eq!(app.lightbox().controller().current_index(), 1);
}
