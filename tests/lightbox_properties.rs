// SPDX-License-Identifier: MPL-2.0
//! Lightbox controller properties checked through the public API.

use card_gallery::ui::lightbox::{Controller, SlideDirection};
use card_gallery::ui::state::ZoomSteps;
use iced::{Point, Vector};
use std::num::NonZeroUsize;

fn controller(len: usize) -> Controller {
    Controller::new(NonZeroUsize::new(len).expect("non-zero"), ZoomSteps::default())
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn open_lands_on_requested_index_for_every_size() {
    for len in 1..=12 {
        for index in 0..len {
            let mut lightbox = controller(len);
            assert!(lightbox.open(index));
            assert!(lightbox.is_open());
            assert_eq!(lightbox.current_index(), index);
        }
    }
}

#[test]
fn full_cycle_of_next_or_prev_returns_home() {
    for len in 1..=12 {
        for start in 0..len {
            let mut lightbox = controller(len);
            lightbox.open(start);
            for _ in 0..len {
                lightbox.next();
            }
            assert_eq!(lightbox.current_index(), start);

            for _ in 0..len {
                lightbox.prev();
            }
            assert_eq!(lightbox.current_index(), start);
        }
    }
}

#[test]
fn four_toggles_restore_zoom() {
    let mut lightbox = controller(3);
    lightbox.open(0);
    let original = lightbox.zoom_factor();

    let observed: Vec<f32> = (0..4).map(|_| lightbox.toggle_zoom()).collect();

    assert_eq!(observed.len(), 4);
    for (actual, expected) in observed.iter().zip([1.5, 2.0, 2.5, 1.0]) {
        assert_close(*actual, expected);
    }
    assert_close(lightbox.zoom_factor(), original);
    assert_eq!(lightbox.pan_offset(), Vector::new(0.0, 0.0));
}

#[test]
fn pan_is_zero_whenever_zoom_returns_to_one() {
    type Exit = fn(&mut Controller);
    let exits: [(&str, Exit); 4] = [
        ("next", |c| {
            c.next();
        }),
        ("prev", |c| {
            c.prev();
        }),
        ("close", Controller::close),
        ("toggle", |c| {
            c.toggle_zoom();
            c.toggle_zoom();
            c.toggle_zoom();
        }),
    ];

    for (name, exit) in exits {
        let mut lightbox = controller(4);
        lightbox.open(1);
        lightbox.toggle_zoom();
        assert!(lightbox.begin_drag(Point::new(10.0, 10.0)));
        lightbox.update_drag(Point::new(40.0, -5.0));
        assert_ne!(lightbox.pan_offset(), Vector::new(0.0, 0.0));

        exit(&mut lightbox);

        assert_close(lightbox.zoom_factor(), 1.0);
        assert_eq!(lightbox.pan_offset(), Vector::new(0.0, 0.0), "after {name}");
        assert!(!lightbox.is_dragging(), "after {name}");
    }
}

#[test]
fn repeated_drag_updates_are_idempotent() {
    let mut lightbox = controller(2);
    lightbox.open(0);
    lightbox.toggle_zoom();
    lightbox.toggle_zoom();
    assert!(lightbox.begin_drag(Point::new(100.0, 100.0)));

    lightbox.update_drag(Point::new(120.0, 130.0));
    let first = lightbox.pan_offset();
    lightbox.update_drag(Point::new(120.0, 130.0));

    assert_eq!(first, Vector::new(20.0, 30.0));
    assert_eq!(lightbox.pan_offset(), first);
}

#[test]
fn end_drag_always_clears_drag_state() {
    let mut lightbox = controller(2);
    lightbox.end_drag();
    assert!(!lightbox.is_dragging());
    assert_eq!(lightbox.drag_anchor(), None);

    lightbox.open(0);
    lightbox.toggle_zoom();
    lightbox.begin_drag(Point::new(5.0, 5.0));
    assert!(lightbox.drag_anchor().is_some());

    lightbox.end_drag();
    assert!(!lightbox.is_dragging());
    assert_eq!(lightbox.drag_anchor(), None);
}

#[test]
fn drag_is_refused_while_unzoomed() {
    let mut lightbox = controller(2);
    lightbox.open(0);
    assert!(!lightbox.begin_drag(Point::new(5.0, 5.0)));
    assert!(!lightbox.is_dragging());
}

#[test]
fn scenario_three_images_forward_wrap() {
    let mut lightbox = controller(3);
    lightbox.open(0);

    let visited: Vec<usize> = (0..3).map(|_| lightbox.next().to).collect();

    assert_eq!(visited, vec![1, 2, 0]);
}

#[test]
fn scenario_backward_wrap() {
    let len = 5;
    let mut lightbox = controller(len);
    lightbox.open(1);

    let first = lightbox.prev();
    assert_eq!(first.to, 0);
    assert_eq!(first.direction, SlideDirection::Right);

    let second = lightbox.prev();
    assert_eq!(second.to, len - 1);
}
