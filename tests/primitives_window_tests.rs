#![cfg(feature = "dev")]
//! Tests for centered window geometry.

use bandmean::internals::primitives::window::{CenteredWindow, Window};

#[test]
fn test_window_new_and_len() {
    let w = Window::new(2, 6).expect("valid window");
    assert_eq!(w.len(), 5);
    assert!(!w.is_empty());

    assert_eq!(Window::new(3, 3).map(|w| w.len()), Some(1));
    assert!(Window::new(4, 3).is_none());
}

#[test]
fn test_centered_window_bounds_clipped() {
    let window = CenteredWindow::new(2);
    assert_eq!(window.span(), 5);

    assert_eq!(window.bounds(0, 9), Window { left: 0, right: 2 });
    assert_eq!(window.bounds(1, 9), Window { left: 0, right: 3 });
    assert_eq!(window.bounds(4, 9), Window { left: 2, right: 6 });
    assert_eq!(window.bounds(8, 9), Window { left: 6, right: 8 });
}

#[test]
fn test_centered_window_is_full() {
    let window = CenteredWindow::new(2);
    let full: Vec<usize> = (0..9).filter(|&i| window.is_full(i, 9)).collect();
    assert_eq!(full, vec![2, 3, 4, 5, 6]);
}

#[test]
fn test_centered_window_interior() {
    let window = CenteredWindow::new(2);
    assert_eq!(window.interior(9), 2..7);

    // Exactly one full window when n = 2k + 1.
    assert_eq!(window.interior(5), 2..3);

    // None when n < 2k + 1.
    assert!(window.interior(4).is_empty());
    assert!(window.interior(1).is_empty());
}

#[test]
fn test_centered_window_zero_half_width() {
    let window = CenteredWindow::new(0);
    assert_eq!(window.span(), 1);
    assert_eq!(window.interior(4), 0..4);
    assert_eq!(window.bounds(3, 4), Window { left: 3, right: 3 });
}
