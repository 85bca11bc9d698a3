//! Integration tests for the application shell's tap-counting behavior

use clickdemo::error::ShellError;
use clickdemo::shell::{
    AppShell, ApplicationDelegate, ButtonKind, Color, LaunchOptions, Rect, Screen, BUTTON_FRAME,
};
use pretty_assertions::assert_eq;

fn launch(screen: Screen) -> AppShell {
    let mut shell = AppShell::new();
    let options = LaunchOptions {
        args: vec!["--ignored".to_string()],
    };
    assert!(shell.did_finish_launching(&screen, &options));
    shell
}

fn tap_n(shell: &mut AppShell, n: u64) {
    for _ in 0..n {
        shell.on_touch_up_inside().unwrap();
    }
}

#[test]
fn test_zero_taps() {
    let shell = launch(Screen::default());
    assert_eq!(shell.button_title(), "Click me!");
    assert_eq!(shell.click_count(), 0);
}

#[test]
fn test_three_taps() {
    let mut shell = launch(Screen::default());
    tap_n(&mut shell, 3);
    assert_eq!(shell.button_title(), "Click #3");
}

#[test]
fn test_ten_taps() {
    let mut shell = launch(Screen::default());
    tap_n(&mut shell, 10);
    assert_eq!(shell.button_title(), "Click #10");
    assert_eq!(shell.click_count(), 10);
}

#[test]
fn test_label_tracks_every_tap() {
    let mut shell = launch(Screen::default());
    let mut previous = shell.click_count();

    for n in 1..=50u64 {
        let count = shell.on_touch_up_inside().unwrap();
        assert_eq!(count, n);
        assert_eq!(count, previous + 1);
        assert_eq!(shell.button_title(), format!("Click #{n}"));
        previous = count;
    }
}

#[test]
fn test_window_matches_screen_bounds() {
    let shell = launch(Screen::new(1024.0, 768.0));
    let window = shell.window().unwrap();

    assert_eq!(window.frame, Rect::new(0.0, 0.0, 1024.0, 768.0));
    assert_eq!(window.background, Color::LIGHT_GRAY);
    assert!(window.is_key_and_visible());
    assert_eq!(window.subviews.len(), 1);

    let button = &window.subviews[0];
    assert_eq!(button.kind, ButtonKind::RoundedRect);
    assert_eq!(button.frame, BUTTON_FRAME);
    assert_eq!(button.frame, Rect::new(115.0, 121.0, 91.0, 37.0));
}

#[test]
fn test_button_fits_reference_screen() {
    let shell = launch(Screen::default());
    let window = shell.window().unwrap();
    assert!(window.frame.contains_rect(&BUTTON_FRAME));
}

#[test]
fn test_visible_before_any_tap() {
    let mut shell = AppShell::new();
    assert!(!shell.is_launched());
    assert_eq!(shell.on_touch_up_inside(), Err(ShellError::NotLaunched));

    assert!(shell.did_finish_launching(&Screen::default(), &LaunchOptions::default()));
    assert!(shell.window().unwrap().is_key_and_visible());
    assert_eq!(shell.on_touch_up_inside(), Ok(1));
}

#[test]
fn test_launch_happens_once() {
    let mut shell = launch(Screen::default());
    tap_n(&mut shell, 2);

    assert!(!shell.did_finish_launching(&Screen::new(800.0, 600.0), &LaunchOptions::default()));
    assert_eq!(shell.window().unwrap().frame, Screen::default().bounds());
    assert_eq!(shell.button_title(), "Click #2");
    assert_eq!(shell.click_count(), 2);
}
