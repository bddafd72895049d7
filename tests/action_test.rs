//! Tests for key handling through the full dispatcher

mod common;

use common::TestApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rgbpal::action::{SAVE_ERROR_MESSAGE, SAVE_OK_MESSAGE};
use rgbpal::color::{Channel, Color};
use rgbpal::config::{Config, KeyBinding};
use rgbpal::editor::{FocusPosition, Mode, StatusLevel};
use rgbpal::palette::PaletteCodec;

// ===================
// Normal mode
// ===================

#[test]
fn test_increase_saturates() {
    let mut t = TestApp::new();
    t.submit("10");
    assert_eq!(t.app.state.color().r, 10);

    t.repeat('d', 5);
    assert_eq!(t.app.state.color().r, 15);
    t.repeat('l', 250);
    assert_eq!(t.app.state.color().r, 255);
}

#[test]
fn test_decrease_aliases() {
    let mut t = TestApp::new();
    t.repeat('a', 3);
    t.repeat('h', 3);
    t.press(KeyCode::Left);
    assert_eq!(t.app.state.color().r, 93);
}

#[test]
fn test_focus_keys() {
    let mut t = TestApp::new();
    t.press(KeyCode::Char('s'));
    assert_eq!(t.app.state.focus(), FocusPosition::Slider(Channel::Green));
    t.press(KeyCode::Char('j'));
    assert_eq!(t.app.state.focus(), FocusPosition::Slider(Channel::Blue));
    t.press(KeyCode::Char('k'));
    t.press(KeyCode::Char('w'));
    t.press(KeyCode::Char('w'));
    assert_eq!(t.app.state.focus(), FocusPosition::Slider(Channel::Red));
}

#[test]
fn test_push_and_pull_slot() {
    let mut t = TestApp::new();
    t.submit("10");
    t.press(KeyCode::Char('s'));
    t.submit("20");
    t.press(KeyCode::Char('s'));
    t.submit("30");
    assert_eq!(t.app.state.color(), Color::new(10, 20, 30));

    // Blue slider -> slot 0 -> slot 1 -> slot 2
    t.repeat('s', 3);
    assert_eq!(t.app.state.focus(), FocusPosition::PaletteSlot(2));
    t.press(KeyCode::Char('p'));
    assert_eq!(t.app.state.slots()[2], Color::new(10, 20, 30));

    // Back to the sliders to change the color
    t.repeat('w', 5);
    for _ in 0..3 {
        t.submit("1");
        t.press(KeyCode::Char('s'));
    }
    assert_eq!(t.app.state.color(), Color::gray(1));

    t.repeat('s', 2);
    assert_eq!(t.app.state.focus(), FocusPosition::PaletteSlot(2));
    t.press(KeyCode::Char('g'));
    assert_eq!(t.app.state.color(), Color::new(10, 20, 30));
}

#[test]
fn test_adjust_on_slot_does_nothing() {
    let mut t = TestApp::new();
    t.repeat('s', 3);
    t.repeat('d', 10);
    assert_eq!(t.app.state.color(), Color::gray(100));
}

#[test]
fn test_save_key_writes_default_path() {
    let mut t = TestApp::new();
    t.app.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));

    let status = t.app.state.status().unwrap();
    assert_eq!(status.message, SAVE_OK_MESSAGE);
    assert_eq!(status.level, StatusLevel::Info);

    let saved = PaletteCodec::load(t.app.palette_path()).unwrap();
    assert_eq!(saved, t.app.state.slots());
}

#[test]
fn test_unbound_key_is_noop() {
    let mut t = TestApp::new();
    t.press(KeyCode::Char('z'));
    t.press(KeyCode::Enter);
    assert_eq!(t.app.state.color(), Color::gray(100));
    assert_eq!(t.app.state.mode(), Mode::Normal);
    assert!(!t.app.state.is_terminated());
}

// ===================
// Input mode
// ===================

#[test]
fn test_out_of_range_number_is_ignored() {
    let mut t = TestApp::new();
    t.press(KeyCode::Char('s'));
    t.submit("300");
    assert_eq!(t.app.state.focus(), FocusPosition::Slider(Channel::Green));
    assert_eq!(t.app.state.color().g, 100);
    assert_eq!(t.app.state.mode(), Mode::Normal);
    assert_eq!(t.app.state.input(), "");
    assert!(t.app.state.status().is_none());
}

#[test]
fn test_leading_zero_accepted() {
    let mut t = TestApp::new();
    t.submit("07");
    assert_eq!(t.app.state.color().r, 7);
}

#[test]
fn test_numeric_edge_values() {
    let mut t = TestApp::new();
    t.submit("0");
    assert_eq!(t.app.state.color().r, 0);
    t.submit("255");
    assert_eq!(t.app.state.color().r, 255);
    t.submit("");
    t.submit("-1");
    t.submit("256");
    assert_eq!(t.app.state.color().r, 255);
}

#[test]
fn test_escape_discards_input() {
    let mut t = TestApp::new();
    t.press(KeyCode::Char(':'));
    t.type_text("42");
    t.press(KeyCode::Esc);
    assert_eq!(t.app.state.mode(), Mode::Normal);
    assert_eq!(t.app.state.input(), "");
    assert_eq!(t.app.state.color().r, 100);
}

#[test]
fn test_backspace_edits_input() {
    let mut t = TestApp::new();
    t.press(KeyCode::Char(':'));
    t.type_text("429");
    t.press(KeyCode::Backspace);
    assert_eq!(t.app.state.input(), "42");
    t.press(KeyCode::Enter);
    assert_eq!(t.app.state.color().r, 42);
}

#[test]
fn test_normal_keys_are_text_in_input_mode() {
    let mut t = TestApp::new();
    t.press(KeyCode::Char(':'));
    t.type_text("adwsq");
    assert_eq!(t.app.state.input(), "adwsq");
    assert_eq!(t.app.state.color(), Color::gray(100));
    assert!(!t.app.state.is_terminated());
}

#[test]
fn test_save_command_creates_file() {
    let mut t = TestApp::new();
    let out = t.path("out.json");
    t.submit(&format!("save {}", out.display()));

    assert!(out.exists());
    let saved = PaletteCodec::load(&out).unwrap();
    assert_eq!(saved.len(), 8);
    assert_eq!(t.app.state.status().unwrap().message, SAVE_OK_MESSAGE);
    assert_eq!(t.app.state.mode(), Mode::Normal);
    // Default path untouched
    assert!(!t.app.palette_path().exists());
}

#[test]
fn test_save_command_while_focused_on_slider() {
    let mut t = TestApp::new();
    assert_eq!(t.app.state.focus(), FocusPosition::Slider(Channel::Red));
    let out = t.path("from-slider.json");
    t.submit(&format!("save {}", out.display()));
    assert!(out.exists());
    assert_eq!(t.app.state.color().r, 100);
}

#[test]
fn test_save_command_to_missing_directory() {
    let mut t = TestApp::new();
    let out = t.path("missing").join("out.json");
    t.submit(&format!("save {}", out.display()));

    let status = t.app.state.status().unwrap();
    assert_eq!(status.message, SAVE_ERROR_MESSAGE);
    assert_eq!(status.level, StatusLevel::Error);
    assert_eq!(t.app.state.mode(), Mode::Normal);
    assert!(!t.app.state.is_terminated());
}

#[test]
fn test_save_command_with_empty_path() {
    let mut t = TestApp::new();
    t.submit("save ");

    let status = t.app.state.status().unwrap();
    assert_eq!(status.message, SAVE_ERROR_MESSAGE);
    assert_eq!(status.level, StatusLevel::Error);
    assert_eq!(t.app.state.mode(), Mode::Normal);
}

#[test]
fn test_unknown_command_is_silent() {
    let mut t = TestApp::new();
    t.submit("load something");
    t.submit("save");
    assert!(t.app.state.status().is_none());
    assert_eq!(t.app.state.mode(), Mode::Normal);
}

#[test]
fn test_input_respects_max_len() {
    let config = Config::from_toml("[input]\nmax_len = 4\n").unwrap();
    let mut t = TestApp::with_config(&config);
    t.press(KeyCode::Char(':'));
    t.type_text("123456");
    assert_eq!(t.app.state.input(), "1234");
}

// ===================
// Custom bindings
// ===================

#[test]
fn test_user_binding_overrides_default() {
    let config = Config {
        bindings: vec![
            KeyBinding::new("q").with_action("None").with_mode("Normal"),
            KeyBinding::new("x").with_action("Quit").with_mode("Normal"),
        ],
        ..Default::default()
    };
    let mut t = TestApp::with_config(&config);
    t.press(KeyCode::Char('q'));
    assert!(!t.app.state.is_terminated());
    t.press(KeyCode::Char('x'));
    assert!(t.app.state.is_terminated());
}

#[test]
fn test_binding_without_mode_still_types_text() {
    let config = Config {
        bindings: vec![KeyBinding::new("x").with_action("Quit")],
        ..Default::default()
    };
    let mut t = TestApp::with_config(&config);
    t.press(KeyCode::Char(':'));
    t.type_text("xx");
    assert_eq!(t.app.state.input(), "xx");
    assert!(!t.app.state.is_terminated());

    t.press(KeyCode::Esc);
    t.press(KeyCode::Char('x'));
    assert!(t.app.state.is_terminated());
}
