//! Unit tests for the interactive form state
//!
//! These tests drive the form's pure key handling and state transitions.
//! Rendering and terminal setup are not exercised here.

mod common;

use common::{ctrl, key};
use crossterm::event::KeyCode;
use thermophi::cli::{handle_key, FormAction, FormField, FormState};
use thermophi::converter::Scale;

fn type_text(state: &mut FormState, text: &str) {
    for c in text.chars() {
        handle_key(state, key(KeyCode::Char(c)));
    }
}

#[test]
fn test_default_state() {
    let state = FormState::default();
    assert_eq!(state.input, "");
    assert_eq!(state.from, Scale::Celsius);
    assert_eq!(state.to, Scale::Fahrenheit);
    assert_eq!(state.result, None);
    assert_eq!(state.focus, FormField::Value);
}

#[test]
fn test_submit_stores_formatted_result() {
    let mut state = FormState::new("100", Scale::Celsius, Scale::Fahrenheit);
    state.submit();
    assert_eq!(state.result.as_deref(), Some("212.00° Fahrenheit"));
}

#[test]
fn test_submit_invalid_input_stores_message() {
    let mut state = FormState::default();
    state.submit();
    assert_eq!(state.result.as_deref(), Some("Please enter a valid number"));

    // The form stays usable after a validation failure
    type_text(&mut state, "0");
    state.submit();
    assert_eq!(state.result.as_deref(), Some("32.00° Fahrenheit"));
}

#[test]
fn test_reset_restores_defaults() {
    let mut state = FormState::new("12", Scale::Kelvin, Scale::Celsius);
    state.submit();
    state.focus = FormField::Reset;

    state.reset();

    assert_eq!(state, FormState::default());
}

#[test]
fn test_typing_filters_non_numeric_characters() {
    let mut state = FormState::default();
    type_text(&mut state, "-1a2.5x");
    assert_eq!(state.input, "-12.5");

    handle_key(&mut state, key(KeyCode::Backspace));
    assert_eq!(state.input, "-12.");
}

#[test]
fn test_enter_on_value_converts() {
    let mut state = FormState::default();
    type_text(&mut state, "-40");
    let action = handle_key(&mut state, key(KeyCode::Enter));
    assert_eq!(action, FormAction::Stay);
    assert_eq!(state.result.as_deref(), Some("-40.00° Fahrenheit"));
}

#[test]
fn test_tab_cycles_focus_and_wraps() {
    let mut state = FormState::default();
    let expected = [
        FormField::From,
        FormField::To,
        FormField::Convert,
        FormField::Reset,
        FormField::Value,
    ];
    for field in expected {
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, field);
    }

    handle_key(&mut state, key(KeyCode::BackTab));
    assert_eq!(state.focus, FormField::Reset);
}

#[test]
fn test_scale_selectors_cycle_and_shortcut() {
    let mut state = FormState::default();
    handle_key(&mut state, key(KeyCode::Tab));
    assert_eq!(state.focus, FormField::From);

    handle_key(&mut state, key(KeyCode::Right));
    assert_eq!(state.from, Scale::Fahrenheit);
    handle_key(&mut state, key(KeyCode::Left));
    handle_key(&mut state, key(KeyCode::Left));
    assert_eq!(state.from, Scale::Kelvin);

    handle_key(&mut state, key(KeyCode::Down));
    assert_eq!(state.focus, FormField::To);
    handle_key(&mut state, key(KeyCode::Char('c')));
    assert_eq!(state.to, Scale::Celsius);
    // Source scale is untouched by the target selector
    assert_eq!(state.from, Scale::Kelvin);
}

#[test]
fn test_scale_keys_do_not_edit_value() {
    let mut state = FormState::default();
    handle_key(&mut state, key(KeyCode::Tab));
    handle_key(&mut state, key(KeyCode::Char('5')));
    assert_eq!(state.input, "");
}

#[test]
fn test_convert_button_submits() {
    let mut state = FormState::new("0", Scale::Celsius, Scale::Kelvin);
    state.focus = FormField::Convert;
    handle_key(&mut state, key(KeyCode::Enter));
    assert_eq!(state.result.as_deref(), Some("273.15° Kelvin"));
}

#[test]
fn test_reset_button_resets() {
    let mut state = FormState::new("0", Scale::Kelvin, Scale::Kelvin);
    state.submit();
    state.focus = FormField::Reset;
    handle_key(&mut state, key(KeyCode::Enter));
    assert_eq!(state, FormState::default());
}

#[test]
fn test_ctrl_r_resets_from_any_field() {
    let mut state = FormState::new("55", Scale::Fahrenheit, Scale::Kelvin);
    state.submit();
    state.focus = FormField::To;
    handle_key(&mut state, ctrl('r'));
    assert_eq!(state, FormState::default());
}

#[test]
fn test_quit_keys() {
    let mut state = FormState::default();
    assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), FormAction::Quit);
    assert_eq!(handle_key(&mut state, ctrl('c')), FormAction::Quit);
    // Plain 'c' in the value field is not a quit
    assert_eq!(
        handle_key(&mut state, key(KeyCode::Char('c'))),
        FormAction::Stay
    );
}
