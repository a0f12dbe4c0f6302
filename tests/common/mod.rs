//! Shared test utilities and fixture generators

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Absolute tolerance used when comparing converted values
pub const TOLERANCE: f64 = 1e-9;

/// Compare two floats with a tolerance relative to their magnitude
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Deterministic sample of temperatures spanning negative, fractional and large values
pub fn sample_temperatures(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = vec![0.0, -40.0, -273.15, 100.0, 1e6, -1e6, 0.5];
    values.extend((0..count).map(|_| rng.gen_range(-10_000.0..10_000.0)));
    values
}

/// A plain key press
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// A key press with Ctrl held
pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
