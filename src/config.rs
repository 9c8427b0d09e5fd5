//! Configuration constants for the reflex duel firmware

use crate::game::PlayerCount;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Button debounce time in milliseconds
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

/// Classic mode response window in milliseconds
pub const CLASSIC_WINDOW_MS: u32 = 3000;

/// Inverse mode response window in milliseconds
pub const INVERSE_WINDOW_MS: u32 = 2000;

/// Bounds of the random pause before each classic stimulus
pub const SUSPENSE_MIN_MS: u32 = 1000;
pub const SUSPENSE_MAX_MS: u32 = 5000;

/// Sleep between polls of the start button
pub const START_POLL_MS: u32 = 50;

/// Inverse rounds played per session when switched in from classic mode
pub const INVERSE_SESSION_ROUNDS: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub debounce_ms: u32,
    pub classic_window_ms: u32,
    pub inverse_window_ms: u32,
    pub suspense_min_ms: u32,
    pub suspense_max_ms: u32,
    pub start_poll_ms: u32,
    pub inverse_session_rounds: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            classic_window_ms: CLASSIC_WINDOW_MS,
            inverse_window_ms: INVERSE_WINDOW_MS,
            suspense_min_ms: SUSPENSE_MIN_MS,
            suspense_max_ms: SUSPENSE_MAX_MS,
            start_poll_ms: START_POLL_MS,
            inverse_session_rounds: INVERSE_SESSION_ROUNDS,
        }
    }
}

/// Reads the answer to the player count prompt. Anything but "1" is two.
pub fn parse_player_count(line: &[u8]) -> PlayerCount {
    match line.trim_ascii() {
        b"1" => PlayerCount::One,
        _ => PlayerCount::Two,
    }
}
