pub mod board;
pub mod debounce;
pub mod rng;
#[cfg(target_arch = "avr")]
pub mod serial_console;

pub use board::{Board, Clock, PinBoard};
pub use debounce::Debouncer;
pub use rng::{Chance, RandomChance};
#[cfg(target_arch = "avr")]
pub use serial_console::SerialConsole;
