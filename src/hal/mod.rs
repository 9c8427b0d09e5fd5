pub mod adc;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use adc::{Adc, AdcChannel};
pub use gpio::{board, Input, Output, Pin, Port};
pub use timer::{millis, Delay, Millis};
pub use uart::Uart;
