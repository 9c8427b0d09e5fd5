use avr_device::atmega128a::{PORTA, PORTB, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    D,
}

/// Port pin chosen at runtime so every line of one direction shares a type.
#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    mask: u8,
    _mode: PhantomData<MODE>,
}

// Expands `$body` once per port with `$reg` bound to that port's register.
macro_rules! on_port {
    ($port:expr, $a:ident, $b:ident, $d:ident, $reg:ident => $body:expr) => {
        unsafe {
            match $port {
                Port::A => {
                    let $reg = &(*PORTA::ptr()).$a;
                    $body
                }
                Port::B => {
                    let $reg = &(*PORTB::ptr()).$b;
                    $body
                }
                Port::D => {
                    let $reg = &(*PORTD::ptr()).$d;
                    $body
                }
            }
        }
    };
}

/// Input with the internal pull-up off. The board pulls idle lines low.
pub fn input(port: Port, bit: u8) -> Pin<Input> {
    let mask = 1 << bit;
    on_port!(port, ddra, ddrb, ddrd, ddr => ddr.modify(|r, w| w.bits(r.bits() & !mask)));
    on_port!(port, porta, portb, portd, out => out.modify(|r, w| w.bits(r.bits() & !mask)));
    Pin {
        port,
        mask,
        _mode: PhantomData,
    }
}

/// Push-pull output, driven low.
pub fn output(port: Port, bit: u8) -> Pin<Output> {
    let mask = 1 << bit;
    on_port!(port, porta, portb, portd, out => out.modify(|r, w| w.bits(r.bits() & !mask)));
    on_port!(port, ddra, ddrb, ddrd, ddr => ddr.modify(|r, w| w.bits(r.bits() | mask)));
    Pin {
        port,
        mask,
        _mode: PhantomData,
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        let (port, mask) = (self.port, self.mask);
        Ok(on_port!(port, pina, pinb, pind, pin => pin.read().bits() & mask != 0))
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        let (port, mask) = (self.port, self.mask);
        on_port!(port, porta, portb, portd, out => out.modify(|r, w| w.bits(r.bits() | mask)));
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        let (port, mask) = (self.port, self.mask);
        on_port!(port, porta, portb, portd, out => out.modify(|r, w| w.bits(r.bits() & !mask)));
        Ok(())
    }
}

// BigAVR2 wiring of the reflex duel. Buttons need external pull-downs.
pub mod board {
    use super::Port;

    /// LED1, LED2, LED3, buzzer
    pub const OUTPUTS: [(Port, u8); 4] = [(Port::A, 0), (Port::A, 1), (Port::A, 2), (Port::A, 3)];

    /// J1 on PB0..PB3, J2 on PB4..PB7
    pub const BUTTONS: [(Port, u8); 8] = [
        (Port::B, 0),
        (Port::B, 1),
        (Port::B, 2),
        (Port::B, 3),
        (Port::B, 4),
        (Port::B, 5),
        (Port::B, 6),
        (Port::B, 7),
    ];

    pub const START: (Port, u8) = (Port::D, 4);
    pub const FINISH: (Port, u8) = (Port::D, 5);
    pub const MODE: (Port, u8) = (Port::D, 6);
}
