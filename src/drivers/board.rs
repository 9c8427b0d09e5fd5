use crate::game::{InputLine, Output, OutputMask, SLOTS};
use embedded_hal::digital::v2::{InputPin, OutputPin};

/// Digital lines the game drives and samples.
///
/// `activate` turns on exactly the bits in the mask and `deactivate` turns
/// off exactly those bits; channels outside the mask are left alone.
pub trait Board {
    type Error;

    fn activate(&mut self, mask: OutputMask) -> Result<(), Self::Error>;
    fn deactivate(&mut self, mask: OutputMask) -> Result<(), Self::Error>;
    /// Raw, undebounced level of an active-high input.
    fn is_active(&mut self, line: InputLine) -> Result<bool, Self::Error>;

    fn all_off(&mut self) -> Result<(), Self::Error> {
        self.deactivate(OutputMask::ALL)
    }
}

/// Monotonic millisecond tick. Wraps at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// [`Board`] over plain `embedded-hal` pins.
///
/// Output pin `n` carries mask bit `n` (LED1, LED2, LED3, buzzer).
pub struct PinBoard<I, O> {
    buttons: [I; 2 * SLOTS],
    start: I,
    finish: I,
    mode: I,
    outputs: [O; 4],
}

impl<I, O> PinBoard<I, O> {
    /// `buttons` are player one's four followed by player two's four.
    pub fn new(buttons: [I; 2 * SLOTS], start: I, finish: I, mode: I, outputs: [O; 4]) -> Self {
        Self {
            buttons,
            start,
            finish,
            mode,
            outputs,
        }
    }

    fn input(&self, line: InputLine) -> &I {
        match line {
            InputLine::Button(button) => &self.buttons[button.index()],
            InputLine::Start => &self.start,
            InputLine::Finish => &self.finish,
            InputLine::Mode => &self.mode,
        }
    }
}

impl<I, O, E> Board for PinBoard<I, O>
where
    I: InputPin<Error = E>,
    O: OutputPin<Error = E>,
{
    type Error = E;

    fn activate(&mut self, mask: OutputMask) -> Result<(), E> {
        for (output, pin) in Output::ALL.iter().zip(self.outputs.iter_mut()) {
            if mask.contains(*output) {
                pin.set_high()?;
            }
        }
        Ok(())
    }

    fn deactivate(&mut self, mask: OutputMask) -> Result<(), E> {
        for (output, pin) in Output::ALL.iter().zip(self.outputs.iter_mut()) {
            if mask.contains(*output) {
                pin.set_low()?;
            }
        }
        Ok(())
    }

    fn is_active(&mut self, line: InputLine) -> Result<bool, E> {
        self.input(line).is_high()
    }
}
