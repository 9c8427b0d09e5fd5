use super::board::Board;
use crate::config::BUTTON_DEBOUNCE_MS;
use crate::game::InputLine;
use embedded_hal::blocking::delay::DelayMs;

/// Settle-and-release debouncer.
///
/// A press counts once the line is still high after the settle interval and
/// has then gone low again. The call blocks for the whole press, so a line
/// stuck high never returns.
#[derive(Copy, Clone, Debug)]
pub struct Debouncer {
    settle_ms: u32,
}

impl Debouncer {
    pub const fn new(settle_ms: u32) -> Self {
        Self { settle_ms }
    }

    pub fn read_press<B, D>(
        &self,
        board: &mut B,
        delay: &mut D,
        line: InputLine,
    ) -> Result<bool, B::Error>
    where
        B: Board,
        D: DelayMs<u32>,
    {
        if !board.is_active(line)? {
            return Ok(false);
        }

        delay.delay_ms(self.settle_ms);
        if !board.is_active(line)? {
            return Ok(false);
        }

        while board.is_active(line)? {}
        Ok(true)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(BUTTON_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::PinBoard;
    use embedded_hal_mock::delay::MockNoop;
    use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction};

    fn board_with_mode(mode: &PinMock) -> PinBoard<PinMock, PinMock> {
        let idle = || PinMock::new(&[]);
        PinBoard::new(
            core::array::from_fn(|_| idle()),
            idle(),
            idle(),
            mode.clone(),
            core::array::from_fn(|_| idle()),
        )
    }

    fn sample(levels: &[State]) -> (bool, PinMock) {
        let transactions: Vec<_> = levels.iter().cloned().map(Transaction::get).collect();
        let pin = PinMock::new(&transactions);
        let mut board = board_with_mode(&pin);
        let pressed = Debouncer::default()
            .read_press(&mut board, &mut MockNoop::new(), InputLine::Mode)
            .unwrap();
        (pressed, pin)
    }

    #[test]
    fn idle_line_returns_immediately() {
        let (pressed, mut pin) = sample(&[State::Low]);
        assert!(!pressed);
        pin.done();
    }

    #[test]
    fn short_glitch_is_rejected() {
        let (pressed, mut pin) = sample(&[State::High, State::Low]);
        assert!(!pressed);
        pin.done();
    }

    #[test]
    fn held_press_waits_for_release() {
        let (pressed, mut pin) = sample(&[
            State::High,
            State::High,
            State::High,
            State::High,
            State::Low,
        ]);
        assert!(pressed);
        pin.done();
    }
}
