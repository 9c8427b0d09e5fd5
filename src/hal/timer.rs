use crate::config::CPU_FREQ_HZ;
use crate::drivers::Clock;
use avr_device::atmega128a::TC0;
use avr_device::interrupt::Mutex;
use core::cell::Cell;
use embedded_hal::blocking::delay::DelayMs;

const PRESCALER: u32 = 64;
// 250 timer ticks per millisecond at 16MHz
const TICKS_PER_MS: u32 = CPU_FREQ_HZ / PRESCALER / 1000;

// TCCR0 bits
const WGM01: u8 = 1 << 3;
const CS02: u8 = 1 << 2;
// TIMSK bits
const OCIE0: u8 = 1 << 1;

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Timer0 in CTC mode, one compare interrupt per millisecond.
/// Interrupts must be enabled afterwards for the counter to run.
pub fn init_millis() {
    unsafe {
        let tc0 = &*TC0::ptr();
        tc0.tccr0.write(|w| w.bits(WGM01 | CS02));
        tc0.ocr0.write(|w| w.bits((TICKS_PER_MS - 1) as u8));
        tc0.tcnt0.write(|w| w.bits(0));
        tc0.timsk.modify(|r, w| w.bits(r.bits() | OCIE0));
    }
}

#[inline]
pub fn millis() -> u32 {
    avr_device::interrupt::free(|cs| MILLIS.borrow(cs).get())
}

#[avr_device::interrupt(atmega128a)]
fn TIMER0_COMP() {
    avr_device::interrupt::free(|cs| {
        let counter = MILLIS.borrow(cs);
        counter.set(counter.get().wrapping_add(1));
    });
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Millis;

impl Clock for Millis {
    fn now_ms(&self) -> u32 {
        millis()
    }
}

/// Busy wait on the millisecond counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Delay;

impl DelayMs<u32> for Delay {
    fn delay_ms(&mut self, ms: u32) {
        let start = millis();
        while millis().wrapping_sub(start) < ms {}
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        DelayMs::<u32>::delay_ms(self, u32::from(ms));
    }
}
