use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use avr_device::atmega128a::USART0;

// 103 at 9600 baud
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

// UCSR0A
const RXC: u8 = 1 << 7;
const UDRE: u8 = 1 << 5;
// UCSR0B
const RXEN: u8 = 1 << 4;
const TXEN: u8 = 1 << 3;
// UCSR0C: async, no parity, 1 stop bit, 8 data bits
const FRAME_8N1: u8 = 0x06;

/// Polled USART0.
pub struct Uart {
    _private: (),
}

impl Uart {
    pub fn new() -> Self {
        unsafe {
            let p = &*USART0::ptr();
            p.ubrr0h.write(|w| w.bits((UBRR >> 8) as u8));
            p.ubrr0l.write(|w| w.bits(UBRR as u8));
            p.ucsr0c.write(|w| w.bits(FRAME_8N1));
            p.ucsr0b.write(|w| w.bits(RXEN | TXEN));
        }
        Self { _private: () }
    }

    pub fn write_byte(&mut self, byte: u8) {
        unsafe {
            let p = &*USART0::ptr();
            while p.ucsr0a.read().bits() & UDRE == 0 {}
            p.udr0.write(|w| w.bits(byte));
        }
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        unsafe {
            let p = &*USART0::ptr();
            if p.ucsr0a.read().bits() & RXC != 0 {
                Some(p.udr0.read().bits())
            } else {
                None
            }
        }
    }
}

impl Default for Uart {
    fn default() -> Self {
        Self::new()
    }
}
