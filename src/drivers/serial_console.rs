use crate::hal::Uart;
use core::convert::Infallible;
use ufmt::uWrite;

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7F;

/// Terminal on USART0. Newlines go out as CRLF.
pub struct SerialConsole {
    uart: Uart,
}

impl SerialConsole {
    pub fn new() -> Self {
        Self { uart: Uart::new() }
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.uart.read_byte()
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.uart.write_byte(byte);
    }

    /// Blocks until CR or LF and echoes what was typed. Characters past the
    /// end of `buf` are dropped. Returns the number of bytes stored.
    pub fn read_line(&mut self, buf: &mut [u8]) -> usize {
        let mut len = 0;
        loop {
            let Some(byte) = self.read_byte() else {
                continue;
            };
            match byte {
                b'\r' | b'\n' => {
                    self.write_bytes(b"\n");
                    return len;
                }
                BACKSPACE | DELETE => {
                    if len > 0 {
                        len -= 1;
                        self.write_bytes(b"\x08 \x08");
                    }
                }
                _ if len < buf.len() => {
                    buf[len] = byte;
                    len += 1;
                    self.write_byte(byte);
                }
                _ => {}
            }
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if byte == b'\n' {
                self.write_byte(b'\r');
            }
            self.write_byte(byte);
        }
    }
}

impl Default for SerialConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl uWrite for SerialConsole {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
