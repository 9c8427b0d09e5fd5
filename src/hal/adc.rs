use avr_device::atmega128a::ADC;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum AdcChannel {
    Adc0 = 0,
    Adc1 = 1,
    Adc2 = 2,
    Adc3 = 3,
    Adc4 = 4,
    Adc5 = 5,
    Adc6 = 6,
    Adc7 = 7,
}

// ADCSRA bits
const ADEN: u8 = 1 << 7;
const ADSC: u8 = 1 << 6;
const DIV128: u8 = 0x07;
// ADMUX: AVCC reference
const REFS_AVCC: u8 = 1 << 6;

pub struct Adc {
    _private: (),
}

impl Adc {
    pub fn new() -> Self {
        unsafe {
            let p = ADC::ptr();
            // 125kHz ADC clock @ 16MHz
            (*p).adcsra.write(|w| w.bits(ADEN | DIV128));
            (*p).admux.write(|w| w.bits(REFS_AVCC));
        }
        Self { _private: () }
    }

    pub fn read_channel(&mut self, channel: AdcChannel) -> u16 {
        unsafe {
            let p = ADC::ptr();

            let reference = (*p).admux.read().bits() & 0xE0;
            (*p).admux.write(|w| w.bits(reference | channel as u8));
            (*p).adcsra.modify(|r, w| w.bits(r.bits() | ADSC));
            while (*p).adcsra.read().bits() & ADSC != 0 {}

            // ADCL must be read first
            let low = (*p).adcl.read().bits() as u16;
            let high = (*p).adch.read().bits() as u16;

            (high << 8) | low
        }
    }

    /// Packs the least significant bit of 32 conversions of an unconnected
    /// channel. Only good enough to seed a game RNG.
    pub fn noise_seed(&mut self, channel: AdcChannel) -> u32 {
        let mut seed = 0u32;
        for _ in 0..32 {
            seed = (seed << 1) | u32::from(self.read_channel(channel) & 1);
        }
        seed
    }
}

impl Default for Adc {
    fn default() -> Self {
        Self::new()
    }
}
