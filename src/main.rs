#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

// Firmware for the BigAVR2 board with an ATmega128.
#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use reflex_duel::config::{parse_player_count, GameConfig};
    use reflex_duel::drivers::{Board, PinBoard, RandomChance, SerialConsole};
    use reflex_duel::game::{Game, PlayerCount};
    use reflex_duel::hal::gpio::{self, board};
    use reflex_duel::hal::timer::{self, Delay, Millis};
    use reflex_duel::hal::{Adc, AdcChannel};
    use reflex_duel::logger::{LogType, Logger};
    use ufmt::{uwrite, uwriteln};

    // ADC7 is left floating on the board
    const NOISE_CHANNEL: AdcChannel = AdcChannel::Adc7;

    fn ask_player_count(log: &mut Logger<SerialConsole>) -> PlayerCount {
        uwrite!(log.entry(LogType::System), "players? (1/2): ").ok();
        let mut line = [0u8; 8];
        let len = log.sink_mut().read_line(&mut line);
        parse_player_count(&line[..len])
    }

    #[avr_device::entry]
    fn main() -> ! {
        timer::init_millis();
        let mut adc = Adc::new();
        let mut log = Logger::new(SerialConsole::new()).with_debug(cfg!(feature = "debug"));

        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        let pin_board = PinBoard::new(
            board::BUTTONS.map(|(port, bit)| gpio::input(port, bit)),
            gpio::input(board::START.0, board::START.1),
            gpio::input(board::FINISH.0, board::FINISH.1),
            gpio::input(board::MODE.0, board::MODE.1),
            board::OUTPUTS.map(|(port, bit)| gpio::output(port, bit)),
        );

        uwriteln!(log.entry(LogType::System), "reflex duel v0.1.0").ok();
        let count = ask_player_count(&mut log);

        // The prompt takes human time, so the counter has drifted by now
        let seed = (u64::from(adc.noise_seed(NOISE_CHANNEL)) << 32) | u64::from(timer::millis());
        let chance = RandomChance::new(SmallRng::seed_from_u64(seed));

        let mut game = Game::new(pin_board, Millis, Delay, chance, log, GameConfig::default());
        if let Err(e) = game.board_mut().all_off() {
            match e {}
        }

        loop {
            if let Err(e) = game.run_session(count) {
                match e {}
            }
            // Next session starts once FINISH is let go
            while let Ok(true) = game.finish_requested() {}
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
