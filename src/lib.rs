//! Reflex duel firmware for the ATmega128.
//!
//! A stimulus (LED or buzzer) fires after a random pause and one or two
//! players race to press the matching button. The game logic only talks to
//! the hardware through [`drivers::Board`], a [`drivers::Clock`] and an
//! `embedded-hal` delay, so everything outside `hal` also runs on the host.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod config;
pub mod drivers;
pub mod game;
pub mod logger;

#[cfg(target_arch = "avr")]
pub mod hal;

#[cfg(test)]
pub(crate) mod testing;
