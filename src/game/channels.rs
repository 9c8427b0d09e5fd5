//! Fixed wiring of the reflex duel: players, buttons, stimulus outputs and
//! the table mapping each stimulus to its correct buttons.

use core::ops::BitOr;
use ufmt::{uDisplay, uWrite, Formatter};

/// Buttons per player. Slot `n` answers for stimulus `n`.
pub const SLOTS: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Player::One => "J1",
            Player::Two => "J2",
        }
    }
}

impl uDisplay for Player {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.label())
    }
}

/// How many players take part in a classic session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerCount {
    One,
    Two,
}

impl PlayerCount {
    pub const fn players(self) -> &'static [Player] {
        match self {
            PlayerCount::One => &[Player::One],
            PlayerCount::Two => &[Player::One, Player::Two],
        }
    }

    /// Buttons polled during a classic round, in polling order.
    pub fn active_buttons(self) -> &'static [Button] {
        match self {
            PlayerCount::One => &BUTTONS[..SLOTS],
            PlayerCount::Two => &BUTTONS,
        }
    }
}

/// One physical player button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub player: Player,
    pub slot: u8,
}

impl Button {
    pub const fn new(player: Player, slot: u8) -> Self {
        Self { player, slot }
    }

    /// Position in [`BUTTONS`], player one's buttons first.
    #[inline]
    pub const fn index(self) -> usize {
        self.player.index() * SLOTS + self.slot as usize
    }
}

pub const J1: [Button; SLOTS] = [
    Button::new(Player::One, 0),
    Button::new(Player::One, 1),
    Button::new(Player::One, 2),
    Button::new(Player::One, 3),
];

pub const J2: [Button; SLOTS] = [
    Button::new(Player::Two, 0),
    Button::new(Player::Two, 1),
    Button::new(Player::Two, 2),
    Button::new(Player::Two, 3),
];

pub static BUTTONS: [Button; 2 * SLOTS] = [
    J1[0], J1[1], J1[2], J1[3], J2[0], J2[1], J2[2], J2[3],
];

/// Every digital input the game reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputLine {
    Button(Button),
    Start,
    Finish,
    Mode,
}

impl From<Button> for InputLine {
    fn from(button: Button) -> Self {
        InputLine::Button(button)
    }
}

/// Stimulus outputs: three indicator LEDs and the buzzer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Led1,
    Led2,
    Led3,
    Buzzer,
}

impl Output {
    pub const ALL: [Output; 4] = [Output::Led1, Output::Led2, Output::Led3, Output::Buzzer];
    pub const INDICATORS: [Output; 3] = [Output::Led1, Output::Led2, Output::Led3];

    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Output::Led1 => 0,
            Output::Led2 => 1,
            Output::Led3 => 2,
            Output::Buzzer => 3,
        }
    }

    #[inline]
    pub const fn mask(self) -> OutputMask {
        OutputMask(1 << self.bit())
    }
}

/// Set of outputs, one bit per [`Output`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputMask(u8);

impl OutputMask {
    pub const NONE: OutputMask = OutputMask(0);
    pub const ALL: OutputMask = OutputMask(0x0F);

    pub const fn from_bits(bits: u8) -> Self {
        OutputMask(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, output: Output) -> bool {
        self.0 & (1 << output.bit()) != 0
    }
}

impl From<Output> for OutputMask {
    fn from(output: Output) -> Self {
        output.mask()
    }
}

impl BitOr for OutputMask {
    type Output = OutputMask;

    fn bitor(self, rhs: OutputMask) -> OutputMask {
        OutputMask(self.0 | rhs.0)
    }
}

impl BitOr<Output> for OutputMask {
    type Output = OutputMask;

    fn bitor(self, rhs: Output) -> OutputMask {
        self | rhs.mask()
    }
}

/// A stimulus and the button each player must press for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StimulusEntry {
    pub output: Output,
    pub answers: [Button; 2],
}

impl StimulusEntry {
    pub const fn new(output: Output, slot: usize) -> Self {
        Self {
            output,
            answers: [J1[slot], J2[slot]],
        }
    }

    #[inline]
    pub const fn mask(&self) -> OutputMask {
        self.output.mask()
    }

    #[inline]
    pub const fn answer_for(&self, player: Player) -> Button {
        self.answers[player.index()]
    }
}

pub const STIMULI: [StimulusEntry; 4] = [
    StimulusEntry::new(Output::Led1, 0),
    StimulusEntry::new(Output::Led2, 1),
    StimulusEntry::new(Output::Led3, 2),
    StimulusEntry::new(Output::Buzzer, 3),
];
