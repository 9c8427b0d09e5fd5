use super::channels::{Player, PlayerCount};
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

/// Result of a single classic round.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winner: Option<Player>,
    pub latency_ms: Option<u32>,
    /// Score delta from wrong presses, indexed by [`Player::index`].
    pub penalties: [i32; 2],
}

impl RoundOutcome {
    #[inline]
    pub fn penalty(&self, player: Player) -> i32 {
        self.penalties[player.index()]
    }
}

/// Running score of one mode session. Scores may go negative.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScoreBoard {
    count: PlayerCount,
    scores: [i32; 2],
}

impl ScoreBoard {
    pub const fn new(count: PlayerCount) -> Self {
        Self {
            count,
            scores: [0; 2],
        }
    }

    /// Single entry board used by inverse mode.
    pub const fn solo() -> Self {
        Self::new(PlayerCount::One)
    }

    #[inline]
    pub fn get(&self, player: Player) -> i32 {
        self.scores[player.index()]
    }

    pub fn adjust(&mut self, player: Player, delta: i32) {
        let score = &mut self.scores[player.index()];
        *score = score.saturating_add(delta);
    }

    /// Folds penalties first, then the winner's point.
    pub fn apply(&mut self, outcome: &RoundOutcome) {
        for &player in self.count.players() {
            self.adjust(player, outcome.penalty(player));
        }
        if let Some(winner) = outcome.winner {
            self.adjust(winner, 1);
        }
    }
}

impl uDisplay for ScoreBoard {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for (idx, &player) in self.count.players().iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            uwrite!(f, "{}: {}", player, self.get(player))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn outcome_folds_penalties_and_win() {
        let mut board = ScoreBoard::new(PlayerCount::Two);
        board.apply(&RoundOutcome {
            winner: Some(Player::One),
            latency_ms: Some(420),
            penalties: [-2, -1],
        });
        assert_eq!(board.get(Player::One), -1);
        assert_eq!(board.get(Player::Two), -1);
    }

    #[test]
    fn empty_round_changes_nothing() {
        let mut board = ScoreBoard::new(PlayerCount::Two);
        board.adjust(Player::Two, 3);
        board.apply(&RoundOutcome::default());
        assert_eq!(board, {
            let mut expected = ScoreBoard::new(PlayerCount::Two);
            expected.adjust(Player::Two, 3);
            expected
        });
    }

    #[test]
    fn renders_only_participating_players() {
        let mut duo = ScoreBoard::new(PlayerCount::Two);
        duo.adjust(Player::One, 2);
        duo.adjust(Player::Two, -1);
        assert_eq!(render(&duo), "J1: 2, J2: -1");

        let mut solo = ScoreBoard::solo();
        solo.adjust(Player::One, -3);
        assert_eq!(render(&solo), "J1: -3");
    }
}
