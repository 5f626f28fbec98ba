use super::outcome::Outcome;
use colored::Colorize;

/// Running tally for one session.
///
/// wins + losses + draws always equals the number of completed rounds;
/// input that never produced an outcome never touches the tally.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Score {
    /// Record one completed round.
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    /// Number of completed rounds.
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn draws(&self) -> u32 {
        self.draws
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "record: {} wins, {} losses, {} draws",
            format!("{}", self.wins).green(),
            format!("{}", self.losses).red(),
            self.draws,
        )
    }
}
