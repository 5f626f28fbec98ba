use super::hand::Hand;
use colored::Colorize;

/// Result of one round, from the player's perspective.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Judge a pair of hands from the player's perspective.
    /// Total over all nine pairs.
    pub fn judge(player: Hand, cpu: Hand) -> Self {
        if player == cpu {
            Outcome::Draw
        } else {
            match player.beats() == cpu {
                true => Outcome::Win,
                false => Outcome::Lose,
            }
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "{}", "you win!".green()),
            Outcome::Lose => write!(f, "{}", "the computer takes this one".red()),
            Outcome::Draw => write!(f, "{}", "a draw. go again!".yellow()),
        }
    }
}
