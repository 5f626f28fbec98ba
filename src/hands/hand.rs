/// A throwable janken hand.
///
/// The ordering is arbitrary but consistent; strategically all that matters
/// is the cyclic beats relation Rock → Scissors → Paper → Rock.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hand {
    #[default]
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Hand {
    /// Accepted spellings, shown in the prompt and in retry warnings.
    pub const HINTS: &'static str = "rock/scissors/paper, g/c/p, グー/チョキ/パー";

    /// All three hands in canonical order.
    pub const fn all() -> [Hand; 3] {
        [Hand::Rock, Hand::Scissors, Hand::Paper]
    }
    /// The hand this one defeats.
    pub const fn beats(&self) -> Hand {
        match self {
            Hand::Rock => Hand::Scissors,
            Hand::Scissors => Hand::Paper,
            Hand::Paper => Hand::Rock,
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Hand::Rock => "Rock",
            Hand::Scissors => "Scissors",
            Hand::Paper => "Paper",
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// str normalization
///
/// Trims surrounding whitespace and lowercases before matching the fixed
/// alias table. Katakana and hiragana spellings are both accepted. Total
/// over &str: anything outside the table is an Err, never a panic.
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "g" | "グー" | "ぐー" => Ok(Hand::Rock),
            "scissors" | "c" | "チョキ" | "ちょき" => Ok(Hand::Scissors),
            "paper" | "p" | "パー" | "ぱー" => Ok(Hand::Paper),
            _ => Err(format!("unrecognized hand: {}", s.trim())),
        }
    }
}
