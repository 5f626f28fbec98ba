/// One control state of the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting on the player to name a hand.
    Prompting,
    /// Player committed a hand; the dealer answers and the round settles.
    Judging(Hand),
    /// Round settled; waiting on the replay decision.
    Replaying,
    /// Session over.
    Over,
}

/// One interactive session: a loop of rounds over a single Score.
///
/// The console and dealer are injected, so the loop runs the same against
/// a live terminal or scripted test doubles.
pub struct Session<C, D> {
    console: C,
    dealer: D,
    score: Score,
}

impl<C, D> Session<C, D>
where
    C: Console,
    D: Dealer,
{
    pub fn new(console: C, dealer: D) -> Self {
        Self {
            console,
            dealer,
            score: Score::default(),
        }
    }

    /// Run rounds until the player cancels the prompt or declines a replay.
    /// Returns the final score.
    pub fn play(mut self) -> Score {
        let mut phase = Phase::Prompting;
        while phase != Phase::Over {
            phase = self.advance(phase);
        }
        self.score
    }

    fn advance(&mut self, phase: Phase) -> Phase {
        match phase {
            Phase::Prompting => self.prompting(),
            Phase::Judging(hand) => self.judging(hand),
            Phase::Replaying => self.replaying(),
            Phase::Over => Phase::Over,
        }
    }

    /// Cancelling ends the session; unrecognized text warns and re-prompts.
    /// The empty string is unrecognized, not a cancel.
    fn prompting(&mut self) -> Phase {
        match self.console.request() {
            None => {
                log::info!("ending the session.");
                Phase::Over
            }
            Some(text) => match Hand::try_from(text.as_str()) {
                Ok(hand) => Phase::Judging(hand),
                Err(_) => {
                    log::warn!("did not catch that. try {}", Hand::HINTS);
                    Phase::Prompting
                }
            },
        }
    }

    /// One completed round: draw, judge, tally, then three transcript lines
    /// in fixed order: hands shown, outcome, running summary.
    fn judging(&mut self, player: Hand) -> Phase {
        let cpu = self.dealer.deal();
        let outcome = Outcome::judge(player, cpu);
        self.score.tally(outcome);
        log::info!("you: {} / computer: {}", player, cpu);
        log::info!("{}", outcome);
        log::info!("{}", self.score);
        Phase::Replaying
    }

    fn replaying(&mut self) -> Phase {
        match self.console.replay() {
            true => Phase::Prompting,
            false => {
                log::info!("thanks for playing!");
                Phase::Over
            }
        }
    }
}

use super::console::Console;
use super::dealer::Dealer;
use crate::hands::hand::Hand;
use crate::hands::outcome::Outcome;
use crate::hands::score::Score;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted console: predetermined answers, then cancellation.
    struct Script {
        answers: VecDeque<Option<String>>,
        replays: VecDeque<bool>,
    }

    impl Script {
        fn new(answers: &[Option<&str>], replays: &[bool]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.map(String::from)).collect(),
                replays: replays.iter().copied().collect(),
            }
        }
    }

    impl Console for Script {
        fn request(&mut self) -> Option<String> {
            self.answers.pop_front().flatten()
        }
        fn replay(&mut self) -> bool {
            self.replays.pop_front().unwrap_or(false)
        }
    }

    /// Scripted dealer: a stacked deck of opponent hands.
    struct Stacked(VecDeque<Hand>);

    impl Stacked {
        fn new(hands: &[Hand]) -> Self {
            Self(hands.iter().copied().collect())
        }
    }

    impl Dealer for Stacked {
        fn deal(&mut self) -> Hand {
            self.0.pop_front().expect("a scripted hand for every round")
        }
    }

    #[test]
    fn cancel_at_first_prompt_ends_scoreless() {
        let console = Script::new(&[None], &[]);
        let dealer = Stacked::new(&[]);
        let score = Session::new(console, dealer).play();
        assert_eq!(score, Score::default());
    }

    #[test]
    fn rock_over_scissors_counts_one_win() {
        let console = Script::new(&[Some("rock")], &[false]);
        let dealer = Stacked::new(&[Hand::Scissors]);
        let score = Session::new(console, dealer).play();
        assert_eq!(score.wins(), 1);
        assert_eq!(score.losses(), 0);
        assert_eq!(score.draws(), 0);
    }

    #[test]
    fn unrecognized_text_reprompts_without_scoring() {
        let console = Script::new(&[Some("xyz"), None], &[]);
        let dealer = Stacked::new(&[]);
        let score = Session::new(console, dealer).play();
        assert_eq!(score.rounds(), 0);
    }

    #[test]
    fn empty_input_retries_rather_than_cancelling() {
        let console = Script::new(&[Some(""), Some("g")], &[false]);
        let dealer = Stacked::new(&[Hand::Scissors]);
        let score = Session::new(console, dealer).play();
        assert_eq!(score.wins(), 1);
    }

    #[test]
    fn declining_replay_stops_after_one_round() {
        let console = Script::new(&[Some("paper"), Some("paper")], &[false]);
        let dealer = Stacked::new(&[Hand::Paper, Hand::Paper]);
        let score = Session::new(console, dealer).play();
        assert_eq!(score.rounds(), 1);
    }

    #[test]
    fn tally_matches_rounds_played() {
        let console = Script::new(
            &[Some("rock"), Some("paper"), Some("scissors")],
            &[true, true, false],
        );
        let dealer = Stacked::new(&[Hand::Rock, Hand::Rock, Hand::Rock]);
        let score = Session::new(console, dealer).play();
        assert_eq!(score.rounds(), 3);
        assert_eq!(score.wins(), 1);
        assert_eq!(score.losses(), 1);
        assert_eq!(score.draws(), 1);
    }

    #[test]
    fn japanese_alias_plays_a_round() {
        let console = Script::new(&[Some("ぐー")], &[false]);
        let dealer = Stacked::new(&[Hand::Scissors]);
        let score = Session::new(console, dealer).play();
        assert_eq!(score.wins(), 1);
    }
}
