/// Boundary for the two blocking interactions a round needs.
///
/// The session never touches dialoguer directly; an implementation can be a
/// live terminal or a scripted sequence in tests.
pub trait Console {
    /// Request a hand as free text. None means the player cancelled.
    fn request(&mut self) -> Option<String>;
    /// Ask whether to play another round.
    fn replay(&mut self) -> bool;
}

/// Live terminal console.
///
/// EOF, interrupt, or a missing tty reads as cancellation on the hand
/// prompt and as declining on the replay prompt. An empty line is a
/// non-answer, not a cancel.
#[derive(Debug, Default)]
pub struct Terminal;

impl Console for Terminal {
    fn request(&mut self) -> Option<String> {
        Input::new()
            .with_prompt(format!("janken! {} (ctrl-d to quit)", Hand::HINTS))
            .allow_empty(true)
            .report(false)
            .interact_text()
            .ok()
    }
    fn replay(&mut self) -> bool {
        Confirm::new()
            .with_prompt("play again?")
            .default(true)
            .report(false)
            .interact()
            .unwrap_or(false)
    }
}

use crate::hands::hand::Hand;
use dialoguer::Confirm;
use dialoguer::Input;
