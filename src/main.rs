//! Interactive Janken Binary
//!
//! Zero-argument entry point. One invocation runs one session; the score
//! lives and dies with the loop.

use janken::play::console::Terminal;
use janken::play::dealer::Uniform;
use janken::play::session::Session;

fn main() {
    janken::log();
    log::info!("janken at the ready. throw a hand when prompted; cancel to quit.");
    Session::new(Terminal, Uniform::new()).play();
}
