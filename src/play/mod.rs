pub mod console;
pub use console::*;

pub mod dealer;
pub use dealer::*;

pub mod session;
pub use session::*;
