mod event;
mod language;
mod session;
mod translator;

pub use event::*;
pub use language::*;
pub use session::*;
pub use translator::*;
