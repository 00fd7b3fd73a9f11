pub mod presenter;
pub mod state;

pub use presenter::{input_hints, render_session};
pub use state::{Command, Session, SessionEvent};
