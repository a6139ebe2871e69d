pub mod cli;
pub mod command;
pub mod commands;
mod completer;
pub mod logging;
pub mod presenter;
pub mod session;
mod ui;

pub use cli::Cli;
pub use command::{Command, CommandError, CommandName};
pub use presenter::{ConsolePresenter, Line, Panel, Presenter, Span, Tone};
pub use session::Session;
pub use ui::UI;
