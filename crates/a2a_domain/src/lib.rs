mod agent_card;
mod capability;
mod config;
mod context;
mod error;
mod probe;
mod report;
mod services;

pub use agent_card::*;
pub use capability::*;
pub use config::*;
pub use context::*;
pub use error::*;
pub use probe::*;
pub use report::*;
pub use services::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
