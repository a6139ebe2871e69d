//! Endpoint resolution, agent metadata discovery and connectivity probes for
//! A2A agents. Every public operation is total: failures come back as values
//! and never as errors.

mod aggregator;
mod diagnostics;
mod fetcher;
mod http;
#[cfg(test)]
#[path = "../build/lockfile.rs"]
mod lockfile;
mod prober;
pub mod resolver;
#[cfg(test)]
mod test_utils;

pub use aggregator::dependency_versions;
pub use diagnostics::Diagnostics;
pub use fetcher::{agent_card_url, AGENT_CARD_PATH};
pub use http::ReqwestHttpService;
pub use prober::send_subscribe_request;
