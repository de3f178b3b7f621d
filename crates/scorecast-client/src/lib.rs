//! scorecast-client — prediction service integrations.
//!
//! Implements the `ScoreService` trait over HTTP for the scoring service,
//! plus configuration loading and a mock service for tests.

pub mod config;
pub mod http;
pub mod mock;

pub use config::{create_service, load_config, ClientConfig};
pub use http::HttpScoreService;
pub use mock::MockScoreService;
