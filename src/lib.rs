pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpFetcher;
pub use adapters::storage::LocalStorage;
pub use config::catalog::SourceCatalog;
pub use config::CliConfig;
pub use core::engine::RuleGenEngine;
pub use domain::model::{Domain, DomainSet, RenderTarget, RuleSource};
pub use utils::error::{Result, RuleGenError};
