pub mod applist;
pub mod engine;
pub mod gfwlist;
pub mod merge;
pub mod overrides;
pub mod render;

pub use crate::domain::model::{Domain, DomainSet, RenderTarget, RuleSource};
pub use crate::domain::ports::{ConfigProvider, Fetcher, Storage};
pub use crate::utils::error::Result;
