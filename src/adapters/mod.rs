// Adapters layer: concrete implementations for external systems (http fetch + disk cache, local output).

pub mod http;
pub mod storage;
