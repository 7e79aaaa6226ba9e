pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod loader;
pub mod pipeline;
pub mod text;
pub mod writer;

// Re-export commonly used types
pub use config::IndexConfig;
pub use document::{RecordType, SearchRecord};
pub use error::{IndexError, Result};
pub use loader::Site;
pub use pipeline::{IndexReport, Indexer, Stage, StageStatus, STAGES, TOC_STAGE};
pub use text::{normalize, truncate};
pub use writer::{write_index, WriteSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
