pub mod record;
pub mod source;

// Re-export key types for convenience
pub use record::{format_time, Dated, Record};
pub use source::DataSource;
