//! Common types and traits for all list records

pub mod record_id;

// Re-exports
pub use record_id::{Identified, RecordId};
