//! fitlog Storage
//!
//! - **types**: the `Student` record, its six mutable `StudentFields`, `Status`
//! - **store**: SQLite-backed `RecordStore`
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use fitlog::storage::{RecordStore, StorageConfig, StudentFields};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = RecordStore::open(&StorageConfig::new("./data"))?;
//!
//!     let entry = store.insert(
//!         StudentFields::default()
//!             .name("2024-01-01")
//!             .status("Healthy")
//!             .exercise("20", "5", "60"),
//!     )?;
//!
//!     let all = store.list()?;
//!     println!("{} entries, newest id {}", all.len(), entry.id);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::{StorageError, StorageResult};
pub use store::{RecordStore, StorageConfig};
pub use types::{FieldError, Status, Student, StudentFields, MAX_TEXT_LEN};
