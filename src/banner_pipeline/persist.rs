//! Persistence module
//!
//! Writes the composited banner back over the original, keeping a sibling
//! backup of the original bytes. Every write is all-or-nothing.

mod backup;

pub use backup::{BackupPersister, backup_path, write_atomic};
