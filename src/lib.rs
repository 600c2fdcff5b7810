//! HomeLedger: an in-process record store for a family finance dashboard.
//!
//! [`Store`] holds accounts, categories, family members, transactions and
//! savings scenarios, keeps the references between them valid, and writes
//! every change through to a [`Storage`] backend. The [`analytics`] module
//! turns a snapshot into the rollups the dashboard charts display.

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{EntityKind, Result, StorageError, StoreError};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{LoadReport, Repair, RepairAction, SharedStore, Snapshot, Store};
