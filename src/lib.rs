//! Confstore: Typed JSON Configuration Persistence
//!
//! Loading, saving, and first-run initialization of application-defined
//! configuration structs backed by pretty-printed JSON files on disk.

pub mod error;
pub mod paths;
pub mod store;

pub use error::StoreError;
pub use store::{init_if_absent, instantiate, load, save, Defaultable};
