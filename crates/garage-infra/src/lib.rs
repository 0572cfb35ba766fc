//! Infrastructure layer - record codec, flat-file store, repository implementation

pub mod file_store;
pub mod persistence;
pub mod record_codec;

pub use file_store::FileStore;
