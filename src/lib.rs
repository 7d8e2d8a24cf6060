pub mod error;
pub mod store;

mod common;

pub use common::types::{Payload, StoreOptions, DEFAULT_INDENT};
pub use error::JsonMapError;
pub use store::{FileBackedMap, FileBackedMapBuilder};
