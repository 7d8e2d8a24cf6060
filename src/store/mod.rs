mod builder;
mod store;

pub use builder::FileBackedMapBuilder;
pub use store::FileBackedMap;
