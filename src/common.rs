pub(crate) mod finite;
pub mod types;
pub mod utils;
