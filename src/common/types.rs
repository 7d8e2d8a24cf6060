use std::collections::BTreeMap;

/// String-keyed mapping persisted by a [`crate::store::FileBackedMap`].
pub type Payload<T> = BTreeMap<String, T>;

pub const DEFAULT_INDENT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Spaces per nesting level in the written JSON.
    pub indent: usize,
    /// Write to a sibling temp file and rename it over the target.
    pub atomic: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            indent: DEFAULT_INDENT,
            atomic: false,
        }
    }
}
