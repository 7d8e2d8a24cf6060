use std::{marker::PhantomData, path::PathBuf};

use super::store::FileBackedMap;
use crate::common::types::StoreOptions;
use crate::error::JsonMapError;

pub struct FileBackedMapBuilder<T> {
    path: Option<PathBuf>,
    indent: Option<usize>,
    atomic: Option<bool>,
    _payload: PhantomData<fn() -> T>,
}

impl<T> FileBackedMapBuilder<T> {
    pub fn new() -> Self {
        FileBackedMapBuilder {
            path: Option::<PathBuf>::None,
            indent: Option::<usize>::None,
            atomic: Option::<bool>::None,
            _payload: PhantomData,
        }
    }

    pub fn path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    pub fn indent(&mut self, indent: usize) -> &mut Self {
        self.indent = Some(indent);
        self
    }

    pub fn atomic(&mut self, atomic: bool) -> &mut Self {
        self.atomic = Some(atomic);
        self
    }

    pub fn build(&self) -> Result<FileBackedMap<T>, JsonMapError> {
        let Some(path) = self.path.as_ref() else {
            return Err(JsonMapError::Simple("No target path defined".to_string()));
        };

        let defaults = StoreOptions::default();
        let options = StoreOptions {
            indent: self.indent.unwrap_or(defaults.indent),
            atomic: self.atomic.unwrap_or(defaults.atomic),
        };

        Ok(FileBackedMap::with_options(path, options))
    }
}

impl<T> Default for FileBackedMapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
