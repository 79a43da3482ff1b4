// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! Compile-once caches shared across execution contexts.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A compiled module artifact plus the transformed source it was built from.
///
/// Immutable once inserted into the cache; all execution contexts read the
/// same instance by reference.
pub struct CompiledModule<P> {
    /// The engine-compiled program.
    pub program: P,
    /// The post-transform source text the program was compiled from.
    pub source: String,
}

/// Cache of compiled modules, keyed by canonical path.
///
/// Populated only while the single-threaded init phase evaluates the script
/// graph; append-only, never evicted during a run. Keying by canonical path
/// means every relative alias of a file shares one entry.
pub struct ModuleCache<P> {
    programs: DashMap<PathBuf, Arc<CompiledModule<P>>>,
}

impl<P> ModuleCache<P> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { programs: DashMap::new() }
    }

    /// Look up a compiled module by canonical path.
    pub fn get(&self, path: &Path) -> Option<Arc<CompiledModule<P>>> {
        self.programs.get(path).map(|entry| Arc::clone(entry.value()))
    }

    /// Insert a freshly compiled module.
    pub fn insert(&self, path: PathBuf, module: Arc<CompiledModule<P>>) {
        self.programs.insert(path, module);
    }

    /// Whether a path has been compiled.
    pub fn contains(&self, path: &Path) -> bool {
        self.programs.contains_key(path)
    }

    /// Number of cached modules.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

impl<P> Default for ModuleCache<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache of raw file contents populated by `open`.
///
/// Independent of the module cache: opening a file never compiles it, and
/// requiring a file never lands here.
pub struct FileCache {
    files: DashMap<PathBuf, Arc<[u8]>>,
}

impl FileCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { files: DashMap::new() }
    }

    /// Look up file contents by canonical path.
    pub fn get(&self, path: &Path) -> Option<Arc<[u8]>> {
        self.files.get(path).map(|entry| Arc::clone(entry.value()))
    }

    /// Insert freshly loaded contents.
    pub fn insert(&self, path: PathBuf, data: Arc<[u8]>) {
        self.files.insert(path, data);
    }

    /// Whether a path has been opened.
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    /// Number of cached files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for FileCache {
    fn default() -> Self {
        Self::new()
    }
}
