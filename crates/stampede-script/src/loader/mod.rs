// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! Source loading and path resolution.

mod resolver;

pub use resolver::{dir_of, resolve};

use std::io;
use std::path::Path;

/// Reads raw bytes for a resolved canonical path.
///
/// The loader never resolves specifiers itself; the require engine resolves
/// first and hands it canonical paths, so every distinct alias of a file hits
/// the same loader key.
pub trait SourceLoader: Send + Sync {
    /// Read the file at `path` in full.
    fn load(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Loader backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}
