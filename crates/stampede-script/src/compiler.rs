// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! Source-to-source transforms applied before engine compilation.

use crate::error::Result;

/// Output of a source transform.
#[derive(Debug, Clone)]
pub struct Transformed {
    /// The source text the engine will compile.
    pub source: String,
    /// Source map emitted by the transform, if it produces one.
    pub source_map: Option<String>,
}

/// A transform run on every module's source text before the engine compiles
/// it (down-leveling, type stripping, instrumentation).
///
/// Transforms run once per module path; the transformed source is cached
/// alongside the compiled program. A failed transform surfaces as a compile
/// error and is not cached, so the next require of the same path retries.
pub trait Compiler: Send + Sync {
    /// Transform `source`. `filename` is the module's canonical path, for
    /// diagnostics and source-map emission.
    fn transform(&self, source: &str, filename: &str) -> Result<Transformed>;
}

/// Identity transform for engines that consume scripts as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCompiler;

impl Compiler for PassthroughCompiler {
    fn transform(&self, source: &str, _filename: &str) -> Result<Transformed> {
        Ok(Transformed { source: source.to_owned(), source_map: None })
    }
}
