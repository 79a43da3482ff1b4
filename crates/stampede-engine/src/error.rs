// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! Errors crossing the engine boundary.

use thiserror::Error;

/// An error reported by the script engine.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// The engine rejected a source text at compile time.
    #[error("compile error in {filename}: {message}")]
    Compile {
        /// Canonical path of the module that failed to compile.
        filename: String,
        /// Engine-provided diagnostic.
        message: String,
    },

    /// A script-level error raised while a program was executing.
    ///
    /// Host failures that reach a running script travel through this variant
    /// too, which is how a nested `require` failure surfaces as an exception
    /// at the requiring call site.
    #[error("{0}")]
    Runtime(String),
}

impl EngineError {
    /// Create a runtime (script-level) error.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime(message.into())
    }
}
