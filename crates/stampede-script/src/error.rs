// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! Error types for script initialization.

use stampede_engine::EngineError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for script initialization operations.
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Errors surfaced to `require`/`open` callers.
///
/// All failures propagate synchronously to the immediate caller; nothing is
/// retried and nothing is cached on an error path, so a failed load or
/// compile starts from scratch on the next attempt.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// A reserved-namespace specifier with no registry entry.
    #[error("unknown builtin module: {0}")]
    UnknownBuiltinModule(String),

    /// The specifier could not be resolved to an existing file.
    #[error("could not resolve module '{specifier}': {reason}")]
    Resolution {
        /// The specifier as the script wrote it.
        specifier: String,
        /// Why resolution failed.
        reason: String,
    },

    /// The resolved file exists but could not be read.
    #[error("could not load {}: {source}", .path.display())]
    Load {
        /// Canonical path of the unreadable file.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// The transform or engine compile rejected the module's source.
    #[error("could not compile {}: {message}", .filename.display())]
    Compile {
        /// Canonical path of the module that failed to compile.
        filename: PathBuf,
        /// Transform- or engine-provided diagnostic.
        message: String,
    },

    /// The module's top-level code raised an error while executing.
    #[error("error while executing {}: {source}", .path.display())]
    Execution {
        /// Canonical path of the failing module.
        path: PathBuf,
        /// The script-level error.
        #[source]
        source: EngineError,
    },

    /// A replicated context touched a path that was never loaded during the
    /// init phase. New files cannot be loaded once the run phase has begun.
    #[error("{} was not loaded during initialization", .path.display())]
    NotPreloaded {
        /// The canonical path the run-phase context asked for.
        path: PathBuf,
    },
}

impl ScriptError {
    /// Classify a loader failure: a missing target is a resolution error,
    /// anything else is a read failure.
    pub(crate) fn from_load(path: PathBuf, specifier: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ScriptError::Resolution {
                specifier: specifier.to_owned(),
                reason: format!("no such file: {}", path.display()),
            }
        } else {
            ScriptError::Load { path, source }
        }
    }
}
