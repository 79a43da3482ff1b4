// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! # stampede-script
//!
//! Script initialization and module loading for the stampede load generator.
//!
//! A stampede test run has two strictly ordered phases. During the **init
//! phase** a single [`InitContext`] evaluates the entry script and everything
//! it transitively `require`s, compiling each module once and caching the
//! compiled artifact by canonical path. Before the **run phase** starts, the
//! base context is replicated with [`InitContext::bind`]: one copy per
//! virtual user, each with its own engine instance and cancellation handle,
//! all sharing the pre-warmed caches read-only.
//!
//! Scripts see two host calls:
//!
//! - `require(specifier)`: `stampede` and `stampede/...` names come from the
//!   builtin registry; anything else is a filesystem path resolved against
//!   the requiring module's directory. File modules re-run their top-level
//!   code on every call and hand back a fresh exports object each time.
//! - `open(specifier)`: raw text content of a file, cached, never executed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stampede_script::{CancelToken, FsLoader, InitContext, PassthroughCompiler};
//!
//! let mut init = InitContext::new(
//!     engine,
//!     CancelToken::new(),
//!     Arc::new(FsLoader),
//!     Arc::new(PassthroughCompiler),
//!     script_dir,
//!     Arc::new(Console::new()),
//! );
//! let exports = init.require("./script.js")?;
//!
//! // one bound context per worker, pre-warmed caches shared
//! let worker = init.bind(worker_engine, worker_token);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod cancel;
pub mod compiler;
pub mod console;
pub mod error;
pub mod init;
pub mod loader;

// Re-exports
pub use cancel::CancelToken;
pub use compiler::{Compiler, PassthroughCompiler, Transformed};
pub use console::Console;
pub use error::{Result, ScriptError};
pub use init::{CompiledModule, FileCache, InitContext, ModuleCache};
pub use loader::{FsLoader, SourceLoader};

/// Version of the script subsystem.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
