// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! # stampede-engine
//!
//! The embedding interface between stampede and the script engine that runs
//! its test scripts.
//!
//! Stampede does not ship an engine of its own; it drives whichever engine
//! the host process links in, and talks to it exclusively through the types
//! in this crate:
//!
//! - [`Value`]: the boundary object model exchanged with scripts
//! - [`Engine`]: one engine instance per execution context
//! - [`Host`]: the surface a running script may call back into
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stampede_engine::{Engine, Value};
//!
//! let program = engine.compile("script.js", "exports.answer = 42;")?;
//! let result = engine.run(&program, &mut host)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod value;

// Re-exports for convenience
pub use error::EngineError;
pub use value::{NativeFn, NativeResult, Object, Value};

/// One script-engine *instance*: a global binding table plus an executor for
/// precompiled programs.
///
/// Cloning an `Engine` produces another handle to the **same** instance;
/// how the instance shares its internals between handles is the engine's
/// business. An instance is never shared between execution contexts; each
/// worker binds its own.
pub trait Engine: Clone {
    /// Opaque compiled program artifact.
    ///
    /// Programs are immutable once compiled and may be executed by any
    /// instance of the same engine, which is what lets one compilation be
    /// shared across every worker context.
    type Program: Send + Sync + 'static;

    /// Compile `source` into an executable program.
    ///
    /// `filename` is the canonical path of the module being compiled and
    /// shows up in engine-side diagnostics and stack traces.
    fn compile(&self, filename: &str, source: &str) -> Result<Self::Program, EngineError>;

    /// Execute a compiled program to completion in this instance.
    ///
    /// Execution is synchronous; the program may re-enter the host through
    /// `host` (nested `require`/`open` calls) while it runs. The returned
    /// value is the program's completion value, not its exports.
    fn run(&self, program: &Self::Program, host: &mut dyn Host) -> Result<Value, EngineError>;

    /// Read a global binding; missing bindings read as [`Value::Undefined`].
    fn global(&self, name: &str) -> Value;

    /// Write a global binding.
    fn set_global(&self, name: &str, value: Value);
}

/// The host surface a running program may call back into.
///
/// Errors returned from these methods cross into the engine as script-level
/// exceptions ([`EngineError::Runtime`]), so script authors see the failure
/// at the call site that caused it.
pub trait Host {
    /// Load a module and return its exported value.
    fn require(&mut self, specifier: &str) -> Result<Value, EngineError>;

    /// Read a file's text content without executing it.
    fn open(&mut self, specifier: &str) -> Result<String, EngineError>;
}
