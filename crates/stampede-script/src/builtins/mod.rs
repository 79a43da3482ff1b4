// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! Builtin native modules.
//!
//! Names under the reserved `stampede` namespace never touch the filesystem;
//! they are served from a static registry built once per process. This
//! intentionally shadows any attempt to name your own script files after
//! them.

mod core;
mod crypto;
mod encoding;

use crate::cancel::CancelToken;
use rustc_hash::FxHashMap;
use stampede_engine::{EngineError, Value};
use std::sync::{Arc, LazyLock};

/// Root of the reserved specifier namespace.
pub const RESERVED_ROOT: &str = "stampede";

/// True when `specifier` names a builtin rather than a file: the reserved
/// root itself, or anything under `stampede/`.
pub fn is_reserved(specifier: &str) -> bool {
    match specifier.strip_prefix(RESERVED_ROOT) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// Per-caller context injected when a builtin module is bound.
pub struct Binding {
    /// Cancellation handle of the requiring execution context; native calls
    /// capture it so they can observe timeouts without extra plumbing.
    pub cancel: CancelToken,
}

/// A native module exposed under the reserved namespace.
pub trait BuiltinModule: Send + Sync {
    /// Materialize the module's script-visible surface.
    ///
    /// Called on every require; the returned value's functions capture
    /// `binding`, which is what ties a native call to the right context.
    fn bind(&self, binding: &Binding) -> Value;
}

/// Static table of builtin modules. Lookup is exact string match.
pub struct BuiltinRegistry {
    modules: FxHashMap<&'static str, Arc<dyn BuiltinModule>>,
}

impl BuiltinRegistry {
    fn new() -> Self {
        Self { modules: FxHashMap::default() }
    }

    fn register(&mut self, name: &'static str, module: impl BuiltinModule + 'static) {
        self.modules.insert(name, Arc::new(module));
    }

    /// Look up a builtin module by its exact specifier.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn BuiltinModule>> {
        self.modules.get(name)
    }

    /// Registered specifiers, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.keys().copied()
    }
}

/// The process-wide builtin index, built on first use and read-only for the
/// process lifetime.
pub fn index() -> &'static BuiltinRegistry {
    static INDEX: LazyLock<BuiltinRegistry> = LazyLock::new(|| {
        let mut registry = BuiltinRegistry::new();
        registry.register(RESERVED_ROOT, core::Core);
        registry.register("stampede/encoding", encoding::Encoding);
        registry.register("stampede/crypto", crypto::Crypto);
        registry
    });
    &INDEX
}

/// Coerce a positional argument to a string, with a call-site-named error.
pub(crate) fn string_arg(args: &[Value], index: usize, name: &str) -> Result<String, EngineError> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(EngineError::runtime(format!(
            "{name}: argument {index} must be a string, got {}",
            other.type_name()
        ))),
        None => Err(EngineError::runtime(format!("{name}: missing argument {index}"))),
    }
}

/// Coerce a positional argument to a number, with a call-site-named error.
pub(crate) fn number_arg(args: &[Value], index: usize, name: &str) -> Result<f64, EngineError> {
    match args.get(index) {
        Some(Value::Number(n)) => Ok(*n),
        Some(other) => Err(EngineError::runtime(format!(
            "{name}: argument {index} must be a number, got {}",
            other.type_name()
        ))),
        None => Err(EngineError::runtime(format!("{name}: missing argument {index}"))),
    }
}
