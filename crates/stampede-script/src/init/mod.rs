// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! Init-phase module loading and execution contexts.
//!
//! [`InitContext`] is the resolution-and-require engine: it classifies
//! specifiers, resolves and caches file modules, executes them, and
//! replicates itself into per-worker contexts that share the caches.

mod cache;
mod context;

pub use cache::{CompiledModule, FileCache, ModuleCache};
pub use context::InitContext;
