// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! The resolution-and-require engine.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use stampede_engine::{Engine, EngineError, Host, Object, Value};
use tracing::debug;

use crate::builtins::{self, Binding, BuiltinRegistry};
use crate::cancel::CancelToken;
use crate::compiler::Compiler;
use crate::console::{self, Console};
use crate::error::{Result, ScriptError};
use crate::init::cache::{CompiledModule, FileCache, ModuleCache};
use crate::loader::{self, SourceLoader};

/// One execution context: an engine instance plus the module state that
/// `require` and `open` operate on.
///
/// A single *base* context evaluates the whole script graph during the
/// single-threaded init phase, populating the module and file caches. Worker
/// contexts produced by [`InitContext::bind`] share those caches, the builtin
/// registry and the console by reference, and own everything per-worker: the
/// engine instance, the working directory and the cancellation handle.
pub struct InitContext<E: Engine> {
    /// Bound engine instance; used to run programs and swap global bindings.
    engine: E,

    /// Cancellation handle injected into builtin bindings.
    cancel: CancelToken,

    /// Directory of the module currently being loaded; relative specifiers
    /// resolve against it.
    pwd: PathBuf,

    /// Absent from bound contexts, so the run phase can never load files
    /// the init phase did not.
    source: Option<Arc<dyn SourceLoader>>,

    /// Transform applied to module source before engine compilation.
    compiler: Arc<dyn Compiler>,

    /// Cache of compiled modules, shared across all contexts.
    modules: Arc<ModuleCache<E::Program>>,

    /// Cache of opened files, shared across all contexts.
    files: Arc<FileCache>,

    /// Builtin module index.
    registry: &'static BuiltinRegistry,

    /// Console sink, shared across all contexts.
    console: Arc<Console>,
}

impl<E: Engine> InitContext<E> {
    /// Create the base context for the init phase.
    ///
    /// `pwd` is the absolute directory the entry script lives in; it anchors
    /// every relative specifier the script graph uses. The `console` global
    /// is installed into `engine` as part of construction.
    pub fn new(
        engine: E,
        cancel: CancelToken,
        source: Arc<dyn SourceLoader>,
        compiler: Arc<dyn Compiler>,
        pwd: PathBuf,
        console: Arc<Console>,
    ) -> Self {
        Self::assemble(
            engine,
            cancel,
            Some(source),
            compiler,
            pwd,
            Arc::new(ModuleCache::new()),
            Arc::new(FileCache::new()),
            console,
        )
    }

    /// Replicate this context for a new worker.
    ///
    /// The caches, builtin registry, console and compiler are shared by
    /// reference; the new context owns the supplied engine instance and
    /// cancellation handle and starts from this context's current directory.
    /// The loader is deliberately left behind: a bound context only sees
    /// modules and files that were loaded during init, and anything else
    /// fails with [`ScriptError::NotPreloaded`].
    ///
    /// Call this after the init phase has finished and before concurrent
    /// execution begins.
    pub fn bind(&self, engine: E, cancel: CancelToken) -> Self {
        Self::assemble(
            engine,
            cancel,
            None,
            Arc::clone(&self.compiler),
            self.pwd.clone(),
            Arc::clone(&self.modules),
            Arc::clone(&self.files),
            Arc::clone(&self.console),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        engine: E,
        cancel: CancelToken,
        source: Option<Arc<dyn SourceLoader>>,
        compiler: Arc<dyn Compiler>,
        pwd: PathBuf,
        modules: Arc<ModuleCache<E::Program>>,
        files: Arc<FileCache>,
        console: Arc<Console>,
    ) -> Self {
        engine.set_global("console", console::console_object(&console));
        Self {
            engine,
            cancel,
            pwd,
            source,
            compiler,
            modules,
            files,
            registry: builtins::index(),
            console,
        }
    }

    /// Look up `specifier` and return its exported value.
    ///
    /// Names under the reserved namespace come from the builtin registry;
    /// anything else is loaded from the filesystem relative to the current
    /// module's directory. File modules re-run their top-level code on every
    /// call and produce a fresh exports object each time: import side
    /// effects repeat, and two calls never share export state.
    pub fn require(&mut self, specifier: &str) -> Result<Value> {
        if builtins::is_reserved(specifier) {
            self.require_builtin(specifier)
        } else {
            self.require_file(specifier)
        }
    }

    /// Read a file's raw text content relative to the current module's
    /// directory. The file is never compiled or executed; contents are
    /// cached, so repeated opens of the same path hit the loader once.
    pub fn open(&self, specifier: &str) -> Result<String> {
        let filename = loader::resolve(&self.pwd, specifier)?;

        let data = match self.files.get(&filename) {
            Some(data) => data,
            None => {
                let source = self
                    .source
                    .as_ref()
                    .ok_or_else(|| ScriptError::NotPreloaded { path: filename.clone() })?;
                let bytes = source
                    .load(&filename)
                    .map_err(|err| ScriptError::from_load(filename.clone(), specifier, err))?;
                let data: Arc<[u8]> = bytes.into();
                self.files.insert(filename.clone(), Arc::clone(&data));
                data
            }
        };

        Ok(String::from_utf8_lossy(&data).into_owned())
    }

    /// The engine instance this context is bound to.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The cancellation handle native calls in this context observe.
    pub fn cancel(&self) -> &CancelToken {
        &self.cancel
    }

    /// Directory relative specifiers currently resolve against.
    pub fn pwd(&self) -> &Path {
        &self.pwd
    }

    /// The shared module cache.
    pub fn modules(&self) -> &ModuleCache<E::Program> {
        &self.modules
    }

    /// The shared file cache.
    pub fn files(&self) -> &FileCache {
        &self.files
    }

    /// The shared console sink.
    pub fn console(&self) -> &Arc<Console> {
        &self.console
    }

    fn require_builtin(&self, name: &str) -> Result<Value> {
        let module = self
            .registry
            .get(name)
            .ok_or_else(|| ScriptError::UnknownBuiltinModule(name.to_owned()))?;
        Ok(module.bind(&Binding { cancel: self.cancel.clone() }))
    }

    fn require_file(&mut self, specifier: &str) -> Result<Value> {
        let filename = loader::resolve(&self.pwd, specifier)?;

        // Push the target's directory as pwd so nested requires resolve
        // relative to the module being loaded.
        let saved_pwd = std::mem::replace(&mut self.pwd, loader::dir_of(&filename));

        // Swap the importing scope's export surface out. `module.exports`
        // starts as an alias of `exports`; the module may re-point it.
        let saved_exports = self.engine.global("exports");
        let saved_module = self.engine.global("module");

        let exports = Object::new();
        self.engine.set_global("exports", Value::Object(exports.clone()));
        let module = Object::new();
        module.set("exports", Value::Object(exports));
        self.engine.set_global("module", Value::Object(module.clone()));

        let outcome = self.load_and_run(&filename, specifier);

        // Restore on every exit path, error or not.
        self.pwd = saved_pwd;
        self.engine.set_global("exports", saved_exports);
        self.engine.set_global("module", saved_module);
        outcome?;

        Ok(module.get("exports"))
    }

    fn load_and_run(&mut self, filename: &Path, specifier: &str) -> Result<()> {
        let compiled = self.program_for(filename, specifier)?;
        // Clone the engine handle so the context can be lent out as the host.
        let engine = self.engine.clone();
        engine
            .run(&compiled.program, self)
            .map(drop)
            .map_err(|source| ScriptError::Execution { path: filename.to_path_buf(), source })
    }

    /// Fetch the compiled program for `filename`, compiling and caching it on
    /// first encounter. Failed loads and compiles are not cached; the next
    /// require of the same path starts over.
    fn program_for(&self, filename: &Path, specifier: &str) -> Result<Arc<CompiledModule<E::Program>>> {
        if let Some(compiled) = self.modules.get(filename) {
            debug!(module = %filename.display(), "module cache hit");
            return Ok(compiled);
        }

        let source = self
            .source
            .as_ref()
            .ok_or_else(|| ScriptError::NotPreloaded { path: filename.to_path_buf() })?;
        let data = source
            .load(filename)
            .map_err(|err| ScriptError::from_load(filename.to_path_buf(), specifier, err))?;

        let name = filename.display().to_string();
        let text = String::from_utf8_lossy(&data);
        let transformed = self.compiler.transform(&text, &name)?;
        let program = self
            .engine
            .compile(&name, &transformed.source)
            .map_err(|err| match err {
                EngineError::Compile { filename, message } => {
                    ScriptError::Compile { filename: PathBuf::from(filename), message }
                }
                other => ScriptError::Compile {
                    filename: filename.to_path_buf(),
                    message: other.to_string(),
                },
            })?;
        debug!(module = %name, "compiled module");

        let compiled = Arc::new(CompiledModule { program, source: transformed.source });
        self.modules.insert(filename.to_path_buf(), Arc::clone(&compiled));
        Ok(compiled)
    }
}

impl<E: Engine> Host for InitContext<E> {
    fn require(&mut self, specifier: &str) -> std::result::Result<Value, EngineError> {
        InitContext::require(self, specifier).map_err(|err| EngineError::runtime(err.to_string()))
    }

    fn open(&mut self, specifier: &str) -> std::result::Result<String, EngineError> {
        InitContext::open(self, specifier).map_err(|err| EngineError::runtime(err.to_string()))
    }
}
