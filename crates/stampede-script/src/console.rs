// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! The console sink scripts log through.
//!
//! One [`Console`] is created with the base init context and shared by
//! reference with every replicated context, so all workers' script output
//! funnels into the same sink.

use parking_lot::Mutex;
use stampede_engine::{NativeFn, Object, Value};
use std::io::{self, Write};
use std::sync::Arc;

/// Log levels understood by the script `console` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// `console.debug`
    Debug,
    /// `console.log`
    Log,
    /// `console.info`
    Info,
    /// `console.warn`
    Warn,
    /// `console.error`
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Log => "log",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

/// Sink for script console output.
pub struct Console {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    /// Console writing to stderr.
    pub fn new() -> Self {
        Self::with_sink(Box::new(io::stderr()))
    }

    /// Console writing to an arbitrary sink. Used by embedders that collect
    /// script output per run, and by tests.
    pub fn with_sink(sink: Box<dyn Write + Send>) -> Self {
        Self { sink: Mutex::new(sink) }
    }

    /// Write one log line and mirror it to the ambient `tracing` layer.
    pub fn write(&self, level: Level, message: &str) {
        match level {
            Level::Debug => tracing::debug!(target: "console", "{message}"),
            Level::Log | Level::Info => tracing::info!(target: "console", "{message}"),
            Level::Warn => tracing::warn!(target: "console", "{message}"),
            Level::Error => tracing::error!(target: "console", "{message}"),
        }

        let mut sink = self.sink.lock();
        let _ = writeln!(sink, "{:<5} {}", level.as_str(), message);
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the script-visible `console` object backed by `console`.
pub fn console_object(console: &Arc<Console>) -> Value {
    let methods = [
        ("debug", Level::Debug),
        ("log", Level::Log),
        ("info", Level::Info),
        ("warn", Level::Warn),
        ("error", Level::Error),
    ];

    let object = Object::new();
    for (name, level) in methods {
        let console = Arc::clone(console);
        object.set(
            name,
            Value::Function(NativeFn::new(move |args| {
                console.write(level, &format_line(args));
                Ok(Value::Undefined)
            })),
        );
    }
    Value::Object(object)
}

fn format_line(args: &[Value]) -> String {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&arg.to_string());
    }
    line
}
