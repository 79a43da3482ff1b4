// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! The `stampede` root module.

use super::{Binding, BuiltinModule, number_arg};
use stampede_engine::{EngineError, NativeFn, Object, Value};
use std::thread;
use std::time::{Duration, Instant};

/// Sleep in short slices so cancellation is observed promptly.
const SLEEP_SLICE: Duration = Duration::from_millis(10);

pub(super) struct Core;

impl BuiltinModule for Core {
    fn bind(&self, binding: &Binding) -> Value {
        let exports = Object::new();

        let cancel = binding.cancel.clone();
        exports.set(
            "sleep",
            Value::Function(NativeFn::new(move |args| {
                let seconds = number_arg(args, 0, "sleep")?;
                let total = Duration::try_from_secs_f64(seconds).map_err(|_| {
                    EngineError::runtime("sleep: seconds must be a non-negative number")
                })?;
                let deadline = Instant::now()
                    .checked_add(total)
                    .ok_or_else(|| EngineError::runtime("sleep: duration too large"))?;
                loop {
                    if cancel.is_cancelled() {
                        break;
                    }
                    let remaining = deadline.saturating_duration_since(Instant::now());
                    if remaining.is_zero() {
                        break;
                    }
                    thread::sleep(remaining.min(SLEEP_SLICE));
                }
                Ok(Value::Undefined)
            })),
        );

        exports.set(
            "fail",
            Value::Function(NativeFn::new(|args| {
                let message = match args.first() {
                    Some(Value::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                    None => "script called fail()".to_owned(),
                };
                Err(EngineError::runtime(message))
            })),
        );

        Value::Object(exports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;

    fn bound() -> (CancelToken, Object) {
        let cancel = CancelToken::new();
        let value = Core.bind(&Binding { cancel: cancel.clone() });
        let object = value.as_object().unwrap().clone();
        (cancel, object)
    }

    #[test]
    fn test_sleep_returns_early_when_cancelled() {
        let (cancel, core) = bound();
        cancel.cancel();

        let sleep = core.get("sleep");
        let started = Instant::now();
        sleep.as_function().unwrap().call(&[Value::Number(30.0)]).unwrap();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_sleep_rejects_bad_arguments() {
        let (_cancel, core) = bound();
        let sleep = core.get("sleep");
        let sleep = sleep.as_function().unwrap();

        assert!(sleep.call(&[Value::Number(-1.0)]).is_err());
        assert!(sleep.call(&[Value::Number(f64::NAN)]).is_err());
        assert!(sleep.call(&[Value::from("soon")]).is_err());
    }

    #[test]
    fn test_fail_raises_with_message() {
        let (_cancel, core) = bound();
        let fail = core.get("fail");
        let err = fail.as_function().unwrap().call(&[Value::from("gave up")]).unwrap_err();
        assert!(err.to_string().contains("gave up"));
    }
}
