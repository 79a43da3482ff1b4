// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! The `stampede/encoding` module.

use super::{Binding, BuiltinModule, string_arg};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use stampede_engine::{EngineError, NativeFn, Object, Value};

pub(super) struct Encoding;

impl BuiltinModule for Encoding {
    fn bind(&self, _binding: &Binding) -> Value {
        let exports = Object::new();

        exports.set(
            "b64encode",
            Value::Function(NativeFn::new(|args| {
                let input = string_arg(args, 0, "b64encode")?;
                Ok(Value::String(STANDARD.encode(input.as_bytes())))
            })),
        );

        exports.set(
            "b64decode",
            Value::Function(NativeFn::new(|args| {
                let input = string_arg(args, 0, "b64decode")?;
                let bytes = STANDARD
                    .decode(input.as_bytes())
                    .map_err(|err| EngineError::runtime(format!("b64decode: {err}")))?;
                Ok(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
            })),
        );

        Value::Object(exports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;

    fn bound() -> Object {
        let value = Encoding.bind(&Binding { cancel: CancelToken::new() });
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_b64encode() {
        let encoding = bound();
        let encode = encoding.get("b64encode");
        let out = encode.as_function().unwrap().call(&[Value::from("stampede")]).unwrap();
        assert_eq!(out, Value::from("c3RhbXBlZGU="));
    }

    #[test]
    fn test_b64decode_roundtrips() {
        let encoding = bound();
        let decode = encoding.get("b64decode");
        let out = decode
            .as_function()
            .unwrap()
            .call(&[Value::from("aGVsbG8gd29ybGQ=")])
            .unwrap();
        assert_eq!(out, Value::from("hello world"));
    }

    #[test]
    fn test_b64decode_rejects_garbage() {
        let encoding = bound();
        let decode = encoding.get("b64decode");
        let err = decode.as_function().unwrap().call(&[Value::from("!!!")]).unwrap_err();
        assert!(err.to_string().contains("b64decode"));
    }
}
