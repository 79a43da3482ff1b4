// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2026 Stampede Authors

//! The `stampede/crypto` module.

use super::{Binding, BuiltinModule, string_arg};
use ring::digest::{self, SHA1_FOR_LEGACY_USE_ONLY, SHA256, SHA512};
use stampede_engine::{NativeFn, Object, Value};

pub(super) struct Crypto;

impl BuiltinModule for Crypto {
    fn bind(&self, _binding: &Binding) -> Value {
        let exports = Object::new();
        exports.set("sha1", digest_fn(&SHA1_FOR_LEGACY_USE_ONLY, "sha1"));
        exports.set("sha256", digest_fn(&SHA256, "sha256"));
        exports.set("sha512", digest_fn(&SHA512, "sha512"));
        Value::Object(exports)
    }
}

/// Hash the first argument and return the lowercase hex digest.
fn digest_fn(algorithm: &'static digest::Algorithm, name: &'static str) -> Value {
    Value::Function(NativeFn::new(move |args| {
        let input = string_arg(args, 0, name)?;
        let digest = digest::digest(algorithm, input.as_bytes());
        Ok(Value::String(hex::encode(digest.as_ref())))
    }))
}
