// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Payload envelope.
//!
//! The outer interchange object: geometry-specific `Items`, free-form `Meta`
//! returned unchanged alongside reconstructed geometry, and an optional
//! `Type` tag naming the geometry kind.

use crate::error::Result;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Free-form metadata carried next to geometry. Keys are unique strings,
/// values arbitrary JSON; the codec never interprets them.
pub type JsonDict = FxHashMap<String, Value>;

/// Outer payload envelope.
///
/// All fields are optional on the wire. An envelope with no `Items` (or a
/// JSON `null` body) legitimately encodes "no geometry".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Payload {
    /// Geometry-shape JSON for the encoded item.
    #[serde(default)]
    pub items: Option<Value>,

    /// Opaque pass-through metadata.
    #[serde(default)]
    pub meta: JsonDict,

    /// Geometry kind tag. Payloads from the legacy serializer carry the tag
    /// on the `Items` object instead; the discriminator checks both.
    #[serde(default, rename = "Type")]
    pub kind: Option<String>,
}

impl Payload {
    /// Decode an envelope from a byte buffer believed to be JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The `Items` body, with JSON `null` collapsed to absent.
    pub fn items(&self) -> Option<&Value> {
        match &self.items {
            Some(Value::Null) | None => None,
            Some(items) => Some(items),
        }
    }
}

impl FromStr for Payload {
    type Err = crate::error::Error;

    fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
