// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! OAuth parameter set and its canonical form.

use std::collections::BTreeMap;

use percent_encoding::utf8_percent_encode;

use crate::constants::*;
use crate::Credential;

/// Percent-encode input with the OAuth unreserved rule.
pub(crate) fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &OAUTH_ENCODE_SET).to_string()
}

/// Params is the parameter set of one signing operation.
///
/// Keys are unique: inserting an existing key replaces its value. The
/// enumeration order of the set carries no meaning, [`Params::normalize`]
/// always recomputes the canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: BTreeMap<String, String>,
}

impl Params {
    /// Create the protocol parameters for a request against `base_url`.
    ///
    /// `realm` is set to `base_url`, the signature method to `HMAC-SHA1` and
    /// the version to `1.0`.
    pub fn new(base_url: &str, cred: &Credential, nonce: String, timestamp: String) -> Self {
        let mut params = Self::default();
        params.insert(REALM, base_url);
        params.insert(OAUTH_CONSUMER_KEY, cred.consumer_key.as_str());
        params.insert(OAUTH_TOKEN, cred.access_token.as_str());
        params.insert(OAUTH_NONCE, nonce);
        params.insert(OAUTH_TIMESTAMP, timestamp);
        params.insert(OAUTH_SIGNATURE_METHOD, HMAC_SHA1);
        params.insert(OAUTH_VERSION, VERSION_1_0);
        params
    }

    /// Insert a parameter, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge the parameters of a raw query string.
    ///
    /// The query is split on `&`, every entry on its first `=`. Entries
    /// without `=` are dropped. Keys and values are taken verbatim, they are
    /// not percent-decoded. A key that is already present is overwritten.
    pub fn merge_query(&mut self, query: &str) {
        for (key, value) in query.split('&').filter_map(|entry| entry.split_once('=')) {
            self.insert(key, value);
        }
    }

    /// Build the normalized parameter string.
    ///
    /// Every key and value is percent-encoded on its own, the `key=value`
    /// pairs are sorted by encoded key and joined with `&`, and the joined
    /// string is percent-encoded once more. `realm` is never part of it.
    pub fn normalize(&self) -> String {
        let mut pairs: Vec<(String, String)> = self
            .inner
            .iter()
            .filter(|(k, _)| k.as_str() != REALM)
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();
        pairs.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        percent_encode(&joined)
    }

    /// Render the `Authorization` header value.
    ///
    /// Values are written as they are, surrounded by quotes, without another
    /// round of percent encoding.
    pub fn to_header_value(&self) -> String {
        let fields = self
            .inner
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(", ");

        format!("OAuth {fields}")
    }
}
