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

//! HMAC-SHA1 signature of a normalized request.

use log::debug;
use mkmsign_core::hash::base64_hmac_sha1;

use crate::params::percent_encode;

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// METHOD + "&" +
/// percent_encode(base_url) + "&" +
/// normalized_params
/// ```
///
/// ## Reference
///
/// - [Signature Base String](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1)
pub(crate) fn string_to_sign(method: &str, base_url: &str, normalized_params: &str) -> String {
    let s = format!(
        "{method}&{}&{normalized_params}",
        percent_encode(base_url)
    );

    debug!("string to sign: {}", &s);
    s
}

/// Build the HMAC key: both secrets percent-encoded and joined by `&`.
///
/// The `&` is kept even when a secret is empty.
pub(crate) fn signing_key(consumer_secret: &str, access_token_secret: &str) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(access_token_secret)
    )
}

/// Base64 encoded HMAC-SHA1 of `string_to_sign` under `signing_key`.
pub(crate) fn sign(signing_key: &str, string_to_sign: &str) -> String {
    base64_hmac_sha1(signing_key.as_bytes(), string_to_sign.as_bytes())
}
