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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Env values used to load credentials.
pub const MKM_CONSUMER_KEY: &str = "MKM_CONSUMER_KEY";
pub const MKM_CONSUMER_SECRET: &str = "MKM_CONSUMER_SECRET";
pub const MKM_ACCESS_TOKEN: &str = "MKM_ACCESS_TOKEN";
pub const MKM_ACCESS_TOKEN_SECRET: &str = "MKM_ACCESS_TOKEN_SECRET";

// OAuth protocol parameters.
pub const REALM: &str = "realm";
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";

pub const HMAC_SHA1: &str = "HMAC-SHA1";
pub const VERSION_1_0: &str = "1.0";

/// Number of random bytes behind every nonce.
pub const NONCE_LENGTH: usize = 32;

/// AsciiSet for [OAuth Percent Encoding](https://datatracker.ietf.org/doc/html/rfc5849#section-3.6)
///
/// Everything but `ALPHA / DIGIT / "-" / "." / "_" / "~"` is encoded.
pub static OAUTH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
