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

//! Nonce sources for `oauth_nonce`.

use std::fmt::Debug;

use mkmsign_core::hash::base64_encode;
use mkmsign_core::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::NONCE_LENGTH;

/// NonceSource produces a single-use anti-replay token per signing operation.
pub trait NonceSource: Debug + Send + Sync + 'static {
    /// Return a fresh nonce.
    ///
    /// Implementations must fail instead of handing out a predictable value.
    fn nonce(&self) -> Result<String>;
}

/// RandomNonce reads 32 bytes from the operating system random source and
/// returns them base64 encoded (standard alphabet, padded).
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonce;

impl NonceSource for RandomNonce {
    fn nonce(&self) -> Result<String> {
        let mut bytes = [0u8; NONCE_LENGTH];
        OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
            Error::entropy_unavailable("failed to read from the system random source")
                .with_source(e)
        })?;

        Ok(base64_encode(&bytes))
    }
}
