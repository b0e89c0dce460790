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

//! OAuth 1.0a `Authorization` header for MKM requests.
use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, Method, Uri};
use log::debug;
use mkmsign_core::{Context, Error, Result, SignRequest};

use crate::clock::{ClockSource, SystemClock};
use crate::constants::OAUTH_SIGNATURE;
use crate::credential::Credential;
use crate::nonce::{NonceSource, RandomNonce};
use crate::params::Params;
use crate::signature::{sign, signing_key, string_to_sign};

/// RequestSigner that implements OAuth 1.0a HMAC-SHA1 authorization.
///
/// - [OAuth 1.0 Protocol](https://datatracker.ietf.org/doc/html/rfc5849)
///
/// A signer holds no per-request state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    nonce: Arc<dyn NonceSource>,
    clock: Arc<dyn ClockSource>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a signer using [`RandomNonce`] and [`SystemClock`].
    pub fn new() -> Self {
        Self {
            nonce: Arc::new(RandomNonce),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the nonce source.
    ///
    /// # Note
    ///
    /// Requests should always be signed with a fresh random nonce.
    /// Only use this function for testing.
    pub fn with_nonce_source(mut self, nonce: impl NonceSource) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// Replace the clock source.
    ///
    /// # Note
    ///
    /// Requests should always be signed with the current time.
    /// Only use this function for testing.
    pub fn with_clock_source(mut self, clock: impl ClockSource) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the `Authorization` header value for `method` and `url`.
    ///
    /// `url` is the full target url, its query string (if any) takes part
    /// in the signature. A fragment is never sent to the server, so it is
    /// cut off before the url is split on its first `?`.
    pub fn authorization(&self, cred: &Credential, method: &Method, url: &str) -> Result<String> {
        let url = url.split_once('#').map_or(url, |(url, _)| url);
        let (base_url, query) = match url.split_once('?') {
            Some((base_url, query)) => (base_url, Some(query)),
            None => (url, None),
        };
        check_base_url(base_url)?;

        let mut params = Params::new(base_url, cred, self.nonce.nonce()?, self.clock.timestamp());
        if let Some(query) = query {
            params.merge_query(query);
        }

        let string_to_sign = string_to_sign(method.as_str(), base_url, &params.normalize());
        let signature = sign(
            &signing_key(&cred.consumer_secret, &cred.access_token_secret),
            &string_to_sign,
        );
        params.insert(OAUTH_SIGNATURE, signature);

        Ok(params.to_header_value())
    }

    /// Build a header map carrying the `Authorization` header for `method` and `url`.
    pub fn authorization_header(
        &self,
        cred: &Credential,
        method: &Method,
        url: &str,
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(AUTHORIZATION, self.authorization_value(cred, method, url)?);
        Ok(headers)
    }

    fn authorization_value(
        &self,
        cred: &Credential,
        method: &Method,
        url: &str,
    ) -> Result<HeaderValue> {
        let mut value: HeaderValue = self.authorization(cred, method, url)?.parse()?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    /// Sign `req` with the url as rendered by [`http::Uri`].
    ///
    /// `Uri` always renders an empty path as `/`, so `https://h` is signed
    /// as `https://h/` here while [`RequestSigner::authorization`] keeps the
    /// url exactly as given.
    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let url = req.uri.to_string();
        debug!("signing {} request to {}", req.method, url);
        let value = self.authorization_value(cred, &req.method, &url)?;
        req.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

/// The base url becomes both `realm` and part of the signature base string,
/// so it has to be a non-empty, well formed uri carrying a host.
fn check_base_url(base_url: &str) -> Result<()> {
    if base_url.is_empty() {
        return Err(Error::url_invalid("base url is empty"));
    }
    let uri: Uri = base_url.parse()?;
    if uri.authority().is_none() {
        return Err(Error::url_invalid(format!("base url has no host: {base_url}")));
    }
    Ok(())
}
