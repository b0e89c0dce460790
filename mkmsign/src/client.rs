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

//! Client for the MKM API.

use std::fmt::{Display, Formatter};

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method, StatusCode};
use log::debug;
use mkmsign_core::{Context, Error, Result, Signer};
use mkmsign_oauth1::Credential;

/// Content type MKM expects for request bodies.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Endpoint selects the MKM environment requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `https://sandbox.mkmapi.eu/ws`
    Sandbox,
    /// `https://www.mkmapi.eu/ws`
    Production,
}

impl Endpoint {
    /// Base url of this endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Sandbox => "https://sandbox.mkmapi.eu/ws",
            Endpoint::Production => "https://www.mkmapi.eu/ws",
        }
    }
}

/// Version selects the MKM API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// API 1.1
    V1,
    /// API 2.0
    V2,
}

impl Version {
    /// Path segment of this version.
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V1 => "/v1.1",
            Version::V2 => "/v2.0",
        }
    }
}

/// OutputFormat selects the response format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// XML responses, the API default.
    #[default]
    Xml,
    /// JSON responses.
    Json,
}

impl OutputFormat {
    /// Path segment of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Xml => "",
            OutputFormat::Json => "/output.json",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_as_str!(Endpoint, Version, OutputFormat);

/// Client signs requests with OAuth 1.0a and sends them to the MKM API.
///
/// The transport comes from the [`Context`]: timeouts and retries are its
/// business, the client never retries.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    signer: Signer<Credential>,
    base_url: String,
}

impl Client {
    /// Create a new client.
    ///
    /// Requests are sent through `ctx`, signed by `signer`.
    pub fn new(
        ctx: Context,
        signer: Signer<Credential>,
        endpoint: Endpoint,
        version: Version,
        format: OutputFormat,
    ) -> Self {
        Self {
            ctx,
            signer,
            base_url: format!("{endpoint}{version}{format}"),
        }
    }

    /// Base url every resource is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full url of `resource`.
    pub fn url(&self, resource: &str) -> String {
        format!("{}{resource}", self.base_url)
    }

    /// Sign and send a request, returning the response body.
    ///
    /// Any status other than `200 OK` is reported as
    /// [`ErrorKind::ResponseInvalid`](mkmsign_core::ErrorKind::ResponseInvalid).
    pub async fn request(
        &self,
        method: Method,
        resource: &str,
        body: impl Into<Bytes>,
    ) -> Result<Bytes> {
        let url = self.url(resource);
        let (mut parts, _) = http::Request::builder()
            .method(method.clone())
            .uri(url.as_str())
            .body(())?
            .into_parts();

        self.signer.sign(&mut parts).await?;
        parts
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

        debug!("sending {method} {url}");
        let resp = self
            .ctx
            .http_send(http::Request::from_parts(parts, body.into()))
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::response_invalid(format!(
                "{method} {url} responded with status {}",
                status.as_u16()
            )));
        }

        Ok(resp.into_body())
    }
}
