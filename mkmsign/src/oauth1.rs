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

//! OAuth 1.0a signing with convenience APIs.

pub use mkmsign_oauth1::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Client, Endpoint, OutputFormat, Signer, Version};

/// Default MKM signer type.
pub type DefaultSigner = crate::Signer<Credential>;

/// Create a signer with standard configuration
///
/// This function creates a signer with:
/// - Default context (reqwest HTTP client, OS environment)
/// - Default credential provider (reads `MKM_*` env vars)
/// - Request signer drawing nonces from the OS random source
#[cfg(feature = "default-context")]
pub fn default_signer() -> crate::Result<DefaultSigner> {
    let ctx = default_context()?;
    Ok(Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    ))
}

/// Create a client for `endpoint` with standard configuration.
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> mkmsign::Result<()> {
/// use mkmsign::{default_client, Endpoint, OutputFormat, Version};
///
/// let client = default_client(Endpoint::Production, Version::V2, OutputFormat::Json)?;
/// let body = client.request(http::Method::GET, "/games", bytes::Bytes::new()).await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client(
    endpoint: Endpoint,
    version: Version,
    format: OutputFormat,
) -> crate::Result<Client> {
    let signer = default_signer()?;
    Ok(Client::new(
        signer.context().clone(),
        signer,
        endpoint,
        version,
        format,
    ))
}
