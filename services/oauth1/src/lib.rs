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

//! OAuth 1.0a HMAC-SHA1 signing for the MKM API.
//!
//! [`RequestSigner`] turns a method, a target url and a [`Credential`] into an
//! `Authorization` header:
//!
//! ```
//! use http::Method;
//! use mkmsign_oauth1::{Credential, RequestSigner};
//!
//! # fn main() -> mkmsign_core::Result<()> {
//! let cred = Credential::new("consumer_key", "consumer_secret", "access_token", "access_token_secret");
//! let header = RequestSigner::new().authorization(
//!     &cred,
//!     &Method::GET,
//!     "https://www.mkmapi.eu/ws/v2.0/output.json/games",
//! )?;
//! assert!(header.starts_with("OAuth "));
//! # Ok(())
//! # }
//! ```
//!
//! To sign `http` requests with credentials loaded from the environment,
//! combine it with a credential provider in a [`mkmsign_core::Signer`].

#![warn(missing_docs)]

mod clock;
pub use clock::{ClockSource, SystemClock};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod nonce;
pub use nonce::{NonceSource, RandomNonce};

mod params;
pub use params::Params;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::RequestSigner;

mod signature;

mod constants;
