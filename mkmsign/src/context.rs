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

use std::time::Duration;

use mkmsign_core::{Context, Error, OsEnv, Result};
use mkmsign_http_send_reqwest::ReqwestHttpSend;

/// Requests to MKM give up after this long.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a context reading the process environment and sending requests
/// through reqwest with a 10 second timeout.
pub fn default_context() -> Result<Context> {
    let client = reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .build()
        .map_err(|e| Error::config_invalid("failed to build http client").with_source(e))?;

    Ok(Context::new()
        .with_http_send(ReqwestHttpSend::new(client))
        .with_env(OsEnv))
}
