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

//! Clock sources for `oauth_timestamp`.

use std::fmt::Debug;

use mkmsign_core::time::{format_unix_timestamp, now};

/// ClockSource produces the current time as a signing parameter.
pub trait ClockSource: Debug + Send + Sync + 'static {
    /// Current unix epoch seconds in base 10, without fraction or leading zeros.
    fn timestamp(&self) -> String;
}

/// SystemClock reads the wall clock of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn timestamp(&self) -> String {
        format_unix_timestamp(now())
    }
}
