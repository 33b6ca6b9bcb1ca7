// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Socket and TLS interception

use crate::center::{EventCenter, NetEventCenter};
use crate::intercept::{self, HookSite};
use crate::unit::{HookOperation, HookUnit};
use std::sync::Arc;

/// Redirects socket transfer and TLS handshake sites and publishes network
/// events through its [`NetEventCenter`].
pub struct NetHooks {
    center: Arc<NetEventCenter>,
}

impl NetHooks {
    pub fn new() -> Self {
        Self {
            center: Arc::new(NetEventCenter::new()),
        }
    }

    pub fn center(&self) -> &Arc<NetEventCenter> {
        &self.center
    }
}

impl Default for NetHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl HookUnit for NetHooks {
    fn name(&self) -> &'static str {
        "net"
    }

    fn hook_operations(&self) -> Vec<HookOperation> {
        vec![
            HookOperation::new("hook_socket_connect", || {
                intercept::install(&HookSite::entry("connect"))
            }),
            HookOperation::new("hook_socket_transfer", || {
                intercept::install(&HookSite::entry("send"))?;
                intercept::install(&HookSite::entry("recv"))
            }),
            HookOperation::new("hook_tls_handshake", || {
                intercept::install(&HookSite::exit("SSL_do_handshake"))
            }),
        ]
    }

    fn event_center(&self) -> Option<Arc<dyn EventCenter>> {
        Some(self.center.clone())
    }
}
