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

//! Platform-adaptive hook installation
//!
//! Modern platforms install hooks inline and report failures. On legacy
//! platforms concurrent redirect installation destabilizes the interception
//! primitive, so installation is deferred to a background task and failures
//! there are expected, tolerated noise. Either way, one operation's failure
//! never propagates to the caller or to the next operation.

use crate::unit::HookOperation;
use hookline_core::{host, PlatformLevel};

/// Installation policy, selected from the platform capability level at call
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStrategy {
    /// Invoke inline; log failures, never re-raise
    VerboseSync,
    /// Schedule on a background task; swallow failures entirely
    SilentAsync,
}

impl InstallStrategy {
    /// Select the policy for a given platform level
    pub fn for_platform(level: PlatformLevel) -> Self {
        if level >= PlatformLevel::MIN_VERBOSE {
            InstallStrategy::VerboseSync
        } else {
            InstallStrategy::SilentAsync
        }
    }

    /// Select the policy for the running host. Falls back to the silent
    /// path when no host runtime is registered yet.
    pub fn current() -> Self {
        Self::for_platform(host::platform_level())
    }

    /// Install one hook operation under this policy.
    ///
    /// Never returns an error and never blocks on the silent path; each
    /// operation's outcome is independent of every other operation's.
    pub async fn install(&self, op: HookOperation) {
        match self {
            InstallStrategy::VerboseSync => {
                if let Err(e) = op.invoke() {
                    tracing::warn!(operation = op.name(), error = %e, "hook installation failed");
                }
            }
            InstallStrategy::SilentAsync => {
                // Result deliberately discarded along with the join handle.
                tokio::spawn(async move {
                    let _ = op.invoke();
                });
            }
        }
    }
}
