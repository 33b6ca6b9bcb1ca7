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

//! Abort/unwind interception
//!
//! Pure redirect installation; unwind data flows to the host's crash
//! reporter, not through an event center.

use crate::intercept::{self, HookSite};
use crate::unit::{HookOperation, HookUnit};

/// Redirects abort and foreign-exception unwind sites.
#[derive(Default)]
pub struct UnwindHooks;

impl UnwindHooks {
    pub fn new() -> Self {
        Self
    }
}

impl HookUnit for UnwindHooks {
    fn name(&self) -> &'static str {
        "unwind"
    }

    fn hook_operations(&self) -> Vec<HookOperation> {
        vec![
            HookOperation::new("hook_abort", || {
                intercept::install(&HookSite::entry("abort"))
            }),
            HookOperation::new("hook_unwind_raise", || {
                intercept::install(&HookSite::entry("_Unwind_RaiseException"))
            }),
        ]
    }
}
