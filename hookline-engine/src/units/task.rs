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

//! Task lifecycle interception

use crate::center::{EventCenter, TaskEventCenter};
use crate::intercept::{self, HookSite};
use crate::unit::{HookOperation, HookUnit};
use std::sync::Arc;

/// Redirects task spawn/exit sites and publishes task lifecycle events
/// through its [`TaskEventCenter`].
pub struct TaskHooks {
    center: Arc<TaskEventCenter>,
}

impl TaskHooks {
    pub fn new() -> Self {
        Self {
            center: Arc::new(TaskEventCenter::new()),
        }
    }

    /// The center trampolines publish into
    pub fn center(&self) -> &Arc<TaskEventCenter> {
        &self.center
    }
}

impl Default for TaskHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl HookUnit for TaskHooks {
    fn name(&self) -> &'static str {
        "task"
    }

    fn hook_operations(&self) -> Vec<HookOperation> {
        vec![
            HookOperation::new("hook_task_spawn", || {
                intercept::install(&HookSite::entry("pthread_create"))
            }),
            HookOperation::new("hook_task_exit", || {
                intercept::install(&HookSite::entry("pthread_exit"))
            }),
        ]
    }

    fn event_center(&self) -> Option<Arc<dyn EventCenter>> {
        Some(self.center.clone())
    }
}
