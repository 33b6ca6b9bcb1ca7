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

//! Hook units
//!
//! A hook unit bundles the redirect operations for one instrumented
//! subsystem. Units declare their installable operations through an explicit
//! table ([`HookUnit::hook_operations`]), in declaration order; there is no
//! marker scanning or reflection.

use crate::center::EventCenter;
use crate::error::EngineResult;
use std::fmt;
use std::sync::Arc;

type OperationFn = dyn Fn() -> EngineResult<()> + Send + Sync;

/// One named, no-argument, fallible installation step
#[derive(Clone)]
pub struct HookOperation {
    name: &'static str,
    op: Arc<OperationFn>,
}

impl HookOperation {
    pub fn new(name: &'static str, op: impl Fn() -> EngineResult<()> + Send + Sync + 'static) -> Self {
        Self {
            name,
            op: Arc::new(op),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the operation. Callers own failure containment; this just
    /// forwards the result.
    pub fn invoke(&self) -> EngineResult<()> {
        (self.op)()
    }
}

impl fmt::Debug for HookOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookOperation")
            .field("name", &self.name)
            .finish()
    }
}

/// A module bundling one or more installable interception operations.
///
/// Built-in units are assembled once into an immutable list at first engine
/// access; custom units are supplied per startup call. A built-in unit may
/// additionally expose the [`EventCenter`] capability.
pub trait HookUnit: Send + Sync {
    /// Unit name, for logs
    fn name(&self) -> &'static str;

    /// The unit's installable operations, in declaration order
    fn hook_operations(&self) -> Vec<HookOperation>;

    /// The event center this unit owns, if it exposes one
    fn event_center(&self) -> Option<Arc<dyn EventCenter>> {
        None
    }
}
