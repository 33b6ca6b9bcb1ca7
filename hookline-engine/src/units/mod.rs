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

//! Built-in hook units
//!
//! The engine ships three units: task lifecycle, socket/TLS, and unwind
//! interception. Task and net expose event centers; unwind installs
//! redirects only.

mod net;
mod task;
mod unwind;

pub use net::NetHooks;
pub use task::TaskHooks;
pub use unwind::UnwindHooks;

use crate::unit::HookUnit;
use std::sync::Arc;

/// Assemble the built-in unit list, in installation order.
///
/// The process-wide engine calls this exactly once; the returned list is
/// never mutated afterwards.
pub fn builtin_units() -> Vec<Arc<dyn HookUnit>> {
    vec![
        Arc::new(TaskHooks::new()),
        Arc::new(NetHooks::new()),
        Arc::new(UnwindHooks::new()),
    ]
}
