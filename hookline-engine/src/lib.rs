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

//! Hookline Engine
//!
//! Bootstrap and orchestration core of the Hookline runtime instrumentation
//! engine. The engine decides whether the current process is a valid
//! instrumentation target, installs behavior-modifying hook units with
//! per-operation fault isolation, and routes runtime events from those
//! units to observer plugins matched by capability interface.
//!
//! # Example
//!
//! ```rust,ignore
//! use hookline_engine::{is_eligible_process, startup};
//! use hookline_core::ProcessDescriptor;
//!
//! let desc = ProcessDescriptor::new("com.example.app", "/data/app/lib/arm64");
//! if is_eligible_process(&desc) {
//!     startup(&desc, |d| host_glue::init(d), Some(plugins), None).await?;
//! }
//! ```

pub mod bootstrap;
pub mod center;
pub mod eligibility;
pub mod error;
pub mod events;
pub mod intercept;
pub mod loader;
pub mod plugin;
pub mod registrar;
pub mod strategy;
pub mod unit;
pub mod units;

// Re-exports
pub use bootstrap::{startup, Engine};
pub use center::{EventCenter, ListenerTable, NetEventCenter, TaskEventCenter};
pub use eligibility::{
    is_eligible_process, EligibilityPolicy, MIN_ARTIFACTS_PRESENT, NATIVE_ARTIFACTS,
};
pub use error::{EngineError, EngineResult};
pub use events::{NetEvent, NetOperation, TaskEvent, TaskEventKind, TlsEvent};
pub use intercept::{backend_installed, install_backend, HookSite, InterceptBackend, RedirectSlot};
pub use loader::load_unit;
pub use plugin::{InterfaceId, NetObserver, ObserverPlugin, TaskObserver, TlsObserver};
pub use registrar::register_plugins;
pub use strategy::InstallStrategy;
pub use unit::{HookOperation, HookUnit};
pub use units::{builtin_units, NetHooks, TaskHooks, UnwindHooks};
