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

//! Hookline Core
//!
//! Host-facing leaf types for the Hookline instrumentation engine: process
//! descriptors, dotted-numeric versions, and the host-environment accessor
//! contract.

pub mod descriptor;
pub mod error;
pub mod host;
pub mod version;

pub use descriptor::ProcessDescriptor;
pub use error::{HooklineError, Result};
pub use host::{
    application_artifact_path, application_version, install_runtime, platform_level,
    runtime_installed, system_context, HostRuntime, PlatformLevel, SystemContext,
};
pub use version::HostVersion;
