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

//! Host environment accessor
//!
//! The engine never talks to the host runtime directly; the embedder
//! registers a [`HostRuntime`] once per process, and the module-level
//! accessors translate missing host objects into fatal
//! [`HooklineError::EnvironmentMismatch`] errors.

use crate::error::{HooklineError, Result};
use crate::version::HostVersion;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::OnceLock;

/// Capability level of the host platform's interception support.
///
/// Levels below [`PlatformLevel::MIN_VERBOSE`] only support best-effort
/// asynchronous hook installation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct PlatformLevel(pub u32);

impl PlatformLevel {
    /// Lowest level on which synchronous, reported hook installation is safe
    pub const MIN_VERBOSE: PlatformLevel = PlatformLevel(26);
}

/// Opaque handle to the host's system-wide context object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemContext {
    /// Package name the context was resolved for
    pub package: String,
    /// Host data directory backing the context
    pub data_dir: PathBuf,
}

/// Contract the embedder's host-environment glue must satisfy.
///
/// Every accessor returns `None` when the host does not supply the expected
/// object; the module-level functions turn that into a fatal error.
pub trait HostRuntime: Send + Sync {
    /// Path of the installed application artifact for `package`
    fn application_artifact_path(&self, package: &str) -> Option<PathBuf>;

    /// Installed version string of `package`, dotted numeric
    fn application_version(&self, package: &str) -> Option<String>;

    /// The process-wide system context
    fn system_context(&self) -> Option<SystemContext>;

    /// Interception capability level of the running platform
    fn platform_level(&self) -> PlatformLevel;
}

static HOST_RUNTIME: OnceLock<Arc<dyn HostRuntime>> = OnceLock::new();

/// Register the process-wide host runtime. First registration wins.
pub fn install_runtime(runtime: Arc<dyn HostRuntime>) -> Result<()> {
    HOST_RUNTIME
        .set(runtime)
        .map_err(|_| HooklineError::RuntimeAlreadyInstalled)
}

/// Whether a host runtime has been registered
pub fn runtime_installed() -> bool {
    HOST_RUNTIME.get().is_some()
}

fn runtime() -> Result<&'static Arc<dyn HostRuntime>> {
    HOST_RUNTIME.get().ok_or_else(|| {
        HooklineError::EnvironmentMismatch("host runtime not registered".to_string())
    })
}

/// Resolve the application artifact path for `package`
pub fn application_artifact_path(package: &str) -> Result<PathBuf> {
    runtime()?.application_artifact_path(package).ok_or_else(|| {
        HooklineError::EnvironmentMismatch(format!("no artifact path for package {}", package))
    })
}

/// Resolve and parse the installed version of `package`
pub fn application_version(package: &str) -> Result<HostVersion> {
    let raw = runtime()?.application_version(package).ok_or_else(|| {
        HooklineError::EnvironmentMismatch(format!("no version for package {}", package))
    })?;
    HostVersion::parse(&raw)
}

/// Resolve the process-wide system context
pub fn system_context() -> Result<SystemContext> {
    runtime()?
        .system_context()
        .ok_or_else(|| HooklineError::EnvironmentMismatch("system context unavailable".to_string()))
}

/// Platform capability level, degraded to the most conservative level when
/// no runtime is registered yet.
pub fn platform_level() -> PlatformLevel {
    match HOST_RUNTIME.get() {
        Some(rt) => rt.platform_level(),
        None => {
            tracing::debug!("platform level queried before host runtime registration");
            PlatformLevel::default()
        }
    }
}
