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

//! Seam to the low-level interception primitive
//!
//! The engine does not implement method redirection itself. The embedder
//! registers an [`InterceptBackend`] once per process; hook units describe
//! redirect targets as [`HookSite`]s and install them through [`install`].

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::OnceLock;

/// Where a redirect attaches relative to the target symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectSlot {
    /// Run before the target executes
    Entry,
    /// Run after the target returns
    Exit,
}

/// A single redirect target inside the host process
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HookSite {
    /// Mangled or exported symbol path of the target
    pub symbol: String,
    /// Attachment point
    pub slot: RedirectSlot,
}

impl HookSite {
    pub fn entry(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            slot: RedirectSlot::Entry,
        }
    }

    pub fn exit(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            slot: RedirectSlot::Exit,
        }
    }
}

/// The opaque redirect-installation primitive supplied by the embedder
pub trait InterceptBackend: Send + Sync {
    /// Backend name, for logs
    fn name(&self) -> &str;

    /// Install one redirect. Implementations report failure through
    /// [`EngineError::RedirectFailed`].
    fn install_redirect(&self, site: &HookSite) -> EngineResult<()>;
}

static BACKEND: OnceLock<Arc<dyn InterceptBackend>> = OnceLock::new();

/// Register the process-wide intercept backend. First registration wins;
/// later calls are ignored.
pub fn install_backend(backend: Arc<dyn InterceptBackend>) {
    let name = backend.name().to_string();
    if BACKEND.set(backend).is_err() {
        tracing::debug!(backend = %name, "intercept backend already installed, keeping first");
    }
}

/// Whether an intercept backend has been registered
pub fn backend_installed() -> bool {
    BACKEND.get().is_some()
}

/// Install one redirect through the registered backend
pub fn install(site: &HookSite) -> EngineResult<()> {
    let backend = BACKEND.get().ok_or(EngineError::BackendUnavailable)?;
    backend.install_redirect(site)?;
    tracing::debug!(
        backend = %backend.name(),
        symbol = %site.symbol,
        slot = ?site.slot,
        "redirect installed"
    );
    Ok(())
}
