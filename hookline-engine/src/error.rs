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

//! Engine error types

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur in the instrumentation engine.
///
/// Only [`EngineError::GlobalInit`] and the environment-mismatch class from
/// the core crate ever surface to the embedder; everything below the
/// orchestrator is contained per hook operation or per registration task.
#[derive(Debug, Error)]
pub enum EngineError {
    // Startup errors
    #[error("Global initialization failed: {0}")]
    GlobalInit(#[source] anyhow::Error),

    // Interception errors
    #[error("Intercept backend not installed")]
    BackendUnavailable,

    #[error("Redirect installation failed at {symbol}: {message}")]
    RedirectFailed { symbol: String, message: String },

    // Host environment errors
    #[error(transparent)]
    Core(#[from] hookline_core::HooklineError),
}
