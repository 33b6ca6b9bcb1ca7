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

//! Core error types

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, HooklineError>;

/// Errors raised by the host-facing core types
#[derive(Debug, Error)]
pub enum HooklineError {
    /// The host environment did not supply an object the engine requires
    /// (system context, artifact path, version string). Fatal to the caller.
    #[error("Host environment mismatch: {0}")]
    EnvironmentMismatch(String),

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Host runtime already installed")]
    RuntimeAlreadyInstalled,
}
