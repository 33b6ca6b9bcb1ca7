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

//! Process descriptors supplied by the host at startup

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identity of the current host process, as reported by the embedder.
///
/// Transient: the engine reads it during eligibility checks and startup but
/// never owns or mutates host state through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Fully qualified process name, e.g. "com.example.app" or
    /// "com.example.app:tools"
    pub process_name: String,
    /// Directory holding the host package's native libraries
    pub native_library_dir: PathBuf,
}

impl ProcessDescriptor {
    pub fn new(process_name: impl Into<String>, native_library_dir: impl Into<PathBuf>) -> Self {
        Self {
            process_name: process_name.into(),
            native_library_dir: native_library_dir.into(),
        }
    }
}
