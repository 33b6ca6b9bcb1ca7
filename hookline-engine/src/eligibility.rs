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

//! Instrumentation target eligibility
//!
//! Only the host's main process (no `:` in the name) and its reserved
//! `:tools` companion process are instrumentation targets, and only when the
//! native library directory carries enough of the engine's interposer
//! artifacts. Everything here is fail-closed: any uncertainty while probing
//! the filesystem yields "not eligible" rather than an error.

use hookline_core::ProcessDescriptor;
use serde::{Deserialize, Serialize};

/// Process-name separator that marks host child processes
const PROCESS_SEPARATOR: char = ':';

/// Reserved suffix of the one child process the engine still instruments
const TOOLS_SUFFIX: &str = ":tools";

/// Native interposer artifacts shipped alongside the engine
pub const NATIVE_ARTIFACTS: [&str; 5] = [
    "libhookline_core.so",
    "libhookline_intercept.so",
    "libhookline_bridge.so",
    "libhookline_unwind.so",
    "libhookline_sampler.so",
];

/// Minimum number of artifacts that must be present
pub const MIN_ARTIFACTS_PRESENT: usize = 3;

/// Which native artifacts must be present for a process to qualify.
///
/// The default policy is the engine's fixed artifact set; tests and variant
/// builds can probe against a different set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    /// Artifact file names expected in the native library directory
    pub artifacts: Vec<String>,
    /// How many of them must exist
    pub min_present: usize,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            artifacts: NATIVE_ARTIFACTS.iter().map(|s| s.to_string()).collect(),
            min_present: MIN_ARTIFACTS_PRESENT,
        }
    }
}

impl EligibilityPolicy {
    /// Check a process against this policy. Never panics; probing errors
    /// count as an absent artifact.
    pub fn is_eligible(&self, desc: &ProcessDescriptor) -> bool {
        if !eligible_process_name(&desc.process_name) {
            tracing::debug!(
                process = %desc.process_name,
                "process name not an instrumentation target"
            );
            return false;
        }

        let present = self
            .artifacts
            .iter()
            .filter(|name| {
                std::fs::metadata(desc.native_library_dir.join(name.as_str()))
                    .map(|m| m.is_file())
                    .unwrap_or(false)
            })
            .count();

        if present < self.min_present {
            tracing::debug!(
                process = %desc.process_name,
                library_dir = %desc.native_library_dir.display(),
                present = present,
                required = self.min_present,
                "native artifact layout does not match engine build"
            );
            return false;
        }

        true
    }
}

/// Whether the current process is a valid instrumentation target.
///
/// Uses the engine's fixed artifact policy. Never panics and never returns an
/// error; any uncertainty degrades to `false`.
pub fn is_eligible_process(desc: &ProcessDescriptor) -> bool {
    EligibilityPolicy::default().is_eligible(desc)
}

fn eligible_process_name(name: &str) -> bool {
    !name.contains(PROCESS_SEPARATOR) || name.ends_with(TOOLS_SUFFIX)
}
