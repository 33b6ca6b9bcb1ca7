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

//! Dotted-numeric host application versions
//!
//! Host packages report versions as dotted numeric strings of arbitrary
//! length ("1.4.210", "2.0.0.17"). Ordering is segment-wise; missing
//! trailing segments compare as zero, so "1.2" and "1.2.0" are equal.

use crate::error::{HooklineError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A comparable version parsed from a dotted numeric string
#[derive(Debug, Clone)]
pub struct HostVersion {
    segments: Vec<u64>,
}

impl HostVersion {
    /// Parse a dotted numeric version string
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(HooklineError::InvalidVersion(s.to_string()));
        }

        let segments = s
            .split('.')
            .map(|seg| {
                seg.parse::<u64>()
                    .map_err(|_| HooklineError::InvalidVersion(s.to_string()))
            })
            .collect::<Result<Vec<u64>>>()?;

        Ok(Self { segments })
    }

    /// The parsed segments, in order
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl FromStr for HostVersion {
    type Err = HooklineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seg in &self.segments {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", seg)?;
            first = false;
        }
        Ok(())
    }
}

impl Ord for HostVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let a = self.segments.get(i).copied().unwrap_or(0);
            let b = other.segments.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                non_eq => return non_eq,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for HostVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Equality and hashing must agree with the zero-padded ordering, so both
// ignore trailing zero segments.
impl PartialEq for HostVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HostVersion {}

impl std::hash::Hash for HostVersion {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let trimmed = self
            .segments
            .iter()
            .rposition(|&seg| seg != 0)
            .map_or(&[][..], |last| &self.segments[..=last]);
        trimmed.hash(state);
    }
}

impl Serialize for HostVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HostVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        HostVersion::parse(&s).map_err(serde::de::Error::custom)
    }
}
