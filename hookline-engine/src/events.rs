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

//! Runtime events produced by installed hooks

use serde::{Deserialize, Serialize};

/// Lifecycle transition of an instrumented task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskEventKind {
    Spawned,
    Completed,
    Panicked,
}

/// Event emitted by the task hooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEvent {
    /// Host-assigned task identifier
    pub task_id: u64,
    pub kind: TaskEventKind,
    /// Microseconds since epoch, as reported by the trampoline
    pub timestamp_us: u64,
}

/// Direction of an instrumented socket operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetOperation {
    Connect,
    Send,
    Recv,
}

/// Event emitted by the socket hooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetEvent {
    /// Host socket handle
    pub socket: u64,
    pub operation: NetOperation,
    /// Bytes transferred; zero for connect
    pub bytes: u64,
    pub timestamp_us: u64,
}

/// Event emitted by the TLS handshake hooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsEvent {
    /// Host socket handle the handshake ran on
    pub socket: u64,
    /// SNI server name, when the handshake carried one
    pub server_name: Option<String>,
    pub timestamp_us: u64,
}
