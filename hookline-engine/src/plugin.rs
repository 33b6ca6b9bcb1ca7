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

//! Observer plugins and capability interfaces
//!
//! Plugins are supplied in-process, by reference, at startup time. Each
//! capability interface is a real trait; whether a plugin satisfies one is a
//! type-membership test through the plugin's capability-cast accessors, not
//! runtime reflection. A plugin that overrides none of the accessors
//! satisfies nothing and is registered nowhere.

use crate::events::{NetEvent, TaskEvent, TlsEvent};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Observer of task lifecycle events
#[async_trait]
pub trait TaskObserver: Send + Sync {
    async fn on_task_event(&self, event: &TaskEvent);
}

/// Observer of socket transfer events
#[async_trait]
pub trait NetObserver: Send + Sync {
    async fn on_net_event(&self, event: &NetEvent);
}

/// Observer of TLS handshake events
#[async_trait]
pub trait TlsObserver: Send + Sync {
    async fn on_tls_event(&self, event: &TlsEvent);
}

/// Identity of a capability interface, used as the registration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceId {
    Task,
    Net,
    Tls,
}

impl InterfaceId {
    /// Structural membership test: does `plugin`'s runtime type implement
    /// the interface behind this identity?
    pub fn satisfied_by(&self, plugin: &dyn ObserverPlugin) -> bool {
        match self {
            InterfaceId::Task => plugin.as_task_observer().is_some(),
            InterfaceId::Net => plugin.as_net_observer().is_some(),
            InterfaceId::Tls => plugin.as_tls_observer().is_some(),
        }
    }
}

/// An externally supplied observer plugin.
///
/// Implementations override the accessor for each capability interface they
/// provide; the defaults declare nothing. One plugin instance may satisfy
/// several interfaces and end up registered on several centers.
pub trait ObserverPlugin: Send + Sync {
    fn name(&self) -> &str;

    fn as_task_observer(&self) -> Option<&dyn TaskObserver> {
        None
    }

    fn as_net_observer(&self) -> Option<&dyn NetObserver> {
        None
    }

    fn as_tls_observer(&self) -> Option<&dyn TlsObserver> {
        None
    }
}
