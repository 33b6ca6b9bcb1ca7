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

//! Event centers
//!
//! A center owns the mapping from capability interface to registered
//! plugins and is the dispatch point for the runtime events its hook unit
//! produces. The mapping only grows: plugins are added for the lifetime of
//! the process, never removed. Each center serializes its own mutation, so
//! concurrent registration tasks may target the same center safely.

use crate::events::{NetEvent, TaskEvent, TlsEvent};
use crate::plugin::{InterfaceId, ObserverPlugin};
use dashmap::DashMap;
use std::sync::Arc;

/// Capability exposed by built-in hook units that own plugin registrations
pub trait EventCenter: Send + Sync {
    /// Center name, for logs
    fn name(&self) -> &'static str;

    /// Capability interfaces this center declares interest in. Fixed for
    /// the lifetime of the center.
    fn interfaces(&self) -> &'static [InterfaceId];

    /// Append `plugin` to the listener sequence for `interface`
    fn register(&self, interface: InterfaceId, plugin: Arc<dyn ObserverPlugin>);

    /// Number of plugins registered under `interface`
    fn listener_count(&self, interface: InterfaceId) -> usize;
}

/// Append-only interface-to-listeners mapping shared by the concrete centers
#[derive(Default)]
pub struct ListenerTable {
    listeners: DashMap<InterfaceId, Vec<Arc<dyn ObserverPlugin>>>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, interface: InterfaceId, plugin: Arc<dyn ObserverPlugin>) {
        self.listeners.entry(interface).or_default().push(plugin);
    }

    pub fn count(&self, interface: InterfaceId) -> usize {
        self.listeners.get(&interface).map_or(0, |v| v.len())
    }

    /// Snapshot of the listener sequence, in registration order
    pub fn snapshot(&self, interface: InterfaceId) -> Vec<Arc<dyn ObserverPlugin>> {
        self.listeners
            .get(&interface)
            .map(|v| v.clone())
            .unwrap_or_default()
    }
}

/// Center for task lifecycle events
#[derive(Default)]
pub struct TaskEventCenter {
    table: ListenerTable,
}

impl TaskEventCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a task event to every registered task observer, in
    /// registration order.
    pub async fn emit(&self, event: TaskEvent) {
        for plugin in self.table.snapshot(InterfaceId::Task) {
            if let Some(observer) = plugin.as_task_observer() {
                observer.on_task_event(&event).await;
            }
        }
    }
}

impl EventCenter for TaskEventCenter {
    fn name(&self) -> &'static str {
        "task"
    }

    fn interfaces(&self) -> &'static [InterfaceId] {
        &[InterfaceId::Task]
    }

    fn register(&self, interface: InterfaceId, plugin: Arc<dyn ObserverPlugin>) {
        tracing::debug!(center = self.name(), interface = ?interface, plugin = plugin.name(), "plugin registered");
        self.table.push(interface, plugin);
    }

    fn listener_count(&self, interface: InterfaceId) -> usize {
        self.table.count(interface)
    }
}

/// Center for socket and TLS events
#[derive(Default)]
pub struct NetEventCenter {
    table: ListenerTable,
}

impl NetEventCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a socket event to every registered net observer
    pub async fn emit_net(&self, event: NetEvent) {
        for plugin in self.table.snapshot(InterfaceId::Net) {
            if let Some(observer) = plugin.as_net_observer() {
                observer.on_net_event(&event).await;
            }
        }
    }

    /// Dispatch a handshake event to every registered TLS observer
    pub async fn emit_tls(&self, event: TlsEvent) {
        for plugin in self.table.snapshot(InterfaceId::Tls) {
            if let Some(observer) = plugin.as_tls_observer() {
                observer.on_tls_event(&event).await;
            }
        }
    }
}

impl EventCenter for NetEventCenter {
    fn name(&self) -> &'static str {
        "net"
    }

    fn interfaces(&self) -> &'static [InterfaceId] {
        &[InterfaceId::Net, InterfaceId::Tls]
    }

    fn register(&self, interface: InterfaceId, plugin: Arc<dyn ObserverPlugin>) {
        tracing::debug!(center = self.name(), interface = ?interface, plugin = plugin.name(), "plugin registered");
        self.table.push(interface, plugin);
    }

    fn listener_count(&self, interface: InterfaceId) -> usize {
        self.table.count(interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TaskEventKind;
    use crate::plugin::TaskObserver;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPlugin {
        seen: AtomicUsize,
    }

    impl CountingPlugin {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TaskObserver for CountingPlugin {
        async fn on_task_event(&self, _event: &TaskEvent) {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl ObserverPlugin for CountingPlugin {
        fn name(&self) -> &str {
            "counting"
        }

        fn as_task_observer(&self) -> Option<&dyn TaskObserver> {
            Some(self)
        }
    }

    #[tokio::test]
    async fn test_emit_reaches_registered_listeners() {
        let center = TaskEventCenter::new();
        let plugin = CountingPlugin::new();
        center.register(InterfaceId::Task, plugin.clone());
        assert_eq!(center.listener_count(InterfaceId::Task), 1);

        center
            .emit(TaskEvent {
                task_id: 1,
                kind: TaskEventKind::Spawned,
                timestamp_us: 0,
            })
            .await;
        center
            .emit(TaskEvent {
                task_id: 1,
                kind: TaskEventKind::Completed,
                timestamp_us: 10,
            })
            .await;

        assert_eq!(plugin.seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_emit_without_listeners_is_a_no_op() {
        let center = NetEventCenter::new();
        center
            .emit_tls(TlsEvent {
                socket: 3,
                server_name: None,
                timestamp_us: 0,
            })
            .await;
        assert_eq!(center.listener_count(InterfaceId::Tls), 0);
    }

    #[test]
    fn test_listener_table_grows_only() {
        let table = ListenerTable::new();
        let plugin = CountingPlugin::new();
        table.push(InterfaceId::Task, plugin.clone());
        table.push(InterfaceId::Task, plugin);
        assert_eq!(table.count(InterfaceId::Task), 2);
        assert_eq!(table.count(InterfaceId::Net), 0);
    }

    #[test]
    fn test_declared_interfaces_are_fixed() {
        let net = NetEventCenter::new();
        assert_eq!(net.interfaces(), &[InterfaceId::Net, InterfaceId::Tls]);
        let task = TaskEventCenter::new();
        assert_eq!(task.interfaces(), &[InterfaceId::Task]);
    }
}
