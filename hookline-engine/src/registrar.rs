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

//! Plugin registrar
//!
//! Matches supplied plugins against each center's declared capability
//! interfaces and registers every match. One background task per center, so
//! a failure (or panic) while matching for one center never affects the
//! others. Within a center, registration follows declared-interface order,
//! then supplied-plugin order; across centers there is no ordering.

use crate::center::EventCenter;
use crate::plugin::ObserverPlugin;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Launch one registration task per center for the supplied plugins.
///
/// Returns the spawned handles; the startup path discards them
/// (registration is fire-and-forget), tests may await them.
pub fn register_plugins(
    centers: &[Arc<dyn EventCenter>],
    plugins: Option<Vec<Arc<dyn ObserverPlugin>>>,
) -> Vec<JoinHandle<()>> {
    let Some(plugins) = plugins else {
        return Vec::new();
    };
    if plugins.is_empty() {
        return Vec::new();
    }

    centers
        .iter()
        .map(|center| {
            let center = center.clone();
            let plugins = plugins.clone();
            tokio::spawn(async move {
                register_for_center(center.as_ref(), &plugins);
            })
        })
        .collect()
}

fn register_for_center(center: &dyn EventCenter, plugins: &[Arc<dyn ObserverPlugin>]) {
    let mut matched = 0usize;
    for &interface in center.interfaces() {
        for plugin in plugins {
            if interface.satisfied_by(plugin.as_ref()) {
                center.register(interface, plugin.clone());
                matched += 1;
            }
        }
    }
    tracing::debug!(
        center = center.name(),
        plugins = plugins.len(),
        matched = matched,
        "plugin registration finished"
    );
}
