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

//! Full startup sequence against the process-wide engine.
//!
//! Runs in its own test binary because the host runtime, the intercept
//! backend, and the built-in installation flag are all process-global.

use async_trait::async_trait;
use hookline_core::{host, HostRuntime, PlatformLevel, ProcessDescriptor, SystemContext};
use hookline_engine::{
    install_backend, startup, Engine, EngineResult, HookOperation, HookSite, HookUnit,
    InterceptBackend, InterfaceId, ObserverPlugin, TaskEvent, TaskObserver, TlsEvent, TlsObserver,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

struct VerboseHost;

impl HostRuntime for VerboseHost {
    fn application_artifact_path(&self, _package: &str) -> Option<PathBuf> {
        Some(PathBuf::from("/data/app/base.apk"))
    }

    fn application_version(&self, _package: &str) -> Option<String> {
        Some("1.0.3".to_string())
    }

    fn system_context(&self) -> Option<SystemContext> {
        Some(SystemContext {
            package: "com.example.app".to_string(),
            data_dir: PathBuf::from("/data/data/com.example.app"),
        })
    }

    fn platform_level(&self) -> PlatformLevel {
        PlatformLevel(29)
    }
}

#[derive(Default)]
struct RecordingBackend {
    installs: Mutex<HashMap<String, usize>>,
}

impl RecordingBackend {
    fn count(&self, symbol: &str) -> usize {
        self.installs.lock().get(symbol).copied().unwrap_or(0)
    }

    fn total(&self) -> usize {
        self.installs.lock().values().sum()
    }
}

impl InterceptBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    fn install_redirect(&self, site: &HookSite) -> EngineResult<()> {
        *self.installs.lock().entry(site.symbol.clone()).or_insert(0) += 1;
        Ok(())
    }
}

struct WideObserver {
    task_events: AtomicUsize,
}

#[async_trait]
impl TaskObserver for WideObserver {
    async fn on_task_event(&self, _event: &TaskEvent) {
        self.task_events.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TlsObserver for WideObserver {
    async fn on_tls_event(&self, _event: &TlsEvent) {}
}

impl ObserverPlugin for WideObserver {
    fn name(&self) -> &str {
        "wide"
    }

    fn as_task_observer(&self) -> Option<&dyn TaskObserver> {
        Some(self)
    }

    fn as_tls_observer(&self) -> Option<&dyn TlsObserver> {
        Some(self)
    }
}

struct AllocProbe;

impl HookUnit for AllocProbe {
    fn name(&self) -> &'static str {
        "alloc-probe"
    }

    fn hook_operations(&self) -> Vec<HookOperation> {
        vec![HookOperation::new("hook_malloc", || {
            hookline_engine::intercept::install(&HookSite::entry("malloc"))
        })]
    }
}

async fn wait_for_listeners(engine: &Engine, interface: InterfaceId, expected: usize) {
    for _ in 0..200 {
        let count: usize = engine
            .centers()
            .iter()
            .map(|c| c.listener_count(interface))
            .sum();
        if count >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("listeners for {:?} never reached {}", interface, expected);
}

#[tokio::test]
async fn test_startup_end_to_end() {
    let backend = Arc::new(RecordingBackend::default());
    install_backend(backend.clone());

    let desc = ProcessDescriptor::new("com.example.app", "/data/app/lib/arm64");
    let plugin: Arc<dyn ObserverPlugin> = Arc::new(WideObserver {
        task_events: AtomicUsize::new(0),
    });

    startup(
        &desc,
        |_| {
            host::install_runtime(Arc::new(VerboseHost))?;
            Ok(())
        },
        Some(vec![plugin]),
        None,
    )
    .await
    .unwrap();

    // Eight redirects across the three built-in units.
    let builtin_symbols = [
        "pthread_create",
        "pthread_exit",
        "connect",
        "send",
        "recv",
        "SSL_do_handshake",
        "abort",
        "_Unwind_RaiseException",
    ];
    for symbol in builtin_symbols {
        assert_eq!(backend.count(symbol), 1, "symbol {}", symbol);
    }
    assert_eq!(backend.total(), builtin_symbols.len());

    // The plugin satisfies Task and Tls, so it lands on both centers.
    let engine = Engine::global();
    wait_for_listeners(engine, InterfaceId::Task, 1).await;
    wait_for_listeners(engine, InterfaceId::Tls, 1).await;
    let net_count: usize = engine
        .centers()
        .iter()
        .map(|c| c.listener_count(InterfaceId::Net))
        .sum();
    assert_eq!(net_count, 0);

    // Second startup: built-ins are gated, custom units are not.
    let custom: Vec<Arc<dyn HookUnit>> = vec![Arc::new(AllocProbe)];
    startup(&desc, |_| Ok(()), None, Some(custom.clone()))
        .await
        .unwrap();
    startup(&desc, |_| Ok(()), None, Some(custom))
        .await
        .unwrap();

    for symbol in builtin_symbols {
        assert_eq!(backend.count(symbol), 1, "symbol {} reinstalled", symbol);
    }
    assert_eq!(backend.count("malloc"), 2);
}
