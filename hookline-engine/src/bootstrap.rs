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

//! Startup orchestration
//!
//! [`Engine`] owns the built-in unit list, the event centers derived from
//! it, and the one-shot installation flag. [`startup`] sequences global
//! context initialization, plugin registration, built-in installation, and
//! custom installation. Plugin registration is initiated before any hook
//! installation begins so listeners have a chance to be present before
//! hook-driven events fire, but registration runs on detached tasks and may
//! still be in flight when the first events arrive.

use crate::center::EventCenter;
use crate::error::{EngineError, EngineResult};
use crate::loader;
use crate::plugin::ObserverPlugin;
use crate::registrar;
use crate::strategy::InstallStrategy;
use crate::unit::HookUnit;
use crate::units;
use hookline_core::ProcessDescriptor;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

static ENGINE: Lazy<Engine> = Lazy::new(|| Engine::new(units::builtin_units()));

/// The instrumentation engine: built-in units, derived centers, and the
/// built-in installation gate.
pub struct Engine {
    units: Vec<Arc<dyn HookUnit>>,
    centers: Vec<Arc<dyn EventCenter>>,
    builtin_installed: AtomicBool,
}

impl Engine {
    /// Build an engine over `units`. The center list is derived here, once:
    /// exactly the units exposing the event-center capability, in unit
    /// order. Both lists are read-only from this point on.
    pub fn new(units: Vec<Arc<dyn HookUnit>>) -> Self {
        let centers = units.iter().filter_map(|u| u.event_center()).collect();
        Self {
            units,
            centers,
            builtin_installed: AtomicBool::new(false),
        }
    }

    /// The process-wide engine over the built-in units
    pub fn global() -> &'static Engine {
        &ENGINE
    }

    /// Built-in hook units, in installation order
    pub fn units(&self) -> &[Arc<dyn HookUnit>] {
        &self.units
    }

    /// Event centers derived from the built-in units
    pub fn centers(&self) -> &[Arc<dyn EventCenter>] {
        &self.centers
    }

    /// Whether built-in installation has already been claimed
    pub fn is_builtin_installed(&self) -> bool {
        self.builtin_installed.load(Ordering::SeqCst)
    }

    /// Install every built-in unit, at most once per engine lifetime.
    ///
    /// The claim is a single atomic transition, so concurrent callers race
    /// for it and exactly one proceeds; the rest skip. Returns whether this
    /// call performed the installation.
    pub async fn install_builtin(&self, strategy: &InstallStrategy) -> bool {
        if self
            .builtin_installed
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("built-in hooks already installed, skipping");
            return false;
        }

        for unit in &self.units {
            loader::load_unit(unit.as_ref(), strategy).await;
        }
        true
    }

    /// Install caller-supplied units. No idempotency guard: a second call
    /// with the same units re-installs them.
    pub async fn install_custom(&self, custom: &[Arc<dyn HookUnit>], strategy: &InstallStrategy) {
        for unit in custom {
            loader::load_unit(unit.as_ref(), strategy).await;
        }
    }

    /// Run the startup sequence against this engine.
    ///
    /// `global_init` establishes host-specific global state and is the only
    /// step whose failure aborts startup. Plugin registration is initiated
    /// (not awaited) before any installation, then built-in units install
    /// under the one-shot gate, then custom units install unguarded.
    pub async fn startup<F>(
        &self,
        desc: &ProcessDescriptor,
        global_init: F,
        plugins: Option<Vec<Arc<dyn ObserverPlugin>>>,
        custom_units: Option<Vec<Arc<dyn HookUnit>>>,
    ) -> EngineResult<()>
    where
        F: FnOnce(&ProcessDescriptor) -> anyhow::Result<()>,
    {
        global_init(desc).map_err(EngineError::GlobalInit)?;

        let _handles = registrar::register_plugins(&self.centers, plugins);

        let strategy = InstallStrategy::current();
        self.install_builtin(&strategy).await;

        if let Some(custom) = custom_units {
            self.install_custom(&custom, &strategy).await;
        }

        tracing::debug!(
            process = %desc.process_name,
            strategy = ?strategy,
            "startup sequence issued"
        );
        Ok(())
    }
}

/// Run the startup sequence against the process-wide engine
pub async fn startup<F>(
    desc: &ProcessDescriptor,
    global_init: F,
    plugins: Option<Vec<Arc<dyn ObserverPlugin>>>,
    custom_units: Option<Vec<Arc<dyn HookUnit>>>,
) -> EngineResult<()>
where
    F: FnOnce(&ProcessDescriptor) -> anyhow::Result<()>,
{
    Engine::global()
        .startup(desc, global_init, plugins, custom_units)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::HookOperation;
    use std::sync::atomic::AtomicUsize;

    struct CountingUnit {
        installs: Arc<AtomicUsize>,
    }

    impl HookUnit for CountingUnit {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn hook_operations(&self) -> Vec<HookOperation> {
            let installs = self.installs.clone();
            vec![HookOperation::new("count", move || {
                installs.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })]
        }
    }

    fn counting_engine() -> (Arc<Engine>, Arc<AtomicUsize>) {
        let installs = Arc::new(AtomicUsize::new(0));
        let unit = Arc::new(CountingUnit {
            installs: installs.clone(),
        });
        (Arc::new(Engine::new(vec![unit])), installs)
    }

    #[tokio::test]
    async fn test_builtin_installation_is_idempotent() {
        let (engine, installs) = counting_engine();

        assert!(engine.install_builtin(&InstallStrategy::VerboseSync).await);
        assert!(!engine.install_builtin(&InstallStrategy::VerboseSync).await);

        assert_eq!(installs.load(Ordering::SeqCst), 1);
        assert!(engine.is_builtin_installed());
    }

    #[tokio::test]
    async fn test_builtin_installation_is_idempotent_under_race() {
        let (engine, installs) = counting_engine();

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let engine = engine.clone();
                tokio::spawn(
                    async move { engine.install_builtin(&InstallStrategy::VerboseSync).await },
                )
            })
            .collect();

        let mut claimed = 0;
        for task in tasks {
            if task.await.unwrap() {
                claimed += 1;
            }
        }

        assert_eq!(claimed, 1);
        assert_eq!(installs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failing_unit_does_not_block_later_units() {
        struct FailingUnit;

        impl HookUnit for FailingUnit {
            fn name(&self) -> &'static str {
                "failing"
            }

            fn hook_operations(&self) -> Vec<HookOperation> {
                vec![HookOperation::new("always_fails", || {
                    Err(crate::error::EngineError::BackendUnavailable)
                })]
            }
        }

        let installs = Arc::new(AtomicUsize::new(0));
        let engine = Engine::new(vec![
            Arc::new(FailingUnit),
            Arc::new(CountingUnit {
                installs: installs.clone(),
            }),
        ]);

        assert!(engine.install_builtin(&InstallStrategy::VerboseSync).await);
        assert_eq!(installs.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_custom_units_reinstall_every_time() {
        let (engine, installs) = counting_engine();
        let custom: Vec<Arc<dyn HookUnit>> = vec![Arc::new(CountingUnit {
            installs: installs.clone(),
        })];

        engine
            .install_custom(&custom, &InstallStrategy::VerboseSync)
            .await;
        engine
            .install_custom(&custom, &InstallStrategy::VerboseSync)
            .await;

        assert_eq!(installs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_global_init_failure_aborts_startup() {
        let (engine, installs) = counting_engine();
        let desc = ProcessDescriptor::new("com.example.app", "/tmp");

        let result = engine
            .startup(&desc, |_| anyhow::bail!("host context missing"), None, None)
            .await;

        assert!(matches!(result, Err(EngineError::GlobalInit(_))));
        assert_eq!(installs.load(Ordering::SeqCst), 0);
        assert!(!engine.is_builtin_installed());
    }

    #[test]
    fn test_centers_derived_from_units_with_the_capability() {
        let engine = Engine::new(units::builtin_units());
        // task and net expose centers, unwind does not
        assert_eq!(engine.units().len(), 3);
        assert_eq!(engine.centers().len(), 2);
        let names: Vec<_> = engine.centers().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["task", "net"]);
    }
}
