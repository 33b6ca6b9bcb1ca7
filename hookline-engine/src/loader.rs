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

//! Hook unit loader

use crate::strategy::InstallStrategy;
use crate::unit::HookUnit;

/// Install every operation a unit declares, in declaration order, through
/// `strategy`. Operation failures are contained by the strategy and never
/// stop the walk.
pub async fn load_unit(unit: &dyn HookUnit, strategy: &InstallStrategy) {
    let operations = unit.hook_operations();
    tracing::debug!(
        unit = unit.name(),
        operations = operations.len(),
        strategy = ?strategy,
        "loading hook unit"
    );

    for op in operations {
        strategy.install(op).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::unit::HookOperation;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct ScriptedUnit {
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl HookUnit for ScriptedUnit {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn hook_operations(&self) -> Vec<HookOperation> {
            let log = self.log.clone();
            let first = HookOperation::new("first", move || {
                log.lock().push("first");
                Err(EngineError::BackendUnavailable)
            });
            let log = self.log.clone();
            let second = HookOperation::new("second", move || {
                log.lock().push("second");
                Ok(())
            });
            vec![first, second]
        }
    }

    #[tokio::test]
    async fn test_failing_operation_does_not_stop_the_walk() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let unit = ScriptedUnit { log: log.clone() };

        load_unit(&unit, &InstallStrategy::VerboseSync).await;

        assert_eq!(log.lock().as_slice(), &["first", "second"]);
    }
}
