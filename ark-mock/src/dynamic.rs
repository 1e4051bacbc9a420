use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use ark_core::{ArkError, Sample, SeriesSource};

/// Instruction for how `fetch` should behave for a given source key.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(ArkError),
}

#[derive(Default)]
struct InternalState {
    fetch_rules: HashMap<String, MockBehavior<Vec<Sample>>>,
    requests: Vec<String>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `fetch` calls with a specific source key.
    pub async fn set_fetch_behavior(
        &self,
        source_key: impl Into<String>,
        behavior: MockBehavior<Vec<Sample>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.fetch_rules.insert(source_key.into(), behavior);
    }

    /// Return a copy of the fetch log, in call order.
    pub async fn get_requests(&self) -> Vec<String> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.fetch_rules.clear();
        guard.requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
///
/// Keys without a scripted behavior fail with `ArkError::Query`.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn SeriesSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SeriesSource>, controller)
    }
}

#[async_trait]
impl SeriesSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch(&self, source_key: &str) -> Result<Vec<Sample>, ArkError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(source_key.to_string());
            guard.fetch_rules.get(source_key).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(rows)) => Ok(rows),
            Some(MockBehavior::Fail(e)) => Err(e),
            None => Err(ArkError::query(
                self.name,
                format!("no behavior scripted for '{source_key}'"),
            )),
        }
    }
}
