use logai_core::MockLogStore;
use logai_intent::IntentClassifier;

// Built once in main and shared read-only, no locks needed
pub struct AppState {
    pub store: MockLogStore,
    pub classifier: IntentClassifier,
}

impl AppState {
    pub fn new(store: MockLogStore) -> Self {
        Self {
            store,
            classifier: IntentClassifier::new(),
        }
    }
}
