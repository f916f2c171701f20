use std::sync::Arc;

use portfolio_shared::content_store::KvStore;

use crate::muse::MuseClient;

#[derive(Clone)]
pub struct AppState {
    /// Backing key-value store holding one JSON document per collection
    store: Arc<dyn KvStore>,
    muse: Arc<MuseClient>,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>, muse: MuseClient) -> Self {
        Self {
            store,
            muse: Arc::new(muse),
        }
    }

    pub fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }

    pub fn muse(&self) -> &MuseClient {
        &self.muse
    }
}
