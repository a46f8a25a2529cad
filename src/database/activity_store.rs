use std::sync::Arc;

use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::{Activity, Catalog};

/// Process-local activity catalog.
///
/// Cloning is cheap and every clone shares the same catalog, so the store can
/// be handed to axum as router state. Nothing is persisted; dropping the last
/// clone drops every signup.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Store pre-filled with the fixed startup catalog.
    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn snapshot(&self) -> Catalog {
        Catalog(self.inner.read().await.clone())
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.inner
            .read()
            .await
            .iter()
            .find(|a| a.name == name)
            .cloned()
    }

    /// Runs `f` against the named activity while holding the write lock.
    ///
    /// Returns `None` without calling `f` when no activity has that name.
    /// Callers do all their checks inside `f` so check and mutation cannot
    /// interleave with another request.
    pub async fn update<F, R>(&self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut Activity) -> R,
    {
        let mut activities = self.inner.write().await;
        activities.iter_mut().find(|a| a.name == name).map(f)
    }
}
