use crate::tree::{Node, PathTree};
use std::sync::Arc;
use tokio::sync::Mutex;
use url::Url;

/// Cloneable handle for recording targets from several tasks.
///
/// Every call holds the lock for its whole duration, so a snapshot never
/// sees a half-applied insert.
#[derive(Debug, Clone, Default)]
pub struct SharedTree {
    inner: Arc<Mutex<PathTree>>,
}

impl SharedTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tree(tree: PathTree) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }

    pub async fn insert<I, S>(&self, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.lock().await.insert(segments);
    }

    pub async fn record_url(&self, url: &Url) {
        self.inner.lock().await.record_url(url);
    }

    /// Owned copy of the top-level nodes as they are right now.
    pub async fn snapshot(&self) -> Vec<Node> {
        self.inner.lock().await.structure().to_vec()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    /// Take the tree back out. Returns `Err(self)` while other handles exist.
    pub fn into_inner(self) -> Result<PathTree, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
