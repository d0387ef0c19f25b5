use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::attachment::application::ports::outgoing::{BlobBucket, BlobBucketError};

#[derive(Default)]
struct BucketState {
    objects: HashMap<String, (Vec<u8>, String)>,
    offline: bool,
}

/// Object storage kept in memory. Clones share the same objects.
#[derive(Clone, Default)]
pub struct InMemoryBucket {
    state: Arc<Mutex<BucketState>>,
}

impl InMemoryBucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: &str, bytes: Vec<u8>, content_type: &str) {
        self.state
            .lock()
            .unwrap()
            .objects
            .insert(path.to_string(), (bytes, content_type.to_string()));
    }

    /// Bytes and content type stored at `path`.
    pub fn object(&self, path: &str) -> Option<(Vec<u8>, String)> {
        self.state.lock().unwrap().objects.get(path).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.state.lock().unwrap().objects.len()
    }

    pub fn go_offline(&self) {
        self.state.lock().unwrap().offline = true;
    }
}

#[async_trait]
impl BlobBucket for InMemoryBucket {
    async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobBucketError> {
        let mut state = self.state.lock().unwrap();
        if state.offline {
            return Err(BlobBucketError::Transport("connection refused".to_string()));
        }
        state
            .objects
            .insert(path.to_string(), (bytes, content_type.to_string()));
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, BlobBucketError> {
        let state = self.state.lock().unwrap();
        if state.offline {
            return Err(BlobBucketError::Transport("connection refused".to_string()));
        }
        Ok(state.objects.get(path).map(|(bytes, _)| bytes.clone()))
    }

    async fn delete(&self, path: &str) -> Result<bool, BlobBucketError> {
        let mut state = self.state.lock().unwrap();
        if state.offline {
            return Err(BlobBucketError::Transport("connection refused".to_string()));
        }
        Ok(state.objects.remove(path).is_some())
    }
}
