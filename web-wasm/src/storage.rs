//! ブラウザのlocalStorageを使ったキー・バリューストア

use intelleo_guide_common::{Error, KeyValueStore, MemoryStore, Result};

/// localStorageが使えない環境（file://の一部など）ではメモリに保持する
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
    fallback: MemoryStore,
}

impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            gloo::console::warn!("localStorage not available, feedback will not persist");
        }
        Self {
            storage,
            fallback: MemoryStore::new(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match &self.storage {
            Some(s) => s.get_item(key).ok().flatten(),
            None => self.fallback.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match &self.storage {
            Some(s) => s
                .set_item(key, value)
                .map_err(|e| Error::Storage(format!("{:?}", e))),
            None => self.fallback.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match &self.storage {
            Some(s) => s
                .remove_item(key)
                .map_err(|e| Error::Storage(format!("{:?}", e))),
            None => self.fallback.remove(key),
        }
    }
}
