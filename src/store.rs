//! フィードバック保存ファイル
//!
//! ブラウザのlocalStorageの代わりに、設定ディレクトリのJSONに
//! キー・バリューを書き出す。

use intelleo_guide_common::{Error as CommonError, KeyValueStore, Result as CommonResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// ファイルの中身
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    /// バージョン（互換性チェック用）
    version: u32,
    entries: BTreeMap<String, String>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: FileStore::CURRENT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSONファイルに書き出すストア
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    data: StoreFile,
}

impl FileStore {
    const CURRENT_VERSION: u32 = 1;

    /// 読み込み。壊れている・存在しない場合は空から始める
    pub fn open(path: &Path) -> Self {
        let data = Self::read(path).unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            data,
        }
    }

    fn read(path: &Path) -> Option<StoreFile> {
        if !path.exists() {
            return None;
        }
        let file = File::open(path).ok()?;
        match serde_json::from_reader::<_, StoreFile>(BufReader::new(file)) {
            Ok(data) if data.version == Self::CURRENT_VERSION => Some(data),
            Ok(data) => {
                log::warn!(
                    "feedback store version {} != {}, starting fresh",
                    data.version,
                    Self::CURRENT_VERSION
                );
                None
            }
            Err(e) => {
                log::warn!("feedback store unreadable ({}), starting fresh", e);
                None
            }
        }
    }

    fn flush(&self) -> CommonResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.data)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.data.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.entries.is_empty()
    }

    /// 保存済みのキーと値
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> CommonResult<()> {
        self.data.entries.insert(key.to_string(), value.to_string());
        self.flush()
            .map_err(|e| CommonError::Storage(format!("{}: {}", self.path.display(), e)))
    }

    fn remove(&mut self, key: &str) -> CommonResult<()> {
        if self.data.entries.remove(key).is_some() {
            self.flush()
                .map_err(|e| CommonError::Storage(format!("{}: {}", self.path.display(), e)))?;
        }
        Ok(())
    }
}
