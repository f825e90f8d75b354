use crate::error::{GuideError, Result};
use intelleo_guide_common::FixtureSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// フィクスチャファイルを指定する環境変数
pub const FIXTURES_ENV: &str = "INTELLEO_GUIDE_FIXTURES";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 差し替え用フィクスチャJSON
    pub fixtures: Option<PathBuf>,
    /// フィードバック保存先（省略時は設定ディレクトリ）
    pub feedback_store: Option<PathBuf>,
    /// インポートシミュレータの速度係数
    pub import_speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 壊れた設定ファイルは既定値で読み替える
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_or_default_from(&Self::config_path()?))
    }

    pub fn load_or_default_from(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable config {}: {}", config_path.display(), e);
            Self::default_config()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GuideError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("intelleo-guide"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            fixtures: None,
            feedback_store: None,
            import_speed: 1.0,
        }
    }

    /// 使用するフィクスチャのパス（環境変数を優先）
    pub fn fixtures_path(&self) -> Option<PathBuf> {
        if let Ok(path) = std::env::var(FIXTURES_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        self.fixtures.clone()
    }

    /// フィクスチャを読み込む。指定がなければ組み込みデータ
    pub fn load_fixtures(&self, override_path: Option<&Path>) -> Result<FixtureSet> {
        let path = override_path
            .map(Path::to_path_buf)
            .or_else(|| self.fixtures_path());
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(GuideError::FixturesNotFound(path.display().to_string()));
                }
                log::info!("loading fixtures from {}", path.display());
                Ok(FixtureSet::from_file(&path)?)
            }
            None => Ok(FixtureSet::default()),
        }
    }

    /// フィードバック保存先
    pub fn feedback_store_path(&self) -> Result<PathBuf> {
        match &self.feedback_store {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("feedback.json")),
        }
    }

    pub fn set_fixtures(&mut self, path: Option<PathBuf>) -> Result<()> {
        self.fixtures = path;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intelleo_guide_common::FixtureProvider;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.fixtures.is_none());
        assert_eq!(config.import_speed, 1.0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            import_speed: 4.0,
            feedback_store: Some(dir.path().join("fb.json")),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.import_speed, 4.0);
        assert_eq!(loaded.feedback_store_path().unwrap(), dir.path().join("fb.json"));
    }

    #[test]
    fn test_broken_config_falls_back_for_repair() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(GuideError::JsonParse(_))));

        let mut config = Config::load_or_default_from(&path);
        assert!(config.fixtures.is_none());
        assert_eq!(config.import_speed, 1.0);

        config.import_speed = 2.0;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().import_speed, 2.0);
    }

    #[test]
    fn test_partial_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "import_speed": 3.0 }"#).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.import_speed, 3.0);
    }

    #[test]
    fn test_override_fixtures_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fixtures.json");
        std::fs::write(&path, r#"{ "dashboardRows": [] }"#).unwrap();

        let set = Config::default().load_fixtures(Some(&path)).unwrap();
        assert!(set.dashboard_rows().is_empty());
        assert_eq!(set.search_entries().len(), 12);
    }

    #[test]
    fn test_missing_fixtures_file() {
        let dir = tempdir().unwrap();
        let err = Config::default()
            .load_fixtures(Some(&dir.path().join("none.json")))
            .unwrap_err();
        assert!(matches!(err, GuideError::FixturesNotFound(_)));
    }
}
