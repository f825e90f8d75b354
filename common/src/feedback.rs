//! ページごとのフィードバック（👍/👎）
//!
//! 投票はページパスをキーにキー・バリューストアへ保存し、
//! 同じページを再訪したときは投票欄を出さない。期限やサーバ同期はない。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 永続化先の抽象
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// 投票
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Up => "up",
            Vote::Down => "down",
        }
    }
}

impl std::str::FromStr for Vote {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "si" | "yes" | "+" => Ok(Vote::Up),
            "down" | "no" | "-" => Ok(Vote::Down),
            _ => Err(format!("Unknown vote: {}. Use up or down", s)),
        }
    }
}

/// ストアのキーの接頭辞
pub const FEEDBACK_KEY_PREFIX: &str = "feedback_";

/// ストアのキー
pub fn feedback_key(path: &str) -> String {
    format!("{}{}", FEEDBACK_KEY_PREFIX, path)
}

/// フィードバック欄の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackState {
    path: String,
    vote: Option<Vote>,
}

impl FeedbackState {
    /// ページ表示時に保存済みの投票を読む。読めない値は未投票扱い
    pub fn load<S: KeyValueStore + ?Sized>(path: &str, store: &S) -> Self {
        let vote = store
            .get(&feedback_key(path))
            .and_then(|v| v.parse::<Vote>().ok());
        Self {
            path: path.to_string(),
            vote,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn vote(&self) -> Option<Vote> {
        self.vote
    }

    /// 投票欄を出すか
    pub fn should_prompt(&self) -> bool {
        self.vote.is_none()
    }

    /// 投票を記録して保存する
    pub fn cast<S: KeyValueStore + ?Sized>(&mut self, vote: Vote, store: &mut S) -> Result<()> {
        self.vote = Some(vote);
        store.set(&feedback_key(&self.path), vote.as_str())
    }

    /// 保存済みの投票を消す
    pub fn clear<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<()> {
        self.vote = None;
        store.remove(&feedback_key(&self.path))
    }
}

/// メモリ上のストア
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_page_prompts() {
        let store = MemoryStore::new();
        let state = FeedbackState::load("/import", &store);
        assert!(state.should_prompt());
        assert_eq!(state.vote(), None);
    }

    #[test]
    fn test_vote_is_persisted_per_path() {
        let mut store = MemoryStore::new();
        let mut state = FeedbackState::load("/import", &store);
        state.cast(Vote::Up, &mut store).unwrap();
        assert!(!state.should_prompt());
        assert_eq!(store.get("feedback_/import").as_deref(), Some("up"));

        let revisit = FeedbackState::load("/import", &store);
        assert_eq!(revisit.vote(), Some(Vote::Up));
        assert!(!revisit.should_prompt());

        let other = FeedbackState::load("/glossary", &store);
        assert!(other.should_prompt());
    }

    #[test]
    fn test_unparsable_value_prompts_again() {
        let mut store = MemoryStore::new();
        store.set("feedback_/", "maybe").unwrap();
        let state = FeedbackState::load("/", &store);
        assert!(state.should_prompt());
    }

    #[test]
    fn test_clear_removes_vote() {
        let mut store = MemoryStore::new();
        let mut state = FeedbackState::load("/security", &store);
        state.cast(Vote::Down, &mut store).unwrap();
        state.clear(&mut store).unwrap();
        assert!(state.should_prompt());
        assert_eq!(store, MemoryStore::new());
    }

    #[test]
    fn test_parse_vote() {
        assert_eq!("UP".parse::<Vote>(), Ok(Vote::Up));
        assert_eq!(" down ".parse::<Vote>(), Ok(Vote::Down));
        assert!("sideways".parse::<Vote>().is_err());
    }
}
