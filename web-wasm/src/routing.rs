//! ハッシュによるページ遷移
//!
//! Qt WebEngineからローカルファイルとして開かれるので、履歴APIではなく
//! `#/import` 形式のハッシュでページを切り替える。

use gloo::events::EventListener;
use gloo::utils::window;
use intelleo_guide_common::pages::{normalize_path, HOME_PATH};
use intelleo_guide_common::Navigator;
use leptos::prelude::*;

/// `#/import` → `/import`。空ならホーム
pub fn path_from_hash(hash: &str) -> String {
    let raw = hash.trim_start_matches('#');
    if raw.trim().is_empty() {
        HOME_PATH.to_string()
    } else {
        normalize_path(raw)
    }
}

fn current_path() -> String {
    let hash = window().location().hash().unwrap_or_default();
    path_from_hash(&hash)
}

/// 現在のパスを表すシグナル。hashchangeで更新される
pub fn use_hash_route() -> RwSignal<String> {
    let route = RwSignal::new(current_path());
    let listener = EventListener::new(&window(), "hashchange", move |_| {
        route.set(current_path());
    });
    let listener = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        listener.try_update_value(|l| l.take());
    });
    route
}

/// 検索結果などからの遷移
#[derive(Clone, Copy)]
pub struct HashNavigator {
    route: RwSignal<String>,
}

impl HashNavigator {
    pub fn new(route: RwSignal<String>) -> Self {
        Self { route }
    }
}

impl Navigator for HashNavigator {
    fn navigate(&mut self, path: &str) {
        let path = normalize_path(path);
        if let Err(e) = window().location().set_hash(&path) {
            gloo::console::warn!(format!("failed to update hash: {:?}", e));
        }
        self.route.set(path);
    }
}

/// aタグ用
pub fn href(path: &str) -> String {
    format!("#{}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_from_hash() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/import"), "/import");
        assert_eq!(path_from_hash("#/import/"), "/import");
        assert_eq!(path_from_hash("#glossary"), "/glossary");
        assert_eq!(path_from_hash("#/dashboard"), "/database");
    }

    #[test]
    fn test_href() {
        assert_eq!(href("/validation"), "#/validation");
    }
}
