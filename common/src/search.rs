//! クイック検索
//!
//! 固定インデックス（約12件）に対する大文字小文字を無視した部分一致。
//! 件数が小さいのでキー入力ごとに線形走査する。

use crate::pages::Navigator;
use crate::types::SearchEntry;

/// 検索インデックス
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// タイトルまたはキーワードにクエリを含む項目を元の順序で返す
    ///
    /// 空白だけのクエリは空扱い（結果なし）。
    pub fn filter(&self, query: &str) -> Vec<SearchEntry> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.keywords.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}

/// 検索ボックスの状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuickSearch {
    index: SearchIndex,
    query: String,
    results: Vec<SearchEntry>,
}

impl QuickSearch {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            query: String::new(),
            results: Vec::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchEntry] {
        &self.results
    }

    /// ドロップダウンを開くか
    pub fn is_open(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// クエリ更新と同時に結果を再計算する
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.results = self.index.filter(&self.query);
    }

    /// 結果を選択して遷移し、検索をリセットする
    pub fn select_result<N: Navigator + ?Sized>(&mut self, path: &str, navigator: &mut N) {
        navigator.navigate(path);
        self.clear();
    }

    /// 検索ボックス外のポインタ操作で閉じる
    pub fn dismiss(&mut self) {
        self.clear();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;
    use crate::fixtures::FixtureProvider;

    fn builtin_index() -> SearchIndex {
        SearchIndex::new(FixtureSet::default().search_entries())
    }

    struct RecordingNavigator {
        visited: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: &str) {
            self.visited.push(path.to_string());
        }
    }

    fn is_subsequence(results: &[SearchEntry], all: &[SearchEntry]) -> bool {
        let mut it = all.iter();
        results.iter().all(|r| it.any(|e| e == r))
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let index = builtin_index();
        assert!(index.filter("").is_empty());
        assert!(index.filter("   ").is_empty());
    }

    #[test]
    fn test_scaden_matches_calendar_only() {
        let index = builtin_index();
        let results = index.filter("scaden");
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"Scadenzario"));
        assert!(!titles.contains(&"Glossario"));
        assert!(results.iter().any(|r| r.path == "/calendar"));
    }

    #[test]
    fn test_case_insensitive_on_title_and_keywords() {
        let index = builtin_index();
        let upper = index.filter("GANTT");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].path, "/calendar");

        let title = index.filter("gLoSsArIo");
        assert_eq!(title.len(), 1);
        assert_eq!(title[0].path, "/glossary");
    }

    #[test]
    fn test_results_keep_index_order() {
        let index = builtin_index();
        for query in ["a", "e", "i", "ro", "errori", "importazione", "!!", "."] {
            let results = index.filter(query);
            assert!(is_subsequence(&results, index.entries()), "query {query}");
            let needle = query.to_lowercase();
            for r in &results {
                assert!(
                    r.title.to_lowercase().contains(&needle)
                        || r.keywords.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn test_punctuation_query_is_harmless() {
        let index = builtin_index();
        assert!(index.filter("?*[(").is_empty());
    }

    #[test]
    fn test_set_query_recomputes_results() {
        let mut search = QuickSearch::new(builtin_index());
        search.set_query("backup");
        assert_eq!(search.results().len(), 1);
        assert!(search.is_open());

        search.set_query("");
        assert!(search.results().is_empty());
        assert!(!search.is_open());
    }

    #[test]
    fn test_select_result_navigates_and_resets() {
        let mut search = QuickSearch::new(builtin_index());
        let mut nav = RecordingNavigator { visited: vec![] };

        search.set_query("orfani");
        let path = search.results()[0].path.clone();
        search.select_result(&path, &mut nav);

        assert_eq!(nav.visited, vec!["/validation".to_string()]);
        assert_eq!(search.query(), "");
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_dismiss_clears_without_navigation() {
        let mut search = QuickSearch::new(builtin_index());
        search.set_query("sicurezza");
        search.dismiss();
        assert_eq!(search.query(), "");
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_custom_index() {
        let index = SearchIndex::new(vec![
            SearchEntry::new("Alpha", "/a", "uno"),
            SearchEntry::new("Beta", "/b", "due uno"),
        ]);
        let results = index.filter("UNO");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].path, "/a");
    }
}
