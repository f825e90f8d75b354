//! ダッシュボード（証明書テーブル）シミュレータ
//!
//! 固定の行データに対して検索・並べ替え・単一選択を行う。
//! 表示する行は毎回 元データ → 絞り込み → 並べ替え で導出し、
//! 検索文字列と並べ替え設定以外に隠れた状態は持たない。

use crate::types::TableRow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 並べ替え可能な列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    EmployeeName,
    DocumentType,
    IssueDate,
    ExpiryDate,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::EmployeeName,
        SortColumn::DocumentType,
        SortColumn::IssueDate,
        SortColumn::ExpiryDate,
    ];

    /// 列見出し
    pub fn header(&self) -> &'static str {
        match self {
            SortColumn::EmployeeName => "Dipendente",
            SortColumn::DocumentType => "Documento",
            SortColumn::IssueDate => "Data Ril.",
            SortColumn::ExpiryDate => "Scadenza",
        }
    }

    /// 行の値を比較（日付は日付として比較）
    fn compare(&self, a: &TableRow, b: &TableRow) -> Ordering {
        match self {
            SortColumn::EmployeeName => a.employee_name.cmp(&b.employee_name),
            SortColumn::DocumentType => a.document_type.cmp(&b.document_type),
            SortColumn::IssueDate => a.issue_date.cmp(&b.issue_date),
            SortColumn::ExpiryDate => a.expiry_date.cmp(&b.expiry_date),
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "employee" | "dipendente" | "name" => Ok(SortColumn::EmployeeName),
            "document" | "documento" | "corso" => Ok(SortColumn::DocumentType),
            "issue" | "data" | "issue-date" => Ok(SortColumn::IssueDate),
            "expiry" | "scadenza" | "expiry-date" => Ok(SortColumn::ExpiryDate),
            _ => Err(format!(
                "Unknown column: {}. Use employee, document, issue, or expiry",
                s
            )),
        }
    }
}

/// 並べ替え方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// 見出しに付ける矢印
    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// 並べ替え設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub column: SortColumn,
    pub direction: SortDirection,
}

/// テーブルの状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardTable {
    rows: Vec<TableRow>,
    search_text: String,
    sort: Option<SortConfig>,
    selected: Option<u32>,
}

impl DashboardTable {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// 編集・削除ボタンの有効状態
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    /// 同じ列の再クリックで昇順⇔降順、新しい列は昇順から
    pub fn set_sort(&mut self, column: SortColumn) {
        let direction = match self.sort {
            Some(SortConfig {
                column: current,
                direction: SortDirection::Asc,
            }) if current == column => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        self.sort = Some(SortConfig { column, direction });
    }

    /// 選択の切り替え。選択中の行を再度選ぶと解除
    pub fn select_row(&mut self, id: u32) {
        if self.selected == Some(id) {
            self.selected = None;
        } else if self.rows.iter().any(|r| r.id == id) {
            self.selected = Some(id);
        }
    }

    /// 検索・並べ替え・選択を初期状態に戻す
    pub fn reset(&mut self) {
        self.search_text.clear();
        self.sort = None;
        self.selected = None;
    }

    /// 列見出しの矢印（並べ替え中の列のみ）
    pub fn sort_indicator(&self, column: SortColumn) -> Option<&'static str> {
        self.sort
            .filter(|s| s.column == column)
            .map(|s| s.direction.indicator())
    }

    /// 絞り込みと並べ替えを適用した行
    pub fn visible_rows(&self) -> Vec<&TableRow> {
        let mut rows = filter_rows(&self.rows, &self.search_text);
        if let Some(sort) = self.sort {
            // sort_byは安定ソート
            rows.sort_by(|a, b| match sort.direction {
                SortDirection::Asc => sort.column.compare(a, b),
                SortDirection::Desc => sort.column.compare(b, a),
            });
        }
        rows
    }
}

/// 従業員名または書類種別に検索文字列を含む行
pub fn filter_rows<'a>(rows: &'a [TableRow], text: &str) -> Vec<&'a TableRow> {
    let needle = text.to_lowercase();
    rows.iter()
        .filter(|r| {
            r.employee_name.to_lowercase().contains(&needle)
                || r.document_type.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureProvider, FixtureSet};
    use crate::types::RowStatus;
    use chrono::NaiveDate;

    fn table() -> DashboardTable {
        DashboardTable::new(FixtureSet::default().dashboard_rows())
    }

    fn ids(rows: &[&TableRow]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn row(id: u32, name: &str, doc: &str, issue: (i32, u32, u32)) -> TableRow {
        let date = NaiveDate::from_ymd_opt(issue.0, issue.1, issue.2).unwrap();
        TableRow {
            id,
            employee_name: name.into(),
            document_type: doc.into(),
            issue_date: date,
            expiry_date: date,
            status: RowStatus::Active,
        }
    }

    #[test]
    fn test_no_filter_shows_all_in_order() {
        let t = table();
        assert_eq!(ids(&t.visible_rows()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_by_name_or_document() {
        let mut t = table();
        t.set_search_text("rossi");
        assert_eq!(ids(&t.visible_rows()), vec![1]);

        t.set_search_text("SOCCORSO");
        assert_eq!(ids(&t.visible_rows()), vec![2]);

        t.set_search_text("zzz");
        assert!(t.visible_rows().is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let t = table();
        for text in ["", "o", "ferr", "HLO", "x"] {
            let once: Vec<TableRow> = filter_rows(t.rows(), text).into_iter().cloned().collect();
            let twice: Vec<TableRow> = filter_rows(&once, text).into_iter().cloned().collect();
            assert_eq!(once, twice, "text {text}");
        }
    }

    #[test]
    fn test_sort_toggle() {
        let mut t = table();
        t.set_sort(SortColumn::EmployeeName);
        assert_eq!(ids(&t.visible_rows()), vec![2, 4, 5, 1, 3]);
        assert_eq!(t.sort_indicator(SortColumn::EmployeeName), Some("↑"));
        assert_eq!(t.sort_indicator(SortColumn::DocumentType), None);

        t.set_sort(SortColumn::EmployeeName);
        assert_eq!(ids(&t.visible_rows()), vec![3, 1, 5, 4, 2]);
        assert_eq!(t.sort_indicator(SortColumn::EmployeeName), Some("↓"));

        // 3回目は昇順に戻る
        t.set_sort(SortColumn::EmployeeName);
        assert_eq!(t.sort().map(|s| s.direction), Some(SortDirection::Asc));
    }

    #[test]
    fn test_new_column_starts_ascending() {
        let mut t = table();
        t.set_sort(SortColumn::EmployeeName);
        t.set_sort(SortColumn::EmployeeName);
        t.set_sort(SortColumn::DocumentType);
        assert_eq!(
            t.sort(),
            Some(SortConfig {
                column: SortColumn::DocumentType,
                direction: SortDirection::Asc
            })
        );
    }

    #[test]
    fn test_date_sort_is_chronological() {
        let mut t = table();
        t.set_sort(SortColumn::IssueDate);
        // 2020-11-20, 2021-02-10, 2022-09-01, 2023-05-15, 2024-03-12
        assert_eq!(ids(&t.visible_rows()), vec![3, 2, 4, 1, 5]);

        t.set_sort(SortColumn::ExpiryDate);
        // 2024-02-10, 2025-11-20, 2027-09-01, 2028-05-15, 2029-03-12
        assert_eq!(ids(&t.visible_rows()), vec![2, 3, 4, 1, 5]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let rows = vec![
            row(1, "B", "X", (2020, 1, 1)),
            row(2, "A", "X", (2020, 1, 1)),
            row(3, "C", "X", (2020, 1, 1)),
        ];
        let mut t = DashboardTable::new(rows);
        t.set_sort(SortColumn::DocumentType);
        assert_eq!(ids(&t.visible_rows()), vec![1, 2, 3]);
        t.set_sort(SortColumn::DocumentType);
        assert_eq!(ids(&t.visible_rows()), vec![1, 2, 3]);
    }

    #[test]
    fn test_reset_restores_original_order() {
        let mut t = table();
        t.set_search_text("a");
        t.set_sort(SortColumn::ExpiryDate);
        t.select_row(4);
        t.reset();

        assert_eq!(t.search_text(), "");
        assert_eq!(t.sort(), None);
        assert_eq!(t.selected(), None);
        assert_eq!(ids(&t.visible_rows()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_select_row_toggles() {
        let mut t = table();
        assert!(!t.has_selection());
        t.select_row(3);
        assert_eq!(t.selected(), Some(3));
        t.select_row(5);
        assert_eq!(t.selected(), Some(5));
        t.select_row(5);
        assert_eq!(t.selected(), None);

        // 存在しないIDは無視
        t.select_row(99);
        assert_eq!(t.selected(), None);
    }

    #[test]
    fn test_parse_column() {
        assert_eq!("Scadenza".parse::<SortColumn>(), Ok(SortColumn::ExpiryDate));
        assert_eq!("corso".parse::<SortColumn>(), Ok(SortColumn::DocumentType));
        assert!("salary".parse::<SortColumn>().is_err());
    }
}
