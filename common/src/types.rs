//! ガイドの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - SearchEntry: クイック検索のインデックス項目
//! - TableRow: ダッシュボードシミュレータの行
//! - QueueItem: 検証キューの項目
//! - LogEntry / Notification: シミュレータの表示用メッセージ

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 表示日付フォーマット（DD/MM/YYYY）
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// 検索インデックスの項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub title: String,
    pub path: String,
    /// スペース区切りのキーワード
    #[serde(default)]
    pub keywords: String,
}

impl SearchEntry {
    pub fn new(title: &str, path: &str, keywords: &str) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            keywords: keywords.into(),
        }
    }
}

/// 証明書の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    #[serde(alias = "attivo")]
    Active,
    #[serde(alias = "in_scadenza")]
    Expiring,
    #[serde(alias = "scaduto")]
    Expired,
    /// 未知の値（危険扱い）
    #[serde(other)]
    Unknown,
}

impl RowStatus {
    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Active => "ATTIVO",
            RowStatus::Expiring => "IN SCADENZA",
            RowStatus::Expired => "SCADUTO",
            RowStatus::Unknown => "SCONOSCIUTO",
        }
    }

    /// 状態からバッジ種別へ。active/expiring以外はすべてdanger
    pub fn badge(&self) -> BadgeVariant {
        match self {
            RowStatus::Active => BadgeVariant::Success,
            RowStatus::Expiring => BadgeVariant::Warning,
            _ => BadgeVariant::Danger,
        }
    }
}

/// ダッシュボードの行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: u32,
    pub employee_name: String,
    pub document_type: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: RowStatus,
}

impl TableRow {
    pub fn issue_date_display(&self) -> String {
        self.issue_date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    pub fn expiry_date_display(&self) -> String {
        self.expiry_date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// AI読み取りの信頼度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }

    /// 信頼度が低い項目には「Dati Incerti」バッジを付ける
    pub fn is_uncertain(&self) -> bool {
        matches!(self, Confidence::Low)
    }
}

/// 未解決の従業員の表示
pub const UNRESOLVED_EMPLOYEE: &str = "???";

/// 検証キューの項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub id: u32,
    pub file_name: String,
    /// Noneは照合できなかった（孤児）
    #[serde(default)]
    pub employee_name: Option<String>,
    pub category: String,
    pub date: NaiveDate,
    pub confidence: Confidence,
}

impl QueueItem {
    pub fn employee_display(&self) -> &str {
        self.employee_name.as_deref().unwrap_or(UNRESOLVED_EMPLOYEE)
    }
}

/// 用語集の項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
}

/// ログ行の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Success,
    Warning,
    Done,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Info => "info",
            LogKind::Success => "success",
            LogKind::Warning => "warning",
            LogKind::Done => "done",
        }
    }
}

/// シミュレータのログ行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// 描画キー用の連番
    pub id: u64,
    pub message: String,
    pub kind: LogKind,
}

/// トースト通知の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// トースト通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// 自動消去タイマーとの対応付けに使う
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// バッジ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Danger,
    Purple,
    /// 未知の値もこれ
    #[default]
    #[serde(other)]
    Default,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Primary => "primary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Danger => "danger",
            BadgeVariant::Purple => "purple",
        }
    }
}

/// 注記ボックスの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Warning,
    Success,
    Tip,
    /// 未知の値もこれ
    #[default]
    #[serde(other)]
    Info,
}

impl NoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::Info => "info",
            NoteKind::Warning => "warning",
            NoteKind::Success => "success",
            NoteKind::Tip => "tip",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_badge_mapping() {
        assert_eq!(RowStatus::Active.badge(), BadgeVariant::Success);
        assert_eq!(RowStatus::Expiring.badge(), BadgeVariant::Warning);
        assert_eq!(RowStatus::Expired.badge(), BadgeVariant::Danger);
        assert_eq!(RowStatus::Unknown.badge(), BadgeVariant::Danger);
    }

    #[test]
    fn test_unknown_status_deserializes() {
        let status: RowStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, RowStatus::Unknown);

        let status: RowStatus = serde_json::from_str("\"in_scadenza\"").unwrap();
        assert_eq!(status, RowStatus::Expiring);
    }

    #[test]
    fn test_table_row_json_and_display_dates() {
        let json = r#"{
            "id": 7,
            "employeeName": "ROSSI MARIO",
            "documentType": "PLE",
            "issueDate": "2023-05-15",
            "expiryDate": "2028-05-15",
            "status": "active"
        }"#;
        let row: TableRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.issue_date_display(), "15/05/2023");
        assert_eq!(row.expiry_date_display(), "15/05/2028");
    }

    #[test]
    fn test_unresolved_employee_display() {
        let json = r#"{
            "id": 2,
            "fileName": "doc_unknown_22.pdf",
            "category": "VISITA MEDICA",
            "date": "2023-11-01",
            "confidence": "low"
        }"#;
        let item: QueueItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.employee_display(), "???");
        assert!(item.confidence.is_uncertain());
    }

    #[test]
    fn test_unknown_variants_fall_back() {
        let badge: BadgeVariant = serde_json::from_str("\"nope\"").unwrap();
        assert_eq!(badge, BadgeVariant::Default);
        let badge: BadgeVariant = serde_json::from_str("\"danger\"").unwrap();
        assert_eq!(badge, BadgeVariant::Danger);
        let kind: NoteKind = serde_json::from_str("\"nope\"").unwrap();
        assert_eq!(kind, NoteKind::Info);
        let kind: NoteKind = serde_json::from_str("\"tip\"").unwrap();
        assert_eq!(kind, NoteKind::Tip);
    }
}
