//! Intelleo Guide Common Library
//!
//! CLIとWeb(WASM)で共有されるガイドのロジック:
//! クイック検索、ページ一覧、3つのシミュレータ、フィードバック保存、ホスト連携

pub mod bridge;
pub mod dashboard;
pub mod error;
pub mod feedback;
pub mod fixtures;
pub mod import_sim;
pub mod pages;
pub mod search;
pub mod types;
pub mod validation;

pub use bridge::{CloseOutcome, HostBridge, HostIntegration};
pub use dashboard::{DashboardTable, SortColumn, SortConfig, SortDirection};
pub use error::{Error, Result};
pub use feedback::{FeedbackState, KeyValueStore, MemoryStore, Vote};
pub use fixtures::{FixtureProvider, FixtureSet};
pub use import_sim::{ImportPhase, ImportScript, ImportSimulation, SimEvent, TimerCommand};
pub use pages::{Embed, Navigator, Page};
pub use search::{QuickSearch, SearchIndex};
pub use types::{
    BadgeVariant, Confidence, GlossaryTerm, LogEntry, LogKind, NoteKind, Notification,
    NotificationKind, QueueItem, RowStatus, SearchEntry, TableRow,
};
pub use validation::{Decision, ValidationQueue, NOTIFICATION_TIMEOUT};
