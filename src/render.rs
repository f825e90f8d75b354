//! 端末向けの表示
//!
//! 文字列を組み立てて返すだけにして、出力は呼び出し側で行う。

use intelleo_guide_common::pages::{self, Page};
use intelleo_guide_common::{
    DashboardTable, GlossaryTerm, LogEntry, LogKind, Navigator, Notification, NotificationKind,
    QueueItem, SearchEntry, SortColumn,
};
use std::fmt::Write;

/// 選択したページを端末に表示するナビゲータ
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&mut self, path: &str) {
        match pages::page_for(path) {
            Some(page) => println!("{}", render_page(page)),
            None => println!("⚠ ページが見つかりません: {}", path),
        }
    }
}

pub fn render_search_results(query: &str, results: &[SearchEntry]) -> String {
    let mut out = String::new();
    if results.is_empty() {
        let _ = writeln!(out, "Nessun risultato per \"{}\"", query);
        return out;
    }
    for (i, entry) in results.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {:<24} {}", i + 1, entry.title, entry.path);
    }
    out
}

pub fn render_page(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Home › {}", page.breadcrumb);
    let _ = writeln!(out, "{}", page.title);
    let _ = writeln!(out, "{}", "=".repeat(page.title.chars().count()));
    let _ = writeln!(out, "{}", page.summary);
    out
}

pub fn render_page_list() -> String {
    let mut out = String::new();
    for page in pages::PAGES {
        let embed = page
            .embed
            .map(|e| format!(" [{:?}]", e).to_lowercase())
            .unwrap_or_default();
        let _ = writeln!(out, "{:<18} {}{}", page.path, page.title, embed);
    }
    out
}

pub fn render_glossary(terms: &[&GlossaryTerm]) -> String {
    let mut out = String::new();
    for term in terms {
        let _ = writeln!(out, "■ {}", term.term);
        let _ = writeln!(out, "  {}\n", term.definition);
    }
    out
}

fn header_cell(table: &DashboardTable, column: SortColumn) -> String {
    match table.sort_indicator(column) {
        Some(arrow) => format!("{} {}", column.header(), arrow),
        None => column.header().to_string(),
    }
}

pub fn render_table(table: &DashboardTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "   {:<18} {:<22} {:<12} {:<12} {}",
        header_cell(table, SortColumn::EmployeeName),
        header_cell(table, SortColumn::DocumentType),
        header_cell(table, SortColumn::IssueDate),
        header_cell(table, SortColumn::ExpiryDate),
        "Stato"
    );

    let rows = table.visible_rows();
    if rows.is_empty() {
        let _ = writeln!(out, "   Nessun risultato trovato");
        return out;
    }
    for row in rows {
        let marker = if table.selected() == Some(row.id) { "▶" } else { " " };
        let _ = writeln!(
            out,
            "{}  {:<18} {:<22} {:<12} {:<12} {} ({})",
            marker,
            row.employee_name,
            row.document_type,
            row.issue_date_display(),
            row.expiry_date_display(),
            row.status.label(),
            row.status.badge().as_str()
        );
    }
    out
}

pub fn render_queue_item(item: &QueueItem) -> String {
    let mut line = format!(
        "#{} {} → {} | {} | {} | {}",
        item.id,
        item.file_name,
        item.employee_display(),
        item.category,
        item.date.format("%Y-%m-%d"),
        item.confidence.as_str()
    );
    if item.confidence.is_uncertain() {
        line.push_str(" [Dati Incerti]");
    }
    line
}

pub fn render_notification(notification: &Notification) -> String {
    let icon = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✖",
    };
    format!("{} {}", icon, notification.message)
}

pub fn log_marker(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Info => " ",
        LogKind::Success => "✔",
        LogKind::Warning => "⚠",
        LogKind::Done => "✅",
    }
}

pub fn render_log_entry(entry: &LogEntry) -> String {
    format!("{} {}", log_marker(entry.kind), entry.message)
}
