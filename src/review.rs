//! 検証キューの対話レビュー

use crate::error::{GuideError, Result};
use crate::render::{render_notification, render_queue_item};
use dialoguer::Input;
use intelleo_guide_common::{Decision, Notification, ValidationQueue};

/// キューが空になったときの案内
pub const QUEUE_EMPTY_MESSAGE: &str = "Tutto fatto! Nessun documento in attesa.";

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Decide(Decision),
    /// この項目は保留
    Skip,
    /// 終了
    Quit,
}

/// 入力文字列をアクションに変換。不明な入力はNone
pub fn parse_action(input: &str) -> Option<ReviewAction> {
    match input.trim() {
        "a" | "A" | "approva" => Some(ReviewAction::Decide(Decision::Approve)),
        "r" | "R" | "rifiuta" => Some(ReviewAction::Decide(Decision::Reject)),
        "" | "s" | "S" => Some(ReviewAction::Skip),
        "q" | "Q" => Some(ReviewAction::Quit),
        _ => None,
    }
}

/// ID指定で承認・却下をまとめて適用。承認が先
///
/// 存在しないIDは警告を出して飛ばす。
pub fn apply_decisions(
    queue: &mut ValidationQueue,
    approve: &[u32],
    reject: &[u32],
) -> Vec<Notification> {
    let decisions = approve
        .iter()
        .map(|id| (*id, Decision::Approve))
        .chain(reject.iter().map(|id| (*id, Decision::Reject)));

    let mut notifications = Vec::new();
    for (id, decision) in decisions {
        match queue.decide(id, decision) {
            Some(n) => notifications.push(n),
            None => log::warn!("queue item {} not found", id),
        }
    }
    notifications
}

/// 残っている項目を順に確認する
pub fn run_interactive_review(queue: &mut ValidationQueue) -> Result<()> {
    let ids: Vec<u32> = queue.items().iter().map(|i| i.id).collect();
    let total = ids.len();

    for (i, id) in ids.into_iter().enumerate() {
        let Some(item) = queue.items().iter().find(|item| item.id == id) else {
            continue;
        };
        println!("[{}/{}] {}", i + 1, total, render_queue_item(item));

        match prompt_action()? {
            ReviewAction::Decide(decision) => {
                if let Some(n) = queue.decide(id, decision) {
                    println!("  {}\n", render_notification(&n));
                }
            }
            ReviewAction::Skip => println!("  - スキップ\n"),
            ReviewAction::Quit => break,
        }
    }

    if queue.is_empty() {
        println!("✅ {}", QUEUE_EMPTY_MESSAGE);
    } else {
        println!("残り {}件", queue.len());
    }
    Ok(())
}

fn prompt_action() -> Result<ReviewAction> {
    loop {
        let input: String = Input::new()
            .with_prompt("操作 (a:承認 r:却下 s:スキップ q:終了)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| GuideError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            Some(action) => return Ok(action),
            None => println!("  a / r / s / q のいずれかを入力してください"),
        }
    }
}
