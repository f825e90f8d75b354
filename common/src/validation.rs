//! 検証キューシミュレータ
//!
//! 承認・却下のどちらも項目をキューから取り除き、トースト通知を出す。
//! 通知は一定時間後に消える。消去は通知IDで照合するので、
//! 古いタイマーが新しい通知を消すことはない。

use crate::types::{Notification, NotificationKind, QueueItem};
use std::time::Duration;

/// 通知の自動消去までの時間
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(3000);

const APPROVED_MESSAGE: &str = "Certificato approvato e spostato nel Database!";
const REJECTED_MESSAGE: &str = "Certificato eliminato.";

/// 承認/却下
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn notification(&self) -> (&'static str, NotificationKind) {
        match self {
            Decision::Approve => (APPROVED_MESSAGE, NotificationKind::Success),
            Decision::Reject => (REJECTED_MESSAGE, NotificationKind::Error),
        }
    }
}

/// キューの状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationQueue {
    seed: Vec<QueueItem>,
    items: Vec<QueueItem>,
    notification: Option<Notification>,
    next_notification_id: u64,
}

impl ValidationQueue {
    pub fn new(seed: Vec<QueueItem>) -> Self {
        Self {
            items: seed.clone(),
            seed,
            notification: None,
            next_notification_id: 0,
        }
    }

    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 空ならシミュレーション再開の案内を出す
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn approve(&mut self, id: u32) -> Option<Notification> {
        self.decide(id, Decision::Approve)
    }

    pub fn reject(&mut self, id: u32) -> Option<Notification> {
        self.decide(id, Decision::Reject)
    }

    /// 項目を取り除いて通知を出す。存在しないIDは何もしない
    pub fn decide(&mut self, id: u32, decision: Decision) -> Option<Notification> {
        let position = self.items.iter().position(|i| i.id == id)?;
        let item = self.items.remove(position);
        log::debug!("queue item {} ({}) -> {:?}", item.id, item.file_name, decision);

        let (message, kind) = decision.notification();
        let notification = Notification {
            id: self.next_notification_id,
            message: message.to_string(),
            kind,
        };
        self.next_notification_id += 1;
        self.notification = Some(notification.clone());
        Some(notification)
    }

    /// 自動消去タイマーの満了。表示中の通知と一致したときだけ消す
    pub fn dismiss_notification(&mut self, id: u64) -> bool {
        match &self.notification {
            Some(current) if current.id == id => {
                self.notification = None;
                true
            }
            _ => false,
        }
    }

    /// 元のデータでキューを作り直す
    pub fn restart(&mut self) {
        self.items = self.seed.clone();
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FixtureProvider, FixtureSet};

    fn queue() -> ValidationQueue {
        ValidationQueue::new(FixtureSet::default().queue_items())
    }

    fn ids(queue: &ValidationQueue) -> Vec<u32> {
        queue.items().iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_approve_reject_scenario() {
        let mut q = queue();
        assert_eq!(ids(&q), vec![1, 2, 3]);

        let n = q.approve(1).unwrap();
        assert_eq!(ids(&q), vec![2, 3]);
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(q.notification().map(|n| n.kind), Some(NotificationKind::Success));

        let n = q.reject(2).unwrap();
        assert_eq!(ids(&q), vec![3]);
        assert_eq!(n.kind, NotificationKind::Error);

        q.approve(3);
        assert!(q.is_empty());
    }

    #[test]
    fn test_notification_timeout_is_three_seconds() {
        assert_eq!(NOTIFICATION_TIMEOUT, Duration::from_millis(3000));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut q = queue();
        assert!(q.approve(42).is_none());
        assert!(q.reject(42).is_none());
        assert_eq!(q.len(), 3);
        assert!(q.notification().is_none());
    }

    #[test]
    fn test_each_decision_removes_exactly_one() {
        let mut q = queue();
        for id in [2, 1, 3] {
            let before = q.len();
            q.reject(id);
            assert_eq!(q.len(), before - 1);
            assert!(!q.items().iter().any(|i| i.id == id));
        }
    }

    #[test]
    fn test_stale_timer_keeps_newer_notification() {
        let mut q = queue();
        let first = q.approve(1).unwrap();
        let second = q.reject(2).unwrap();

        assert!(!q.dismiss_notification(first.id));
        assert_eq!(q.notification().map(|n| n.id), Some(second.id));

        assert!(q.dismiss_notification(second.id));
        assert!(q.notification().is_none());
    }

    #[test]
    fn test_empty_queue_stays_empty() {
        let mut q = queue();
        for id in [1, 2, 3] {
            q.approve(id);
        }
        assert!(q.approve(1).is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn test_restart_reseeds() {
        let mut q = queue();
        q.approve(1);
        q.reject(2);
        q.restart();
        assert_eq!(ids(&q), vec![1, 2, 3]);
        assert!(q.notification().is_none());
    }
}
