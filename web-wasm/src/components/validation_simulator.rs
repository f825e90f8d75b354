//! 検証キューのシミュレータ

use crate::components::badge::Badge;
use crate::components::import_simulator::millis;
use gloo::timers::callback::Timeout;
use intelleo_guide_common::{
    BadgeVariant, Decision, NotificationKind, QueueItem, ValidationQueue, NOTIFICATION_TIMEOUT,
};
use leptos::prelude::*;
use std::time::Duration;

/// トーストの自動消去タイマー
#[derive(Clone, Copy)]
struct DismissTimer(StoredValue<Option<Timeout>, LocalStorage>);

impl DismissTimer {
    /// 現在の所有者が破棄されると止まる
    fn owned() -> Self {
        let timer = Self(StoredValue::new_local(None));
        on_cleanup(move || timer.cancel());
        timer
    }

    fn cancel(&self) {
        self.0.try_update_value(|t| t.take());
    }

    /// 通知ごとに張り直す。消すのは自分のIDの通知だけ
    fn schedule(&self, queue: RwSignal<ValidationQueue>, notification_id: u64, delay: Duration) {
        let timeout = Timeout::new(millis(delay), move || {
            queue.try_update(|q| q.dismiss_notification(notification_id));
        });
        self.0.try_update_value(|t| t.replace(timeout));
    }
}

fn apply_decision(
    queue: RwSignal<ValidationQueue>,
    timer: DismissTimer,
    id: u32,
    decision: Decision,
    delay: Duration,
) {
    if let Some(notification) = queue.try_update(|q| q.decide(id, decision)).flatten() {
        timer.schedule(queue, notification.id, delay);
    }
}

#[component]
pub fn ValidationSimulator(items: Vec<QueueItem>) -> impl IntoView {
    let queue = RwSignal::new(ValidationQueue::new(items));
    let timer = DismissTimer::owned();
    let decide = move |id: u32, decision: Decision| {
        apply_decision(queue, timer, id, decision, NOTIFICATION_TIMEOUT)
    };

    let items = move || queue.with(|q| q.items().to_vec());

    view! {
        <div class="simulator validation-sim">
            <div class="sim-header">
                <h3 class="sim-title">
                    <span class="sim-title-icon warn">"⚠"</span>
                    {move || format!("Coda di Convalida ({})", queue.with(|q| q.len()))}
                </h3>
                <span class="sim-hint">"Clicca ✓ per approvare, ✕ per rifiutare"</span>
            </div>

            <div class="sim-body queue">
                <Show
                    when=move || !queue.with(|q| q.is_empty())
                    fallback=move || view! {
                        <div class="queue-empty">
                            <div class="queue-empty-icon">"✓"</div>
                            <p>"Tutto fatto! Nessun documento in attesa."</p>
                            <button class="link-btn" on:click=move |_| queue.update(|q| q.restart())>
                                "Ricarica simulazione"
                            </button>
                        </div>
                    }
                >
                    <For
                        each=items
                        key=|item| item.id
                        children=move |item: QueueItem| {
                            let id = item.id;
                            let uncertain = item.confidence.is_uncertain();
                            let unresolved = item.employee_name.is_none();
                            view! {
                                <div class="queue-item">
                                    <div class="file-icon">"📄"</div>
                                    <div class="queue-info">
                                        <div class="queue-title">
                                            <span class="employee" class:unresolved=unresolved>
                                                {item.employee_display().to_string()}
                                            </span>
                                            <Show when=move || uncertain>
                                                <Badge variant=BadgeVariant::Danger>"Dati Incerti"</Badge>
                                            </Show>
                                        </div>
                                        <div class="queue-meta">
                                            <span class="category">{item.category.clone()}</span>
                                            <span>{item.date.format("%Y-%m-%d").to_string()}</span>
                                            <span class="file-name">{item.file_name.clone()}</span>
                                        </div>
                                    </div>
                                    <div class="queue-actions">
                                        <button class="icon-btn" title="Anteprima PDF">"👁"</button>
                                        <div class="divider" />
                                        <button
                                            class="icon-btn reject"
                                            title="Rifiuta/Elimina"
                                            on:click=move |_| decide(id, Decision::Reject)
                                        >
                                            "✕"
                                        </button>
                                        <button
                                            class="icon-btn approve"
                                            title="Approva"
                                            on:click=move |_| decide(id, Decision::Approve)
                                        >
                                            "✓"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>

            {move || {
                queue.with(|q| q.notification().cloned()).map(|n| {
                    let class = match n.kind {
                        NotificationKind::Success => "toast toast-success",
                        NotificationKind::Error => "toast toast-error",
                    };
                    view! { <div class=class>{n.message}</div> }
                })
            }}
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use intelleo_guide_common::{FixtureProvider, FixtureSet};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const SHORT: Duration = Duration::from_millis(10);
    const LONG: Duration = Duration::from_millis(5000);

    fn seeded(owner: &Owner) -> RwSignal<ValidationQueue> {
        owner.with(|| RwSignal::new(ValidationQueue::new(FixtureSet::default().queue_items())))
    }

    fn toast_id(queue: RwSignal<ValidationQueue>) -> Option<u64> {
        queue.with_untracked(|q| q.notification().map(|n| n.id))
    }

    #[wasm_bindgen_test]
    async fn toast_clears_after_delay() {
        let root = Owner::new();
        let queue = seeded(&root);
        let timer = root.with(DismissTimer::owned);

        apply_decision(queue, timer, 1, Decision::Approve, SHORT);
        assert!(toast_id(queue).is_some());
        TimeoutFuture::new(60).await;

        assert_eq!(toast_id(queue), None);
        assert_eq!(queue.with_untracked(|q| q.len()), 2);
    }

    #[wasm_bindgen_test]
    async fn cleanup_cancels_pending_dismiss() {
        let root = Owner::new();
        let queue = seeded(&root);
        let view = root.child();
        let timer = view.with(DismissTimer::owned);

        apply_decision(queue, timer, 2, Decision::Reject, SHORT);
        let shown = toast_id(queue);
        view.cleanup();
        TimeoutFuture::new(60).await;

        assert!(shown.is_some());
        assert_eq!(toast_id(queue), shown);
    }

    #[wasm_bindgen_test]
    async fn stale_timer_keeps_newer_toast() {
        let root = Owner::new();
        let queue = seeded(&root);
        let (stale, current) = root.with(|| (DismissTimer::owned(), DismissTimer::owned()));

        apply_decision(queue, stale, 1, Decision::Approve, SHORT);
        apply_decision(queue, current, 2, Decision::Reject, LONG);
        let newer = toast_id(queue);
        TimeoutFuture::new(60).await;

        assert!(newer.is_some());
        assert_eq!(toast_id(queue), newer);
        root.cleanup();
    }

    #[wasm_bindgen_test]
    async fn new_decision_replaces_pending_timer() {
        let root = Owner::new();
        let queue = seeded(&root);
        let timer = root.with(DismissTimer::owned);

        apply_decision(queue, timer, 1, Decision::Approve, SHORT);
        apply_decision(queue, timer, 3, Decision::Approve, LONG);
        let newer = toast_id(queue);
        TimeoutFuture::new(60).await;

        assert_eq!(toast_id(queue), newer);
        root.cleanup();
    }
}
