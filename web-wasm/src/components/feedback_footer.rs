//! ページ下部の「役に立ったか」投票欄

use crate::storage::BrowserStore;
use intelleo_guide_common::{FeedbackState, Vote};
use leptos::prelude::*;

#[component]
pub fn FeedbackFooter(route: RwSignal<String>) -> impl IntoView {
    let state = RwSignal::new(FeedbackState::load(&route.get_untracked(), &BrowserStore::open()));

    // ページが変わったら保存済みの投票を読み直す
    Effect::new(move |_| {
        let path = route.get();
        state.set(FeedbackState::load(&path, &BrowserStore::open()));
    });

    let vote = move |vote: Vote| {
        let mut store = BrowserStore::open();
        state.update(|s| {
            if let Err(e) = s.cast(vote, &mut store) {
                gloo::console::warn!(format!("feedback not saved: {}", e));
            }
        });
    };

    view! {
        <div class="feedback">
            <Show
                when=move || state.with(|s| s.should_prompt())
                fallback=|| view! {
                    <div class="feedback-thanks">"Grazie per il tuo feedback!"</div>
                }
            >
                <h4>"Questa pagina ti è stata utile?"</h4>
                <div class="feedback-buttons">
                    <button class="btn feedback-up" on:click=move |_| vote(Vote::Up)>
                        "👍 Sì, grazie"
                    </button>
                    <button class="btn feedback-down" on:click=move |_| vote(Vote::Down)>
                        "👎 Non molto"
                    </button>
                </div>
            </Show>
            <p class="feedback-meta">"Ultimo aggiornamento: 25 Gennaio 2025 • Intelleo v1.0"</p>
        </div>
    }
}
