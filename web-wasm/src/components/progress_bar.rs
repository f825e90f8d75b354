//! プログレスバーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ProgressBar(
    #[prop(into)] progress: Signal<u8>,
    #[prop(into)] label: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-header">
                <span>{move || label.get()}</span>
                <span>{move || format!("{}%", progress.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get())
                />
            </div>
        </div>
    }
}
