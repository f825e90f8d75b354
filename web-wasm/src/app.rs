//! メインアプリケーションコンポーネント

use crate::bridge;
use crate::components::{
    feedback_footer::FeedbackFooter, header::Header, page_view::PageView, sidebar::Sidebar,
};
use crate::routing;
use intelleo_guide_common::{FixtureProvider, FixtureSet};
use leptos::prelude::*;

/// index.htmlに埋め込むフィクスチャの要素ID
const FIXTURES_ELEMENT_ID: &str = "guide-fixtures";

/// `<script id="guide-fixtures" type="application/json">` があれば読む
fn load_fixtures() -> FixtureSet {
    let json = gloo::utils::document()
        .get_element_by_id(FIXTURES_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match json {
        Some(json) if !json.trim().is_empty() => FixtureSet::from_json(&json).unwrap_or_else(|e| {
            gloo::console::warn!(format!("invalid embedded fixtures, using defaults: {}", e));
            FixtureSet::default()
        }),
        _ => FixtureSet::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let fixtures = load_fixtures();
    let entries = fixtures.search_entries();
    provide_context(fixtures);

    let route = routing::use_hash_route();
    let host = bridge::connect_host();

    view! {
        <div class="layout">
            <Sidebar route=route host=host />
            <div class="main-column">
                <Header route=route entries=entries />
                <main class="content">
                    <div class="content-inner">
                        {move || view! { <PageView path=route.get() /> }}
                        <FeedbackFooter route=route />
                    </div>
                </main>
            </div>
        </div>
    }
}
