//! ヘッダー（パンくず・クイック検索）

use crate::routing::{href, HashNavigator};
use gloo::events::EventListener;
use intelleo_guide_common::pages::{self, HOME_PATH};
use intelleo_guide_common::{QuickSearch, SearchEntry, SearchIndex};
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// documentのmousedownを購読する。現在の所有者が破棄されると解除
fn on_document_mousedown(handler: impl FnMut(&web_sys::Event) + 'static) {
    let listener = EventListener::new(&gloo::utils::document(), "mousedown", handler);
    let listener = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        listener.try_update_value(|l| l.take());
    });
}

#[component]
pub fn Header(route: RwSignal<String>, entries: Vec<SearchEntry>) -> impl IntoView {
    let search = RwSignal::new(QuickSearch::new(SearchIndex::new(entries)));
    let search_ref = NodeRef::<Div>::new();

    // 検索欄の外をクリックしたら閉じる
    on_document_mousedown(move |ev| {
        let Some(container) = search_ref.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !container.contains(target.as_ref()) {
            search.update(|s| s.dismiss());
        }
    });

    let select = move |path: String| {
        let mut navigator = HashNavigator::new(route);
        search.update(|s| s.select_result(&path, &mut navigator));
    };

    let results = move || search.with(|s| s.results().to_vec());

    view! {
        <header class="header">
            <div class="breadcrumb">
                <a href=href(HOME_PATH)>"Home"</a>
                <Show when=move || route.get() != HOME_PATH>
                    <span class="breadcrumb-sep">"›"</span>
                    <span class="breadcrumb-current">{move || pages::breadcrumb(&route.get())}</span>
                </Show>
            </div>

            <div class="search" node_ref=search_ref>
                <input
                    type="text"
                    placeholder="Cerca nella guida..."
                    prop:value=move || search.with(|s| s.query().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        search.update(|s| s.set_query(&value));
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            search.update(|s| s.dismiss());
                        }
                    }
                />
                <Show
                    when=move || search.with(|s| s.query().is_empty())
                    fallback=move || view! {
                        <button class="search-clear" on:click=move |_| search.update(|s| s.clear())>
                            "✕"
                        </button>
                    }
                >
                    <span class="search-hint">"⌘K"</span>
                </Show>

                <Show when=move || search.with(|s| s.is_open())>
                    <div class="search-results">
                        <Show
                            when=move || !results().is_empty()
                            fallback=|| view! { <div class="search-empty">"Nessun risultato trovato."</div> }
                        >
                            <For
                                each=results
                                key=|entry| entry.path.clone()
                                children=move |entry: SearchEntry| {
                                    let path = entry.path.clone();
                                    view! {
                                        <button class="search-result" on:click=move |_| select(path.clone())>
                                            <span class="search-result-icon">"⌘"</span>
                                            <span>{entry.title}</span>
                                        </button>
                                    }
                                }
                            />
                        </Show>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire_mousedown() {
        let event = web_sys::MouseEvent::new("mousedown").unwrap();
        gloo::utils::document().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn mousedown_listener_released_on_cleanup() {
        let owner = Owner::new();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            owner.with(|| on_document_mousedown(move |_| hits.set(hits.get() + 1)));
        }

        fire_mousedown();
        assert_eq!(hits.get(), 1);

        owner.cleanup();
        fire_mousedown();
        assert_eq!(hits.get(), 1);
    }
}
