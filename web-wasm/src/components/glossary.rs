//! 用語集

use intelleo_guide_common::fixtures::filter_glossary;
use intelleo_guide_common::GlossaryTerm;
use leptos::prelude::*;

#[component]
pub fn Glossary(terms: Vec<GlossaryTerm>) -> impl IntoView {
    let (filter, set_filter) = signal(String::new());
    let terms = StoredValue::new(terms);

    let visible = move || {
        let text = filter.get();
        terms.with_value(|all| {
            filter_glossary(all, &text)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="glossary">
            <input
                type="text"
                class="glossary-filter"
                placeholder="Filtra termini..."
                prop:value=move || filter.get()
                on:input=move |ev| set_filter.set(event_target_value(&ev))
            />
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="text-muted">"Nessun termine trovato"</p> }
            >
                <dl class="glossary-list">
                    <For
                        each=visible
                        key=|t| t.term.clone()
                        children=|t: GlossaryTerm| view! {
                            <div class="glossary-item">
                                <dt>{t.term}</dt>
                                <dd>{t.definition}</dd>
                            </div>
                        }
                    />
                </dl>
            </Show>
        </div>
    }
}
