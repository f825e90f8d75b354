//! ページ本文

use crate::components::{
    dashboard_simulator::DashboardSimulator, glossary::Glossary,
    import_simulator::ImportSimulator, note::Note, validation_simulator::ValidationSimulator,
};
use crate::routing::href;
use intelleo_guide_common::pages::{self, Embed, HOME_PATH};
use intelleo_guide_common::{FixtureProvider, FixtureSet, NoteKind};
use leptos::prelude::*;

fn embed_view(embed: Embed, fixtures: &FixtureSet) -> AnyView {
    match embed {
        Embed::Dashboard => view! { <DashboardSimulator rows=fixtures.dashboard_rows() /> }.into_any(),
        Embed::Import => view! { <ImportSimulator script=fixtures.import_script() /> }.into_any(),
        Embed::Validation => view! { <ValidationSimulator items=fixtures.queue_items() /> }.into_any(),
        Embed::Glossary => view! { <Glossary terms=fixtures.glossary_terms() /> }.into_any(),
    }
}

#[component]
fn HomeCards() -> impl IntoView {
    let cards = pages::feature_pages()
        .map(|page| {
            view! {
                <a class="guide-card" href=href(page.path)>
                    <h3>{page.title}</h3>
                    <p>{page.summary}</p>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="card-grid">{cards}</div>
        <Note kind=NoteKind::Tip title="Suggerimento">
            "Usa la barra di ricerca in alto per trovare rapidamente qualsiasi argomento."
        </Note>
    }
}

#[component]
pub fn PageView(path: String) -> impl IntoView {
    let fixtures = use_context::<FixtureSet>().unwrap_or_default();

    let Some(page) = pages::page_for(&path) else {
        return view! {
            <article class="page">
                <h1>"Pagina non trovata"</h1>
                <Note kind=NoteKind::Warning>
                    {format!("La pagina {} non esiste.", path)}
                </Note>
                <a href=href(HOME_PATH)>"Torna alla panoramica"</a>
            </article>
        }
        .into_any();
    };

    let body = match page.embed {
        Some(embed) => embed_view(embed, &fixtures),
        None if page.path == HOME_PATH => view! { <HomeCards /> }.into_any(),
        None => ().into_any(),
    };

    view! {
        <article class="page">
            <h1>{page.title}</h1>
            <p class="lead">{page.summary}</p>
            <div class="page-embed">{body}</div>
        </article>
    }
    .into_any()
}
