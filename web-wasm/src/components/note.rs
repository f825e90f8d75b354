//! 注記ボックス（info / warning / success / tip）

use intelleo_guide_common::NoteKind;
use leptos::prelude::*;

fn icon(kind: NoteKind) -> &'static str {
    match kind {
        NoteKind::Info => "ℹ",
        NoteKind::Warning => "⚠",
        NoteKind::Success => "✔",
        NoteKind::Tip => "💡",
    }
}

#[component]
pub fn Note(
    #[prop(optional)] kind: NoteKind,
    #[prop(optional)] title: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("note note-{}", kind.as_str())>
            <div class="note-icon">{icon(kind)}</div>
            <div class="note-body">
                {title.map(|t| view! { <h5 class="note-title">{t}</h5> })}
                <div class="note-text">{children()}</div>
            </div>
        </div>
    }
}
