//! サイドバー（ナビゲーション・折りたたみ・閉じるボタン）

use crate::bridge::{self, HostHandle};
use crate::routing::href;
use leptos::prelude::*;

struct NavItem {
    icon: &'static str,
    label: &'static str,
    path: &'static str,
}

const fn item(icon: &'static str, label: &'static str, path: &'static str) -> NavItem {
    NavItem { icon, label, path }
}

/// 区切り線で分けたグループ
const NAV_GROUPS: &[&[NavItem]] = &[
    &[item("📖", "Panoramica", "/")],
    &[
        item("▦", "Database", "/database"),
        item("📄", "Importazione & AI", "/import"),
        item("🗄", "Convalida Dati", "/validation"),
        item("📅", "Scadenzario", "/calendar"),
        item("👥", "Dipendenti", "/employees"),
    ],
    &[
        item("🛡", "Sicurezza & Audit", "/security"),
        item("⚙", "Configurazione", "/settings"),
        item("💾", "Backup & Manutenzione", "/maintenance"),
    ],
    &[
        item("📘", "Glossario", "/glossary"),
        item("⌨", "Scorciatoie", "/shortcuts"),
        item("🛟", "Risoluzione Problemi", "/troubleshooting"),
    ],
];

#[component]
pub fn Sidebar(route: RwSignal<String>, host: HostHandle) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);

    let groups = NAV_GROUPS
        .iter()
        .map(|group| {
            let links = group
                .iter()
                .map(|nav| {
                    let path = nav.path;
                    view! {
                        <a
                            href=href(path)
                            class="nav-item"
                            class:active=move || route.get() == path
                            title=nav.label
                        >
                            <span class="nav-icon">{nav.icon}</span>
                            <Show when=move || !collapsed.get()>
                                <span class="nav-label">{nav.label}</span>
                            </Show>
                        </a>
                    }
                })
                .collect_view();
            view! { <div class="nav-group">{links}</div> }
        })
        .collect_view();

    view! {
        <aside class="sidebar" class:collapsed=move || collapsed.get()>
            <div class="sidebar-header">
                <Show when=move || !collapsed.get()>
                    <div class="brand">"Intelleo"<span class="brand-accent">"Guide"</span></div>
                </Show>
                <button class="collapse-toggle" on:click=move |_| set_collapsed.update(|c| *c = !*c)>
                    {move || if collapsed.get() { "›" } else { "‹" }}
                </button>
            </div>

            <nav class="sidebar-nav">
                {groups}
                <div class="nav-group">
                    <button class="nav-item nav-close" title="Chiudi" on:click=move |_| bridge::request_close(host)>
                        <span class="nav-icon">"✕"</span>
                        <Show when=move || !collapsed.get()>
                            <span class="nav-label">"Chiudi"</span>
                        </Show>
                    </button>
                </div>
            </nav>

            <div class="sidebar-footer">
                <Show when=move || !collapsed.get()>
                    <p>"v1.0.0 • Guida Interattiva"</p>
                </Show>
            </div>
        </aside>
    }
}
