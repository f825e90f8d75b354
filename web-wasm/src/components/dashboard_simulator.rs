//! ダッシュボード表のシミュレータ

use crate::components::badge::Badge;
use intelleo_guide_common::{DashboardTable, SortColumn, TableRow};
use leptos::prelude::*;

#[component]
pub fn DashboardSimulator(rows: Vec<TableRow>) -> impl IntoView {
    let table = RwSignal::new(DashboardTable::new(rows));

    let visible = move || {
        table.with(|t| t.visible_rows().into_iter().cloned().collect::<Vec<_>>())
    };
    let has_selection = move || table.with(|t| t.has_selection());

    let header_cell = move |column: SortColumn| {
        let label = move || match table.with(|t| t.sort_indicator(column)) {
            Some(arrow) => format!("{} {}", column.header(), arrow),
            None => column.header().to_string(),
        };
        view! {
            <div
                class="th sortable"
                role="button"
                tabindex="0"
                on:click=move |_| table.update(|t| t.set_sort(column))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        ev.prevent_default();
                        table.update(|t| t.set_sort(column));
                    }
                }
            >
                {label}
            </div>
        }
    };

    view! {
        <div class="simulator dashboard-sim">
            <div class="sim-toolbar">
                <div class="sim-search">
                    <span class="sim-search-icon">"🔍"</span>
                    <input
                        type="text"
                        placeholder="Cerca dipendente o corso..."
                        prop:value=move || table.with(|t| t.search_text().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            table.update(|t| t.set_search_text(&value));
                        }
                    />
                </div>
                <div class="sim-actions">
                    <button class="icon-btn" title="Filtra (Simulato)">"⏷"</button>
                    <button class="icon-btn" title="Resetta" on:click=move |_| table.update(|t| t.reset())>
                        "↻"
                    </button>
                    <div class="divider" />
                    <button class="btn btn-primary btn-small" disabled=move || !has_selection()>
                        "Modifica"
                    </button>
                    <button class="btn btn-danger btn-small" disabled=move || !has_selection()>
                        "Cancella"
                    </button>
                </div>
            </div>

            <div class="table-head">
                {header_cell(SortColumn::EmployeeName)}
                {header_cell(SortColumn::DocumentType)}
                {header_cell(SortColumn::IssueDate)}
                {header_cell(SortColumn::ExpiryDate)}
                <div class="th center">"Stato"</div>
            </div>

            <div class="table-body">
                <Show
                    when=move || !visible().is_empty()
                    fallback=|| view! {
                        <div class="table-empty">"Nessun risultato trovato"</div>
                    }
                >
                    <For
                        each=visible
                        key=|row| row.id
                        children=move |row: TableRow| {
                            let id = row.id;
                            view! {
                                <div
                                    class="tr"
                                    class:selected=move || table.with(|t| t.selected() == Some(id))
                                    on:click=move |_| table.update(|t| t.select_row(id))
                                >
                                    <div class="td strong" title=row.employee_name.clone()>{row.employee_name.clone()}</div>
                                    <div class="td" title=row.document_type.clone()>{row.document_type.clone()}</div>
                                    <div class="td mono">{row.issue_date_display()}</div>
                                    <div class="td mono">{row.expiry_date_display()}</div>
                                    <div class="td center">
                                        <Badge variant=row.status.badge()>{row.status.label()}</Badge>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>

            <div class="sim-footer">
                <span>{move || format!("{} righe visualizzate", visible().len())}</span>
                <div class="legend">
                    <span class="dot dot-success" />" Attivo "
                    <span class="dot dot-warning" />" In Scadenza "
                    <span class="dot dot-danger" />" Scaduto"
                </div>
            </div>
        </div>
    }
}
