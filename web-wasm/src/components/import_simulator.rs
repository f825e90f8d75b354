//! インポート処理のシミュレータ
//!
//! 状態遷移は`ImportSimulation`が持ち、このコンポーネントは返ってきた
//! タイマー指示どおりにgloo::timersを張り替える。タイマーはStoredValueに
//! 置くので、ページ遷移でコンポーネントが破棄されると一緒に止まる。

use crate::components::progress_bar::ProgressBar;
use gloo::timers::callback::{Interval, Timeout};
use intelleo_guide_common::{
    ImportPhase, ImportScript, ImportSimulation, LogEntry, LogKind, SimEvent, TimerCommand,
};
use leptos::prelude::*;
use std::time::Duration;

#[derive(Clone, Copy)]
struct Timers {
    upload: StoredValue<Option<Timeout>, LocalStorage>,
    ticker: StoredValue<Option<Interval>, LocalStorage>,
}

impl Timers {
    /// 現在の所有者が破棄されると両方止まる
    fn owned() -> Self {
        let timers = Self {
            upload: StoredValue::new_local(None),
            ticker: StoredValue::new_local(None),
        };
        on_cleanup(move || timers.cancel_all());
        timers
    }

    fn cancel_all(&self) {
        self.upload.try_update_value(|t| t.take());
        self.ticker.try_update_value(|t| t.take());
    }
}

pub(crate) fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

fn dispatch(sim: RwSignal<ImportSimulation>, timers: Timers, event: SimEvent) {
    let Some(command) = sim.try_update(|s| s.dispatch(event)) else {
        return;
    };
    match command {
        TimerCommand::ScheduleUpload(delay) => {
            let timeout = Timeout::new(millis(delay), move || {
                dispatch(sim, timers, SimEvent::UploadFinished)
            });
            timers.upload.try_update_value(|t| t.replace(timeout));
        }
        TimerCommand::StartTicking(period) => {
            let interval = Interval::new(millis(period), move || dispatch(sim, timers, SimEvent::Tick));
            timers.ticker.try_update_value(|t| t.replace(interval));
        }
        TimerCommand::StopTicking => {
            timers.ticker.try_update_value(|t| t.take());
        }
        TimerCommand::CancelAll => timers.cancel_all(),
        TimerCommand::Keep => {}
    }
}

fn log_class(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Info => "log-line log-info",
        LogKind::Success => "log-line log-success",
        LogKind::Warning => "log-line log-warning",
        LogKind::Done => "log-line log-done",
    }
}

fn log_icon(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Info => " ",
        LogKind::Success | LogKind::Done => "✔",
        LogKind::Warning => "⚠",
    }
}

#[component]
pub fn ImportSimulator(script: ImportScript) -> impl IntoView {
    let sim = RwSignal::new(ImportSimulation::new(script));
    let timers = Timers::owned();

    let phase = move || sim.with(|s| s.phase());
    let start = move || dispatch(sim, timers, SimEvent::Start);
    let reset = move || dispatch(sim, timers, SimEvent::Reset);

    let progress = Signal::derive(move || sim.with(|s| s.progress()));
    let progress_label = Signal::derive(move || match phase() {
        ImportPhase::Uploading => "Caricamento...".to_string(),
        ImportPhase::Done => "Completato".to_string(),
        _ => "Analisi in corso...".to_string(),
    });
    let remaining = move || {
        let secs = sim.with(|s| s.estimated_remaining()).as_secs_f64().ceil();
        format!("Stima tempo rimanente: {}s", secs)
    };
    let log = move || sim.with(|s| s.log().to_vec());

    view! {
        <div class="simulator import-sim">
            <div class="sim-header">
                <div class="sim-title">
                    <span class="sim-title-icon">"📄"</span>
                    <span>"Simulatore Importazione"</span>
                </div>
                <Show when=move || phase() == ImportPhase::Done>
                    <button class="link-btn" on:click=move |_| reset()>"↻ Riavvia"</button>
                </Show>
            </div>

            <div class="sim-body">
                <Show
                    when=move || phase() != ImportPhase::Idle
                    fallback=move || view! {
                        <button
                            class="dropzone"
                            on:click=move |_| start()
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" || ev.key() == " " {
                                    ev.prevent_default();
                                    start();
                                }
                            }
                        >
                            <div class="dropzone-icon">"☁"</div>
                            <h3>"Trascina qui i tuoi file PDF"</h3>
                            <p>"oppure clicca per selezionare una cartella"</p>
                            <span class="btn btn-primary">"Seleziona File"</span>
                        </button>
                    }
                >
                    <ProgressBar progress=progress label=progress_label />
                    <Show when=move || phase().is_running()>
                        <p class="progress-eta">{remaining}</p>
                    </Show>

                    <div class="console">
                        <For
                            each=log
                            key=|entry| entry.id
                            children=|entry: LogEntry| view! {
                                <div class=log_class(entry.kind)>
                                    <span class="log-icon">{log_icon(entry.kind)}</span>
                                    {entry.message}
                                </div>
                            }
                        />
                        <Show when=move || phase() == ImportPhase::Processing>
                            <span class="cursor">"_"</span>
                        </Show>
                    </div>

                    <Show when=move || phase() == ImportPhase::Done>
                        <div class="sim-summary">
                            <span class="sim-summary-icon">"📂"</span>
                            <div>
                                <h4>"Analisi Terminata"</h4>
                                <p>"3 file elaborati. 2 successi, 1 da convalidare."</p>
                            </div>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn quick_script() -> ImportScript {
        ImportScript {
            upload_delay_ms: 5,
            tick_interval_ms: 20,
            ..ImportScript::default()
        }
    }

    fn progress(sim: RwSignal<ImportSimulation>) -> (ImportPhase, u8) {
        sim.with_untracked(|s| (s.phase(), s.progress()))
    }

    #[wasm_bindgen_test]
    async fn cleanup_during_upload_cancels_timeout() {
        let root = Owner::new();
        let sim = root.with(|| RwSignal::new(ImportSimulation::new(quick_script())));
        let view = root.child();
        let timers = view.with(Timers::owned);

        dispatch(sim, timers, SimEvent::Start);
        view.cleanup();
        TimeoutFuture::new(60).await;

        assert_eq!(progress(sim), (ImportPhase::Uploading, 0));
    }

    #[wasm_bindgen_test]
    async fn cleanup_during_processing_stops_ticks() {
        let root = Owner::new();
        let sim = root.with(|| RwSignal::new(ImportSimulation::new(quick_script())));
        let view = root.child();
        let timers = view.with(Timers::owned);

        dispatch(sim, timers, SimEvent::Start);
        TimeoutFuture::new(60).await;
        assert_eq!(progress(sim).0, ImportPhase::Processing);

        view.cleanup();
        let frozen = progress(sim);
        TimeoutFuture::new(100).await;
        assert_eq!(progress(sim), frozen);
    }

    #[wasm_bindgen_test]
    async fn reset_cancels_pending_timers() {
        let root = Owner::new();
        let (sim, timers) = root.with(|| {
            (RwSignal::new(ImportSimulation::new(quick_script())), Timers::owned())
        });

        dispatch(sim, timers, SimEvent::Start);
        TimeoutFuture::new(60).await;
        dispatch(sim, timers, SimEvent::Reset);
        TimeoutFuture::new(100).await;

        assert_eq!(progress(sim), (ImportPhase::Idle, 0));
        assert!(sim.with_untracked(|s| s.log().is_empty()));
        root.cleanup();
    }
}
