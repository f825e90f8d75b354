//! インポートシミュレータを端末で実時間再生する
//!
//! 状態遷移は共通ライブラリのreducerに任せ、ここではreducerの
//! タイマー指示に従ってtokioのsleep/intervalを張るだけ。

use crate::render::render_log_entry;
use indicatif::{ProgressBar, ProgressStyle};
use intelleo_guide_common::{ImportPhase, ImportScript, ImportSimulation, SimEvent, TimerCommand};
use tokio::time::{interval, sleep, Interval, MissedTickBehavior};

/// 開始から完了（またはタイマー停止）までシミュレーションを進める
///
/// 状態が変わるたびに`on_update`を呼ぶ。futureをdropすると
/// 保留中のタイマーも一緒に破棄される。
pub async fn drive<F>(sim: &mut ImportSimulation, mut on_update: F)
where
    F: FnMut(&ImportSimulation),
{
    let mut command = sim.dispatch(SimEvent::Start);
    on_update(sim);
    let mut ticker: Option<Interval> = None;

    loop {
        match command {
            TimerCommand::ScheduleUpload(delay) => {
                sleep(delay).await;
                command = sim.dispatch(SimEvent::UploadFinished);
                on_update(sim);
                continue;
            }
            TimerCommand::StartTicking(period) => {
                let mut timer = interval(period);
                timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // 最初のtickは即時に完了するので読み捨てる
                timer.tick().await;
                ticker = Some(timer);
            }
            TimerCommand::StopTicking | TimerCommand::CancelAll => {
                ticker = None;
            }
            TimerCommand::Keep => {}
        }

        let Some(timer) = ticker.as_mut() else {
            break;
        };
        timer.tick().await;
        command = sim.dispatch(SimEvent::Tick);
        on_update(sim);
    }
}

/// 進捗バー付きで再生する。Ctrl+Cで中断するとidleに戻す
pub async fn run_with_progress(script: ImportScript) -> ImportSimulation {
    let mut sim = ImportSimulation::new(script);
    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut printed = 0usize;
    let interrupted = {
        let bar = bar.clone();
        let update = move |sim: &ImportSimulation| {
            for entry in &sim.log()[printed.min(sim.log().len())..] {
                bar.println(render_log_entry(entry));
            }
            printed = sim.log().len();
            bar.set_position(sim.progress() as u64);
            let remaining = sim.estimated_remaining().as_secs_f64().ceil();
            bar.set_message(format!("{} · Stima tempo rimanente: {}s", phase_label(sim.phase()), remaining));
        };
        tokio::select! {
            _ = drive(&mut sim, update) => false,
            _ = tokio::signal::ctrl_c() => true,
        }
    };

    if interrupted && sim.phase().is_running() {
        bar.abandon_with_message("interrotto");
        let _ = sim.reset();
    } else {
        bar.finish_with_message(phase_label(sim.phase()));
    }
    sim
}

fn phase_label(phase: ImportPhase) -> &'static str {
    match phase {
        ImportPhase::Idle => "In attesa",
        ImportPhase::Uploading => "Caricamento...",
        ImportPhase::Processing => "Analisi AI in corso",
        ImportPhase::Done => "Completato",
    }
}
