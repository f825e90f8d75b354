//! インポートシミュレータ
//!
//! アップロード → AI解析 → 完了 の流れを模した状態機械。
//! 進捗のしきい値とログ行の対応はデータ（ImportScript）として持ち、
//! イベントを1つずつ受け取るreducerで状態を進める。
//!
//! タイマーそのものは持たない。reducerが返すTimerCommandに従って
//! 呼び出し側（Webはgloo、CLIはtokio）がタイマーを張る/外す。

use crate::types::{LogEntry, LogKind};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 進捗の上限
pub const PROGRESS_MAX: u8 = 100;

/// シミュレーションの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportPhase {
    #[default]
    Idle,
    Uploading,
    Processing,
    Done,
}

impl ImportPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportPhase::Idle => "idle",
            ImportPhase::Uploading => "uploading",
            ImportPhase::Processing => "processing",
            ImportPhase::Done => "done",
        }
    }

    /// 進捗表示中か
    pub fn is_running(&self) -> bool {
        matches!(self, ImportPhase::Uploading | ImportPhase::Processing)
    }
}

/// 進捗がしきい値に達したときに出すログ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub threshold: u8,
    pub message: String,
    pub kind: LogKind,
}

impl ScriptedEvent {
    pub fn new(threshold: u8, message: &str, kind: LogKind) -> Self {
        Self {
            threshold,
            message: message.into(),
            kind,
        }
    }
}

/// シミュレーションの台本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportScript {
    /// アップロード完了までの待ち時間（ミリ秒）
    pub upload_delay_ms: u64,
    /// 進捗タイマーの間隔（ミリ秒）
    pub tick_interval_ms: u64,
    /// 1tickあたりの進捗
    pub step: u8,
    pub start_message: String,
    pub done_message: String,
    pub events: Vec<ScriptedEvent>,
}

impl Default for ImportScript {
    fn default() -> Self {
        Self {
            upload_delay_ms: 800,
            tick_interval_ms: 150,
            step: 5,
            start_message: "Caricamento completato. Avvio analisi AI...".into(),
            done_message: "Operazione completata con successo.".into(),
            events: vec![
                ScriptedEvent::new(20, "Analisi: doc_scan_001.pdf -> ROSSI MARIO (PLE)", LogKind::Success),
                ScriptedEvent::new(45, "Analisi: doc_scan_002.pdf -> BIANCHI LUCA (ANTINCENDIO)", LogKind::Success),
                ScriptedEvent::new(70, "Analisi: doc_unknown.pdf -> Dati incompleti (Orfano)", LogKind::Warning),
                ScriptedEvent::new(90, "Spostamento file e rinomina in corso...", LogKind::Info),
            ],
        }
    }
}

impl ImportScript {
    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// 0だと終わらないので最低1
    pub fn effective_step(&self) -> u8 {
        self.step.max(1)
    }

    /// 全タイミングを係数で伸縮した台本
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| -> u64 {
            if factor.is_finite() && factor > 0.0 {
                (ms as f64 / factor).round() as u64
            } else {
                ms
            }
        };
        Self {
            upload_delay_ms: scale(self.upload_delay_ms),
            tick_interval_ms: scale(self.tick_interval_ms).max(1),
            ..self.clone()
        }
    }
}

/// reducerに渡すイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Start,
    UploadFinished,
    Tick,
    Reset,
}

/// 呼び出し側へのタイマー指示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// 何もしない
    Keep,
    /// 一度だけのアップロード待ちタイマーを張る
    ScheduleUpload(Duration),
    /// 繰り返しの進捗タイマーを張る
    StartTicking(Duration),
    /// 進捗タイマーを止める
    StopTicking,
    /// 保留中のタイマーをすべて破棄する
    CancelAll,
}

/// インポートシミュレータの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSimulation {
    script: ImportScript,
    phase: ImportPhase,
    progress: u8,
    log: Vec<LogEntry>,
    next_log_id: u64,
}

impl ImportSimulation {
    pub fn new(script: ImportScript) -> Self {
        Self {
            script,
            phase: ImportPhase::Idle,
            progress: 0,
            log: Vec::new(),
            next_log_id: 0,
        }
    }

    pub fn phase(&self) -> ImportPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn script(&self) -> &ImportScript {
        &self.script
    }

    /// イベントを1つ処理する
    pub fn dispatch(&mut self, event: SimEvent) -> TimerCommand {
        match event {
            SimEvent::Start => self.start(),
            SimEvent::UploadFinished => self.upload_finished(),
            SimEvent::Tick => self.tick(),
            SimEvent::Reset => self.reset(),
        }
    }

    /// idleからのみ開始できる
    pub fn start(&mut self) -> TimerCommand {
        if self.phase != ImportPhase::Idle {
            log::debug!("start ignored in phase {}", self.phase.as_str());
            return TimerCommand::Keep;
        }
        self.log.clear();
        self.progress = 0;
        self.phase = ImportPhase::Uploading;
        TimerCommand::ScheduleUpload(self.script.upload_delay())
    }

    /// アップロード待ちタイマーの満了
    pub fn upload_finished(&mut self) -> TimerCommand {
        if self.phase != ImportPhase::Uploading {
            return TimerCommand::Keep;
        }
        self.phase = ImportPhase::Processing;
        let message = self.script.start_message.clone();
        self.push_log(message, LogKind::Info);
        TimerCommand::StartTicking(self.script.tick_interval())
    }

    /// 進捗タイマーの1回分
    pub fn tick(&mut self) -> TimerCommand {
        if self.phase != ImportPhase::Processing {
            return TimerCommand::Keep;
        }

        let previous = self.progress;
        let current = previous
            .saturating_add(self.script.effective_step())
            .min(PROGRESS_MAX);
        self.progress = current;

        // 今回のtickで跨いだしきい値のログをすべて出す
        let reached: Vec<(String, LogKind)> = self
            .script
            .events
            .iter()
            .filter(|e| previous < e.threshold && e.threshold <= current)
            .map(|e| (e.message.clone(), e.kind))
            .collect();
        for (message, kind) in reached {
            self.push_log(message, kind);
        }

        if current >= PROGRESS_MAX {
            self.phase = ImportPhase::Done;
            let message = self.script.done_message.clone();
            self.push_log(message, LogKind::Done);
            return TimerCommand::StopTicking;
        }
        TimerCommand::Keep
    }

    /// どの段階からでもidleに戻す
    pub fn reset(&mut self) -> TimerCommand {
        self.phase = ImportPhase::Idle;
        self.progress = 0;
        self.log.clear();
        TimerCommand::CancelAll
    }

    /// 残り時間の見積もり
    pub fn estimated_remaining(&self) -> Duration {
        let step = self.script.effective_step() as u64;
        let ticks_left = |progress: u8| -> u64 {
            let left = (PROGRESS_MAX - progress.min(PROGRESS_MAX)) as u64;
            left.div_ceil(step)
        };
        match self.phase {
            ImportPhase::Idle | ImportPhase::Uploading => {
                self.script.upload_delay() + self.script.tick_interval() * ticks_left(0) as u32
            }
            ImportPhase::Processing => self.script.tick_interval() * ticks_left(self.progress) as u32,
            ImportPhase::Done => Duration::ZERO,
        }
    }

    fn push_log(&mut self, message: String, kind: LogKind) {
        self.log.push(LogEntry {
            id: self.next_log_id,
            message,
            kind,
        });
        self.next_log_id += 1;
    }
}

impl Default for ImportSimulation {
    fn default() -> Self {
        Self::new(ImportScript::default())
    }
}
