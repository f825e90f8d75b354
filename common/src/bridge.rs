//! ネイティブシェルとの連携
//!
//! ガイドはデスクトップアプリに埋め込まれて表示される。シェルが
//! ブリッジを注入していればウィンドウを閉じる要求を送れる。
//! 通常のブラウザで開いた場合はブリッジがなく、警告を出すだけにする。

/// ホスト側が提供する操作
pub trait HostBridge {
    fn close_window(&self);
}

/// 閉じる要求の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Requested,
    Unavailable,
}

/// 起動時に解決したブリッジ（なくてもよい）
#[derive(Default)]
pub struct HostIntegration {
    bridge: Option<Box<dyn HostBridge>>,
}

impl HostIntegration {
    pub fn new(bridge: Option<Box<dyn HostBridge>>) -> Self {
        Self { bridge }
    }

    /// ブリッジなし（単体表示・開発時）
    pub fn standalone() -> Self {
        Self { bridge: None }
    }

    pub fn is_available(&self) -> bool {
        self.bridge.is_some()
    }

    /// 差し替え（ブリッジの解決が非同期の場合）
    pub fn attach(&mut self, bridge: Box<dyn HostBridge>) {
        self.bridge = Some(bridge);
    }

    pub fn request_close(&self) -> CloseOutcome {
        match &self.bridge {
            Some(bridge) => {
                bridge.close_window();
                CloseOutcome::Requested
            }
            None => {
                log::warn!("host bridge not available, close request ignored");
                CloseOutcome::Unavailable
            }
        }
    }
}

impl std::fmt::Debug for HostIntegration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostIntegration")
            .field("available", &self.is_available())
            .finish()
    }
}
