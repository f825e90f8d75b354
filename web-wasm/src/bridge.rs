//! Qt WebChannel ブリッジ
//!
//! デスクトップアプリのQWebEngineViewに埋め込まれている場合、
//! `window.qt.webChannelTransport` と `QWebChannel` が注入される。
//! チャネル接続は非同期なので、解決したら`HostIntegration`に差し込む。

use intelleo_guide_common::{CloseOutcome, HostBridge, HostIntegration};
use js_sys::{Array, Function, Reflect};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// シェルの公開オブジェクト名
const BRIDGE_OBJECT: &str = "bridge";

pub type HostHandle = StoredValue<HostIntegration, LocalStorage>;

/// `channel.objects.bridge` を包む
struct QtBridge {
    object: JsValue,
}

impl HostBridge for QtBridge {
    fn close_window(&self) {
        let method = Reflect::get(&self.object, &JsValue::from_str("closeWindow"))
            .ok()
            .and_then(|m| m.dyn_into::<Function>().ok());
        match method {
            Some(f) => {
                if let Err(e) = f.call0(&self.object) {
                    gloo::console::error!(format!("closeWindow failed: {:?}", e));
                }
            }
            None => gloo::console::warn!("bridge.closeWindow is not a function"),
        }
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// ブリッジ接続を開始してハンドルを返す。注入がなければ単体表示のまま
pub fn connect_host() -> HostHandle {
    let handle = StoredValue::new_local(HostIntegration::standalone());

    let window: JsValue = gloo::utils::window().into();
    let transport = get(&window, "qt").and_then(|qt| get(&qt, "webChannelTransport"));
    let constructor = get(&window, "QWebChannel").and_then(|c| c.dyn_into::<Function>().ok());

    let (Some(transport), Some(constructor)) = (transport, constructor) else {
        gloo::console::log!("running standalone, no Qt WebChannel");
        return handle;
    };

    let on_ready = Closure::once_into_js(move |channel: JsValue| {
        let object = get(&channel, "objects").and_then(|o| get(&o, BRIDGE_OBJECT));
        match object {
            Some(object) => {
                handle.try_update_value(|host| host.attach(Box::new(QtBridge { object })));
            }
            None => gloo::console::warn!("Qt WebChannel has no bridge object"),
        }
    });

    let args = Array::of2(&transport, &on_ready);
    if let Err(e) = Reflect::construct(&constructor, &args) {
        gloo::console::error!(format!("QWebChannel init failed: {:?}", e));
    }
    handle
}

/// 閉じるボタン
pub fn request_close(handle: HostHandle) {
    let outcome = handle
        .try_with_value(|host| host.request_close())
        .unwrap_or(CloseOutcome::Unavailable);
    if outcome == CloseOutcome::Unavailable {
        gloo::console::warn!("Qt WebChannel bridge not available");
    }
}
