//! 履歴APIによるルーティング
//!
//! パスとクエリ（RouteParams）をシグナルで持ち、
//! pushState / popstate でブラウザの履歴と同期する。

use leptos::prelude::*;
use nasa_gallery_common::RouteParams;
use wasm_bindgen::prelude::*;

/// 表示する画面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Search,
    /// `/?id=...&frontpage=...` の単独詳細
    Detail(String),
    Forms,
    ControlledForm,
    UncontrolledForm,
    NotFound,
}

impl AppRoute {
    pub fn resolve(path: &str, params: &RouteParams) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/index.html" => match &params.id {
                Some(id) => AppRoute::Detail(id.clone()),
                None => AppRoute::Search,
            },
            "/forms" => AppRoute::Forms,
            "/forms/controlled" => AppRoute::ControlledForm,
            "/forms/uncontrolled" => AppRoute::UncontrolledForm,
            _ => AppRoute::NotFound,
        }
    }
}

/// 現在の (pathname, search)
fn current_location() -> (String, String) {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return ("/".into(), String::new());
    };
    (
        location.pathname().unwrap_or_else(|_| "/".into()),
        location.search().unwrap_or_default(),
    )
}

/// location.search をブラウザのデコード規則で読む
pub fn params_from_search(search: &str) -> RouteParams {
    match web_sys::UrlSearchParams::new_with_str(search) {
        Ok(query) => RouteParams::from_lookup(|key| query.get(key)),
        Err(_) => RouteParams::parse(search),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Router {
    path: RwSignal<String>,
    params: RwSignal<RouteParams>,
}

impl Router {
    pub fn new() -> Self {
        let (path, search) = current_location();
        Self {
            path: RwSignal::new(path),
            params: RwSignal::new(params_from_search(&search)),
        }
    }

    pub fn route(&self) -> AppRoute {
        let params = self.params.get();
        self.path.with(|path| AppRoute::resolve(path, &params))
    }

    pub fn params(&self) -> RouteParams {
        self.params.get()
    }

    pub fn params_untracked(&self) -> RouteParams {
        self.params.get_untracked()
    }

    /// URLを履歴に積んで遷移
    pub fn navigate(&self, url: &str) {
        let pushed = web_sys::window()
            .ok_or_else(|| JsValue::from_str("window is not available"))
            .and_then(|w| w.history())
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(url)));
        if let Err(e) = pushed {
            gloo::console::warn!(format!("履歴を更新できませんでした: {:?}", e));
        }
        self.sync();
    }

    /// 現在のパスのままクエリだけ差し替える
    pub fn push_params(&self, params: &RouteParams) {
        let path = self.path.get_untracked();
        self.navigate(&format!("{}{}", path, params.to_query()));
    }

    /// window.location からシグナルを更新
    pub fn sync(&self) {
        let (path, search) = current_location();
        self.path.set(path);
        self.params.set(params_from_search(&search));
    }

    /// 戻る/進むで同期する
    pub fn listen_popstate(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let router = *self;
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            router.sync();
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
        {
            gloo::console::warn!(format!("popstateを登録できませんでした: {:?}", e));
        }
        closure.forget();
    }
}
