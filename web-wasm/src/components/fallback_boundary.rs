//! 描画エラーの受け皿
//!
//! 子が `Err` を描画すると ErrorBoundary がフォールバックに切り替える。
//! 検索ページの「Throw Error」は `FaultTrigger` 経由で同じ経路に乗る。
//! 「Retry, Please」でエラーを消し、子を作り直す（マウント時の検索もやり直し）。

use leptos::prelude::*;

/// 検索ページから意図的に起こすエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Error thrown from the search page")]
pub struct ThrownError;

/// 子孫がエラーを起こすためのハンドル
#[derive(Debug, Clone, Copy)]
pub struct FaultTrigger(RwSignal<bool>);

impl FaultTrigger {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn raise(&self) {
        gloo::console::error!("描画エラーを発生させました");
        self.0.set(true);
    }

    pub fn reset(&self) {
        self.0.set(false);
    }

    /// 描画に使う結果（発生中は Err）
    pub fn check(&self) -> Result<(), ThrownError> {
        if self.0.get() {
            Err(ThrownError)
        } else {
            Ok(())
        }
    }
}

#[component]
pub fn FallbackBoundary(children: ChildrenFn) -> impl IntoView {
    let fault = FaultTrigger::new();
    provide_context(fault);

    // 増やすと子を作り直す
    let generation = RwSignal::new(0u32);

    view! {
        <ErrorBoundary fallback=move |errors| {
            let messages = errors.clone();
            let retry = move |_| {
                errors.update(|errs| *errs = Default::default());
                fault.reset();
                generation.update(|g| *g += 1);
            };
            view! {
                <div class="fallback">
                    <h2>"Oops! Something went wrong."</h2>
                    <ul class="fallback-errors">
                        {move || messages
                            .get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()}
                    </ul>
                    <button on:click=retry>"Retry, Please"</button>
                </div>
            }
        }>
            {move || {
                generation.track();
                children()
            }}
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// タイマー1回分待つ（エフェクトの反映待ち）
    async fn next_tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10);
            }
        });
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    fn body_html() -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|b| b.inner_html())
            .unwrap_or_default()
    }

    #[component]
    fn Broken() -> impl IntoView {
        view! { <p>{Err::<String, _>(ThrownError)}</p> }
    }

    #[wasm_bindgen_test]
    fn test_fault_trigger_switches_result() {
        let fault = FaultTrigger::new();
        assert_eq!(fault.check(), Ok(()));
        fault.raise();
        assert_eq!(fault.check(), Err(ThrownError));
        fault.reset();
        assert_eq!(fault.check(), Ok(()));
    }

    #[wasm_bindgen_test]
    async fn test_child_render_error_shows_fallback() {
        let handle = leptos::mount::mount_to_body(|| {
            view! {
                <FallbackBoundary>
                    <Broken />
                </FallbackBoundary>
            }
        });
        next_tick().await;

        let html = body_html();
        assert!(html.contains("Oops! Something went wrong."), "{}", html);
        assert!(html.contains("Retry, Please"));
        drop(handle);
    }

    #[wasm_bindgen_test]
    fn test_thrown_error_message() {
        assert_eq!(ThrownError.to_string(), "Error thrown from the search page");
    }
}
