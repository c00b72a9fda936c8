/// Popup UI for the Text Selector extension

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard::{copy_selection, CopyOutcome};
use crate::config::{version_label, APP_NAME, COPIED_FEEDBACK_MS};
use crate::error::FetchError;
use crate::fetcher::fetch_selection;
use crate::host::ChromeHost;
use crate::selection::{SelectionState, TextAction};
use crate::ui::components::{FetchErrorPanel, HistoryList, SelectionPanel};

#[derive(Clone, PartialEq)]
enum PopupStatus {
    Loading,
    Ready,
    Failed(FetchError),
}

#[function_component(App)]
pub fn app() -> Html {
    let selection = use_reducer(SelectionState::new);
    let status = use_state(|| PopupStatus::Loading);
    let copied = use_state(|| false);
    let show_history = use_state(|| false);

    // Read the page selection once per popup activation
    {
        let dispatcher = selection.dispatcher();
        let status = status.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_selection(&ChromeHost).await {
                    Ok(outcome) => {
                        if let Some(action) = outcome.into_action() {
                            dispatcher.dispatch(action);
                        }
                        status.set(PopupStatus::Ready);
                    }
                    Err(e) => {
                        if let Some(detail) = e.detail() {
                            log::debug!("Fetch failed: {}", detail);
                        }
                        status.set(PopupStatus::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    let on_toggle_history = {
        let show_history = show_history.clone();
        Callback::from(move |_| show_history.set(!*show_history))
    };

    let on_copy = {
        let selection = selection.clone();
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let text = selection.selected_text.clone();
            let copied = copied.clone();
            spawn_local(async move {
                match copy_selection(&ChromeHost, &text).await {
                    Ok(CopyOutcome::Copied) => {
                        copied.set(true);
                        let copied = copied.clone();
                        run_after(COPIED_FEEDBACK_MS, move || copied.set(false));
                    }
                    Ok(CopyOutcome::Skipped) => {}
                    Err(e) => log::warn!("{}", e),
                }
            });
        })
    };

    let on_clear = {
        let dispatcher = selection.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TextAction::ClearSelectedText))
    };

    let on_clear_history = {
        let dispatcher = selection.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TextAction::ClearHistory))
    };

    let on_select_history = {
        let dispatcher = selection.dispatcher();
        let show_history = show_history.clone();
        Callback::from(move |index: usize| {
            dispatcher.dispatch(TextAction::RecallHistory(index));
            show_history.set(false);
        })
    };

    html! {
        <div class="padding-20">
            <header class="popup-header">
                <h1 class="popup-title">{APP_NAME}</h1>
                <Button onclick={on_toggle_history} variant={ButtonVariant::Secondary}>
                    {if *show_history { "Hide History" } else { "Show History" }}
                </Button>
            </header>

            {match &*status {
                PopupStatus::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                PopupStatus::Failed(error) => html! {
                    <FetchErrorPanel error={error.clone()} />
                },
                PopupStatus::Ready if *show_history => html! {
                    <HistoryList
                        selection={(*selection).clone()}
                        on_select={on_select_history}
                        on_clear={on_clear_history}
                    />
                },
                PopupStatus::Ready => html! {
                    <SelectionPanel
                        text={selection.selected_text.clone()}
                        copied={*copied}
                        on_copy={on_copy}
                        on_clear={on_clear}
                    />
                },
            }}

            <p class="footer-popup">
                {format!("{} | Select text on any webpage", version_label())}
            </p>
        </div>
    }
}

// Helper functions

/// Run `f` once after `ms` milliseconds on the browser event loop
fn run_after(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available for timer");
        return;
    };

    let callback: js_sys::Function = Closure::once_into_js(f).unchecked_into();
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&callback, ms) {
        log::warn!("Failed to set timer: {:?}", e);
    }
}
