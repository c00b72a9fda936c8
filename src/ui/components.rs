/// Reusable UI pieces for the popup

use patternfly_yew::prelude::*;
use yew::prelude::*;

use crate::error::FetchError;
use crate::selection::{preview, SelectionState};

#[derive(Properties, PartialEq)]
pub struct FetchErrorPanelProps {
    pub error: FetchError,
}

#[function_component(FetchErrorPanel)]
pub fn fetch_error_panel(props: &FetchErrorPanelProps) -> Html {
    html! {
        <div class="message-top-margin">
            <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                <p class="message-paragraph">{props.error.to_string()}</p>
                if let Some(hint) = props.error.hint() {
                    <p class="error-hint">{hint}</p>
                }
            </Alert>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectionPanelProps {
    pub text: String,
    pub copied: bool,
    pub on_copy: Callback<MouseEvent>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(SelectionPanel)]
pub fn selection_panel(props: &SelectionPanelProps) -> Html {
    let empty = props.text.is_empty();

    html! {
        <div class="section">
            <div class="section-header">
                <h2 class="section-title">{"Current Selection"}</h2>
                <div class="button-row">
                    <Button onclick={props.on_copy.clone()} disabled={empty} variant={ButtonVariant::Secondary}>
                        {if props.copied { "Copied!" } else { "Copy" }}
                    </Button>
                    <Button onclick={props.on_clear.clone()} disabled={empty} variant={ButtonVariant::Danger}>
                        {"Clear"}
                    </Button>
                </div>
            </div>

            <div class="selection-box">
                if empty {
                    <p class="placeholder-text">
                        {"Select text on any webpage, then click the extension icon to capture it."}
                    </p>
                } else {
                    <p class="selection-text">{&props.text}</p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryListProps {
    pub selection: SelectionState,
    /// Receives the history index of the clicked entry
    pub on_select: Callback<usize>,
    pub on_clear: Callback<MouseEvent>,
}

#[function_component(HistoryList)]
pub fn history_list(props: &HistoryListProps) -> Html {
    html! {
        <div class="section">
            <div class="section-header">
                <h2 class="section-title">{"Selection History"}</h2>
                <Button onclick={props.on_clear.clone()} variant={ButtonVariant::Danger}>
                    {"Clear"}
                </Button>
            </div>

            if props.selection.history.is_empty() {
                <p class="placeholder-text">{"No history yet"}</p>
            } else {
                <ul class="history-list">
                    {for props.selection.history_newest_first().map(|(index, text)| {
                        let on_select = props.on_select.clone();
                        html! {
                            <li
                                key={index}
                                class="history-item"
                                title={text.clone()}
                                onclick={Callback::from(move |_: MouseEvent| on_select.emit(index))}
                            >
                                {preview(text)}
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
