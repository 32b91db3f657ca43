//! Main module for the Random Grid application using Yew.
//! Wires UI components, state hooks, and the periodic refresh driver.

use log::debug;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod state;
mod utils;

use components::{Cell, DimensionField, Ticker};
use config::*;
use hooks::use_validated_input;
use state::{GridAction, GridState};
use utils::{validate_cols, validate_rows};

// ──────────────────────────────────────────────────────────────────────────────

/// Control strip plus the visible window of the grid.
#[derive(Properties, PartialEq)]
struct GridViewProps {
    state: UseReducerHandle<GridState>,
}

#[function_component(GridView)]
fn grid_view(props: &GridViewProps) -> Html {
    let keep_updated = use_state(|| false);
    let rows_input = use_validated_input(DEFAULT_VISIBLE_ROWS, Rc::new(validate_rows));
    let cols_input = use_validated_input(DEFAULT_VISIBLE_COLS, Rc::new(validate_cols));

    let randomize_all = {
        let state = props.state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GridAction::RandomizeAll))
    };

    let toggle_keep_updated = {
        let keep_updated = keep_updated.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            debug!("Keep updated toggled to {}", input.checked());
            keep_updated.set(input.checked());
        })
    };

    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    // Committed values are already range-checked; visible_window re-clamps
    // them against the actual grid shape.
    let (visible_rows, visible_cols) = props
        .state
        .grid
        .visible_window(rows_input.value, cols_input.value);

    html! {
        <>
            <button type="button" class="btn-primary" onclick={randomize_all}>
                { "Update Grid Data" }
            </button>
            <form onsubmit={on_submit}>
                <div class="form-group checkbox-group">
                    <label for="keep_updated_checkbox">{ "Keep Grid Data updated" }</label>
                    <input
                        type="checkbox"
                        id="keep_updated_checkbox"
                        checked={*keep_updated}
                        onchange={toggle_keep_updated}
                    />
                </div>
                <DimensionField
                    id="rows_display_input"
                    label="Rows to display"
                    max={MAX_VISIBLE_ROWS}
                    text={rows_input.text.clone()}
                    error={rows_input.error.clone()}
                    oninput={rows_input.on_text_input.clone()}
                    oncommit={rows_input.on_commit.clone()}
                    onkeydown={rows_input.on_keydown.clone()}
                />
                <DimensionField
                    id="cols_display_input"
                    label="Cols to display"
                    max={MAX_VISIBLE_COLS}
                    text={cols_input.text.clone()}
                    error={cols_input.error.clone()}
                    oninput={cols_input.on_text_input.clone()}
                    oncommit={cols_input.on_commit.clone()}
                    onkeydown={cols_input.on_keydown.clone()}
                />
            </form>
            if *keep_updated {
                <Ticker state={props.state.clone()} />
            }
            <div class="grid-viewport">
                { (0..visible_rows).map(|row| html! {
                    <div class="grid-row" key={row}>
                        { (0..visible_cols).map(|col| html! {
                            <Cell key={col} state={props.state.clone()} row={row} col={col} />
                        }).collect::<Html>() }
                    </div>
                }).collect::<Html>() }
            </div>
        </>
    }
}

/// App wrapper owning the grid store; children get the handle through props.
#[function_component]
pub fn App() -> Html {
    let state = use_reducer(GridState::new);

    html! {
        <div class="grid-app">
            <h1>{ "Random Grid" }</h1>
            <GridView {state} />
        </div>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
