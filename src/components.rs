//! Pure Yew view components for the Random Grid UI.
//!
//! Everything here renders from props; the grid store itself is owned by the
//! root component and handed down as a reducer handle.

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::{MIN_VISIBLE_DIM, UPDATE_INTERVAL_MS};
use crate::state::{GridAction, GridState};

/// A single grid cell showing the current value. Clicking re-rolls just this
/// cell.
#[derive(Properties, PartialEq)]
pub struct CellProps {
    pub state: UseReducerHandle<GridState>,
    pub row: usize,
    pub col: usize,
}

#[function_component(Cell)]
pub fn cell(props: &CellProps) -> Html {
    let value = props.state.grid.get(props.row, props.col).unwrap_or_default();

    let onclick = {
        let state = props.state.clone();
        let row = props.row;
        let col = props.col;
        Callback::from(move |_: MouseEvent| {
            state.dispatch(GridAction::RandomizeCell { row, col });
        })
    };

    html! {
        <div class="cell" {onclick}>{ value }</div>
    }
}

/// Invisible driver that dispatches a bulk refresh on a fixed cadence while
/// mounted. Leaving the tree drops the interval, so no tick fires after
/// unmount.
#[derive(Properties, PartialEq)]
pub struct TickerProps {
    pub state: UseReducerHandle<GridState>,
}

#[function_component(Ticker)]
pub fn ticker(props: &TickerProps) -> Html {
    let state = props.state.clone();

    use_effect_with((), move |_| {
        debug!("Periodic refresh on, every {} ms", UPDATE_INTERVAL_MS);
        let interval = Interval::new(UPDATE_INTERVAL_MS, move || {
            state.dispatch(GridAction::RandomizeAll);
        });
        move || {
            debug!("Periodic refresh off");
            drop(interval);
        }
    });

    html! {}
}

/// Labeled number input for one display dimension with inline validation
/// feedback. Commits on blur and on Enter.
#[derive(Properties, PartialEq)]
pub struct DimensionFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub max: usize,
    pub text: AttrValue,
    pub error: Option<String>,
    pub oninput: Callback<InputEvent>,
    pub oncommit: Callback<()>,
    pub onkeydown: Callback<KeyboardEvent>,
}

#[function_component(DimensionField)]
pub fn dimension_field(props: &DimensionFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                type="number"
                id={props.id.clone()}
                min={MIN_VISIBLE_DIM.to_string()}
                max={props.max.to_string()}
                value={props.text.clone()}
                class={if props.error.is_some() { "invalid" } else { "" }}
                oninput={props.oninput.clone()}
                onchange={props.oncommit.reform(|_: Event| ())}
                onkeydown={props.onkeydown.clone()}
            />
            { if let Some(err) = &props.error {
                html!{ <div class="input-error">{ err }</div> }
            } else { html!{} } }
        </div>
    }
}
