use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// State and callbacks backing one validated input field.
#[derive(Clone)]
pub struct ValidatedInput<T: Clone + PartialEq + 'static> {
    /// Text as currently shown in the field.
    pub text: String,
    /// The last successfully parsed and validated value.
    pub value: T,
    /// Validation message for the last failed commit, if any.
    pub error: Option<String>,
    /// Callback for the text input's `oninput` event. Updates the text state
    /// without touching the committed value.
    pub on_text_input: Callback<InputEvent>,
    /// Callback that parses and validates the current text, typically wired
    /// to the input's `onchange` event.
    pub on_commit: Callback<()>,
    /// Keydown handler committing the field when Enter is pressed.
    pub on_keydown: Callback<KeyboardEvent>,
}

/// Hook managing the text/value/error triple for one validated field.
///
/// Raw text is stored as typed; only a successful commit moves it into
/// `value`. A failed commit keeps the previous value and exposes the
/// validation message through `error`.
#[hook]
pub fn use_validated_input<T: Clone + PartialEq + std::fmt::Display + 'static>(
    initial_value: T,
    parse_and_validate: Rc<dyn Fn(&str) -> Result<T, String>>,
) -> ValidatedInput<T> {
    let value_handle: UseStateHandle<T> = use_state(|| initial_value.clone());
    let text_handle: UseStateHandle<String> = use_state(|| initial_value.to_string());
    let error_handle: UseStateHandle<Option<String>> = use_state(|| None::<String>);

    let on_text_input = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_commit = {
        let text_handle = text_handle.clone();
        let value_setter = value_handle.clone();
        let error_setter = error_handle.clone();
        let parse_fn = parse_and_validate.clone();

        Callback::from(move |_: ()| match parse_fn(&text_handle) {
            Ok(parsed) => {
                value_setter.set(parsed.clone());
                // canonical form: "  7 " commits as "7"
                text_handle.set(parsed.to_string());
                error_setter.set(None);
            }
            Err(message) => {
                error_setter.set(Some(message));
            }
        })
    };

    let on_keydown = {
        let commit = on_commit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit.emit(());
            }
        })
    };

    // Keep the text in sync when the committed value changes from elsewhere.
    {
        let value_snapshot = (*value_handle).clone();
        let text_handle = text_handle.clone();
        use_effect_with(value_snapshot, move |current_value| {
            let formatted = current_value.to_string();
            if *text_handle != formatted {
                text_handle.set(formatted);
            }
            || ()
        });
    }

    ValidatedInput {
        text: (*text_handle).clone(),
        value: (*value_handle).clone(),
        error: (*error_handle).clone(),
        on_text_input,
        on_commit,
        on_keydown,
    }
}
