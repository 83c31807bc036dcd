use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GuessInputProps {
    pub value: String,
    /// Already filtered and capped by the caller.
    pub suggestions: Vec<String>,
    pub hide_delay_ms: u32,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(GuessInput)]
pub fn guess_input(props: &GuessInputProps) -> Html {
    let show_suggestions = use_state(|| false);

    let oninput = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let onkeydown = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                cb.emit(());
            }
        })
    };
    let onfocus = {
        let show = show_suggestions.clone();
        Callback::from(move |_: FocusEvent| show.set(true))
    };
    // Hide after a short delay so a mousedown on a suggestion still registers.
    let onblur = {
        let show = show_suggestions.clone();
        let delay = props.hide_delay_ms;
        Callback::from(move |_: FocusEvent| {
            let hide = {
                let show = show.clone();
                Closure::once_into_js(move || show.set(false))
            };
            let scheduled = web_sys::window().map(|win| {
                win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    hide.unchecked_ref(),
                    i32::try_from(delay).unwrap_or(i32::MAX),
                )
            });
            if !matches!(scheduled, Some(Ok(_))) {
                show.set(false);
            }
        })
    };

    let list = if *show_suggestions && !props.suggestions.is_empty() {
        html! {
            <ul style="position:absolute; z-index:10; background:#fff; border:1px solid #D1D5DB; width:100%; max-height:240px; overflow:auto; border-radius:4px; box-shadow:0 4px 6px rgba(0,0,0,0.1); margin:0; padding:0; list-style:none;">
                { for props.suggestions.iter().map(|name| {
                    let pick = {
                        let cb = props.on_change.clone();
                        let name = name.clone();
                        Callback::from(move |_: MouseEvent| cb.emit(name.clone()))
                    };
                    html! {
                        <li key={name.clone()} onmousedown={pick} style="padding:8px 12px; cursor:pointer;">{ name.clone() }</li>
                    }
                }) }
            </ul>
        }
    } else {
        html! {}
    };

    html! {
        <div style="position:relative;">
            <input
                type="text"
                placeholder="Enter a US city (population > 75k)"
                value={props.value.clone()}
                {oninput}
                {onkeydown}
                {onfocus}
                {onblur}
                style="width:100%; padding:8px 12px; box-sizing:border-box;"
            />
            { list }
        </div>
    }
}
