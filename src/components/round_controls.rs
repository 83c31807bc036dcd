use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RoundControlsProps {
    pub round_over: bool,
    pub on_guess: Callback<()>,
    pub on_next_round: Callback<()>,
}

#[function_component(RoundControls)]
pub fn round_controls(props: &RoundControlsProps) -> Html {
    let guess = {
        let cb = props.on_guess.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next = {
        let cb = props.on_next_round.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; gap:12px;">
        <button onclick={guess} disabled={props.round_over} style="flex:1;">{"Guess"}</button>
        <button onclick={next} style="flex:1;">{"Next Round"}</button>
    </div>}
}
