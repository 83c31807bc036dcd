use std::num::NonZeroU64;

use yew::prelude::*;

use super::app::Session;
use super::{
    city_info::CityInfo, feedback_line::FeedbackLine, guess_input::GuessInput, map_view::MapView,
    round_controls::RoundControls,
};
use crate::model::{Round, RoundAction};
use crate::state::RandomHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub session: Session,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let config = props.session.config.clone();
    let round = {
        let directory = props.session.directory.clone();
        let rules = config.rules();
        use_reducer(move || Round::start(directory, rules, RandomHandle::browser()))
    };
    let guess = use_state(String::new);

    let suggestions: Vec<String> = round
        .directory
        .suggest(&guess)
        .take(config.suggestion_limit)
        .map(str::to_string)
        .collect();

    let on_change = {
        let guess = guess.clone();
        Callback::from(move |text: String| guess.set(text))
    };
    let on_guess = {
        let round = round.clone();
        let guess = guess.clone();
        Callback::from(move |_| round.dispatch(RoundAction::Guess((*guess).clone())))
    };
    let on_next_round = {
        let round = round.clone();
        let guess = guess.clone();
        Callback::from(move |_| {
            guess.set(String::new());
            round.dispatch(RoundAction::NextRound);
        })
    };

    html! {
        <div style="padding:16px; display:flex; flex-direction:column; gap:16px; max-width:800px; margin:0 auto;">
            <CityInfo population={round.target.population.map(NonZeroU64::get)} />
            <MapView view={round.camera()} round_id={round.round_id} config={config.map.clone()} />
            <GuessInput
                value={(*guess).clone()}
                {suggestions}
                hide_delay_ms={config.suggestion_hide_delay_ms}
                {on_change}
                on_submit={on_guess.clone()}
            />
            <RoundControls round_over={round.status.is_over()} {on_guess} {on_next_round} />
            <FeedbackLine feedback={round.feedback.clone()} status={round.status} guesses_left={round.guesses_left()} />
        </div>
    }
}
