use yew::prelude::*;

use crate::model::RoundStatus;
use crate::util::guesses_left_label;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackLineProps {
    pub feedback: String,
    pub status: RoundStatus,
    pub guesses_left: u32,
}

#[function_component]
pub fn FeedbackLine(props: &FeedbackLineProps) -> Html {
    let color = match props.status {
        RoundStatus::Won => "#238636",
        RoundStatus::Lost => "#f85149",
        RoundStatus::InProgress => "inherit",
    };
    html! {
        <div style="display:flex; flex-direction:column; gap:4px;">
            <p style={format!("margin:0; color:{};", color)}>{ props.feedback.clone() }</p>
            if props.status == RoundStatus::InProgress {
                <span style="font-size:12px; opacity:0.7;">{ guesses_left_label(props.guesses_left) }</span>
            }
        </div>
    }
}
