use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartupErrorProps {
    pub message: String,
}

#[function_component]
pub fn StartupError(props: &StartupErrorProps) -> Html {
    html! {
        <div style="max-width:560px; margin:64px auto; padding:24px 32px; border:2px solid #f85149; border-radius:12px; text-align:center;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"CityScope can't start"}</h2>
            <p style="margin:4px 0; font-family:monospace; font-size:13px;">{ props.message.clone() }</p>
        </div>
    }
}
