use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::MapConfig;
use crate::error::MapError;
use crate::map::{self, MapHandle, MapOutcome};
use crate::state::CameraView;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub view: CameraView,
    /// A new round always rebuilds the map, even if it lands on the same view.
    pub round_id: u64,
    pub config: MapConfig,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container = use_node_ref();
    // None while loading.
    let outcome = use_state(|| None::<MapOutcome>);
    let handle = use_mut_ref(|| None::<MapHandle>);

    {
        let container = container.clone();
        let outcome = outcome.clone();
        let handle = handle.clone();
        let config = props.config.clone();
        use_effect_with((props.round_id, props.view), move |(round_id, view)| {
            outcome.set(None);
            handle.borrow_mut().take();

            let on_outcome = {
                let outcome = outcome.clone();
                Callback::from(move |o: MapOutcome| outcome.set(Some(o)))
            };
            let built = container
                .cast::<HtmlElement>()
                .ok_or(MapError::NoContainer)
                .and_then(|el| map::show_camera(&el, &config, *view, on_outcome));
            match built {
                Ok(h) => {
                    tracing::debug!(round_id = *round_id, zoom = view.zoom, "camera updated");
                    *handle.borrow_mut() = Some(h);
                }
                Err(e) => {
                    tracing::error!(error = %e, "map construction failed");
                    outcome.set(Some(MapOutcome::Failed(e.to_string())));
                }
            }

            move || {
                handle.borrow_mut().take();
            }
        });
    }

    let overlay_style = "position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); text-align:center;";
    let overlay = match &*outcome {
        None => html! {
            <div style={format!("{} font-size:18px; color:#666;", overlay_style)}>{"Loading map..."}</div>
        },
        Some(MapOutcome::Failed(message)) => html! {
            <div style={format!("{} font-size:14px; color:red; padding:20px;", overlay_style)}>
                { format!("Error loading map: {}", message) }
            </div>
        },
        Some(MapOutcome::Loaded) => html! {},
    };

    html! {
        <div style="position:relative;">
            <div ref={container} style="width:100%; height:400px; border-radius:12px; box-shadow:0 4px 6px rgba(0,0,0,0.1); background-color:#f0f0f0;" />
            { overlay }
        </div>
    }
}
