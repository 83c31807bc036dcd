use yew::prelude::*;

use crate::util::format_population;

#[derive(Properties, PartialEq, Clone)]
pub struct CityInfoProps {
    /// Target population, when the dataset knows it.
    pub population: Option<u64>,
}

#[function_component]
pub fn CityInfo(props: &CityInfoProps) -> Html {
    html! {
        <>
            <h1 style="font-size:24px; font-weight:bold; margin:0;">{"🌆 CityScope"}</h1>
            <p style="color:#4B5563; margin:0;">{"Can you name the city from just the map?"}</p>
            if let Some(pop) = props.population {
                <p style="font-size:14px; color:#6B7280; margin:0;">{ format!("Population: {}", format_population(pop)) }</p>
            }
        </>
    }
}
