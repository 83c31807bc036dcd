use std::rc::Rc;

use tracing::level_filters::LevelFilter;
use yew::prelude::*;

use super::{game_view::GameView, startup_error::StartupError};
use crate::config::GameConfig;
use crate::error::AppError;
use crate::logging;
use crate::state::CityDirectory;

/// Everything a game session reads but never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub config: Rc<GameConfig>,
    pub directory: Rc<CityDirectory>,
}

fn boot() -> Result<Session, AppError> {
    // Logging must be up before a bad config can be reported.
    let config = GameConfig::load().inspect_err(|_| logging::init(LevelFilter::INFO))?;
    logging::init(config.level_filter()?);
    let directory = CityDirectory::builtin()?;
    tracing::info!(cities = directory.len(), "city directory loaded");
    Ok(Session {
        config: Rc::new(config),
        directory: Rc::new(directory),
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |_| {
        boot().map_err(|e| {
            tracing::error!(error = %e, "startup failed");
            e.to_string()
        })
    });

    match &*session {
        Ok(session) => html! { <GameView session={session.clone()} /> },
        Err(message) => html! { <StartupError message={message.clone()} /> },
    }
}
