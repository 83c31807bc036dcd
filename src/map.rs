//! Mapbox GL JS bridge.
//!
//! `mapboxgl` is loaded by the host page as a plain script. Each camera update
//! builds a fresh map and reports one [`MapOutcome`]; dropping the returned
//! [`MapHandle`] tears the map and its listeners down.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;
use yew::Callback;

use crate::config::MapConfig;
use crate::error::MapError;
use crate::state::{CameraView, Coords};

const FALLBACK_ERROR: &str = "Failed to load map";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    #[derive(Debug, Clone)]
    type MapboxMap;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &MapboxMap, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn remove(this: &MapboxMap);
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapOutcome {
    Loaded,
    Failed(String),
}

/// Lets only the first outcome of a camera update through.
#[derive(Debug, Clone, Default)]
struct OutcomeLatch(Rc<Cell<bool>>);

impl OutcomeLatch {
    fn settle(&self, outcome: MapOutcome) -> Option<MapOutcome> {
        if self.0.replace(true) { None } else { Some(outcome) }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions<'a> {
    access_token: &'a str,
    style: &'a str,
    center: Coords,
    zoom: f64,
    interactive: bool,
}

/// Keeps a live map alive. Removing the map on drop also detaches its listeners.
#[derive(Debug)]
pub struct MapHandle {
    map: MapboxMap,
    _on_load: Closure<dyn FnMut(JsValue)>,
    _on_error: Closure<dyn FnMut(JsValue)>,
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.map.remove();
    }
}

/// Builds a map in `container` pointed at `view`.
///
/// Synchronous construction failures come back as `Err`. After that exactly one
/// of [`MapOutcome::Loaded`] or [`MapOutcome::Failed`] is emitted on `on_outcome`.
pub fn show_camera(
    container: &HtmlElement,
    config: &MapConfig,
    view: CameraView,
    on_outcome: Callback<MapOutcome>,
) -> Result<MapHandle, MapError> {
    let options = map_options(container, config, view)?;
    let map = MapboxMap::new(&options).map_err(|e| MapError::Construct(js_error_message(&e)))?;

    let latch = OutcomeLatch::default();
    let on_load = {
        let latch = latch.clone();
        let cb = on_outcome.clone();
        Closure::wrap(Box::new(move |_e: JsValue| {
            if let Some(outcome) = latch.settle(MapOutcome::Loaded) {
                tracing::info!("map loaded");
                cb.emit(outcome);
            }
        }) as Box<dyn FnMut(JsValue)>)
    };
    let on_error = {
        let cb = on_outcome;
        Closure::wrap(Box::new(move |e: JsValue| {
            let message = event_error_message(&e);
            tracing::error!(%message, "map error");
            if let Some(outcome) = latch.settle(MapOutcome::Failed(message)) {
                cb.emit(outcome);
            }
        }) as Box<dyn FnMut(JsValue)>)
    };
    map.on("load", on_load.as_ref().unchecked_ref());
    map.on("error", on_error.as_ref().unchecked_ref());

    Ok(MapHandle {
        map,
        _on_load: on_load,
        _on_error: on_error,
    })
}

fn map_options(container: &HtmlElement, config: &MapConfig, view: CameraView) -> Result<JsValue, MapError> {
    let options = MapOptions {
        access_token: &config.access_token,
        style: &config.style_url,
        center: view.center,
        zoom: view.zoom,
        interactive: config.interactive,
    };
    let json = serde_json::to_string(&options).map_err(|e| MapError::Construct(e.to_string()))?;
    let value = js_sys::JSON::parse(&json).map_err(|e| MapError::Construct(js_error_message(&e)))?;
    js_sys::Reflect::set(&value, &JsValue::from_str("container"), container)
        .map_err(|e| MapError::Construct(js_error_message(&e)))?;
    Ok(value)
}

// Mapbox error events carry `{ error: Error }`.
fn event_error_message(event: &JsValue) -> String {
    js_sys::Reflect::get(event, &JsValue::from_str("error"))
        .ok()
        .filter(|err| !err.is_undefined() && !err.is_null())
        .map(|err| js_error_message(&err))
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}

fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string())
}
