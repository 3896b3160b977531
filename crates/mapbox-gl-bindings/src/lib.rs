//! Mapbox GL Bindings
//!
//! Minimal `wasm-bindgen` surface over the global `mapboxgl` object that
//! index.html loads: a map with navigation controls, markers and popups.
//! `MapHandle` owns one map instance and removes it from the page on drop.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Map;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl, js_class = "Map")]
    pub fn new(options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &Map, control: &NavigationControl, position: &str);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "NavigationControl")]
    pub fn new() -> NavigationControl;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Marker;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl, js_class = "Marker")]
    pub fn new(options: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Marker, lng_lat: &js_sys::Array) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setPopup)]
    pub fn set_popup(this: &Marker, popup: &Popup) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, catch, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Popup;

    #[wasm_bindgen(catch, constructor, js_namespace = mapboxgl, js_class = "Popup")]
    pub fn new(options: &JsValue) -> Result<Popup, JsValue>;

    #[wasm_bindgen(method, catch, js_name = setHTML)]
    pub fn set_html(this: &Popup, html: &str) -> Result<Popup, JsValue>;
}

/// Error raised by the JS side, flattened to its message
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("mapbox-gl: {0}")]
pub struct JsError(pub String);

impl From<JsValue> for JsError {
    fn from(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        JsError(message)
    }
}

impl From<serde_wasm_bindgen::Error> for JsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        JsError(err.to_string())
    }
}

/// Map construction parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig<'a> {
    pub style: &'a str,
    /// [lng, lat]
    pub center: [f64; 2],
    pub zoom: f64,
    pub access_token: Option<&'a str>,
}

/// Marker appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle<'a> {
    pub color: &'a str,
    pub popup_offset: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapInit<'a> {
    style: &'a str,
    center: [f64; 2],
    zoom: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Serialize)]
struct MarkerInit<'a> {
    color: &'a str,
}

#[derive(Serialize)]
struct PopupInit {
    offset: f64,
}

/// Owned map instance, removed from the page when dropped
pub struct MapHandle {
    map: Map,
}

impl MapHandle {
    /// Build a map inside `container` and attach zoom/rotate controls (top-right)
    pub fn mount(container: &web_sys::HtmlElement, config: &MapConfig<'_>) -> Result<Self, JsError> {
        let options = serde_wasm_bindgen::to_value(&MapInit {
            style: config.style,
            center: config.center,
            zoom: config.zoom,
            access_token: config.access_token,
        })?;
        js_sys::Reflect::set(&options, &JsValue::from_str("container"), container)?;

        let map = Map::new(&options)?;
        map.add_control(&NavigationControl::new(), "top-right");
        Ok(Self { map })
    }

    /// Place a pin at `[lng, lat]` with an HTML popup attached
    pub fn add_marker(&self, lng_lat: [f64; 2], popup_html: &str, style: &MarkerStyle<'_>) -> Result<MarkerHandle, JsError> {
        let popup = Popup::new(&serde_wasm_bindgen::to_value(&PopupInit { offset: style.popup_offset })?)?
            .set_html(popup_html)?;
        let position = js_sys::Array::of2(&JsValue::from_f64(lng_lat[0]), &JsValue::from_f64(lng_lat[1]));

        let marker = Marker::new(&serde_wasm_bindgen::to_value(&MarkerInit { color: style.color })?)?
            .set_lng_lat(&position)?
            .set_popup(&popup)?
            .add_to(&self.map)?;
        Ok(MarkerHandle(marker))
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.map.remove();
    }
}

/// A marker currently on a map
pub struct MarkerHandle(Marker);

impl MarkerHandle {
    pub fn remove(self) {
        self.0.remove();
    }
}
