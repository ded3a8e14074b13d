//! AI Project Daily Dashboard - Yew WASM frontend.
//!
//! A single page that polls the backend's trending and new repository
//! feeds every five minutes and renders them as card grids.

mod api;
mod app;
mod components;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
