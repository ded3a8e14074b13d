//! Loading indicator component.

use yew::prelude::*;

/// Loading indicator component, shown until the first poll cycle settles.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{"加载中..."}</p>
        </div>
    }
}
