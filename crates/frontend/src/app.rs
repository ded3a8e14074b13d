//! Main application component: the dashboard view.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_types::RepositoryRecord;
use yew::prelude::*;

use crate::api;
use crate::components::{Loading, RepoSection};

/// Poll period for both feeds.
const REFRESH_PERIOD_MS: u32 = 5 * 60 * 1000;

/// Main application component.
///
/// Holds the render model (two feed lists, per-feed error, loading flag),
/// runs one poll cycle on mount, and re-polls every five minutes until the
/// view is torn down. The loading flag clears once the first cycle has
/// fully settled, success or failure alike, and never reverts.
#[function_component(App)]
pub fn app() -> Html {
    let trending = use_state(Vec::<RepositoryRecord>::new);
    let new_repos = use_state(Vec::<RepositoryRecord>::new);
    let trending_error = use_state(|| None::<String>);
    let new_error = use_state(|| None::<String>);
    let loading = use_state_eq(|| true);

    {
        let trending = trending.clone();
        let new_repos = new_repos.clone();
        let trending_error = trending_error.clone();
        let new_error = new_error.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            // Fetches still pending in the current poll cycle. A tick is
            // skipped while the previous cycle has not settled, so
            // overlapping cycles never race on the state handles.
            let in_flight = Rc::new(Cell::new(0u8));

            let poll_cycle = move || {
                if in_flight.get() != 0 {
                    return;
                }
                in_flight.set(2);
                spawn_feed_fetch(
                    api::TRENDING,
                    trending.clone(),
                    trending_error.clone(),
                    in_flight.clone(),
                    loading.clone(),
                );
                spawn_feed_fetch(
                    api::NEW,
                    new_repos.clone(),
                    new_error.clone(),
                    in_flight.clone(),
                    loading.clone(),
                );
            };

            poll_cycle();
            let interval = Interval::new(REFRESH_PERIOD_MS, poll_cycle);
            move || drop(interval)
        });
    }

    if *loading {
        return html! { <Loading /> };
    }

    html! {
        <div class="app">
            <header>
                <h1>{"AI 项目每日看板"}</h1>
                <p class="update-time">
                    { format!("最后更新时间: {}", local_timestamp()) }
                </p>
            </header>

            <main>
                <RepoSection
                    title="🔥 热门项目"
                    repos={(*trending).clone()}
                    error={(*trending_error).clone()}
                />
                <RepoSection
                    title="✨ 新项目"
                    repos={(*new_repos).clone()}
                    error={(*new_error).clone()}
                />
            </main>
        </div>
    }
}

/// Fetch one feed and publish the outcome into its slice of view state.
///
/// Feeds settle independently: a failure logs, records the per-section
/// error message, and keeps whatever list is currently held, so one
/// endpoint's failure never suppresses the other's update.
fn spawn_feed_fetch(
    path: &'static str,
    repos: UseStateHandle<Vec<RepositoryRecord>>,
    error: UseStateHandle<Option<String>>,
    in_flight: Rc<Cell<u8>>,
    loading: UseStateHandle<bool>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_repos(path).await {
            Ok(list) => {
                repos.set(list);
                error.set(None);
            }
            Err(e) => {
                let msg = format!("Failed to fetch {path}: {e}");
                error.set(Some(e.to_string()));
                gloo_timers::callback::Timeout::new(0, move || {
                    web_sys::console::error_1(&msg.into());
                })
                .forget();
            }
        }
        in_flight.set(in_flight.get() - 1);
        if in_flight.get() == 0 {
            loading.set(false);
        }
    });
}

/// Locale-formatted current time, recomputed on every render.
fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    // Effects do not run during server-side rendering, so this is exactly
    // the pre-first-cycle view state.
    #[tokio::test]
    async fn test_initial_render_shows_only_loading_indicator() {
        let html = LocalServerRenderer::<App>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("加载中"));
        assert!(!html.contains("热门项目"));
        assert!(!html.contains("repo-grid"));
    }
}
