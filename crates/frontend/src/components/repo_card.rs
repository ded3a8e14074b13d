//! Repository card component.

use web_types::RepositoryRecord;
use yew::prelude::*;

/// Properties for RepoCard component.
#[derive(Properties, PartialEq)]
pub struct RepoCardProps {
    pub repo: RepositoryRecord,
}

/// Repository card component.
///
/// A pure mapping from one record to a card: linked title, description,
/// stats line, and one tag per topic in backend order.
#[function_component(RepoCard)]
pub fn repo_card(props: &RepoCardProps) -> Html {
    let repo = &props.repo;

    html! {
        <div class="repo-card">
            <h3>
                <a href={repo.url.clone()} target="_blank" rel="noopener noreferrer">
                    { &repo.full_name }
                </a>
            </h3>
            <p class="description">{ repo.description_text() }</p>
            <div class="stats">
                <span>{ format!("⭐ {}", repo.stars) }</span>
                if let Some(delta) = repo.daily_delta() {
                    <span>{ format!("今日: +{}", delta) }</span>
                }
                <span>{ format!("语言: {}", repo.language_label()) }</span>
            </div>
            <div class="topics">
                { for repo.topics.iter().map(|topic| html! {
                    <span key={topic.clone()} class="topic-tag">{ topic }</span>
                }) }
            </div>
        </div>
    }
}
