//! Feed section component: a titled grid of repository cards.

use web_types::RepositoryRecord;
use yew::prelude::*;

use crate::components::RepoCard;

/// Properties for RepoSection component.
#[derive(Properties, PartialEq)]
pub struct RepoSectionProps {
    /// Section heading.
    pub title: AttrValue,
    /// Records for this feed, rendered in order.
    pub repos: Vec<RepositoryRecord>,
    /// Last fetch error for this feed, if any.
    #[prop_or_default]
    pub error: Option<String>,
}

/// Feed section component.
///
/// Each feed carries its own error indicator, so a failed refresh of one
/// feed leaves the other section untouched. The held cards stay visible
/// under the indicator.
#[function_component(RepoSection)]
pub fn repo_section(props: &RepoSectionProps) -> Html {
    html! {
        <section>
            <h2>{ props.title.clone() }</h2>
            if let Some(message) = &props.error {
                <p class="section-error">{ format!("刷新失败: {}", message) }</p>
            }
            <div class="repo-grid">
                { for props.repos.iter().map(|repo| html! {
                    <RepoCard key={repo.full_name.clone()} repo={repo.clone()} />
                }) }
            </div>
        </section>
    }
}
