//! Reusable UI components.

mod loading;
mod repo_card;
mod repo_section;

pub use loading::Loading;
pub use repo_card::RepoCard;
pub use repo_section::RepoSection;
