mod project_card;
mod project_grid;
mod projects_section;
mod star_field;

#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use projects_section::ProjectsSection;
pub use star_field::{star_memo, StarField};
