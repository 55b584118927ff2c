use leptos::prelude::*;

use super::ProjectCard;
use crate::catalogue::Project;

/// One column on narrow viewports, two from the medium breakpoint up (see `style/main.scss`).
#[component]
pub fn ProjectGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="project-grid">
            {projects
                .iter()
                .map(|p| {
                    view! {
                        <ProjectCard
                            title=p.title
                            description=p.description
                            video=p.video
                            technologies=p.technologies
                            live_url=p.live_url
                            source_url=p.source_url
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
