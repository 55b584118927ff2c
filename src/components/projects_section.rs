use leptos::prelude::*;

use super::{ProjectGrid, StarField};
use crate::animation::showcase_css;
use crate::catalogue::PROJECTS;
use crate::stars::SHOWCASE_STAR_COUNT;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section class="projects-showcase">
            <StarField count=SHOWCASE_STAR_COUNT />

            <div class="nebula" aria-hidden="true">
                <div class="nebula__glow nebula__glow--purple"></div>
                <div class="nebula__glow nebula__glow--blue"></div>
                <div class="nebula__glow nebula__glow--pink"></div>
            </div>

            <div class="projects-showcase__content">
                <header class="projects-showcase__header">
                    <h2 class="projects-showcase__title">"Project Showcase"</h2>
                    <p class="projects-showcase__subtitle">
                        "A selection of my recent work and creative explorations"
                    </p>
                </header>

                <ProjectGrid projects=PROJECTS />
            </div>

            <style>{showcase_css()}</style>
        </section>
    }
}
