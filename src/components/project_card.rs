use leptos::prelude::*;

#[component]
pub fn ProjectCard(
    title: &'static str,
    description: &'static str,
    video: &'static str,
    technologies: &'static [&'static str],
    /// The demo link is left out entirely when there is nothing to link to
    live_url: Option<&'static str>,
    source_url: &'static str,
) -> impl IntoView {
    view! {
        <article class="project-card">
            <div class="project-card__media">
                <video class="project-card__video" autoplay=true loop=true muted=true playsinline=true>
                    <source src=video type="video/mp4" />
                    <source src=video type="video/quicktime" />
                    "Your browser does not support the video tag."
                </video>
            </div>

            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__description">{description}</p>

                <ul class="tech-tags">
                    {technologies
                        .iter()
                        .map(|tech| view! { <li class="tech-tag">{*tech}</li> })
                        .collect::<Vec<_>>()}
                </ul>

                <div class="project-card__links">
                    {live_url.map(|url| view! {
                        <a
                            href=url
                            class="project-link project-link--demo"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <ExternalLinkIcon />
                            <span>"Live Demo"</span>
                        </a>
                    })}
                    <a
                        href=source_url
                        class="project-link project-link--source"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <GithubIcon />
                        <span>"Code"</span>
                    </a>
                </div>
            </div>
        </article>
    }
}

#[component]
fn ExternalLinkIcon() -> impl IntoView {
    view! {
        <svg class="project-link__icon" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
            <polyline points="15 3 21 3 21 9"/>
            <line x1="10" y1="14" x2="21" y2="3"/>
        </svg>
    }
}

#[component]
fn GithubIcon() -> impl IntoView {
    view! {
        <svg class="project-link__icon" xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>
        </svg>
    }
}
