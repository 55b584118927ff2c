//! Server-side rendering checks for the showcase components.
//!
//! Run with: cargo test --features ssr

use std::sync::Arc;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::catalogue::PROJECTS;
use crate::stars::{DEFAULT_STAR_COUNT, SHOWCASE_STAR_COUNT};

fn render<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Split rendered markup into one chunk per project card.
fn cards(html: &str) -> Vec<&str> {
    html.split(r#"class="project-card""#).skip(1).collect()
}

fn tags(card: &str) -> Vec<&str> {
    card.split(r#"class="tech-tag">"#)
        .skip(1)
        .filter_map(|chunk| chunk.split('<').next())
        .collect()
}

// ============================================================================
// Star field
// ============================================================================

#[test]
fn star_field_defaults_to_seventy_stars() {
    let html = render(|| view! { <StarField /> });
    assert_eq!(html.matches(r#"class="star""#).count(), DEFAULT_STAR_COUNT);
    assert!(html.contains(r#"aria-hidden="true""#));
}

#[test]
fn star_field_renders_requested_count() {
    let html = render(|| view! { <StarField count=12usize /> });
    assert_eq!(html.matches(r#"class="star""#).count(), 12);
    assert_eq!(html.matches("animation: starTwinkle").count(), 12);
}

#[test]
fn star_field_with_zero_count_is_empty() {
    let html = render(|| view! { <StarField count=0usize /> });
    assert_eq!(html.matches(r#"class="star""#).count(), 0);
    assert!(html.contains(r#"class="star-field""#));
}

#[test]
fn star_memo_is_stable_for_unchanged_count() {
    let owner = Owner::new();
    owner.with(|| {
        let (count, set_count) = signal(8usize);
        let stars = star_memo(count.into());

        let first = stars.get_untracked();
        set_count.set(8);
        let second = stars.get_untracked();
        assert!(Arc::ptr_eq(&first, &second));

        set_count.set(3);
        let third = stars.get_untracked();
        assert_eq!(third.len(), 3);
        assert!(!Arc::ptr_eq(&first, &third));
    });
}

// ============================================================================
// Project grid
// ============================================================================

#[test]
fn grid_renders_one_card_per_project() {
    let html = render(|| view! { <ProjectGrid projects=PROJECTS /> });
    assert!(html.contains(r#"class="project-grid""#));
    assert_eq!(cards(&html).len(), 2);
}

#[test]
fn first_card_links_to_demo_and_source() {
    let html = render(|| view! { <ProjectGrid projects=PROJECTS /> });
    let card = cards(&html)[0];

    assert!(card.contains("Job Finder"));
    assert!(card.contains(r#"href="https://nextandhooks.vercel.app/""#));
    assert!(card.contains(r#"href="https://github.com/jenjenli/nextandhooks""#));
    assert!(card.contains("Live Demo"));
    assert!(card.contains("Code"));
}

#[test]
fn second_card_omits_demo_link() {
    let html = render(|| view! { <ProjectGrid projects=PROJECTS /> });
    let card = cards(&html)[1];

    assert!(card.contains("CoverCraft"));
    assert!(card.contains(r#"href="https://github.com/jenjenli/CoverCraft""#));
    assert!(!card.contains("Live Demo"));
    assert!(!card.contains("project-link--demo"));
    assert_eq!(card.matches("<a ").count(), 1);
}

#[test]
fn tags_follow_catalogue_order() {
    let html = render(|| view! { <ProjectGrid projects=PROJECTS /> });
    let cards = cards(&html);

    assert_eq!(tags(cards[0]), ["React.js", "Next.js", "Jobicy API", "Gateway"]);
    assert_eq!(
        tags(cards[1]),
        ["HTML", "CSS", "Python", "Flask", "CSV", "NLP API"]
    );
}

#[test]
fn outbound_links_cannot_reach_opener() {
    let html = render(|| view! { <ProjectGrid projects=PROJECTS /> });
    let links = html.matches("<a ").count();

    assert_eq!(links, 3);
    assert_eq!(html.matches(r#"target="_blank""#).count(), links);
    assert_eq!(html.matches(r#"rel="noopener noreferrer""#).count(), links);
}

#[test]
fn card_video_has_sources_and_fallback() {
    let html = render(|| {
        view! {
            <ProjectCard
                title="Demo"
                description="A demo project"
                video="/demo.mp4"
                technologies=&["Rust"]
                live_url=None
                source_url="https://example.com/demo"
            />
        }
    });

    assert!(html.contains(r#"src="/demo.mp4" type="video/mp4""#));
    assert!(html.contains(r#"src="/demo.mp4" type="video/quicktime""#));
    assert!(html.contains("Your browser does not support the video tag."));
    for attr in ["autoplay", "loop", "muted", "playsinline"] {
        assert!(html.contains(attr), "missing {attr}");
    }
}

// ============================================================================
// Whole section
// ============================================================================

#[test]
fn section_layers_stars_grid_and_keyframes() {
    let html = render(|| view! { <ProjectsSection /> });

    assert_eq!(html.matches(r#"class="star""#).count(), SHOWCASE_STAR_COUNT);
    assert_eq!(html.matches("nebula__glow ").count(), 3);
    assert!(html.contains("Project Showcase"));
    assert_eq!(cards(&html).len(), PROJECTS.len());
    assert!(html.contains("@keyframes starTwinkle"));
    assert!(html.contains(".animate-pulse-slow"));

    let stars = html.find(r#"class="star-field""#);
    let grid = html.find(r#"class="project-grid""#);
    assert!(stars < grid);
}
