use std::collections::HashSet;

use url::Url;

use crate::error::CatalogueError;

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Path of the preview video under the site's public assets
    pub video: &'static str,
    pub technologies: &'static [&'static str],
    /// Hosted demo, when there is one
    pub live_url: Option<&'static str>,
    pub source_url: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Job Finder",
        description: "College students can find internships and job opportunities through this platform, which connects them with companies looking for fresh talent. Complete with a frontend, backend, and gateway.",
        video: "/jobDemo.mov",
        technologies: &["React.js", "Next.js", "Jobicy API", "Gateway"],
        live_url: Some("https://nextandhooks.vercel.app/"),
        source_url: "https://github.com/jenjenli/nextandhooks",
    },
    Project {
        id: 2,
        title: "CoverCraft",
        description: "A full-stack Flask application that generates personalized cover letters using AI and external NLP APIs. The platform features a responsive UI for seamless user interaction and implements CSV-based data storage to build a scalable dataset for continuous model enhancement.",
        video: "/CoverCraft.mp4",
        technologies: &["HTML", "CSS", "Python", "Flask", "CSV", "NLP API"],
        live_url: None,
        source_url: "https://github.com/jenjenli/CoverCraft",
    },
];

fn check_url(id: u32, field: &'static str, value: &str) -> Result<(), CatalogueError> {
    let invalid = |reason: String| CatalogueError::InvalidUrl {
        id,
        field,
        url: value.to_string(),
        reason,
    };

    let parsed = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

/// Check a project table, collecting every problem rather than stopping at the first.
#[must_use]
pub fn validate(projects: &[Project]) -> Vec<CatalogueError> {
    let mut problems = Vec::new();
    let mut seen = HashSet::new();

    for project in projects {
        if !seen.insert(project.id) {
            problems.push(CatalogueError::DuplicateId(project.id));
        }

        for (field, value) in [
            ("title", project.title),
            ("description", project.description),
            ("video", project.video),
        ] {
            if value.trim().is_empty() {
                problems.push(CatalogueError::MissingField {
                    id: project.id,
                    field,
                });
            }
        }

        if project.technologies.is_empty() {
            problems.push(CatalogueError::MissingField {
                id: project.id,
                field: "technologies",
            });
        }

        if let Err(e) = check_url(project.id, "source_url", project.source_url) {
            problems.push(e);
        }
        if let Some(live) = project.live_url {
            if let Err(e) = check_url(project.id, "live_url", live) {
                problems.push(e);
            }
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalogue_is_valid() {
        assert!(validate(PROJECTS).is_empty());
        assert_eq!(PROJECTS.len(), 2);
    }

    #[test]
    fn job_finder_has_demo_and_source() {
        let job_finder = &PROJECTS[0];
        assert_eq!(job_finder.title, "Job Finder");
        assert_eq!(job_finder.live_url, Some("https://nextandhooks.vercel.app/"));
        assert_eq!(job_finder.source_url, "https://github.com/jenjenli/nextandhooks");
        assert_eq!(
            job_finder.technologies,
            ["React.js", "Next.js", "Jobicy API", "Gateway"]
        );
    }

    #[test]
    fn cover_craft_has_no_demo() {
        let cover_craft = &PROJECTS[1];
        assert_eq!(cover_craft.title, "CoverCraft");
        assert_eq!(cover_craft.live_url, None);
        assert_eq!(cover_craft.source_url, "https://github.com/jenjenli/CoverCraft");
    }

    #[test]
    fn reports_duplicate_ids_and_bad_urls() {
        let broken = [
            PROJECTS[0],
            Project {
                id: 1,
                title: " ",
                technologies: &[],
                live_url: Some("ftp://example.com/demo"),
                source_url: "not a url",
                ..PROJECTS[1]
            },
        ];

        let problems = validate(&broken);

        assert!(problems.contains(&CatalogueError::DuplicateId(1)));
        assert!(problems.contains(&CatalogueError::MissingField {
            id: 1,
            field: "title"
        }));
        assert!(problems.contains(&CatalogueError::MissingField {
            id: 1,
            field: "technologies"
        }));
        let bad_urls: Vec<_> = problems
            .iter()
            .filter_map(|p| match p {
                CatalogueError::InvalidUrl { field, .. } => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(bad_urls, ["source_url", "live_url"]);
    }

    #[test]
    fn serializes_missing_demo_as_null() {
        let json = serde_json::to_value(PROJECTS[1]).unwrap();
        assert_eq!(json["live_url"], serde_json::Value::Null);
        assert_eq!(json["technologies"][5], "NLP API");
    }
}
