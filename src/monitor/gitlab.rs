//! GitLab project cards

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::seeded_rng;
use crate::settings::GitlabInstance;

const PROJECT_NAMES: &[&str] = &[
    "web-frontend",
    "api-gateway",
    "auth-service",
    "billing",
    "infrastructure",
    "docs",
    "mobile-app",
    "data-pipeline",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Success,
    Failed,
    Running,
    Pending,
}

impl std::fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PipelineStatus::Success => "success",
            PipelineStatus::Failed => "failed",
            PipelineStatus::Running => "running",
            PipelineStatus::Pending => "pending",
        };
        write!(f, "{}", s)
    }
}

/// A project on a GitLab instance with its latest pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitlabProject {
    pub instance: String,
    pub name: String,
    pub web_url: String,
    pub pipeline_status: PipelineStatus,
    pub open_merge_requests: u32,
    pub open_issues: u32,
    pub last_activity: DateTime<Utc>,
}

/// Placeholder projects for one instance (3 to 5 per instance)
pub fn projects(instance: &GitlabInstance, now: DateTime<Utc>) -> Vec<GitlabProject> {
    let mut rng = seeded_rng(&["gitlab", &instance.url, &instance.name]);

    let mut names = PROJECT_NAMES.to_vec();
    rng.shuffle(&mut names);
    let count = rng.usize(3..=5);
    let base_url = instance.url.trim_end_matches('/');

    names
        .into_iter()
        .take(count)
        .map(|name| {
            // Mostly green, the occasional broken build
            let pipeline_status = match rng.u32(0..100) {
                0..=69 => PipelineStatus::Success,
                70..=81 => PipelineStatus::Failed,
                82..=91 => PipelineStatus::Running,
                _ => PipelineStatus::Pending,
            };

            GitlabProject {
                instance: instance.name.clone(),
                name: name.to_string(),
                web_url: format!("{}/{}", base_url, name),
                pipeline_status,
                open_merge_requests: rng.u32(0..12),
                open_issues: rng.u32(0..40),
                last_activity: now - Duration::minutes(rng.i64(5..3 * 24 * 60)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> GitlabInstance {
        GitlabInstance {
            url: "https://gitlab.example.org/".to_string(),
            name: "Example".to_string(),
            token: None,
        }
    }

    #[test]
    fn test_projects_count_and_shape() {
        let now = Utc::now();
        let projects = projects(&instance(), now);

        assert!((3..=5).contains(&projects.len()));
        for p in &projects {
            assert_eq!(p.instance, "Example");
            assert!(p.web_url.starts_with("https://gitlab.example.org/"));
            assert!(!p.web_url.contains(".org//"));
            assert!(p.last_activity < now);
        }
    }

    #[test]
    fn test_projects_are_unique() {
        let projects = projects(&instance(), Utc::now());
        let mut names: Vec<_> = projects.iter().map(|p| p.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), projects.len());
    }

    #[test]
    fn test_projects_deterministic() {
        let now = Utc::now();
        assert_eq!(projects(&instance(), now), projects(&instance(), now));
    }

    #[test]
    fn test_token_does_not_change_output() {
        let now = Utc::now();
        let mut with_token = instance();
        with_token.token = Some("secret".to_string());
        assert_eq!(projects(&instance(), now), projects(&with_token, now));
    }

    #[test]
    fn test_pipeline_status_serializes_lowercase() {
        let json = serde_json::to_string(&PipelineStatus::Failed).unwrap();
        assert_eq!(json, "\"failed\"");
    }
}
