use std::{collections::HashSet, path::Path, sync::Arc};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ContextExt, LuminaErr};

const BUNDLED: &str = include_str!("../content/site.yaml");
const DATE_FORMAT: &str = "%Y.%m.%d";

/// One piece of body content. Bodies are rendered block by block, the
/// content layer never interprets the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Lead(Arc<str>),
    Paragraph(Arc<str>),
    Heading(Arc<str>),
    Code(Arc<str>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    /// `YYYY.MM.DD`, as displayed.
    pub date: Arc<str>,
    pub category: Arc<str>,
    pub image: Arc<str>,
    pub title: Arc<str>,
    pub desc: Arc<str>,
    pub read_time: Arc<str>,
    pub content: Vec<Block>,
}

impl Post {
    pub fn published(&self) -> Result<NaiveDate, LuminaErr> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .with_context(|| format!("post {}: date {:?}", self.id, self.date))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: Arc<str>,
    pub category: Arc<str>,
    pub image: Arc<str>,
    pub desc: Arc<str>,
    pub tags: Vec<Arc<str>>,
    /// Source repository host and path, without scheme.
    pub github: Arc<str>,
    /// Live demo host, without scheme.
    pub demo: Arc<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<Arc<str>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<Arc<str>>,
    pub content: Vec<Block>,
}

fn https(host: &str) -> Result<Url, LuminaErr> {
    if host.starts_with("http://") || host.starts_with("https://") {
        return Ok(Url::parse(host)?);
    }
    Ok(Url::parse(&format!("https://{host}"))?)
}

impl Project {
    pub fn source_url(&self) -> Result<Url, LuminaErr> {
        https(&self.github).with_context(|| format!("project {}: github link", self.id))
    }

    pub fn demo_url(&self) -> Result<Url, LuminaErr> {
        https(&self.demo).with_context(|| format!("project {}: demo link", self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub title: Arc<str>,
    /// Percent, 0..=100.
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Home {
    pub badge: Arc<str>,
    pub headline: Arc<str>,
    pub accent: Arc<str>,
    pub tagline: Arc<str>,
    pub explore_label: Arc<str>,
    pub about_label: Arc<str>,
    pub archive_title: Arc<str>,
    pub archive_label: Arc<str>,
    pub read_more: Arc<str>,
    pub commits: u32,
    pub reading: Reading,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub heading: Arc<str>,
    pub intro: Arc<str>,
    pub paragraphs: Vec<Arc<str>>,
    pub skills: Vec<Arc<str>>,
    pub interests: Vec<Arc<str>>,
    pub avatar: Arc<str>,
    pub location: Arc<str>,
}

/// Read-only content tables. Loaded once and shared for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub home: Home,
    pub about: About,
    posts: Vec<Post>,
    projects: Vec<Project>,
}

impl Content {
    pub fn bundled() -> Result<Arc<Self>, LuminaErr> {
        Self::parse(BUNDLED).with_context(|| "bundled content".to_string())
    }

    pub async fn from_path(path: &Path) -> Result<Arc<Self>, LuminaErr> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("content file: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("content file: {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Arc<Self>, LuminaErr> {
        let content: Content = serde_yaml::from_str(raw)?;
        content.validate()?;
        Ok(Arc::new(content))
    }

    fn validate(&self) -> Result<(), LuminaErr> {
        if self.posts.is_empty() {
            return Err(LuminaErr::Content("posts table is empty".into()));
        }
        if self.projects.is_empty() {
            return Err(LuminaErr::Content("projects table is empty".into()));
        }

        let mut seen = HashSet::new();
        for post in &self.posts {
            if !seen.insert(post.id) {
                return Err(LuminaErr::Content(format!("duplicate post id {}", post.id)));
            }
            post.published()?;
        }

        seen.clear();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(LuminaErr::Content(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            project.source_url()?;
            project.demo_url()?;
        }
        Ok(())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn post(&self, id: u32) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Unknown or missing ids resolve to the first post.
    pub fn resolve_post(&self, id: Option<u32>) -> &Post {
        id.and_then(|id| self.post(id)).unwrap_or(&self.posts[0])
    }

    /// Unknown or missing ids resolve to the first project.
    pub fn resolve_project(&self, id: Option<u32>) -> &Project {
        id.and_then(|id| self.project(id))
            .unwrap_or(&self.projects[0])
    }

    pub fn featured_posts(&self, limit: usize) -> &[Post] {
        &self.posts[..limit.min(self.posts.len())]
    }
}
