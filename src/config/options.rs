// src/config/options.rs
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentKind {
    People,
    Projects,
    Publications,
    Resources,
    News,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::People,
        ContentKind::Projects,
        ContentKind::Publications,
        ContentKind::Resources,
        ContentKind::News,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::People => "People",
            ContentKind::Projects => "Projects",
            ContentKind::Publications => "Publications",
            ContentKind::Resources => "Resources",
            ContentKind::News => "News",
        }
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            ContentKind::People => ENV_PEOPLE_URL,
            ContentKind::Projects => ENV_PROJECTS_URL,
            ContentKind::Publications => ENV_PUBLICATIONS_URL,
            ContentKind::Resources => ENV_RESOURCES_URL,
            ContentKind::News => ENV_NEWS_URL,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "people" | "members" => Ok(ContentKind::People),
            "projects" => Ok(ContentKind::Projects),
            "publications" | "pubs" => Ok(ContentKind::Publications),
            "resources" => Ok(ContentKind::Resources),
            "news" => Ok(ContentKind::News),
            other => Err(format!("Unknown page: {}", other)),
        }
    }
}

/// Feed locations, one optional URL per content kind.
/// Built explicitly (tests, CLI flags) or from the environment at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedConfig {
    urls: HashMap<ContentKind, String>,
}

impl FeedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, kind: ContentKind, url: impl Into<String>) -> Self {
        self.set_url(kind, url);
        self
    }

    /// Blank values count as absent.
    pub fn set_url(&mut self, kind: ContentKind, url: impl Into<String>) {
        let url = url.into();
        let url = url.trim();
        if url.is_empty() {
            self.urls.remove(&kind);
        } else {
            self.urls.insert(kind, s!(url));
        }
    }

    pub fn url(&self, kind: ContentKind) -> Option<&str> {
        self.urls.get(&kind).map(String::as_str)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::new();
        for kind in ContentKind::ALL {
            if let Some(v) = lookup(kind.env_var()) {
                cfg.set_url(kind, v);
            }
        }
        cfg
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn delim(&self) -> Option<u8> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Csv => Some(b','),
            OutputFormat::Tsv => Some(b'\t'),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(format!("Unknown format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_env_values_are_absent() {
        let cfg = FeedConfig::from_lookup(|key| match key {
            ENV_NEWS_URL => Some(s!("  https://example.org/news.csv ")),
            ENV_PEOPLE_URL => Some(s!("   ")),
            _ => None,
        });
        assert_eq!(cfg.url(ContentKind::News), Some("https://example.org/news.csv"));
        assert_eq!(cfg.url(ContentKind::People), None);
        assert_eq!(cfg.url(ContentKind::Resources), None);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Publications".parse::<ContentKind>(), Ok(ContentKind::Publications));
        assert!("home".parse::<ContentKind>().is_err());
    }
}
