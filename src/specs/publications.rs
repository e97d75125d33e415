// src/specs/publications.rs
//! Publications list. `kind` is the category (journal / conference /
//! preprint / book); base order is newest year first after `order`.

use std::cmp::Ordering;

use crate::config::options::ContentKind;
use crate::core::fields::{self, CategorySpec};
use crate::core::headers::{AliasTable, Row};
use crate::core::sanitize::join_nonblank;

use super::{Record, Schema, cmp_desc_opt, cmp_label, join_list, required};

#[derive(Clone, Debug, PartialEq)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: Option<i32>,
    pub kind: Vec<String>,
    pub doi: Option<String>,
    pub pdf: Option<String>,
    pub link: Option<String>,
    pub tags: Vec<String>,
    pub order: f64,
}

pub struct PublicationsSchema;

const ALIASES: AliasTable = &[
    ("id", &["identifier", "key", "slug", "아이디"]),
    ("title", &["paper", "paper title", "name", "제목", "논문명"]),
    ("authors", &["author", "authorship", "writers", "저자"]),
    ("venue", &["journal", "conference", "booktitle", "published in", "학술지", "학회"]),
    ("year", &["publication year", "published", "date", "연도", "발행연도"]),
    ("kind", &["type", "category", "categories", "pub type", "유형", "분류"]),
    ("doi", &["doi url", "doi link"]),
    ("pdf", &["pdf url", "paper url", "file", "원문"]),
    ("link", &["url", "website", "링크"]),
    ("tags", &["tag", "keywords", "태그", "키워드"]),
    ("order", &["sort", "rank", "priority", "순서", "정렬"]),
];

const CATEGORIES: CategorySpec = CategorySpec {
    allowed: &["journal", "conference", "preprint", "book"],
    aliases: &[
        ("article", "journal"),
        ("journals", "journal"),
        ("저널", "journal"),
        ("논문지", "journal"),
        ("proceedings", "conference"),
        ("proc", "conference"),
        ("workshop", "conference"),
        ("학술대회", "conference"),
        ("arxiv", "preprint"),
        ("chapter", "book"),
        ("books", "book"),
    ],
};

/// Author cells use `;` between people when names contain commas
/// ("Kim, J.; Lee, H."), otherwise `,` or " and ".
pub fn split_authors(raw: &str) -> Vec<String> {
    let sep = if raw.contains(';') { ';' } else { ',' };
    raw.split(sep)
        .flat_map(|part| part.split(" and "))
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .collect()
}

/// Bare DOIs ("10.1000/xyz") become resolver links; otherwise http(s) only.
fn doi_url(raw: &str) -> Option<String> {
    let s = raw.trim().trim_start_matches("doi:").trim();
    if s.starts_with("10.") {
        Some(format!("https://doi.org/{}", s))
    } else {
        fields::http_url(s)
    }
}

impl Schema for PublicationsSchema {
    type Record = Publication;

    const KIND: ContentKind = ContentKind::Publications;
    const ALIASES: AliasTable = ALIASES;
    const CATEGORIES: CategorySpec = CATEGORIES;
    const COLUMNS: &'static [&'static str] =
        &["Year", "Title", "Authors", "Venue", "Type", "DOI", "PDF"];

    fn from_row(row: &Row<'_>) -> Option<Publication> {
        let (id, title) = required(row, "id", "title")?;
        Some(Publication {
            id: s!(id),
            title: s!(title),
            authors: split_authors(row.get("authors")),
            venue: s!(row.get("venue")),
            year: fields::parse_year(row.get("year")),
            kind: CATEGORIES.normalize(row.get("kind")),
            doi: doi_url(row.get("doi")),
            pdf: fields::http_url(row.get("pdf")),
            link: fields::http_url(row.get("link")),
            tags: fields::split_list(row.get("tags")),
            order: fields::parse_order(row.get("order")),
        })
    }

    fn tie_break(a: &Publication, b: &Publication) -> Ordering {
        cmp_desc_opt(&a.year, &b.year).then_with(|| cmp_label(&a.title, &b.title))
    }
}

impl Record for Publication {
    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.title }
    fn order(&self) -> f64 { self.order }
    fn categories(&self) -> &[String] { &self.kind }

    fn search_text(&self) -> String {
        let authors = self.authors.join(" ");
        let tags = self.tags.join(" ");
        let year = self.year.map(|y| y.to_string()).unwrap_or_default();
        join_nonblank([
            self.title.as_str(),
            authors.as_str(),
            self.venue.as_str(),
            year.as_str(),
            tags.as_str(),
        ])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.year.map(|y| y.to_string()).unwrap_or_default(),
            self.title.clone(),
            join_list(&self.authors),
            self.venue.clone(),
            join_list(&self.kind),
            self.doi.clone().unwrap_or_default(),
            self.pdf.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authors_prefer_semicolons() {
        assert_eq!(split_authors("Kim, J.; Lee, H."), strings!["Kim, J.", "Lee, H."]);
        assert_eq!(split_authors("A. Kim, B. Lee and C. Park"), strings!["A. Kim", "B. Lee", "C. Park"]);
        assert!(split_authors("").is_empty());
    }

    #[test]
    fn doi_forms() {
        assert_eq!(doi_url("10.1000/xyz"), Some(s!("https://doi.org/10.1000/xyz")));
        assert_eq!(doi_url("doi:10.1000/xyz"), Some(s!("https://doi.org/10.1000/xyz")));
        assert_eq!(doi_url("https://doi.org/10.1/a"), Some(s!("https://doi.org/10.1/a")));
        assert_eq!(doi_url("n/a"), None);
    }
}
