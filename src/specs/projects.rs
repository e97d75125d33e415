// src/specs/projects.rs
//! Research projects. `status` is the category (ongoing / completed);
//! `tags` and `methods` are open lists used for search and display.

use std::cmp::Ordering;

use crate::config::options::ContentKind;
use crate::core::fields::{self, CategorySpec};
use crate::core::headers::{AliasTable, Row};
use crate::core::sanitize::join_nonblank;

use super::{Record, Schema, cmp_label, join_list, required};

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Vec<String>,
    pub tags: Vec<String>,
    pub methods: Vec<String>,
    pub funder: String,
    pub link: Option<String>,
    pub image: Option<String>,
    /// `YYYY-MM-DD` when parseable, else as written.
    pub start: String,
    pub end: String,
    pub order: f64,
}

impl Project {
    /// "2021-03-01 – 2023-02-28", "2021-03-01 –", or "".
    pub fn period(&self) -> String {
        match (self.start.is_empty(), self.end.is_empty()) {
            (true, true) => s!(),
            (false, true) => format!("{} –", self.start),
            (true, false) => format!("– {}", self.end),
            (false, false) => format!("{} – {}", self.start, self.end),
        }
    }
}

pub struct ProjectsSchema;

const ALIASES: AliasTable = &[
    ("id", &["identifier", "key", "slug", "아이디"]),
    ("title", &["name", "project", "project name", "제목", "과제명", "프로젝트"]),
    ("description", &["summary", "abstract", "desc", "details", "설명", "내용", "개요"]),
    ("status", &["state", "category", "categories", "상태", "분류"]),
    ("tags", &["tag", "keywords", "태그", "키워드"]),
    ("methods", &["method", "approach", "techniques", "methodology", "방법", "방법론"]),
    ("funder", &["funding", "sponsor", "agency", "지원기관"]),
    ("link", &["url", "website", "homepage", "링크"]),
    ("image", &["img", "thumbnail", "photo", "cover", "이미지"]),
    ("start", &["start date", "started", "from", "since", "시작일", "시작"]),
    ("end", &["end date", "until", "to", "종료일", "종료"]),
    ("order", &["sort", "rank", "priority", "순서", "정렬"]),
];

const CATEGORIES: CategorySpec = CategorySpec {
    allowed: &["ongoing", "completed"],
    aliases: &[
        ("active", "ongoing"),
        ("current", "ongoing"),
        ("running", "ongoing"),
        ("진행", "ongoing"),
        ("진행중", "ongoing"),
        ("done", "completed"),
        ("finished", "completed"),
        ("past", "completed"),
        ("closed", "completed"),
        ("완료", "completed"),
    ],
};

impl Schema for ProjectsSchema {
    type Record = Project;

    const KIND: ContentKind = ContentKind::Projects;
    const ALIASES: AliasTable = ALIASES;
    const CATEGORIES: CategorySpec = CATEGORIES;
    const COLUMNS: &'static [&'static str] =
        &["Title", "Status", "Period", "Tags", "Methods", "Funder", "Link"];

    fn from_row(row: &Row<'_>) -> Option<Project> {
        let (id, title) = required(row, "id", "title")?;
        Some(Project {
            id: s!(id),
            title: s!(title),
            description: s!(row.get("description")),
            status: CATEGORIES.normalize(row.get("status")),
            tags: fields::split_list(row.get("tags")),
            methods: fields::split_list(row.get("methods")),
            funder: s!(row.get("funder")),
            link: fields::http_url(row.get("link")),
            image: fields::image_url(row.get("image")),
            start: fields::normalize_date(row.get("start")),
            end: fields::normalize_date(row.get("end")),
            order: fields::parse_order(row.get("order")),
        })
    }

    fn tie_break(a: &Project, b: &Project) -> Ordering {
        cmp_label(&a.title, &b.title)
    }
}

impl Record for Project {
    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.title }
    fn order(&self) -> f64 { self.order }
    fn categories(&self) -> &[String] { &self.status }

    fn search_text(&self) -> String {
        let tags = self.tags.join(" ");
        let methods = self.methods.join(" ");
        join_nonblank([
            self.title.as_str(),
            self.description.as_str(),
            tags.as_str(),
            methods.as_str(),
            self.funder.as_str(),
        ])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            join_list(&self.status),
            self.period(),
            join_list(&self.tags),
            join_list(&self.methods),
            self.funder.clone(),
            self.link.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::headers::HeaderMap;

    #[test]
    fn status_and_dates() {
        let header = strings!["ID", "Project Name", "State", "Methods", "Start Date", "End Date"];
        let cells = strings!["pr1", "Soft Grippers", "Active", "FEM | CFD", "2021/3/1", "TBD"];
        let map = HeaderMap::build(&header, ALIASES);
        let p = ProjectsSchema::from_row(&map.row(&cells)).unwrap();
        assert_eq!(p.status, strings!["ongoing"]);
        assert_eq!(p.methods, strings!["FEM", "CFD"]);
        assert_eq!(p.start, "2021-03-01");
        assert_eq!(p.end, "TBD");
        assert_eq!(p.period(), "2021-03-01 – TBD");
    }
}
