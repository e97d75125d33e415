// src/specs/resources.rs
//! Teaching/reference resources: articles, lecture material, Python tools.
//! Files come as `name::url|name::url`; `createdAt` is a free-form date.

use std::cmp::Ordering;

use crate::config::options::ContentKind;
use crate::core::fields::{self, CategorySpec, FileLink};
use crate::core::headers::{AliasTable, Row};
use crate::core::sanitize::join_nonblank;

use super::{Record, Schema, cmp_desc_opt, cmp_label, join_list, required};

#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub files: Vec<FileLink>,
    /// `YYYY-MM-DD` when parseable, else as written.
    pub created_at: String,
    pub order: f64,
}

pub struct ResourcesSchema;

const ALIASES: AliasTable = &[
    ("id", &["identifier", "key", "slug", "아이디"]),
    ("title", &["name", "resource", "제목", "자료명"]),
    ("description", &["summary", "desc", "details", "설명", "내용"]),
    ("categories", &["category", "type", "kind", "분류", "카테고리"]),
    ("tags", &["tag", "keywords", "태그", "키워드"]),
    ("files", &["file", "attachment", "attachments", "links", "downloads", "파일", "첨부", "첨부파일"]),
    (
        "createdAt",
        &["created_at", "created at", "created", "date", "uploaded", "upload date", "작성일", "등록일", "날짜"],
    ),
    ("order", &["sort", "rank", "priority", "순서", "정렬"]),
];

const CATEGORIES: CategorySpec = CategorySpec {
    allowed: &["article", "lecture", "python"],
    aliases: &[
        ("tool", "python"),
        ("tools", "python"),
        ("py", "python"),
        ("파이썬", "python"),
        ("paper", "article"),
        ("papers", "article"),
        ("articles", "article"),
        ("논문", "article"),
        ("lectures", "lecture"),
        ("slides", "lecture"),
        ("강의", "lecture"),
    ],
};

impl Schema for ResourcesSchema {
    type Record = Resource;

    const KIND: ContentKind = ContentKind::Resources;
    const ALIASES: AliasTable = ALIASES;
    const CATEGORIES: CategorySpec = CATEGORIES;
    const COLUMNS: &'static [&'static str] =
        &["Title", "Categories", "Created", "Tags", "Files", "Description"];

    fn from_row(row: &Row<'_>) -> Option<Resource> {
        let (id, title) = required(row, "id", "title")?;
        Some(Resource {
            id: s!(id),
            title: s!(title),
            description: s!(row.get("description")),
            categories: CATEGORIES.normalize(row.get("categories")),
            tags: fields::split_list(row.get("tags")),
            files: fields::parse_files(row.get("files")),
            created_at: fields::normalize_date(row.get("createdAt")),
            order: fields::parse_order(row.get("order")),
        })
    }

    fn tie_break(a: &Resource, b: &Resource) -> Ordering {
        let da = fields::parse_date(&a.created_at);
        let db = fields::parse_date(&b.created_at);
        cmp_desc_opt(&da, &db).then_with(|| cmp_label(&a.title, &b.title))
    }
}

impl Record for Resource {
    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.title }
    fn order(&self) -> f64 { self.order }
    fn categories(&self) -> &[String] { &self.categories }

    fn search_text(&self) -> String {
        let tags = self.tags.join(" ");
        let files: Vec<&str> = self.files.iter().map(|f| f.name.as_str()).collect();
        let files = files.join(" ");
        join_nonblank([
            self.title.as_str(),
            self.description.as_str(),
            tags.as_str(),
            files.as_str(),
            self.created_at.as_str(),
        ])
    }

    fn cells(&self) -> Vec<String> {
        let files: Vec<String> = self.files.iter().map(|f| format!("{} <{}>", f.name, f.url)).collect();
        vec![
            self.title.clone(),
            join_list(&self.categories),
            self.created_at.clone(),
            join_list(&self.tags),
            files.join(" | "),
            self.description.clone(),
        ]
    }
}
