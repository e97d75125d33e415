// src/specs/news.rs
//! Lab news: announcements, awards, events, new papers. Newest first
//! after any explicit `order`.

use std::cmp::Ordering;

use crate::config::options::ContentKind;
use crate::core::fields::{self, CategorySpec};
use crate::core::headers::{AliasTable, Row};
use crate::core::sanitize::join_nonblank;

use super::{Record, Schema, cmp_desc_opt, cmp_label, join_list, required};

#[derive(Clone, Debug, PartialEq)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD` when parseable, else as written.
    pub date: String,
    pub summary: String,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub category: Vec<String>,
    pub order: f64,
}

pub struct NewsSchema;

const ALIASES: AliasTable = &[
    ("id", &["identifier", "key", "slug", "아이디"]),
    ("title", &["headline", "subject", "name", "제목"]),
    (
        "date",
        &["published", "posted", "created_at", "created at", "createdat", "날짜", "작성일", "게시일"],
    ),
    ("summary", &["description", "body", "content", "text", "excerpt", "요약", "내용"]),
    ("link", &["url", "more", "source", "링크"]),
    ("image", &["img", "thumbnail", "photo", "이미지", "사진"]),
    ("tags", &["tag", "keywords", "태그", "키워드"]),
    ("category", &["categories", "type", "kind", "분류", "구분"]),
    ("order", &["sort", "rank", "priority", "pinned", "순서", "정렬"]),
];

const CATEGORIES: CategorySpec = CategorySpec {
    allowed: &["announcement", "award", "event", "publication"],
    aliases: &[
        ("notice", "announcement"),
        ("news", "announcement"),
        ("공지", "announcement"),
        ("prize", "award"),
        ("awards", "award"),
        ("수상", "award"),
        ("seminar", "event"),
        ("talk", "event"),
        ("workshop", "event"),
        ("conference", "event"),
        ("세미나", "event"),
        ("행사", "event"),
        ("paper", "publication"),
        ("publications", "publication"),
        ("논문", "publication"),
    ],
};

impl Schema for NewsSchema {
    type Record = NewsItem;

    const KIND: ContentKind = ContentKind::News;
    const ALIASES: AliasTable = ALIASES;
    const CATEGORIES: CategorySpec = CATEGORIES;
    const COLUMNS: &'static [&'static str] = &["Date", "Title", "Category", "Summary", "Link"];

    fn from_row(row: &Row<'_>) -> Option<NewsItem> {
        let (id, title) = required(row, "id", "title")?;
        Some(NewsItem {
            id: s!(id),
            title: s!(title),
            date: fields::normalize_date(row.get("date")),
            summary: s!(row.get("summary")),
            link: fields::http_url(row.get("link")),
            image: fields::image_url(row.get("image")),
            tags: fields::split_list(row.get("tags")),
            category: CATEGORIES.normalize(row.get("category")),
            order: fields::parse_order(row.get("order")),
        })
    }

    fn tie_break(a: &NewsItem, b: &NewsItem) -> Ordering {
        let da = fields::parse_date(&a.date);
        let db = fields::parse_date(&b.date);
        cmp_desc_opt(&da, &db).then_with(|| cmp_label(&a.title, &b.title))
    }
}

impl Record for NewsItem {
    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.title }
    fn order(&self) -> f64 { self.order }
    fn categories(&self) -> &[String] { &self.category }

    fn search_text(&self) -> String {
        let tags = self.tags.join(" ");
        join_nonblank([
            self.title.as_str(),
            self.summary.as_str(),
            tags.as_str(),
            self.date.as_str(),
        ])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.title.clone(),
            join_list(&self.category),
            self.summary.clone(),
            self.link.clone().unwrap_or_default(),
        ]
    }
}
