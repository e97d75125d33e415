// src/specs/people.rs
//! Lab members. One row per person; `group` drives the category tabs
//! (faculty / researcher / student / alumni).

use std::cmp::Ordering;

use crate::config::options::ContentKind;
use crate::core::fields::{self, CategorySpec};
use crate::core::headers::{AliasTable, Row};
use crate::core::sanitize::join_nonblank;

use super::{Record, Schema, cmp_label, join_list, required};

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub role: String,
    pub groups: Vec<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub interests: Vec<String>,
    pub homepage: Option<String>,
    pub order: f64,
}

pub struct PeopleSchema;

const ALIASES: AliasTable = &[
    ("id", &["identifier", "key", "slug", "아이디"]),
    ("name", &["full name", "fullname", "member", "이름", "성명"]),
    ("role", &["position", "title", "job title", "직책", "직위"]),
    ("group", &["groups", "category", "categories", "type", "status", "구분", "분류"]),
    ("email", &["e-mail", "mail", "email address", "이메일"]),
    ("photo", &["image", "img", "picture", "photo url", "사진", "이미지"]),
    ("interests", &["research interests", "interest", "keywords", "tags", "관심분야", "연구분야"]),
    ("homepage", &["website", "url", "link", "homepage url", "홈페이지", "링크"]),
    ("order", &["sort", "rank", "priority", "순서", "정렬"]),
];

const CATEGORIES: CategorySpec = CategorySpec {
    allowed: &["faculty", "researcher", "student", "alumni"],
    aliases: &[
        ("professor", "faculty"),
        ("pi", "faculty"),
        ("교수", "faculty"),
        ("postdoc", "researcher"),
        ("staff", "researcher"),
        ("연구원", "researcher"),
        ("phd", "student"),
        ("ms", "student"),
        ("master", "student"),
        ("masters", "student"),
        ("undergrad", "student"),
        ("undergraduate", "student"),
        ("students", "student"),
        ("학생", "student"),
        ("대학원생", "student"),
        ("alum", "alumni"),
        ("alumnus", "alumni"),
        ("alumna", "alumni"),
        ("graduate", "alumni"),
        ("졸업생", "alumni"),
    ],
};

fn email(raw: &str) -> Option<String> {
    let s = raw.trim().trim_start_matches("mailto:");
    (s.contains('@') && !s.contains(char::is_whitespace)).then(|| s!(s))
}

impl Schema for PeopleSchema {
    type Record = Person;

    const KIND: ContentKind = ContentKind::People;
    const ALIASES: AliasTable = ALIASES;
    const CATEGORIES: CategorySpec = CATEGORIES;
    const COLUMNS: &'static [&'static str] =
        &["Name", "Group", "Role", "Email", "Interests", "Homepage"];

    fn from_row(row: &Row<'_>) -> Option<Person> {
        let (id, name) = required(row, "id", "name")?;
        Some(Person {
            id: s!(id),
            name: s!(name),
            role: s!(row.get("role")),
            groups: CATEGORIES.normalize(row.get("group")),
            email: email(row.get("email")),
            photo: fields::image_url(row.get("photo")),
            interests: fields::split_list(row.get("interests")),
            homepage: fields::http_url(row.get("homepage")),
            order: fields::parse_order(row.get("order")),
        })
    }

    fn tie_break(a: &Person, b: &Person) -> Ordering {
        cmp_label(&a.name, &b.name)
    }
}

impl Record for Person {
    fn id(&self) -> &str { &self.id }
    fn title(&self) -> &str { &self.name }
    fn order(&self) -> f64 { self.order }
    fn categories(&self) -> &[String] { &self.groups }

    fn search_text(&self) -> String {
        let interests = self.interests.join(" ");
        let groups = self.groups.join(" ");
        join_nonblank([
            self.name.as_str(),
            self.role.as_str(),
            groups.as_str(),
            interests.as_str(),
            self.email.as_deref().unwrap_or(""),
        ])
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            join_list(&self.groups),
            self.role.clone(),
            self.email.clone().unwrap_or_default(),
            join_list(&self.interests),
            self.homepage.clone().unwrap_or_default(),
        ]
    }
}
