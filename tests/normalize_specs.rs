// tests/normalize_specs.rs
//
// Text → records through the shared pipeline, one schema at a time.

use lab_feeds::config::consts::ORDER_SENTINEL;
use lab_feeds::core::fields::{self, FileLink};
use lab_feeds::feed::load_text;
use lab_feeds::specs::{
    NewsSchema, PeopleSchema, ProjectsSchema, PublicationsSchema, Record, ResourcesSchema, Schema,
};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

fn ids<R: Record>(records: &[R]) -> Vec<&str> {
    records.iter().map(|r| r.id()).collect()
}

#[test]
fn rows_need_id_and_label() {
    let text = "id,title\n a , A \n,B\nc,\n  ,  \nd,D\n";
    let loaded = load_text::<ProjectsSchema>(text).unwrap();
    assert_eq!(ids(&loaded.records), vec!["a", "d"]);
    assert_eq!(loaded.records[0].title, "A");
    assert_eq!(loaded.diagnostics.dropped, 2);
}

#[test]
fn resources_fixture_end_to_end() {
    let loaded = load_text::<ResourcesSchema>(&fixture("resources.csv")).unwrap();
    let recs = &loaded.records;

    // r2 has order 1; the rest share the sentinel and fall back to newest first.
    assert_eq!(ids(recs), vec!["r2", "r1", "r4", "r5"]);

    let r1 = &recs[1];
    assert_eq!(r1.categories, vec!["python"]);
    assert_eq!(r1.tags, vec!["python", "numpy"]);
    assert_eq!(r1.created_at, "2024-03-05");
    assert_eq!(
        r1.files,
        vec![
            FileLink { name: "Notebook".into(), url: "https://lab.example/np.ipynb".into() },
            FileLink { name: "File".into(), url: "https://lab.example/np.pdf".into() },
        ]
    );

    assert_eq!(recs[0].categories, vec!["article", "lecture"]);
    assert_eq!(recs[2].categories, vec!["lecture"]);
    assert!(recs[2].files.is_empty(), "non-http file links are dropped");
    assert_eq!(recs[2].created_at, "2023-03-05");

    // unknown category token, unparseable date kept verbatim
    assert!(recs[3].categories.is_empty());
    assert_eq!(recs[3].created_at, "not a date");

    assert_eq!(loaded.diagnostics.dropped, 2);
    assert_eq!(loaded.diagnostics.fields[0], "아이디");
}

#[test]
fn file_pairs_and_default_label() {
    let files = fields::parse_files("Slides::https://x/a.pdf|https://x/b.pdf");
    assert_eq!(
        files,
        vec![
            FileLink { name: "Slides".into(), url: "https://x/a.pdf".into() },
            FileLink { name: "File".into(), url: "https://x/b.pdf".into() },
        ]
    );
}

#[test]
fn category_closure_and_idempotent_aliases() {
    let cats = ResourcesSchema::CATEGORIES;
    assert!(cats.normalize("homework").is_empty());
    assert_eq!(cats.normalize("tool"), vec!["python"]);

    let once = cats.normalize("Tool, PY, paper, slides, papers");
    assert_eq!(once, vec!["python", "article", "lecture"]);
    let twice = cats.normalize(&once.join(","));
    assert_eq!(once, twice);
}

#[test]
fn missing_order_sorts_last() {
    let text = "id,title,order\nz,Zeta,\ny,Yank,abc\nb,Beta,10\na,Alpha,-2\nn,Nan,NaN\n";
    let loaded = load_text::<ProjectsSchema>(text).unwrap();
    assert_eq!(ids(&loaded.records), vec!["a", "b", "n", "y", "z"]);
    assert_eq!(loaded.records[2].order, ORDER_SENTINEL);
}

#[test]
fn publications_newest_year_first_after_order() {
    let text = "\
ID;Title;Authors;Year;Type;DOI
p1;Old;Kim, J.; 2019;journal;10.1/old
p2;New;Lee;2023;Proceedings;
p3;Undated;Park;;arXiv;
p4;Also new;Choi;2023;book chapter;
";
    let loaded = load_text::<PublicationsSchema>(text).unwrap();
    let recs = &loaded.records;
    assert_eq!(ids(recs), vec!["p4", "p2", "p1", "p3"]);
    assert_eq!(recs[1].kind, vec!["conference"]);
    assert_eq!(recs[0].kind, vec!["book"]);
    assert_eq!(recs[3].kind, vec!["preprint"]);
    assert_eq!(recs[2].doi.as_deref(), Some("https://doi.org/10.1/old"));
    assert_eq!(recs[2].authors, vec!["Kim", "J."]);
}

#[test]
fn people_tab_separated_with_bom() {
    let text = "\u{feff}ID\tName\tPosition\tGroup\tOrder\n\
                s1\tMin Park\tPhD candidate\tphd\t\n\
                f1\tDr. Han\tProfessor\tprofessor\t0\n\
                a1\tJo\t\tAlumnus, student\t\n";
    let loaded = load_text::<PeopleSchema>(text).unwrap();
    let recs = &loaded.records;
    assert_eq!(ids(recs), vec!["f1", "a1", "s1"]);
    assert_eq!(recs[0].groups, vec!["faculty"]);
    assert_eq!(recs[1].groups, vec!["alumni", "student"]);
    assert_eq!(recs[2].role, "PhD candidate");
    assert_eq!(loaded.diagnostics.fields[0], "id");
}

#[test]
fn news_dates_and_categories() {
    let text = "title,id,date,category,summary\n\
                Best paper,n1,\"May 3, 2024\",prize,Won\n\
                Seminar,n2,2024-06-10,talk,\n\
                Lab opens,n3,,notice,\n";
    let loaded = load_text::<NewsSchema>(text).unwrap();
    let recs = &loaded.records;
    assert_eq!(ids(recs), vec!["n2", "n1", "n3"]);
    assert_eq!(recs[1].date, "2024-05-03");
    assert_eq!(recs[1].category, vec!["award"]);
    assert_eq!(recs[0].category, vec!["event"]);
    assert_eq!(recs[2].category, vec!["announcement"]);
}

#[test]
fn unknown_headers_are_ignored_and_first_duplicate_wins() {
    let text = "id,title,colour,title\nx,First,red,Second\n";
    let loaded = load_text::<NewsSchema>(text).unwrap();
    assert_eq!(loaded.records[0].title, "First");
    assert_eq!(loaded.diagnostics.fields, vec!["id", "title", "colour", "title"]);
}
