// tests/filter_view.rs
//
// Category + query composition over normalized records.

use lab_feeds::feed::load_text;
use lab_feeds::specs::{Publication, PublicationsSchema, Record, Resource, ResourcesSchema, Schema};
use lab_feeds::view::{CategorySelector, Filter, category_tabs};

const RESOURCES: &str = "\
id,title,description,categories,tags,files,createdAt
r1,NumPy basics,Arrays and broadcasting,python,numpy,Notebook::https://x/np.ipynb,2024-03-01
r2,Attention paper notes,,article,nlp; transformers,,2024-02-01
r3,Lecture 1: Optimization,Gradient descent,\"lecture, python\",optim,Slides::https://x/l1.pdf,2024-01-01
r4,Misc links,,,,,
";

fn resources() -> Vec<Resource> {
    load_text::<ResourcesSchema>(RESOURCES).unwrap().records
}

fn titles(shown: &[&Resource]) -> Vec<String> {
    shown.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn combined_filter_is_category_and_query() {
    let recs = resources();
    let queries = ["", "  ", "PYTHON", "slides", "nlp", "2024-02", "zzz"];
    let cats = [
        CategorySelector::All,
        CategorySelector::Key("python".into()),
        CategorySelector::Key("article".into()),
        CategorySelector::Key("lecture".into()),
    ];

    for cat in &cats {
        for q in queries {
            let f = Filter::new(cat.clone(), q);
            let view = f.apply(&recs);
            let expected: Vec<&Resource> = recs
                .iter()
                .filter(|r| f.matches_category(*r) && f.matches_query(*r))
                .collect();
            assert_eq!(view.shown, expected, "cat={cat} q={q:?}");
            assert_eq!(view.total, recs.len());
        }
    }
}

#[test]
fn blank_query_passes_everything_and_keeps_base_order() {
    let recs = resources();
    let view = Filter::new(CategorySelector::All, "   ").apply(&recs);
    assert_eq!(view.shown.len(), recs.len());
    let base: Vec<&str> = recs.iter().map(|r| r.id()).collect();
    let shown: Vec<&str> = view.shown.iter().map(|r| r.id()).collect();
    assert_eq!(shown, base);
}

#[test]
fn category_any_match_and_case_insensitive_search() {
    let recs = resources();

    let python = Filter::new(CategorySelector::Key("python".into()), "").apply(&recs);
    assert_eq!(titles(&python.shown), vec!["NumPy basics", "Lecture 1: Optimization"]);

    // file names are searchable
    let slides = Filter::new(CategorySelector::All, "SLIDES").apply(&recs);
    assert_eq!(titles(&slides.shown), vec!["Lecture 1: Optimization"]);

    let none = Filter::new(CategorySelector::Key("article".into()), "numpy").apply(&recs);
    assert!(none.is_empty());
    assert_eq!(none.summary(), "Showing 0 of 4");
}

#[test]
fn selector_parsing_honors_aliases() {
    let cats = PublicationsSchema::CATEGORIES;
    assert_eq!(CategorySelector::parse("", &cats), Some(CategorySelector::All));
    assert_eq!(CategorySelector::parse("ALL", &cats), Some(CategorySelector::All));
    assert_eq!(CategorySelector::parse("arxiv", &cats), Some(CategorySelector::Key("preprint".into())));
    assert_eq!(CategorySelector::parse("poster", &cats), None);

    let tabs = category_tabs(&cats);
    assert_eq!(tabs.len(), 5);
    assert_eq!(tabs[0], CategorySelector::All);
}

#[test]
fn view_rows_follow_schema_columns() {
    let text = "id,title,year,authors\np1,Grippers,2022,Kim; Lee\n";
    let recs: Vec<Publication> = load_text::<PublicationsSchema>(text).unwrap().records;
    let view = Filter::default().apply(&recs);
    let rows = view.rows();
    assert_eq!(rows[0].len(), PublicationsSchema::COLUMNS.len());
    assert_eq!(rows[0][0], "2022");
    assert_eq!(rows[0][2], "Kim, Lee");
}
