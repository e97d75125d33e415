// src/gui/router.rs
use crate::config::options::ContentKind::{self, *};
use crate::specs::{NewsSchema, PeopleSchema, ProjectsSchema, PublicationsSchema, ResourcesSchema};

use super::pages::{FeedPage, Page};

/// One page per content kind, in tab order.
pub fn build_pages() -> Vec<Box<dyn Page>> {
    ContentKind::ALL.iter().map(|k| page_for(*k)).collect()
}

pub fn page_for(kind: ContentKind) -> Box<dyn Page> {
    match kind {
        People       => Box::new(FeedPage::<PeopleSchema>::new()),
        Projects     => Box::new(FeedPage::<ProjectsSchema>::new()),
        Publications => Box::new(FeedPage::<PublicationsSchema>::new()),
        Resources    => Box::new(FeedPage::<ResourcesSchema>::new()),
        News         => Box::new(FeedPage::<NewsSchema>::new()),
    }
}

pub fn index_of(kind: ContentKind) -> usize {
    ContentKind::ALL.iter().position(|k| *k == kind).unwrap_or(0)
}
