// tests/reload_cancellation.rs
//
// Overlapping loads: only the most recently started one may land, no matter
// in which order the workers finish.

use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use lab_feeds::config::options::{ContentKind, FeedConfig};
use lab_feeds::core::net::{FeedSource, StaticSource};
use lab_feeds::errors::FeedResult;
use lab_feeds::feed::{self, FeedState, LoadOutcome, LoadTicket};
use lab_feeds::specs::{NewsItem, NewsSchema, Record};

/// Serves `body` only after the test releases it.
struct GatedSource {
    body: String,
    gate: Mutex<mpsc::Receiver<()>>,
}

impl FeedSource for GatedSource {
    fn fetch(&self, _location: &str) -> FeedResult<String> {
        if let Ok(rx) = self.gate.lock() {
            let _ = rx.recv();
        }
        Ok(self.body.clone())
    }
}

fn config() -> FeedConfig {
    FeedConfig::new().with_url(ContentKind::News, "https://example.org/news.csv")
}

fn ids(state: &FeedState<NewsItem>) -> Vec<String> {
    state.records().iter().map(|r| r.id().to_string()).collect()
}

#[test]
fn second_load_wins_even_when_first_finishes_last() {
    let mut state: FeedState<NewsItem> = FeedState::new();
    let (tx, rx) = mpsc::channel::<(LoadTicket, LoadOutcome<NewsItem>)>();

    // First load blocks until released.
    let (release, gate) = mpsc::channel();
    let slow = Arc::new(GatedSource { body: "id,title\nold,Old\n".into(), gate: Mutex::new(gate) });
    let t1 = state.begin_load();
    let h1 = {
        let tx = tx.clone();
        let slow = slow.clone();
        thread::spawn(move || {
            let out = feed::load::<NewsSchema>(&config(), slow.as_ref(), None);
            tx.send((t1, out)).unwrap();
        })
    };

    // Second load completes immediately.
    let t2 = state.begin_load();
    let h2 = {
        let tx = tx.clone();
        thread::spawn(move || {
            let out = feed::load::<NewsSchema>(&config(), &StaticSource::ok("id,title\nnew,New\n"), None);
            tx.send((t2, out)).unwrap();
        })
    };
    h2.join().unwrap();

    let (ticket, outcome) = rx.recv().unwrap();
    assert_eq!(ticket, t2);
    assert!(state.finish(ticket, outcome));
    assert_eq!(ids(&state), vec!["new"]);

    // Now let the first one resolve; it must be discarded.
    release.send(()).unwrap();
    h1.join().unwrap();
    let (ticket, outcome) = rx.recv().unwrap();
    assert_eq!(ticket, t1);
    assert!(!state.finish(ticket, outcome));
    assert_eq!(ids(&state), vec!["new"]);
    assert!(!state.is_loading());
}

#[test]
fn stale_failure_does_not_clear_newer_records() {
    let mut state: FeedState<NewsItem> = FeedState::new();

    let t1 = state.begin_load();
    let t2 = state.begin_load();
    assert!(!state.is_current(t1));

    let good = feed::load::<NewsSchema>(&config(), &StaticSource::ok("id,title\nn,N\n"), None);
    assert!(state.finish(t2, good));

    let bad = feed::load::<NewsSchema>(&config(), &StaticSource::status(500), None);
    assert!(!state.finish(t1, bad));
    assert_eq!(ids(&state), vec!["n"]);
    assert!(state.error().is_none());
}

#[test]
fn cancel_on_teardown_discards_everything_outstanding() {
    let mut state: FeedState<NewsItem> = FeedState::new();
    let t = state.begin_load();
    assert!(state.is_loading());

    state.cancel();
    assert!(!state.is_loading());

    let late = feed::load::<NewsSchema>(&config(), &StaticSource::ok("id,title\nx,X\n"), None);
    assert!(!state.finish(t, late));
    assert!(state.records().is_empty());

    // A fresh load after teardown works normally.
    let t = state.begin_load();
    let next = feed::load::<NewsSchema>(&config(), &StaticSource::ok("id,title\ny,Y\n"), None);
    assert!(state.finish(t, next));
    assert_eq!(ids(&state), vec!["y"]);
}
