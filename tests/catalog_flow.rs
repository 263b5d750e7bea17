//! End-to-end flows through `handle_event` and `PageFetcher` with a
//! recording transport standing in for Zellij's `web_request`.

use character_catalog::api::{Endpoint, HttpTransport, PageFetcher};
use character_catalog::app::{PageNav, Phase};
use character_catalog::domain::{FetchError, FilterSet, StatusFilter};
use character_catalog::ui::EmptyKind;
use character_catalog::{handle_event, Action, AppState, Event, Theme};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

type Sent = Arc<RwLock<Vec<(String, BTreeMap<String, String>)>>>;

#[derive(Clone, Default)]
struct RecordingTransport {
    sent: Sent,
}

impl HttpTransport for RecordingTransport {
    fn get(&self, url: &str, context: BTreeMap<String, String>) {
        self.sent.write().unwrap().push((url.to_string(), context));
    }
}

struct Harness {
    state: AppState,
    fetcher: PageFetcher,
    sent: Sent,
}

impl Harness {
    fn new(filters: FilterSet) -> Self {
        let transport = RecordingTransport::default();
        let sent = transport.sent.clone();
        Self {
            state: AppState::new(filters, Theme::default()),
            fetcher: PageFetcher::new(Endpoint::default(), Box::new(transport)),
            sent,
        }
    }

    fn started(filters: FilterSet) -> Self {
        let mut harness = Self::new(filters);
        harness.dispatch(Event::PermissionsResult { granted: true });
        harness
    }

    fn dispatch(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in &actions {
            if let Action::Fetch(ticket) = action {
                self.fetcher.fetch(ticket);
            }
        }
        render
    }

    fn sent_urls(&self) -> Vec<String> {
        self.sent.read().unwrap().iter().map(|(url, _)| url.clone()).collect()
    }

    /// Delivers a response to the `index`th request sent.
    fn respond(&mut self, index: usize, status: u16, body: &str) -> bool {
        let context = self.sent.read().unwrap()[index].1.clone();
        let outcome = PageFetcher::complete(status, body.as_bytes(), &context)
            .expect("catalog requests carry a catalog context");
        self.dispatch(Event::PageFetched(outcome))
    }

    fn names(&self) -> Vec<&str> {
        self.state.items().iter().map(|c| c.name.as_str()).collect()
    }
}

fn page_body(count: u32, pages: u32, names: &[&str]) -> String {
    let results: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "id": i + 1,
                "name": name,
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "origin": { "name": "Earth (C-137)", "url": "" },
                "location": { "name": "Citadel of Ricks", "url": "" },
                "image": format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", i + 1),
                "episode": []
            })
        })
        .collect();

    json!({
        "info": { "count": count, "pages": pages, "next": null, "prev": null },
        "results": results
    })
    .to_string()
}

#[test]
fn nothing_is_requested_before_web_access_is_granted() {
    let mut harness = Harness::new(FilterSet::default());
    assert!(!harness.dispatch(Event::Navigate(PageNav::Next)));
    assert!(harness.sent_urls().is_empty());

    harness.dispatch(Event::PermissionsResult { granted: true });
    assert_eq!(
        harness.sent_urls(),
        vec!["https://rickandmortyapi.com/api/character?page=1".to_string()]
    );
}

#[test]
fn name_filter_shows_matching_characters() {
    let mut harness = Harness::started(FilterSet::default().with_name("rick"));

    assert_eq!(
        harness.sent_urls(),
        vec!["https://rickandmortyapi.com/api/character?page=1&name=rick".to_string()]
    );

    harness.respond(0, 200, &page_body(2, 1, &["Rick Sanchez", "Adjudicator Rick"]));

    assert_eq!(harness.names(), ["Rick Sanchez", "Adjudicator Rick"]);
    let vm = harness.state.compute_viewmodel(40, 120);
    assert_eq!(vm.pagination.current_page, 1);
    assert_eq!(vm.pagination.total_pages, 1);
    assert!(!vm.pagination.next_enabled);
    assert!(vm.empty_state.is_none());
}

#[test]
fn no_results_sentinel_renders_an_empty_catalog() {
    let mut harness = Harness::started(FilterSet::default().with_name("zzzz"));

    harness.respond(0, 404, r#"{"error":"There is nothing here"}"#);

    assert!(matches!(harness.state.pagination.phase(), Phase::Loaded(page) if page.is_empty()));
    let empty = harness.state.compute_viewmodel(40, 120).empty_state.unwrap();
    assert_eq!(empty.kind, EmptyKind::NoResults);
    assert_eq!(empty.message, "No characters found");
}

#[test]
fn status_filter_is_sent_lowercase_from_page_one() {
    let mut harness = Harness::started(FilterSet::default());
    harness.respond(0, 200, &page_body(60, 3, &["Rick Sanchez"]));
    harness.dispatch(Event::Navigate(PageNav::Next));
    harness.respond(1, 200, &page_body(60, 3, &["Summer Smith"]));
    assert_eq!(harness.state.pagination.current_page(), 2);

    harness.dispatch(Event::CycleStatus);

    assert_eq!(harness.state.pagination.filters().status, Some(StatusFilter::Alive));
    assert_eq!(
        harness.sent_urls().last().unwrap(),
        "https://rickandmortyapi.com/api/character?page=1&status=alive"
    );
}

#[test]
fn out_of_range_page_is_a_no_op() {
    let mut harness = Harness::started(FilterSet::default());
    harness.respond(0, 200, &page_body(60, 3, &["Rick Sanchez", "Morty Smith"]));
    let before = harness.state.pagination.phase().clone();

    harness.dispatch(Event::GotoPrompt);
    harness.dispatch(Event::Char('5'));
    harness.dispatch(Event::Submit);

    assert_eq!(harness.sent_urls().len(), 1);
    assert_eq!(harness.state.pagination.phase(), &before);

    harness.dispatch(Event::Navigate(PageNav::Last));
    assert_eq!(
        harness.sent_urls().last().unwrap(),
        "https://rickandmortyapi.com/api/character?page=3"
    );
}

#[test]
fn transport_failure_errors_until_a_reload_succeeds() {
    let mut harness = Harness::started(FilterSet::default());
    harness.respond(0, 200, &page_body(60, 3, &["Rick Sanchez"]));
    harness.dispatch(Event::Navigate(PageNav::Next));

    harness.respond(1, 0, "connection refused");

    match harness.state.pagination.phase() {
        Phase::Errored { page, error, .. } => {
            assert_eq!(*page, 2);
            assert_eq!(
                error,
                &FetchError::Transport {
                    status: None,
                    message: "connection refused".to_string()
                }
            );
        }
        other => panic!("expected Errored, got {other:?}"),
    }
    assert!(harness.state.items().is_empty());
    let empty = harness.state.compute_viewmodel(40, 120).empty_state.unwrap();
    assert_eq!(empty.kind, EmptyKind::Error);

    harness.dispatch(Event::Reload);
    assert_eq!(
        harness.sent_urls().last().unwrap(),
        "https://rickandmortyapi.com/api/character?page=2"
    );
    harness.respond(2, 200, &page_body(60, 3, &["Summer Smith"]));

    assert_eq!(harness.names(), ["Summer Smith"]);
    assert_eq!(harness.state.pagination.current_page(), 2);
}

#[test]
fn superseded_response_is_discarded() {
    let mut harness = Harness::started(FilterSet::default());
    harness.dispatch(Event::EditFilters);
    harness.dispatch(Event::Char('m'));
    assert_eq!(harness.sent_urls().len(), 2);

    assert!(harness.respond(1, 200, &page_body(1, 1, &["Mr. Meeseeks"])));
    assert!(!harness.respond(0, 200, &page_body(826, 42, &["Rick Sanchez"])));

    assert_eq!(harness.names(), ["Mr. Meeseeks"]);
    assert_eq!(harness.state.pagination.known_pages(), Some(1));
}

#[test]
fn denied_permission_shows_an_error_without_requests() {
    let mut harness = Harness::new(FilterSet::default());

    harness.dispatch(Event::PermissionsResult { granted: false });

    assert!(harness.sent_urls().is_empty());
    assert!(matches!(harness.state.pagination.phase(), Phase::Errored { .. }));
}

#[test]
fn foreign_web_responses_are_not_catalog_outcomes() {
    assert!(PageFetcher::complete(200, b"{}", &BTreeMap::new()).is_none());
}
