//! Zellij plugin entry point.
//!
//! A thin shim between Zellij and the `character_catalog` library: it maps
//! host events to library [`Event`]s, performs the returned [`Action`]s with
//! host calls, and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, start tracing, build state, request `WebAccess`
//! 2. **Permission**: once granted, page 1 is requested
//! 3. **Update**: keys and web responses go through `handle_event`
//! 4. **Render**: the library draws the current view model
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: move selection
//! - `h`/`Left`, `l`/`Right`: previous/next page
//! - `g`/`G`: first/last page
//! - `p`: go to page
//! - `/`: edit filters
//! - `s`: cycle status filter
//! - `c`: clear filters
//! - `r`: reload
//! - `q`/`Esc`: close
//!
//! Filter editing:
//! - `Tab`/`Shift+Tab`: next/previous field
//! - typing edits the focused field and re-queries
//! - `Enter`/`Esc`: back to normal mode

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use character_catalog::api::{Endpoint, HttpTransport, PageFetcher};
use character_catalog::app::PageNav;
use character_catalog::{handle_event, initialize, Action, AppState, Config, Event, InputMode};

register_plugin!(State);

/// Sends requests through Zellij's `web_request`; responses come back as
/// `WebRequestResult` events carrying the same context map.
struct ZellijTransport;

impl HttpTransport for ZellijTransport {
    fn get(&self, url: &str, context: BTreeMap<String, String>) {
        web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
    }
}

struct State {
    app: AppState,
    fetcher: PageFetcher,
}

impl Default for State {
    fn default() -> Self {
        let config = Config::default();
        Self {
            app: AppState::new(config.filters.clone(), config.theme()),
            fetcher: PageFetcher::new(Endpoint::default(), Box::new(ZellijTransport)),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        character_catalog::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(base_url = %config.base_url, filters = ?config.filters, "parsed configuration");

        let (app, endpoint) = initialize(&config).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "invalid base_url, using the default endpoint");
            (AppState::new(config.filters.clone(), config.theme()), Endpoint::default())
        });
        self.app = app;
        self.fetcher = PageFetcher::new(endpoint, Box::new(ZellijTransport));

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for web access");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match PageFetcher::complete(status, &body, &context) {
                    Some(outcome) => Event::PageFetched(outcome),
                    None => {
                        tracing::debug!(status, "ignoring web response without a catalog context");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        character_catalog::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key),
            InputMode::Editing(_) => Self::map_editing_key(key),
            InputMode::GotoPage => Self::map_goto_key(key),
        }
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Left | BareKey::Char('h') => Event::Navigate(PageNav::Previous),
            BareKey::Right | BareKey::Char('l') => Event::Navigate(PageNav::Next),
            BareKey::Home | BareKey::Char('g') => Event::Navigate(PageNav::First),
            BareKey::End | BareKey::Char('G') => Event::Navigate(PageNav::Last),
            BareKey::Char('p') => Event::GotoPrompt,
            BareKey::Char('/') => Event::EditFilters,
            BareKey::Char('s') => Event::CycleStatus,
            BareKey::Char('c') => Event::ClearFilters,
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_editing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PreviousField,
            BareKey::Tab => Event::NextField,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::ExitEdit,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_goto_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::ExitEdit,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if c.is_ascii_digit() => Event::Char(c),
            _ => return None,
        })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(ticket) => {
                self.fetcher.fetch(ticket);
            }
        }
    }
}
