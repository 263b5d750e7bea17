//! Decoding of character page responses.
//!
//! The server answers a page request with either
//! `{ "info": {..}, "results": [..] }` or, when nothing matches the filters,
//! `{ "error": "There is nothing here" }`. The second form is a valid empty
//! result, not a failure.

use crate::domain::{CharacterSummary, FetchError, LocationRef, PageResult};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct CharacterPage {
    info: PageInfo,
    results: Vec<ApiCharacter>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    count: u32,
    pages: u32,
}

#[derive(Debug, Deserialize)]
struct ApiCharacter {
    id: u32,
    name: String,
    status: String,
    species: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    gender: String,
    origin: LocationRef,
    location: LocationRef,
    image: String,
    #[serde(default)]
    episode: Vec<String>,
}

impl From<ApiCharacter> for CharacterSummary {
    fn from(c: ApiCharacter) -> Self {
        Self {
            id: c.id,
            name: c.name,
            status: c.status,
            species: c.species,
            image_url: c.image,
            origin: c.origin,
            location: c.location,
            kind: c.kind,
            gender: c.gender,
            episode_urls: c.episode,
        }
    }
}

/// True for the server's "no results" object: an `error` field and no `results`.
fn is_empty_sentinel(value: &Value) -> bool {
    value.get("error").is_some() && value.get("results").is_none()
}

/// Decodes one HTTP response into a [`PageResult`].
///
/// `requested_page` becomes the result's `current_page`, clamped so the
/// page invariant holds even if the server reports fewer pages than asked for.
///
/// # Errors
///
/// - [`FetchError::Transport`] for a non-2xx status, except a 404 whose body
///   is the empty-result sentinel
/// - [`FetchError::Decode`] when the body is not JSON, or is JSON with
///   neither the page shape nor the sentinel shape
pub fn decode_page(status: u16, body: &[u8], requested_page: u32) -> Result<PageResult, FetchError> {
    let success = (200..300).contains(&status);

    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) if !success => return Err(FetchError::status(status, body)),
        Err(e) => return Err(e.into()),
    };

    if is_empty_sentinel(&value) && (success || status == 404) {
        tracing::debug!(status, "empty result sentinel");
        return Ok(PageResult::empty());
    }

    if !success {
        return Err(FetchError::status(status, body));
    }

    let page: CharacterPage = serde_json::from_value(value)?;
    let total_pages = page.info.pages;
    let current_page = requested_page.clamp(1, total_pages.max(1));

    tracing::debug!(
        total_pages,
        current_page,
        item_count = page.results.len(),
        "decoded character page"
    );

    Ok(PageResult {
        items: page.results.into_iter().map(CharacterSummary::from).collect(),
        total_pages,
        current_page,
        total_count: page.info.count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICK_PAGE: &str = r#"{
        "info": { "count": 2, "pages": 1, "next": null, "prev": null },
        "results": [
            {
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
                "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
                "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                "episode": ["https://rickandmortyapi.com/api/episode/1"],
                "url": "https://rickandmortyapi.com/api/character/1",
                "created": "2017-11-04T18:48:46.250Z"
            },
            {
                "id": 8,
                "name": "Adjudicator Rick",
                "status": "Dead",
                "species": "Human",
                "origin": { "name": "unknown", "url": "" },
                "location": { "name": "Citadel of Ricks" },
                "image": "https://rickandmortyapi.com/api/character/avatar/8.jpeg"
            }
        ]
    }"#;

    #[test]
    fn decodes_page_shape() {
        let page = decode_page(200, RICK_PAGE.as_bytes(), 1).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.current_page, 1);

        let rick = &page.items[0];
        assert_eq!(rick.name, "Rick Sanchez");
        assert_eq!(rick.origin.name, "Earth (C-137)");
        assert_eq!(rick.image_url, "https://rickandmortyapi.com/api/character/avatar/1.jpeg");
        assert_eq!(rick.episode_count(), 1);
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let page = decode_page(200, RICK_PAGE.as_bytes(), 1).unwrap();
        let adjudicator = &page.items[1];
        assert_eq!(adjudicator.kind, "");
        assert_eq!(adjudicator.gender, "");
        assert_eq!(adjudicator.location.url, "");
        assert!(adjudicator.episode_urls.is_empty());
    }

    #[test]
    fn sentinel_is_an_empty_page() {
        let body = br#"{"error":"There is nothing here"}"#;
        assert_eq!(decode_page(200, body, 1), Ok(PageResult::empty()));
        assert_eq!(decode_page(404, body, 1), Ok(PageResult::empty()));
    }

    #[test]
    fn sentinel_on_server_error_is_still_an_error() {
        let body = br#"{"error":"Internal"}"#;
        assert!(matches!(
            decode_page(500, body, 1),
            Err(FetchError::Transport { status: Some(500), .. })
        ));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        assert!(matches!(decode_page(200, b"<html>", 1), Err(FetchError::Decode(_))));
    }

    #[test]
    fn non_json_error_status_is_a_transport_error() {
        assert!(matches!(
            decode_page(502, b"Bad Gateway", 1),
            Err(FetchError::Transport { status: Some(502), .. })
        ));
    }

    #[test]
    fn json_without_page_shape_is_a_decode_error() {
        assert!(matches!(decode_page(200, br#"{"info":{}}"#, 1), Err(FetchError::Decode(_))));
        assert!(matches!(decode_page(200, b"[]", 1), Err(FetchError::Decode(_))));
    }

    #[test]
    fn current_page_is_clamped_to_reported_pages() {
        let page = decode_page(200, RICK_PAGE.as_bytes(), 7).unwrap();
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn decoding_is_deterministic() {
        let a = decode_page(200, RICK_PAGE.as_bytes(), 1);
        let b = decode_page(200, RICK_PAGE.as_bytes(), 1);
        assert_eq!(a, b);
    }
}
