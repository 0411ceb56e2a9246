//! CORS layer built from the server configuration.
//!
//! Cross-origin policy is explicit configuration, not framework-global
//! state: each allow-list (origins, headers, methods) is a comma-separated
//! environment value, and an unset or unparseable list falls back to the
//! wildcard so a development setup needs no configuration at all.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::config::Config;

pub fn cors_layer(cfg: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(cfg.cors_allowed_origins.as_deref()))
        .allow_headers(allow_headers(cfg.cors_allowed_headers.as_deref()))
        .allow_methods(allow_methods(cfg.cors_allowed_methods.as_deref()))
}

fn allow_origin(list: Option<&str>) -> AllowOrigin {
    match parse_list::<HeaderValue>(list) {
        Some(origins) => AllowOrigin::list(origins),
        None => AllowOrigin::from(Any),
    }
}

fn allow_headers(list: Option<&str>) -> AllowHeaders {
    match parse_list::<HeaderName>(list) {
        Some(headers) => AllowHeaders::list(headers),
        None => AllowHeaders::from(Any),
    }
}

fn allow_methods(list: Option<&str>) -> AllowMethods {
    match parse_list::<Method>(list) {
        Some(methods) => AllowMethods::list(methods),
        None => AllowMethods::from(Any),
    }
}

/// Parse a comma-separated allow-list, dropping entries that fail to parse.
/// `None` (or a list with no valid entries) means "no restriction".
fn parse_list<T: std::str::FromStr>(list: Option<&str>) -> Option<Vec<T>> {
    let parsed: Vec<T> = list?
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    if parsed.is_empty() { None } else { Some(parsed) }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unset_lists_parse_to_wildcard() {
        assert!(parse_list::<HeaderValue>(None).is_none());
    }

    #[test]
    fn origins_parse_from_comma_separated_value() {
        let origins =
            parse_list::<HeaderValue>(Some("http://localhost:3000, https://trivia.example.com"))
                .unwrap();
        assert_eq!(origins.len(), 2);
    }

    #[test]
    fn garbage_only_list_falls_back_to_wildcard() {
        assert!(parse_list::<Method>(Some("NOT A METHOD,")).is_none());
    }

    #[test]
    fn methods_parse() {
        let methods = parse_list::<Method>(Some("GET,POST,DELETE")).unwrap();
        assert_eq!(methods, vec![Method::GET, Method::POST, Method::DELETE]);
    }
}
