//! Client-side route resolution.
//!
//! Paths: `/` (home), `/tools` (catalog, optional `?tag=`), `/tools/:slug`
//! (tool page or not-found). Everything else falls back to home.

use crate::registry::{Registry, ToolDescriptor};

pub const CATALOG_PATH: &str = "/tools";
pub const TAG_QUERY_KEY: &str = "tag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    Home,
    Catalog { tag: Option<String> },
    Tool(&'a ToolDescriptor),
    NotFound { slug: String },
}

impl<'a> Route<'a> {
    pub fn resolve(registry: &'a Registry, path: &str, query: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|seg| !seg.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["tools"] => {
                // Unknown categories would filter everything out, so they are dropped.
                let tag = query_param(query, TAG_QUERY_KEY).filter(|tag| registry.has_tag(tag));
                Route::Catalog { tag }
            }
            ["tools", raw_slug] => {
                let slug = urlencoding::decode(raw_slug)
                    .map(|cow| cow.into_owned())
                    .unwrap_or_else(|_| (*raw_slug).to_string());
                match registry.find_by_slug(&slug) {
                    Some(tool) => Route::Tool(tool),
                    None => {
                        log::info!("no tool registered for slug {slug:?}");
                        Route::NotFound { slug }
                    }
                }
            }
            _ => Route::Home,
        }
    }

    /// Canonical path for this route, used by the navigation links.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Catalog { tag } => catalog_path(tag.as_deref()),
            Route::Tool(tool) => tool.path(),
            Route::NotFound { slug } => format!("{CATALOG_PATH}/{}", urlencoding::encode(slug)),
        }
    }
}

pub fn catalog_path(tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!(
            "{CATALOG_PATH}?{TAG_QUERY_KEY}={}",
            urlencoding::encode(tag)
        ),
        None => CATALOG_PATH.to_string(),
    }
}

/// First value for `key` in a `application/x-www-form-urlencoded` query.
///
/// Accepts the query with or without its leading `?`; `+` decodes to a space.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode_component(name)? != key {
                return None;
            }
            decode_component(value)
        })
        .filter(|value| !value.is_empty())
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|cow| cow.into_owned())
        .ok()
}
