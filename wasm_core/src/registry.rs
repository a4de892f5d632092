//! The fixed catalog of tools and the queries the landing and index pages run on it.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::error::RegistryError;

/// Which workspace a descriptor opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    JsonFormatter,
    UrlEncoder,
    UuidGenerator,
    Hash,
    Password,
    LoremIpsum,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub icon: Option<&'static str>,
    pub kind: ToolKind,
}

impl ToolDescriptor {
    pub fn path(&self) -> String {
        format!("/tools/{}", self.slug)
    }

    fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

static BUILTIN_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        slug: "json-formatter",
        name: "JSON Formatter",
        description: "Format, pretty-print, and minify JSON payloads for easy sharing.",
        tags: &["data", "formatting", "json"],
        icon: Some("🧩"),
        kind: ToolKind::JsonFormatter,
    },
    ToolDescriptor {
        slug: "url-encoder",
        name: "URL Encoder / Decoder",
        description: "Encode or decode URL query parameters to keep web requests tidy.",
        tags: &["web", "networking", "encoding"],
        icon: Some("🔗"),
        kind: ToolKind::UrlEncoder,
    },
    ToolDescriptor {
        slug: "uuid-generator",
        name: "UUID Generator",
        description: "Generate RFC 4122 UUIDs for identifiers, tracking, or prototyping.",
        tags: &["ids", "randomness", "utilities"],
        icon: Some("✨"),
        kind: ToolKind::UuidGenerator,
    },
    ToolDescriptor {
        slug: "hash",
        name: "Hash Generator",
        description: "Calculate cryptographic hashes (SHA-1/SHA-2) using the Web Crypto API.",
        tags: &["security", "utilities", "encoding"],
        icon: Some("🧮"),
        kind: ToolKind::Hash,
    },
    ToolDescriptor {
        slug: "password",
        name: "Password Generator",
        description: "Generate secure passwords with customizable length and character sets.",
        tags: &["security", "randomness", "utilities"],
        icon: Some("🔐"),
        kind: ToolKind::Password,
    },
    ToolDescriptor {
        slug: "lorem-ipsum",
        name: "Lorem Ipsum Generator",
        description:
            "Generate placeholder paragraphs with configurable lengths and the classic opening.",
        tags: &["content", "prototyping", "utilities"],
        icon: Some("📜"),
        kind: ToolKind::LoremIpsum,
    },
];

const SPOTLIGHT_COUNT: usize = 3;

/// A tag together with how many tools carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection<'a> {
    pub tag: &'a str,
    pub count: usize,
    pub example: &'a ToolDescriptor,
}

/// Ordered, validated, immutable list of tools.
#[derive(Debug, Clone)]
pub struct Registry {
    tools: Vec<ToolDescriptor>,
    primary_slug: String,
}

impl Registry {
    /// Validates `tools` and fails on the first integrity problem.
    pub fn new(
        tools: Vec<ToolDescriptor>,
        primary_slug: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        if tools.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for tool in &tools {
            if slugify(tool.slug) != tool.slug {
                return Err(RegistryError::MalformedSlug(tool.slug.to_string()));
            }
            if !seen.insert(tool.slug) {
                return Err(RegistryError::DuplicateSlug(tool.slug.to_string()));
            }
            if tool.name.trim().is_empty() {
                return Err(RegistryError::MissingName(tool.slug.to_string()));
            }
            if tool.description.trim().is_empty() {
                return Err(RegistryError::MissingDescription(tool.slug.to_string()));
            }
            if tool.tags.iter().all(|tag| tag.trim().is_empty()) {
                return Err(RegistryError::MissingTags(tool.slug.to_string()));
            }
        }
        log::debug!("registry loaded with {} tools", tools.len());
        Ok(Self {
            tools,
            primary_slug: primary_slug.into(),
        })
    }

    pub fn builtin(primary_slug: &str) -> Result<Self, RegistryError> {
        Self::new(BUILTIN_TOOLS.to_vec(), primary_slug)
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|tool| tool.slug == slug)
    }

    /// The tool the navigation bar links to.
    ///
    /// Uses the configured slug and falls back to the first entry when that
    /// slug is not registered.
    pub fn primary(&self) -> &ToolDescriptor {
        self.find_by_slug(&self.primary_slug)
            .unwrap_or(&self.tools[0])
    }

    pub fn featured(&self, count: usize) -> &[ToolDescriptor] {
        &self.tools[..count.min(self.tools.len())]
    }

    /// Landing-page spotlight for the given rotation tick.
    pub fn spotlight(&self, tick: usize) -> &ToolDescriptor {
        let pool = self.featured(SPOTLIGHT_COUNT);
        &pool[tick % pool.len()]
    }

    /// Sorted, de-duplicated tags across the registry.
    pub fn tags(&self) -> Vec<&'static str> {
        self.tools
            .iter()
            .flat_map(|tool| tool.tags.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tools
            .iter()
            .any(|tool| tool.tags.iter().any(|candidate| *candidate == tag))
    }

    /// Tags ordered by tool count (descending), ties broken by name.
    pub fn collections(&self, limit: usize) -> Vec<Collection<'_>> {
        let mut counts: BTreeMap<&str, (usize, &ToolDescriptor)> = BTreeMap::new();
        for tool in &self.tools {
            for tag in tool.tags {
                counts.entry(*tag).or_insert((0, tool)).0 += 1;
            }
        }
        let mut collections: Vec<Collection<'_>> = counts
            .into_iter()
            .map(|(tag, (count, example))| Collection {
                tag,
                count,
                example,
            })
            .collect();
        collections.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(b.tag)));
        collections.truncate(limit);
        collections
    }

    /// Tools matching a free-text query and an optional exact tag.
    pub fn search(&self, query: &str, tag: Option<&str>) -> Vec<&ToolDescriptor> {
        let needle = query.trim().to_lowercase();
        self.tools
            .iter()
            .filter(|tool| needle.is_empty() || tool.matches_query(&needle))
            .filter(|tool| {
                tag.is_none_or(|tag| tool.tags.iter().any(|candidate| *candidate == tag))
            })
            .collect()
    }
}

/// Lower-case kebab-case slug: runs of anything but `[a-z0-9]` become one
/// dash, leading and trailing dashes are dropped.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Absolute link to a tool page, for the "copy link" buttons.
pub fn share_link(origin: &str, slug: &str) -> String {
    format!("{}/tools/{}", origin.trim_end_matches('/'), slug)
}
