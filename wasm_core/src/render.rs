//! HTML for the page shell (nav bar, footer), the landing and catalog views,
//! and each tool workspace. The host page injects the markup and wires the
//! controls by their `id` attributes.

use crate::config::Config;
use crate::registry::{Registry, ToolDescriptor, ToolKind};
use crate::routing::{catalog_path, Route, CATALOG_PATH};
use crate::tools::hash::HashAlgorithm;
use crate::tools::lorem;
use crate::tools::password::PasswordOptions;

const BRAND: &str = "JTools";
const COLLECTION_LIMIT: usize = 6;
const DEFAULT_JSON_INPUT: &str = "{\n  \"message\": \"Hello, world!\"\n}";
const DEFAULT_URL_INPUT: &str = "https://example.com?message=hello world";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whole page for a resolved route: nav bar, view, footer.
pub fn render_page(registry: &Registry, config: &Config, route: &Route<'_>) -> String {
    let view = match route {
        Route::Home => home(registry, config),
        Route::Catalog { tag } => catalog(registry, tag.as_deref()),
        Route::Tool(tool) => tool_page(tool, config),
        Route::NotFound { slug } => not_found(slug),
    };
    layout(registry, &view)
}

pub fn layout(registry: &Registry, view: &str) -> String {
    format!(
        "<div class=\"app-shell\">{}<main id=\"appMain\" class=\"app-main\">{}</main>{}</div>",
        nav_bar(registry),
        view,
        footer()
    )
}

pub fn nav_bar(registry: &Registry) -> String {
    let primary = registry.primary();
    format!(
        concat!(
            "<nav id=\"navBar\" class=\"nav-bar\">",
            "<a class=\"nav-brand\" href=\"/\">{brand}</a>",
            "<div class=\"nav-links\">",
            "<a href=\"/\">Home</a>",
            "<a href=\"{catalog}\">Tools</a>",
            "<a id=\"navPrimaryTool\" class=\"nav-primary\" href=\"{primary_path}\">Try {primary_name}</a>",
            "</div></nav>"
        ),
        brand = BRAND,
        catalog = CATALOG_PATH,
        primary_path = escape_html(&primary.path()),
        primary_name = escape_html(primary.name),
    )
}

pub fn footer() -> String {
    format!(
        "<footer id=\"appFooter\" class=\"app-footer\"><p>{BRAND} · Developer utilities that run entirely in your browser.</p></footer>"
    )
}

fn tag_chips(tags: &[&str]) -> String {
    tags.iter()
        .map(|tag| {
            format!(
                "<a class=\"tag\" href=\"{}\">{}</a>",
                escape_html(&catalog_path(Some(tag))),
                escape_html(tag)
            )
        })
        .collect()
}

fn tool_card(tool: &ToolDescriptor, badge: Option<&str>) -> String {
    let icon = tool
        .icon
        .map(|icon| format!("<span class=\"tool-icon\">{}</span>", escape_html(icon)))
        .unwrap_or_default();
    let badge = badge
        .map(|badge| format!("<span class=\"badge\">{}</span>", escape_html(badge)))
        .unwrap_or_default();
    format!(
        concat!(
            "<article class=\"tool-card\" data-slug=\"{slug}\">{icon}",
            "<h3>{name}{badge}</h3><p>{description}</p>",
            "<div class=\"tags\">{tags}</div>",
            "<div class=\"card-actions\">",
            "<a class=\"button\" href=\"{path}\">Launch tool</a>",
            "<button type=\"button\" class=\"copy-link\" data-copy-link=\"{slug}\" data-tool-name=\"{name}\">Copy link</button>",
            "</div></article>"
        ),
        slug = escape_html(tool.slug),
        icon = icon,
        name = escape_html(tool.name),
        badge = badge,
        description = escape_html(tool.description),
        tags = tag_chips(tool.tags),
        path = escape_html(&tool.path()),
    )
}

pub fn home(registry: &Registry, config: &Config) -> String {
    let featured: String = registry
        .featured(config.featured_count)
        .iter()
        .map(|tool| tool_card(tool, Some("Featured")))
        .collect();
    let collections: String = registry
        .collections(COLLECTION_LIMIT)
        .iter()
        .map(|collection| {
            format!(
                "<a class=\"collection\" href=\"{}\">{} <span class=\"count\">{}</span></a>",
                escape_html(&catalog_path(Some(collection.tag))),
                escape_html(collection.tag),
                collection.count
            )
        })
        .collect();
    let spotlight = registry.spotlight(0);
    format!(
        concat!(
            "<section id=\"homeHero\" class=\"hero\">",
            "<h1>Purpose-built developer utilities</h1>",
            "<p>Pick a tool and jump straight into the interface. Everything runs locally.</p>",
            "<div class=\"hero-actions\"><a class=\"button\" href=\"{catalog}\">Explore the toolbox</a>",
            "<a class=\"button secondary\" href=\"{primary}\">Open a featured tool</a></div>",
            "<dl class=\"stats\"><dt>Available tools</dt><dd id=\"statTools\">{tool_count}</dd>",
            "<dt>Curated categories</dt><dd id=\"statCategories\">{tag_count}</dd></dl>",
            "</section>",
            "<section id=\"spotlight\" class=\"spotlight\" data-slug=\"{spot_slug}\">",
            "<h2 id=\"spotlightName\">{spot_name}</h2><p id=\"spotlightDescription\">{spot_description}</p>",
            "</section>",
            "<section id=\"featuredTools\" class=\"tool-grid\">{featured}</section>",
            "<section id=\"collections\" class=\"collections\"><h2>Collections worth exploring</h2>{collections}</section>"
        ),
        catalog = CATALOG_PATH,
        primary = escape_html(&registry.primary().path()),
        tool_count = registry.tools().len(),
        tag_count = registry.tags().len(),
        spot_slug = escape_html(spotlight.slug),
        spot_name = escape_html(spotlight.name),
        spot_description = escape_html(spotlight.description),
        featured = featured,
        collections = collections,
    )
}

/// Tools index, optionally pre-filtered by the `?tag=` category.
pub fn catalog(registry: &Registry, active_tag: Option<&str>) -> String {
    let filters: String = registry
        .tags()
        .iter()
        .map(|tag| {
            let active = if Some(*tag) == active_tag { " active" } else { "" };
            format!(
                "<button type=\"button\" class=\"tag-filter{active}\" data-tag=\"{tag}\">{tag}</button>",
                active = active,
                tag = escape_html(tag)
            )
        })
        .collect();
    let tools = registry.search("", active_tag);
    let cards: String = tools.iter().map(|tool| tool_card(tool, None)).collect();
    let empty_hidden = if tools.is_empty() { "" } else { " hidden" };
    format!(
        concat!(
            "<section id=\"catalog\" class=\"catalog\" data-active-tag=\"{active}\">",
            "<h1>Developer tools</h1>",
            "<input id=\"toolSearch\" type=\"search\" placeholder=\"Search by name, description, or tag\">",
            "<div id=\"tagFilters\" class=\"tag-filters\">{filters}</div>",
            "<button type=\"button\" id=\"resetFilters\">Reset filters</button>",
            "<p id=\"toolCount\">{count} tools</p>",
            "<div id=\"toolGrid\" class=\"tool-grid\">{cards}</div>",
            "<p id=\"catalogEmpty\" class=\"empty{empty_hidden}\">No tools match. Try a different keyword or clear the active filters.</p>",
            "</section>"
        ),
        active = escape_html(active_tag.unwrap_or_default()),
        filters = filters,
        count = tools.len(),
        cards = cards,
        empty_hidden = empty_hidden,
    )
}

pub fn not_found(slug: &str) -> String {
    format!(
        concat!(
            "<section id=\"notFound\" class=\"not-found\">",
            "<h1>Tool not found</h1>",
            "<p>The requested tool does not exist in the registry.</p>",
            "<p class=\"muted\"><code>{slug}</code></p>",
            "<a class=\"button\" href=\"{catalog}\">Back to all tools</a>",
            "</section>"
        ),
        slug = escape_html(slug),
        catalog = CATALOG_PATH,
    )
}

/// Tool header (icon, name, description, tags) around the tool workspace.
pub fn tool_page(tool: &ToolDescriptor, config: &Config) -> String {
    let hero = tool
        .icon
        .map(|icon| format!("<div class=\"tool-hero\">{}</div>", escape_html(icon)))
        .unwrap_or_default();
    format!(
        concat!(
            "<article id=\"toolPage\" class=\"tool-shell\" data-tool=\"{slug}\">",
            "<nav id=\"toolBreadcrumb\" class=\"breadcrumb\">",
            "<a href=\"{catalog}\">Tools</a> / <span>{name}</span></nav>{hero}",
            "<header><h1 id=\"toolName\">{name}</h1><p>{description}</p>",
            "<div class=\"tags\">{tags}</div></header>",
            "{workspace}</article>"
        ),
        slug = escape_html(tool.slug),
        catalog = CATALOG_PATH,
        hero = hero,
        name = escape_html(tool.name),
        description = escape_html(tool.description),
        tags = tag_chips(tool.tags),
        workspace = tool_workspace(tool.kind, config),
    )
}

pub fn tool_workspace(kind: ToolKind, config: &Config) -> String {
    match kind {
        ToolKind::JsonFormatter => json_workspace(),
        ToolKind::UrlEncoder => url_workspace(),
        ToolKind::UuidGenerator => uuid_workspace(),
        ToolKind::Hash => hash_workspace(),
        ToolKind::Password => password_workspace(config),
        ToolKind::LoremIpsum => lorem_workspace(config),
    }
}

fn json_workspace() -> String {
    format!(
        concat!(
            "<section id=\"jsonWorkspace\" class=\"tool-view\">",
            "<textarea id=\"jsonInput\" placeholder=\"Paste JSON here\">{input}</textarea>",
            "<div class=\"actions\"><button type=\"button\" id=\"jsonFormat\">Format JSON</button>",
            "<button type=\"button\" id=\"jsonMinify\">Minify JSON</button></div>",
            "<p id=\"jsonError\" class=\"error\" role=\"alert\"></p>",
            "<pre id=\"jsonOutput\" class=\"output\" data-placeholder=\"Formatted JSON will appear here.\"></pre>",
            "</section>"
        ),
        input = escape_html(DEFAULT_JSON_INPUT),
    )
}

fn url_workspace() -> String {
    format!(
        concat!(
            "<section id=\"urlWorkspace\" class=\"tool-view\">",
            "<textarea id=\"urlInput\" placeholder=\"Enter text or a full URL\">{input}</textarea>",
            "<div class=\"actions\"><button type=\"button\" id=\"urlEncode\">Encode</button>",
            "<button type=\"button\" id=\"urlDecode\">Decode</button></div>",
            "<p id=\"urlError\" class=\"error\" role=\"alert\"></p>",
            "<input id=\"urlOutput\" readonly placeholder=\"Encoded or decoded value will appear here\">",
            "<p class=\"hint\">Encoding replaces unsafe URL characters with percent-encoded values.</p>",
            "</section>"
        ),
        input = escape_html(DEFAULT_URL_INPUT),
    )
}

fn uuid_workspace() -> String {
    concat!(
        "<section id=\"uuidWorkspace\" class=\"tool-view\">",
        "<code id=\"uuidOutput\" class=\"output\"></code>",
        "<div class=\"actions\"><button type=\"button\" id=\"uuidGenerate\">Generate new UUID</button>",
        "<button type=\"button\" id=\"uuidCopy\">Copy</button></div>",
        "<p id=\"uuidError\" class=\"error\" role=\"alert\"></p>",
        "<p class=\"hint\">Version 4 identifiers drawn from the browser's secure random source.</p>",
        "</section>"
    )
    .to_string()
}

fn hash_workspace() -> String {
    let options: String = HashAlgorithm::ALL
        .iter()
        .map(|algorithm| {
            let selected = if *algorithm == HashAlgorithm::default() {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                algorithm.web_name(),
                selected,
                escape_html(algorithm.label())
            )
        })
        .collect();
    format!(
        concat!(
            "<section id=\"hashWorkspace\" class=\"tool-view\">",
            "<textarea id=\"hashInput\" placeholder=\"Paste or type the content you want to hash\"></textarea>",
            "<select id=\"hashAlgorithm\">{options}</select>",
            "<p class=\"hint\">MD5 and other insecure algorithms are intentionally excluded.</p>",
            "<p id=\"hashError\" class=\"error\" role=\"alert\"></p>",
            "<div class=\"actions\"><button type=\"button\" id=\"hashCalculate\" disabled>Calculate</button>",
            "<button type=\"button\" id=\"hashClear\">Clear</button></div>",
            "<input id=\"hashOutput\" readonly placeholder=\"Your hash will appear here\">",
            "<button type=\"button\" id=\"hashCopy\">Copy</button>",
            "</section>"
        ),
        options = options,
    )
}

fn password_workspace(config: &Config) -> String {
    let bounds = config.password_length;
    let defaults = PasswordOptions::default();
    let toggle = |id: &str, label: &str, checked: bool| {
        format!(
            "<label><input type=\"checkbox\" id=\"{id}\"{}> {label}</label>",
            if checked { " checked" } else { "" }
        )
    };
    format!(
        concat!(
            "<section id=\"passwordWorkspace\" class=\"tool-view\">",
            "<label for=\"passwordLength\">Length</label>",
            "<input id=\"passwordLength\" type=\"number\" min=\"{min}\" max=\"{max}\" value=\"{length}\">",
            "<p class=\"hint\">Choose between {min} and {max} characters.</p>",
            "<fieldset id=\"passwordClasses\">{upper}{lower}{digits}{symbols}</fieldset>",
            "<p id=\"passwordError\" class=\"error\" role=\"alert\"></p>",
            "<input id=\"passwordOutput\" readonly placeholder=\"Your generated password will appear here\">",
            "<div class=\"actions\"><button type=\"button\" id=\"passwordGenerate\">Generate password</button>",
            "<button type=\"button\" id=\"passwordCopy\">Copy</button>",
            "<button type=\"button\" id=\"passwordClear\">Clear</button></div>",
            "</section>"
        ),
        min = bounds.min,
        max = bounds.max,
        length = defaults.resolved_length(&bounds),
        upper = toggle("passwordUpper", "Uppercase (A-Z)", defaults.uppercase),
        lower = toggle("passwordLower", "Lowercase (a-z)", defaults.lowercase),
        digits = toggle("passwordDigits", "Numbers (0-9)", defaults.digits),
        symbols = toggle("passwordSymbols", "Symbols (!@#$…)", defaults.symbols),
    )
}

fn lorem_workspace(config: &Config) -> String {
    let paragraphs = config.lorem_paragraphs;
    let sentences = config.lorem_sentences;
    format!(
        concat!(
            "<section id=\"loremWorkspace\" class=\"tool-view\">",
            "<label for=\"loremParagraphs\">Paragraphs</label>",
            "<input id=\"loremParagraphs\" type=\"number\" min=\"{p_min}\" max=\"{p_max}\" value=\"{p_default}\">",
            "<label for=\"loremSentences\">Sentences per paragraph</label>",
            "<input id=\"loremSentences\" type=\"number\" min=\"{s_min}\" max=\"{s_max}\" value=\"{s_default}\">",
            "<label><input type=\"checkbox\" id=\"loremClassic\" checked> Start with “Lorem ipsum dolor sit amet…”</label>",
            "<div class=\"actions\"><button type=\"button\" id=\"loremGenerate\">Generate text</button>",
            "<button type=\"button\" id=\"loremReset\">Reset to defaults</button>",
            "<button type=\"button\" id=\"loremCopy\">Copy all</button></div>",
            "<p id=\"loremSummary\">{summary}</p>",
            "<div id=\"loremOutput\" class=\"output\"></div>",
            "</section>"
        ),
        p_min = paragraphs.min,
        p_max = paragraphs.max,
        p_default = paragraphs.default,
        s_min = sentences.min,
        s_max = sentences.max,
        s_default = sentences.default,
        summary = escape_html(&lorem::describe(paragraphs.default, sentences.default)),
    )
}

/// Paragraphs as `<p>` blocks for the lorem output panel.
pub fn paragraphs_html(paragraphs: &[String]) -> String {
    paragraphs
        .iter()
        .map(|paragraph| format!("<p>{}</p>", escape_html(paragraph)))
        .collect()
}
