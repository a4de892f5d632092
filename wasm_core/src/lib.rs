use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;

use console_error_panic_hook::set_once as set_panic_hook;
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod random;
pub mod registry;
pub mod render;
pub mod routing;
pub mod tools;

use clipboard::{CopySubject, Notice};
use config::Config;
use error::{ConfigError, InitError, ToolError};
use registry::Registry;
use routing::Route;
use tools::hash::{platform_facility, DigestFacility, HashAlgorithm, HashWorkspace};
use tools::lorem::{self, LoremOptions};
use tools::password::PasswordOptions;

/// Registry and configuration shared by every export.
struct App {
    registry: Registry,
    config: Config,
}

impl App {
    fn new(config: Config) -> Result<Self, InitError> {
        config.validate()?;
        let registry = Registry::builtin(&config.primary_tool)?;
        Ok(Self { registry, config })
    }
}

static APP: OnceLock<App> = OnceLock::new();

fn app() -> Result<&'static App, JsValue> {
    if let Some(app) = APP.get() {
        return Ok(app);
    }
    let app = App::new(Config::default()).map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(APP.get_or_init(|| app))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen(start)]
pub fn wasm_start() -> Result<(), JsValue> {
    set_panic_hook();
    logging::init(log::LevelFilter::Info);
    // The stock registry must be sound before any page renders.
    Registry::builtin(config::DEFAULT_PRIMARY_TOOL)
        .map_err(|err| JsValue::from_str(&InitError::from(err).to_string()))?;
    Ok(())
}

/// Applies host configuration. Optional; must run before the first other call.
#[wasm_bindgen]
pub fn init(config: JsValue) -> Result<(), JsValue> {
    let config = if config.is_undefined() || config.is_null() {
        Config::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|err| {
            JsValue::from_str(&InitError::from(ConfigError::Decode(err.to_string())).to_string())
        })?
    };
    init_internal(config).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn init_internal(config: Config) -> Result<(), InitError> {
    let level = config.level_filter()?;
    let app = App::new(config)?;
    APP.set(app).map_err(|_| InitError::AlreadyInitialized)?;
    logging::init(level);
    log::info!("toolbox initialized");
    Ok(())
}

/// Full page markup (nav, view, footer) for a location.
#[wasm_bindgen]
pub fn render_page(path: &str, query: &str) -> Result<String, JsValue> {
    let app = app()?;
    Ok(render_page_internal(app, path, query))
}

fn render_page_internal(app: &App, path: &str, query: &str) -> String {
    let route = Route::resolve(&app.registry, path, query);
    log::debug!("rendering {}", route.path());
    render::render_page(&app.registry, &app.config, &route)
}

#[wasm_bindgen]
pub fn list_tools() -> Result<JsValue, JsValue> {
    to_js(&app()?.registry.tools())
}

/// Descriptor for `slug`, or `null`.
#[wasm_bindgen]
pub fn find_tool(slug: &str) -> Result<JsValue, JsValue> {
    match app()?.registry.find_by_slug(slug) {
        Some(tool) => to_js(tool),
        None => Ok(JsValue::NULL),
    }
}

/// Slugs of the tools matching the catalog search box and tag filter.
#[wasm_bindgen]
pub fn search_tools(query: &str, tag: Option<String>) -> Result<JsValue, JsValue> {
    let slugs = search_slugs(&app()?.registry, query, tag.as_deref());
    to_js(&slugs)
}

fn search_slugs(registry: &Registry, query: &str, tag: Option<&str>) -> Vec<&'static str> {
    let tag = tag.filter(|tag| !tag.is_empty());
    registry
        .search(query, tag)
        .into_iter()
        .map(|tool| tool.slug)
        .collect()
}

#[wasm_bindgen]
pub fn spotlight_tool(tick: u32) -> Result<JsValue, JsValue> {
    to_js(app()?.registry.spotlight(tick as usize))
}

#[wasm_bindgen]
pub fn share_link(origin: &str, slug: &str) -> String {
    registry::share_link(origin, slug)
}

#[wasm_bindgen]
pub fn format_json_text(input: &str) -> Result<String, JsValue> {
    tools::format_json(input).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn minify_json_text(input: &str) -> Result<String, JsValue> {
    tools::minify_json(input).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn url_encode(input: &str) -> String {
    tools::url_encode(input)
}

#[wasm_bindgen]
pub fn url_decode(input: &str) -> Result<String, JsValue> {
    tools::url_decode(input).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn generate_uuid() -> Result<String, JsValue> {
    tools::generate_uuid_v4().map_err(JsValue::from)
}

/// Lets the host disable the UUID and password actions before a click.
#[wasm_bindgen]
pub fn random_source_available() -> bool {
    random::is_available()
}

/// Rejects with the `{ kind: "unavailable", message }` payload the host shows
/// next to a disabled random-backed action.
#[wasm_bindgen]
pub fn check_random_source() -> Result<(), JsValue> {
    random::ensure_available().map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn generate_password(options: JsValue) -> Result<String, JsValue> {
    let app = app()?;
    let options = if options.is_undefined() || options.is_null() {
        PasswordOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|err| JsValue::from(ToolError::invalid_option(err.to_string())))?
    };
    tools::generate_password(&options, &app.config.password_length).map_err(JsValue::from)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoremOutput {
    seed: u32,
    paragraphs: Vec<String>,
    text: String,
    html: String,
    summary: String,
}

#[wasm_bindgen]
pub fn new_lorem_seed() -> u32 {
    lorem::generate_seed()
}

/// Generates lorem text. Counts are clamped into the configured bounds; a
/// missing seed draws a fresh one.
#[wasm_bindgen]
pub fn generate_lorem_text(
    paragraphs: u32,
    sentences_per_paragraph: u32,
    start_with_classic: bool,
    seed: Option<u32>,
) -> Result<JsValue, JsValue> {
    let app = app()?;
    let options = LoremOptions {
        paragraphs,
        sentences_per_paragraph,
        start_with_classic,
        seed: seed.unwrap_or_else(lorem::generate_seed),
    };
    to_js(&lorem_output(&app.config, options))
}

fn lorem_output(config: &Config, options: LoremOptions) -> LoremOutput {
    let options = options.clamped(&config.lorem_paragraphs, &config.lorem_sentences);
    let paragraphs = tools::generate_lorem(&options);
    LoremOutput {
        seed: options.seed,
        text: lorem::join_paragraphs(&paragraphs),
        html: render::paragraphs_html(&paragraphs),
        summary: lorem_summary(config, options.paragraphs, options.sentences_per_paragraph),
        paragraphs,
    }
}

/// Summary line for the counts the generator would actually use.
#[wasm_bindgen]
pub fn describe_lorem(paragraphs: u32, sentences_per_paragraph: u32) -> Result<String, JsValue> {
    Ok(lorem_summary(&app()?.config, paragraphs, sentences_per_paragraph))
}

fn lorem_summary(config: &Config, paragraphs: u32, sentences_per_paragraph: u32) -> String {
    lorem::describe(
        config.lorem_paragraphs.clamp(paragraphs),
        config.lorem_sentences.clamp(sentences_per_paragraph),
    )
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlgorithmOption {
    value: &'static str,
    label: &'static str,
    legacy: bool,
    default: bool,
}

fn algorithm_options() -> Vec<AlgorithmOption> {
    HashAlgorithm::ALL
        .iter()
        .map(|algorithm| AlgorithmOption {
            value: algorithm.web_name(),
            label: algorithm.label(),
            legacy: algorithm.is_legacy(),
            default: *algorithm == HashAlgorithm::default(),
        })
        .collect()
}

#[wasm_bindgen]
pub fn hash_algorithms() -> Result<JsValue, JsValue> {
    to_js(&algorithm_options())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HashSnapshot {
    algorithm: &'static str,
    output: String,
    error: Option<String>,
    computing: bool,
    can_calculate: bool,
}

impl HashSnapshot {
    fn of(workspace: &HashWorkspace) -> Self {
        Self {
            algorithm: workspace.algorithm().web_name(),
            output: workspace.output().to_string(),
            error: workspace.error().map(str::to_string),
            computing: workspace.is_computing(),
            can_calculate: workspace.can_calculate(),
        }
    }
}

/// The hash calculator page. Overlapping calculations are allowed; the one
/// that finishes last decides what is shown.
#[wasm_bindgen]
pub struct HashTool {
    workspace: Rc<RefCell<HashWorkspace>>,
    facility: Option<Rc<dyn DigestFacility>>,
}

impl Default for HashTool {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl HashTool {
    #[wasm_bindgen(constructor)]
    pub fn new() -> HashTool {
        let facility: Option<Rc<dyn DigestFacility>> = platform_facility().map(Rc::from);
        if facility.is_none() {
            log::warn!("no digest facility; the hash tool is disabled");
        }
        HashTool {
            workspace: Rc::new(RefCell::new(HashWorkspace::new(facility.is_some()))),
            facility,
        }
    }

    pub fn set_text(&self, text: &str) {
        self.workspace.borrow_mut().set_text(text);
    }

    pub fn set_algorithm(&self, name: &str) -> Result<(), JsValue> {
        let algorithm = HashAlgorithm::parse(name)?;
        self.workspace.borrow_mut().set_algorithm(algorithm);
        Ok(())
    }

    pub fn can_calculate(&self) -> bool {
        self.workspace.borrow().can_calculate()
    }

    pub fn disabled_reason(&self) -> Option<String> {
        self.workspace.borrow().disabled_reason()
    }

    pub fn output(&self) -> String {
        self.workspace.borrow().output().to_string()
    }

    pub fn error(&self) -> Option<String> {
        self.workspace.borrow().error().map(str::to_string)
    }

    pub fn is_computing(&self) -> bool {
        self.workspace.borrow().is_computing()
    }

    pub fn clear(&self) {
        self.workspace.borrow_mut().clear();
    }

    /// Starts a digest and resolves to
    /// `{ algorithm, output, error, computing, canCalculate }`
    /// once it has been applied.
    ///
    /// The computing state is set before this returns, so the host can read
    /// `is_computing()` straight after the call.
    pub fn calculate(&self) -> Promise {
        let job = match self.workspace.borrow_mut().begin() {
            Ok(job) => job,
            Err(err) => return Promise::reject(&err.into()),
        };
        let workspace = Rc::clone(&self.workspace);
        let facility = self.facility.clone();
        future_to_promise(async move {
            log::debug!("hashing with {}", job.algorithm().web_name());
            let result = match facility {
                Some(facility) => job.run(facility.as_ref()).await,
                None => Err(ToolError::DigestUnavailable),
            };
            workspace.borrow_mut().finish(result);
            let snapshot = HashSnapshot::of(&workspace.borrow());
            to_js(&snapshot)
        })
    }
}

/// Copies `text` and resolves to a notice for the toast; never rejects for
/// clipboard failures.
#[wasm_bindgen]
pub async fn copy_text(
    text: String,
    subject: String,
    tool_name: Option<String>,
) -> Result<JsValue, JsValue> {
    let notice = match CopySubject::parse(&subject, tool_name.as_deref().unwrap_or_default()) {
        Some(subject) => clipboard::copy(&subject, &text).await,
        None => {
            log::warn!("unknown copy subject {subject:?}");
            Notice::error("Unable to copy", "Copy the text manually instead.")
        }
    };
    to_js(&notice)
}
