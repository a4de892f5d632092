#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use serde_json::Value as JsonValue;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

use jtools_core::{
    check_random_source, copy_text, describe_lorem, find_tool, format_json_text,
    generate_lorem_text, generate_password, generate_uuid, hash_algorithms, init, list_tools,
    minify_json_text, random_source_available, render_page, search_tools, url_decode, url_encode,
    HashTool,
};

wasm_bindgen_test_configure!(run_in_browser);

const INDEX_HTML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../www/index.html"));
const MAIN_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../www/main.js"));

fn js_to_json(value: JsValue) -> JsonValue {
    serde_wasm_bindgen::from_value(value).expect("JsValue -> JSON map")
}

fn field<'a>(map: &'a JsonValue, key: &str) -> &'a str {
    map.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| panic!("missing string field {key}"))
}

fn js_object(fields: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in fields {
        Reflect::set(&object, &JsValue::from_str(key), value).expect("set field");
    }
    object.into()
}

#[wasm_bindgen_test]
fn host_page_has_mount_point_and_loads_module() {
    assert!(INDEX_HTML.contains("id=\"app\""), "host page needs a mount point");
    assert!(INDEX_HTML.contains("src=\"./main.js\""));
    assert!(MAIN_JS.contains("render_page("));
    assert!(MAIN_JS.contains("new HashTool()"));
    assert!(MAIN_JS.contains("seed = result.seed"), "lorem seed must be kept between edits");
    assert!(MAIN_JS.contains("err?.kind"), "host branches on the error kind");
    assert!(
        MAIN_JS.contains("try {\n  configure(window.JTOOLS_CONFIG);"),
        "a rejected config must not stop the first render"
    );
}

#[wasm_bindgen_test]
fn registry_lists_six_tools_in_order() {
    let tools = js_to_json(list_tools().expect("list tools"));
    let slugs: Vec<&str> = tools
        .as_array()
        .expect("array")
        .iter()
        .map(|tool| field(tool, "slug"))
        .collect();
    assert_eq!(
        slugs,
        ["json-formatter", "url-encoder", "uuid-generator", "hash", "password", "lorem-ipsum"]
    );
    assert!(find_tool("nope").expect("lookup").is_null());
    let hash = js_to_json(find_tool("hash").expect("lookup"));
    assert_eq!(field(&hash, "kind"), "hash");
}

#[wasm_bindgen_test]
fn catalog_search_filters_by_tag() {
    let slugs = js_to_json(search_tools("", Some("security".into())).expect("search"));
    assert_eq!(slugs, serde_json::json!(["hash", "password"]));
}

#[wasm_bindgen_test]
fn rendered_pages_include_shell_and_workspaces() {
    let home = render_page("/", "").expect("home");
    assert!(home.contains("id=\"navBar\"") && home.contains("id=\"appFooter\""));
    let hash = render_page("/tools/hash", "").expect("hash page");
    assert!(hash.contains("id=\"hashCalculate\""));
    let missing = render_page("/tools/unknown", "").expect("not found");
    assert!(missing.contains("Tool not found"));
}

#[wasm_bindgen_test]
fn json_format_and_minify() {
    let pretty = format_json_text(r#"{"name":"Ada","tags":["x"]}"#).expect("format");
    assert_eq!(pretty, "{\n  \"name\": \"Ada\",\n  \"tags\": [\n    \"x\"\n  ]\n}");
    assert_eq!(minify_json_text(&pretty).expect("minify"), r#"{"name":"Ada","tags":["x"]}"#);
    assert!(format_json_text("{oops").is_err());
}

#[wasm_bindgen_test]
fn url_encode_and_decode_roundtrip() {
    let encoded = url_encode("a b+c/é");
    assert_eq!(encoded, "a%20b%2Bc%2F%C3%A9");
    assert_eq!(url_decode(&encoded).expect("url decode"), "a b+c/é");
    assert!(url_decode("%").is_err());
}

#[wasm_bindgen_test]
fn rejected_exports_carry_kind_and_message() {
    let err = js_to_json(url_decode("%").expect_err("bad escape"));
    assert_eq!(field(&err, "kind"), "validation");
    assert!(field(&err, "message").starts_with("invalid URL encoding"));

    let err = js_to_json(format_json_text("   ").expect_err("blank"));
    assert_eq!(field(&err, "kind"), "validation");
}

#[wasm_bindgen_test]
fn uuid_uses_browser_randomness() {
    assert!(random_source_available());
    assert!(check_random_source().is_ok());
    let id = generate_uuid().expect("uuid");
    assert_eq!(id.len(), 36);
    assert_eq!(&id[14..15], "4");
    assert!(matches!(&id[19..20], "8" | "9" | "a" | "b"));
}

#[wasm_bindgen_test]
fn password_respects_options() {
    let options = js_object(&[
        ("length", JsValue::from_f64(24.0)),
        ("uppercase", JsValue::FALSE),
        ("lowercase", JsValue::FALSE),
        ("digits", JsValue::TRUE),
        ("symbols", JsValue::FALSE),
    ]);
    let password = generate_password(options).expect("password");
    assert_eq!(password.len(), 24);
    assert!(password.chars().all(|c| c.is_ascii_digit()));

    let none = js_object(&[
        ("uppercase", JsValue::FALSE),
        ("lowercase", JsValue::FALSE),
        ("digits", JsValue::FALSE),
        ("symbols", JsValue::FALSE),
    ]);
    assert!(generate_password(none).is_err());
}

#[wasm_bindgen_test]
fn lorem_is_deterministic_for_a_seed() {
    let first = js_to_json(generate_lorem_text(2, 3, true, Some(7)).expect("lorem"));
    let second = js_to_json(generate_lorem_text(2, 3, true, Some(7)).expect("lorem"));
    assert_eq!(first, second);
    assert!(field(&first, "text").starts_with("Lorem ipsum dolor sit amet "));
    assert_eq!(field(&first, "summary"), "Generate 2 paragraphs with 3 sentences each.");
    assert_eq!(
        describe_lorem(50, 0).expect("summary"),
        "Generate 10 paragraphs with 1 sentence each."
    );
}

#[wasm_bindgen_test]
fn hash_algorithm_list_has_sha256_default() {
    let options = js_to_json(hash_algorithms().expect("algorithms"));
    let first = &options.as_array().expect("array")[0];
    assert_eq!(field(first, "value"), "SHA-256");
    assert_eq!(first.get("default"), Some(&JsonValue::Bool(true)));
}

#[wasm_bindgen_test]
async fn hash_tool_uses_web_crypto() {
    let tool = HashTool::new();
    tool.set_text("abc");
    assert!(tool.can_calculate());
    let pending = tool.calculate();
    assert!(tool.is_computing(), "computing is set before the promise settles");
    let snapshot = js_to_json(JsFuture::from(pending).await.expect("digest"));
    assert_eq!(field(&snapshot, "algorithm"), "SHA-256");
    assert_eq!(
        field(&snapshot, "output"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(snapshot.get("computing"), Some(&JsonValue::Bool(false)));

    tool.set_algorithm("SHA-1").expect("sha-1");
    let snapshot = js_to_json(JsFuture::from(tool.calculate()).await.expect("digest"));
    assert_eq!(field(&snapshot, "output"), "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[wasm_bindgen_test]
fn hash_rejection_carries_unsupported_kind() {
    let tool = HashTool::new();
    let err = js_to_json(tool.set_algorithm("MD5").expect_err("unknown algorithm"));
    assert_eq!(field(&err, "kind"), "unsupported");
}

#[wasm_bindgen_test]
async fn copying_empty_password_reports_without_clipboard() {
    let notice = js_to_json(
        copy_text(String::new(), "password".into(), None)
            .await
            .expect("notice"),
    );
    assert_eq!(field(&notice, "status"), "error");
    assert_eq!(field(&notice, "description"), "Generate a password before copying.");
}

#[wasm_bindgen_test]
fn init_rejects_inverted_bounds() {
    let bounds = js_object(&[
        ("min", JsValue::from_f64(30.0)),
        ("max", JsValue::from_f64(10.0)),
        ("default", JsValue::from_f64(16.0)),
    ]);
    let config = js_object(&[("passwordLength", bounds)]);
    assert!(init(config).is_err());
}
