//! Copy-to-clipboard with toast-style feedback.
//!
//! A copy never fails loudly: every outcome becomes a [`Notice`] for the
//! host to show, and tool state is left as it was.

use serde::Serialize;

use crate::error::{Result, ToolError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    Success,
    Error,
}

/// A dismissible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub status: NoticeStatus,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: NoticeStatus::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status: NoticeStatus::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// What is being copied; decides the wording of the notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopySubject {
    Uuid,
    Hash,
    Password,
    Lorem,
    Json,
    Url,
    Link { tool_name: String },
}

impl CopySubject {
    /// Host-facing names: `uuid`, `hash`, `password`, `lorem`, `json`, `url`, `link`.
    pub fn parse(kind: &str, tool_name: &str) -> Option<Self> {
        let subject = match kind {
            "uuid" => Self::Uuid,
            "hash" => Self::Hash,
            "password" => Self::Password,
            "lorem" => Self::Lorem,
            "json" => Self::Json,
            "url" => Self::Url,
            "link" => Self::Link {
                tool_name: tool_name.to_string(),
            },
            _ => return None,
        };
        Some(subject)
    }

    fn empty_message(&self) -> &'static str {
        match self {
            Self::Password => "Generate a password before copying.",
            Self::Hash => "Calculate a hash before copying.",
            Self::Uuid => "Generate a UUID before copying.",
            Self::Lorem => "Generate some text before copying.",
            Self::Json | Self::Url => "There is no output to copy yet.",
            Self::Link { .. } => "There is no link to copy.",
        }
    }

    fn success_notice(&self) -> Notice {
        match self {
            Self::Password => Notice::success(
                "Copied to clipboard",
                "Your generated password is ready to paste.",
            ),
            Self::Hash => Notice::success("Hash copied", "Digest copied to your clipboard."),
            Self::Uuid => Notice::success("UUID copied", "Identifier copied to your clipboard."),
            Self::Lorem => Notice::success("Copied", "All paragraphs copied to your clipboard."),
            Self::Json | Self::Url => Notice::success("Copied", "Output copied to your clipboard."),
            Self::Link { tool_name } => {
                Notice::success("Link copied", format!("{tool_name} link is ready to share."))
            }
        }
    }

    fn failure_notice(&self, err: &ToolError) -> Notice {
        match self {
            Self::Link { .. } => Notice::error("Unable to copy link", "Copy the URL manually instead."),
            Self::Hash => Notice::error("Unable to copy", "Copy the hash manually instead."),
            Self::Password => Notice::error("Unable to copy", err.to_string()),
            _ => Notice::error("Unable to copy", "Copy the text manually instead."),
        }
    }
}

/// Rejects copying an empty output with a subject-specific message.
pub fn ensure_copyable(subject: &CopySubject, text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(ToolError::EmptyInput(subject.empty_message()));
    }
    Ok(())
}

/// Maps the outcome of a copy attempt to the notice the host shows.
pub fn notice_for(subject: &CopySubject, outcome: &Result<()>) -> Notice {
    match outcome {
        Ok(()) => subject.success_notice(),
        Err(ToolError::EmptyInput(message)) => Notice::error("Nothing to copy", *message),
        Err(err) => {
            log::warn!("clipboard write failed: {err}");
            subject.failure_notice(err)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn write_text(text: &str) -> Result<()> {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let unavailable = || ToolError::Clipboard("the clipboard is not available".into());
    let navigator = Reflect::get(&js_sys::global(), &JsValue::from_str("navigator"))
        .map_err(|_| unavailable())?;
    let clipboard =
        Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(|_| unavailable())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(unavailable());
    }
    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or_else(unavailable)?;
    let describe = |err: JsValue| {
        let message = Reflect::get(&err, &JsValue::from_str("message"))
            .ok()
            .and_then(|value| value.as_string())
            .or_else(|| err.as_string())
            .unwrap_or_else(|| "write was rejected".to_string());
        ToolError::Clipboard(message)
    };
    let promise: Promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(describe)?
        .dyn_into()
        .map_err(|_| unavailable())?;
    JsFuture::from(promise).await.map_err(describe)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn write_text(_text: &str) -> Result<()> {
    Err(ToolError::Clipboard(
        "the clipboard is only available in the browser".into(),
    ))
}

/// Full copy flow: validate, write, and report.
pub async fn copy(subject: &CopySubject, text: &str) -> Notice {
    let outcome = match ensure_copyable(subject, text) {
        Ok(()) => write_text(text).await,
        Err(err) => Err(err),
    };
    notice_for(subject, &outcome)
}
