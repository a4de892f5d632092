//! Hash calculator.
//!
//! The digest itself runs behind [`DigestFacility`]: Web Crypto in the
//! browser, the RustCrypto hashes everywhere else. [`HashWorkspace`] keeps
//! the tool state; overlapping calculations are never cancelled and the
//! last one to finish overwrites the output.

use async_trait::async_trait;
use serde::Serialize;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::error::{Result, ToolError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
    /// Kept for compatibility checks only.
    Sha1,
}

impl HashAlgorithm {
    /// Selectable algorithms in display order. MD5 and friends are left out on purpose.
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha1,
    ];

    /// Name understood by `crypto.subtle.digest`.
    pub fn web_name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha1 => "SHA-1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256 (recommended)",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha1 => "SHA-1 (legacy, limited support)",
        }
    }

    pub fn is_legacy(self) -> bool {
        matches!(self, HashAlgorithm::Sha1)
    }

    /// Digest length in bytes.
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
            HashAlgorithm::Sha1 => 20,
        }
    }

    /// Accepts `SHA-256`, `sha256`, `sha_256` and similar spellings.
    pub fn parse(name: &str) -> Result<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "SHA256" => Ok(HashAlgorithm::Sha256),
            "SHA384" => Ok(HashAlgorithm::Sha384),
            "SHA512" => Ok(HashAlgorithm::Sha512),
            "SHA1" => Ok(HashAlgorithm::Sha1),
            _ => Err(ToolError::UnsupportedAlgorithm(name.trim().to_string())),
        }
    }
}

/// Something that can digest bytes, possibly asynchronously.
#[async_trait(?Send)]
pub trait DigestFacility {
    async fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>>;
}

/// In-process digests from the `sha1`/`sha2` crates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareDigest;

impl SoftwareDigest {
    pub fn digest_now(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
        match algorithm {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        }
    }
}

#[async_trait(?Send)]
impl DigestFacility for SoftwareDigest {
    async fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        Ok(Self::digest_now(algorithm, data))
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebCryptoDigest;

#[cfg(target_arch = "wasm32")]
mod web {
    use async_trait::async_trait;
    use js_sys::{Function, Promise, Reflect, Uint8Array};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::{DigestFacility, HashAlgorithm};
    use crate::error::{Result, ToolError};

    /// `crypto.subtle` of the current global scope.
    pub struct WebCryptoDigest {
        subtle: JsValue,
    }

    impl WebCryptoDigest {
        /// `None` outside secure contexts or in hosts without Web Crypto.
        pub fn detect() -> Option<Self> {
            let crypto = Reflect::get(&js_sys::global(), &JsValue::from_str("crypto")).ok()?;
            if crypto.is_undefined() || crypto.is_null() {
                return None;
            }
            let subtle = Reflect::get(&crypto, &JsValue::from_str("subtle")).ok()?;
            if subtle.is_undefined() || subtle.is_null() {
                return None;
            }
            Some(Self { subtle })
        }
    }

    fn classify(algorithm: HashAlgorithm, err: JsValue) -> ToolError {
        let field = |key: &str| {
            Reflect::get(&err, &JsValue::from_str(key))
                .ok()
                .and_then(|value| value.as_string())
        };
        if field("name").as_deref() == Some("NotSupportedError") {
            return ToolError::UnsupportedAlgorithm(algorithm.web_name().to_string());
        }
        let message = field("message")
            .or_else(|| err.as_string())
            .unwrap_or_else(|| "unknown error".to_string());
        ToolError::Digest(message)
    }

    #[async_trait(?Send)]
    impl DigestFacility for WebCryptoDigest {
        async fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
            let digest_fn: Function = Reflect::get(&self.subtle, &JsValue::from_str("digest"))
                .ok()
                .and_then(|value| value.dyn_into().ok())
                .ok_or(ToolError::DigestUnavailable)?;
            let bytes = Uint8Array::from(data);
            let promise: Promise = digest_fn
                .call2(&self.subtle, &JsValue::from_str(algorithm.web_name()), &bytes)
                .map_err(|err| classify(algorithm, err))?
                .dyn_into()
                .map_err(|_| ToolError::Digest("digest did not return a promise".into()))?;
            let buffer = JsFuture::from(promise)
                .await
                .map_err(|err| classify(algorithm, err))?;
            Ok(Uint8Array::new(&buffer).to_vec())
        }
    }
}

/// The digest facility of the current platform, if there is one.
#[cfg(target_arch = "wasm32")]
pub fn platform_facility() -> Option<Box<dyn DigestFacility>> {
    WebCryptoDigest::detect().map(|facility| Box::new(facility) as Box<dyn DigestFacility>)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_facility() -> Option<Box<dyn DigestFacility>> {
    Some(Box::new(SoftwareDigest))
}

/// Digest of the UTF-8 bytes of `text`, lower-case hex.
pub async fn hash_text(
    facility: &dyn DigestFacility,
    algorithm: HashAlgorithm,
    text: &str,
) -> Result<String> {
    let digest = facility.digest(algorithm, text.as_bytes()).await?;
    Ok(hex::encode(digest))
}

/// One calculation captured at the moment the user pressed "Calculate".
#[derive(Debug, Clone)]
pub struct HashJob {
    algorithm: HashAlgorithm,
    text: String,
}

impl HashJob {
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub async fn run(self, facility: &dyn DigestFacility) -> Result<String> {
        hash_text(facility, self.algorithm, &self.text).await
    }
}

/// State behind the hash tool page.
#[derive(Debug, Clone, Default)]
pub struct HashWorkspace {
    text: String,
    algorithm: HashAlgorithm,
    output: String,
    error: Option<String>,
    in_flight: usize,
    facility_available: bool,
}

impl HashWorkspace {
    pub fn new(facility_available: bool) -> Self {
        Self {
            facility_available,
            ..Self::default()
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_algorithm(&mut self, algorithm: HashAlgorithm) {
        self.algorithm = algorithm;
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_computing(&self) -> bool {
        self.in_flight > 0
    }

    /// Calculate stays enabled while earlier jobs are still running.
    pub fn can_calculate(&self) -> bool {
        self.facility_available && !self.text.trim().is_empty()
    }

    /// Why the calculate action is disabled, when it is.
    pub fn disabled_reason(&self) -> Option<String> {
        if !self.facility_available {
            return Some(ToolError::DigestUnavailable.to_string());
        }
        if self.text.trim().is_empty() {
            return Some("Enter some text to hash.".to_string());
        }
        None
    }

    /// Starts a calculation: clears the previous result and snapshots the inputs.
    pub fn begin(&mut self) -> Result<HashJob> {
        if !self.facility_available {
            let err = ToolError::DigestUnavailable;
            self.error = Some(err.to_string());
            return Err(err);
        }
        self.output.clear();
        self.error = None;
        self.in_flight += 1;
        Ok(HashJob {
            algorithm: self.algorithm,
            text: self.text.clone(),
        })
    }

    /// Applies a finished job. Whatever finishes last wins.
    pub fn finish(&mut self, result: Result<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(hex) => {
                self.output = hex;
                self.error = None;
            }
            Err(err) => {
                log::warn!("hash calculation failed: {err}");
                self.output.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.output.clear();
        self.error = None;
    }
}
