//! Access to the platform CSPRNG and the wall clock.

use crate::error::{Result, ToolError};

pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    getrandom::fill(buf).map_err(|err| {
        log::warn!("secure random source failed: {err}");
        ToolError::RandomUnavailable
    })
}

pub fn random_u32() -> Result<u32> {
    let mut bytes = [0u8; 4];
    fill_random(&mut bytes)?;
    Ok(u32::from_ne_bytes(bytes))
}

/// Draws one byte so the host can disable random-backed actions up front.
pub fn ensure_available() -> Result<()> {
    let mut byte = [0u8; 1];
    fill_random(&mut byte)
}

pub fn is_available() -> bool {
    ensure_available().is_ok()
}

/// `count` independent uniform indices in `0..bound`.
///
/// Values in the biased tail above the largest multiple of `bound` are
/// redrawn, so every index is equally likely.
pub fn random_indices(bound: usize, count: usize) -> Result<Vec<usize>> {
    if bound == 0 {
        return Err(ToolError::invalid_option("cannot sample from an empty set"));
    }
    let bound = u32::try_from(bound)
        .map_err(|_| ToolError::invalid_option("sample set is too large"))?;
    let zone = u32::MAX - (u32::MAX % bound);
    let mut out = Vec::with_capacity(count);
    let mut chunk = vec![0u8; count.max(1) * 4];
    while out.len() < count {
        fill_random(&mut chunk)?;
        for word in chunk.chunks_exact(4) {
            let value = u32::from_ne_bytes([word[0], word[1], word[2], word[3]]);
            if value < zone {
                out.push((value % bound) as usize);
                if out.len() == count {
                    break;
                }
            }
        }
    }
    Ok(out)
}

#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
