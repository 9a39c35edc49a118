//! Expose the crate's changeset algebra to WebAssembly.
//!
//! Changesets cross the FFI boundary as their JSON wire representation (see
//! [`crate::encode`]/[`crate::decode`]): `wasm-bindgen` cannot marshal a
//! payload-carrying Rust enum like [`Operation`](crate::Operation) directly,
//! and the crate already has a canonical JSON shape, so reusing it here
//! avoids a second, WASM-only representation to keep in sync.
use cfg_if::cfg_if;
use wasm_bindgen::prelude::*;

cfg_if! {
    if #[cfg(feature = "wasm")] {
        #[global_allocator]
        static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;
    }
}

fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM wrapper around [`crate::apply`]. `changeset_json` is the wire format
/// from [`crate::encode`].
///
/// # Errors
///
/// Throws a JS exception carrying the error message when `changeset_json`
/// doesn't decode, or when `text`'s UTF-16 length doesn't match the decoded
/// changeset's `from_len`.
#[wasm_bindgen(js_name = apply)]
pub fn apply_js(changeset_json: &str, text: &str) -> Result<String, JsError> {
    set_panic_hook();
    let changeset = crate::decode(changeset_json)?;
    Ok(crate::apply(&changeset, text)?)
}

/// WASM wrapper around [`crate::compose`]. Takes and returns changesets as
/// JSON.
///
/// # Errors
///
/// Throws a JS exception carrying the error message when either input fails
/// to decode, or when `a.to_len() != b.from_len()`.
#[wasm_bindgen(js_name = compose)]
pub fn compose_js(a_json: &str, b_json: &str) -> Result<String, JsError> {
    set_panic_hook();
    let a = crate::decode(a_json)?;
    let b = crate::decode(b_json)?;
    let combined = crate::compose(&a, &b)?;
    Ok(crate::encode(&combined).to_string())
}

/// WASM wrapper around [`crate::transform`], returning `[a', b']` as JSON.
///
/// # Errors
///
/// Throws a JS exception carrying the error message when either input fails
/// to decode, or when `a.from_len() != b.from_len()`.
#[wasm_bindgen(js_name = transform)]
pub fn transform_js(a_json: &str, b_json: &str) -> Result<Vec<String>, JsError> {
    set_panic_hook();
    let a = crate::decode(a_json)?;
    let b = crate::decode(b_json)?;
    let (a_prime, b_prime) = crate::transform(&a, &b)?;
    Ok(vec![
        crate::encode(&a_prime).to_string(),
        crate::encode(&b_prime).to_string(),
    ])
}
