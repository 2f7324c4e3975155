//! Clipboard writes through `navigator.clipboard.writeText`.

#![allow(clippy::unused_async)]

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string if there is no window or the browser rejects the
/// write (permissions, focus, insecure context).
pub async fn write_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on server".to_owned())
    }
}
