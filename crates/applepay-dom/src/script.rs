//! # Script-Loading Cache
//!
//! Process-wide cache of vendor script loads, keyed by URL. Each URL gets
//! exactly one `<script>` tag and one JS promise settled by the tag's native
//! `load` / `error` events. JS promises are multi-consumer, so every caller
//! for the same URL awaits the same promise. Entries are never evicted; the
//! vendor script set is small and static.

use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::Promise;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Settled or in-flight state of one cached script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    /// The script tag is inserted and the load has not settled
    Pending,
    /// The native `load` event fired
    Loaded,
    /// The native `error` event fired
    Failed,
}

/// Result of asking the cache for a script
#[derive(Debug, Clone)]
pub enum ScriptLoad {
    /// Load in flight; await this promise, then ask again
    Pending(Promise),
    /// Script is loaded and its globals are available
    Loaded,
    /// Load failed with the recorded message
    Failed(String),
}

struct ScriptEntry {
    status: ScriptStatus,
    // Absent for entries that failed before a load could start
    promise: Option<Promise>,
    error: Option<String>,
    // Keep the load/error listeners alive for the life of the entry
    _listeners: Option<(Closure<dyn FnMut()>, Closure<dyn FnMut()>)>,
}

thread_local! {
    static SCRIPT_CACHE: RefCell<HashMap<String, ScriptEntry>> = RefCell::new(HashMap::new());
}

/// Load a script with the default `crossorigin="anonymous"` attribute.
pub fn load_script(src: &str) -> ScriptLoad {
    load_script_with(src, Some("anonymous"))
}

/// Load a script, reusing the cache entry if one exists for this URL.
///
/// The first call for a URL inserts a single `<script>` tag into the
/// document head and begins the load; concurrent and later calls never
/// insert a second tag.
pub fn load_script_with(src: &str, cross_origin: Option<&str>) -> ScriptLoad {
    let cached = SCRIPT_CACHE.with(|cache| {
        cache
            .borrow()
            .get(src)
            .map(|entry| (entry.status, entry.promise.clone(), entry.error.clone()))
    });

    if let Some((status, promise, error)) = cached {
        return match (status, promise) {
            (ScriptStatus::Pending, Some(promise)) => ScriptLoad::Pending(promise),
            (ScriptStatus::Loaded, _) => ScriptLoad::Loaded,
            _ => ScriptLoad::Failed(error.unwrap_or_else(|| "script load failed".to_string())),
        };
    }

    begin_load(src, cross_origin)
}

/// Read-only probe of the cache, for callers that must not start a load.
pub fn script_status(src: &str) -> Option<ScriptStatus> {
    SCRIPT_CACHE.with(|cache| cache.borrow().get(src).map(|entry| entry.status))
}

fn begin_load(src: &str, cross_origin: Option<&str>) -> ScriptLoad {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return fail(src, "no document in this context"),
    };

    let element = match document
        .create_element("script")
        .ok()
        .and_then(|element| element.dyn_into::<web_sys::HtmlScriptElement>().ok())
    {
        Some(element) => element,
        None => return fail(src, "could not create script element"),
    };
    element.set_src(src);
    element.set_cross_origin(cross_origin);

    // Capture the promise's settle functions so the native events can drive it
    let mut resolve_slot: Option<js_sys::Function> = None;
    let mut reject_slot: Option<js_sys::Function> = None;
    let promise = Promise::new(&mut |resolve, reject| {
        resolve_slot = Some(resolve);
        reject_slot = Some(reject);
    });
    let (resolve, reject) = match (resolve_slot, reject_slot) {
        (Some(resolve), Some(reject)) => (resolve, reject),
        _ => return fail(src, "promise executor did not run"),
    };

    let load_src = src.to_string();
    let on_load = Closure::<dyn FnMut()>::new(move || {
        debug!(src = %load_src, "payment SDK script loaded");
        settle(&load_src, ScriptStatus::Loaded, None);
        let _ = resolve.call0(&JsValue::NULL);
    });

    let error_src = src.to_string();
    let on_error = Closure::<dyn FnMut()>::new(move || {
        let message = format!("script failed to load: {}", error_src);
        warn!(src = %error_src, "payment SDK script failed to load");
        settle(&error_src, ScriptStatus::Failed, Some(message.clone()));
        let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(&message));
    });

    element.set_onload(Some(on_load.as_ref().unchecked_ref()));
    element.set_onerror(Some(on_error.as_ref().unchecked_ref()));

    let mounted = document
        .head()
        .map(|head| head.append_child(&element).is_ok())
        .unwrap_or(false);
    if !mounted {
        return fail(src, "could not insert script element");
    }

    debug!(%src, "payment SDK script tag inserted");

    SCRIPT_CACHE.with(|cache| {
        cache.borrow_mut().insert(
            src.to_string(),
            ScriptEntry {
                status: ScriptStatus::Pending,
                promise: Some(promise.clone()),
                error: None,
                _listeners: Some((on_load, on_error)),
            },
        );
    });

    ScriptLoad::Pending(promise)
}

/// Record a failure that happened before a load could start, so later
/// requests see the same sticky `Failed` entry as a settled load error.
fn fail(src: &str, message: &str) -> ScriptLoad {
    warn!(%src, %message, "payment SDK script load could not start");
    SCRIPT_CACHE.with(|cache| {
        cache.borrow_mut().insert(
            src.to_string(),
            ScriptEntry {
                status: ScriptStatus::Failed,
                promise: None,
                error: Some(message.to_string()),
                _listeners: None,
            },
        );
    });
    ScriptLoad::Failed(message.to_string())
}

fn settle(src: &str, status: ScriptStatus, error: Option<String>) {
    SCRIPT_CACHE.with(|cache| {
        if let Some(entry) = cache.borrow_mut().get_mut(src) {
            entry.status = status;
            entry.error = error;
        }
    });
}
