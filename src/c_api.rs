// C ABI for hosts that own speech capture (Android, desktop shells).
// Every call takes the engine handle explicitly; there is no global state.
// Panics are caught so they never unwind across the FFI boundary.
use crate::core::engine::{NoFallback, RecommendationEngine};
use crate::dataset::load_symptom_records;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::ptr;

const NULL_JSON: &str = "null";

unsafe fn read_str<'a>(s: *const c_char) -> &'a str {
    if s.is_null() {
        return "";
    }
    CStr::from_ptr(s).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s)
        .or_else(|_| CString::new(NULL_JSON))
        .map_or(ptr::null_mut(), CString::into_raw)
}

/// Loads the symptom CSV at `dataset_path` and returns an engine handle, or
/// null if the file cannot be read. Release it with `triage_engine_free`.
///
/// # Safety
/// `dataset_path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn triage_engine_new(dataset_path: *const c_char) -> *mut RecommendationEngine {
    let path = read_str(dataset_path);
    let result = catch_unwind(|| match load_symptom_records(Path::new(path)) {
        Ok(records) => Box::into_raw(Box::new(RecommendationEngine::from_records(&records))),
        Err(e) => {
            tracing::error!(error = %e, path, "failed to load symptom dataset");
            ptr::null_mut()
        }
    });
    result.unwrap_or_else(|_| {
        tracing::error!("panic during engine initialization");
        ptr::null_mut()
    })
}

/// # Safety
/// `engine` must be null or a handle from `triage_engine_new` not yet freed.
#[no_mangle]
pub unsafe extern "C" fn triage_engine_free(engine: *mut RecommendationEngine) {
    if !engine.is_null() {
        drop(Box::from_raw(engine));
    }
}

/// Recommendation for `text` as a JSON object, or `"null"` when the handle is
/// null. Release the returned string with `triage_free_string`.
///
/// # Safety
/// `engine` must be null or a live handle; `text` null or NUL-terminated.
#[no_mangle]
pub unsafe extern "C" fn triage_recommend(
    engine: *const RecommendationEngine,
    text: *const c_char,
) -> *mut c_char {
    let text = read_str(text);
    let Some(engine) = engine.as_ref() else {
        return into_c_string(NULL_JSON.to_string());
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let recommendation = engine.recommend(text, &NoFallback);
        serde_json::to_string(&recommendation).unwrap_or_else(|_| NULL_JSON.to_string())
    }));
    let json = result.unwrap_or_else(|_| {
        tracing::error!("panic in triage_recommend");
        NULL_JSON.to_string()
    });
    into_c_string(json)
}

/// # Safety
/// `s` must be null or a string returned by this library, freed only once.
#[no_mangle]
pub unsafe extern "C" fn triage_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
