//! Disk-backed object store for guide images and category icons.
//!
//! Objects are written under the configured storage directory and served
//! publicly at `/storage/<name>`. Names are namespaced by upload time plus
//! the sanitized original filename.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use regex::Regex;

/// Builds the object name for a fresh upload: unix millis, underscore,
/// sanitized original filename.
pub fn object_name(filename: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{}_{}", millis, sanitize(filename))
}

/// Keeps letters, digits, dots, dashes and underscores; every other run of
/// characters collapses to a single underscore.
pub fn sanitize(filename: &str) -> String {
    match Regex::new(r"[^A-Za-z0-9._-]+") {
        Ok(re) => re.replace_all(filename, "_").into_owned(),
        Err(_) => filename.to_string(),
    }
}

pub fn public_url(name: &str) -> String {
    format!("/storage/{name}")
}

/// Maps a stored URL back to the object name for deletion.
///
/// A URL containing `/storage/` maps to the segment after it; any other
/// absolute URL points outside this store and resolves to nothing; a bare
/// storage-relative path is used unchanged. Names trying to walk out of the
/// store directory resolve to nothing.
pub fn object_name_from_url(url: &str) -> Option<String> {
    let name = if let Some(position) = url.rfind("/storage/") {
        &url[position + "/storage/".len()..]
    } else if url.starts_with("http://") || url.starts_with("https://") {
        return None;
    } else {
        url.trim_start_matches('/')
    };
    if name.is_empty() || name.contains("..") {
        return None;
    }
    Some(name.to_string())
}

/// Removes the object behind a stored URL, tolerating a file that is
/// already gone.
pub fn remove(dir: &Path, url: &str) {
    let Some(name) = object_name_from_url(url) else {
        return;
    };
    let path = dir.join(&name);
    match fs::remove_file(&path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("storage object {name} was already missing");
        }
        Err(e) => warn!("failed to remove storage object {name}: {e}"),
    }
}
