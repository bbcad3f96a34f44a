//! Common utility functions

use chrono::Utc;

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Normalize a user-entered folder name: trimmed, blank means no folder
pub fn normalize_folder_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

/// Folder name derived from a file name: everything before the last `.`,
/// trimmed. A blank result means no folder.
pub fn folder_name_from_file_name(file_name: &str) -> Option<String> {
    let stem = match file_name.rfind('.') {
        Some(pos) => &file_name[..pos],
        None => file_name,
    };
    normalize_folder_name(Some(stem))
}
