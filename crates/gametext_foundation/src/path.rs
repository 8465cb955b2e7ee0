//! Game path helpers.
//!
//! Game paths always use `/`. User input is sanitized with
//! [`sanitize_file_path`] before any other function here sees it.

/// Converts every `\` to `/`. Does not validate anything else.
pub fn sanitize_file_path(path: &mut String) {
    if path.contains('\\') {
        *path = path.replace('\\', "/");
    }
}

/// Returns true for a non-empty name with no `\` in it.
#[must_use]
pub fn validate_filename(filename: &str) -> bool {
    !filename.is_empty() && !filename.contains('\\')
}

/// Returns true for a name that cannot escape the game directory.
///
/// Rejects drive letters, `..`, doubled slashes, and names starting with
/// `/` or `.` on top of the [`validate_filename`] checks.
#[must_use]
pub fn validate_relative_filename(filename: &str) -> bool {
    if !validate_filename(filename) {
        return false;
    }

    if filename.contains(':') || filename.contains("..") || filename.contains("//") {
        return false;
    }

    !filename.starts_with('/') && !filename.starts_with('.')
}

/// Index of the last `.` in the final path component, if something follows it.
fn extension_dot(path: &str) -> Option<usize> {
    let component = path.rfind('/').unwrap_or(0);
    let dot = component + path[component..].rfind('.')?;
    (dot + 1 < path.len()).then_some(dot)
}

/// Drops the final extension of the last path component in place.
///
/// `"maps/dm1.bsp"` becomes `"maps/dm1"`. A trailing dot is left alone.
pub fn strip_extension(path: &mut String) {
    if let Some(dot) = extension_dot(path) {
        path.truncate(dot);
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Appends `extension` (which includes the dot) if the last component has none.
///
/// The result stays below `size` bytes. When it would not, the path is cut
/// short to make room for the extension. An empty extension, or one that can
/// never fit, leaves the path untouched.
pub fn default_extension(path: &mut String, extension: &str, size: usize) {
    if extension.is_empty() || extension.len() >= size {
        return;
    }
    if extension_dot(path).is_some() {
        return;
    }

    let room = size - extension.len() - 1;
    if path.len() > room {
        let cut = floor_char_boundary(path, room);
        path.truncate(cut);
    }
    path.push_str(extension);
}

/// Text after the last `/`, or the whole path.
#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rfind('/').map_or(path, |slash| &path[slash + 1..])
}

/// Every extension of the last component, starting at its first `.`.
///
/// `"models/gib.tar.gz"` yields `".tar.gz"`. Empty when there is none.
#[must_use]
pub fn file_extension(path: &str) -> &str {
    let component = path.rfind('/').unwrap_or(0);
    path[component..]
        .find('.')
        .map_or("", |dot| &path[component + dot..])
}

/// The path without [`file_extension`].
#[must_use]
pub fn strip_all_extensions(path: &str) -> &str {
    &path[..path.len() - file_extension(path).len()]
}

/// Text from the last `.` anywhere in the path. Empty when there is none.
#[must_use]
pub fn last_file_extension(path: &str) -> &str {
    path.rfind('.').map_or("", |dot| &path[dot..])
}

/// Text before the last `/`, or the whole path when there is no slash.
#[must_use]
pub fn base_path(path: &str) -> &str {
    path.rfind('/').map_or(path, |slash| &path[..slash])
}
