//! Small path-text helpers. These work on strings, not `std::path`, because
//! matching must behave identically for paths recorded on another platform
//! (a Windows-style path in a listing processed on Linux, and vice versa).

/// Canonicalize separators to `/` so folder-based patterns see one form.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// The last path segment, tolerating either separator style.
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Filename with its final extension removed.
pub fn file_stem(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}
