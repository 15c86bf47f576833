//! Forward-slash href construction.

use std::path::Path;

/// Join an href prefix and a file name the way a posix path join does.
///
/// Backslashes become `/`, `.` segments and repeated separators are
/// dropped and `..` is folded. A leading `scheme://authority` is kept
/// as-is and only the path after it is normalized, so `https://host/`
/// stays a valid URL.
pub fn join_href(prefix: &str, file_name: &str) -> String {
    let prefix = prefix.replace('\\', "/");
    match split_authority(&prefix) {
        Some((authority, path)) => {
            let path = if path.is_empty() { "/" } else { path };
            format!("{authority}{}", normalize_join(path, file_name))
        }
        None => normalize_join(&prefix, file_name),
    }
}

/// Split `scheme://host[:port]` from the rest of a URL-like prefix.
fn split_authority(prefix: &str) -> Option<(&str, &str)> {
    let scheme_end = prefix.find("://")?;
    let scheme = &prefix[..scheme_end];
    if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) {
        return None;
    }
    let host_start = scheme_end + 3;
    let host_end = prefix[host_start..]
        .find('/')
        .map_or(prefix.len(), |i| host_start + i);
    Some(prefix.split_at(host_end))
}

/// Join a directory and a file name as a normalized posix path.
///
/// `.` segments and repeated separators are dropped and `..` is folded
/// into its parent where one exists.
pub fn join_dir(dir: &Path, file_name: &str) -> String {
    normalize_join(&dir.to_string_lossy().replace('\\', "/"), file_name)
}

fn normalize_join(base: &str, file_name: &str) -> String {
    let absolute = base.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for seg in base.split('/').chain(std::iter::once(file_name)) {
        match seg {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            s => segments.push(s),
        }
    }

    let joined = segments.join("/");
    if absolute { format!("/{joined}") } else { joined }
}
