//! Syntactic pathname validation.
//!
//! A pathname is valid when the OS would accept it as a name, whether or not
//! anything exists there. Each segment is probed with `lstat` against the
//! filesystem root so the OS itself rejects names it cannot represent;
//! "not found" and permission errors are expected and ignored.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, MAIN_SEPARATOR};

/// Longest single path segment accepted by common filesystems (NAME_MAX)
const MAX_SEGMENT_LENGTH: usize = 255;

#[cfg(windows)]
const ERROR_INVALID_NAME: i32 = 123;

#[cfg(any(target_os = "linux", target_os = "android"))]
const ENAMETOOLONG: i32 = 36;
#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
const ENAMETOOLONG: i32 = 63;
#[cfg(unix)]
const ERANGE: i32 = 34;

/// Returns `true` if `pathname` is a syntactically valid path for the
/// current OS, `false` otherwise.
///
/// Non-UTF-8 input, empty input and input containing NUL bytes are invalid.
/// Any unexpected probing failure is treated as invalid.
pub fn is_pathname_valid(pathname: &OsStr) -> bool {
    let Some(pathname) = pathname.to_str() else {
        return false;
    };
    if pathname.is_empty() || pathname.contains('\0') {
        return false;
    }

    let (root, remainder) = split_root(pathname);
    if !Path::new(&root).is_dir() {
        return false;
    }
    let root = format!("{}{}", root.trim_end_matches(MAIN_SEPARATOR), MAIN_SEPARATOR);

    for segment in remainder.split(MAIN_SEPARATOR) {
        if segment.len() > MAX_SEGMENT_LENGTH {
            return false;
        }
        if let Err(err) = fs::symlink_metadata(format!("{}{}", root, segment)) {
            if is_invalid_name(&err) {
                return false;
            }
        }
    }

    true
}

/// Splits off the drive prefix and picks the root directory to probe against.
#[cfg(windows)]
fn split_root(pathname: &str) -> (String, &str) {
    let remainder = match pathname.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => &pathname[2..],
        _ => pathname,
    };
    let root = std::env::var("HOMEDRIVE").unwrap_or_else(|_| "C:".to_string());
    (root, remainder)
}

#[cfg(not(windows))]
fn split_root(pathname: &str) -> (String, &str) {
    (MAIN_SEPARATOR.to_string(), pathname)
}

fn is_invalid_name(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::InvalidInput {
        return true;
    }

    #[cfg(windows)]
    {
        err.raw_os_error() == Some(ERROR_INVALID_NAME)
    }
    #[cfg(unix)]
    {
        matches!(err.raw_os_error(), Some(code) if code == ENAMETOOLONG || code == ERANGE)
    }
    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_path_is_invalid() {
        assert!(!is_pathname_valid(OsStr::new("")));
    }

    #[test]
    fn test_nul_byte_is_invalid() {
        assert!(!is_pathname_valid(OsStr::new("/tmp/has\0nul")));
    }

    #[test]
    fn test_existing_directory_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_pathname_valid(temp_dir.path().as_os_str()));
    }

    #[test]
    fn test_nonexistent_absolute_path_is_valid() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("not").join("created").join("yet");
        assert!(is_pathname_valid(missing.as_os_str()));
    }

    #[test]
    fn test_relative_path_is_valid() {
        assert!(is_pathname_valid(OsStr::new("plugins/my-plugin")));
    }

    #[test]
    fn test_overlong_segment_is_invalid() {
        let segment = "a".repeat(MAX_SEGMENT_LENGTH + 1);
        let pathname = format!("{}tmp{}{}", MAIN_SEPARATOR, MAIN_SEPARATOR, segment);
        assert!(!is_pathname_valid(OsStr::new(&pathname)));
    }

    #[test]
    fn test_segment_at_limit_is_valid() {
        let segment = "a".repeat(MAX_SEGMENT_LENGTH);
        let pathname = format!("{}tmp{}{}", MAIN_SEPARATOR, MAIN_SEPARATOR, segment);
        assert!(is_pathname_valid(OsStr::new(&pathname)));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_invalid() {
        use std::os::unix::ffi::OsStrExt;
        let pathname = OsStr::from_bytes(b"/tmp/\xff\xfe");
        assert!(!is_pathname_valid(pathname));
    }
}
