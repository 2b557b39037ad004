//! Lexical path transformations.
//!
//! Nothing in this module touches the filesystem except [`absolutize`], which
//! reads the current working directory. These functions back the
//! `abspath`/`normpath`/`relpath`/`expanduser`/`expandvars` methods.

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8 and starts with `~`
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use systempath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        // A non-UTF-8 path cannot start with the ASCII `~` in a way we can slice.
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Substitute `$NAME` and `${NAME}` with environment variable values.
///
/// Unknown variables and malformed references are left untouched. Non-UTF-8
/// paths are returned unchanged.
///
/// # Examples
///
/// ```
/// use systempath::path::normalize::expand_vars;
/// use std::path::{Path, PathBuf};
///
/// std::env::set_var("SP_DOC_ROOT", "/srv");
/// assert_eq!(expand_vars(Path::new("$SP_DOC_ROOT/www")), PathBuf::from("/srv/www"));
/// assert_eq!(expand_vars(Path::new("${SP_DOC_ROOT}/a")), PathBuf::from("/srv/a"));
/// assert_eq!(expand_vars(Path::new("$SP_DOC_UNSET_X/a")), PathBuf::from("$SP_DOC_UNSET_X/a"));
/// ```
#[must_use]
pub fn expand_vars(path: &Path) -> PathBuf {
    let Some(input) = path.to_str() else {
        return path.to_path_buf();
    };
    if !input.contains('$') {
        return path.to_path_buf();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 2),
                None => ("", 0),
            }
        } else {
            let end = after
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        match (name.is_empty(), env::var_os(name)) {
            (false, Some(value)) => {
                out.push_str(&value.to_string_lossy());
                rest = &after[consumed..];
            }
            _ => {
                // Keep the reference verbatim.
                let keep = if consumed == 0 { 1 } else { consumed + 1 };
                out.push_str(&rest[pos..pos + keep]);
                rest = &rest[pos + keep..];
            }
        }
    }
    out.push_str(rest);
    PathBuf::from(out)
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// Leading `..` components of a relative path are kept; `..` at the root is
/// dropped. An empty result becomes `.`.
///
/// # Examples
///
/// ```
/// use systempath::path::normalize::normpath;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normpath(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(normpath(Path::new("a/../../b")), PathBuf::from("../b"));
/// assert_eq!(normpath(Path::new("/..")), PathBuf::from("/"));
/// assert_eq!(normpath(Path::new("a/..")), PathBuf::from("."));
/// ```
#[must_use]
pub fn normpath(path: &Path) -> PathBuf {
    let mut prefix: Option<OsString> = None;
    let mut has_root = false;
    let mut parts: Vec<OsString> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = Some(p.as_os_str().to_os_string()),
            Component::RootDir => has_root = true,
            Component::CurDir => {}
            Component::ParentDir => {
                let last_is_normal = parts.last().is_some_and(|p| p != "..");
                if last_is_normal {
                    parts.pop();
                } else if !has_root {
                    parts.push(OsString::from(".."));
                }
            }
            Component::Normal(c) => parts.push(c.to_os_string()),
        }
    }

    let mut result = PathBuf::new();
    if let Some(prefix) = prefix {
        result.push(prefix);
    }
    if has_root {
        result.push(Component::RootDir);
    }
    for part in parts {
        result.push(part);
    }
    if result.as_os_str().is_empty() {
        result.push(".");
    }
    result
}

/// Make a path absolute against the current directory, then [`normpath`] it.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use systempath::path::normalize::absolutize;
/// use std::path::Path;
///
/// let abs = absolutize(Path::new("./src")).unwrap();
/// assert!(abs.is_absolute());
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normpath(path));
    }
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    Ok(normpath(&cwd.join(path)))
}

/// Express `path` relative to `start`, both made absolute first.
///
/// # Errors
///
/// Returns an error if either path cannot be made absolute, or if they live
/// on different drive prefixes.
///
/// # Examples
///
/// ```
/// use systempath::path::normalize::relative_to;
/// use std::path::{Path, PathBuf};
///
/// let rel = relative_to(Path::new("/a/b/c"), Path::new("/a/d")).unwrap();
/// assert_eq!(rel, PathBuf::from("../b/c"));
/// ```
pub fn relative_to(path: &Path, start: &Path) -> Result<PathBuf> {
    let target = absolutize(path)?;
    let base = absolutize(start)?;

    let mut target_iter = target.components().peekable();
    let mut base_iter = base.components().peekable();

    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) =
        (target_iter.peek(), base_iter.peek())
    {
        if a != b {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: format!("path is on a different drive than {}", start.display()),
            });
        }
    }

    while let (Some(a), Some(b)) = (target_iter.peek(), base_iter.peek()) {
        if a != b {
            break;
        }
        target_iter.next();
        base_iter.next();
    }

    let mut result = PathBuf::new();
    for _ in base_iter {
        result.push("..");
    }
    for component in target_iter {
        result.push(component);
    }
    if result.as_os_str().is_empty() {
        result.push(".");
    }
    Ok(result)
}
