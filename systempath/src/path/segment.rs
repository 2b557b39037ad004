//! Child segment validation and lexical joining.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Check that `segment` is usable as a relative child path.
///
/// A valid segment is non-empty, has no NUL byte, and carries neither a root
/// nor a drive prefix. Multi-component segments such as `a/b` are accepted.
pub(crate) fn validate(segment: &Path) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidSegment {
        segment: segment.to_string_lossy().into_owned(),
        reason: reason.to_string(),
    };

    if segment.as_os_str().is_empty() {
        return Err(invalid("segment must not be empty"));
    }
    if segment.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(invalid("segment must not contain NUL bytes"));
    }
    if segment.has_root() || segment.is_absolute() {
        return Err(invalid("segment must be relative"));
    }
    if matches!(segment.components().next(), Some(Component::Prefix(_))) {
        return Err(invalid("segment must not carry a drive prefix"));
    }
    Ok(())
}

/// Append the components of `segment` to `base`, never replacing it.
///
/// Root and prefix components of `segment` are dropped, so the result always
/// stays under `base`. `.` is a no-op and `..` is kept verbatim.
pub(crate) fn join_lexical(base: &Path, segment: &Path) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in segment.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => joined.push(".."),
            Component::Normal(part) => joined.push(part),
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_relative() {
        assert!(validate(Path::new("a.txt")).is_ok());
        assert!(validate(Path::new("a/b/c")).is_ok());
        assert!(validate(Path::new("..")).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = validate(Path::new("")).unwrap_err();
        assert!(matches!(err, Error::InvalidSegment { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_validate_rejects_absolute() {
        assert!(validate(Path::new("/etc")).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_validate_rejects_nul() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let segment = Path::new(OsStr::from_bytes(b"bad\0name"));
        assert!(validate(segment).is_err());
    }

    #[test]
    fn test_join_lexical_appends() {
        assert_eq!(
            join_lexical(Path::new("/tmp"), Path::new("a/b")),
            PathBuf::from("/tmp/a/b")
        );
        assert_eq!(
            join_lexical(Path::new("base"), Path::new("../x")),
            PathBuf::from("base/../x")
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_join_lexical_drops_root() {
        assert_eq!(
            join_lexical(Path::new("/tmp"), Path::new("/etc/passwd")),
            PathBuf::from("/tmp/etc/passwd")
        );
    }
}
