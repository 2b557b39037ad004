//! Integration tests for generic path resolution.

mod common;

use common::Scratch;
use systempath::{Entry, Error, PathKind, SystemPath};

#[test]
fn test_resolution_is_never_cached() {
    let scratch = Scratch::new();
    let path = SystemPath::new(scratch.join("shape-shifter"));

    assert_eq!(path.kind().unwrap(), PathKind::Unknown);

    path.write(b"now a file").unwrap();
    assert!(matches!(path.resolve().unwrap(), Entry::File(_)));

    path.delete(false).unwrap();
    path.make_dirs(false).unwrap();
    assert!(matches!(path.resolve().unwrap(), Entry::Directory(_)));
    assert!(matches!(path.read(), Err(Error::IsADirectory { .. })));
}

#[test]
fn test_operator_chain_produces_generic_paths() {
    let scratch = Scratch::new();
    scratch.file("a/b/c.txt", b"content");

    let root = SystemPath::new(scratch.path());
    let leaf = &root / "a" / "b" / "c.txt";
    assert_eq!(leaf.read().unwrap(), b"content");
    assert_eq!(leaf, &root + "a/b/c.txt");
}

#[test]
fn test_equality_across_types() {
    let scratch = Scratch::new();
    let path = scratch.file("f", b"");
    let generic = SystemPath::new(&path);
    let Entry::File(file) = generic.resolve().unwrap() else {
        panic!("expected a file");
    };
    assert_eq!(generic, file);
    assert_eq!(file, path);
}

#[test]
fn test_invalid_segments_rejected() {
    let scratch = Scratch::new();
    let root = SystemPath::new(scratch.path());
    assert!(matches!(root.join(""), Err(Error::InvalidSegment { .. })));
    #[cfg(unix)]
    assert!(matches!(
        root.join("/absolute"),
        Err(Error::InvalidSegment { .. })
    ));
}

#[test]
fn test_lexical_helpers() {
    let path = SystemPath::new("/srv/www/../data/./file.tar.gz");
    assert_eq!(path.normpath().as_path(), std::path::Path::new("/srv/data/file.tar.gz"));
    assert_eq!(path.basename().unwrap(), "file.tar.gz");
    assert_eq!(
        path.relpath("/srv").unwrap().as_path(),
        std::path::Path::new("data/file.tar.gz")
    );
}

#[test]
#[cfg(unix)]
fn test_symlink_handling() {
    let scratch = Scratch::new();
    let target = scratch.file("target.txt", b"via link");
    let link = SystemPath::new(&target).symlink_to(scratch.join("link")).unwrap();

    assert!(link.is_symlink());
    assert!(link.is_file());
    assert_eq!(SystemPath::new(link.as_path()).read().unwrap(), b"via link");

    link.delete(false).unwrap();
    assert!(!link.lexists());
    assert!(std::path::Path::new(&target).exists());
}
