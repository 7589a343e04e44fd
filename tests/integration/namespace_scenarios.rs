//! Namespace behaviour through the public API

use nsfs::{ErrorKind, Namespace, NamespaceError, RenderOptions};

fn setup() -> Namespace {
    Namespace::new()
}

#[test]
fn documents_scenario() {
    let mut ns = setup();
    ns.add_dir("/", "Documents").unwrap();
    ns.add_file("Documents", "report.txt", 1024).unwrap();
    assert_eq!(ns.get_file_size("report.txt").unwrap(), 1024);

    ns.delete("Documents").unwrap();
    let err = ns.get_file_size("report.txt").unwrap_err();
    assert_eq!(err, NamespaceError::EntryNotFound("report.txt".to_string()));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn add_dir_then_delete() {
    let mut ns = setup();
    assert_eq!(
        ns.delete("Projects"),
        Err(NamespaceError::EntryNotFound("Projects".to_string()))
    );
    ns.add_dir("/", "Projects").unwrap();
    assert!(ns.delete("Projects").is_ok());
}

#[test]
fn file_sizes_round_trip() {
    let mut ns = setup();
    ns.add_file("/", "file1.txt", 512).unwrap();
    ns.add_file("/", "file2.txt", 1024).unwrap();

    assert_eq!(ns.get_file_size("file1.txt").unwrap(), 512);
    assert_eq!(ns.get_file_size("file2.txt").unwrap(), 1024);
}

#[test]
fn biggest_file_is_second_insertion() {
    let mut ns = setup();
    ns.add_file("/", "file1.txt", 512).unwrap();
    ns.add_file("/", "file2.txt", 1024).unwrap();
    ns.add_file("/", "file3.txt", 256).unwrap();

    let biggest = ns.get_biggest_file().unwrap();
    assert_eq!(biggest.name, "file2.txt");
    assert_eq!(biggest.size, 1024);
}

#[test]
fn biggest_file_of_empty_namespace_is_none() {
    let mut ns = setup();
    assert!(ns.get_biggest_file().is_none());
    ns.add_dir("/", "only-dirs").unwrap();
    assert!(ns.get_biggest_file().is_none());
}

#[test]
fn delete_file_twice_fails_second_time() {
    let mut ns = setup();
    ns.add_file("/", "file.txt", 512).unwrap();
    assert!(ns.delete("file.txt").is_ok());
    assert_eq!(
        ns.delete("file.txt"),
        Err(NamespaceError::EntryNotFound("file.txt".to_string()))
    );
}

#[test]
fn delete_directory_twice_fails_second_time() {
    let mut ns = setup();
    ns.add_dir("/", "TestDir").unwrap();
    assert!(ns.delete("TestDir").is_ok());
    assert!(ns.delete("TestDir").is_err());
}

#[test]
fn root_is_always_protected() {
    let mut ns = setup();
    assert_eq!(ns.delete("/"), Err(NamespaceError::RootProtected));
    ns.add_dir("/", "a").unwrap();
    ns.add_file("a", "b", 1).unwrap();
    assert_eq!(ns.delete("/"), Err(NamespaceError::RootProtected));
    assert_eq!(NamespaceError::RootProtected.kind(), ErrorKind::InvalidArgument);
    assert_eq!(ns.len(), 3);
}

#[test]
fn names_are_unique_across_directories() {
    let mut ns = setup();
    ns.add_dir("/", "left").unwrap();
    ns.add_dir("/", "right").unwrap();
    ns.add_file("left", "same.txt", 1).unwrap();

    assert_eq!(
        ns.add_file("right", "same.txt", 1),
        Err(NamespaceError::DuplicateName("same.txt".to_string()))
    );
    // files and directories share one name space
    assert_eq!(
        ns.add_dir("right", "same.txt"),
        Err(NamespaceError::DuplicateName("same.txt".to_string()))
    );
    assert_eq!(
        ns.add_file("right", "left", 1),
        Err(NamespaceError::DuplicateName("left".to_string()))
    );
}

#[test]
fn long_names_leave_namespace_unchanged() {
    let mut ns = setup();
    let long = "a".repeat(33);
    let before = ns.render(RenderOptions::default()).count();

    let err = ns.add_file("/", &long, 10).unwrap_err();
    assert!(matches!(err, NamespaceError::NameTooLong { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(matches!(
        ns.add_dir("/", &long),
        Err(NamespaceError::NameTooLong { .. })
    ));

    assert_eq!(ns.render(RenderOptions::default()).count(), before);
    assert!(!ns.contains(&long));
}

#[test]
fn non_positive_sizes_are_rejected() {
    let mut ns = setup();
    assert_eq!(ns.add_file("/", "zero", 0), Err(NamespaceError::InvalidSize(0)));
    assert_eq!(
        ns.add_file("/", "negative", -42),
        Err(NamespaceError::InvalidSize(-42))
    );
    assert!(ns.is_empty());
}

#[test]
fn missing_parent_is_rejected() {
    let mut ns = setup();
    assert_eq!(
        ns.add_file("nowhere", "a", 1),
        Err(NamespaceError::ParentNotFound("nowhere".to_string()))
    );
    assert_eq!(
        ns.add_dir("nowhere", "b"),
        Err(NamespaceError::ParentNotFound("nowhere".to_string()))
    );
    assert!(ns.is_empty());
}

#[test]
fn subtree_deletion_removes_every_descendant() {
    let mut ns = setup();
    ns.add_dir("/", "top").unwrap();
    ns.add_dir("top", "mid").unwrap();
    ns.add_dir("mid", "bottom").unwrap();
    ns.add_file("top", "t.txt", 1).unwrap();
    ns.add_file("mid", "m.txt", 2).unwrap();
    ns.add_file("bottom", "b.txt", 3).unwrap();
    ns.add_file("/", "outside.txt", 4).unwrap();

    ns.delete("top").unwrap();
    for name in ["top", "mid", "bottom", "t.txt", "m.txt", "b.txt"] {
        assert!(!ns.contains(name), "{} should be gone", name);
    }
    assert_eq!(
        ns.get_file_size("b.txt"),
        Err(NamespaceError::EntryNotFound("b.txt".to_string()))
    );
    assert_eq!(ns.get_file_size("outside.txt").unwrap(), 4);
    assert_eq!(ns.get_biggest_file().map(|f| f.name.as_str()), Some("outside.txt"));
    assert!(ns.verify_index());
}

#[test]
fn deleting_nested_entry_keeps_sibling_order() {
    let mut ns = setup();
    ns.add_dir("/", "d").unwrap();
    for name in ["a", "b", "c"] {
        ns.add_file("d", name, 1).unwrap();
    }
    ns.delete("b").unwrap();
    ns.add_file("d", "e", 1).unwrap();
    assert_eq!(ns.entry("d").unwrap().files(), vec!["a", "c", "e"]);
}

#[test]
fn creation_timestamps_are_set() {
    let before = chrono::Utc::now();
    let mut ns = setup();
    ns.add_file("/", "a", 1).unwrap();
    let entry = ns.entry("a").unwrap();
    assert!(entry.created_at() >= before);
    assert!(entry.created_at() <= chrono::Utc::now());
}
