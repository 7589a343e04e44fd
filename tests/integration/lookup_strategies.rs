//! The indexed and tree-walk strategies must be indistinguishable to callers

use nsfs::config::NamespaceConfig;
use nsfs::{LookupStrategy, Namespace, NamespaceError, RenderOptions, SharedNamespace};

fn plain() -> RenderOptions {
    RenderOptions {
        indent_width: 2,
        timestamps: false,
    }
}

fn build(strategy: LookupStrategy) -> (Namespace, Vec<Result<(), NamespaceError>>) {
    let mut ns = Namespace::with_strategy(strategy);
    let mut results = Vec::new();
    results.push(ns.add_dir("/", "src").map(|_| ()));
    results.push(ns.add_dir("src", "bin").map(|_| ()));
    results.push(ns.add_file("src", "lib.rs", 300).map(|_| ()));
    results.push(ns.add_file("bin", "main.rs", 120).map(|_| ()));
    results.push(ns.add_file("bin", "lib.rs", 1).map(|_| ()));
    results.push(ns.add_dir("lib.rs", "nested").map(|_| ()));
    results.push(ns.add_dir("/", "docs").map(|_| ()));
    results.push(ns.add_file("docs", "guide.md", 300).map(|_| ()));
    results.push(ns.delete("bin"));
    results.push(ns.delete("main.rs"));
    results.push(ns.add_file("docs", "main.rs", 7).map(|_| ()));
    results.push(ns.delete("/"));
    (ns, results)
}

#[test]
fn strategies_agree_on_results_and_shape() {
    let (indexed, indexed_results) = build(LookupStrategy::Indexed);
    let (walked, walked_results) = build(LookupStrategy::TreeWalk);

    assert_eq!(indexed_results, walked_results);
    assert_eq!(
        indexed.render(plain()).to_string(),
        walked.render(plain()).to_string()
    );
    assert_eq!(indexed.stats(), walked.stats());
    assert_eq!(
        indexed.get_biggest_file().map(|f| f.name.clone()),
        walked.get_biggest_file().map(|f| f.name.clone())
    );
    assert!(indexed.verify_index());
    assert!(walked.verify_index());
}

#[test]
fn expected_shape_after_mixed_operations() {
    let (ns, results) = build(LookupStrategy::TreeWalk);
    assert_eq!(
        results[4],
        Err(NamespaceError::DuplicateName("lib.rs".to_string()))
    );
    assert_eq!(
        results[5],
        Err(NamespaceError::ParentNotFound("lib.rs".to_string()))
    );
    assert_eq!(
        results[9],
        Err(NamespaceError::EntryNotFound("main.rs".to_string()))
    );
    assert_eq!(results[11], Err(NamespaceError::RootProtected));

    let expected = "\
|-- / (Dir)
  |-- src (Dir)
    |-- lib.rs (File, Size: 300)
  |-- docs (Dir)
    |-- guide.md (File, Size: 300)
    |-- main.rs (File, Size: 7)
";
    assert_eq!(ns.render(plain()).to_string(), expected);
    // equal sizes: lib.rs is reached first
    assert_eq!(ns.get_biggest_file().map(|f| f.name.as_str()), Some("lib.rs"));
}

#[test]
fn namespace_from_config_uses_configured_strategy() {
    let config = NamespaceConfig {
        lookup: LookupStrategy::TreeWalk,
    };
    assert_eq!(
        Namespace::from_config(&config).strategy(),
        LookupStrategy::TreeWalk
    );
    assert_eq!(
        Namespace::from_config(&NamespaceConfig::default()).strategy(),
        LookupStrategy::Indexed
    );
}

#[test]
fn shared_namespace_serializes_mutations() {
    let shared = SharedNamespace::with_strategy(LookupStrategy::Indexed);
    let writer = shared.clone();
    std::thread::spawn(move || {
        writer.write(|ns| {
            ns.add_dir("/", "worker")?;
            ns.add_file("worker", "out.log", 64)
        })
    })
    .join()
    .unwrap()
    .unwrap();

    assert_eq!(shared.read(|ns| ns.get_file_size("out.log")), Ok(64));
}
