//! Property tests over random operation sequences

use nsfs::{LookupStrategy, Namespace, NamespaceError, RenderOptions, MAX_NAME_LENGTH};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    AddDir { parent: usize, name: usize },
    AddFile { parent: usize, name: usize, size: i64 },
    Delete { name: usize },
}

/// Small pool so that collisions, missing parents, and re-adds are common
const NAMES: [&str; 10] = ["/", "a", "b", "c", "d", "e", "f.txt", "g.txt", "h.txt", "i.txt"];

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..NAMES.len(), 1..NAMES.len()).prop_map(|(parent, name)| Op::AddDir { parent, name }),
        (0..NAMES.len(), 1..NAMES.len(), -2i64..2048)
            .prop_map(|(parent, name, size)| Op::AddFile { parent, name, size }),
        (0..NAMES.len()).prop_map(|name| Op::Delete { name }),
    ]
}

fn apply(ns: &mut Namespace, op: &Op) -> Result<(), NamespaceError> {
    match op {
        Op::AddDir { parent, name } => ns.add_dir(NAMES[*parent], NAMES[*name]).map(|_| ()),
        Op::AddFile { parent, name, size } => ns
            .add_file(NAMES[*parent], NAMES[*name], *size)
            .map(|_| ()),
        Op::Delete { name } => ns.delete(NAMES[*name]),
    }
}

fn plain() -> RenderOptions {
    RenderOptions {
        indent_width: 1,
        timestamps: false,
    }
}

proptest! {
    #[test]
    fn names_stay_unique_and_index_consistent(ops in prop::collection::vec(op(), 0..60)) {
        let mut ns = Namespace::new();
        for op in &ops {
            let _ = apply(&mut ns, op);
            prop_assert!(ns.verify_index());
        }
        let names: Vec<String> = ns.render(plain()).map(|l| l.name.to_string()).collect();
        let unique: HashSet<&String> = names.iter().collect();
        prop_assert_eq!(names.len(), unique.len());
        prop_assert_eq!(names.len(), ns.len());
    }

    #[test]
    fn strategies_are_observationally_equal(ops in prop::collection::vec(op(), 0..60)) {
        let mut indexed = Namespace::with_strategy(LookupStrategy::Indexed);
        let mut walked = Namespace::with_strategy(LookupStrategy::TreeWalk);
        for op in &ops {
            prop_assert_eq!(apply(&mut indexed, op), apply(&mut walked, op));
        }
        prop_assert_eq!(
            indexed.render(plain()).to_string(),
            walked.render(plain()).to_string()
        );
        prop_assert_eq!(
            indexed.get_biggest_file().map(|f| f.name.clone()),
            walked.get_biggest_file().map(|f| f.name.clone())
        );
    }

    #[test]
    fn rejected_operations_do_not_mutate(ops in prop::collection::vec(op(), 0..40)) {
        let mut ns = Namespace::new();
        for op in &ops {
            let before = ns.render(plain()).to_string();
            if apply(&mut ns, op).is_err() {
                prop_assert_eq!(ns.render(plain()).to_string(), before);
            }
        }
    }

    #[test]
    fn added_file_size_round_trips(size in 1i64..i64::MAX, name in "[a-z]{1,32}") {
        let mut ns = Namespace::new();
        ns.add_file("/", &name, size).unwrap();
        prop_assert_eq!(ns.get_file_size(&name), Ok(size as u64));
    }

    #[test]
    fn overlong_names_always_fail(extra in 1usize..64) {
        let mut ns = Namespace::new();
        let name = "x".repeat(MAX_NAME_LENGTH + extra);
        let is_too_long = matches!(
            ns.add_dir("/", &name),
            Err(NamespaceError::NameTooLong { .. })
        );
        prop_assert!(is_too_long);
        prop_assert!(ns.is_empty());
    }

    #[test]
    fn biggest_file_is_first_maximum(sizes in prop::collection::vec(1i64..100, 1..20)) {
        let mut ns = Namespace::new();
        for (i, size) in sizes.iter().enumerate() {
            ns.add_file("/", &format!("f{}", i), *size).unwrap();
        }
        let max = *sizes.iter().max().unwrap();
        let first = sizes.iter().position(|s| *s == max).unwrap();
        let expected = format!("f{}", first);
        prop_assert_eq!(ns.get_biggest_file().map(|f| f.name.as_str()), Some(expected.as_str()));
    }
}
