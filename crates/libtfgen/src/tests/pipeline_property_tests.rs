//! Property tests for flattening and re-segmentation over generated query
//! documents.

use crate::ExceptionSet;
use crate::SEPARATOR;
use crate::parse_query;
use crate::path_resolver::capitalize_first;
use crate::path_resolver::resolve_accessor_paths;
use crate::path_resolver::segment_flat_name;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// A lower-case name without separators that can never be `edges`.
fn plain_name() -> impl Strategy<Value = String> {
    "[f-z][a-z0-9]{0,7}"
}

/// A name that may contain separators between its words.
fn multi_word_name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(_[a-z]{1,6}){0,2}"
}

/// Selections directly under `node`: each entry is either a leaf (`None`) or
/// a nested block of leaves.
type Selections = BTreeMap<String, Option<BTreeSet<String>>>;

fn selections() -> impl Strategy<Value = Selections> {
    prop::collection::btree_map(
        plain_name(),
        prop::option::of(prop::collection::btree_set(plain_name(), 1..4)),
        0..6,
    )
}

fn build_document(
    operation: &str,
    root: &str,
    required_param: Option<&str>,
    selections: &Selections,
) -> String {
    let mut document = match required_param {
        Some(param) => format!(
            "query {operation}(${param}: String!) {{\n  \
            {root}(name__value: ${param}) {{\n",
        ),
        None => format!("query {operation} {{\n  {root} {{\n"),
    };
    document.push_str("    edges {\n      node {\n");
    for (name, nested) in selections {
        match nested {
            None => document.push_str(&format!("        {name}\n")),
            Some(leaves) => {
                document.push_str(&format!("        {name} {{\n"));
                for leaf in leaves {
                    document.push_str(&format!("          {leaf}\n"));
                }
                document.push_str("        }\n");
            },
        }
    }
    document.push_str("      }\n    }\n  }\n}\n");
    document
}

/// The accessor each selection should resolve to, in document order.
fn expected_accessors(
    root: &str,
    edges: &str,
    selections: &Selections,
) -> Vec<String> {
    let mut accessors = vec![];
    for (name, nested) in selections {
        let prefix = format!("{root}.{edges}.Node.{}", capitalize_first(name));
        match nested {
            None => accessors.push(prefix),
            Some(leaves) => {
                for leaf in leaves {
                    accessors.push(
                        format!("{prefix}.{}", capitalize_first(leaf)),
                    );
                }
            },
        }
    }
    accessors
}

proptest! {
    /// Names without separators come back exactly as they went in.
    #[test]
    fn plain_names_round_trip(
        names in prop::collection::vec(plain_name(), 1..8),
    ) {
        let flat_name = names.join("_");
        let segments = segment_flat_name(&flat_name, &ExceptionSet::new());
        prop_assert_eq!(segments.to_vec(), names);
    }

    /// Whatever the exceptions, re-joining the segments reproduces the flat
    /// name and no segment is empty.
    #[test]
    fn segments_rejoin_to_flat_name(
        names in prop::collection::vec(multi_word_name(), 1..6),
    ) {
        let exceptions: ExceptionSet =
            names.iter().filter(|name| name.contains(SEPARATOR)).collect();
        let flat_name = names.join("_");
        let segments = segment_flat_name(&flat_name, &exceptions);

        prop_assert_eq!(segments.join("_"), flat_name);
        for segment in &segments {
            prop_assert!(!segment.is_empty());
        }
    }

    /// Parsing a generated document yields the selected leaves, each resolved
    /// to the accessor that mirrors its nesting, with the `Edges` index that
    /// matches the lookup shape.
    #[test]
    fn generated_documents_resolve_structurally(
        operation in "[A-Za-z][A-Za-z0-9]{0,10}",
        root in "[A-Z][A-Za-z]{0,10}",
        required_param in prop::option::of("[a-z]{1,6}_[a-z]{1,6}"),
        selections in selections(),
    ) {
        let document = build_document(
            &operation,
            &root,
            required_param.as_deref(),
            &selections,
        );
        let query = parse_query(&document).unwrap();

        let mut expected_operation = operation.clone();
        expected_operation[..1].make_ascii_lowercase();
        prop_assert_eq!(query.operation_name(), expected_operation.as_str());
        prop_assert_eq!(
            query.struct_name(),
            format!("{expected_operation}DataSource"),
        );
        prop_assert_eq!(query.root_object_name(), root.as_str());
        prop_assert_eq!(query.required_param(), required_param.as_deref());

        let edges = match required_param {
            Some(_) => "Edges[0]",
            None => "Edges[i]",
        };
        let accessors: Vec<String> =
            resolve_accessor_paths(&query)
                .into_iter()
                .map(|path| path.query)
                .collect();
        prop_assert_eq!(&accessors, &expected_accessors(&root, edges, &selections));

        let unexpected_edges = match required_param {
            Some(_) => "Edges[i]",
            None => "Edges[0]",
        };
        for accessor in &accessors {
            prop_assert!(!accessor.contains(unexpected_edges));
        }
    }

    /// Parsing and resolving the same text twice gives identical results.
    #[test]
    fn pipeline_is_idempotent(
        operation in "[a-z][A-Za-z0-9]{0,10}",
        selections in selections(),
    ) {
        let document =
            build_document(&operation, "InfraDevice", None, &selections);
        let first = parse_query(&document).unwrap();
        let second = parse_query(&document).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            resolve_accessor_paths(&first),
            resolve_accessor_paths(&second),
        );
    }
}
