//! Property-based tests for graph navigation and path rendering.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated walks through the command graph.

use proptest::prelude::*;

use cmdgraph::core::graph::{Container, GraphError, GraphNode};
use cmdgraph::core::path::{format_path, parse_path};
use cmdgraph::core::resolve::{resolve, resolve_path};
use cmdgraph::core::types::ObjectKind;

/// Strategy for selectors that survive a format/parse round trip.
fn selector() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9_.:-]{0,8}")
}

/// Strategy for names that are never object kinds.
fn command_name() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}".prop_filter("must not be an object kind", |name| {
        ObjectKind::from_name(name).is_none()
    })
}

/// Strategy for any name: an object kind or a command.
fn any_name() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(ObjectKind::ALL.to_vec()).prop_map(|k| k.as_str().to_string()),
        command_name(),
    ]
}

/// A walk: at each step pick one of the current container's children.
fn walk() -> impl Strategy<Value = Vec<(usize, Option<String>)>> {
    prop::collection::vec((any::<usize>(), selector()), 0..8)
}

/// Follow a walk from the root, returning the container and step count.
fn follow(steps: &[(usize, Option<String>)]) -> Container {
    let mut current = Container::Root;
    for (pick, selector) in steps {
        let children = current.children();
        let kind = children[pick % children.len()];
        current = current
            .navigate(kind.as_str(), selector.as_deref())
            .unwrap()
            .as_container()
            .unwrap();
    }
    current
}

proptest! {
    /// From the root, a name is an object exactly when it is one of the six kinds.
    #[test]
    fn root_objects_iff_known_kind(name in any_name(), sel in selector()) {
        let known = ObjectKind::from_name(&name).is_some();
        match Container::Root.navigate(&name, sel.as_deref()) {
            Ok(GraphNode::Object(node)) => {
                prop_assert!(known);
                prop_assert_eq!(node.object_kind().as_str(), name.as_str());
                prop_assert_eq!(node.selector(), sel.as_deref());
            }
            Ok(GraphNode::Call(call)) => {
                prop_assert!(!known);
                prop_assert!(sel.is_none());
                prop_assert_eq!(call.name(), name.as_str());
            }
            Ok(GraphNode::Root) => prop_assert!(false, "navigate returned the root"),
            Err(GraphError::NotAnObject { name: failed }) => {
                prop_assert!(!known);
                prop_assert!(sel.is_some());
                prop_assert_eq!(failed, name);
            }
        }
    }

    /// Names outside a container's children fail with a selector, call without.
    #[test]
    fn non_children_are_calls_or_errors(
        steps in walk(),
        name in any_name(),
        sel in "[a-z0-9]{0,4}",
    ) {
        let container = follow(&steps);
        let reachable = container.children().iter().any(|k| k.as_str() == name);
        prop_assume!(!reachable);

        let err = container.navigate(&name, Some(&sel)).unwrap_err();
        prop_assert_eq!(err, GraphError::NotAnObject { name: name.clone() });

        let call = container.navigate(&name, None).unwrap();
        prop_assert_eq!(call.name(), Some(name.as_str()));
        prop_assert!(call.children().is_empty());
    }

    /// A container's path is the formatted form of its selector chain.
    #[test]
    fn path_is_formatted_selectors(steps in walk()) {
        let container = follow(&steps);
        prop_assert_eq!(container.path(), format_path(&container.selectors()));
    }

    /// The selector chain and ancestor chain both grow by one per object step.
    #[test]
    fn chain_length_matches_steps(steps in walk()) {
        let container = follow(&steps);
        prop_assert_eq!(container.selectors().len(), steps.len());
        prop_assert_eq!(container.ancestors().len(), steps.len());
        prop_assert_eq!(container.depth(), steps.len());
    }

    /// A rendered path resolves back to a node with the same selectors.
    #[test]
    fn rendered_paths_resolve_back(steps in walk()) {
        let container = follow(&steps);
        let node = resolve_path(&container.path()).unwrap();
        prop_assert_eq!(node.selectors(), container.selectors());
        prop_assert_eq!(node.path(), container.path());
    }

    /// A call's path is its parent's path plus the command name.
    #[test]
    fn call_path_appends_name(steps in walk(), name in command_name()) {
        let container = follow(&steps);
        let call = container.navigate(&name, None).unwrap();
        let expected = if steps.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", container.path(), name)
        };
        prop_assert_eq!(call.path(), expected);
        prop_assert_eq!(call.selectors(), container.selectors());
    }

    /// Parsing then resolving equals resolving the parsed segments directly.
    #[test]
    fn resolve_path_matches_resolve(steps in walk(), name in command_name()) {
        let text = format!("{}.{}", follow(&steps).path(), name);
        let text = text.trim_start_matches('.');
        let segments = parse_path(text).unwrap();
        prop_assert_eq!(resolve(&segments), resolve_path(text));
    }
}
