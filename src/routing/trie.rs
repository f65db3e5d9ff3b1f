//! Trie node data model.

use std::collections::HashMap;

use crate::handler::{ErrorHandler, Route};

/// Reserved child key that matches any single non-empty segment.
/// It shares the namespace with literal segment values, so a path
/// literally containing a `*` segment registers the wildcard instead.
pub(crate) const WILDCARD: &str = "*";

/// Node in the routing trie: one per distinct path prefix, per method.
///
/// The three handler slots are independently single-assignment;
/// `default_route` and `error_handler` apply to this node and every
/// descendant that does not set its own.
#[derive(Default)]
pub(crate) struct Node {
    pub(crate) children: HashMap<String, Node>,
    pub(crate) route: Option<Route>,
    pub(crate) default_route: Option<Route>,
    pub(crate) error_handler: Option<ErrorHandler>,
}

impl Node {
    /// Descend to the node for `path`, creating missing children along
    /// the way. Empty segments (leading, trailing, or duplicate slashes)
    /// never create or enter a child.
    pub(crate) fn at_path(&mut self, path: &str) -> &mut Node {
        let mut node = self;
        for segment in path.split('/') {
            if segment.is_empty() {
                continue;
            }
            node = node.children.entry(segment.to_string()).or_default();
        }
        node
    }
}
