//! Shared test fixtures.
//!
//! Provides a minimal in-memory CFA implementation of the [`crate::cfa`]
//! traits plus helpers for wiring up small control-flow shapes. Node
//! identity is pointer identity, matching the stable-identity contract the
//! traits require.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::cfa::{CfaEdge, CfaNode};

/// Backing data of a test CFA location.
pub(crate) struct TestNodeData {
    /// Human-readable label for assertion messages
    label: String,
    /// Function this location belongs to
    function: String,
    /// Whether this location is a function entry
    entry: bool,
    /// Whether this location is a function exit
    exit: bool,
    /// Ordinary leaving edges, in insertion order
    leaving: RefCell<Vec<TestEdge>>,
    /// Optional call-to-return summary edge
    summary: RefCell<Option<TestEdge>>,
}

/// A test CFA location. Cloning shares the location; equality and hashing
/// are by pointer identity.
#[derive(Clone)]
pub(crate) struct TestNode(Rc<TestNodeData>);

/// A test CFA edge pointing at its successor location.
#[derive(Clone)]
pub(crate) struct TestEdge {
    /// Location this edge leads to
    successor: TestNode,
    /// Whether this is a call-to-return summary edge
    summary: bool,
}

impl TestNode {
    fn create(label: String, function: &str, entry: bool, exit: bool) -> Self {
        TestNode(Rc::new(TestNodeData {
            label,
            function: function.to_string(),
            entry,
            exit,
            leaving: RefCell::new(Vec::new()),
            summary: RefCell::new(None),
        }))
    }
}

impl PartialEq for TestNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for TestNode {}

impl Hash for TestNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0) as usize).hash(state);
    }
}

impl fmt::Debug for TestNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.label)
    }
}

impl fmt::Debug for TestEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-> {}", self.successor.0.label)
    }
}

impl CfaNode for TestNode {
    type Edge = TestEdge;

    fn leaving_edges(&self) -> impl Iterator<Item = TestEdge> {
        self.0.leaving.borrow().clone().into_iter()
    }

    fn summary_edge(&self) -> Option<TestEdge> {
        self.0.summary.borrow().clone()
    }

    fn is_function_entry(&self) -> bool {
        self.0.entry
    }

    fn is_exit(&self) -> bool {
        self.0.exit
    }

    fn function_name(&self) -> &str {
        &self.0.function
    }
}

impl CfaEdge for TestEdge {
    type Node = TestNode;

    fn successor(&self) -> TestNode {
        self.successor.clone()
    }

    fn is_summary(&self) -> bool {
        self.summary
    }
}

/// Creates an interior location of the given function.
pub(crate) fn make_node(function: &str) -> TestNode {
    TestNode::create(format!("{function}::node"), function, false, false)
}

/// Creates the entry location of the given function.
pub(crate) fn make_entry(function: &str) -> TestNode {
    TestNode::create(format!("{function}::entry"), function, true, false)
}

/// Creates the exit location of the given function.
pub(crate) fn make_exit(function: &str) -> TestNode {
    TestNode::create(format!("{function}::exit"), function, false, true)
}

/// Adds an ordinary leaving edge from `from` to `to`.
pub(crate) fn link(from: &TestNode, to: &TestNode) {
    from.0.leaving.borrow_mut().push(TestEdge {
        successor: to.clone(),
        summary: false,
    });
}

/// Sets the call-to-return summary edge of `from` to point at `to`.
pub(crate) fn link_summary(from: &TestNode, to: &TestNode) {
    *from.0.summary.borrow_mut() = Some(TestEdge {
        successor: to.clone(),
        summary: true,
    });
}

/// Creates a linear chain of `len` locations in the given function, entry
/// first and exit last, and returns both ends.
pub(crate) fn make_chain(function: &str, len: usize) -> (TestNode, TestNode) {
    assert!(len >= 2, "a chain needs at least entry and exit");

    let entry = make_entry(function);
    let mut current = entry.clone();
    for _ in 0..len.saturating_sub(2) {
        let next = make_node(function);
        link(&current, &next);
        current = next;
    }
    let exit = make_exit(function);
    link(&current, &exit);
    (entry, exit)
}
