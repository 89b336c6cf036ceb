//! Scoped Dispatcher (§4.3): walks from the event target toward the
//! listener node, ordering candidates by selector specificity, invoking the
//! first enabled handler.

use shortkey_selector::Node;

use crate::{diagnostic::DiagnosticSink, event::HostEvent, types::NormalizedBinding};

/// Builds the ancestor chain walked by both the dispatcher and the
/// partial-match path check (§4.4's "validate that at least one partial
/// binding's selector matches some node on `E`'s path from `target` to
/// `currentTarget`"): `target`, then its ancestors, inclusive of
/// `current_target`, stopping there even if more ancestors exist above it.
pub(crate) fn ancestor_chain<N: Node + PartialEq>(target: N, current_target: &N) -> Vec<N> {
    let mut chain = Vec::new();
    let mut node = Some(target);
    while let Some(n) = node {
        let reached_boundary = &n == current_target;
        node = if reached_boundary { None } else { n.parent() };
        chain.push(n);
        if reached_boundary {
            break;
        }
    }
    chain
}

/// True if any candidate's selector matches some node on `E`'s path from
/// its target to `current_target`.
pub fn path_has_match<A, N: Node + PartialEq>(
    candidates: &[&NormalizedBinding<A>],
    target: N,
    current_target: &N,
) -> bool {
    ancestor_chain(target, current_target)
        .iter()
        .any(|node| candidates.iter().any(|c| c.selector.matches(node)))
}

/// Walks from `event.target()` toward `event.current_target()`, invoking
/// the highest-precedence matching handler. Returns `true` if some handler
/// consumed the event (in which case `prevent_default`/`stop_propagation`
/// were already called on `event`).
pub fn dispatch<A, E>(
    candidates: &[&NormalizedBinding<A>],
    event: &mut E,
    diagnostics: &dyn DiagnosticSink,
) -> bool
where
    E: HostEvent,
    E::Node: PartialEq,
{
    let current_target = event.current_target();
    let chain = ancestor_chain(event.target(), &current_target);

    for node in &chain {
        let mut survivors: Vec<&NormalizedBinding<A>> = candidates
            .iter()
            .copied()
            .filter(|c| c.selector.matches(node))
            .collect();
        // Stable sort: ties keep registry order, i.e. first-registered wins.
        survivors.sort_by_key(|c| std::cmp::Reverse(c.specificity));

        for binding in survivors {
            match (binding.handler)(&binding.args) {
                Ok(true) => {
                    event.prevent_default();
                    event.stop_propagation();
                    return true;
                }
                Ok(false) => continue,
                Err(err) => {
                    diagnostics.error(&format!("shortcut handler failed: {err}"));
                    continue;
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, sync::Arc};

    use shortkey_selector::Selector;
    use shortkey_stroke::RawKeyEvent;

    use super::*;
    use crate::diagnostic::CapturingSink;

    #[derive(Clone, PartialEq)]
    struct TestNode {
        tag: &'static str,
        id: Option<&'static str>,
        parent: Option<Box<TestNode>>,
    }

    impl Node for TestNode {
        fn tag(&self) -> &str {
            self.tag
        }
        fn id(&self) -> Option<&str> {
            self.id
        }
        fn classes(&self) -> &[String] {
            &[]
        }
        fn parent(&self) -> Option<Self> {
            self.parent.as_deref().cloned()
        }
    }

    #[derive(Clone)]
    struct TestEvent {
        target: TestNode,
        current_target: TestNode,
        default_prevented: Rc<RefCell<bool>>,
        propagation_stopped: Rc<RefCell<bool>>,
    }

    impl RawKeyEvent for TestEvent {
        fn primary_key(&self) -> &str {
            "k"
        }
        fn ctrl(&self) -> bool {
            false
        }
        fn shift(&self) -> bool {
            false
        }
        fn alt(&self) -> bool {
            false
        }
        fn meta(&self) -> bool {
            false
        }
    }

    impl HostEvent for TestEvent {
        type Node = TestNode;
        fn target(&self) -> TestNode {
            self.target.clone()
        }
        fn current_target(&self) -> TestNode {
            self.current_target.clone()
        }
        fn prevent_default(&mut self) {
            *self.default_prevented.borrow_mut() = true;
        }
        fn stop_propagation(&mut self) {
            *self.propagation_stopped.borrow_mut() = true;
        }
    }

    fn binding(selector: &str, outcome: bool) -> NormalizedBinding<()> {
        NormalizedBinding {
            sequence: vec![],
            selector: Selector::parse(selector).unwrap(),
            specificity: Selector::parse(selector).unwrap().specificity(),
            handler: Arc::new(move |_| Ok(outcome)),
            args: (),
        }
    }

    fn root_to_leaf() -> (TestNode, TestNode) {
        let root = TestNode { tag: "body", id: None, parent: None };
        let leaf = TestNode { tag: "div", id: Some("n"), parent: Some(Box::new(root.clone())) };
        (root, leaf)
    }

    #[test]
    fn target_distance_beats_specificity() {
        let (root, leaf) = root_to_leaf();
        let outer = binding("body", true);
        let inner = binding("#n", true);
        let candidates = [&inner, &outer];
        let diagnostics = CapturingSink::new();

        let mut event = TestEvent {
            target: leaf,
            current_target: root,
            default_prevented: Rc::new(RefCell::new(false)),
            propagation_stopped: Rc::new(RefCell::new(false)),
        };

        assert!(dispatch(&candidates, &mut event, &diagnostics));
        assert!(*event.default_prevented.borrow());
        assert!(*event.propagation_stopped.borrow());
    }

    #[test]
    fn falsy_handler_falls_through_to_next_candidate_same_node() {
        let (root, leaf) = root_to_leaf();
        let declines = binding("#n", false);
        let accepts = binding("div", true);
        let candidates = [&declines, &accepts];
        let diagnostics = CapturingSink::new();

        let mut event = TestEvent {
            target: leaf,
            current_target: root,
            default_prevented: Rc::new(RefCell::new(false)),
            propagation_stopped: Rc::new(RefCell::new(false)),
        };

        assert!(dispatch(&candidates, &mut event, &diagnostics));
    }

    #[test]
    fn handler_error_is_logged_and_treated_as_falsy() {
        let (root, leaf) = root_to_leaf();
        let failing = NormalizedBinding {
            sequence: vec![],
            selector: Selector::parse("#n").unwrap(),
            specificity: 100,
            handler: Arc::new(|_: &()| Err("boom".into())),
            args: (),
        };
        let candidates = [&failing];
        let diagnostics = CapturingSink::new();

        let mut event = TestEvent {
            target: leaf,
            current_target: root,
            default_prevented: Rc::new(RefCell::new(false)),
            propagation_stopped: Rc::new(RefCell::new(false)),
        };

        assert!(!dispatch(&candidates, &mut event, &diagnostics));
        assert_eq!(diagnostics.errors().len(), 1);
    }

    #[test]
    fn no_candidates_on_path_leaves_event_untouched() {
        let (root, leaf) = root_to_leaf();
        let other = binding("#other", true);
        let candidates = [&other];
        let diagnostics = CapturingSink::new();

        let mut event = TestEvent {
            target: leaf,
            current_target: root,
            default_prevented: Rc::new(RefCell::new(false)),
            propagation_stopped: Rc::new(RefCell::new(false)),
        };

        assert!(!dispatch(&candidates, &mut event, &diagnostics));
        assert!(!*event.default_prevented.borrow());
    }
}
