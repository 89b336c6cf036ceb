use crate::{Node, SelectorError};

/// A single compound selector: an optional tag, an optional id, and zero or
/// more classes, e.g. `div#save.primary`.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(token: &str) -> Result<Self, SelectorError> {
        if token.is_empty() {
            return Err(SelectorError::InvalidToken { token: token.to_string() });
        }
        let mut tag = None;
        let mut id = None;
        let mut classes = Vec::new();

        let mut rest = token;
        if !rest.starts_with('#') && !rest.starts_with('.') {
            let end = rest.find(['#', '.']).unwrap_or(rest.len());
            let (t, remainder) = rest.split_at(end);
            if t.is_empty() {
                return Err(SelectorError::InvalidToken { token: token.to_string() });
            }
            tag = Some(t.to_string());
            rest = remainder;
        }

        while !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            let end = rest[1..].find(['#', '.']).map(|i| i + 1).unwrap_or(rest.len());
            let (piece, remainder) = rest.split_at(end);
            let name = &piece[1..];
            if name.is_empty() {
                return Err(SelectorError::InvalidToken { token: token.to_string() });
            }
            match marker {
                b'#' => {
                    if id.is_some() {
                        return Err(SelectorError::InvalidToken { token: token.to_string() });
                    }
                    id = Some(name.to_string());
                }
                b'.' => classes.push(name.to_string()),
                _ => unreachable!("loop only re-enters at # or . boundaries"),
            }
            rest = remainder;
        }

        Ok(Self { tag, id, classes })
    }

    fn matches(&self, node: &impl Node) -> bool {
        if let Some(tag) = &self.tag
            && tag != "*"
            && tag != node.tag()
        {
            return false;
        }
        if let Some(id) = &self.id {
            if node.id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| node.classes().contains(c))
    }

    fn specificity(&self) -> u32 {
        let id_score = if self.id.is_some() { 100 } else { 0 };
        let class_score = 10 * self.classes.len() as u32;
        let tag_score = match &self.tag {
            Some(t) if t != "*" => 1,
            _ => 0,
        };
        id_score + class_score + tag_score
    }
}

/// A parsed selector: a chain of compound selectors joined by the
/// descendant combinator (whitespace), e.g. `div.panel #save`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    /// Parses and validates a selector string. This is the `isValid` check
    /// from the collaborator interface: a selector that fails to parse is
    /// invalid.
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(SelectorError::Empty);
        }
        let compounds = tokens
            .into_iter()
            .map(Compound::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { compounds })
    }

    /// Non-negative specificity: 100 per id, 10 per class, 1 per tag,
    /// summed across every compound in the descendant chain.
    pub fn specificity(&self) -> u32 {
        self.compounds.iter().map(Compound::specificity).sum()
    }

    /// Tests whether `node` matches this selector: the rightmost compound
    /// must match `node` itself, and each preceding compound must match
    /// some strict ancestor, in order, further up the tree.
    pub fn matches<N: Node>(&self, node: &N) -> bool {
        let Some((last, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !last.matches(node) {
            return false;
        }
        let mut remaining = rest.iter().rev();
        let Some(mut target) = remaining.next() else {
            return true;
        };
        let mut ancestor = node.parent();
        loop {
            match ancestor {
                None => return false,
                Some(n) => {
                    if target.matches(&n) {
                        match remaining.next() {
                            Some(next) => target = next,
                            None => return true,
                        }
                    }
                    ancestor = n.parent();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestNode {
        tag: &'static str,
        id: Option<&'static str>,
        classes: Vec<String>,
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
            &self.classes
        }
        fn parent(&self) -> Option<Self> {
            self.parent.as_deref().cloned()
        }
    }

    fn leaf(tag: &'static str, id: Option<&'static str>, classes: &[&str]) -> TestNode {
        TestNode {
            tag,
            id,
            classes: classes.iter().map(|s| s.to_string()).collect(),
            parent: None,
        }
    }

    fn child_of(parent: TestNode, tag: &'static str, id: Option<&'static str>) -> TestNode {
        TestNode {
            tag,
            id,
            classes: Vec::new(),
            parent: Some(Box::new(parent)),
        }
    }

    #[test]
    fn parses_tag_id_classes() {
        let sel = Selector::parse("div#n.primary.big").unwrap();
        assert_eq!(sel.specificity(), 1 + 100 + 20);
    }

    #[test]
    fn rejects_empty_and_bare_markers() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("   ").is_err());
        assert!(Selector::parse("#").is_err());
        assert!(Selector::parse(".").is_err());
        assert!(Selector::parse("div##x").is_err());
    }

    #[test]
    fn matches_id_selector() {
        let node = leaf("div", Some("n"), &[]);
        assert!(Selector::parse("#n").unwrap().matches(&node));
        assert!(!Selector::parse("#other").unwrap().matches(&node));
    }

    #[test]
    fn matches_descendant_combinator() {
        let root = leaf("body", None, &["app"]);
        let mid = child_of(root, "div", Some("panel"));
        let leaf_node = child_of(mid, "button", Some("save"));

        assert!(Selector::parse("body #save").unwrap().matches(&leaf_node));
        assert!(Selector::parse(".app #save").unwrap().matches(&leaf_node));
        assert!(!Selector::parse("#panel #app").unwrap().matches(&leaf_node));
        assert!(!Selector::parse("section #save").unwrap().matches(&leaf_node));
    }

    #[test]
    fn universal_tag_contributes_no_specificity() {
        let sel = Selector::parse("*#n").unwrap();
        assert_eq!(sel.specificity(), 100);
    }
}
