//! Declarative binding table, loaded from RON: a flat list of
//! `(sequence, selector, action)` triples rather than a single
//! closure-per-key map, since a chord sequence can be more than one stroke
//! long.

use std::{fs, path::Path};

use serde::Deserialize;

/// One authored binding: a chord sequence, a selector scoping it to a part
/// of the document, and the name of the action to run when it fires.
#[derive(Debug, Clone, Deserialize)]
pub struct BindingSpec {
    /// Ordered stroke specs, e.g. `["ctrl+k", "ctrl+s"]`.
    pub sequence: Vec<String>,
    /// Selector string scoping the binding to part of the document.
    pub selector: String,
    /// Name of the action to print when the binding fires.
    pub action: String,
}

/// Loads a binding table from a RON file.
pub fn load_bindings(path: &Path) -> Result<Vec<BindingSpec>, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
    ron::from_str(&text).map_err(|e| format!("parsing {}: {e}", path.display()))
}

/// The binding table backing the demo when no `--bindings` path is given.
pub const DEMO_BINDINGS: &str = r##"[
    (sequence: ["ctrl+s"], selector: "#editor", action: "save"),
    (sequence: ["ctrl+k", "ctrl+s"], selector: "#editor", action: "save-as"),
    (sequence: ["ctrl+f"], selector: ".panel", action: "find"),
    (sequence: ["escape"], selector: "*", action: "dismiss"),
]"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_bindings_parse() {
        let bindings: Vec<BindingSpec> = ron::from_str(DEMO_BINDINGS).unwrap();
        assert_eq!(bindings.len(), 4);
        assert_eq!(bindings[1].sequence, vec!["ctrl+k", "ctrl+s"]);
    }
}
