//! Parses a scripted key-press feed: one `<node-id> <chord>` pair per line,
//! blank lines and `#`-prefixed comments ignored.

use std::{fs, path::Path};

/// One scripted key press: the id of the node the listener is attached to
/// (`currentTarget`) and the chord spec to deliver there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPress {
    /// Id of the node the press is delivered at.
    pub node_id: String,
    /// Raw chord spec, e.g. `"ctrl+s"`.
    pub chord: String,
}

/// Parses a script file into an ordered list of presses.
pub fn load(path: &Path) -> Result<Vec<ScriptedPress>, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
    parse(&text)
}

/// Parses script text into an ordered list of presses.
pub fn parse(text: &str) -> Result<Vec<ScriptedPress>, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let mut parts = line.splitn(2, char::is_whitespace);
            let node_id = parts.next().unwrap_or_default().trim();
            let chord = parts.next().unwrap_or_default().trim();
            if node_id.is_empty() || chord.is_empty() {
                return Err(format!("malformed script line: {line:?}"));
            }
            Ok(ScriptedPress { node_id: node_id.to_string(), chord: chord.to_string() })
        })
        .collect()
}

/// The scripted feed backing the demo when no `--script` path is given.
pub const DEMO_SCRIPT: &str = "\
# misses the .panel ancestor chain entirely, silently dropped
editor ctrl+f
# prefix of the two-stroke save-as binding, then its completion
editor ctrl+k
editor ctrl+s
# unmatched elsewhere, fires immediately
search escape
# left pending: the ambiguity timer commits or replays it once it expires
editor ctrl+k
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_demo_script() {
        let presses = parse(DEMO_SCRIPT).unwrap();
        assert_eq!(presses.len(), 5);
        assert_eq!(presses[0], ScriptedPress { node_id: "editor".into(), chord: "ctrl+f".into() });
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse("editor").is_err());
    }
}
