//! A small fixed document tree standing in for a real UI: a toolbar and a
//! sidebar panel, each holding one focusable widget, under a body root.

use std::collections::HashMap;

use shortkey_host::NodeHandle;

/// Builds the demo document and an id → node lookup table for the script
/// runner to resolve `--script` targets against.
pub fn build() -> (NodeHandle, HashMap<String, NodeHandle>) {
    let body = NodeHandle::root("body");
    let toolbar = body.child("div", Some("toolbar"), &["panel"]);
    let editor = toolbar.child("textarea", Some("editor"), &[]);
    let sidebar = body.child("div", Some("sidebar"), &["panel"]);
    let search = sidebar.child("input", Some("search"), &[]);

    let mut by_id = HashMap::new();
    by_id.insert("body".to_string(), body.clone());
    by_id.insert("toolbar".to_string(), toolbar);
    by_id.insert("editor".to_string(), editor);
    by_id.insert("sidebar".to_string(), sidebar);
    by_id.insert("search".to_string(), search);
    (body, by_id)
}
