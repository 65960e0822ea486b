//! Item data loaded from JSON.

use std::fs;
use std::path::Path;

use arbor::{Node, Tree};
use serde::Deserialize;

use crate::error::DemoError;

const SAMPLE: &str = include_str!("../data/sample.json");

/// One item and its nested children.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(default)]
    pub children: Vec<Record>,
}

pub fn sample() -> Result<Vec<Record>, DemoError> {
    parse(SAMPLE, Path::new("<built-in sample>"))
}

pub fn load(path: &Path) -> Result<Vec<Record>, DemoError> {
    let text = fs::read_to_string(path)?;
    parse(&text, path)
}

fn parse(text: &str, path: &Path) -> Result<Vec<Record>, DemoError> {
    serde_json::from_str(text).map_err(|source| DemoError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Append `records` to `tree`, building a subtree level for every nesting.
pub fn populate(tree: &mut Tree<String>, records: &[Record]) {
    for record in records {
        let node = tree.add_node(record.name.clone());
        populate_node(node, &record.children);
    }
}

fn populate_node(node: &mut Node<String>, records: &[Record]) {
    for record in records {
        let child = node.add_node(record.name.clone());
        populate_node(child, &record.children);
    }
}
