//! Conversion from the trie into the matcher tree.
//!
//! A trie node stands for the position right after a consumed segment, so the
//! remaining input at a node is either empty or starts with a separator. The
//! children of a node (the "branch") are therefore reached through a `"/"`
//! literal, which gets folded into the literal that follows it.
//!
//! The nodes are compiled from the leaves.

use {super::Node, crate::matcher::Matcher, indexmap::IndexMap};

/// Compiles a node, or returns `None` if no pattern terminates below it.
pub(super) fn compile<T: Clone>(node: &Node<T>) -> Option<Matcher<T>> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(branch) = compile_branch(node) {
        candidates.push(Matcher::literal("/", branch));
    }
    if let Some(ref data) = node.data {
        candidates.push(Matcher::data(data.clone()));
    }

    if candidates.is_empty() {
        None
    } else {
        Some(Matcher::alternatives(candidates))
    }
}

fn compile_branch<T: Clone>(node: &Node<T>) -> Option<Matcher<T>> {
    let mut candidates = vec![];

    if let Some(literals) = compile_literals(&node.literals) {
        candidates.push(literals);
    }

    candidates.extend(
        node.params
            .iter()
            .filter_map(|(name, child)| Some(Matcher::wild(name.as_str(), compile(child)?))),
    );

    // The catch-all never recurses; its payload is baked into the matcher.
    candidates.extend(node.catch_alls.iter().filter_map(|(name, child)| {
        let data = child.data.as_ref()?;
        Some(Matcher::catch_all(name.as_str(), data.clone()))
    }));

    if candidates.is_empty() {
        None
    } else {
        Some(Matcher::alternatives(candidates))
    }
}

fn compile_literals<T: Clone>(literals: &IndexMap<String, Node<T>>) -> Option<Matcher<T>> {
    let mut compiled: Vec<_> = literals
        .iter()
        .filter_map(|(text, child)| Some((text.as_str(), compile(child)?)))
        .collect();

    match compiled.len() {
        0 => None,
        1 => {
            let (text, child) = compiled.pop()?;
            Some(Matcher::literal(text, child))
        }
        _ => Some(Matcher::table(compiled)),
    }
}
