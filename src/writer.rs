//! The write-side engine: depth-first linearization of a resource tree.
//!
//! Walks the root node and every reachable owned subresource, emitting one
//! text block per node. Blocks are ordered children-first, so every
//! referenced block sits above the line referencing it; the single
//! top-level block comes last and is the only one flagged `Resource`.

use std::collections::HashSet;

use crate::codec;
use crate::error::{RestextError, Result};
use crate::resource::{Persistable, ResourceId};

/// Renders the whole tree reachable from `root` as one document.
pub fn render(root: &dyn Persistable) -> Result<String> {
    let mut blocks = Vec::new();
    let mut visited = HashSet::new();
    visited.insert(root.id());
    emit(root, false, &mut visited, &mut blocks)?;
    Ok(blocks.join("\n"))
}

/// Serializes one node into its own block, recursing into unvisited
/// subresources first.
///
/// Dedup is by child identity: a child reached through two keys is emitted
/// once and backreferenced twice.
fn emit(
    node: &dyn Persistable,
    nested: bool,
    visited: &mut HashSet<ResourceId>,
    blocks: &mut Vec<String>,
) -> Result<()> {
    let level = if nested { "Subresource" } else { "Resource" };
    let mut block = format!(
        "[level = {level}, id = {}, type = {}]\n",
        node.id().as_u64(),
        node.type_tag()
    );

    for key in node.keys() {
        if node.is_subresource(&key) {
            let child = node.subresource(&key)?;
            let child_id = child.id();
            if visited.insert(child_id) {
                emit(child, true, visited, blocks)?;
            }
            block.push_str(&key);
            block.push_str(" = ");
            block.push_str(&codec::encode_backref(child_id));
            block.push('\n');
        } else {
            let text = node.get_field(&key)?;
            if text.contains('\n') {
                return Err(RestextError::Format(format!(
                    "encoded value for `{key}` contains a line break"
                )));
            }
            block.push_str(&key);
            block.push_str(" = ");
            block.push_str(&text);
            block.push('\n');
        }
    }

    blocks.push(block);
    Ok(())
}
