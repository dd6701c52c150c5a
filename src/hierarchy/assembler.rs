//! Flat-to-nested tree assembly
//!
//! Rebuilding the display tree is an ordering pre-pass plus one linear
//! attachment pass over an id index; the row order coming back from storage
//! carries no meaning.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{ServerError, ServerResult};
use crate::hierarchy::ancestry;
use crate::traits::Component;

/// One assembled node of the finding-aid tree
///
/// Serializes with the component's fields at the top level and `children`
/// alongside them, matching the flat storage record plus nesting.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentNode {
    #[serde(flatten)]
    pub component: Component,
    pub children: Vec<ComponentNode>,
}

/// Rebuild the nested tree below `root` from its complete flat descendant set
///
/// `descendants` must hold every component whose ancestry starts at the
/// root: the exact id, or the id followed by `/`. Children come out ordered
/// by ascending id within each parent regardless of input order.
///
/// A descendant whose parent chain cannot be satisfied fails the whole build
/// with `OrphanedNode`. An incomplete set is a data-integrity defect; a tree
/// silently missing a branch is worse than no tree.
pub fn assemble(root: Component, descendants: Vec<Component>) -> ServerResult<ComponentNode> {
    let root_id = root.id;

    // Decode every path up front; one undecodable row poisons the build.
    // Only depth and the immediate parent matter past this point.
    let mut rows: Vec<(usize, i64, Component)> = Vec::with_capacity(descendants.len());
    for component in descendants {
        let path = ancestry::decode(&component.ancestry)?;
        match (path.first().copied(), path.last().copied()) {
            (Some(top), Some(parent)) if top == root_id => {
                rows.push((path.len(), parent, component));
            }
            // A row claiming a different root (or none at all) cannot hang
            // off this tree.
            (Some(top), _) => {
                return Err(ServerError::OrphanedNode {
                    component: component.id,
                    parent: top,
                });
            }
            (None, _) => {
                return Err(ServerError::OrphanedNode {
                    component: component.id,
                    parent: root_id,
                });
            }
        }
    }

    // Shallower rows first so every parent is attached before its children
    // arrive; id breaks ties, which also fixes child order.
    rows.sort_by(|(a_depth, _, a), (b_depth, _, b)| {
        a_depth.cmp(b_depth).then_with(|| a.id.cmp(&b.id))
    });

    let mut attached: HashSet<i64> = HashSet::with_capacity(rows.len() + 1);
    attached.insert(root_id);
    let mut child_ids: HashMap<i64, Vec<i64>> = HashMap::new();
    for (_, parent, component) in &rows {
        if !attached.contains(parent) {
            return Err(ServerError::OrphanedNode {
                component: component.id,
                parent: *parent,
            });
        }
        attached.insert(component.id);
        child_ids.entry(*parent).or_default().push(component.id);
    }

    // Materialize deepest-first: every node's children are built before the
    // node collects them, so this is a single reverse walk.
    let mut built: HashMap<i64, ComponentNode> = HashMap::with_capacity(rows.len());
    for (_, _, component) in rows.into_iter().rev() {
        let node = collect_children(component, &mut child_ids, &mut built)?;
        built.insert(node.component.id, node);
    }
    collect_children(root, &mut child_ids, &mut built)
}

fn collect_children(
    component: Component,
    child_ids: &mut HashMap<i64, Vec<i64>>,
    built: &mut HashMap<i64, ComponentNode>,
) -> ServerResult<ComponentNode> {
    let ids = child_ids.remove(&component.id).unwrap_or_default();
    let mut children = Vec::with_capacity(ids.len());
    for id in ids {
        let child = built.remove(&id).ok_or_else(|| {
            ServerError::Internal(format!("component {id} vanished during tree assembly"))
        })?;
        children.push(child);
    }
    Ok(ComponentNode {
        component,
        children,
    })
}
