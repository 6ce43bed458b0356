use crate::augment::NodeSpan;
use crate::tree::{NodeId, TreeIndex};

/// Raises every node's end to the largest end among its descendants, then
/// pins the root to the whole source.
///
/// Reverse pre-order reaches each node only after its whole subtree, so one
/// fold into the parent per node is enough.
pub fn propagate_ends(index: &TreeIndex, spans: &mut [NodeSpan], source_len: usize) {
    for id in index.ids().rev() {
        let (Some(parent), Some(end)) = (index.parent(id), spans[id.index()].end) else {
            continue;
        };
        let parent_end = &mut spans[parent.index()].end;
        *parent_end = Some(parent_end.map_or(end, |current| current.max(end)));
    }

    if !spans.is_empty() {
        spans[NodeId::ROOT.index()].end = Some(source_len);
    }

    let unresolved = spans.iter().filter(|span| span.end.is_none()).count();
    if unresolved > 0 {
        log::debug!("{unresolved} node(s) have no end offset after propagation");
    }
}
