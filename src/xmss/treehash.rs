use crate::hash::TweakableHash;
use crate::params::{ParameterSet, MAX_N, MAX_TREE_HEIGHT};
use crate::wots_plus::adrs::Adrs;
use crate::wots_plus::adrs::AdrsType::{Tree, WotsHash};
use crate::wots_plus::WotsPlus;

/// A tree node during the walk. Leaves have height 1.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Node {
    pub(crate) data: [u8; MAX_N],
    pub(crate) height: u32,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            data: [0u8; MAX_N],
            height: 0,
        }
    }
}

/// Fixed-capacity stack of nodes. Records the deepest it has been.
#[derive(Clone, Debug)]
pub(crate) struct NodeStack {
    nodes: [Node; MAX_TREE_HEIGHT + 1],
    len: usize,
    high_water: usize,
}

impl Default for NodeStack {
    fn default() -> Self {
        Self {
            nodes: [Node::default(); MAX_TREE_HEIGHT + 1],
            len: 0,
            high_water: 0,
        }
    }
}

impl NodeStack {
    pub(crate) fn push(&mut self, node: Node) {
        assert!(self.len < self.nodes.len(), "tree hash stack overflow");
        self.nodes[self.len] = node;
        self.len += 1;
        self.high_water = self.high_water.max(self.len);
    }

    pub(crate) fn pop(&mut self) -> Option<Node> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.nodes[self.len])
    }

    pub(crate) fn top_height(&self) -> Option<u32> {
        self.len.checked_sub(1).map(|top| self.nodes[top].height)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Computes the root of the subtree of height `height` whose leftmost leaf is `start`, with a
/// fresh stack.
pub(crate) fn treehash<P: ParameterSet>(
    wots: &WotsPlus<P>,
    output: &mut [u8],
    sk_seed: &[u8],
    start: u32,
    height: usize,
    adrs: &Adrs,
) {
    let mut stack = NodeStack::default();
    treehash_with_stack(wots, output, sk_seed, start, height, adrs, &mut stack);
}

/// Computes the root of the subtree of height `height` whose leftmost leaf is `start`.
///
/// Leaves are generated left to right. Each new node is merged with the stack top while both
/// have the same height, so `stack` never holds more than `height + 1` nodes. Only the layer
/// and tree fields of `adrs` are used.
pub(crate) fn treehash_with_stack<P: ParameterSet>(
    wots: &WotsPlus<P>,
    output: &mut [u8],
    sk_seed: &[u8],
    start: u32,
    height: usize,
    adrs: &Adrs,
    stack: &mut NodeStack,
) {
    assert!(
        height <= MAX_TREE_HEIGHT,
        "tree height {} exceeds the supported maximum {}",
        height,
        MAX_TREE_HEIGHT
    );
    assert!(
        start % (1 << height) == 0,
        "start index {} is not a multiple of 2^{}",
        start,
        height
    );

    let mut leaf_adrs = adrs.subtree();
    leaf_adrs.set_type(WotsHash);
    let mut tree_adrs = adrs.subtree();
    tree_adrs.set_type(Tree);

    for i in 0..(1u32 << height) {
        let mut node = Node {
            height: 1,
            ..Node::default()
        };
        let mut tree_idx = start + i;
        leaf_adrs.set_keypair_addr(tree_idx);
        wots.pkgen(&mut node.data, sk_seed, &leaf_adrs);

        while stack.top_height() == Some(node.height) {
            let left = match stack.pop() {
                Some(left) => left,
                None => break,
            };
            tree_adrs.set_tree_height(node.height);
            tree_adrs.set_tree_index((tree_idx - 1) / 2);

            let mut parent = [0u8; MAX_N];
            wots.hasher()
                .spx_h(&mut parent, &left.data, &node.data, &tree_adrs);
            node.data = parent;
            node.height += 1;
            tree_idx >>= 1;
        }
        stack.push(node);
    }

    let root = stack.pop();
    assert!(
        stack.len() == 0 && root.map(|root| root.height) == Some(height as u32 + 1),
        "tree hash ended with a malformed stack"
    );
    if let Some(root) = root {
        output[..P::N].copy_from_slice(&root.data[..P::N]);
    }
}
