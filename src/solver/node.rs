//! Search tree storage
//!
//! Nodes live in an append-only arena and point at their parent by index,
//! so path reconstruction is a backward walk with no shared ownership.

use super::Step;
use crate::core::{Board, Move};

/// A board reached during search, with the slide that produced it
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub board: Board,
    pub parent: Option<usize>,
    pub mv: Option<Move>,
    pub depth: u32,
    pub heuristic: u32,
}

impl Node {
    /// Ordering key: path cost so far plus estimated remaining cost
    #[inline]
    pub const fn priority(&self) -> u32 {
        self.depth + self.heuristic
    }
}

/// Append-only node storage indexed by insertion position
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    #[inline]
    pub fn get(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Steps from the root to `index`, root first
    pub fn path_to(&self, index: usize) -> Vec<Step> {
        let mut steps = Vec::with_capacity(self.get(index).depth as usize + 1);
        let mut current = Some(index);

        while let Some(i) = current {
            let node = self.get(i);
            steps.push(Step {
                board: node.board.clone(),
                mv: node.mv,
            });
            current = node.parent;
        }

        steps.reverse();
        steps
    }
}
