//! One face box in the traversal chain.

use crate::renderer::{DrawSurface, FaceBoxRenderer};
use crate::state::{AnimationState, StepSize};
use crate::types::Direction;

/// A face box linked to its neighbors by index.
///
/// Nodes are created once, in index order, by the controller that owns the
/// chain. The first node has no `prev` and the last has no `next`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceNode {
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    state: AnimationState,
}

impl SequenceNode {
    /// Creates node `index` of a chain of `count` nodes.
    pub fn new(index: usize, count: usize, step: StepSize) -> Self {
        Self {
            index,
            prev: index.checked_sub(1),
            next: (index + 1 < count).then_some(index + 1),
            state: AnimationState::new(step),
        }
    }

    /// Draws this node's face box at its current progress.
    pub fn draw<S: DrawSurface, const N: usize>(
        &self,
        surface: &mut S,
        renderer: &FaceBoxRenderer<N>,
    ) {
        renderer.draw(surface, self.index, self.state.progress());
    }

    /// Advances the node's progress; returns true on the settle tick.
    #[inline]
    pub fn update(&mut self) -> bool {
        self.state.update()
    }

    /// Starts the node's next step; returns false if it is already moving.
    #[inline]
    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    /// Index of the neighbor in `direction`, or `None` at a chain boundary.
    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Forward => self.next,
            Direction::Backward => self.prev,
        }
    }

    /// Palette index of this node.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the previous node, if any.
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    /// Index of the next node, if any.
    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// The node's animation state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }
}
