//! The face box chain and its traversal.
//!
//! [`SquareFaceBox`] owns every node, keeps track of the one that is active
//! and walks the chain back and forth. Only the active node animates and only
//! the active node is drawn.

use crate::config::FaceBoxConfig;
use crate::node::SequenceNode;
use crate::renderer::{DrawSurface, FaceBoxRenderer};
use crate::state::StepSize;
use crate::time::TimeDuration;
use crate::types::{ConfigError, Direction};
use heapless::Vec;

/// Chain of face boxes with one active node and a traversal direction.
///
/// When the active node settles, the next node in the traversal direction
/// becomes active. At either end of the chain the direction reverses instead
/// and the end node stays active for one more step.
///
/// # Type Parameters
/// * `N` - Maximum number of nodes
#[derive(Debug, Clone)]
pub struct SquareFaceBox<const N: usize> {
    nodes: Vec<SequenceNode, N>,
    active: usize,
    direction: Direction,
}

impl<const N: usize> SquareFaceBox<N> {
    /// Builds a chain of `count` nodes advancing by `step` per tick.
    ///
    /// # Errors
    /// * `EmptyPalette` - `count` is zero
    /// * `CapacityExceeded` - `count` is larger than `N`
    /// * `InvalidStep` - `step` is not a usable per-tick increment
    pub fn new(count: usize, step: f32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        let step = StepSize::new(step)?;

        let mut nodes = Vec::new();
        for index in 0..count {
            nodes
                .push(SequenceNode::new(index, count, step))
                .map_err(|_| ConfigError::CapacityExceeded)?;
        }

        Ok(Self {
            nodes,
            active: 0,
            direction: Direction::Forward,
        })
    }

    /// Builds one node per palette color of a validated configuration.
    pub fn from_config<D: TimeDuration>(config: &FaceBoxConfig<D, N>) -> Self {
        let count = config.palette().len();
        let nodes = (0..count)
            .map(|index| SequenceNode::new(index, count, config.step_size()))
            .collect();

        Self {
            nodes,
            active: 0,
            direction: Direction::Forward,
        }
    }

    /// Draws the active node.
    pub fn render<S: DrawSurface>(&self, surface: &mut S, renderer: &FaceBoxRenderer<N>) {
        self.active_node().draw(surface, renderer);
    }

    /// Advances the active node by one tick.
    ///
    /// Returns true if the active node settled on this tick. In that case the
    /// traversal has already moved on (or reversed at a boundary) before this
    /// returns.
    pub fn update(&mut self) -> bool {
        let settled = self.nodes[self.active].update();

        if settled {
            match self.nodes[self.active].neighbor(self.direction) {
                Some(next) => {
                    crate::trace!("face box {} settled, moving to {}", self.active, next);
                    self.active = next;
                }
                None => {
                    self.direction = self.direction.reversed();
                    crate::trace!("face box {} settled at chain end, reversing", self.active);
                }
            }
        }

        settled
    }

    /// Starts a step on the active node; returns false if it is already moving.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.active].start_updating()
    }

    /// The active node.
    pub fn active_node(&self) -> &SequenceNode {
        &self.nodes[self.active]
    }

    /// Index of the active node.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Current traversal direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns true if the active node has no step in progress.
    pub fn is_idle(&self) -> bool {
        self.active_node().state().is_idle()
    }

    /// Node at `index`, if any.
    pub fn node(&self, index: usize) -> Option<&SequenceNode> {
        self.nodes.get(index)
    }

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a chain holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
