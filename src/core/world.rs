use crate::core::entities::{
    Ball, Body, Edge, Goal, Item, Jump, Lump, Node, Path, Side, Switch, Vertex,
};
use crate::dynamics::paths;
use crate::error::SimError;
use crate::math::Vector3;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The complete simulated level
///
/// Every entity lives in a flat array addressed by index; cross-references
/// between entities are indices into these arrays. The world is assembled
/// once by the level loader and thereafter mutated only by the stepping and
/// region operations. Lumps and nodes reference their vertices, edges, and
/// sides through the shared `indices` pool.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct World {
    pub verts: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub sides: Vec<Side>,
    pub lumps: Vec<Lump>,
    pub nodes: Vec<Node>,
    pub paths: Vec<Path>,
    pub bodies: Vec<Body>,
    pub balls: Vec<Ball>,
    pub items: Vec<Item>,
    pub goals: Vec<Goal>,
    pub jumps: Vec<Jump>,
    pub switches: Vec<Switch>,

    /// Shared index pool backing lump vertex/edge/side ranges
    pub indices: Vec<usize>,
}

impl World {
    /// Creates a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a reference to a ball by its index
    pub fn ball(&self, index: usize) -> Result<&Ball> {
        self.balls
            .get(index)
            .ok_or_else(|| SimError::ResourceNotFound(format!("Ball {} not found", index)))
    }

    /// Gets a mutable reference to a ball by its index
    pub fn ball_mut(&mut self, index: usize) -> Result<&mut Ball> {
        self.balls
            .get_mut(index)
            .ok_or_else(|| SimError::ResourceNotFound(format!("Ball {} not found", index)))
    }

    /// Gets a reference to a body by its index
    pub fn body(&self, index: usize) -> Result<&Body> {
        self.bodies
            .get(index)
            .ok_or_else(|| SimError::ResourceNotFound(format!("Body {} not found", index)))
    }

    /// Returns the current world-space position of a body
    pub fn body_position(&self, index: usize) -> Result<Vector3> {
        Ok(paths::body_position(self, self.body(index)?))
    }

    /// Returns the current world-space velocity of a body
    pub fn body_velocity(&self, index: usize) -> Result<Vector3> {
        Ok(paths::body_velocity(self, self.body(index)?))
    }

    /// Resolves the `i`-th pooled vertex of a lump
    pub(crate) fn lump_vert(&self, lump: &Lump, i: usize) -> &Vertex {
        &self.verts[self.indices[lump.v0 + i]]
    }

    /// Resolves the `i`-th pooled edge of a lump
    pub(crate) fn lump_edge(&self, lump: &Lump, i: usize) -> &Edge {
        &self.edges[self.indices[lump.e0 + i]]
    }

    /// Resolves the `i`-th pooled side index of a lump
    ///
    /// The side index itself is exposed so callers can tell two slots
    /// naming the same side apart from two distinct coplanar sides.
    pub(crate) fn lump_side_index(&self, lump: &Lump, i: usize) -> usize {
        self.indices[lump.s0 + i]
    }

    /// Checks every cross-reference and structural invariant of a freshly
    /// loaded world
    ///
    /// The stepping core trusts the loader and indexes without checks, so
    /// loaders should call this once after assembly.
    pub fn validate(&self) -> Result<()> {
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.vi >= self.verts.len() || edge.vj >= self.verts.len() {
                return Err(SimError::InvalidParameter(format!(
                    "Edge {} references a vertex out of range",
                    i
                )));
            }
        }

        for (i, side) in self.sides.iter().enumerate() {
            if (side.n.length() - 1.0).abs() > 1.0e-3 {
                return Err(SimError::InvalidParameter(format!(
                    "Side {} normal is not unit length",
                    i
                )));
            }
        }

        for (i, lump) in self.lumps.iter().enumerate() {
            self.check_pool_range(i, "vertex", lump.v0, lump.vc, self.verts.len())?;
            self.check_pool_range(i, "edge", lump.e0, lump.ec, self.edges.len())?;
            self.check_pool_range(i, "side", lump.s0, lump.sc, self.sides.len())?;
        }

        for (i, node) in self.nodes.iter().enumerate() {
            if node.l0 + node.lc > self.lumps.len() {
                return Err(SimError::InvalidParameter(format!(
                    "Node {} lump range out of bounds",
                    i
                )));
            }
            if node.si.map_or(false, |si| si >= self.sides.len())
                || node.fore.map_or(false, |ni| ni >= self.nodes.len())
                || node.back.map_or(false, |nj| nj >= self.nodes.len())
            {
                return Err(SimError::InvalidParameter(format!(
                    "Node {} references out of range",
                    i
                )));
            }
        }

        for (i, path) in self.paths.iter().enumerate() {
            if path.next >= self.paths.len() {
                return Err(SimError::InvalidParameter(format!(
                    "Path {} successor out of range",
                    i
                )));
            }
            if path.t <= 0.0 {
                return Err(SimError::InvalidParameter(format!(
                    "Path {} has non-positive duration",
                    i
                )));
            }
        }

        for (i, body) in self.bodies.iter().enumerate() {
            if body.node >= self.nodes.len()
                || body.path.map_or(false, |pi| pi >= self.paths.len())
            {
                return Err(SimError::InvalidParameter(format!(
                    "Body {} references out of range",
                    i
                )));
            }
        }

        for (i, sw) in self.switches.iter().enumerate() {
            if sw.path >= self.paths.len() {
                return Err(SimError::InvalidParameter(format!(
                    "Switch {} path out of range",
                    i
                )));
            }
        }

        for (i, ball) in self.balls.iter().enumerate() {
            if ball.r < 0.0 {
                return Err(SimError::InvalidParameter(format!(
                    "Ball {} has negative radius",
                    i
                )));
            }
        }

        Ok(())
    }

    fn check_pool_range(
        &self,
        lump: usize,
        what: &str,
        start: usize,
        count: usize,
        limit: usize,
    ) -> Result<()> {
        if start + count > self.indices.len() {
            return Err(SimError::InvalidParameter(format!(
                "Lump {} {} range exceeds the index pool",
                lump, what
            )));
        }
        for &index in &self.indices[start..start + count] {
            if index >= limit {
                return Err(SimError::InvalidParameter(format!(
                    "Lump {} pooled {} index out of range",
                    lump, what
                )));
            }
        }
        Ok(())
    }
}
