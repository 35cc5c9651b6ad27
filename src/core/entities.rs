use crate::math::{Basis, Vector3};

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A level geometry vertex
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Position in body-local space
    pub p: Vector3,
}

/// A level geometry edge joining two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Index of the first endpoint vertex
    pub vi: usize,

    /// Index of the second endpoint vertex
    pub vj: usize,
}

/// A plane half-space bounding a lump
///
/// The plane is `x · n = d` with `n` unit length; the interior of the
/// half-space is `x · n <= d`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Side {
    /// Unit plane normal
    pub n: Vector3,

    /// Distance from the body-local origin along the normal
    pub d: f32,
}

/// Flags controlling lump behavior
pub mod lump_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Flags controlling how a lump participates in the simulation
        #[derive(Default)]
        #[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
        pub struct LumpFlags: u32 {
            /// Lump is decorative only and never collided with
            const DETAIL = 0x01;
        }
    }
}

pub use lump_flags::LumpFlags;

/// A convex cell bounded by plane sides
///
/// The vertex, edge, and side sets are ranges into the world's shared index
/// pool rather than direct arrays, so lumps can share geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Lump {
    /// Behavior flags
    pub flags: LumpFlags,

    /// First vertex slot in the index pool
    pub v0: usize,

    /// Number of vertices
    pub vc: usize,

    /// First edge slot in the index pool
    pub e0: usize,

    /// Number of edges
    pub ec: usize,

    /// First side slot in the index pool
    pub s0: usize,

    /// Number of sides
    pub sc: usize,
}

/// A BSP node partitioning a body's lumps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Node {
    /// Splitting side index, absent in leaves
    pub si: Option<usize>,

    /// Child node on the front of the splitting plane
    pub fore: Option<usize>,

    /// Child node on the back of the splitting plane
    pub back: Option<usize>,

    /// First owned lump
    pub l0: usize,

    /// Number of owned lumps
    pub lc: usize,
}

impl Node {
    /// Creates a leaf node owning the given run of lumps
    pub fn leaf(l0: usize, lc: usize) -> Self {
        Self { si: None, fore: None, back: None, l0, lc }
    }
}

/// A keyframe edge in the cyclic path graph
///
/// A body attached to this path travels from `p` to the successor's anchor
/// over `t` seconds. The `next` links always close into a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Path {
    /// Anchor point of this keyframe
    pub p: Vector3,

    /// Travel time to the successor, strictly positive
    pub t: f32,

    /// Successor path index
    pub next: usize,

    /// Whether bodies on this path are currently moving
    pub enabled: bool,

    /// Ease-in/ease-out interpolation instead of linear
    pub smooth: bool,
}

/// A rigid body: a BSP sub-tree of lumps, optionally animated along a path
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Body {
    /// Root node of the body's geometry
    pub node: usize,

    /// Current path, or none for static bodies
    pub path: Option<usize>,

    /// Time elapsed on the current path segment
    pub t: f32,
}

impl Body {
    /// Creates a static body rooted at the given node
    pub fn fixed(node: usize) -> Self {
        Self { node, path: None, t: 0.0 }
    }

    /// Creates a body animated along the path cycle through `path`
    pub fn on_path(node: usize, path: usize) -> Self {
        Self { node, path: Some(path), t: 0.0 }
    }
}

/// The player-controlled sphere
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Ball {
    /// Center position
    pub p: Vector3,

    /// Linear velocity
    pub v: Vector3,

    /// Radius; a zero radius degenerates to a point touching only planes
    pub r: f32,

    /// Rolling angular velocity
    pub w: Vector3,

    /// Render orientation, spun by rolling
    pub basis: Basis,

    /// Pendulum angular velocity
    pub pend_w: Vector3,

    /// Pendulum frame hanging from the ball center
    pub pend_basis: Basis,
}

impl Ball {
    /// Creates a resting ball of radius `r` at `p`
    pub fn new(p: Vector3, r: f32) -> Self {
        Self {
            p,
            v: Vector3::zero(),
            r,
            w: Vector3::zero(),
            basis: Basis::identity(),
            pend_w: Vector3::zero(),
            pend_basis: Basis::identity(),
        }
    }
}

/// What a pickup item grants when collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ItemKind {
    /// Already collected; inert
    None,
    Coin,
    Grow,
    Shrink,
}

/// A pickup item, inert to physics
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Item {
    /// Position
    pub p: Vector3,

    /// Item kind; flipped to `None` by the caller on pickup
    pub kind: ItemKind,

    /// Pickup value (coin count)
    pub n: i32,
}

/// A goal cylinder
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Goal {
    /// Center of the cylinder base
    pub p: Vector3,

    /// Cylinder radius
    pub r: f32,
}

/// A teleporter cylinder and its destination
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Jump {
    /// Center of the source cylinder base
    pub p: Vector3,

    /// Destination point
    pub q: Vector3,

    /// Source cylinder radius
    pub r: f32,
}

/// A switch cylinder toggling a path cycle, optionally on a countdown
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Switch {
    /// Center of the cylinder base
    pub p: Vector3,

    /// Cylinder radius
    pub r: f32,

    /// Head of the controlled path cycle
    pub path: usize,

    /// Remaining countdown; positive while a revert is pending
    pub t: f32,

    /// Countdown duration armed on a non-default toggle; zero for latching
    /// switches
    pub t0: f32,

    /// Default enable state of the controlled paths
    pub f0: bool,

    /// Current enable state of the controlled paths
    pub f: bool,

    /// Invisible switches toggle without reporting an event
    pub invisible: bool,

    /// The ball is currently inside; suppresses re-triggering
    pub entered: bool,
}
