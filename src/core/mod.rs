pub mod entities;
pub mod world;

pub use self::entities::{
    Ball, Body, Edge, Goal, Item, ItemKind, Jump, Lump, LumpFlags, Node, Path, Side, Switch,
    Vertex,
};
pub use self::world::World;
