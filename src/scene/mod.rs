//! Scene switching.
//!
//! The registry is the contract between the game engines and whatever
//! presents them: it owns the scenes by name and remembers which one is
//! showing. It is an ordinary value owned by the application, passed to
//! whoever needs to switch scenes.

mod kind;
mod registry;

pub use kind::{SceneKind, unknown_scene_text};
pub use registry::{SceneFactory, SceneRegistry};
