//! Scene generation for narrative transitions.
//!
//! Given loosely populated context about a location, a character, and the
//! wider world, this crate renders a system prompt, asks a chat model for a
//! short scene, and splits the reply into a description plus a trailing
//! "why you are here" sentence. A failed remote call never reaches the
//! caller; it is replaced with a deterministic fallback built from the
//! location summary.

pub mod generator;
pub mod prompt;
pub mod split;
pub mod types;

pub use generator::{GenerationConfig, SceneGenerator};
pub use split::split_scene_text;
pub use types::{
    CharacterContext, ExperienceTier, GlobalThreat, LocationContext, QuestHook, ResolvedScene,
    SceneResult, SceneType, WorldBlueprint, WorldContext,
};
