//! Context records for scene requests.
//!
//! Callers hand over loosely populated bags of state; every field here is
//! optional at the boundary and deserializes with [`serde`] defaults.
//! [`ResolvedScene`] is the single place where literal defaults are applied,
//! so the defaulting rules can be tested in one spot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrative transition that triggers a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    /// First time entering a location.
    Arrival,
    /// Returning to a previously visited location.
    Return,
    /// Moving between areas within the same location.
    Transition,
    /// Same location after time has passed.
    TimeSkip,
}

impl fmt::Display for SceneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SceneType::Arrival => "arrival",
            SceneType::Return => "return",
            SceneType::Transition => "transition",
            SceneType::TimeSkip => "time_skip",
        };
        f.write_str(label)
    }
}

/// Location data, typically one settlement or point of interest from a
/// world blueprint.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocationContext {
    pub name: Option<String>,
    pub role: Option<String>,
    pub summary: Option<String>,
    pub signature_products: Vec<String>,
}

/// Character state relevant to scene narration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CharacterContext {
    pub name: Option<String>,
    pub level: Option<u32>,
    pub background: Option<String>,
    #[serde(alias = "class_")]
    pub class: Option<String>,
}

/// Mutable world state: time, weather, and hostility toward the character.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorldContext {
    pub time_of_day: Option<String>,
    pub weather: Option<String>,
    pub guards_hostile: bool,
    pub city_hostile: bool,
}

/// The slice of a world blueprint this crate reads: the looming threat and
/// its visible signs near the starting town.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorldBlueprint {
    pub global_threat: GlobalThreat,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GlobalThreat {
    pub early_signs_near_starting_town: Vec<String>,
}

/// A suggestion to weave subtly into the generated scene.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct QuestHook {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

/// Rough narrative weight of a character, derived from level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceTier {
    Inexperienced,
    Seasoned,
    Legendary,
}

impl ExperienceTier {
    /// Thresholds are inclusive: levels 1-3 are inexperienced, 4-7 seasoned.
    pub fn from_level(level: u32) -> Self {
        if level <= 3 {
            ExperienceTier::Inexperienced
        } else if level <= 7 {
            ExperienceTier::Seasoned
        } else {
            ExperienceTier::Legendary
        }
    }
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExperienceTier::Inexperienced => "inexperienced",
            ExperienceTier::Seasoned => "seasoned",
            ExperienceTier::Legendary => "legendary",
        };
        f.write_str(label)
    }
}

/// One scene request with every default applied and derived fields computed.
#[derive(Clone, Debug)]
pub struct ResolvedScene {
    pub scene_type: SceneType,
    pub location_name: String,
    pub location_role: String,
    pub location_summary: String,
    pub signature_products: Vec<String>,
    pub character_name: String,
    pub character_level: u32,
    pub character_background: String,
    pub character_class: String,
    pub time_of_day: String,
    pub weather: String,
    pub is_wanted: bool,
    pub experience: ExperienceTier,
    pub early_signs: Vec<String>,
    pub quest_hooks: Vec<QuestHook>,
}

fn fill(value: &Option<String>, fallback: &str) -> String {
    value.clone().unwrap_or_else(|| fallback.to_string())
}

impl ResolvedScene {
    pub fn new(
        scene_type: SceneType,
        location: &LocationContext,
        character: &CharacterContext,
        world: &WorldContext,
        blueprint: &WorldBlueprint,
        quest_hooks: &[QuestHook],
    ) -> Self {
        let level = character.level.unwrap_or(1);
        Self {
            scene_type,
            location_name: fill(&location.name, "Unknown"),
            location_role: fill(&location.role, "settlement"),
            location_summary: fill(&location.summary, "A mysterious place"),
            signature_products: location.signature_products.clone(),
            character_name: fill(&character.name, "Adventurer"),
            character_level: level,
            character_background: fill(&character.background, "wanderer"),
            character_class: fill(&character.class, "unknown"),
            time_of_day: fill(&world.time_of_day, "midday"),
            weather: fill(&world.weather, "clear"),
            is_wanted: world.guards_hostile || world.city_hostile,
            experience: ExperienceTier::from_level(level),
            early_signs: blueprint.global_threat.early_signs_near_starting_town.clone(),
            quest_hooks: quest_hooks.to_vec(),
        }
    }
}

/// The structured outcome of one scene generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SceneResult {
    pub location: String,
    pub description: String,
    /// Single sentence explaining the character's presence; always ends
    /// with a period.
    pub why_here: String,
}
