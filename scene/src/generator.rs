//! The scene generation pipeline: resolve, render, call, split, fall back.

use crate::prompt::render_scene_prompt;
use crate::split::split_scene_text;
use crate::types::{
    CharacterContext, LocationContext, QuestHook, ResolvedScene, SceneResult, SceneType,
    WorldBlueprint, WorldContext,
};
use log::{error, info};
use std::sync::Arc;
use textgen::{ChatClient, ChatError, SamplingParams};

/// Tunable constants for scene generation.
///
/// Every value the pipeline would otherwise hard-code lives here so call
/// sites and tests can override it.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Chat model identifier; a small, fast model is enough for scenes.
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Quest hooks rendered into a single prompt, at most.
    pub max_quest_hooks: usize,
    /// Threat signs rendered into a single prompt, at most.
    pub max_early_signs: usize,
    /// Signature products listed in the prompt, at most.
    pub max_products: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "llama3.2".to_string(),
            temperature: 0.7,
            max_tokens: 300,
            max_quest_hooks: 2,
            max_early_signs: 2,
            max_products: 3,
        }
    }
}

/// Generates scene descriptions for narrative transitions.
///
/// Stateless apart from the shared client handle, so one instance can serve
/// concurrent sessions.
pub struct SceneGenerator {
    client: Arc<dyn ChatClient>,
    config: GenerationConfig,
}

impl SceneGenerator {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self::with_config(client, GenerationConfig::default())
    }

    pub fn with_config(client: Arc<dyn ChatClient>, config: GenerationConfig) -> Self {
        Self { client, config }
    }

    /// Generate a scene description for one narrative transition.
    ///
    /// Missing context fields are tolerated and defaulted. This never fails:
    /// any error from the remote call is logged and replaced with a
    /// deterministic fallback built from the location summary.
    pub async fn generate(
        &self,
        scene_type: SceneType,
        location: &LocationContext,
        character: &CharacterContext,
        world: &WorldContext,
        blueprint: &WorldBlueprint,
        quest_hooks: &[QuestHook],
    ) -> SceneResult {
        let scene =
            ResolvedScene::new(scene_type, location, character, world, blueprint, quest_hooks);
        match self.request_scene(&scene).await {
            Ok(text) => {
                let (description, why_here) = split_scene_text(&text, &scene.location_name);
                info!(
                    "generated {} scene for {}",
                    scene.scene_type, scene.location_name
                );
                SceneResult {
                    location: scene.location_name,
                    description,
                    why_here,
                }
            }
            Err(e) => {
                error!("scene generation failed for {}: {e}", scene.location_name);
                fallback_scene(&scene)
            }
        }
    }

    async fn request_scene(&self, scene: &ResolvedScene) -> Result<String, ChatError> {
        let system = render_scene_prompt(scene, &self.config);
        let user = format!(
            "Generate scene description for {} at {}",
            scene.scene_type, scene.location_name
        );
        let params = SamplingParams {
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        self.client
            .complete(&self.config.model, &system, &user, params)
            .await
    }
}

/// The deterministic result used whenever the remote call fails.
fn fallback_scene(scene: &ResolvedScene) -> SceneResult {
    SceneResult {
        location: scene.location_name.clone(),
        description: scene.location_summary.clone(),
        why_here: format!(
            "You have arrived in {} seeking adventure and fortune. The world awaits your choices.",
            scene.location_name
        ),
    }
}
