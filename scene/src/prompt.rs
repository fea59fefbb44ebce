//! Prompt rendering for scene generation.
//!
//! The template encodes the narration house rules (second-person POV,
//! sentence limits, three spatial references) and substitutes the resolved
//! context values. Truncation limits come from [`GenerationConfig`] rather
//! than literals so tests can tighten or loosen them.

use crate::generator::GenerationConfig;
use crate::types::ResolvedScene;
use indoc::indoc;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Render the system prompt for one resolved scene request.
pub fn render_scene_prompt(scene: &ResolvedScene, config: &GenerationConfig) -> String {
    let products_text = if scene.signature_products.is_empty() {
        "various goods".to_string()
    } else {
        scene
            .signature_products
            .iter()
            .take(config.max_products)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    let wanted_text = if scene.is_wanted {
        "YES - guards watching"
    } else {
        "No"
    };

    let mut out = String::from(indoc! {"
        SCENE NARRATOR PROMPT (scene generation mode)

        You describe one short scene for a fantasy role-playing session.

        SCENE TYPE MEANINGS:
        - arrival: first time entering the location
        - return: returning to a previously visited location
        - transition: moving between areas within the same location
        - time_skip: same location after time has passed
    "});

    out.push_str(&format!("\nSCENE TYPE: {}\n", scene.scene_type));

    out.push_str("\nLOCATION CONTEXT:\n");
    out.push_str(&format!("- Name: {}\n", scene.location_name));
    out.push_str(&format!("- Role: {}\n", scene.location_role));
    out.push_str(&format!("- Base Description: {}\n", scene.location_summary));
    out.push_str(&format!("- Known For: {}\n", products_text));
    out.push_str(&format!("- Time: {}\n", scene.time_of_day));
    out.push_str(&format!("- Weather: {}\n", scene.weather));

    out.push_str("\nCHARACTER CONTEXT:\n");
    out.push_str(&format!("- Name: {}\n", scene.character_name));
    out.push_str(&format!(
        "- Level: {} ({})\n",
        scene.character_level, scene.experience
    ));
    out.push_str(&format!("- Background: {}\n", scene.character_background));
    out.push_str(&format!("- Class: {}\n", scene.character_class));
    out.push_str(&format!("- Wanted/Hostile: {}\n", wanted_text));

    if !scene.quest_hooks.is_empty() {
        out.push_str("\nAVAILABLE QUEST HOOKS (weave 1-2 subtly into the description):\n");
        for hook in scene.quest_hooks.iter().take(config.max_quest_hooks) {
            let kind = hook.kind.clone().unwrap_or_else(|| "conversation".into());
            let description = hook.description.clone().unwrap_or_default();
            out.push_str(&format!("- {}: {}\n", capitalize(&kind), description));
        }
    }

    if !scene.early_signs.is_empty() {
        out.push_str("\nTHREAT CONTEXT (include 1 subtle sign):\n");
        for sign in scene.early_signs.iter().take(config.max_early_signs) {
            out.push_str(&format!("- {}\n", sign));
        }
    }

    out.push_str(indoc! {"

        NARRATION RULES:
        - Second person (\"you\") only; describe only what the player can see, hear, smell, or feel.
        - Write 4-8 sentences total; sentence 1 gives a sensory detail fitting the time and weather.
        - Sentences 2-4 each give one spatial reference: \"To your left, ...\", \"To your right, ...\", \"Straight ahead, ...\".
        - Short, direct sentences; no metaphors, no invented emotions, no omniscient narration.
        - Make quest hooks subtle: environmental clues, NPC behavior, overheard fragments.
        - Close with exactly one sentence explaining why the character is here.

        Generate the scene description now:
    "});

    out
}
