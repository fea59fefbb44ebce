//! Generate one arrival scene against a local Ollama server.
//!
//! Run with `cargo run --example arrival` while an Ollama instance is
//! listening on localhost. A failed call still prints a usable scene via
//! the fallback path.

use scene::{
    CharacterContext, LocationContext, QuestHook, SceneGenerator, SceneType, WorldBlueprint,
    WorldContext,
};
use std::sync::Arc;
use textgen::OllamaChatClient;

#[tokio::main]
async fn main() {
    env_logger::init();

    let client = match OllamaChatClient::new("http://localhost:11434") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("could not construct client: {e}");
            return;
        }
    };
    let generator = SceneGenerator::new(Arc::new(client));

    let location = LocationContext {
        name: Some("Darkeroot".into()),
        role: Some("trade town".into()),
        summary: Some("A timber town at the edge of an old forest.".into()),
        signature_products: vec!["ironwood".into(), "resin".into()],
    };
    let character = CharacterContext {
        name: Some("Mira".into()),
        level: Some(4),
        background: Some("smuggler".into()),
        class: Some("rogue".into()),
    };
    let world = WorldContext {
        time_of_day: Some("dusk".into()),
        weather: Some("light rain".into()),
        ..Default::default()
    };
    let hooks = vec![QuestHook {
        kind: Some("rumor".into()),
        description: Some("a caravan vanished on the forest road".into()),
    }];

    let result = generator
        .generate(
            SceneType::Arrival,
            &location,
            &character,
            &world,
            &WorldBlueprint::default(),
            &hooks,
        )
        .await;

    println!("[{}]", result.location);
    println!("{}", result.description);
    println!("{}", result.why_here);
}
