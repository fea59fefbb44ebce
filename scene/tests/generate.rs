use async_trait::async_trait;
use scene::{
    CharacterContext, GenerationConfig, LocationContext, QuestHook, SceneGenerator, SceneType,
    WorldBlueprint, WorldContext,
};
use std::sync::{Arc, Mutex};
use textgen::{ChatClient, ChatError, SamplingParams};

/// Replies with a fixed string.
struct CannedClient(String);

#[async_trait]
impl ChatClient for CannedClient {
    async fn complete(
        &self,
        _model: &str,
        _system: &str,
        _user: &str,
        _params: SamplingParams,
    ) -> Result<String, ChatError> {
        Ok(self.0.clone())
    }
}

/// Always fails the call.
struct FailingClient;

#[async_trait]
impl ChatClient for FailingClient {
    async fn complete(
        &self,
        _model: &str,
        _system: &str,
        _user: &str,
        _params: SamplingParams,
    ) -> Result<String, ChatError> {
        Err(ChatError::Network("connection refused".into()))
    }
}

#[derive(Clone, Default)]
struct CapturedRequest {
    model: String,
    system: String,
    user: String,
    temperature: f32,
    max_tokens: u32,
}

/// Records the request it receives before replying.
struct RecordingClient {
    captured: Arc<Mutex<Option<CapturedRequest>>>,
    reply: String,
}

#[async_trait]
impl ChatClient for RecordingClient {
    async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
        params: SamplingParams,
    ) -> Result<String, ChatError> {
        *self.captured.lock().unwrap() = Some(CapturedRequest {
            model: model.to_string(),
            system: system.to_string(),
            user: user.to_string(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        });
        Ok(self.reply.clone())
    }
}

fn darkeroot() -> LocationContext {
    LocationContext {
        name: Some("Darkeroot".into()),
        role: Some("trade town".into()),
        summary: Some("A timber town at the forest edge.".into()),
        signature_products: vec!["ironwood".into()],
    }
}

#[tokio::test]
async fn success_splits_description_and_why_here() {
    let generator = SceneGenerator::new(Arc::new(CannedClient(
        "You enter Darkeroot at dusk. To your left, a forge glows. You came to find the caravan."
            .into(),
    )));
    let result = generator
        .generate(
            SceneType::Arrival,
            &darkeroot(),
            &CharacterContext::default(),
            &WorldContext::default(),
            &WorldBlueprint::default(),
            &[],
        )
        .await;
    assert_eq!(result.location, "Darkeroot");
    assert_eq!(
        result.description,
        "You enter Darkeroot at dusk. To your left, a forge glows."
    );
    assert_eq!(result.why_here, "You came to find the caravan.");
}

#[tokio::test]
async fn result_is_always_well_formed() {
    let generator = SceneGenerator::new(Arc::new(CannedClient("A. B. C.".into())));
    let result = generator
        .generate(
            SceneType::TimeSkip,
            &LocationContext::default(),
            &CharacterContext::default(),
            &WorldContext::default(),
            &WorldBlueprint::default(),
            &[],
        )
        .await;
    assert!(!result.location.is_empty());
    assert!(!result.description.is_empty());
    assert!(result.why_here.ends_with('.'));
}

#[tokio::test]
async fn single_sentence_reply_synthesizes_why_here() {
    let generator = SceneGenerator::new(Arc::new(CannedClient("OneSentenceOnly".into())));
    let result = generator
        .generate(
            SceneType::Transition,
            &darkeroot(),
            &CharacterContext::default(),
            &WorldContext::default(),
            &WorldBlueprint::default(),
            &[],
        )
        .await;
    assert_eq!(result.description, "OneSentenceOnly");
    assert_eq!(
        result.why_here,
        "You arrive in Darkeroot, ready for whatever awaits."
    );
}

#[tokio::test]
async fn failed_call_returns_summary_fallback() {
    let generator = SceneGenerator::new(Arc::new(FailingClient));
    let result = generator
        .generate(
            SceneType::Arrival,
            &darkeroot(),
            &CharacterContext::default(),
            &WorldContext::default(),
            &WorldBlueprint::default(),
            &[],
        )
        .await;
    assert_eq!(result.location, "Darkeroot");
    assert_eq!(result.description, "A timber town at the forest edge.");
    assert_eq!(
        result.why_here,
        "You have arrived in Darkeroot seeking adventure and fortune. The world awaits your choices."
    );
}

#[tokio::test]
async fn failed_call_with_empty_context_uses_literal_defaults() {
    let generator = SceneGenerator::new(Arc::new(FailingClient));
    let result = generator
        .generate(
            SceneType::Return,
            &LocationContext::default(),
            &CharacterContext::default(),
            &WorldContext::default(),
            &WorldBlueprint::default(),
            &[],
        )
        .await;
    assert_eq!(result.location, "Unknown");
    assert_eq!(result.description, "A mysterious place");
    assert!(result.why_here.contains("Unknown"));
    assert!(result.why_here.ends_with('.'));
}

#[tokio::test]
async fn request_carries_prompt_and_sampling_settings() {
    let captured = Arc::new(Mutex::new(None));
    let generator = SceneGenerator::new(Arc::new(RecordingClient {
        captured: captured.clone(),
        reply: "A. B.".into(),
    }));
    let hooks = vec![QuestHook {
        kind: Some("rumor".into()),
        description: Some("a missing caravan".into()),
    }];
    let _ = generator
        .generate(
            SceneType::Arrival,
            &darkeroot(),
            &CharacterContext {
                level: Some(10),
                ..Default::default()
            },
            &WorldContext::default(),
            &WorldBlueprint::default(),
            &hooks,
        )
        .await;
    let req = captured.lock().unwrap().clone().unwrap();
    assert_eq!(req.model, "llama3.2");
    assert_eq!(req.temperature, 0.7);
    assert_eq!(req.max_tokens, 300);
    assert_eq!(req.user, "Generate scene description for arrival at Darkeroot");
    assert!(req.system.contains("- Name: Darkeroot"));
    assert!(req.system.contains("- Level: 10 (legendary)"));
    assert!(req.system.contains("- Rumor: a missing caravan"));
}

#[tokio::test]
async fn config_overrides_reach_the_client() {
    let captured = Arc::new(Mutex::new(None));
    let config = GenerationConfig {
        model: "test-model".into(),
        temperature: 0.1,
        max_tokens: 64,
        max_quest_hooks: 1,
        ..GenerationConfig::default()
    };
    let generator = SceneGenerator::with_config(
        Arc::new(RecordingClient {
            captured: captured.clone(),
            reply: "A. B.".into(),
        }),
        config,
    );
    let hooks = vec![
        QuestHook {
            kind: Some("rumor".into()),
            description: Some("first".into()),
        },
        QuestHook {
            kind: Some("discovery".into()),
            description: Some("second".into()),
        },
    ];
    let _ = generator
        .generate(
            SceneType::Arrival,
            &darkeroot(),
            &CharacterContext::default(),
            &WorldContext::default(),
            &WorldBlueprint::default(),
            &hooks,
        )
        .await;
    let req = captured.lock().unwrap().clone().unwrap();
    assert_eq!(req.model, "test-model");
    assert_eq!(req.temperature, 0.1);
    assert_eq!(req.max_tokens, 64);
    assert!(req.system.contains("- Rumor: first"));
    assert!(!req.system.contains("second"));
}
