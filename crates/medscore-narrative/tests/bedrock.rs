//! Integration tests for the Bedrock generator.
//!
//! These tests call real AWS APIs and require valid credentials in the
//! environment plus `MEDSCORE_MODEL_ID`.
//!
//! Run with: `cargo test -p medscore-narrative --test bedrock -- --ignored`

use medscore_instruments::scoring::{Breakdown, ScoreResult};
use medscore_narrative::advice::patient_advice_prompt;
use medscore_narrative::bedrock::BedrockGenerator;
use medscore_narrative::generator::narrate;
use medscore_narrative::normalize::PATIENT_ADVICE_DISCLAIMER;
use medscore_narrative::prompts::PromptSet;

async fn build_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await
}

#[tokio::test]
#[ignore]
async fn patient_advice_comes_back_without_disclaimer() {
    let model_id = std::env::var("MEDSCORE_MODEL_ID").expect("MEDSCORE_MODEL_ID must be set");
    let generator = BedrockGenerator::new(&build_config().await, model_id);

    let mut breakdown = Breakdown::new();
    breakdown.set("q1", 3.0);
    let result = ScoreResult::new(3.2, "low_activity", breakdown)
        .with_description("Низкая активность заболевания");
    let prompt = patient_advice_prompt("BASDAI", "BASDAI", &result, "");

    let text = narrate(Some(&generator), &PromptSet::default().patient_advice, &prompt)
        .await
        .expect("model should return advice");

    println!("{text}");
    assert!(!text.contains(PATIENT_ADVICE_DISCLAIMER));
}
