//! Property tests for the result record roll-up rule

use proptest::prelude::*;
use triage311_providers::{
    Category, Classification, Metadata, Outputs, ResultRecord, RunStatus, SafetyResult, TASK_NAME,
};

fn outputs(with_classification: bool, with_safety: bool, phrase_count: usize) -> Outputs {
    Outputs {
        classification: with_classification.then(|| Classification {
            category: Category::Other,
            confidence: 0.5,
            reasoning: "r".into(),
        }),
        content_safety: with_safety.then(|| SafetyResult {
            safe: true,
            categories: Default::default(),
        }),
        key_phrases: Some((0..phrase_count).map(|i| format!("phrase {i}")).collect()),
    }
}

proptest! {
    /// Status follows the count of usable outputs: 3 -> success, 0 -> error,
    /// anything between -> partial. An empty phrase list is not usable.
    #[test]
    fn rollup_matches_present_count(
        with_classification in any::<bool>(),
        with_safety in any::<bool>(),
        phrase_count in 0usize..4,
    ) {
        let outputs = outputs(with_classification, with_safety, phrase_count);
        let present = [with_classification, with_safety, phrase_count > 0]
            .iter()
            .filter(|b| **b)
            .count();

        let expected = match present {
            3 => RunStatus::Success,
            0 => RunStatus::Error,
            _ => RunStatus::Partial,
        };
        prop_assert_eq!(RunStatus::from_outputs(&outputs), expected);
    }

    /// Every assembled record carries the required top-level fields,
    /// whatever the outputs look like.
    #[test]
    fn assembled_record_is_well_formed(
        with_classification in any::<bool>(),
        with_safety in any::<bool>(),
        phrase_count in 0usize..4,
    ) {
        let record = ResultRecord::assemble(
            outputs(with_classification, with_safety, phrase_count),
            Metadata::now("gpt-4o".into()),
        );
        let value = serde_json::to_value(&record).unwrap();

        prop_assert_eq!(value["task"].as_str(), Some(TASK_NAME));
        prop_assert!(value.get("status").is_some());
        prop_assert!(value["outputs"].get("classification").is_some());
        prop_assert!(value["outputs"].get("content_safety").is_some());
        prop_assert!(value["outputs"].get("key_phrases").is_some());
        prop_assert!(value["metadata"].get("timestamp").is_some());
    }
}
