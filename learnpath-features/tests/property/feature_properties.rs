use learnpath_core::knowledge::KnowledgeBase;
use learnpath_core::models::UserProfile;
use learnpath_features::FeatureBuilder;
use proptest::prelude::*;
use serde_json::Value;

// Anything a sloppy client might put in a numeric field.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<f64>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 .eE+-]{0,16}".prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
    ]
}

proptest! {
    #[test]
    fn numeric_features_stay_bounded(
        avg in arb_scalar(),
        years in arb_scalar(),
        bio in "[a-zA-Z0-9 +#/.,-]{0,60}",
        caller_skills in proptest::collection::vec("[a-zA-Z +]{0,12}", 0..8),
        aspiration in "[a-zA-Z /]{0,40}",
    ) {
        let kb = KnowledgeBase::builtin();
        let profile: UserProfile = serde_json::from_value(serde_json::json!({
            "avg_score": avg,
            "experience_years": years,
            "bio": bio,
        })).unwrap();

        let vector = FeatureBuilder::new(&kb).build(&profile, &caller_skills, &aspiration);
        prop_assert!(
            vector.is_bounded(),
            "out of bounds: {:?}",
            vector.as_array()
        );
    }

    #[test]
    fn extracted_skills_are_lowercase_and_trimmed(
        caller_skills in proptest::collection::vec("[a-zA-Z ]{1,12}", 0..6),
    ) {
        let kb = KnowledgeBase::builtin();
        let vector = FeatureBuilder::new(&kb).build(
            &UserProfile::default(),
            &caller_skills,
            "",
        );
        for skill in &vector.extracted_skills {
            let lowered = skill.to_lowercase();
            prop_assert_eq!(skill.as_str(), lowered.trim());
        }
    }

    #[test]
    fn role_is_empty_or_canonical(aspiration in "[a-zA-Z /]{0,40}") {
        let kb = KnowledgeBase::builtin();
        let vector = FeatureBuilder::new(&kb).build(&UserProfile::default(), &[], &aspiration);
        prop_assert!(
            vector.role.is_empty() || kb.role(&vector.role).is_some(),
            "unexpected role: {:?}",
            vector.role
        );
    }
}
