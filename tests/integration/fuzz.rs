//! Property tests using proptest

use proptest::prelude::*;
use tagmatch::{describe_state, greet, greet_all, greet_input, Input, Outcome, StateTag};

/// Strategy for generating plausible names
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z ]{0,15}"
}

/// Strategy for generating arbitrary input trees
fn input_strategy() -> impl Strategy<Value = Input> {
    let leaf = prop_oneof![
        name_strategy().prop_map(Input::Text),
        any::<f64>().prop_map(Input::Number),
        any::<bool>().prop_map(Input::Flag),
        Just(Input::Unit),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Input::List)
    })
}

/// Strategy for generating arbitrary data states
fn state_strategy() -> impl Strategy<Value = tagmatch::DataState> {
    prop_oneof![
        Just(tagmatch::DataState::Loading),
        name_strategy().prop_map(|error| tagmatch::DataState::Failed { error }),
        name_strategy().prop_map(|title| tagmatch::DataState::Success {
            data: tagmatch::Payload { title }
        }),
    ]
}

proptest! {
    #[test]
    fn prop_greet_all_preserves_length_and_order(names in prop::collection::vec(name_strategy(), 0..8)) {
        let greetings = greet_all(names.clone());
        prop_assert_eq!(greetings.len(), names.len());
        for (greeting, name) in greetings.iter().zip(names.iter()) {
            prop_assert_eq!(greeting, &greet(name));
        }
    }

    #[test]
    fn prop_greet_input_never_panics(input in input_strategy()) {
        let _ = greet_input(&input);
    }

    #[test]
    fn prop_greet_input_list_output_matches_input_length(names in prop::collection::vec(name_strategy(), 0..8)) {
        let input = Input::List(names.iter().cloned().map(Input::Text).collect());
        let out = greet_input(&input).unwrap();
        let items = out.as_list().unwrap();
        prop_assert_eq!(items.len(), names.len());
    }

    #[test]
    fn prop_dispatch_is_idempotent(state in state_strategy()) {
        prop_assert_eq!(describe_state(&state), describe_state(&state));
    }

    #[test]
    fn prop_unknown_tags_always_error(tag in "[a-z]{1,12}") {
        let known = StateTag::ALL.iter().any(|t| t.as_str() == tag);
        prop_assert_eq!(tag.parse::<StateTag>().is_ok(), known);
        let known_outcome = Outcome::ALL.iter().any(|o| o.as_str() == tag);
        prop_assert_eq!(tag.parse::<Outcome>().is_ok(), known_outcome);
    }
}
