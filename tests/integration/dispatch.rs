//! Tagged-result dispatch end to end: typed dispatch, the untyped tag
//! boundary, and the corpus JSON shapes.

use tagmatch::{describe_state, outcome_message, DataState, DispatchError, Outcome, Payload, StateTag};

#[test]
fn test_all_known_tags_dispatch() {
    assert_eq!(describe_state(&DataState::Loading), "Loading...");
    assert_eq!(
        describe_state(&DataState::Failed {
            error: "X".to_string()
        }),
        "Error: X"
    );
    assert_eq!(
        describe_state(&DataState::Success {
            data: Payload {
                title: "T".to_string()
            }
        }),
        "Title: T"
    );
}

#[test]
fn test_dispatch_is_idempotent() {
    let state = DataState::Failed {
        error: "X".to_string(),
    };
    let first = describe_state(&state);
    let second = describe_state(&state);
    assert_eq!(first, second);
}

#[test]
fn test_out_of_domain_tag_never_yields_a_default() {
    let err = "pending".parse::<StateTag>().unwrap_err();
    assert_eq!(
        err,
        DispatchError::UnreachableVariant {
            tag: "pending".to_string()
        }
    );
}

#[test]
fn test_ingestion_checks_the_tag_before_the_fields() {
    // An unknown tag with otherwise-valid fields is UnreachableVariant,
    // not InvalidShape.
    let err = DataState::from_json(r#"{"state":"pending","error":"X"}"#).unwrap_err();
    assert!(matches!(err, DispatchError::UnreachableVariant { .. }));
}

#[test]
fn test_ingestion_of_corpus_shapes() {
    let loading = DataState::from_json(r#"{"state":"loading"}"#).unwrap();
    assert_eq!(loading, DataState::Loading);

    let success =
        DataState::from_json(r#"{"state":"success","data":{"title":"TypeScript"}}"#).unwrap();
    assert_eq!(describe_state(&success), "Title: TypeScript");
}

#[test]
fn test_serde_rejects_unknown_state_tag() {
    let parsed: Result<DataState, _> = serde_json::from_str(r#"{"state":"pending"}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_mistyped_field_is_invalid_shape() {
    let err = DataState::from_json(r#"{"state":"failed","error":42}"#).unwrap_err();
    assert!(matches!(err, DispatchError::InvalidShape { .. }));
}

#[test]
fn test_outcome_dispatch() {
    assert_eq!(outcome_message(Outcome::Success), "Operation was successful");
    assert_eq!(outcome_message(Outcome::Error), "An error occurred");
    let err = "pending".parse::<Outcome>().unwrap_err();
    assert!(matches!(err, DispatchError::UnreachableVariant { .. }));
}
