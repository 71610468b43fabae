//! Scalar/sequence greeting semantics and the shape-directed boundary.

use tagmatch::{greet, greet_all, greet_input, DispatchError, Input};

#[test]
fn test_single_name() {
    assert_eq!(greet("Mario"), "Hello, Mario!");
}

#[test]
fn test_sequence_preserves_order_and_length() {
    let input = ["Mario", "Luigi"];
    let greetings = greet_all(input);
    assert_eq!(greetings.len(), input.len());
    assert_eq!(greetings, vec!["Hello, Mario!", "Hello, Luigi!"]);
}

#[test]
fn test_sequence_is_the_elementwise_image_of_the_scalar() {
    let names = ["Mario", "Luigi", "Peach"];
    let via_sequence = greet_all(names);
    let via_scalar: Vec<String> = names.iter().map(|n| greet(n)).collect();
    assert_eq!(via_sequence, via_scalar);
}

#[test]
fn test_boundary_text_in_text_out() {
    let out = greet_input(&Input::from("Mario")).unwrap();
    assert_eq!(out, Input::from("Hello, Mario!"));
}

#[test]
fn test_boundary_list_in_list_out() {
    let out = greet_input(&Input::from_json(r#"["Mario","Luigi"]"#).unwrap()).unwrap();
    assert_eq!(
        out,
        Input::List(vec![
            Input::from("Hello, Mario!"),
            Input::from("Hello, Luigi!")
        ])
    );
}

#[test]
fn test_boundary_number_is_invalid_shape() {
    let err = greet_input(&Input::Number(7.0)).unwrap_err();
    assert!(matches!(err, DispatchError::InvalidShape { .. }));
}

#[test]
fn test_boundary_mixed_list_returns_no_partial_result() {
    let input = Input::List(vec![
        Input::from("Mario"),
        Input::from(false),
        Input::from("Luigi"),
    ]);
    let result = greet_input(&input);
    assert_eq!(
        result,
        Err(DispatchError::InvalidShape {
            expected: "a list of text".to_string(),
            found: "flag".to_string(),
        })
    );
}

#[test]
fn test_boundary_is_idempotent() {
    let input = Input::from("Mario");
    assert_eq!(greet_input(&input), greet_input(&input));
}
