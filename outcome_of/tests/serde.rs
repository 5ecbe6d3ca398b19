#![cfg(feature = "serde")]

use outcome_of::{err, ok, Outcome};

#[test]
fn externally_tagged_json() {
    let value: Outcome<u8, String> = ok(7);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"Ok":7}"#);

    let failure: Outcome<u8, String> = err("boom".into());
    assert_eq!(serde_json::to_string(&failure).unwrap(), r#"{"Err":"boom"}"#);
}

#[test]
fn deserializes_either_variant() {
    let value: Outcome<Vec<u8>, String> =
        serde_json::from_str(r#"{"Ok":[1,2]}"#).unwrap();
    assert_eq!(value, Outcome::Ok(vec![1, 2]));

    let failure: Outcome<Vec<u8>, String> =
        serde_json::from_str(r#"{"Err":"nope"}"#).unwrap();
    assert_eq!(failure.err().as_deref(), Some("nope"));
}
