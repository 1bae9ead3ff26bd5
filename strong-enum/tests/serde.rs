use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};

use strong_enum::strong_enum;

strong_enum! {
    enum Level: u8 {
        Low = 1,
        High = 2,
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Message {
    level: Level,
    text: String,
}

#[test]
fn serialize_as_scalar() {
    let msg = Message {
        level: High.into(),
        text: "hi".into(),
    };
    assert_eq!(
        r#"{"level":2,"text":"hi"}"#,
        serde_json::to_string(&msg).unwrap()
    );
}

#[rstest]
#[case::low("1", Level::from(Low))]
#[case::high("2", Level::from(High))]
fn deserialize_valid(#[case] json: &str, #[case] expected: Level) {
    let actual: Level = serde_json::from_str(json).unwrap();
    assert_eq!(expected, actual);
}

#[rstest]
#[case::zero("0")]
#[case::past_end("3")]
#[case::max("255")]
fn deserialize_invalid(#[case] json: &str) {
    let err = serde_json::from_str::<Level>(json).unwrap_err();
    assert!(
        err.to_string().contains("invalid enum value"),
        "unexpected error {err}"
    );
}

#[test_log::test]
fn deserialize_nested_invalid() {
    let err = serde_json::from_str::<Message>(r#"{"level":5,"text":"x"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid enum value 5"));
}

#[test]
fn round_trip() {
    let msg = Message {
        level: Low.into(),
        text: "round".into(),
    };
    let json = serde_json::to_string(&msg).unwrap();
    assert_eq!(msg, serde_json::from_str(&json).unwrap());
}
