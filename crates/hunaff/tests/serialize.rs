//! Serialized form of a compiled configuration.
//!
//! Run: cargo test -p hunaff --features serde --test serialize

#![cfg(feature = "serde")]

use hunaff::AffixReader;
use serde_json::Value;

#[test]
fn config_serializes_to_json() {
    let compilation = AffixReader::read_lines([
        "SET UTF-8",
        "KEEPCASE K",
        "REP 1",
        "REP ^alot$ a_lot",
        "PFX A Y 1",
        "PFX A 0 re .",
    ]);
    let json = serde_json::to_value(&compilation.config).unwrap();

    assert_eq!(json["encoding"], Value::from("UTF-8"));
    assert_eq!(json["flags"]["keep_case"], Value::from(u32::from('K')));
    assert_eq!(json["replacements"][0]["position"], Value::from("Isolated"));
    assert_eq!(json["prefixes"][0]["entries"][0]["affix"], Value::from("re"));
    assert!(json["prefixes"][0]["entries"][0].get("kind").is_none());
    assert_eq!(json["break_points"].as_array().map(Vec::len), Some(3));
}
