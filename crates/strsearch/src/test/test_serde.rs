// Serialization of match results and configuration
use crate::*;

#[test]
fn test_match_to_json() {
    let m = str_find(b"ab12", b"()(%d+)", 1).unwrap().unwrap();
    let json = serde_json::to_value(&m).unwrap();
    assert_eq!(json["start"], 2);
    assert_eq!(json["end"], 4);
    assert_eq!(json["captures"][0]["Position"], 3);

    let back: Match = serde_json::from_value(json).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_config_from_json() {
    let config: MatchConfig =
        serde_json::from_str(r#"{"max_captures": 8, "max_depth": 50, "max_result_len": 1024}"#).unwrap();
    assert_eq!(config, MatchConfig::default().with_max_captures(8).with_max_depth(50).with_max_result_len(1024));
}
