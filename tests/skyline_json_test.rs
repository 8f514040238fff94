//! Skyline output is plain data an external renderer can read as JSON.

use tui_gorillas::core::{CharacterPlacer, Skyline, SkylineGenerator};

#[test]
fn skyline_serializes_with_expected_fields() {
    let sky = SkylineGenerator::with_seed(7).generate(1000, 800, 10).unwrap();
    let v = serde_json::to_value(&sky).unwrap();
    assert_eq!(v["canvas_width"], 1000);
    assert_eq!(v["building_width"], 100);
    let b0 = &v["buildings"][0];
    assert!(b0["height"].is_u64());
    assert_eq!(b0["fill_color"]["a"], 255);
    assert!(b0["windows"].is_array());
    if let Some(w) = b0["windows"].get(0) {
        assert_eq!(w["height"], 20);
    }
}

#[test]
fn skyline_json_round_trips() {
    let sky = SkylineGenerator::with_seed(8).generate(1024, 768, 10).unwrap();
    let json = serde_json::to_string(&sky).unwrap();
    let back: Skyline = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sky);
}

#[test]
fn characters_serialize_with_world_coordinates() {
    let (a, _) = CharacterPlacer::with_seed(1)
        .place(&[300; 10], 1000, 800)
        .unwrap();
    let v = serde_json::to_value(a).unwrap();
    assert_eq!(v["y"], 465);
    assert_eq!(v["x"], a.building_index as i64 * 100);
}
