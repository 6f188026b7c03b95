use super::*;

#[test]
fn origin_is_zero_zero() {
    assert_eq!(Position::ORIGIN, Position::new(0.0, 0.0));
    assert_eq!(Position::default(), Position::ORIGIN);
}

#[test]
fn serializes_as_pair_array() {
    let json = serde_json::to_string(&Position::new(5.0, 7.5)).unwrap();
    assert_eq!(json, "[5.0,7.5]");
}

#[test]
fn deserializes_integer_pair() {
    let p: Position = serde_json::from_str("[1, 2]").unwrap();
    assert!((p.x - 1.0).abs() < f64::EPSILON);
    assert!((p.y - 2.0).abs() < f64::EPSILON);
}

#[test]
fn rejects_wrong_arity() {
    assert!(serde_json::from_str::<Position>("[1]").is_err());
    assert!(serde_json::from_str::<Position>("[1, 2, 3]").is_err());
}
