use super::*;

use crate::error::MatrizError;

#[test]
fn test_parse_default_delimiters() {
    let mat = TextCodec::default()
        .parse("0 1 2;3 4 5")
        .expect("well-formed text");
    assert_eq!(mat.size(), (2, 3));
    assert_eq!(mat.get(0, 0), Ok(0.0));
    assert_eq!(mat.get(1, 2), Ok(5.0));
}

#[test]
fn test_parse_empty_input_fails() {
    assert!(matches!(
        TextCodec::default().parse(""),
        Err(MatrizError::Parse { .. })
    ));
}

#[test]
fn test_parse_ragged_rows_fail() {
    assert!(matches!(
        TextCodec::default().parse("0 1;0 1 2"),
        Err(MatrizError::Parse { .. })
    ));
    assert!(TextCodec::default().parse("0 1 2;0 1").is_err());
}

#[test]
fn test_parse_invalid_element_fails() {
    assert!(matches!(
        TextCodec::default().parse("0 x;1 2"),
        Err(MatrizError::Parse { .. })
    ));
}

#[test]
fn test_parse_ignores_trailing_delimiters() {
    let mat = TextCodec::default().parse("20;2;-2;").expect("trailing row delimiter");
    assert_eq!(mat.size(), (3, 1));
    assert_eq!(mat.get(2, 0), Ok(-2.0));
}

#[test]
fn test_parse_negative_and_fractional() {
    let mat = TextCodec::default()
        .parse("-0.25 1.5;3.75 -2")
        .expect("well-formed text");
    assert_eq!(mat.get(0, 0), Ok(-0.25));
    assert_eq!(mat.get(1, 1), Ok(-2.0));
}

#[test]
fn test_custom_delimiters() {
    let codec = TextCodec::new(',', '|');
    let mat = codec.parse("1,2|3,4").expect("well-formed text");
    assert_eq!(mat.size(), (2, 2));
    assert_eq!(codec.render(&mat), "1,2|3,4");
}

#[test]
fn test_render_round_trip() {
    let codec = TextCodec::default();
    let mat = codec.parse("0.5 -1;42 0.125").expect("well-formed text");
    let rendered = codec.render(&mat);
    let reparsed = codec.parse(&rendered).expect("rendered text parses back");
    assert!(reparsed.approx_eq(&mat, 0.0));
}
