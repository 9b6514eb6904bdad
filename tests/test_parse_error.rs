use xmlfactory::{Error, XmlData};

fn parse(xml: &str) -> Result<(), Error> {
    let mut data = XmlData::new();
    data.parse(xml).map(|_| ())
}

#[test]
fn test_mismatched_end_tag() {
    let err = parse("<a></b>").unwrap_err();
    match err {
        Error::MismatchedEndTag { expected, found } => {
            assert_eq!(expected, "a");
            assert_eq!(found, "b");
        }
        _ => panic!("unexpected error {:?}", err),
    }
}

#[test]
fn test_mismatched_end_tag_display() {
    let err = parse("<a><b></a></b>").unwrap_err();
    assert_eq!(err.to_string(), "End tag </a> does not match start tag <b>");
}

#[test]
fn test_unclosed_element() {
    let err = parse("<a><b></b>").unwrap_err();
    assert!(matches!(err, Error::UnclosedElement(_) | Error::Parser(_)));
}

#[test]
fn test_tokenizer_error() {
    let err = parse("<a b=></a>").unwrap_err();
    assert!(matches!(err, Error::Parser(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_invalid_entity() {
    let err = parse("<a>&unknown;</a>").unwrap_err();
    assert!(matches!(err, Error::InvalidEntity(ref entity) if entity == "unknown"));
}

#[test]
fn test_invalid_character_reference() {
    let err = parse("<a>&#xD800;</a>").unwrap_err();
    assert!(matches!(err, Error::InvalidEntity(_)));
}

#[test]
fn test_invalid_entity_in_attribute() {
    let err = parse(r#"<a b="&unknown;"/>"#).unwrap_err();
    assert!(matches!(err, Error::InvalidEntity(_) | Error::Parser(_)));
}

#[test]
fn test_no_element() {
    assert!(parse("<!-- nothing here -->").is_err());
}
