use quill_core::stmt::SetQuantifier;

#[test]
fn parses_all_and_distinct() {
    assert_eq!("ALL".parse::<SetQuantifier>().unwrap(), SetQuantifier::All);
    assert_eq!(
        "DISTINCT".parse::<SetQuantifier>().unwrap(),
        SetQuantifier::Distinct
    );
}

#[test]
fn parsing_ignores_case_and_whitespace() {
    assert_eq!("all".parse::<SetQuantifier>().unwrap(), SetQuantifier::All);
    assert_eq!(
        " Distinct ".parse::<SetQuantifier>().unwrap(),
        SetQuantifier::Distinct
    );
}

#[test]
fn malformed_token_is_construction_error() {
    for token in ["", "ALLL", "UNIQUE", "true"] {
        let err = token.parse::<SetQuantifier>().unwrap_err();
        assert!(err.is_construction(), "token={token:?}");
    }

    let err = "some".parse::<SetQuantifier>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "construction failed: expected ALL or DISTINCT, found `some`"
    );
}

#[test]
fn absent_token_is_distinct() {
    assert_eq!(
        SetQuantifier::from_token(None).unwrap(),
        SetQuantifier::Distinct
    );
    assert_eq!(
        SetQuantifier::from_token(Some("ALL")).unwrap(),
        SetQuantifier::All
    );
    assert!(SetQuantifier::from_token(Some("maybe")).is_err());
}

#[test]
fn from_bool() {
    assert_eq!(SetQuantifier::from(true), SetQuantifier::All);
    assert_eq!(SetQuantifier::from(false), SetQuantifier::Distinct);
    assert!(!SetQuantifier::from(true).eliminates_duplicates());
    assert!(SetQuantifier::from(false).eliminates_duplicates());
}

#[test]
fn display() {
    assert_eq!(SetQuantifier::All.to_string(), "ALL");
    assert_eq!(SetQuantifier::Distinct.to_string(), "DISTINCT");
}
