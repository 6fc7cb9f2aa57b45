use super::*;
use rstest::rstest;

#[rstest]
#[case("en", "en")]
#[case("EN_us", "en-US")]
#[case("de-CH", "de-CH")]
#[case("zh-hant-tw", "zh-Hant-TW")]
#[case("es-419", "es-419")]
#[case("sl-rozaj-biske", "sl-rozaj-biske")]
#[case("de-DE-1901", "de-DE-1901")]
fn test_resolve(#[case] id: &str, #[case] expected: &str) {
    assert_eq!(TagLocales.resolve(id).unwrap().id(), expected);
}

#[rstest]
#[case("")]
#[case("english")]
#[case("e1")]
#[case("en-")]
#[case("en-US-x")]
fn test_resolve_invalid(#[case] id: &str) {
    let err = TagLocales.resolve(id).unwrap_err();
    assert_eq!(err.id, id);
}

#[test]
fn test_handle_fields() {
    let handle = TagLocales.resolve("sr_Latn_RS").unwrap();
    assert_eq!(handle.language, "sr");
    assert_eq!(handle.script.as_deref(), Some("Latn"));
    assert_eq!(handle.region.as_deref(), Some("RS"));
    assert!(handle.variants.is_empty());
}

#[test]
fn test_error_message() {
    let err = (&TagLocales).resolve("en-US-x").unwrap_err();
    assert_eq!(err.to_string(), "cannot resolve locale \"en-US-x\": invalid subtag \"x\"");
}
