use super::*;
use maplit::btreemap;
use rstest::rstest;
use strum::IntoEnumIterator;

fn text(s: &str) -> Message {
    Message {
        text: vec![s.into()],
        ..Default::default()
    }
}

#[test]
fn test_push_text() {
    let mut message = Message::new("", "k");
    message.push_text("a");
    message.push_text("b");
    message.push_replacement("x", ReplacementKind::String, ReplacementDetails::Empty);
    message.push_text("c");
    message.push_text("d");
    assert_eq!(message.text, ["ab", "cd"]);
    assert_eq!(message.replacements[0].text_pos, 1);
}

#[test]
fn test_trim_trailing() {
    let mut message = Message::new("", "k");
    message.push_text("hello  ");
    message.trim_trailing();
    assert_eq!(message.text, ["hello"]);

    let mut message = Message::new("", "k");
    message.push_text("a ");
    message.push_replacement("x", ReplacementKind::String, ReplacementDetails::Empty);
    message.push_text(" ");
    message.trim_trailing();
    assert_eq!(message.text, ["a "]);

    let mut message = Message::new("", "k");
    message.push_text("a ");
    message.push_replacement("x", ReplacementKind::String, ReplacementDetails::Empty);
    message.trim_trailing();
    assert_eq!(message.text, ["a "]);
}

#[test]
fn test_render_adjacent_replacements() {
    let mut message = Message::new("", "k");
    message.push_text("[");
    message.push_replacement("a", ReplacementKind::String, ReplacementDetails::Empty);
    message.push_replacement("b", ReplacementKind::String, ReplacementDetails::Empty);
    message.push_text("]");
    assert_eq!(message.render(|r| r.key.to_uppercase()), "[AB]");
}

#[test]
fn test_render_without_text() {
    let mut message = Message::new("", "k");
    message.push_replacement("a", ReplacementKind::Number, ReplacementDetails::Empty);
    assert_eq!(message.render(|_| "42"), "42");
    assert_eq!(Message::default().render(|_| "x"), "");
}

#[test]
fn test_display_plural() {
    let replacement = Replacement {
        key: "n".into(),
        text_pos: 0,
        kind: ReplacementKind::Plural,
        details: ReplacementDetails::Plural {
            plural_type: PluralType::Ordinal,
            variants: btreemap! {
                PluralCategory::Other => text("th"),
                PluralCategory::One => text("st"),
            },
            custom: btreemap! { 0 => text("none") },
        },
    };
    assert_eq!(
        replacement.to_string(),
        "${n:plural.ordinal.[0]{none}.one{st}.other{th}}"
    );
}

#[test]
fn test_display_select_and_money() {
    let replacement = Replacement {
        key: "g".into(),
        text_pos: 0,
        kind: ReplacementKind::Select,
        details: ReplacementDetails::Select {
            cases: btreemap! { "f".to_string() => text("her"), "m".to_string() => text("his") },
            fallback: "m".into(),
        },
    };
    assert_eq!(replacement.to_string(), "${g:select.[f]{her}.[m]{his}.default{m}}");

    let replacement = Replacement {
        key: "price".into(),
        text_pos: 0,
        kind: ReplacementKind::Money,
        details: ReplacementDetails::Money { currency: "EUR".into() },
    };
    assert_eq!(replacement.to_string(), "${price:money.currency{EUR}}");
}

#[rstest]
#[case("string", ReplacementKind::String)]
#[case("NUMBER", ReplacementKind::Number)]
#[case("Percent", ReplacementKind::Percent)]
#[case("money", ReplacementKind::Money)]
#[case("plural", ReplacementKind::Plural)]
#[case("sElEcT", ReplacementKind::Select)]
fn test_replacement_kind_parse(#[case] input: &str, #[case] expected: ReplacementKind) {
    assert_eq!(input.parse::<ReplacementKind>().unwrap(), expected);
}

#[test]
fn test_plural_category_names() {
    let names: Vec<_> = PluralCategory::iter().map(|c| c.to_string()).collect();
    assert_eq!(names, ["zero", "one", "two", "few", "many", "other"]);
    assert!("dozen".parse::<PluralCategory>().is_err());
}
