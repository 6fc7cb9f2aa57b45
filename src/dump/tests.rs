use super::*;
use crate::locale::{LocaleLookup, TagLocales};
use message_dsl::parse;

fn catalog() -> Catalog {
    let messages = parse("", b"hi:\n\tHello ${name}\n[[shop]]\ncost:\n\t${p:money.currency{EUR}}\n")
        .into_result()
        .unwrap();
    Catalog::new(TagLocales.resolve("de_at").unwrap(), messages)
}

fn dump_string(format: DumpFormat) -> String {
    let mut buf = Vec::new();
    dump(&catalog(), format, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_dump_none() {
    assert_eq!(dump_string(DumpFormat::None), "");
}

#[test]
fn test_dump_text() {
    assert_eq!(
        dump_string(DumpFormat::Text),
        "# locale: de-AT\nhi: Hello ${name}\n[shop] cost: ${p:money.currency{EUR}}\n"
    );
}

#[test]
fn test_dump_json() {
    let value: json::Value = json::from_str(&dump_string(DumpFormat::Json)).unwrap();
    assert_eq!(value["locale"]["language"], "de");
    assert_eq!(value["locale"]["region"], "AT");
    assert_eq!(value["messages"][0]["key"], "hi");
    assert_eq!(value["messages"][0]["text"][0], "Hello ");
    assert_eq!(value["messages"][0]["replacements"][0]["kind"], "string");
    assert_eq!(value["messages"][0]["replacements"][0]["details"]["type"], "empty");
    assert_eq!(value["messages"][1]["replacements"][0]["details"]["type"], "money");
    assert_eq!(value["messages"][1]["replacements"][0]["details"]["currency"], "EUR");
}
