mod common;

use common::{keyboard_xml, write_file};
use hangul_core::loader::{KeyboardLoader, LoaderOptions};
use hangul_core::{Error, Keyboard, KeyboardType};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn loader(locale: &str) -> KeyboardLoader {
    KeyboardLoader::new(LoaderOptions::with_locale(locale))
}

#[test]
fn test_map_item_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "simple.xml",
        &keyboard_xml(
            "simple",
            "jamo",
            r#"<map id="0"><item key="41" value="0x3131"/></map>"#,
        ),
    );

    let keyboard = Keyboard::from_file(&path).expect("Failed to load simple.xml");
    assert_eq!(keyboard.id(), Some("simple"));
    assert_eq!(keyboard.keyboard_type(), KeyboardType::Jamo);
    assert!(!keyboard.is_static());
    assert_eq!(keyboard.map_to_char(0, 41), 0x3131);
    assert_eq!(keyboard.map_to_char(0, 5), 0);
    assert_eq!(keyboard.map_to_char(9, 0), 0);
    assert_eq!(keyboard.combine(9, 1, 2), 0);
}

#[test]
fn test_all_type_names() {
    let dir = TempDir::new().unwrap();
    let cases = [
        ("jamo", KeyboardType::Jamo),
        ("jamo-yet", KeyboardType::JamoYet),
        ("jaso", KeyboardType::Jaso),
        ("jaso-yet", KeyboardType::JasoYet),
        ("romaja", KeyboardType::Romaja),
    ];
    for (name, kind) in cases {
        let path = write_file(dir.path(), &format!("{}.xml", name), &keyboard_xml(name, name, ""));
        let keyboard = loader("C").load(&path).unwrap();
        assert_eq!(keyboard.keyboard_type(), kind);
    }
}

#[test]
fn test_combination_items_are_sorted_on_close() {
    let dir = TempDir::new().unwrap();
    let body = r#"
  <combination id="1">
    <item first="0x11af" second="0x11a8" result="0x11b0"/>
    <item first="0x1169" second="0x1161" result="0x116a"/>
    <item first="0x1100" second="0x1100" result="0x1101"/>
  </combination>"#;
    let path = write_file(dir.path(), "comb.xml", &keyboard_xml("comb", "jaso", body));

    let keyboard = loader("C").load(&path).unwrap();
    assert_eq!(keyboard.combine(1, 0x1169, 0x1161), 0x116a);
    assert_eq!(keyboard.combine(1, 0x11af, 0x11a8), 0x11b0);
    assert_eq!(keyboard.combine(1, 0x1100, 0x1100), 0x1101);
    assert_eq!(keyboard.combine(1, 0x1161, 0x1169), 0);
    assert_eq!(keyboard.combine(0, 0x1169, 0x1161), 0);

    let table = keyboard.combination(1).unwrap();
    assert!(!table.is_static());
    let keys: Vec<u32> = table.items().iter().map(|item| item.key).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn test_repeated_combination_element_replaces_table() {
    let dir = TempDir::new().unwrap();
    let body = r#"
  <combination id="0"><item first="1" second="2" result="3"/></combination>
  <combination id="0"><item first="4" second="5" result="6"/></combination>"#;
    let path = write_file(dir.path(), "replace.xml", &keyboard_xml("replace", "jamo", body));

    let keyboard = loader("C").load(&path).unwrap();
    assert_eq!(keyboard.combine(0, 1, 2), 0);
    assert_eq!(keyboard.combine(0, 4, 5), 6);
    assert_eq!(keyboard.combination(0).unwrap().len(), 1);
}

#[test]
fn test_name_follows_locale() {
    let dir = TempDir::new().unwrap();
    let body = r#"
  <name>Dubeolsik Test</name>
  <name xml:lang="ko">두벌식 시험</name>
  <name xml:lang="ja">ドゥボルシク</name>"#;
    let path = write_file(dir.path(), "named.xml", &keyboard_xml("named", "jamo", body));

    let korean = loader("ko_KR.UTF-8").load(&path).unwrap();
    assert_eq!(korean.name(), Some("두벌식 시험"));

    let english = loader("en_US.UTF-8").load(&path).unwrap();
    assert_eq!(english.name(), Some("Dubeolsik Test"));

    let posix = loader("C").load(&path).unwrap();
    assert_eq!(posix.name(), Some("Dubeolsik Test"));
}

#[test]
fn test_name_entities_are_unescaped() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "escaped.xml",
        &keyboard_xml("escaped", "jamo", "<name>Sebeolsik &amp; Friends</name>"),
    );
    let keyboard = loader("C").load(&path).unwrap();
    assert_eq!(keyboard.name(), Some("Sebeolsik & Friends"));
}

#[test]
fn test_out_of_range_slots_and_keys_are_ignored() {
    let dir = TempDir::new().unwrap();
    let body = r#"
  <map id="7"><item key="1" value="0x1100"/></map>
  <map id="0"><item key="200" value="0x1100"/><item key="2" value="0x1102"/></map>
  <combination id="4"><item first="1" second="2" result="3"/></combination>
  <item key="3" value="0x1103"/>"#;
    let path = write_file(dir.path(), "range.xml", &keyboard_xml("range", "jamo", body));

    let keyboard = loader("C").load(&path).unwrap();
    assert_eq!(keyboard.map_to_char(0, 1), 0);
    assert_eq!(keyboard.map_to_char(0, 2), 0x1102);
    assert_eq!(keyboard.map_to_char(0, 3), 0);
    for slot in 0..4 {
        assert!(keyboard.combination(slot).is_none());
    }
}

#[test]
fn test_numeric_attribute_forms() {
    let dir = TempDir::new().unwrap();
    let body = r#"
  <map id="0x1">
    <item key="65" value="4353"/>
    <item key="0x42" value="0x1101"/>
    <item key="0103" value="0x1102"/>
  </map>"#;
    let path = write_file(dir.path(), "numbers.xml", &keyboard_xml("numbers", "jamo", body));

    let keyboard = loader("C").load(&path).unwrap();
    assert_eq!(keyboard.map_to_char(1, 65), 4353);
    assert_eq!(keyboard.map_to_char(1, 0x42), 0x1101);
    assert_eq!(keyboard.map_to_char(1, 0o103), 0x1102);
}

#[test]
fn test_bad_number_is_malformed() {
    let dir = TempDir::new().unwrap();
    let body = r#"<map id="0"><item key="r" value="0x1100"/></map>"#;
    let path = write_file(dir.path(), "nan.xml", &keyboard_xml("nan", "jamo", body));

    let result = loader("C").load(&path);
    assert!(matches!(result, Err(Error::MalformedInput { .. })));
}

#[test]
fn test_unknown_or_missing_type_is_malformed() {
    let dir = TempDir::new().unwrap();
    let unknown = write_file(dir.path(), "unknown.xml", &keyboard_xml("u", "sebeol", ""));
    assert!(matches!(
        loader("C").load(&unknown),
        Err(Error::MalformedInput { .. })
    ));

    let missing = write_file(
        dir.path(),
        "missing.xml",
        r#"<hangul-keyboard id="m"><name>M</name></hangul-keyboard>"#,
    );
    assert!(matches!(
        loader("C").load(&missing),
        Err(Error::MalformedInput { .. })
    ));

    let no_id = write_file(
        dir.path(),
        "no_id.xml",
        r#"<hangul-keyboard type="jamo"></hangul-keyboard>"#,
    );
    assert!(matches!(
        loader("C").load(&no_id),
        Err(Error::MalformedInput { .. })
    ));
}

#[test]
fn test_syntax_errors_fail_root_file() {
    let dir = TempDir::new().unwrap();
    let mismatched = write_file(
        dir.path(),
        "mismatched.xml",
        r#"<hangul-keyboard id="x" type="jamo"><map id="0"></hangul-keyboard>"#,
    );
    assert!(matches!(
        loader("C").load(&mismatched),
        Err(Error::MalformedInput { .. })
    ));

    let truncated = write_file(
        dir.path(),
        "truncated.xml",
        r#"<hangul-keyboard id="x" type="jamo"><map id="0">"#,
    );
    assert!(matches!(
        loader("C").load(&truncated),
        Err(Error::MalformedInput { .. })
    ));

    let empty = write_file(dir.path(), "empty.xml", "");
    assert!(matches!(
        loader("C").load(&empty),
        Err(Error::MalformedInput { .. })
    ));
}

#[test]
fn test_file_without_keyboard_element() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "fragment.xml",
        r#"<hangul-keyboard-include><map id="0"><item key="1" value="2"/></map></hangul-keyboard-include>"#,
    );
    assert!(matches!(
        loader("C").load(&path),
        Err(Error::MalformedInput { .. })
    ));
}

#[test]
fn test_unreadable_root() {
    let dir = TempDir::new().unwrap();
    let result = loader("C").load(&dir.path().join("absent.xml"));
    assert!(matches!(result, Err(Error::UnreadableFile { .. })));
}

#[test]
fn test_second_keyboard_element_starts_over() {
    let dir = TempDir::new().unwrap();
    let content = r#"<layouts>
  <hangul-keyboard id="first" type="jamo">
    <map id="0"><item key="1" value="0x1100"/></map>
  </hangul-keyboard>
  <hangul-keyboard id="second" type="romaja">
    <map id="0"><item key="2" value="0x1102"/></map>
  </hangul-keyboard>
</layouts>"#;
    let path = write_file(dir.path(), "two.xml", content);

    let keyboard = loader("C").load(&path).unwrap();
    assert_eq!(keyboard.id(), Some("second"));
    assert_eq!(keyboard.keyboard_type(), KeyboardType::Romaja);
    assert_eq!(keyboard.map_to_char(0, 1), 0);
    assert_eq!(keyboard.map_to_char(0, 2), 0x1102);
}

#[test]
fn test_invalid_utf8_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.xml");
    let mut bytes = br#"<hangul-keyboard id="latin1" type="jamo"><name>"#.to_vec();
    bytes.extend_from_slice(&[0xc7, 0xd1, 0xb1, 0xdb]);
    bytes.extend_from_slice(b"</name></hangul-keyboard>");
    std::fs::write(&path, bytes).unwrap();

    let result = loader("C").load(&path);
    assert!(matches!(result, Err(Error::MalformedInput { .. })));
}
