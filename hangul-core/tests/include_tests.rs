mod common;

use common::{keyboard_xml, write_file};
use hangul_core::loader::{KeyboardLoader, LoaderOptions, MAX_INCLUDE_DEPTH};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn loader() -> KeyboardLoader {
    KeyboardLoader::new(LoaderOptions::with_locale("C"))
}

fn fragment(body: &str) -> String {
    format!("<hangul-keyboard-include>\n{}\n</hangul-keyboard-include>\n", body)
}

#[test]
fn test_relative_include_from_subdirectory() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "layouts/common/vowels.xml",
        &fragment(r#"<map id="0"><item key="0x6b" value="0x1161"/></map>"#),
    );
    write_file(
        dir.path(),
        "layouts/common/compound.xml",
        &fragment(
            r#"<combination id="0"><item first="0x1169" second="0x1161" result="0x116a"/></combination>"#,
        ),
    );
    let root = write_file(
        dir.path(),
        "layouts/root.xml",
        &keyboard_xml(
            "rel",
            "jamo",
            r#"<include file="common/vowels.xml"/>
<map id="0"><item key="0x72" value="0x1100"/></map>
<include file="common/compound.xml"/>"#,
        ),
    );

    let keyboard = loader().load(&root).unwrap();
    assert_eq!(keyboard.map_to_char(0, 0x6b), 0x1161);
    assert_eq!(keyboard.map_to_char(0, 0x72), 0x1100);
    assert_eq!(keyboard.combine(0, 0x1169, 0x1161), 0x116a);
}

#[test]
fn test_nested_include_is_relative_to_including_file() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "a/b/leaf.xml",
        &fragment(r#"<map id="2"><item key="1" value="0x11a8"/></map>"#),
    );
    write_file(dir.path(), "a/middle.xml", &fragment(r#"<include file="b/leaf.xml"/>"#));
    let root = write_file(
        dir.path(),
        "root.xml",
        &keyboard_xml("nested", "jaso", r#"<include file="a/middle.xml"/>"#),
    );

    let keyboard = loader().load(&root).unwrap();
    assert_eq!(keyboard.map_to_char(2, 1), 0x11a8);
}

#[test]
fn test_absolute_include() {
    let shared = TempDir::new().unwrap();
    let common = write_file(
        shared.path(),
        "common.xml",
        &fragment(r#"<map id="1"><item key="0x51" value="0x1108"/></map>"#),
    );

    let dir = TempDir::new().unwrap();
    let body = format!(r#"<include file="{}"/>"#, common.display());
    let root = write_file(dir.path(), "abs.xml", &keyboard_xml("abs", "jamo", &body));

    let keyboard = loader().load(&root).unwrap();
    assert_eq!(keyboard.map_to_char(1, 0x51), 0x1108);
}

#[test]
fn test_missing_include_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = write_file(
        dir.path(),
        "root.xml",
        &keyboard_xml(
            "missing",
            "jamo",
            r#"<include file="nowhere.xml"/>
<map id="0"><item key="1" value="0x1100"/></map>"#,
        ),
    );

    let keyboard = loader().load(&root).unwrap();
    assert_eq!(keyboard.id(), Some("missing"));
    assert_eq!(keyboard.map_to_char(0, 1), 0x1100);
}

#[test]
fn test_broken_include_does_not_fail_root() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "broken.xml",
        r#"<hangul-keyboard-include><map id="0"><item key="1" value="2"/></hangul-keyboard-include>"#,
    );
    let root = write_file(
        dir.path(),
        "root.xml",
        &keyboard_xml(
            "contained",
            "jamo",
            r#"<include file="broken.xml"/>
<map id="1"><item key="5" value="0x1161"/></map>"#,
        ),
    );

    let keyboard = loader().load(&root).unwrap();
    assert_eq!(keyboard.id(), Some("contained"));
    assert_eq!(keyboard.map_to_char(1, 5), 0x1161);
}

#[test]
fn test_include_chain_is_cut_at_depth_limit() {
    let dir = TempDir::new().unwrap();
    let levels = MAX_INCLUDE_DEPTH + 1;
    for level in 1..=levels {
        let body = format!(
            r#"<map id="0"><item key="{}" value="{}"/></map>
<include file="level{}.xml"/>"#,
            level,
            0x1000 + level,
            level + 1
        );
        write_file(dir.path(), &format!("level{}.xml", level), &fragment(&body));
    }
    let root = write_file(
        dir.path(),
        "level0.xml",
        &keyboard_xml("deep", "jamo", r#"<include file="level1.xml"/>"#),
    );

    let keyboard = loader().load(&root).unwrap();
    assert_eq!(keyboard.id(), Some("deep"));

    // The root file takes one place on the include stack.
    let deepest = (MAX_INCLUDE_DEPTH - 1) as u32;
    assert_eq!(keyboard.map_to_char(0, 1), 0x1001);
    assert_eq!(keyboard.map_to_char(0, deepest), 0x1000 + deepest);
    assert_eq!(keyboard.map_to_char(0, deepest + 1), 0);
}

#[test]
fn test_self_include_terminates() {
    let dir = TempDir::new().unwrap();
    let root = write_file(
        dir.path(),
        "loop.xml",
        &keyboard_xml(
            "loop",
            "jamo",
            r#"<map id="0"><item key="1" value="0x1100"/></map>
<include file="loop.xml"/>"#,
        ),
    );

    let keyboard = loader().load(&root).unwrap();
    assert_eq!(keyboard.id(), Some("loop"));
    assert_eq!(keyboard.map_to_char(0, 1), 0x1100);
}

#[test]
fn test_included_name_uses_locale() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "names.xml",
        &fragment(r#"<name>Shared</name><name xml:lang="ko">공유</name>"#),
    );
    let root = write_file(
        dir.path(),
        "root.xml",
        &keyboard_xml("names", "jamo", r#"<include file="names.xml"/>"#),
    );

    let korean = KeyboardLoader::new(LoaderOptions::with_locale("ko_KR.UTF-8"))
        .load(&root)
        .unwrap();
    assert_eq!(korean.name(), Some("공유"));
    assert_eq!(loader().load(&root).unwrap().name(), Some("Shared"));
}

#[test]
fn test_include_with_invalid_utf8_is_skipped() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("euc-kr.xml"), [0x3c, 0xc7, 0xd1, 0x3e]).unwrap();
    let root = write_file(
        dir.path(),
        "root.xml",
        &keyboard_xml(
            "encoding",
            "jamo",
            r#"<include file="euc-kr.xml"/>
<map id="0"><item key="1" value="0x1100"/></map>"#,
        ),
    );

    let keyboard = loader().load(&root).unwrap();
    assert_eq!(keyboard.map_to_char(0, 1), 0x1100);
}
