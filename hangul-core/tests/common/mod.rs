#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes `content` to `dir/name`, creating parent directories
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Wraps `body` in a `hangul-keyboard` root element
pub fn keyboard_xml(id: &str, kind: &str, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <hangul-keyboard id=\"{}\" type=\"{}\">\n{}\n</hangul-keyboard>\n",
        id, kind, body
    )
}

/// Writes a layout file with a name and a single slot 0 mapping
pub fn write_simple_layout(dir: &Path, file: &str, id: &str, name: &str) -> PathBuf {
    let body = format!(
        "<name>{}</name>\n<map id=\"0\"><item key=\"0x72\" value=\"0x1100\"/></map>",
        name
    );
    write_file(dir, file, &keyboard_xml(id, "jamo", &body))
}
