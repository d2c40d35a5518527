use super::{resolve_include, LoaderOptions, MAX_INCLUDE_DEPTH, MAX_NAME_LEN};
use crate::combination::Combination;
use crate::keyboard::Keyboard;
use crate::types::{KeyboardType, SLOT_COUNT};
use crate::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Which container element the parser is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    None,
    Name,
    Map,
    Combination,
}

/// Parse state shared by a root layout file and everything it includes.
pub(super) struct LoadContext<'a> {
    options: &'a LoaderOptions,
    keyboard: Option<Keyboard>,
    container: Container,
    slot: usize,
    save_name: bool,
    path_stack: Vec<PathBuf>,
}

impl<'a> LoadContext<'a> {
    pub(super) fn new(options: &'a LoaderOptions) -> Self {
        Self {
            options,
            keyboard: None,
            container: Container::None,
            slot: 0,
            save_name: false,
            path_stack: Vec::with_capacity(MAX_INCLUDE_DEPTH),
        }
    }

    /// Take the finished keyboard, sorting any combination table whose
    /// closing tag was never reached.
    pub(super) fn finish(self, root: &Path) -> Result<Keyboard> {
        let mut keyboard = self
            .keyboard
            .ok_or_else(|| Error::malformed(root, "no <hangul-keyboard> element"))?;
        for slot in 0..SLOT_COUNT {
            if let Some(table) = keyboard.combination_mut(slot) {
                table.finalize();
            }
        }
        Ok(keyboard)
    }

    pub(super) fn parse_file(&mut self, path: &Path) -> Result<()> {
        if self.path_stack.len() >= MAX_INCLUDE_DEPTH {
            log::warn!(
                "Include depth limit ({}) reached, skipping {}",
                MAX_INCLUDE_DEPTH,
                path.display()
            );
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => Error::malformed(path, "file is not valid UTF-8"),
            _ => Error::UnreadableFile {
                path: path.to_path_buf(),
                source,
            },
        })?;

        self.path_stack.push(path.to_path_buf());
        let result = self.parse_content(&content, path);
        self.path_stack.pop();
        result
    }

    fn parse_content(&mut self, content: &str, path: &Path) -> Result<()> {
        let mut reader = Reader::from_str(content);
        reader.trim_text(true);

        let mut depth = 0usize;
        let mut seen_element = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    seen_element = true;
                    self.on_element_start(&e, path)?;
                }
                Ok(Event::Empty(e)) => {
                    seen_element = true;
                    self.on_element_start(&e, path)?;
                    self.on_element_end(e.name().as_ref());
                }
                Ok(Event::End(e)) => {
                    depth = depth.saturating_sub(1);
                    self.on_element_end(e.name().as_ref());
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|err| Error::malformed(path, err.to_string()))?;
                    self.on_text(&text);
                }
                Ok(Event::CData(e)) => {
                    let text = String::from_utf8_lossy(&e);
                    self.on_text(&text);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    return Err(Error::malformed(
                        path,
                        format!("at byte {}: {}", reader.buffer_position(), err),
                    ))
                }
            }
        }

        if !seen_element {
            return Err(Error::malformed(path, "no element found"));
        }
        if depth != 0 {
            return Err(Error::malformed(path, "unexpected end of file"));
        }
        Ok(())
    }

    fn on_element_start(&mut self, e: &BytesStart<'_>, path: &Path) -> Result<()> {
        match e.name().as_ref() {
            b"hangul-keyboard" => self.start_keyboard(e, path),
            b"name" => {
                if self.keyboard.is_none() {
                    return Ok(());
                }
                match attribute(e, "xml:lang", path)? {
                    None => self.save_name = true,
                    Some(lang) => {
                        if self.options.locale.starts_with(lang.as_str()) {
                            self.save_name = true;
                        }
                    }
                }
                self.container = Container::Name;
                Ok(())
            }
            b"map" => {
                if self.keyboard.is_none() {
                    return Ok(());
                }
                let slot = uint_attribute(e, "id", path)? as usize;
                if slot < SLOT_COUNT {
                    self.slot = slot;
                    self.container = Container::Map;
                } else {
                    log::debug!("{}: ignoring map with slot {}", path.display(), slot);
                    self.container = Container::None;
                }
                Ok(())
            }
            b"combination" => {
                let Some(keyboard) = self.keyboard.as_mut() else {
                    return Ok(());
                };
                let slot = uint_attribute(e, "id", path)? as usize;
                if slot < SLOT_COUNT {
                    keyboard.replace_combination(slot, Some(Combination::new()));
                    self.slot = slot;
                    self.container = Container::Combination;
                } else {
                    log::debug!("{}: ignoring combination with slot {}", path.display(), slot);
                    self.container = Container::None;
                }
                Ok(())
            }
            b"item" => self.add_item(e, path),
            b"include" => {
                let Some(file) = attribute(e, "file", path)? else {
                    return Ok(());
                };
                let target = resolve_include(path, &file);
                if let Err(err) = self.parse_file(&target) {
                    log::warn!("Skipping include {}: {}", target.display(), err);
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn start_keyboard(&mut self, e: &BytesStart<'_>, path: &Path) -> Result<()> {
        let id = attribute(e, "id", path)?
            .ok_or_else(|| Error::malformed(path, "<hangul-keyboard> has no id"))?;
        let type_name = attribute(e, "type", path)?
            .ok_or_else(|| Error::malformed(path, "<hangul-keyboard> has no type"))?;
        let kind: KeyboardType = type_name
            .parse()
            .map_err(|message: String| Error::malformed(path, message))?;

        let mut keyboard = Keyboard::new();
        keyboard.set_id(id);
        keyboard.set_type(kind);

        if let Some(previous) = self.keyboard.replace(keyboard) {
            log::debug!(
                "{}: discarding partially built keyboard '{}'",
                path.display(),
                previous.id().unwrap_or_default()
            );
        }
        self.container = Container::None;
        self.slot = 0;
        self.save_name = false;
        Ok(())
    }

    fn add_item(&mut self, e: &BytesStart<'_>, path: &Path) -> Result<()> {
        let Some(keyboard) = self.keyboard.as_mut() else {
            return Ok(());
        };

        match self.container {
            Container::Map => {
                let key = uint_attribute(e, "key", path)?;
                let value = uint_attribute(e, "value", path)?;
                if key as usize >= crate::types::KEY_TABLE_SIZE {
                    log::debug!("{}: ignoring item for key {}", path.display(), key);
                }
                keyboard.set_mapping(self.slot, key, value);
            }
            Container::Combination => {
                let first = uint_attribute(e, "first", path)?;
                let second = uint_attribute(e, "second", path)?;
                let result = uint_attribute(e, "result", path)?;
                if let Some(table) = keyboard.combination_mut(self.slot) {
                    table.insert(first, second, result)?;
                }
            }
            Container::None | Container::Name => {}
        }
        Ok(())
    }

    fn on_element_end(&mut self, name: &[u8]) {
        let Some(keyboard) = self.keyboard.as_mut() else {
            return;
        };

        match name {
            b"name" => {
                self.container = Container::None;
                self.save_name = false;
            }
            b"map" => {
                self.slot = 0;
                self.container = Container::None;
            }
            b"combination" => {
                if let Some(table) = keyboard.combination_mut(self.slot) {
                    table.finalize();
                }
                self.slot = 0;
                self.container = Container::None;
            }
            _ => {}
        }
    }

    fn on_text(&mut self, text: &str) {
        if self.container != Container::Name || !self.save_name {
            return;
        }
        if let Some(keyboard) = self.keyboard.as_mut() {
            keyboard.set_name(truncate_name(text));
        }
    }
}

fn attribute(e: &BytesStart<'_>, name: &str, path: &Path) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| Error::malformed(path, err.to_string()))?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|err| Error::malformed(path, err.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Read a numeric attribute. A missing attribute reads as 0.
fn uint_attribute(e: &BytesStart<'_>, name: &str, path: &Path) -> Result<u32> {
    match attribute(e, name, path)? {
        None => Ok(0),
        Some(text) => parse_uint(&text).ok_or_else(|| {
            Error::malformed(path, format!("attribute {}=\"{}\" is not a number", name, text))
        }),
    }
}

/// Parse decimal, `0x` hexadecimal or leading-zero octal.
pub(crate) fn parse_uint(text: &str) -> Option<u32> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16).ok()
    } else if text.len() > 1 && text.starts_with('0') {
        u32::from_str_radix(&text[1..], 8).ok()
    } else {
        text.parse().ok()
    }
}

fn truncate_name(text: &str) -> &str {
    if text.len() <= MAX_NAME_LEN {
        return text;
    }
    let mut end = MAX_NAME_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
