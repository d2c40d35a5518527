//! Helpers behind the `hangul-kbd` command

use anyhow::{bail, Context, Result};
use hangul_core::types::{CodePoint, KEY_TABLE_SIZE, SLOT_COUNT};
use hangul_core::Keyboard;
use std::fmt::Write;

/// Parse a key code or code point: decimal, `0x` hex or `U+` hex.
pub fn parse_number(text: &str) -> Result<u32> {
    let text = text.trim();
    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix("U+"))
        .or_else(|| text.strip_prefix("u+"));
    match hex {
        Some(digits) => u32::from_str_radix(digits, 16)
            .with_context(|| format!("'{}' is not a hexadecimal number", text)),
        None => text
            .parse()
            .with_context(|| format!("'{}' is not a number", text)),
    }
}

/// Parse a slot index, rejecting anything outside the keyboard's slots.
pub fn parse_slot(text: &str) -> Result<usize> {
    let slot = parse_number(text)? as usize;
    if slot >= SLOT_COUNT {
        bail!("slot {} is out of range (0..{})", slot, SLOT_COUNT);
    }
    Ok(slot)
}

/// `U+1100 ᄀ`, or just `U+XXXX` when the value is not printable.
pub fn describe_code_point(code: CodePoint) -> String {
    match char::from_u32(code) {
        Some(c) if !c.is_control() && c != ' ' => format!("U+{:04X} {}", code, c),
        _ => format!("U+{:04X}", code),
    }
}

fn describe_key(key: usize) -> String {
    match u8::try_from(key).ok().map(char::from) {
        Some(c) if c.is_ascii_graphic() => format!("0x{:02x} '{}'", key, c),
        _ => format!("0x{:02x}", key),
    }
}

/// Human readable listing of everything a keyboard defines.
pub fn dump_keyboard(keyboard: &Keyboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id:     {}", keyboard.id().unwrap_or("-"));
    let _ = writeln!(out, "name:   {}", keyboard.name().unwrap_or("-"));
    let _ = writeln!(out, "type:   {}", keyboard.keyboard_type());
    let _ = writeln!(
        out,
        "static: {}",
        if keyboard.is_static() { "yes" } else { "no" }
    );

    for slot in 0..SLOT_COUNT {
        let Some(table) = keyboard.mapping(slot) else {
            continue;
        };
        let _ = writeln!(out, "\nmap {}:", slot);
        for key in 0..KEY_TABLE_SIZE {
            let value = table.get(key);
            if value != 0 {
                let _ = writeln!(out, "  {:<10} -> {}", describe_key(key), describe_code_point(value));
            }
        }
    }

    for slot in 0..SLOT_COUNT {
        let Some(table) = keyboard.combination(slot) else {
            continue;
        };
        let _ = writeln!(out, "\ncombination {} ({} entries):", slot, table.len());
        for item in table.items() {
            let _ = writeln!(
                out,
                "  {} + {} -> {}",
                describe_code_point(item.first()),
                describe_code_point(item.second()),
                describe_code_point(item.code)
            );
        }
    }
    out
}
