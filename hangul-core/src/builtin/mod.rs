//! Layouts compiled into the library
//!
//! These keyboards live for the whole process and are never modified. The
//! registry lists them before any loaded layout, in declaration order.

mod tables;

use crate::keyboard::Keyboard;
use crate::types::KeyboardType;

pub use tables::{AHN_COMBINATION, DEFAULT_COMBINATION, FULL_COMBINATION, ROMAJA_COMBINATION};

static BUILTIN_KEYBOARDS: [Keyboard; 9] = [
    Keyboard::builtin(
        "2",
        "Dubeolsik",
        KeyboardType::Jamo,
        &tables::DUBEOLSIK,
        &tables::DEFAULT_COMBINATION,
    ),
    Keyboard::builtin(
        "2y",
        "Dubeolsik Yetgeul",
        KeyboardType::JamoYet,
        &tables::DUBEOLSIK_YETGEUL,
        &tables::FULL_COMBINATION,
    ),
    Keyboard::builtin(
        "39",
        "Sebeolsik 390",
        KeyboardType::Jaso,
        &tables::SEBEOLSIK_390,
        &tables::DEFAULT_COMBINATION,
    ),
    Keyboard::builtin(
        "3f",
        "Sebeolsik Final",
        KeyboardType::Jaso,
        &tables::SEBEOLSIK_FINAL,
        &tables::DEFAULT_COMBINATION,
    ),
    Keyboard::builtin(
        "3s",
        "Sebeolsik Noshift",
        KeyboardType::Jaso,
        &tables::SEBEOLSIK_NOSHIFT,
        &tables::DEFAULT_COMBINATION,
    ),
    Keyboard::builtin(
        "3y",
        "Sebeolsik Yetgeul",
        KeyboardType::JasoYet,
        &tables::SEBEOLSIK_YETGEUL,
        &tables::FULL_COMBINATION,
    ),
    Keyboard::builtin(
        "32",
        "Sebeolsik Dubeol Layout",
        KeyboardType::Jaso,
        &tables::SEBEOLSIK_DUBEOL,
        &tables::DEFAULT_COMBINATION,
    ),
    Keyboard::builtin(
        "ro",
        "Romaja",
        KeyboardType::Romaja,
        &tables::ROMAJA,
        &tables::ROMAJA_COMBINATION,
    ),
    Keyboard::builtin(
        "ahn",
        "Ahnmatae",
        KeyboardType::Jaso,
        &tables::AHNMATAE,
        &tables::AHN_COMBINATION,
    ),
];

/// All built-in keyboards in their fixed order.
pub fn keyboards() -> &'static [Keyboard] {
    &BUILTIN_KEYBOARDS
}

/// Find a built-in keyboard, searching from the last declaration backwards.
pub fn find(id: &str) -> Option<&'static Keyboard> {
    BUILTIN_KEYBOARDS
        .iter()
        .rev()
        .find(|keyboard| keyboard.id() == Some(id))
}
