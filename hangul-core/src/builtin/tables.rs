//! Compile-time mapping and combination tables for the built-in layouts

use crate::combination::CombinationItem;
use crate::types::{CodePoint, KEY_TABLE_SIZE};

/// Build a key table where printable ASCII maps to itself, then apply each
/// group of overrides in order.
const fn ascii_table(groups: &[&[(u8, CodePoint)]]) -> [CodePoint; KEY_TABLE_SIZE] {
    let mut table = [0; KEY_TABLE_SIZE];
    let mut key = 0x21;
    while key < 0x7f {
        table[key] = key as CodePoint;
        key += 1;
    }

    let mut g = 0;
    while g < groups.len() {
        let group = groups[g];
        let mut i = 0;
        while i < group.len() {
            let (key, value) = group[i];
            table[key as usize] = value;
            i += 1;
        }
        g += 1;
    }
    table
}

// Unshifted keys shared by both layouts: consonants give initial jamo,
// vowels give medial jamo.
const BASE_LOWER: &[(u8, CodePoint)] = &[
    (b'q', 0x1107), // ㅂ
    (b'w', 0x110c), // ㅈ
    (b'e', 0x1103), // ㄷ
    (b'r', 0x1100), // ㄱ
    (b't', 0x1109), // ㅅ
    (b'y', 0x116d), // ㅛ
    (b'u', 0x1167), // ㅕ
    (b'i', 0x1163), // ㅑ
    (b'o', 0x1162), // ㅐ
    (b'p', 0x1166), // ㅔ
    (b'a', 0x1106), // ㅁ
    (b's', 0x1102), // ㄴ
    (b'd', 0x110b), // ㅇ
    (b'f', 0x1105), // ㄹ
    (b'g', 0x1112), // ㅎ
    (b'h', 0x1169), // ㅗ
    (b'j', 0x1165), // ㅓ
    (b'k', 0x1161), // ㅏ
    (b'l', 0x1175), // ㅣ
    (b'z', 0x110f), // ㅋ
    (b'x', 0x1110), // ㅌ
    (b'c', 0x110e), // ㅊ
    (b'v', 0x1111), // ㅍ
    (b'b', 0x1172), // ㅠ
    (b'n', 0x116e), // ㅜ
    (b'm', 0x1173), // ㅡ
];

const SHIFTED_VOWELS: &[(u8, CodePoint)] = &[
    (b'Y', 0x116d),
    (b'U', 0x1167),
    (b'I', 0x1163),
    (b'O', 0x1164), // ㅒ
    (b'P', 0x1168), // ㅖ
    (b'H', 0x1169),
    (b'J', 0x1165),
    (b'K', 0x1161),
    (b'L', 0x1175),
    (b'B', 0x1172),
    (b'N', 0x116e),
    (b'M', 0x1173),
];

// Dubeolsik: shift doubles the tense consonants, other consonants repeat
// their unshifted jamo.
const DUBEOL_SHIFTED_CONSONANTS: &[(u8, CodePoint)] = &[
    (b'Q', 0x1108), // ㅃ
    (b'W', 0x110d), // ㅉ
    (b'E', 0x1104), // ㄸ
    (b'R', 0x1101), // ㄲ
    (b'T', 0x110a), // ㅆ
    (b'A', 0x1106),
    (b'S', 0x1102),
    (b'D', 0x110b),
    (b'F', 0x1105),
    (b'G', 0x1112),
    (b'Z', 0x110f),
    (b'X', 0x1110),
    (b'C', 0x110e),
    (b'V', 0x1111),
];

// Sebeolsik on the two-set positions: shift turns a consonant into its
// final jamo.
const SEBEOL_SHIFTED_CONSONANTS: &[(u8, CodePoint)] = &[
    (b'Q', 0x11b8), // ㅂ
    (b'W', 0x11bd), // ㅈ
    (b'E', 0x11ae), // ㄷ
    (b'R', 0x11a8), // ㄱ
    (b'T', 0x11ba), // ㅅ
    (b'A', 0x11b7), // ㅁ
    (b'S', 0x11ab), // ㄴ
    (b'D', 0x11bc), // ㅇ
    (b'F', 0x11af), // ㄹ
    (b'G', 0x11c2), // ㅎ
    (b'Z', 0x11bf), // ㅋ
    (b'X', 0x11c0), // ㅌ
    (b'C', 0x11be), // ㅊ
    (b'V', 0x11c1), // ㅍ
];

// Archaic jamo on the shifted two-set keys.
const DUBEOL_YET_SHIFTED: &[(u8, CodePoint)] = &[
    (b'A', 0x1140), // ㅿ
    (b'D', 0x114c), // ㆁ
    (b'G', 0x1159), // ㆆ
    (b'K', 0x119e), // ㆍ
    (b'L', 0x11a1), // ㆎ
];

// Unshifted three-set keys shared by the 390, Final and Noshift layouts:
// right hand gives initials, left hand gives finals, the middle gives
// vowels.
const SEBEOL_LOWER: &[(u8, CodePoint)] = &[
    (b'1', 0x11c2), // ㅎ final
    (b'2', 0x11bb), // ㅆ final
    (b'3', 0x11b8), // ㅂ final
    (b'4', 0x116d), // ㅛ
    (b'5', 0x1172), // ㅠ
    (b'6', 0x1163), // ㅑ
    (b'7', 0x1168), // ㅖ
    (b'8', 0x1174), // ㅢ
    (b'9', 0x116e), // ㅜ
    (b'0', 0x110f), // ㅋ
    (b'q', 0x11ba), // ㅅ final
    (b'w', 0x11af), // ㄹ final
    (b'e', 0x1167), // ㅕ
    (b'r', 0x1162), // ㅐ
    (b't', 0x1165), // ㅓ
    (b'y', 0x1105), // ㄹ
    (b'u', 0x1103), // ㄷ
    (b'i', 0x1106), // ㅁ
    (b'o', 0x110e), // ㅊ
    (b'p', 0x1111), // ㅍ
    (b'a', 0x11bc), // ㅇ final
    (b's', 0x11ab), // ㄴ final
    (b'd', 0x1175), // ㅣ
    (b'f', 0x1161), // ㅏ
    (b'g', 0x1173), // ㅡ
    (b'h', 0x1102), // ㄴ
    (b'j', 0x110b), // ㅇ
    (b'k', 0x1100), // ㄱ
    (b'l', 0x110c), // ㅈ
    (b';', 0x1107), // ㅂ
    (b'\'', 0x1110), // ㅌ
    (b'z', 0x11b7), // ㅁ final
    (b'x', 0x11a8), // ㄱ final
    (b'c', 0x1166), // ㅔ
    (b'v', 0x1169), // ㅗ
    (b'b', 0x116e), // ㅜ
    (b'n', 0x1109), // ㅅ
    (b'm', 0x1112), // ㅎ
    (b'/', 0x1169), // ㅗ
];

const SEBEOL_390_SHIFTED: &[(u8, CodePoint)] = &[
    (b'!', 0x11bd), // ㅈ final
    (b'<', b'2' as CodePoint),
    (b'>', b'3' as CodePoint),
    (b'Q', 0x11c1), // ㅍ final
    (b'W', 0x11c0), // ㅌ final
    (b'E', 0x11bf), // ㅋ final
    (b'R', 0x1164), // ㅒ
    (b'T', b';' as CodePoint),
    (b'Y', b'<' as CodePoint),
    (b'U', b'7' as CodePoint),
    (b'I', b'8' as CodePoint),
    (b'O', b'9' as CodePoint),
    (b'P', b'>' as CodePoint),
    (b'A', 0x11ae), // ㄷ final
    (b'S', 0x11ad), // ㄶ
    (b'D', 0x11b0), // ㄺ
    (b'F', 0x11a9), // ㄲ final
    (b'G', b'/' as CodePoint),
    (b'H', b'\'' as CodePoint),
    (b'J', b'4' as CodePoint),
    (b'K', b'5' as CodePoint),
    (b'L', b'6' as CodePoint),
    (b'Z', 0x11be), // ㅊ final
    (b'X', 0x11b9), // ㅄ
    (b'C', 0x11b1), // ㄻ
    (b'V', 0x11b6), // ㅀ
    (b'B', b'!' as CodePoint),
    (b'N', b'0' as CodePoint),
    (b'M', b'1' as CodePoint),
];

const SEBEOL_FINAL_SHIFTED: &[(u8, CodePoint)] = &[
    (b'!', 0x11a9), // ㄲ final
    (b'@', 0x11b0), // ㄺ
    (b'#', 0x11bd), // ㅈ final
    (b'$', 0x11b5), // ㄿ
    (b'%', 0x11b4), // ㄾ
    (b'^', b'=' as CodePoint),
    (b'&', 0x201c), // left double quotation mark
    (b'*', 0x201d), // right double quotation mark
    (b'(', b'\'' as CodePoint),
    (b')', b'~' as CodePoint),
    (b'-', b')' as CodePoint),
    (b'_', b';' as CodePoint),
    (b'=', b'>' as CodePoint),
    (b'Q', 0x11c1), // ㅍ final
    (b'W', 0x11c0), // ㅌ final
    (b'E', 0x11ac), // ㄵ
    (b'R', 0x11b6), // ㅀ
    (b'T', 0x11b3), // ㄽ
    (b'Y', b'5' as CodePoint),
    (b'U', b'6' as CodePoint),
    (b'I', b'7' as CodePoint),
    (b'O', b'8' as CodePoint),
    (b'P', b'9' as CodePoint),
    (b'[', b'(' as CodePoint),
    (b'{', b'%' as CodePoint),
    (b']', b'<' as CodePoint),
    (b'}', b'/' as CodePoint),
    (b'\\', b':' as CodePoint),
    (b'|', b'\\' as CodePoint),
    (b'A', 0x11ae), // ㄷ final
    (b'S', 0x11ad), // ㄶ
    (b'D', 0x11b2), // ㄼ
    (b'F', 0x11b1), // ㄻ
    (b'G', 0x1164), // ㅒ
    (b'H', b'0' as CodePoint),
    (b'J', b'1' as CodePoint),
    (b'K', b'2' as CodePoint),
    (b'L', b'3' as CodePoint),
    (b':', b'4' as CodePoint),
    (b'"', 0x00b7), // middle dot
    (b'Z', 0x11be), // ㅊ final
    (b'X', 0x11b9), // ㅄ
    (b'C', 0x11bf), // ㅋ final
    (b'V', 0x11aa), // ㄳ
    (b'B', b'?' as CodePoint),
    (b'N', b'-' as CodePoint),
    (b'M', b'"' as CodePoint),
    (b'<', b',' as CodePoint),
    (b'>', b'.' as CodePoint),
    (b'?', b'!' as CodePoint),
    (b'`', b'*' as CodePoint),
    (b'~', 0x203b), // reference mark
];

// Noshift: the shifted letter keys repeat their unshifted jamo.
const SEBEOL_NOSHIFT_UPPER: &[(u8, CodePoint)] = &[
    (b'Q', 0x11ba),
    (b'W', 0x11af),
    (b'E', 0x1167),
    (b'R', 0x1162),
    (b'T', 0x1165),
    (b'Y', 0x1105),
    (b'U', 0x1103),
    (b'I', 0x1106),
    (b'O', 0x110e),
    (b'P', 0x1111),
    (b'A', 0x11bc),
    (b'S', 0x11ab),
    (b'D', 0x1175),
    (b'F', 0x1161),
    (b'G', 0x1173),
    (b'H', 0x1102),
    (b'J', 0x110b),
    (b'K', 0x1100),
    (b'L', 0x110c),
    (b'Z', 0x11b7),
    (b'X', 0x11a8),
    (b'C', 0x1166),
    (b'V', 0x1169),
    (b'B', 0x116e),
    (b'N', 0x1109),
    (b'M', 0x1112),
];

// Archaic jamo in place of the Final layout's shifted digits.
const SEBEOL_YET_SHIFTED: &[(u8, CodePoint)] = &[
    (b'H', 0x119e), // ㆍ
    (b'J', 0x1140), // ㅿ
    (b'K', 0x114c), // ㆁ
    (b'L', 0x1159), // ㆆ
    (b'M', 0x11f9), // ㆆ final
    (b'N', 0x11eb), // ㅿ final
    (b'Y', 0x11f0), // ㆁ final
];

// Romaja: every letter gives the jamo it most often spells, regardless of
// case. Multi-letter spellings come from the romaja combination table.
const ROMAJA_LETTERS: &[(u8, CodePoint)] = &[
    (b'a', 0x1161),
    (b'b', 0x1107),
    (b'c', 0x110e),
    (b'd', 0x1103),
    (b'e', 0x1166),
    (b'f', 0x1111),
    (b'g', 0x1100),
    (b'h', 0x1112),
    (b'i', 0x1175),
    (b'j', 0x110c),
    (b'k', 0x110f),
    (b'l', 0x1105),
    (b'm', 0x1106),
    (b'n', 0x1102),
    (b'o', 0x1169),
    (b'p', 0x1111),
    (b'q', 0x1100),
    (b'r', 0x1105),
    (b's', 0x1109),
    (b't', 0x1110),
    (b'u', 0x116e),
    (b'v', 0x1107),
    (b'w', 0x116e),
    (b'x', 0x1109),
    (b'y', 0x1175),
    (b'z', 0x110c),
];

// Ahnmatae: left home row gives initials, left top row gives finals,
// right home row gives vowels. Chords are joined by the Ahnmatae
// combination table.
const AHN_KEYS: &[(u8, CodePoint)] = &[
    (b'a', 0x1109), // ㅅ
    (b's', 0x1107), // ㅂ
    (b'd', 0x1103), // ㄷ
    (b'f', 0x1100), // ㄱ
    (b'g', 0x110b), // ㅇ
    (b'q', 0x11ba), // ㅅ final
    (b'w', 0x11b8), // ㅂ final
    (b'e', 0x11ae), // ㄷ final
    (b'r', 0x11a8), // ㄱ final
    (b't', 0x11bc), // ㅇ final
    (b'h', 0x1175), // ㅣ
    (b'j', 0x1161), // ㅏ
    (b'k', 0x1165), // ㅓ
    (b'l', 0x1169), // ㅗ
    (b';', 0x116e), // ㅜ
    (b'n', 0x1173), // ㅡ
];

/// Uppercase a letter override group at compile time.
const fn uppercase<const N: usize>(group: &[(u8, CodePoint)]) -> [(u8, CodePoint); N] {
    let mut out = [(0u8, 0 as CodePoint); N];
    let mut i = 0;
    while i < N {
        let (key, value) = group[i];
        out[i] = (key.to_ascii_uppercase(), value);
        i += 1;
    }
    out
}

const ROMAJA_UPPER: [(u8, CodePoint); 26] = uppercase::<26>(ROMAJA_LETTERS);

pub static DUBEOLSIK: [CodePoint; KEY_TABLE_SIZE] =
    ascii_table(&[BASE_LOWER, SHIFTED_VOWELS, DUBEOL_SHIFTED_CONSONANTS]);

pub static DUBEOLSIK_YETGEUL: [CodePoint; KEY_TABLE_SIZE] = ascii_table(&[
    BASE_LOWER,
    SHIFTED_VOWELS,
    DUBEOL_SHIFTED_CONSONANTS,
    DUBEOL_YET_SHIFTED,
]);

pub static SEBEOLSIK_390: [CodePoint; KEY_TABLE_SIZE] =
    ascii_table(&[SEBEOL_LOWER, SEBEOL_390_SHIFTED]);

pub static SEBEOLSIK_FINAL: [CodePoint; KEY_TABLE_SIZE] =
    ascii_table(&[SEBEOL_LOWER, SEBEOL_FINAL_SHIFTED]);

pub static SEBEOLSIK_NOSHIFT: [CodePoint; KEY_TABLE_SIZE] =
    ascii_table(&[SEBEOL_LOWER, SEBEOL_NOSHIFT_UPPER]);

pub static SEBEOLSIK_YETGEUL: [CodePoint; KEY_TABLE_SIZE] =
    ascii_table(&[SEBEOL_LOWER, SEBEOL_FINAL_SHIFTED, SEBEOL_YET_SHIFTED]);

pub static SEBEOLSIK_DUBEOL: [CodePoint; KEY_TABLE_SIZE] =
    ascii_table(&[BASE_LOWER, SHIFTED_VOWELS, SEBEOL_SHIFTED_CONSONANTS]);

pub static ROMAJA: [CodePoint; KEY_TABLE_SIZE] = ascii_table(&[ROMAJA_LETTERS, &ROMAJA_UPPER]);

pub static AHNMATAE: [CodePoint; KEY_TABLE_SIZE] = ascii_table(&[AHN_KEYS]);

/// Double initials, compound medials and compound finals. Sorted by key.
pub static DEFAULT_COMBINATION: [CombinationItem; 25] = [
    CombinationItem::new(0x1100, 0x1100, 0x1101), // ㄱ + ㄱ = ㄲ
    CombinationItem::new(0x1103, 0x1103, 0x1104), // ㄷ + ㄷ = ㄸ
    CombinationItem::new(0x1107, 0x1107, 0x1108), // ㅂ + ㅂ = ㅃ
    CombinationItem::new(0x1109, 0x1109, 0x110a), // ㅅ + ㅅ = ㅆ
    CombinationItem::new(0x110c, 0x110c, 0x110d), // ㅈ + ㅈ = ㅉ
    CombinationItem::new(0x1169, 0x1161, 0x116a), // ㅗ + ㅏ = ㅘ
    CombinationItem::new(0x1169, 0x1162, 0x116b), // ㅗ + ㅐ = ㅙ
    CombinationItem::new(0x1169, 0x1175, 0x116c), // ㅗ + ㅣ = ㅚ
    CombinationItem::new(0x116e, 0x1165, 0x116f), // ㅜ + ㅓ = ㅝ
    CombinationItem::new(0x116e, 0x1166, 0x1170), // ㅜ + ㅔ = ㅞ
    CombinationItem::new(0x116e, 0x1175, 0x1171), // ㅜ + ㅣ = ㅟ
    CombinationItem::new(0x1173, 0x1175, 0x1174), // ㅡ + ㅣ = ㅢ
    CombinationItem::new(0x11a8, 0x11a8, 0x11a9), // ㄱ + ㄱ = ㄲ
    CombinationItem::new(0x11a8, 0x11ba, 0x11aa), // ㄱ + ㅅ = ㄳ
    CombinationItem::new(0x11ab, 0x11bd, 0x11ac), // ㄴ + ㅈ = ㄵ
    CombinationItem::new(0x11ab, 0x11c2, 0x11ad), // ㄴ + ㅎ = ㄶ
    CombinationItem::new(0x11af, 0x11a8, 0x11b0), // ㄹ + ㄱ = ㄺ
    CombinationItem::new(0x11af, 0x11b7, 0x11b1), // ㄹ + ㅁ = ㄻ
    CombinationItem::new(0x11af, 0x11b8, 0x11b2), // ㄹ + ㅂ = ㄼ
    CombinationItem::new(0x11af, 0x11ba, 0x11b3), // ㄹ + ㅅ = ㄽ
    CombinationItem::new(0x11af, 0x11c0, 0x11b4), // ㄹ + ㅌ = ㄾ
    CombinationItem::new(0x11af, 0x11c1, 0x11b5), // ㄹ + ㅍ = ㄿ
    CombinationItem::new(0x11af, 0x11c2, 0x11b6), // ㄹ + ㅎ = ㅀ
    CombinationItem::new(0x11b8, 0x11ba, 0x11b9), // ㅂ + ㅅ = ㅄ
    CombinationItem::new(0x11ba, 0x11ba, 0x11bb), // ㅅ + ㅅ = ㅆ
];

/// The default table plus archaic initials, medials and finals. Sorted by key.
pub static FULL_COMBINATION: [CombinationItem; 49] = [
    CombinationItem::new(0x1100, 0x1100, 0x1101), // ㄱ + ㄱ = ㄲ
    CombinationItem::new(0x1102, 0x1102, 0x1114), // ㄴ + ㄴ = ㅥ
    CombinationItem::new(0x1103, 0x1103, 0x1104), // ㄷ + ㄷ = ㄸ
    CombinationItem::new(0x1105, 0x110b, 0x111b), // ㄹ + ㅇ = ㄹㅇ
    CombinationItem::new(0x1106, 0x110b, 0x111d), // ㅁ + ㅇ = ㅱ
    CombinationItem::new(0x1107, 0x1100, 0x111e), // ㅂ + ㄱ = ㅲ
    CombinationItem::new(0x1107, 0x1103, 0x1120), // ㅂ + ㄷ = ㅳ
    CombinationItem::new(0x1107, 0x1107, 0x1108), // ㅂ + ㅂ = ㅃ
    CombinationItem::new(0x1107, 0x1109, 0x1121), // ㅂ + ㅅ = ㅄ
    CombinationItem::new(0x1107, 0x110b, 0x112b), // ㅂ + ㅇ = ㅸ
    CombinationItem::new(0x1108, 0x110b, 0x112c), // ㅃ + ㅇ = ㅹ
    CombinationItem::new(0x1109, 0x1100, 0x112d), // ㅅ + ㄱ = ㅺ
    CombinationItem::new(0x1109, 0x1103, 0x112f), // ㅅ + ㄷ = ㅼ
    CombinationItem::new(0x1109, 0x1109, 0x110a), // ㅅ + ㅅ = ㅆ
    CombinationItem::new(0x110b, 0x110b, 0x1147), // ㅇ + ㅇ = ㆀ
    CombinationItem::new(0x110c, 0x110c, 0x110d), // ㅈ + ㅈ = ㅉ
    CombinationItem::new(0x1111, 0x110b, 0x1157), // ㅍ + ㅇ = ㆄ
    CombinationItem::new(0x1112, 0x1112, 0x1158), // ㅎ + ㅎ = ㆅ
    CombinationItem::new(0x1169, 0x1161, 0x116a), // ㅗ + ㅏ = ㅘ
    CombinationItem::new(0x1169, 0x1162, 0x116b), // ㅗ + ㅐ = ㅙ
    CombinationItem::new(0x1169, 0x1175, 0x116c), // ㅗ + ㅣ = ㅚ
    CombinationItem::new(0x116d, 0x1175, 0x1188), // ㅛ + ㅣ = ㆇ
    CombinationItem::new(0x116e, 0x1165, 0x116f), // ㅜ + ㅓ = ㅝ
    CombinationItem::new(0x116e, 0x1166, 0x1170), // ㅜ + ㅔ = ㅞ
    CombinationItem::new(0x116e, 0x1175, 0x1171), // ㅜ + ㅣ = ㅟ
    CombinationItem::new(0x1172, 0x1175, 0x1194), // ㅠ + ㅣ = ㆌ
    CombinationItem::new(0x1173, 0x1175, 0x1174), // ㅡ + ㅣ = ㅢ
    CombinationItem::new(0x119e, 0x1175, 0x11a1), // ㆍ + ㅣ = ㆎ
    CombinationItem::new(0x119e, 0x119e, 0x11a2), // ㆍ + ㆍ = ᆢ
    CombinationItem::new(0x11a8, 0x11a8, 0x11a9), // ㄱ + ㄱ = ㄲ
    CombinationItem::new(0x11a8, 0x11af, 0x11c3), // ㄱ + ㄹ = ㄱㄹ
    CombinationItem::new(0x11a8, 0x11ba, 0x11aa), // ㄱ + ㅅ = ㄳ
    CombinationItem::new(0x11ab, 0x11ab, 0x11ff), // ㄴ + ㄴ = ㅥ
    CombinationItem::new(0x11ab, 0x11ae, 0x11c6), // ㄴ + ㄷ = ㅦ
    CombinationItem::new(0x11ab, 0x11bd, 0x11ac), // ㄴ + ㅈ = ㄵ
    CombinationItem::new(0x11ab, 0x11c2, 0x11ad), // ㄴ + ㅎ = ㄶ
    CombinationItem::new(0x11af, 0x11a8, 0x11b0), // ㄹ + ㄱ = ㄺ
    CombinationItem::new(0x11af, 0x11af, 0x11d0), // ㄹ + ㄹ = ㄹㄹ
    CombinationItem::new(0x11af, 0x11b7, 0x11b1), // ㄹ + ㅁ = ㄻ
    CombinationItem::new(0x11af, 0x11b8, 0x11b2), // ㄹ + ㅂ = ㄼ
    CombinationItem::new(0x11af, 0x11ba, 0x11b3), // ㄹ + ㅅ = ㄽ
    CombinationItem::new(0x11af, 0x11c0, 0x11b4), // ㄹ + ㅌ = ㄾ
    CombinationItem::new(0x11af, 0x11c1, 0x11b5), // ㄹ + ㅍ = ㄿ
    CombinationItem::new(0x11af, 0x11c2, 0x11b6), // ㄹ + ㅎ = ㅀ
    CombinationItem::new(0x11b7, 0x11bc, 0x11e2), // ㅁ + ㅇ = ㅱ
    CombinationItem::new(0x11b8, 0x11ba, 0x11b9), // ㅂ + ㅅ = ㅄ
    CombinationItem::new(0x11b8, 0x11bc, 0x11e6), // ㅂ + ㅇ = ㅸ
    CombinationItem::new(0x11ba, 0x11ba, 0x11bb), // ㅅ + ㅅ = ㅆ
    CombinationItem::new(0x11bc, 0x11bc, 0x11ee), // ㅇ + ㅇ = ㆀ
];

/// Latin letter sequences of the romaja layout. Sorted by key.
pub static ROMAJA_COMBINATION: [CombinationItem; 31] = [
    CombinationItem::new(0x1100, 0x1100, 0x1101), // g + g = ㄲ
    CombinationItem::new(0x1102, 0x1100, 0x110b), // n + g = ㅇ
    CombinationItem::new(0x1103, 0x1103, 0x1104), // d + d = ㄸ
    CombinationItem::new(0x1107, 0x1107, 0x1108), // b + b = ㅃ
    CombinationItem::new(0x1109, 0x1109, 0x110a), // s + s = ㅆ
    CombinationItem::new(0x1109, 0x1112, 0x1109), // s + h = ㅅ
    CombinationItem::new(0x110c, 0x110c, 0x110d), // j + j = ㅉ
    CombinationItem::new(0x110e, 0x1112, 0x110e), // c + h = ㅊ
    CombinationItem::new(0x110f, 0x110f, 0x1101), // k + k = ㄲ
    CombinationItem::new(0x1110, 0x1110, 0x1104), // t + t = ㄸ
    CombinationItem::new(0x1111, 0x1111, 0x1108), // p + p = ㅃ
    CombinationItem::new(0x1161, 0x1166, 0x1162), // a + e = ㅐ
    CombinationItem::new(0x1163, 0x1166, 0x1164), // ya + e = ㅒ
    CombinationItem::new(0x1166, 0x1169, 0x1165), // e + o = ㅓ
    CombinationItem::new(0x1166, 0x116e, 0x1173), // e + u = ㅡ
    CombinationItem::new(0x1168, 0x1169, 0x1167), // ye + o = ㅕ
    CombinationItem::new(0x1169, 0x1175, 0x116c), // o + i = ㅚ
    CombinationItem::new(0x116a, 0x1166, 0x116b), // wa + e = ㅙ
    CombinationItem::new(0x116e, 0x1161, 0x116a), // w + a = ㅘ
    CombinationItem::new(0x116e, 0x1162, 0x116b), // w + ae = ㅙ
    CombinationItem::new(0x116e, 0x1165, 0x116f), // w + eo = ㅝ
    CombinationItem::new(0x116e, 0x1166, 0x1170), // w + e = ㅞ
    CombinationItem::new(0x116e, 0x1175, 0x1171), // w + i = ㅟ
    CombinationItem::new(0x1170, 0x1169, 0x116f), // we + o = ㅝ
    CombinationItem::new(0x1173, 0x1175, 0x1174), // eu + i = ㅢ
    CombinationItem::new(0x1175, 0x1161, 0x1163), // y + a = ㅑ
    CombinationItem::new(0x1175, 0x1162, 0x1164), // y + ae = ㅒ
    CombinationItem::new(0x1175, 0x1165, 0x1167), // y + eo = ㅕ
    CombinationItem::new(0x1175, 0x1166, 0x1168), // y + e = ㅖ
    CombinationItem::new(0x1175, 0x1169, 0x116d), // y + o = ㅛ
    CombinationItem::new(0x1175, 0x116e, 0x1172), // y + u = ㅠ
];

/// Chords of the Ahnmatae layout; each pair is accepted in either order. Sorted by key.
pub static AHN_COMBINATION: [CombinationItem; 50] = [
    CombinationItem::new(0x1100, 0x1103, 0x1102), // ㄱ + ㄷ = ㄴ
    CombinationItem::new(0x1100, 0x1107, 0x110e), // ㄱ + ㅂ = ㅊ
    CombinationItem::new(0x1100, 0x1109, 0x110c), // ㄱ + ㅅ = ㅈ
    CombinationItem::new(0x1100, 0x110b, 0x110f), // ㄱ + ㅇ = ㅋ
    CombinationItem::new(0x1103, 0x1100, 0x1102), // ㄷ + ㄱ = ㄴ
    CombinationItem::new(0x1103, 0x1107, 0x1105), // ㄷ + ㅂ = ㄹ
    CombinationItem::new(0x1103, 0x1109, 0x1110), // ㄷ + ㅅ = ㅌ
    CombinationItem::new(0x1107, 0x1100, 0x110e), // ㅂ + ㄱ = ㅊ
    CombinationItem::new(0x1107, 0x1103, 0x1105), // ㅂ + ㄷ = ㄹ
    CombinationItem::new(0x1107, 0x1109, 0x1106), // ㅂ + ㅅ = ㅁ
    CombinationItem::new(0x1107, 0x110b, 0x1111), // ㅂ + ㅇ = ㅍ
    CombinationItem::new(0x1109, 0x1100, 0x110c), // ㅅ + ㄱ = ㅈ
    CombinationItem::new(0x1109, 0x1103, 0x1110), // ㅅ + ㄷ = ㅌ
    CombinationItem::new(0x1109, 0x1107, 0x1106), // ㅅ + ㅂ = ㅁ
    CombinationItem::new(0x1109, 0x110b, 0x1112), // ㅅ + ㅇ = ㅎ
    CombinationItem::new(0x110b, 0x1100, 0x110f), // ㅇ + ㄱ = ㅋ
    CombinationItem::new(0x110b, 0x1107, 0x1111), // ㅇ + ㅂ = ㅍ
    CombinationItem::new(0x110b, 0x1109, 0x1112), // ㅇ + ㅅ = ㅎ
    CombinationItem::new(0x1161, 0x1169, 0x116a), // ㅏ + ㅗ = ㅘ
    CombinationItem::new(0x1161, 0x1175, 0x1162), // ㅏ + ㅣ = ㅐ
    CombinationItem::new(0x1165, 0x116e, 0x116f), // ㅓ + ㅜ = ㅝ
    CombinationItem::new(0x1165, 0x1175, 0x1166), // ㅓ + ㅣ = ㅔ
    CombinationItem::new(0x1169, 0x1161, 0x116a), // ㅗ + ㅏ = ㅘ
    CombinationItem::new(0x1169, 0x1175, 0x116c), // ㅗ + ㅣ = ㅚ
    CombinationItem::new(0x116e, 0x1165, 0x116f), // ㅜ + ㅓ = ㅝ
    CombinationItem::new(0x116e, 0x1175, 0x1171), // ㅜ + ㅣ = ㅟ
    CombinationItem::new(0x1173, 0x1175, 0x1174), // ㅡ + ㅣ = ㅢ
    CombinationItem::new(0x1175, 0x1161, 0x1162), // ㅣ + ㅏ = ㅐ
    CombinationItem::new(0x1175, 0x1165, 0x1166), // ㅣ + ㅓ = ㅔ
    CombinationItem::new(0x1175, 0x1169, 0x116c), // ㅣ + ㅗ = ㅚ
    CombinationItem::new(0x1175, 0x116e, 0x1171), // ㅣ + ㅜ = ㅟ
    CombinationItem::new(0x1175, 0x1173, 0x1174), // ㅣ + ㅡ = ㅢ
    CombinationItem::new(0x11a8, 0x11ae, 0x11ab), // ㄱ + ㄷ = ㄴ
    CombinationItem::new(0x11a8, 0x11b8, 0x11be), // ㄱ + ㅂ = ㅊ
    CombinationItem::new(0x11a8, 0x11ba, 0x11bd), // ㄱ + ㅅ = ㅈ
    CombinationItem::new(0x11a8, 0x11bc, 0x11bf), // ㄱ + ㅇ = ㅋ
    CombinationItem::new(0x11ae, 0x11a8, 0x11ab), // ㄷ + ㄱ = ㄴ
    CombinationItem::new(0x11ae, 0x11b8, 0x11af), // ㄷ + ㅂ = ㄹ
    CombinationItem::new(0x11ae, 0x11ba, 0x11c0), // ㄷ + ㅅ = ㅌ
    CombinationItem::new(0x11b8, 0x11a8, 0x11be), // ㅂ + ㄱ = ㅊ
    CombinationItem::new(0x11b8, 0x11ae, 0x11af), // ㅂ + ㄷ = ㄹ
    CombinationItem::new(0x11b8, 0x11ba, 0x11b7), // ㅂ + ㅅ = ㅁ
    CombinationItem::new(0x11b8, 0x11bc, 0x11c1), // ㅂ + ㅇ = ㅍ
    CombinationItem::new(0x11ba, 0x11a8, 0x11bd), // ㅅ + ㄱ = ㅈ
    CombinationItem::new(0x11ba, 0x11ae, 0x11c0), // ㅅ + ㄷ = ㅌ
    CombinationItem::new(0x11ba, 0x11b8, 0x11b7), // ㅅ + ㅂ = ㅁ
    CombinationItem::new(0x11ba, 0x11bc, 0x11c2), // ㅅ + ㅇ = ㅎ
    CombinationItem::new(0x11bc, 0x11a8, 0x11bf), // ㅇ + ㄱ = ㅋ
    CombinationItem::new(0x11bc, 0x11b8, 0x11c1), // ㅇ + ㅂ = ㅍ
    CombinationItem::new(0x11bc, 0x11ba, 0x11c2), // ㅇ + ㅅ = ㅎ
];
