use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// The number of font units per em in the standard Type1 faces.
const UNITS_PER_EM: f32 = 1000.0;

/// Ascender of the Helvetica family, in font units.
const ASCENDER: f32 = 718.0;

/// Descender of the Helvetica family, in font units. Negative, as it
/// reaches below the baseline.
const DESCENDER: f32 = -207.0;

/// The four faces of the built-in Helvetica family. Oblique faces share
/// their upright counterpart's advance widths.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

/// One of the PDF standard ("base 14") Helvetica faces.
///
/// Unlike embedded fonts, the built-in faces ship with every PDF viewer,
/// so a document referencing them needs no font data at all, only the
/// face name and an encoding. Text is measured with the standard AFM
/// advance-width tables and encoded as WinAnsi (a Latin-1 superset),
/// which covers the Portuguese exam-sheet character set.
///
/// Fonts are stored in the [Document](crate::Document) and referred to by
/// their [Id] throughout layout code.
pub struct Font {
    pub face: Face,
}

/// Advance widths for Helvetica, characters 0x20..=0x7E, in font units.
#[rustfmt::skip]
const WIDTHS_REGULAR: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Advance widths for Helvetica-Bold, characters 0x20..=0x7E, in font units.
#[rustfmt::skip]
const WIDTHS_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Strip the diacritic from a Latin-1 letter. In the standard faces the
/// accented forms share their base glyph's advance width.
fn latin_base(ch: char) -> Option<char> {
    Some(match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    })
}

/// Map a character to its WinAnsi code point, the encoding declared for
/// every font the crate writes. Returns [None] for characters outside the
/// encoding; callers substitute `'?'`.
pub(crate) fn win_ansi_byte(ch: char) -> Option<u8> {
    let c = ch as u32;
    match c {
        0x20..=0x7E => Some(c as u8),
        // latin-1 block maps straight through
        0xA0..=0xFF => Some(c as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '\u{2018}' => Some(0x91),
            '\u{2019}' => Some(0x92),
            '\u{201C}' => Some(0x93),
            '\u{201D}' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

/// Encode a string as WinAnsi bytes for a PDF literal string, replacing
/// characters outside the encoding with `'?'`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| win_ansi_byte(ch).unwrap_or(b'?'))
        .collect()
}

impl Font {
    pub fn helvetica() -> Font {
        Font { face: Face::Regular }
    }

    pub fn helvetica_bold() -> Font {
        Font { face: Face::Bold }
    }

    pub fn helvetica_oblique() -> Font {
        Font { face: Face::Oblique }
    }

    pub fn helvetica_bold_oblique() -> Font {
        Font {
            face: Face::BoldOblique,
        }
    }

    /// The PostScript name the face is registered under in every viewer
    pub fn base_name(&self) -> &'static str {
        match self.face {
            Face::Regular => "Helvetica",
            Face::Bold => "Helvetica-Bold",
            Face::Oblique => "Helvetica-Oblique",
            Face::BoldOblique => "Helvetica-BoldOblique",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self.face {
            Face::Regular | Face::Oblique => &WIDTHS_REGULAR,
            Face::Bold | Face::BoldOblique => &WIDTHS_BOLD,
        }
    }

    /// The advance width of a single character, in font units
    fn advance_units(&self, ch: char) -> u16 {
        let table = self.widths();
        let c = ch as u32;
        if (0x20..=0x7E).contains(&c) {
            return table[(c - 0x20) as usize];
        }
        if let Some(base) = latin_base(ch) {
            return table[(base as u32 - 0x20) as usize];
        }
        let bold = matches!(self.face, Face::Bold | Face::BoldOblique);
        match ch {
            '\u{00A0}' => table[0],
            'ß' => 611,
            'æ' => 889,
            'Æ' => 1000,
            'ø' => 611,
            'Ø' => 778,
            'ª' | 'º' => if bold { 370 } else { 365 },
            '°' => 400,
            '·' => 278,
            '«' | '»' => 556,
            '¡' => 333,
            '¿' => 611,
            '–' => 556,
            '—' => 1000,
            '…' => 1000,
            '•' => 350,
            '\u{2018}' | '\u{2019}' => if bold { 278 } else { 222 },
            '\u{201C}' | '\u{201D}' => if bold { 500 } else { 333 },
            // anything else renders as '?'
            _ => table[('?' as u32 - 0x20) as usize],
        }
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (ASCENDER / UNITS_PER_EM)
    }

    /// Calculate the descent (distance from the baseline to the bottom of
    /// the font) for the given font size. Note: this is negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (DESCENDER / UNITS_PER_EM)
    }

    /// The default line height of the face for the given size: the
    /// conventional 1.2× single-spaced leading used with the built-in
    /// faces. The returned value is how much to vertically offset a second
    /// row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        size * 1.2
    }

    /// Calculate the width of a string of text at the given font size.
    /// Characters outside the WinAnsi encoding measure as `'?'`, matching
    /// how they will render.
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| {
                let ch = if win_ansi_byte(ch).is_some() { ch } else { '?' };
                self.advance_units(ch) as u32
            })
            .sum();
        size * (units as f32 / UNITS_PER_EM)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.base_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_with_the_standard_advances() {
        let font = Font::helvetica();
        // space is 278/1000 em in helvetica
        assert!((font.width_of(" ", Pt(10.0)).0 - 2.78).abs() < 1e-4);
        // "iii" is far narrower than "mmm"
        assert!(font.width_of("iii", Pt(10.0)) < font.width_of("mmm", Pt(10.0)));
    }

    #[test]
    fn bold_runs_wider_than_regular() {
        let regular = Font::helvetica();
        let bold = Font::helvetica_bold();
        let text = "Qual das alternativas abaixo";
        assert!(bold.width_of(text, Pt(10.0)) > regular.width_of(text, Pt(10.0)));
    }

    #[test]
    fn accents_share_their_base_advance() {
        let font = Font::helvetica();
        assert_eq!(font.width_of("ã", Pt(12.0)), font.width_of("a", Pt(12.0)));
        assert_eq!(font.width_of("ç", Pt(12.0)), font.width_of("c", Pt(12.0)));
        assert_eq!(font.width_of("É", Pt(12.0)), font.width_of("E", Pt(12.0)));
    }

    #[test]
    fn encodes_portuguese_text_as_latin_1() {
        assert_eq!(encode_win_ansi("ção"), vec![0xE7, 0xE3, b'o']);
        assert_eq!(win_ansi_byte('—'), Some(0x97));
        // outside the encoding: replaced
        assert_eq!(encode_win_ansi("日"), vec![b'?']);
    }
}
