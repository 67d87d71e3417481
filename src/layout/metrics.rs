//! Advance widths of the PDF base-14 Helvetica faces.
//!
//! The writer references Helvetica and Helvetica-Bold without embedding them,
//! so these are the metrics every conforming viewer will render with. Widths
//! are in thousandths of an em, taken from the Adobe AFM files.

use crate::document::FontWeight;

/// Widths for the printable ASCII range, ' ' (32) through '~' (126)
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0 - 9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A - Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a - z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0 - 9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A - Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a - z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

/// Advance width of `ch` in thousandths of an em
pub fn advance(ch: char, weight: FontWeight) -> u16 {
    let bold = weight == FontWeight::Bold;
    match ch {
        ' '..='~' => {
            let index = ch as usize - ' ' as usize;
            if bold {
                HELVETICA_BOLD[index]
            } else {
                HELVETICA[index]
            }
        }
        '\u{2018}' | '\u{2019}' => {
            if bold {
                278
            } else {
                222
            }
        }
        '\u{201C}' | '\u{201D}' => {
            if bold {
                500
            } else {
                333
            }
        }
        '\u{2022}' => 350,
        '\u{2013}' | '\u{20AC}' => 556,
        '\u{2014}' | '\u{2026}' => 1000,
        '\u{A0}' => 278,
        // accented latin and anything else the faces may or may not have
        _ => {
            if bold {
                611
            } else {
                556
            }
        }
    }
}

/// Map a character onto its byte in the WinAnsi encoding used for the
/// base-14 fonts. Characters outside of the encoding render as '?'.
pub fn win_ansi(ch: char) -> u8 {
    match ch {
        '\u{20AC}' => 0x80,
        '\u{2026}' => 0x85,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        ' '..='~' | '\u{A0}'..='\u{FF}' => ch as u32 as u8,
        _ => b'?',
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ascii_widths_line_up_with_their_characters() {
        assert_eq!(advance(' ', FontWeight::Normal), 278);
        assert_eq!(advance('@', FontWeight::Normal), 1015);
        assert_eq!(advance('A', FontWeight::Normal), 667);
        assert_eq!(advance('Z', FontWeight::Normal), 611);
        assert_eq!(advance('a', FontWeight::Normal), 556);
        assert_eq!(advance('i', FontWeight::Normal), 222);
        assert_eq!(advance('m', FontWeight::Normal), 833);
        assert_eq!(advance('~', FontWeight::Normal), 584);
    }

    #[test]
    fn bold_is_wider() {
        assert_eq!(advance('@', FontWeight::Bold), 975);
        assert_eq!(advance('b', FontWeight::Bold), 611);
        assert_eq!(advance('m', FontWeight::Bold), 889);
        assert_eq!(advance('z', FontWeight::Bold), 500);
        assert_eq!(advance('~', FontWeight::Bold), 584);
    }

    #[test]
    fn typographic_punctuation_maps_into_win_ansi() {
        assert_eq!(win_ansi('a'), b'a');
        assert_eq!(win_ansi('é'), 0xE9);
        assert_eq!(win_ansi('\u{2019}'), 0x92);
        assert_eq!(win_ansi('\u{2014}'), 0x97);
        assert_eq!(win_ansi('漢'), b'?');
    }
}
