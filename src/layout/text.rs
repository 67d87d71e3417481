use crate::document::FontWeight;
use crate::layout::metrics;
use crate::units::{Mm, Pt};

const TABSIZE: usize = 4;

/// Vertical distance between two consecutive lines of text set at `size`.
/// Every cursor advance in the layout engine is derived from this, so page
/// break positions depend on it exactly.
pub fn line_height(size: Pt) -> Mm {
    Mm(size.0 / 2.5)
}

/// Measures and wraps text for a font size and weight.
///
/// Implementors only need to provide [TextMeasurer::width_of_text]; the
/// provided [TextMeasurer::split_text_to_size] wraps text on word boundaries
/// using those widths.
pub trait TextMeasurer {
    /// Calculate the width of a single line of text
    fn width_of_text(&self, text: &str, size: Pt, weight: FontWeight) -> Mm;

    /// Wrap `text` into lines no wider than `max_width`.
    ///
    /// Explicit newlines always start a new line and empty paragraphs are kept
    /// as empty lines, so the result is never empty. Words wrap at whitespace;
    /// a word that is wider than the line on its own is split between
    /// characters.
    fn split_text_to_size(
        &self,
        text: &str,
        size: Pt,
        weight: FontWeight,
        max_width: Mm,
    ) -> Vec<String> {
        // replace tabs with spaces
        let text = text.replace('\t', &" ".repeat(TABSIZE));
        // normalize newlines
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        let fits = |candidate: &str| self.width_of_text(candidate, size, weight) <= max_width;

        let mut lines: Vec<String> = Vec::new();
        for paragraph in text.split('\n') {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                let candidate = if line.is_empty() {
                    word.to_string()
                } else {
                    format!("{line} {word}")
                };

                if fits(&candidate) {
                    line = candidate;
                    continue;
                }

                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }

                if fits(word) {
                    line = word.to_string();
                } else {
                    // no break point inside the word, force character breaks
                    for ch in word.chars() {
                        line.push(ch);
                        if !fits(&line) && line.chars().count() > 1 {
                            line.pop();
                            lines.push(std::mem::take(&mut line));
                            line.push(ch);
                        }
                    }
                }
            }
            lines.push(line);
        }

        lines
    }
}

/// Text metrics of the standard Helvetica faces the PDF writer renders with
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardMetrics;

impl TextMeasurer for StandardMetrics {
    fn width_of_text(&self, text: &str, size: Pt, weight: FontWeight) -> Mm {
        let units: u32 = text
            .chars()
            .map(|ch| metrics::advance(ch, weight) as u32)
            .sum();
        Pt(units as f32 * size.0 / 1000.0).into()
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn width_of_text(&self, text: &str, size: Pt, weight: FontWeight) -> Mm {
        (**self).width_of_text(text, size, weight)
    }

    fn split_text_to_size(
        &self,
        text: &str,
        size: Pt,
        weight: FontWeight,
        max_width: Mm,
    ) -> Vec<String> {
        (**self).split_text_to_size(text, size, weight, max_width)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Every character is exactly one millimetre wide
    struct Fixed;

    impl TextMeasurer for Fixed {
        fn width_of_text(&self, text: &str, _size: Pt, _weight: FontWeight) -> Mm {
            Mm(text.chars().count() as f32)
        }
    }

    fn wrap(text: &str, width: f32) -> Vec<String> {
        Fixed.split_text_to_size(text, Pt(10.0), FontWeight::Normal, Mm(width))
    }

    #[test]
    fn line_height_is_size_over_two_and_a_half() {
        assert_eq!(line_height(Pt(10.0)), Mm(4.0));
        assert_eq!(line_height(Pt(20.0)), Mm(8.0));
        assert_eq!(line_height(Pt(11.0)), Mm(4.4));
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("asdf asdf asdf", 9.0), vec!["asdf asdf", "asdf"]);
    }

    #[test]
    fn long_words_are_split_between_characters() {
        assert_eq!(wrap("abcdefghij", 4.0), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("ab abcdefgh", 4.0), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn newlines_start_new_lines_and_empty_paragraphs_survive() {
        assert_eq!(wrap("one\n\ntwo", 20.0), vec!["one", "", "two"]);
        assert_eq!(wrap("one\r\ntwo", 20.0), vec!["one", "two"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 20.0), vec![""]);
    }

    #[test]
    fn standard_metrics_measure_helvetica() {
        // "Hi" = 722 + 222 thousandths of an em, at 72pt that is 0.944 inch
        let width = StandardMetrics.width_of_text("Hi", Pt(72.0), FontWeight::Normal);
        assert!((width.0 - 0.944 * 25.4).abs() < 1e-3);

        let bold = StandardMetrics.width_of_text("Hi", Pt(72.0), FontWeight::Bold);
        assert!(bold > width);
    }

    #[test]
    fn wrapped_lines_fit_the_width() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(20);
        let lines =
            StandardMetrics.split_text_to_size(&text, Pt(11.0), FontWeight::Normal, Mm(180.0));
        assert!(lines.len() > 1);
        for line in lines.iter() {
            let width = StandardMetrics.width_of_text(line, Pt(11.0), FontWeight::Normal);
            assert!(width <= Mm(180.0), "{line:?} is {width} wide");
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.trim_end());
    }
}
