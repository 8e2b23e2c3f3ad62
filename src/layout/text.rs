use crate::font::Font;
use crate::page::Page;
use crate::units::Pt;

/// Calculates the vertical offset from a text coordinate to the font's
/// baseline.
///
/// In PDF, text coordinates specify the baseline position. This function
/// returns the negative ascent value, which can be added to a
/// y-coordinate to account for the font's ascender height when
/// positioning text from a top reference point.
pub fn baseline_offset(font: &Font, size: Pt) -> Pt {
    Pt(0.0) - font.ascent(size)
}

/// Calculates the coordinates of where text can start on a page to be
/// just within the top left margin, taking into account the ascending
/// height of the font and the font size. Text is laid out according to
/// the content box of the page, which is usually derived from the page
/// size and accompanying margins.
pub fn baseline_start(page: &Page, font: &Font, size: Pt) -> (Pt, Pt) {
    let ascent = baseline_offset(font, size);
    let x = page.content_box.x1;
    let y = page.content_box.y2 + ascent;
    (x, y)
}

/// Calculate the width of a given string of text given the font and font
/// size
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    font.width_of(text, size)
}

/// Split text into lines that each fit within `max_width` when rendered
/// with the given font and size.
///
/// Wrapping is whitespace-based and greedy: words are packed onto a line
/// until the next word would overflow, then a new line starts. Words are
/// never hyphenated or split, so a single word wider than `max_width`
/// comes back as its own over-width line, and callers render it as-is
/// rather than losing content. Runs of whitespace collapse to single
/// spaces; joining the returned lines with single spaces reproduces the
/// whitespace-normalized input.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    let space_width = font.width_of(" ", size);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = Pt(0.0);

    for word in text.split_whitespace() {
        let word_width = font.width_of(word, size);

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space_width + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
