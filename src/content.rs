//! Rendering of page contents into PDF content streams.

use crate::colour::Colour;
use crate::font::encode_win_ansi;
use crate::page::{PageContents, SpanFont, SpanLayout};
use crate::units::Pt;
use std::io::Write;

/// Renders page contents to a PDF content stream, converting the
/// high-level content items into low-level PDF operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(contents: &[PageContents]) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans)?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.x2 - image.position.x1,
                    image.position.y2 - image.position.y1,
                    image.position.x1,
                    image.position.y1
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
            PageContents::RawContent(c) => {
                write!(&mut content, "q\n")?;
                content.write_all(c.as_slice())?;
                write!(&mut content, "\nQ\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
) -> Result<(), std::io::Error> {
    if spans.is_empty() {
        return Ok(());
    }

    write!(content, "q\n")?;

    // unwrap is safe, as we know spans isn't empty
    let mut current_font: SpanFont = spans.first().unwrap().font;
    let mut current_colour: Colour = spans.first().unwrap().colour;
    let mut current_word_spacing: Pt = Pt(0.0);

    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }
        if span.word_spacing != current_word_spacing {
            current_word_spacing = span.word_spacing;
            write!(content, "{} Tw\n", current_word_spacing)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write_literal_string(content, &span.text)?;
        write!(content, " Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

/// Write text as a parenthesised PDF literal string in WinAnsi bytes,
/// escaping the characters that delimit literals.
fn write_literal_string(content: &mut Vec<u8>, text: &str) -> Result<(), std::io::Error> {
    content.push(b'(');
    for byte in encode_win_ansi(text) {
        match byte {
            b'(' | b')' | b'\\' => {
                content.push(b'\\');
                content.push(byte);
            }
            _ => content.push(byte),
        }
    }
    content.push(b')');
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_literal_string_delimiters() {
        let mut out = Vec::new();
        write_literal_string(&mut out, r"a(b)c\d").unwrap();
        assert_eq!(out, b"(a\\(b\\)c\\\\d)".to_vec());
    }
}
