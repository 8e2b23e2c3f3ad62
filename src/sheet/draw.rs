use super::items::ContentItem;
use super::{SheetFonts, LINE_HEIGHT_FACTOR, SPACE_AFTER_STATEMENT, SPACE_BETWEEN_OPTIONS};
use crate::colour::colours;
use crate::document::Document;
use crate::layout::{width_of_text, wrap_text};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::units::Pt;

/// Slack for float comparisons when deciding whether one more line fits.
const FIT_EPSILON: Pt = Pt(0.01);

/// What a partial draw accomplished: where the cursor ended up, and the
/// content that did not fit. An empty `remaining` means every item was
/// drawn in full.
#[derive(Debug)]
pub(crate) struct DrawResult {
    pub y_after: Pt,
    pub remaining: Vec<ContentItem>,
}

/// Draw as much of `items` as fits in `available_height` below
/// `origin`, one wrapped line at a time, and report what was left over.
///
/// Lines are accepted greedily per item. When an item only partially
/// fits, its undrawn lines come back as a prefix-less continuation item
/// at the head of `remaining`, followed by the untouched tail of
/// `items`, and processing stops: the column is full. An item whose
/// first line already doesn't fit is returned whole, original prefix
/// included, so the caller breaks to a fresh column before any of it is
/// drawn.
///
/// Inter-item spacing (after statements and between options) is only
/// applied when it fits; running out of room for mere spacing never
/// forces a break on its own.
pub(crate) fn draw_items(
    doc: &Document,
    page: &mut Page,
    fonts: SheetFonts,
    size: Pt,
    items: &[ContentItem],
    origin: (Pt, Pt),
    column_width: Pt,
    available_height: Pt,
) -> DrawResult {
    let line_height = size * LINE_HEIGHT_FACTOR;
    let bottom = origin.1 - available_height;
    let mut y = origin.1;
    let mut remaining = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let font_id = if item.bold { fonts.bold } else { fonts.regular };
        let font = &doc.fonts[font_id];

        let lines = wrap_text(&item.full_text(), font, size, column_width);

        let height_left = y - bottom;
        let mut fits = 0usize;
        while fits < lines.len()
            && line_height * (fits + 1) as f32 <= height_left + FIT_EPSILON
        {
            fits += 1;
        }

        for (li, line) in lines.iter().take(fits).enumerate() {
            let is_last_line_of_item = li + 1 == lines.len();
            let natural = width_of_text(line, font, size);
            let gaps = line.matches(' ').count();
            let word_spacing = if !is_last_line_of_item && gaps > 0 && natural < column_width {
                (column_width - natural) / gaps as f32
            } else {
                Pt(0.0)
            };

            page.add_span(SpanLayout {
                text: line.clone(),
                font: SpanFont { id: font_id, size },
                colour: colours::BLACK,
                coords: (origin.0, y - font.ascent(size)),
                word_spacing,
            });
            y -= line_height;
        }

        if fits < lines.len() {
            // the column is full; hand back the undrawn tail and stop
            let cont = if fits == 0 {
                item.clone()
            } else {
                item.continuation(lines[fits..].join(" "))
            };
            remaining.push(cont);
            remaining.extend(items[index + 1..].iter().cloned());
            break;
        }

        let spacing = if item.bold {
            SPACE_AFTER_STATEMENT
        } else if item.last_option {
            Pt(0.0)
        } else {
            SPACE_BETWEEN_OPTIONS
        };
        if spacing > Pt(0.0) && y - spacing >= bottom - FIT_EPSILON {
            y -= spacing;
        }
    }

    DrawResult {
        y_after: y,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::layout::Margins;
    use crate::page::PageContents;
    use crate::pagesize;
    use crate::units::In;

    const SIZE: Pt = Pt(10.0);

    fn setup() -> (Document, SheetFonts) {
        let mut doc = Document::default();
        let fonts = SheetFonts {
            regular: doc.add_font(Font::helvetica()),
            bold: doc.add_font(Font::helvetica_bold()),
        };
        (doc, fonts)
    }

    fn blank_page() -> Page {
        Page::new(pagesize::A4, Some(Margins::all(In(0.5).into())))
    }

    fn spans_of(page: &Page) -> Vec<&SpanLayout> {
        page.contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => spans.first(),
                _ => None,
            })
            .collect()
    }

    fn item(prefix: &str, text: &str, bold: bool, last_option: bool) -> ContentItem {
        ContentItem {
            prefix: prefix.to_string(),
            text: text.to_string(),
            bold,
            last_option,
        }
    }

    #[test]
    fn everything_fits_in_a_tall_column() {
        let (doc, fonts) = setup();
        let mut page = blank_page();
        let items = vec![
            item("1. ", "Quanto é 2 + 2?", true, false),
            item("  a) ", "3", false, false),
            item("  b) ", "4", false, true),
        ];

        let result = draw_items(
            &doc,
            &mut page,
            fonts,
            SIZE,
            &items,
            (Pt(50.0), Pt(700.0)),
            Pt(240.0),
            Pt(500.0),
        );

        assert!(result.remaining.is_empty());
        let spans = spans_of(&page);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].text, "1. Quanto é 2 + 2?");
        // the option's indent collapses with the whitespace wrap
        assert_eq!(spans[1].text, "a) 3");
        // three lines plus statement spacing plus one option gap
        let expected =
            Pt(700.0) - SIZE * LINE_HEIGHT_FACTOR * 3.0 - SPACE_AFTER_STATEMENT - SPACE_BETWEEN_OPTIONS;
        assert!((result.y_after.0 - expected.0).abs() < 1e-3);
    }

    #[test]
    fn split_item_comes_back_without_its_prefix() {
        let (doc, fonts) = setup();
        let mut page = blank_page();
        let statement = "Explique por que a pressão atmosférica diminui conforme a \
                         altitude aumenta em relação ao nível do mar";
        let items = vec![
            item("1. ", statement, true, false),
            item("  a) ", "Porque o ar fica mais denso", false, true),
        ];

        // room for exactly two lines
        let room = SIZE * LINE_HEIGHT_FACTOR * 2.0 + Pt(1.0);
        let result = draw_items(
            &doc,
            &mut page,
            fonts,
            SIZE,
            &items,
            (Pt(50.0), Pt(700.0)),
            Pt(150.0),
            room,
        );

        assert_eq!(spans_of(&page).len(), 2);
        // head of the remainder continues the statement, prefix dropped
        assert_eq!(result.remaining.len(), 2);
        assert_eq!(result.remaining[0].prefix, "");
        assert!(result.remaining[0].bold);
        assert!(!result.remaining[0].text.is_empty());
        // the untouched option follows, intact
        assert_eq!(result.remaining[1].prefix, "  a) ");

        // no text lost: drawn lines + remainder reassemble the statement
        let drawn = spans_of(&page)
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(
            format!("{} {}", drawn, result.remaining[0].text),
            format!("1. {statement}")
        );
    }

    #[test]
    fn item_that_cannot_start_is_returned_whole() {
        let (doc, fonts) = setup();
        let mut page = blank_page();
        let items = vec![item("7. ", "Qual destes números é primo?", true, false)];

        let result = draw_items(
            &doc,
            &mut page,
            fonts,
            SIZE,
            &items,
            (Pt(50.0), Pt(700.0)),
            Pt(240.0),
            Pt(5.0),
        );

        assert!(spans_of(&page).is_empty());
        assert_eq!(result.y_after, Pt(700.0));
        assert_eq!(result.remaining, items);
    }

    #[test]
    fn spacing_overflow_is_skipped_silently() {
        let (doc, fonts) = setup();
        let mut page = blank_page();
        let items = vec![item("  c) ", "última alternativa", false, false)];

        // room for the line but not for the option gap after it
        let room = SIZE * LINE_HEIGHT_FACTOR + Pt(0.5);
        let result = draw_items(
            &doc,
            &mut page,
            fonts,
            SIZE,
            &items,
            (Pt(50.0), Pt(700.0)),
            Pt(240.0),
            room,
        );

        assert!(result.remaining.is_empty());
        assert_eq!(spans_of(&page).len(), 1);
        let expected = Pt(700.0) - SIZE * LINE_HEIGHT_FACTOR;
        assert!((result.y_after.0 - expected.0).abs() < 1e-3);
    }

    #[test]
    fn wrapped_lines_are_justified_except_the_last() {
        let (doc, fonts) = setup();
        let mut page = blank_page();
        let statement = "A fotossíntese converte energia luminosa em energia química \
                         armazenada em moléculas de glicose";
        let items = vec![item("3. ", statement, true, false)];

        let width = Pt(150.0);
        draw_items(
            &doc,
            &mut page,
            fonts,
            SIZE,
            &items,
            (Pt(50.0), Pt(700.0)),
            width,
            Pt(500.0),
        );

        let spans = spans_of(&page);
        assert!(spans.len() > 1);
        for span in &spans[..spans.len() - 1] {
            assert!(span.word_spacing > Pt(0.0));
        }
        assert_eq!(spans.last().unwrap().word_spacing, Pt(0.0));
    }
}
