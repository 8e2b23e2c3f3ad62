use super::{Question, SheetFonts, SheetOptions, LINE_HEIGHT_FACTOR};
use crate::colour::colours;
use crate::document::Document;
use crate::layout::width_of_text;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::units::Pt;

const TITLE: &str = "Gabarito Oficial";

/// Append the answer-key page(s): one line per question, in input order,
/// naming the correct option's letter. A question whose correct answer
/// isn't found among its options verbatim gets a visible `'?'` instead of
/// failing the export.
///
/// The key is a single column with fixed line advancement; when it
/// outgrows a page it simply continues on the next (the title is not
/// repeated).
pub(crate) fn render_answer_key(
    doc: &mut Document,
    fonts: SheetFonts,
    options: &SheetOptions,
    questions: &[Question],
) {
    let mut page = Page::new(options.page_size, Some(options.margins.clone()));
    let cb = page.content_box;
    let regular = &doc.fonts[fonts.regular];
    let bold = &doc.fonts[fonts.bold];
    let line_height = options.font_size * LINE_HEIGHT_FACTOR;

    // centred title on the first key page
    let title_width = width_of_text(TITLE, bold, options.title_size);
    page.add_span(SpanLayout {
        text: TITLE.to_string(),
        font: SpanFont {
            id: fonts.bold,
            size: options.title_size,
        },
        colour: colours::BLACK,
        coords: (
            cb.x1 + (cb.width() - title_width) / 2.0,
            cb.y2 - bold.ascent(options.title_size),
        ),
        word_spacing: Pt(0.0),
    });
    let mut y = cb.y2 - bold.line_height(options.title_size) - Pt(12.0);

    let ascent = regular.ascent(options.font_size);
    for (index, question) in questions.iter().enumerate() {
        if y - line_height < cb.y1 {
            doc.add_page(page);
            page = Page::new(options.page_size, Some(options.margins.clone()));
            y = cb.y2;
        }

        let letter = question.correct_letter().unwrap_or('?');
        page.add_span(SpanLayout {
            text: format!("Questão {}: {}", index + 1, letter),
            font: SpanFont {
                id: fonts.regular,
                size: options.font_size,
            },
            colour: colours::BLACK,
            coords: (cb.x1, y - ascent),
            word_spacing: Pt(0.0),
        });
        y = y - line_height;
    }

    doc.add_page(page);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::Font;
    use crate::page::PageContents;

    fn setup() -> (Document, SheetFonts, SheetOptions) {
        let mut doc = Document::default();
        let fonts = SheetFonts {
            regular: doc.add_font(Font::helvetica()),
            bold: doc.add_font(Font::helvetica_bold()),
        };
        (doc, fonts, SheetOptions::default())
    }

    fn texts_of(doc: &Document, page_index: usize) -> Vec<String> {
        doc.pages[doc.page_order[page_index]]
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => spans.first().map(|s| s.text.clone()),
                _ => None,
            })
            .collect()
    }

    fn question(options: &[&str], correct: &str) -> Question {
        Question::new(
            "enunciado",
            options.iter().map(|s| s.to_string()).collect(),
            correct,
        )
    }

    #[test]
    fn letters_follow_option_order() {
        let (mut doc, fonts, options) = setup();
        let questions = vec![
            question(&["um", "dois", "três"], "dois"),
            question(&["verdadeiro", "falso"], "verdadeiro"),
            question(&["a", "b", "c", "d", "e"], "e"),
        ];

        render_answer_key(&mut doc, fonts, &options, &questions);

        let texts = texts_of(&doc, 0);
        assert_eq!(texts[0], TITLE);
        assert_eq!(texts[1], "Questão 1: B");
        assert_eq!(texts[2], "Questão 2: A");
        assert_eq!(texts[3], "Questão 3: E");
    }

    #[test]
    fn missing_answer_renders_a_question_mark() {
        let (mut doc, fonts, options) = setup();
        let questions = vec![question(&["um", "dois"], "quatro")];

        render_answer_key(&mut doc, fonts, &options, &questions);

        let texts = texts_of(&doc, 0);
        assert_eq!(texts[1], "Questão 1: ?");
    }

    #[test]
    fn long_keys_continue_onto_further_pages() {
        let (mut doc, fonts, options) = setup();
        let questions: Vec<Question> = (0..150)
            .map(|_| question(&["sim", "não"], "não"))
            .collect();

        render_answer_key(&mut doc, fonts, &options, &questions);

        assert!(doc.page_order.len() >= 2);
        // the title appears once, on the first page only
        assert_eq!(texts_of(&doc, 0)[0], TITLE);
        assert!(texts_of(&doc, 1).iter().all(|t| t != TITLE));
        // every question is accounted for, in order
        let all: Vec<String> = (0..doc.page_order.len())
            .flat_map(|pi| texts_of(&doc, pi))
            .filter(|t| t.starts_with("Questão"))
            .collect();
        assert_eq!(all.len(), 150);
        assert_eq!(all[0], "Questão 1: B");
        assert_eq!(all[149], "Questão 150: B");
    }
}
