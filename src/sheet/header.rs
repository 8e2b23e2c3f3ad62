use super::{SheetFonts, SheetOptions};
use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::image::Image;
use crate::layout::width_of_text;
use crate::page::{ImageLayout, Page, SpanFont, SpanLayout};
use crate::rect::Rect;
use crate::units::{In, Pt};
use crate::Error;
use id_arena::Id;
use pdf_writer::types::LineCapStyle;
use pdf_writer::Content;

/// Height the logo is scaled to in the sheet header
const LOGO_HEIGHT: Pt = Pt(40.0);

/// Vertical breathing room between header blocks
const HEADER_GAP: Pt = Pt(6.0);

/// The question-count line, with the unit word agreeing in number
pub(crate) fn question_count_label(count: usize) -> String {
    let word = if count == 1 { "questão" } else { "questões" };
    format!("Total de questões: {count} {word}")
}

/// Draw a horizontal rule between the given x coordinates.
fn render_rule(page: &mut Page, x1: Pt, x2: Pt, y: Pt, grey: f32) {
    let mut content = Content::new();
    content
        .set_stroke_gray(grey)
        .set_line_cap(LineCapStyle::ButtCap)
        .set_line_width(0.5)
        .move_to(*x1, *y)
        .line_to(*x2, *y)
        .stroke();
    page.add_content(content);
}

/// Draw the static document chrome at the top of the first page: the
/// logo, the student-name field with its ruled line for handwriting, the
/// optional discipline, the question count, the centred title, and a
/// separator rule. Returns the y coordinate where question content
/// starts.
pub(crate) fn render_header(
    doc: &Document,
    page: &mut Page,
    fonts: SheetFonts,
    options: &SheetOptions,
    topic: &str,
    discipline: Option<&str>,
    question_count: usize,
    logo: Option<(Id<Image>, f32)>,
) -> Pt {
    let cb = page.content_box;
    let regular = &doc.fonts[fonts.regular];
    let bold = &doc.fonts[fonts.bold];
    let field_size = options.font_size;
    let field_height = regular.line_height(field_size);

    let mut y = cb.y2;

    if let Some((image_id, aspect)) = logo {
        page.add_image(ImageLayout {
            image_id,
            position: Rect {
                x1: cb.x1,
                y1: cb.y2 - LOGO_HEIGHT,
                x2: cb.x1 + LOGO_HEIGHT * aspect,
                y2: cb.y2,
            },
        });
        y = cb.y2 - LOGO_HEIGHT - HEADER_GAP;
    }

    // student name: label plus a rule to write on
    let label = "Aluno(a):";
    let baseline = y - regular.ascent(field_size);
    page.add_span(SpanLayout {
        text: label.to_string(),
        font: SpanFont {
            id: fonts.regular,
            size: field_size,
        },
        colour: colours::BLACK,
        coords: (cb.x1, baseline),
        word_spacing: Pt(0.0),
    });
    let label_width = width_of_text(label, regular, field_size);
    render_rule(page, cb.x1 + label_width + Pt(4.0), cb.x2, baseline, 0.0);
    y = y - field_height - Pt(2.0);

    if let Some(discipline) = discipline {
        page.add_span(SpanLayout {
            text: format!("Disciplina: {discipline}"),
            font: SpanFont {
                id: fonts.regular,
                size: field_size,
            },
            colour: colours::BLACK,
            coords: (cb.x1, y - regular.ascent(field_size)),
            word_spacing: Pt(0.0),
        });
        y = y - field_height;
    }

    page.add_span(SpanLayout {
        text: question_count_label(question_count),
        font: SpanFont {
            id: fonts.regular,
            size: field_size,
        },
        colour: colours::BLACK,
        coords: (cb.x1, y - regular.ascent(field_size)),
        word_spacing: Pt(0.0),
    });
    y = y - field_height - HEADER_GAP;

    // centred title
    let title_width = width_of_text(topic, bold, options.title_size);
    let title_x = cb.x1 + (cb.width() - title_width) / 2.0;
    page.add_span(SpanLayout {
        text: topic.to_string(),
        font: SpanFont {
            id: fonts.bold,
            size: options.title_size,
        },
        colour: colours::BLACK,
        coords: (title_x, y - bold.ascent(options.title_size)),
        word_spacing: Pt(0.0),
    });
    y = y - bold.line_height(options.title_size) - HEADER_GAP;

    render_rule(page, cb.x1, cb.x2, y, 0.75);

    y - Pt(10.0)
}

/// Stamp every page with a right-aligned "Página i de N" footer. Must run
/// after all pages exist, since N is only known then; footers are a
/// finalize pass, never part of content layout.
pub(crate) fn stamp_footers(
    doc: &mut Document,
    fonts: SheetFonts,
    footer_size: Pt,
) -> Result<(), Error> {
    let total = doc.page_order.len();
    for index in 0..total {
        let id = doc.page_order[index];
        let text = format!("Página {} de {}", index + 1, total);
        let text_width = width_of_text(&text, &doc.fonts[fonts.regular], footer_size);
        let page = doc.pages.get_mut(id).ok_or(Error::PageMissing)?;
        let x = page.content_box.x2 - text_width;
        let y: Pt = In(0.25).into();
        page.add_span(SpanLayout {
            text,
            font: SpanFont {
                id: fonts.regular,
                size: footer_size,
            },
            colour: Colour::new_grey(0.25),
            coords: (x, y),
            word_spacing: Pt(0.0),
        });
    }
    Ok(())
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

    fn span_texts(page: &Page) -> Vec<String> {
        page.contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => spans.first().map(|s| s.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn count_label_agrees_in_number() {
        assert_eq!(question_count_label(1), "Total de questões: 1 questão");
        assert_eq!(question_count_label(2), "Total de questões: 2 questões");
        assert_eq!(question_count_label(15), "Total de questões: 15 questões");
    }

    #[test]
    fn header_draws_all_chrome_and_returns_the_content_top() {
        let (doc, fonts, options) = setup();
        let mut page = Page::new(options.page_size, Some(options.margins.clone()));

        let start = render_header(
            &doc,
            &mut page,
            fonts,
            &options,
            "Prova de Biologia",
            Some("Ciências"),
            12,
            None,
        );

        let texts = span_texts(&page);
        assert!(texts.iter().any(|t| t == "Aluno(a):"));
        assert!(texts.iter().any(|t| t == "Disciplina: Ciências"));
        assert!(texts.iter().any(|t| t == "Total de questões: 12 questões"));
        assert!(texts.iter().any(|t| t == "Prova de Biologia"));

        // content starts below every piece of chrome
        for content in &page.contents {
            if let PageContents::Text(spans) = content {
                assert!(spans[0].coords.1 > start);
            }
        }
        assert!(start < page.content_box.y2);
        assert!(start > page.content_box.y1);
    }

    #[test]
    fn title_is_centred_in_the_content_box() {
        let (doc, fonts, options) = setup();
        let mut page = Page::new(options.page_size, Some(options.margins.clone()));
        render_header(&doc, &mut page, fonts, &options, "História", None, 5, None);

        let title = page
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => spans.first(),
                _ => None,
            })
            .find(|s| s.text == "História")
            .expect("title rendered");

        let cb = page.content_box;
        let title_font = &doc.fonts[fonts.bold];
        let width = width_of_text("História", title_font, options.title_size);
        let expected = cb.x1 + (cb.width() - width) / 2.0;
        assert!((title.coords.0 .0 - expected.0).abs() < 1e-3);
        assert!(title.coords.0 > cb.x1);
    }

    #[test]
    fn footers_number_every_page() {
        let (mut doc, fonts, options) = setup();
        for _ in 0..3 {
            doc.add_page(Page::new(options.page_size, Some(options.margins.clone())));
        }

        stamp_footers(&mut doc, fonts, options.footer_size).unwrap();

        for (index, id) in doc.page_order.clone().into_iter().enumerate() {
            let texts = span_texts(&doc.pages[id]);
            assert_eq!(texts, vec![format!("Página {} de 3", index + 1)]);
        }
    }

    #[test]
    fn footer_is_right_aligned() {
        let (mut doc, fonts, options) = setup();
        doc.add_page(Page::new(options.page_size, Some(options.margins.clone())));
        stamp_footers(&mut doc, fonts, options.footer_size).unwrap();

        let page = &doc.pages[doc.page_order[0]];
        if let Some(PageContents::Text(spans)) = page.contents.first() {
            let span = &spans[0];
            let width = width_of_text(&span.text, &doc.fonts[fonts.regular], options.footer_size);
            assert!((span.coords.0 + width - page.content_box.x2).0.abs() < 1e-3);
        } else {
            panic!("footer span missing");
        }
    }
}
