use super::answer_key::render_answer_key;
use super::flow::ColumnFlow;
use super::header::{render_header, stamp_footers};
use super::{Question, SheetFonts, SheetOptions, LINE_HEIGHT_FACTOR};
use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::page::Page;
use crate::units::Pt;
use crate::Error;
use base64::Engine;

/// Lay out a full exam sheet and return the assembled [Document], ready
/// to be written (or further decorated by the caller).
///
/// `topic` becomes the sheet title and the document title;
/// `discipline`, when given, is printed in the header and recorded as
/// the document subject.
///
/// Errors with [Error::EmptySheet] when `questions` is empty (nothing
/// is rendered), and with [Error::ContentAreaTooSmall] when the page
/// geometry in `options` leaves no room to place even a couple of lines
/// of text.
pub fn compose(
    questions: &[Question],
    topic: &str,
    discipline: Option<&str>,
    mut options: SheetOptions,
) -> Result<Document, Error> {
    if questions.is_empty() {
        return Err(Error::EmptySheet);
    }

    let probe = Page::new(options.page_size, Some(options.margins.clone()));
    let min_height = options.font_size * LINE_HEIGHT_FACTOR * 2.0;
    let column_width = (probe.content_box.width() - options.column_gap) / 2.0;
    if column_width <= Pt(0.0) || probe.content_box.height() < min_height {
        return Err(Error::ContentAreaTooSmall);
    }

    let mut doc = Document::default();
    let fonts = SheetFonts {
        regular: doc.add_font(Font::helvetica()),
        bold: doc.add_font(Font::helvetica_bold()),
    };

    let mut info = Info::new();
    info.title(topic);
    if let Some(discipline) = discipline {
        info.subject(discipline);
    }
    doc.set_info(info);

    let logo = options
        .logo
        .take()
        .map(|image| (image.aspect_ratio(), image))
        .map(|(aspect, image)| (doc.add_image(image), aspect));

    let mut first = Page::new(options.page_size, Some(options.margins.clone()));
    let start_y = render_header(
        &doc,
        &mut first,
        fonts,
        &options,
        topic,
        discipline,
        questions.len(),
        logo,
    );

    let mut flow = ColumnFlow::new(&mut doc, fonts, &options, first, start_y);
    for (index, question) in questions.iter().enumerate() {
        flow.place_question(index, question);
    }
    flow.finish();

    render_answer_key(&mut doc, fonts, &options, questions);

    stamp_footers(&mut doc, fonts, options.footer_size)?;

    log::debug!(
        "laid out {} questions across {} pages",
        questions.len(),
        doc.page_order.len()
    );

    Ok(doc)
}

/// Lay out a full exam sheet and serialize it to PDF bytes.
pub fn pdf_bytes(
    questions: &[Question],
    topic: &str,
    discipline: Option<&str>,
    options: SheetOptions,
) -> Result<Vec<u8>, Error> {
    let doc = compose(questions, topic, discipline, options)?;
    let mut out = Vec::new();
    doc.write(&mut out)?;
    Ok(out)
}

/// Lay out a full exam sheet and encode it as a
/// `data:application/pdf;base64,…` URI, ready to hand to anything that
/// downloads or embeds documents without a separate fetch step.
pub fn data_uri(
    questions: &[Question],
    topic: &str,
    discipline: Option<&str>,
    options: SheetOptions,
) -> Result<String, Error> {
    let bytes = pdf_bytes(questions, topic, discipline, options)?;
    Ok(format!(
        "data:application/pdf;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}
