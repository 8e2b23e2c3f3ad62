//! The exam-sheet layout engine: questions in, a paginated two-column
//! PDF out.
//!
//! The entry points are [compose] (returns the assembled
//! [Document](crate::Document)), [pdf_bytes], and [data_uri]. Layout is
//! greedy and forward-only: the left column fills first, then the right,
//! then a new page starts; questions split across columns and pages
//! wherever they run out of room, and a trailing "Gabarito Oficial" page
//! maps every question to its correct option's letter.

mod answer_key;
mod draw;
mod flow;
mod header;
mod items;
mod question;
mod render;

pub use question::Question;
pub use render::{compose, data_uri, pdf_bytes};

use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::units::{In, Pt};
use id_arena::Id;

/// Vertical advance per wrapped line, as a multiple of the font size.
pub(crate) const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Gap below a question statement, before its first option.
pub(crate) const SPACE_AFTER_STATEMENT: Pt = Pt(4.0);

/// Gap between consecutive options of one question.
pub(crate) const SPACE_BETWEEN_OPTIONS: Pt = Pt(2.0);

/// Gap below a fully-drawn question, before the next one.
pub(crate) const SPACE_AFTER_QUESTION: Pt = Pt(10.0);

/// The two faces every sheet is set in.
#[derive(Debug, Copy, Clone)]
pub(crate) struct SheetFonts {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
}

/// Knobs for sheet geometry and typography. The defaults produce an A4
/// sheet with half-inch margins, 10 pt body text, and no logo.
pub struct SheetOptions {
    /// Paper format of every page
    pub page_size: PageSize,
    /// Page margins; the content (columns, header, answer key) lives
    /// inside them
    pub margins: Margins,
    /// Horizontal gap between the two question columns
    pub column_gap: Pt,
    /// Body text size; line height is 1.2× this
    pub font_size: Pt,
    /// Size of the sheet title and the answer-key title
    pub title_size: Pt,
    /// Size of the page-number footers
    pub footer_size: Pt,
    /// Institution logo for the header, if any
    pub logo: Option<Image>,
}

impl Default for SheetOptions {
    fn default() -> Self {
        SheetOptions {
            page_size: pagesize::A4,
            margins: Margins::all(In(0.5).into()),
            column_gap: In(0.25).into(),
            font_size: Pt(10.0),
            title_size: Pt(14.0),
            footer_size: Pt(8.0),
            logo: None,
        }
    }
}
