use super::draw::draw_items;
use super::items::question_items;
use super::{Question, SheetFonts, SheetOptions, LINE_HEIGHT_FACTOR, SPACE_AFTER_QUESTION};
use crate::document::Document;
use crate::page::Page;
use crate::units::Pt;

/// Which of the two columns is currently being filled
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ActiveColumn {
    Left,
    Right,
}

/// The writing position of both columns plus which one is active. An
/// explicit value, not captured mutable state, so every transition is a
/// plain assignment that tests can observe.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct LayoutCursor {
    pub left_y: Pt,
    pub right_y: Pt,
    pub active: ActiveColumn,
}

impl LayoutCursor {
    fn new(top: Pt) -> LayoutCursor {
        LayoutCursor {
            left_y: top,
            right_y: top,
            active: ActiveColumn::Left,
        }
    }

    fn active_y(&self) -> Pt {
        match self.active {
            ActiveColumn::Left => self.left_y,
            ActiveColumn::Right => self.right_y,
        }
    }

    fn set_active_y(&mut self, y: Pt) {
        match self.active {
            ActiveColumn::Left => self.left_y = y,
            ActiveColumn::Right => self.right_y = y,
        }
    }

    /// Fresh-page state: both columns at the top, writing on the left
    fn reset(&mut self, top: Pt) {
        self.left_y = top;
        self.right_y = top;
        self.active = ActiveColumn::Left;
    }
}

/// Greedy two-column flow over unbounded pages.
///
/// Questions are placed forward-only: fill the left column, then the
/// right, then start a new page. There is no backtracking, no re-flow of
/// earlier pages, and no attempt to balance column heights. A question
/// that doesn't fit simply continues wherever writing resumes, which may
/// be the other column or another page.
pub(crate) struct ColumnFlow<'a> {
    doc: &'a mut Document,
    fonts: SheetFonts,
    options: &'a SheetOptions,
    /// The page currently receiving content; added to the document when
    /// it fills up (or at [ColumnFlow::finish])
    page: Page,
    cursor: LayoutCursor,
}

impl<'a> ColumnFlow<'a> {
    /// Start flowing below `start_y` on `first_page` (typically the page
    /// the header was just drawn on).
    pub fn new(
        doc: &'a mut Document,
        fonts: SheetFonts,
        options: &'a SheetOptions,
        first_page: Page,
        start_y: Pt,
    ) -> ColumnFlow<'a> {
        ColumnFlow {
            doc,
            fonts,
            options,
            page: first_page,
            cursor: LayoutCursor::new(start_y),
        }
    }

    pub fn column_width(&self) -> Pt {
        (self.page.content_box.width() - self.options.column_gap) / 2.0
    }

    fn column_x(&self, column: ActiveColumn) -> Pt {
        match column {
            ActiveColumn::Left => self.page.content_box.x1,
            ActiveColumn::Right => {
                self.page.content_box.x1 + self.column_width() + self.options.column_gap
            }
        }
    }

    fn content_bottom(&self) -> Pt {
        self.page.content_box.y1
    }

    /// A column needs at least this much room (two lines) before a draw
    /// is attempted; anything less would leave a dangling single line
    fn min_draw_height(&self) -> Pt {
        self.options.font_size * LINE_HEIGHT_FACTOR * 2.0
    }

    /// Give up on the active column: move left→right, or right→fresh
    /// page. The right column's cursor is never touched by a left→right
    /// transition; it continues from wherever it already was.
    fn advance(&mut self) {
        match self.cursor.active {
            ActiveColumn::Left => {
                self.cursor.active = ActiveColumn::Right;
            }
            ActiveColumn::Right => {
                let fresh = Page::new(self.options.page_size, Some(self.options.margins.clone()));
                let filled = std::mem::replace(&mut self.page, fresh);
                self.doc.add_page(filled);
                let top = self.page.content_box.y2;
                self.cursor.reset(top);
                log::trace!("sheet content overflowed onto page {}", self.doc.page_order.len() + 1);
            }
        }
    }

    /// Lay out one question wherever the cursor currently is. The
    /// question's content may span the left column, the right column,
    /// and any number of pages.
    pub fn place_question(&mut self, index: usize, question: &Question) {
        let mut items = question_items(index, question);

        while !items.is_empty() {
            let available = self.cursor.active_y() - self.content_bottom();
            if available < self.min_draw_height() {
                self.advance();
                continue;
            }

            let origin = (self.column_x(self.cursor.active), self.cursor.active_y());
            let column_width = self.column_width();
            let result = draw_items(
                self.doc,
                &mut self.page,
                self.fonts,
                self.options.font_size,
                &items,
                origin,
                column_width,
                available,
            );

            self.cursor.set_active_y(result.y_after);
            if result.remaining.is_empty() {
                items.clear();
            } else {
                items = result.remaining;
                self.advance();
            }
        }

        // the question is fully drawn; separate it from the next one
        self.cursor
            .set_active_y(self.cursor.active_y() - SPACE_AFTER_QUESTION);
    }

    /// Flush the page being filled into the document.
    pub fn finish(self) {
        self.doc.add_page(self.page);
    }
}
