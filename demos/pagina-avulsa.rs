use prova_gen::layout::{self, Margins};
use prova_gen::pagesize;
use prova_gen::{colours, Document, Font, Page, Pt, SpanFont, SpanLayout};
use prova_gen::{In, Info};

// The sheet layout in prova_gen::sheet is a convenience; pages can also
// be assembled by hand with the low-level document API.
fn main() {
    let mut doc = Document::default();
    let helvetica = doc.add_font(Font::helvetica());
    doc.set_info(
        Info::new()
            .title("Página avulsa")
            .subject("exemplo da API de baixo nível")
            .clone(),
    );

    let mut page = Page::new(pagesize::A4, Some(Margins::all(In(0.5).into())));

    // place text at the top-left of the content box, baseline-aligned
    let start = layout::baseline_start(&page, &doc.fonts[helvetica], Pt(16.0));
    page.add_span(SpanLayout {
        text: "Olá, mundo!".to_string(),
        font: SpanFont {
            id: helvetica,
            size: Pt(16.0),
        },
        colour: colours::BLACK,
        coords: start,
        word_spacing: Pt(0.0),
    });

    doc.add_page(page);

    let mut out = std::fs::File::create("pagina-avulsa.pdf").expect("can create the file");
    doc.write(&mut out).expect("can render the document");
}
