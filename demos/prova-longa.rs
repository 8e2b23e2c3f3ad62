use prova_gen::sheet::{compose, Question, SheetOptions};

fn main() {
    // enough filler questions to spill over both columns and several
    // pages, which is where the column flow earns its keep
    let questions: Vec<Question> = (1..=24usize)
        .map(|i| {
            let options = vec![
                lipsum::lipsum_words(4),
                lipsum::lipsum_words(6),
                lipsum::lipsum_words(5),
                lipsum::lipsum_words(3),
            ];
            let correct = options[i % 4].clone();
            Question::new(
                format!("Questão {i}: {}", lipsum::lipsum(40)),
                options,
                correct,
            )
        })
        .collect();

    let doc = compose(
        &questions,
        "Prova Bimestral",
        Some("Língua Portuguesa"),
        SheetOptions::default(),
    )
    .expect("can lay out the sheet");
    eprintln!(
        "laid out {} questions across {} pages",
        questions.len(),
        doc.page_order.len()
    );

    let mut out = std::fs::File::create("prova-longa.pdf").expect("can create the file");
    doc.write(&mut out).expect("can render the document");
}
