use prova_gen::sheet::{pdf_bytes, Question, SheetOptions};

fn main() {
    // a short sheet: three questions, defaults for everything else
    let questions = vec![
        Question::new(
            "Qual é o resultado de 7 × 8?",
            vec!["54".to_string(), "56".to_string(), "58".to_string()],
            "56",
        ),
        Question::new(
            "A água ferve a 100 °C ao nível do mar?",
            vec!["sim".to_string(), "não".to_string()],
            "sim",
        ),
        Question::new(
            "Qual é o plural de cidadão?",
            vec![
                "cidadões".to_string(),
                "cidadãos".to_string(),
                "cidadães".to_string(),
            ],
            "cidadãos",
        ),
    ];

    // lay the sheet out and serialize it in one go
    let bytes = pdf_bytes(
        &questions,
        "Prova Mensal",
        Some("Matemática"),
        SheetOptions::default(),
    )
    .expect("can lay out the sheet");

    // save it next to the demo; any Write target would do
    std::fs::write("prova.pdf", bytes).expect("can write the file");
}
