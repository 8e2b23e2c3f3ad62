/// One multiple-choice question, as produced by whatever authored the
/// exam; the sheet layout makes no assumptions about the source.
///
/// `options` is already in display order; the sheet never shuffles.
/// `correct_answer` should match one of `options` exactly, but this is
/// not enforced: a question whose answer is missing from its options
/// still renders, and its answer-key entry falls back to `'?'`.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The question text. Expected to be non-empty.
    pub statement: String,
    /// Candidate answers, in the order they should be printed.
    pub options: Vec<String>,
    /// The text of the correct option, compared by exact string match.
    pub correct_answer: String,
}

impl Question {
    pub fn new<S, C>(statement: S, options: Vec<String>, correct_answer: C) -> Question
    where
        S: Into<String>,
        C: Into<String>,
    {
        Question {
            statement: statement.into(),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    /// The answer-key letter for this question: `'A'` plus the position
    /// of `correct_answer` within `options`. [None] when the correct
    /// answer does not appear among the options verbatim (or sits past
    /// the alphabet, which no real sheet reaches).
    pub fn correct_letter(&self) -> Option<char> {
        self.options
            .iter()
            .position(|option| option == &self.correct_answer)
            .filter(|&index| index < 26)
            .map(|index| (b'A' + index as u8) as char)
    }
}
