use super::Question;

/// An atomic drawable unit: one question statement or one option. An item
/// may be split across draw calls; when that happens the undrawn tail
/// comes back as a new item with the prefix dropped, so continuation
/// lines never repeat the numbering or lettering.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ContentItem {
    /// Label printed before the text on first draw (`"3. "`, `"  b) "`);
    /// empty on continuation fragments
    pub prefix: String,
    /// The not-yet-drawn text of this item
    pub text: String,
    /// Statements print bold, options don't
    pub bold: bool,
    /// The final option of a question carries no trailing spacing
    pub last_option: bool,
}

impl ContentItem {
    /// The text as it should be wrapped and drawn: prefix and body as one
    /// run
    pub fn full_text(&self) -> String {
        format!("{}{}", self.prefix, self.text)
    }

    /// The undrawn tail of a partially-drawn item. Keeps the weight and
    /// spacing flags, drops the prefix.
    pub fn continuation(&self, rest: String) -> ContentItem {
        ContentItem {
            prefix: String::new(),
            text: rest,
            bold: self.bold,
            last_option: self.last_option,
        }
    }
}

/// Build the drawable items for one question: the numbered statement
/// followed by its lettered options, in display order.
pub(crate) fn question_items(index: usize, question: &Question) -> Vec<ContentItem> {
    let mut items = Vec::with_capacity(1 + question.options.len());

    items.push(ContentItem {
        prefix: format!("{}. ", index + 1),
        text: question.statement.clone(),
        bold: true,
        last_option: false,
    });

    let count = question.options.len();
    for (i, option) in question.options.iter().enumerate() {
        let letter = if i < 26 { (b'a' + i as u8) as char } else { '?' };
        items.push(ContentItem {
            prefix: format!("  {letter}) "),
            text: option.clone(),
            bold: false,
            last_option: i + 1 == count,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_statement_then_one_item_per_option() {
        let question = Question::new(
            "Quanto é 2 + 2?",
            vec!["3".to_string(), "4".to_string(), "5".to_string()],
            "4",
        );
        let items = question_items(4, &question);

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].prefix, "5. ");
        assert!(items[0].bold);
        assert!(!items[0].last_option);

        assert_eq!(items[1].prefix, "  a) ");
        assert_eq!(items[1].text, "3");
        assert!(!items[1].bold);
        assert!(!items[1].last_option);

        assert_eq!(items[3].prefix, "  c) ");
        assert!(items[3].last_option);
    }

    #[test]
    fn continuation_drops_the_prefix_only() {
        let item = ContentItem {
            prefix: "2. ".to_string(),
            text: "um enunciado comprido".to_string(),
            bold: true,
            last_option: false,
        };
        let rest = item.continuation("enunciado comprido".to_string());
        assert_eq!(rest.prefix, "");
        assert_eq!(rest.text, "enunciado comprido");
        assert!(rest.bold);
    }
}
