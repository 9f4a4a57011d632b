//! Selection-to-markup transformation.
//!
//! `format_replacement` computes the markup for one action from the selected
//! text. `apply_format` splices it into a `TextBuffer` and reports where the
//! cursor goes. Neither validates or escapes existing Markdown.

use crate::actions::FormatAction;
use crate::text::TextBuffer;
use crate::types::Selection;

/// Source of URLs for link and image actions.
pub trait UrlPrompt {
    /// Ask the user for a URL. `None` means the user cancelled.
    fn prompt_url(&mut self, message: &str) -> Option<String>;
}

impl<F> UrlPrompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn prompt_url(&mut self, message: &str) -> Option<String> {
        self(message)
    }
}

/// A prompt that always cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl UrlPrompt for NoPrompt {
    fn prompt_url(&mut self, _message: &str) -> Option<String> {
        None
    }
}

/// What happened when an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The buffer was rewritten; `cursor` is the new collapsed cursor offset.
    Applied { cursor: usize },
    /// The URL prompt was cancelled. Buffer and cursor are untouched.
    Cancelled,
}

/// Markup replacing `selected` for `action`.
///
/// Empty `selected` uses the action's placeholder. Link and image need a
/// `url` and return `None` without one.
pub fn format_replacement(action: FormatAction, selected: &str, url: Option<&str>) -> Option<String> {
    let text = if selected.is_empty() {
        action.placeholder().unwrap_or_default()
    } else {
        selected
    };

    let replacement = match action {
        FormatAction::Bold => format!("**{text}**"),
        FormatAction::Italic => format!("*{text}*"),
        FormatAction::Heading => format!("\n# {text}\n"),
        FormatAction::Center => format!("<center>{text}</center>"),
        FormatAction::Link => format!("[{text}]({})", url?),
        FormatAction::Image => format!("![{text}]({})", url?),
        FormatAction::Code => format!("`{text}`"),
        FormatAction::CodeBlock => format!("\n```\n{text}\n```\n"),
        FormatAction::Quote => format!("\n> {text}\n"),
        // The placeholder goes in bare, without a list marker.
        FormatAction::UnorderedList if selected.is_empty() => format!("\n{text}\n"),
        FormatAction::UnorderedList => {
            format!("\n{}\n", prefix_lines(selected, |_| "- ".to_string()))
        }
        FormatAction::OrderedList if selected.is_empty() => format!("\n{text}\n"),
        FormatAction::OrderedList => {
            format!("\n{}\n", prefix_lines(selected, |i| format!("{}. ", i + 1)))
        }
        FormatAction::HorizontalRule => "\n\n---\n\n".to_string(),
    };

    Some(replacement)
}

/// Prefix every non-empty line. `marker` gets the 0-based line index,
/// counting empty lines too.
fn prefix_lines(text: &str, marker: impl Fn(usize) -> String) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{line}", marker(i))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply `action` to the selected range of `buffer`.
///
/// Afterwards the buffer is `before + replacement + after` and the cursor
/// sits at the end of the replacement. The selection is clamped to the
/// buffer first.
pub fn apply_format<T, P>(
    buffer: &mut T,
    selection: Selection,
    action: FormatAction,
    prompt: &mut P,
) -> FormatOutcome
where
    T: TextBuffer + ?Sized,
    P: UrlPrompt + ?Sized,
{
    let range = selection.clamp(buffer.len_chars()).to_range();
    let selected = buffer.slice(range.clone()).unwrap_or_default();

    let url = match action.url_prompt() {
        Some(message) => match prompt.prompt_url(message) {
            Some(url) if !url.is_empty() => Some(url),
            _ => {
                tracing::debug!(%action, "url prompt cancelled");
                return FormatOutcome::Cancelled;
            }
        },
        None => None,
    };

    let Some(replacement) = format_replacement(action, &selected, url.as_deref()) else {
        return FormatOutcome::Cancelled;
    };

    let start = range.start;
    buffer.replace(range, &replacement);
    let cursor = start + replacement.chars().count();

    tracing::debug!(%action, start, cursor, "applied format");
    FormatOutcome::Applied { cursor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::EditorRope;

    fn run(content: &str, selection: Selection, action: FormatAction) -> (String, FormatOutcome) {
        let mut rope = EditorRope::from(content);
        let outcome = apply_format(&mut rope, selection, action, &mut NoPrompt);
        (rope.to_string(), outcome)
    }

    fn run_with_url(
        content: &str,
        selection: Selection,
        action: FormatAction,
        url: Option<&str>,
    ) -> (String, FormatOutcome) {
        let mut rope = EditorRope::from(content);
        let mut prompt = |_: &str| url.map(str::to_string);
        let outcome = apply_format(&mut rope, selection, action, &mut prompt);
        (rope.to_string(), outcome)
    }

    #[test]
    fn test_bold_selection() {
        let (text, outcome) = run("Hello world", Selection::new(6, 11), FormatAction::Bold);
        assert_eq!(text, "Hello **world**");
        assert_eq!(outcome, FormatOutcome::Applied { cursor: 15 });
    }

    #[test]
    fn test_backwards_selection() {
        let (text, _) = run("Hello world", Selection::new(11, 6), FormatAction::Italic);
        assert_eq!(text, "Hello *world*");
    }

    #[test]
    fn test_placeholders_for_empty_selection() {
        let cases = [
            (FormatAction::Bold, "**bold text**"),
            (FormatAction::Italic, "*italic text*"),
            (FormatAction::Heading, "\n# Heading\n"),
            (FormatAction::Center, "<center>Centered text</center>"),
            (FormatAction::Code, "`code`"),
            (FormatAction::CodeBlock, "\n```\ncode block\n```\n"),
            (FormatAction::Quote, "\n> quote\n"),
            (FormatAction::UnorderedList, "\nlist item\n"),
            (FormatAction::OrderedList, "\nlist item\n"),
        ];

        for (action, expected) in cases {
            let (text, outcome) = run("ab", Selection::collapsed(1), action);
            assert_eq!(text, format!("a{expected}b"), "{action}");
            assert_eq!(
                outcome,
                FormatOutcome::Applied {
                    cursor: 1 + expected.chars().count()
                },
                "{action}"
            );
        }
    }

    #[test]
    fn test_selection_preserved_verbatim() {
        let selected = "x *y* `z`";
        for action in [
            FormatAction::Bold,
            FormatAction::Italic,
            FormatAction::Heading,
            FormatAction::Center,
            FormatAction::Code,
            FormatAction::CodeBlock,
            FormatAction::Quote,
        ] {
            let replacement = format_replacement(action, selected, None).unwrap();
            assert!(replacement.contains(selected), "{action}: {replacement:?}");
        }
    }

    #[test]
    fn test_unordered_list_lines() {
        let (text, _) = run("a\nb\nc", Selection::new(0, 5), FormatAction::UnorderedList);
        assert_eq!(text, "\n- a\n- b\n- c\n");
        assert_eq!(text.trim_matches('\n').lines().count(), 3);
    }

    #[test]
    fn test_ordered_list_lines() {
        let (text, _) = run("a\nb\nc", Selection::new(0, 5), FormatAction::OrderedList);
        assert_eq!(text, "\n1. a\n2. b\n3. c\n");
    }

    #[test]
    fn test_list_skips_empty_lines() {
        let replacement = format_replacement(FormatAction::OrderedList, "a\n\nc", None).unwrap();
        // Empty lines keep their slot in the numbering.
        assert_eq!(replacement, "\n1. a\n\n3. c\n");

        let replacement = format_replacement(FormatAction::UnorderedList, "a\n\nc", None).unwrap();
        assert_eq!(replacement, "\n- a\n\n- c\n");
    }

    #[test]
    fn test_horizontal_rule_discards_selection() {
        let (text, outcome) = run("keep drop keep", Selection::new(5, 9), FormatAction::HorizontalRule);
        assert_eq!(text, "keep \n\n---\n\n keep");
        assert_eq!(outcome, FormatOutcome::Applied { cursor: 5 + 7 });
    }

    #[test]
    fn test_link_with_url() {
        let (text, outcome) = run_with_url(
            "see docs",
            Selection::new(4, 8),
            FormatAction::Link,
            Some("https://example.com"),
        );
        assert_eq!(text, "see [docs](https://example.com)");
        assert_eq!(
            outcome,
            FormatOutcome::Applied {
                cursor: text.chars().count()
            }
        );
    }

    #[test]
    fn test_image_placeholder() {
        let (text, _) = run_with_url("", Selection::collapsed(0), FormatAction::Image, Some("a.png"));
        assert_eq!(text, "![image](a.png)");
    }

    #[test]
    fn test_cancelled_prompt_leaves_buffer() {
        for action in [FormatAction::Link, FormatAction::Image] {
            for url in [None, Some("")] {
                let (text, outcome) = run_with_url("Hello world", Selection::new(6, 11), action, url);
                assert_eq!(text, "Hello world");
                assert_eq!(outcome, FormatOutcome::Cancelled);
            }
        }
    }

    #[test]
    fn test_prompt_message() {
        let mut rope = EditorRope::from("");
        let mut seen = Vec::new();
        let mut prompt = |msg: &str| -> Option<String> {
            seen.push(msg.to_string());
            None
        };
        apply_format(&mut rope, Selection::default(), FormatAction::Image, &mut prompt);
        apply_format(&mut rope, Selection::default(), FormatAction::Link, &mut prompt);
        assert_eq!(seen, vec!["Enter image URL:", "Enter URL:"]);
    }

    #[test]
    fn test_non_prompting_actions_ignore_prompt() {
        let mut rope = EditorRope::from("x");
        let mut prompt = |_: &str| -> Option<String> { panic!("should not prompt") };
        apply_format(&mut rope, Selection::new(0, 1), FormatAction::Bold, &mut prompt);
        assert_eq!(rope.to_string(), "**x**");
    }

    #[test]
    fn test_cursor_counts_chars() {
        let (text, outcome) = run("ünï", Selection::new(0, 3), FormatAction::Bold);
        assert_eq!(text, "**ünï**");
        assert_eq!(outcome, FormatOutcome::Applied { cursor: 7 });
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let (text, _) = run("abc", Selection::new(1, 99), FormatAction::Code);
        assert_eq!(text, "a`bc`");
    }
}
