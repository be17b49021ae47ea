use shared_types::Token;
use std::iter::Peekable;
use std::str::CharIndices;

const WORD_JOINERS: &[char] = &['\'', '\u{2019}', '-'];
const NUMBER_JOINERS: &[char] = &['.', ',', '-'];

/// Splits a line into words, numbers and single punctuation/symbol tokens.
///
/// Apostrophes and hyphens stay inside a word only when letters follow them
/// ("O'Brien", "Smith-Jones"); separators inside numbers behave the same way.
/// Every other non-space character becomes its own token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, ch)) = chars.next() {
            if ch.is_whitespace() {
                continue;
            }

            let mut end = start + ch.len_utf8();
            if ch.is_alphabetic() {
                end = consume(text, &mut chars, end, char::is_alphabetic, WORD_JOINERS);
            } else if ch.is_ascii_digit() {
                end = consume(text, &mut chars, end, |c| c.is_ascii_digit(), NUMBER_JOINERS);
            }

            tokens.push(Token {
                text: text[start..end].to_string(),
                start,
                end,
            });
        }

        tokens
    }
}

fn consume(
    text: &str,
    chars: &mut Peekable<CharIndices<'_>>,
    mut end: usize,
    is_part: fn(char) -> bool,
    joiners: &[char],
) -> usize {
    while let Some(&(i, c)) = chars.peek() {
        let joined = joiners.contains(&c)
            && text[i + c.len_utf8()..]
                .chars()
                .next()
                .is_some_and(is_part);

        if is_part(c) || joined {
            chars.next();
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    end
}
