//! Syntax checker
//!
//! There is no grammar here. One pass over the tokens fires two
//! independent checks per token: an identifier-adjacency heuristic and
//! local validation of `if` constructs. Brackets are matched by literal
//! token text regardless of kind, and nested parentheses inside a
//! condition are not tracked.

use crate::common::Report;
use crate::lexer::{Token, TokenKind, find_text, skip_whitespace};

/// Check the token stream; always completes and returns a full report
pub fn check_syntax(tokens: &[Token], keywords: &[&str]) -> Report {
    let mut report = Report::new();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];

        if token.kind == TokenKind::Identifier && !keywords.contains(&token.text.as_str()) {
            if !has_plausible_predecessor(tokens, index) {
                report.error(format!("invalid identifier '{}'", token.text), token.span);
            }
            index += 1;
            continue;
        }

        if token.kind == TokenKind::Keyword && token.text == "if" {
            index = check_if_construct(tokens, index, &mut report);
            continue;
        }

        index += 1;
    }

    report
}

/// An identifier is plausible when a keyword, operator, or whitespace
/// token immediately precedes it. An identifier with no predecessor at
/// all is reported.
fn has_plausible_predecessor(tokens: &[Token], index: usize) -> bool {
    index > 0
        && matches!(
            tokens[index - 1].kind,
            TokenKind::Keyword | TokenKind::Operator | TokenKind::Whitespace
        )
}

/// Validate one `if` construct; returns the index the main scan resumes
/// from.
fn check_if_construct(tokens: &[Token], if_index: usize, report: &mut Report) -> usize {
    let if_span = tokens[if_index].span;

    let open = skip_whitespace(tokens, if_index + 1);
    if open >= tokens.len() || tokens[open].text != "(" {
        report.error("missing '(' after 'if'", if_span);
        return if_index + 1;
    }

    let Some(close) = find_text(tokens, open + 1, ")") else {
        report.error("missing ')' in if condition", if_span);
        return if_index + 1;
    };

    // The token immediately after ')' must open the body; whitespace in
    // between is not skipped.
    if close + 1 >= tokens.len() || tokens[close + 1].text != "{" {
        report.error("missing '{' after if", if_span);
        return if_index + 1;
    }

    report.note("valid if structure", if_span);
    close + 2
}
