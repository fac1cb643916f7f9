//! Semantic checker
//!
//! A single pass rebuilds a fresh symbol table from declarations and
//! flags redeclaration and use of undeclared names. Uses of declared
//! names are not type-checked further.

use super::symbols::{SymbolTable, VarType};
use crate::common::Report;
use crate::lexer::{Token, TokenKind, skip_whitespace};

/// Check the token stream; always completes and returns a full report
pub fn check_semantics(tokens: &[Token]) -> Report {
    let mut table = SymbolTable::new();
    let mut report = Report::new();
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];

        let declared_type = if token.kind == TokenKind::Keyword {
            VarType::from_keyword(&token.text)
        } else {
            None
        };

        if let Some(ty) = declared_type {
            // A type keyword that is the final token is ignored.
            if index + 1 < tokens.len() {
                index = check_declaration(tokens, index, ty, &mut table, &mut report);
                continue;
            }
        } else if token.kind == TokenKind::Identifier && !table.contains(&token.text) {
            report.error(
                format!("variable '{}' not declared", token.text),
                token.span,
            );
        }

        index += 1;
    }

    report
}

/// Handle one declaration construct starting at the type keyword; returns
/// the index the main scan resumes from.
fn check_declaration(
    tokens: &[Token],
    type_index: usize,
    ty: VarType,
    table: &mut SymbolTable,
    report: &mut Report,
) -> usize {
    let type_token = &tokens[type_index];

    let name_index = skip_whitespace(tokens, type_index + 1);
    if name_index >= tokens.len() || tokens[name_index].kind != TokenKind::Identifier {
        report.error(
            format!("missing variable name after {}", type_token.text),
            type_token.span,
        );
        return type_index + 1;
    }

    let name = &tokens[name_index];
    match table.declare(&name.text, ty) {
        Ok(()) => report.note(
            format!("variable declared: {} of type {}", name.text, ty),
            name.span,
        ),
        Err(message) => report.error(message, name.span),
    }

    // Optional literal initializer: '=' then a run of numbers and
    // whitespace, consumed without validating the expression.
    let mut next = skip_whitespace(tokens, name_index + 1);
    if next < tokens.len() && tokens[next].kind == TokenKind::Operator && tokens[next].text == "=" {
        next += 1;
        while next < tokens.len()
            && matches!(
                tokens[next].kind,
                TokenKind::Number | TokenKind::Whitespace
            )
        {
            next += 1;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn check(input: &str) -> Report {
        check_semantics(&tokenize(input))
    }

    #[test]
    fn declaration_with_initializer() {
        let report = check("int x = 5");
        assert_eq!(report.messages(), vec!["variable declared: x of type int"]);
        assert!(report.ok());
    }

    #[test]
    fn float_declaration() {
        let report = check("float f");
        assert_eq!(report.messages(), vec!["variable declared: f of type float"]);
        assert!(report.ok());
    }

    #[test]
    fn redeclaration_is_reported() {
        let report = check("int x int x");
        assert_eq!(
            report.messages(),
            vec![
                "variable declared: x of type int",
                "variable 'x' already declared",
            ]
        );
        assert!(!report.ok());
    }

    #[test]
    fn use_before_declaration_is_reported() {
        let report = check("y = 3");
        assert_eq!(report.messages(), vec!["variable 'y' not declared"]);
        assert!(!report.ok());
    }

    #[test]
    fn use_of_declared_name_is_silent() {
        let report = check("int x = 5 x");
        assert_eq!(report.messages(), vec!["variable declared: x of type int"]);
        assert!(report.ok());
    }

    #[test]
    fn undeclared_use_after_declaration() {
        let report = check("int x x + y");
        assert_eq!(
            report.messages(),
            vec![
                "variable declared: x of type int",
                "variable 'y' not declared",
            ]
        );
        assert!(!report.ok());
    }

    #[test]
    fn missing_variable_name() {
        let report = check("float +");
        assert_eq!(report.messages(), vec!["missing variable name after float"]);
        assert!(!report.ok());
    }

    #[test]
    fn keyword_after_type_keyword_is_missing_name() {
        let report = check("int if");
        assert_eq!(report.messages(), vec!["missing variable name after int"]);
    }

    #[test]
    fn trailing_type_keyword_is_ignored() {
        // The original skips a type keyword with nothing after it rather
        // than reporting a missing name.
        let report = check("int");
        assert!(report.is_empty());
        assert!(report.ok());
    }

    #[test]
    fn trailing_whitespace_after_type_keyword_reports_missing_name() {
        let report = check("int  ");
        assert_eq!(report.messages(), vec!["missing variable name after int"]);
    }

    #[test]
    fn initializer_skip_stops_at_the_next_construct() {
        let report = check("int x = 5 7 float y");
        assert_eq!(
            report.messages(),
            vec![
                "variable declared: x of type int",
                "variable declared: y of type float",
            ]
        );
        assert!(report.ok());
    }

    #[test]
    fn declaration_without_initializer_resumes_at_next_token() {
        let report = check("int x y");
        assert_eq!(
            report.messages(),
            vec![
                "variable declared: x of type int",
                "variable 'y' not declared",
            ]
        );
    }

    #[test]
    fn empty_input_completes_without_errors() {
        let report = check("");
        assert!(report.is_empty());
        assert!(report.ok());
    }

    #[test]
    fn non_type_keywords_do_not_declare() {
        let report = check("return x");
        assert_eq!(report.messages(), vec!["variable 'x' not declared"]);
    }
}
