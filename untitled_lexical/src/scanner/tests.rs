use super::{tokenize, Scanner, State};
use crate::token::{BrainfuckKind, KeywordKind, Token, TokenKind};

/// Lexes the source and pairs every token kind with its text.
fn lex(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect()
}

fn expect(source: &str, expected: &[(TokenKind, &str)]) {
    let expected = expected
        .iter()
        .map(|(kind, text)| (*kind, (*text).to_string()))
        .collect::<Vec<_>>();

    assert_eq!(lex(source), expected, "source: {source:?}");
}

/// Lexes the source and expects the stream to end with the given error message.
fn expect_error(source: &str, message: &str) {
    let tokens = tokenize(source);
    let last = tokens.last().expect("the stream is never empty");

    assert_eq!(last.kind, TokenKind::Error, "source: {source:?}, got {tokens:?}");
    assert_eq!(last.text, message, "source: {source:?}");
    assert_eq!(
        tokens.iter().filter(|token| token.is_terminal()).count(),
        1,
        "only the last token is terminal"
    );
}

const EOF: (TokenKind, &str) = (TokenKind::EndOfInput, "");

#[test]
fn empty_input() {
    expect("", &[EOF]);
    expect(" \t\r\n ", &[EOF]);
}

#[test]
fn maximal_munch() {
    expect("+=+", &[(TokenKind::PlusEqual, "+="), (TokenKind::Plus, "+"), EOF]);
    expect("+++", &[(TokenKind::PlusPlus, "++"), (TokenKind::Plus, "+"), EOF]);
    expect("--=", &[(TokenKind::MinusMinus, "--"), (TokenKind::Assign, "="), EOF]);
    expect("===", &[(TokenKind::Equal, "=="), (TokenKind::Assign, "="), EOF]);
    expect("&&&", &[(TokenKind::And, "&&"), (TokenKind::Reference, "&"), EOF]);
    expect("<=>", &[
        (TokenKind::LessEqual, "<="),
        (TokenKind::Greater, ">"),
        EOF,
    ]);
    expect("!!=", &[(TokenKind::Not, "!"), (TokenKind::NotEqual, "!="), EOF]);
    expect("*=*", &[(TokenKind::StarEqual, "*="), (TokenKind::Star, "*"), EOF]);
    expect("||", &[(TokenKind::Or, "||"), EOF]);
}

#[test]
fn punctuation() {
    expect("(){};,.", &[
        (TokenKind::LeftParen, "("),
        (TokenKind::RightParen, ")"),
        (TokenKind::LeftBrace, "{"),
        (TokenKind::RightBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Comma, ","),
        (TokenKind::Dot, "."),
        EOF,
    ]);
}

#[test]
fn keyword_versus_identifier() {
    expect("iffy", &[(TokenKind::Identifier, "iffy"), EOF]);
    expect("if", &[(TokenKind::Keyword(KeywordKind::If), "if"), EOF]);
    expect("func function", &[
        (TokenKind::Identifier, "func"),
        (TokenKind::Keyword(KeywordKind::Function), "function"),
        EOF,
    ]);
    expect("const type_", &[
        (TokenKind::Keyword(KeywordKind::Const), "const"),
        (TokenKind::Identifier, "type_"),
        EOF,
    ]);
}

#[test]
fn unicode_identifiers() {
    expect("größe λ1", &[
        (TokenKind::Identifier, "größe"),
        (TokenKind::Identifier, "λ1"),
        EOF,
    ]);
}

#[test]
fn numbers() {
    expect("0x1A", &[(TokenKind::Number, "0x1A"), EOF]);
    expect("0XfF 42 0", &[
        (TokenKind::Number, "0XfF"),
        (TokenKind::Number, "42"),
        (TokenKind::Number, "0"),
        EOF,
    ]);
    expect("12;", &[(TokenKind::Number, "12"), (TokenKind::Semicolon, ";"), EOF]);
}

#[test]
fn bad_numbers() {
    expect_error("0xZZ", "bad number syntax: \"0x\"");
    expect_error("12abc", "bad number syntax: \"12\"");
    expect_error("1 2x", "bad number syntax: \"2\"");
    expect_error("7λ", "bad number syntax: \"7\"");

    // letter numerals start an identifier
    expect("1Ⅻ", &[(TokenKind::Number, "1"), (TokenKind::Identifier, "Ⅻ"), EOF]);
    expect("12_", &[(TokenKind::Number, "12"), (TokenKind::Identifier, "_"), EOF]);
}

#[test]
fn floating_points_are_rejected() {
    let tokens = tokenize("3.14");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].text, "floating points not supported: \"3.14\"");
    assert_eq!(tokens[0].span, 0..4);

    expect_error("x = 0x1.f", "floating points not supported: \"0x1.f\"");
    expect_error("7.", "floating points not supported: \"7.\"");
}

#[test]
fn character_literals() {
    expect("'a' 'λ'", &[
        (TokenKind::Character, "'a'"),
        (TokenKind::Character, "'λ'"),
        EOF,
    ]);

    expect_error("'", "unterminated character constant");
    expect_error("''", "empty character constant");
    expect_error("'ab'", "invalid character constant: \"'a\"");
}

#[test]
fn invalid_operators() {
    expect_error("a | b", "invalid operator: \"|\"");
    expect_error("a / b", "invalid operator: \"/\"");
    expect_error("[", "invalid operator: \"[\"");
    expect_error("\"text\"", "invalid operator: \"\\\"\"");
}

#[test]
fn tokens_before_an_error_are_kept() {
    let tokens = tokenize("while x ^");
    let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

    assert_eq!(kinds, vec![
        TokenKind::Keyword(KeywordKind::While),
        TokenKind::Identifier,
        TokenKind::Error,
    ]);
    assert_eq!(tokens[2].span, 8..9);
}

#[test]
fn brainfuck_mode_switch() {
    expect("```+``` if", &[
        (TokenKind::Brainfuck, "```"),
        (TokenKind::BrainfuckCommand(BrainfuckKind::Increment), "+"),
        (TokenKind::Brainfuck, "```"),
        (TokenKind::Keyword(KeywordKind::If), "if"),
        EOF,
    ]);

    // no whitespace is needed after the closing delimiter
    expect("``````if", &[
        (TokenKind::Brainfuck, "```"),
        (TokenKind::Brainfuck, "```"),
        (TokenKind::Keyword(KeywordKind::If), "if"),
        EOF,
    ]);
}

#[test]
fn brainfuck_commands_and_comments() {
    use BrainfuckKind::{
        Decrement, Increment, Input, LoopClose, LoopOpen, MoveLeft, MoveRight, Output,
    };

    expect("```+-><.,[] add one\n+ if```", &[
        (TokenKind::Brainfuck, "```"),
        (TokenKind::BrainfuckCommand(Increment), "+"),
        (TokenKind::BrainfuckCommand(Decrement), "-"),
        (TokenKind::BrainfuckCommand(MoveRight), ">"),
        (TokenKind::BrainfuckCommand(MoveLeft), "<"),
        (TokenKind::BrainfuckCommand(Output), "."),
        (TokenKind::BrainfuckCommand(Input), ","),
        (TokenKind::BrainfuckCommand(LoopOpen), "["),
        (TokenKind::BrainfuckCommand(LoopClose), "]"),
        (TokenKind::BrainfuckCommand(Increment), "+"),
        (TokenKind::Brainfuck, "```"),
        EOF,
    ]);
}

#[test]
fn brainfuck_identifier() {
    expect("```(  foo )+```", &[
        (TokenKind::Brainfuck, "```"),
        (TokenKind::Identifier, "foo"),
        (TokenKind::BrainfuckCommand(BrainfuckKind::Increment), "+"),
        (TokenKind::Brainfuck, "```"),
        EOF,
    ]);

    expect("```(bar)```", &[
        (TokenKind::Brainfuck, "```"),
        (TokenKind::Identifier, "bar"),
        (TokenKind::Brainfuck, "```"),
        EOF,
    ]);

    let tokens = tokenize("```(\tfoo)```");
    assert_eq!(tokens[1].span, 5..8);
}

#[test]
fn brainfuck_errors() {
    expect_error("```(   )```", "invalid identifier \")\"");
    expect_error("```(", "invalid identifier \"\"");
    expect_error("```( foo bar)```", "expected ')' to close identifier");
    expect_error("```)```", "unmatched ')'");
    expect_error("```+", "unmatched triple-backtick");
    expect_error("```+``", "failed to exit brainfuck mode: \"``\"");
    expect_error("`` +", "failed to enter brainfuck mode: \"``\"");
    expect_error("`", "failed to enter brainfuck mode: \"`\"");
}

#[test]
fn unmatched_brainfuck_ends_the_stream() {
    let tokens = tokenize("```");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Brainfuck);
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].text, "unmatched triple-backtick");
}

#[test]
fn invalid_encoding() {
    let tokens = tokenize(b"abc \xc3\x28");

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![TokenKind::Identifier, TokenKind::Error]
    );
    assert_eq!(tokens[1].text, "invalid UTF-8 encoding");
    assert_eq!(tokens[1].span, 4..4);
}

#[test]
fn state_transitions() {
    let mut scanner = Scanner::new("a 1");

    assert_eq!(scanner.state(), Some(State::Start));
    assert_eq!(scanner.step(), Some(State::Text));
    assert_eq!(scanner.step(), Some(State::Start));
    assert_eq!(scanner.step(), Some(State::WhiteSpace));
    assert_eq!(scanner.step(), Some(State::Start));
    assert_eq!(scanner.step(), Some(State::Number));
    assert_eq!(scanner.step(), Some(State::Start));
    assert_eq!(scanner.step(), None);
    assert_eq!(scanner.step(), None);

    let tokens = scanner.collect::<Vec<_>>();
    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![TokenKind::Identifier, TokenKind::Number, TokenKind::EndOfInput]
    );
}

#[test]
fn brainfuck_state_transitions() {
    let mut scanner = Scanner::new("```(x)```");

    assert_eq!(scanner.step(), Some(State::Operator));
    assert_eq!(scanner.step(), Some(State::Brainfuck));
    assert_eq!(scanner.step(), Some(State::BrainfuckIdentifier));
    assert_eq!(scanner.step(), Some(State::Brainfuck));
    assert_eq!(scanner.step(), Some(State::Start));
}

#[test]
fn scanner_is_fused() {
    let mut scanner = Scanner::new("x");

    assert_eq!(scanner.next().map(|token| token.kind), Some(TokenKind::Identifier));
    assert_eq!(scanner.next().map(|token| token.kind), Some(TokenKind::EndOfInput));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

#[test]
fn spans_cover_the_token_text() {
    let source = "function  main(){ x += 0x10; }";

    for token in tokenize(source) {
        let Token { kind, text, span } = token;

        if kind != TokenKind::EndOfInput {
            assert_eq!(&source[span], text);
        }
    }
}
