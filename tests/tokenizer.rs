use nestcheck::{TokenKind, tokenize};
use rstest::rstest;

#[rstest]
#[case("(", TokenKind::Open)]
#[case("[", TokenKind::Open)]
#[case("{", TokenKind::Open)]
#[case("<", TokenKind::Open)]
#[case(")", TokenKind::Close)]
#[case("]", TokenKind::Close)]
#[case("}", TokenKind::Close)]
#[case(">", TokenKind::Close)]
#[case("\"", TokenKind::Quote)]
#[case("'", TokenKind::Quote)]
#[case("a", TokenKind::Text)]
#[case(" ", TokenKind::Text)]
#[case("\n", TokenKind::Text)]
fn single_characters(#[case] source: &str, #[case] expected: TokenKind) {
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), 1);
    let first = tokens.first().cloned().unwrap_or_else(|| panic!("no token"));
    assert_eq!(first.0, expected);
    assert_eq!(first.1, 0..source.len());
}

#[rstest]
fn one_token_per_character() {
    let source = "({'x'})";
    let tokens = tokenize(source);
    assert_eq!(tokens.len(), source.chars().count());
}

#[rstest]
fn spans_tile_the_input() {
    let source = "[\"ab\"]<>";
    let mut end = 0;
    for (_, span) in tokenize(source) {
        assert_eq!(span.start, end);
        end = span.end;
    }
    assert_eq!(end, source.len());
}

#[rstest]
fn multibyte_scalar_is_single_text_token() {
    let source = "(\u{3042})";
    let tokens = tokenize(source);
    let kinds: Vec<TokenKind> = tokens.iter().map(|(k, _)| *k).collect();
    assert_eq!(kinds, vec![TokenKind::Open, TokenKind::Text, TokenKind::Close]);
    let middle = tokens.get(1).cloned().unwrap_or_else(|| panic!("no token"));
    assert_eq!(middle.1, 1..4);
}
