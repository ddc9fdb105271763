use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_till1, take_while1},
    combinator::map,
    multi::many0,
};
use crate::query::ast::{BooleanQuery, Conjunction, Literal};

const NOT_PREFIX: &str = "not(";
const NOT_SUFFIX: char = ')';
const OR_WORD: &str = "or";

/// Lexeme of a lower-cased query. Whitespace runs are kept as `Gap` so the
/// parser can see exactly what surrounds an `or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'a> {
    Or,
    And,
    Word(&'a str),
    Gap(&'a str),
}

impl<'a> Lexeme<'a> {
    fn classify(word: &'a str) -> Self {
        match word {
            OR_WORD => Lexeme::Or,
            "and" => Lexeme::And,
            _ => Lexeme::Word(word),
        }
    }
}

fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
        map(take_while1(char::is_whitespace), Lexeme::Gap),
        map(take_till1(char::is_whitespace), Lexeme::classify),
    ))
    .parse(input)
}

/// Split a lower-cased query into keyword, word and whitespace lexemes.
pub fn lex(input: &str) -> Vec<Lexeme<'_>> {
    many0(lexeme)
        .parse(input)
        .map(|(_, lexemes)| lexemes)
        .unwrap_or_default()
}

/// Parses the boolean grammar into DNF.
///
/// `or` separates AND-groups only when written as `" or "`, a plain space on
/// each side; one space cannot serve two separators. Any other `or` is an
/// ordinary word. `and` separates literals as a whole word. The words between
/// two separators form one literal, joined with a single space. A literal
/// written `not(<term>)` is negated.
///
/// Examples:
/// - "red and not(blue)" -> [[red, NOT blue]]
/// - "blue or green" -> [[blue], [green]]
/// - "sandbox and sand" -> [[sandbox, sand]]
/// - "or blue" -> [["or blue"]]
#[derive(Debug, Clone, Default)]
pub struct QueryParser;

impl QueryParser {
    pub fn new() -> Self {
        QueryParser
    }

    pub fn parse(&self, input: &str) -> BooleanQuery {
        let lowered = input.to_lowercase();
        let lexemes = lex(&lowered);
        let mut query = BooleanQuery::new();
        let mut conjunction = Conjunction::new();
        let mut words: Vec<&str> = Vec::new();
        let mut consumed_gap = None;

        for (at, lexeme) in lexemes.iter().enumerate() {
            match *lexeme {
                Lexeme::Gap(_) => {}
                Lexeme::Word(word) => words.push(word),
                Lexeme::And => flush_literal(&mut conjunction, &mut words),
                Lexeme::Or if is_or_separator(&lexemes, at, consumed_gap) => {
                    flush_literal(&mut conjunction, &mut words);
                    query.conjunctions.push(std::mem::take(&mut conjunction));
                    consumed_gap = Some(at + 1);
                }
                Lexeme::Or => words.push(OR_WORD),
            }
        }

        flush_literal(&mut conjunction, &mut words);
        query.conjunctions.push(conjunction);

        query
    }
}

/// True when the `or` at `at` sits between a gap ending in a space and a gap
/// starting with one. `consumed_gap` is the gap whose leading space already
/// closed the previous separator.
fn is_or_separator(lexemes: &[Lexeme<'_>], at: usize, consumed_gap: Option<usize>) -> bool {
    let before = match at.checked_sub(1).map(|i| (i, lexemes[i])) {
        Some((i, Lexeme::Gap(gap))) if consumed_gap == Some(i) => &gap[1..],
        Some((_, Lexeme::Gap(gap))) => gap,
        _ => return false,
    };

    match lexemes.get(at + 1) {
        Some(Lexeme::Gap(after)) => before.ends_with(' ') && after.starts_with(' '),
        _ => false,
    }
}

fn flush_literal(conjunction: &mut Conjunction, words: &mut Vec<&str>) {
    if words.is_empty() {
        return;
    }

    let text = words.join(" ");
    words.clear();
    conjunction.literals.push(parse_literal(&text));
}

fn parse_literal(text: &str) -> Literal {
    match text
        .strip_prefix(NOT_PREFIX)
        .and_then(|rest| rest.strip_suffix(NOT_SUFFIX))
    {
        Some(inner) => Literal::negated(inner.trim()),
        None => Literal::positive(text),
    }
}
