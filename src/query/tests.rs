//! Query Module Tests
//!
//! ## Test Scopes
//! - **Parser**: DNF structure, whole-word keywords, `not(...)` literals.
//! - **Matcher**: AND/OR/NOT set semantics over a small corpus.
//! - **Cache**: version-keyed hits and the disabled mode.

use std::collections::BTreeSet;
use crate::core::types::Document;
use crate::query::ast::{BooleanQuery, Conjunction, Literal};
use crate::query::cache::{CachedResult, QueryCache, QueryKey, SearchMode};
use crate::query::matcher::{evaluate_boolean, BooleanMatcher};
use crate::query::parser::{lex, Lexeme, QueryParser};

fn corpus() -> Vec<Document> {
    vec![
        Document::new("a.txt", "red blue"),
        Document::new("b.txt", "red"),
        Document::new("c.txt", "green sandbox\nred"),
    ]
}

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// PARSER TESTS
// ============================================================

#[test]
fn test_lex_classifies_keywords() {
    assert_eq!(
        lex("red and not(blue) or  green"),
        vec![
            Lexeme::Word("red"),
            Lexeme::Gap(" "),
            Lexeme::And,
            Lexeme::Gap(" "),
            Lexeme::Word("not(blue)"),
            Lexeme::Gap(" "),
            Lexeme::Or,
            Lexeme::Gap("  "),
            Lexeme::Word("green"),
        ]
    );
    assert_eq!(lex("   "), vec![Lexeme::Gap("   ")]);
    assert!(lex("").is_empty());
}

#[test]
fn test_parse_dnf_structure() {
    let query = QueryParser::new().parse("red AND not(blue) OR green");

    let expected = BooleanQuery::new()
        .with_conjunction(
            Conjunction::new()
                .with_literal(Literal::positive("red"))
                .with_literal(Literal::negated("blue")),
        )
        .with_conjunction(Conjunction::new().with_literal(Literal::positive("green")));

    assert_eq!(query, expected);
    assert_eq!(query.literal_count(), 3);
}

#[test]
fn test_parse_keywords_only_as_whole_words() {
    let query = QueryParser::new().parse("sandbox and brand or orange");

    assert_eq!(query.conjunctions.len(), 2);
    assert_eq!(
        query.conjunctions[0].literals,
        vec![Literal::positive("sandbox"), Literal::positive("brand")]
    );
    assert_eq!(query.conjunctions[1].literals, vec![Literal::positive("orange")]);
}

#[test]
fn test_parse_not_with_inner_whitespace() {
    let query = QueryParser::new().parse("not( blue )");
    assert_eq!(query.conjunctions[0].literals, vec![Literal::negated("blue")]);
}

#[test]
fn test_parse_adjacent_words_form_one_literal() {
    let query = QueryParser::new().parse("red blue");
    assert_eq!(query.conjunctions[0].literals, vec![Literal::positive("red blue")]);
}

#[test]
fn test_parse_skips_empty_literals() {
    let query = QueryParser::new().parse("and red and and blue and");
    assert_eq!(
        query.conjunctions[0].literals,
        vec![Literal::positive("red"), Literal::positive("blue")]
    );
}

#[test]
fn test_parse_empty_query() {
    let query = QueryParser::new().parse("   ");
    assert!(query.is_empty());
    assert_eq!(query.conjunctions.len(), 1);
}

#[test]
fn test_parse_or_without_spaces_is_a_word() {
    let parser = QueryParser::new();

    let query = parser.parse("or blue");
    assert_eq!(query.conjunctions.len(), 1);
    assert_eq!(query.conjunctions[0].literals, vec![Literal::positive("or blue")]);

    let query = parser.parse("red\tor blue");
    assert_eq!(query.conjunctions[0].literals, vec![Literal::positive("red or blue")]);

    let query = parser.parse("red or");
    assert_eq!(query.conjunctions[0].literals, vec![Literal::positive("red or")]);
}

#[test]
fn test_parse_space_closes_one_separator_only() {
    let query = QueryParser::new().parse("red or or blue");

    assert_eq!(query.conjunctions.len(), 2);
    assert_eq!(query.conjunctions[0].literals, vec![Literal::positive("red")]);
    assert_eq!(query.conjunctions[1].literals, vec![Literal::positive("or blue")]);
}

#[test]
fn test_parse_separators_with_empty_group() {
    let query = QueryParser::new().parse("red or  or blue");

    assert_eq!(query.conjunctions.len(), 3);
    assert!(query.conjunctions[1].is_empty());
    assert_eq!(query.conjunctions[2].literals, vec![Literal::positive("blue")]);
}

// ============================================================
// MATCHER TESTS
// ============================================================

#[test]
fn test_and_with_negation() {
    assert_eq!(evaluate_boolean("red and not(blue)", &corpus()), names(&["b.txt", "c.txt"]));
}

#[test]
fn test_or_includes_missing_terms() {
    assert_eq!(evaluate_boolean("blue or purple", &corpus()), names(&["a.txt"]));
}

#[test]
fn test_query_is_case_insensitive() {
    assert_eq!(evaluate_boolean("BLUE", &corpus()), names(&["a.txt"]));
}

#[test]
fn test_term_inside_other_word_does_not_match() {
    assert!(evaluate_boolean("sand", &corpus()).is_empty());
    assert_eq!(evaluate_boolean("sandbox", &corpus()), names(&["c.txt"]));
}

#[test]
fn test_negation_matches_documents_without_terms() {
    let docs = vec![Document::new("empty.txt", ""), Document::new("x.txt", "x")];
    assert_eq!(evaluate_boolean("not(x)", &docs), names(&["empty.txt"]));
}

#[test]
fn test_empty_conjunction_contributes_nothing() {
    assert_eq!(evaluate_boolean("blue or  or purple", &corpus()), names(&["a.txt"]));
    assert_eq!(evaluate_boolean(" or blue", &corpus()), names(&["a.txt"]));
    assert!(evaluate_boolean("", &corpus()).is_empty());
}

#[test]
fn test_leading_or_is_part_of_literal() {
    assert!(evaluate_boolean("or blue", &corpus()).is_empty());
}

#[test]
fn test_trailing_or_is_part_of_literal() {
    assert!(evaluate_boolean("blue or", &corpus()).is_empty());
}

#[test]
fn test_or_needs_plain_spaces() {
    assert!(evaluate_boolean("red\tor blue", &corpus()).is_empty());
    assert!(evaluate_boolean("red or\nblue", &corpus()).is_empty());
    assert_eq!(evaluate_boolean("blue  or  green", &corpus()), names(&["a.txt", "c.txt"]));
}

#[test]
fn test_not_is_complement() {
    let docs = corpus();
    let all: BTreeSet<String> = docs.iter().map(|d| d.name.clone()).collect();

    for term in ["red", "blue", "green", "absent"] {
        let positive = evaluate_boolean(term, &docs);
        let negative = evaluate_boolean(&format!("not({})", term), &docs);

        assert!(positive.is_disjoint(&negative));
        let union: BTreeSet<String> = positive.union(&negative).cloned().collect();
        assert_eq!(union, all);
    }
}

#[test]
fn test_docs_for_term_ordinals() {
    let docs = corpus();
    let matcher = BooleanMatcher::new(&docs);

    assert_eq!(matcher.docs_for_term("red", false), vec![0, 1, 2]);
    assert_eq!(matcher.docs_for_term("blue", true), vec![1, 2]);
}

// ============================================================
// CACHE TESTS
// ============================================================

#[test]
fn test_cache_hits_same_version_only() {
    let cache = QueryCache::new(4);
    let key = QueryKey::new(SearchMode::Boolean, "Red", 1);
    cache.put(key, CachedResult::Boolean(names(&["a.txt"])));

    let same = QueryKey::new(SearchMode::Boolean, "red", 1);
    assert_eq!(cache.get(&same), Some(CachedResult::Boolean(names(&["a.txt"]))));

    let newer = QueryKey::new(SearchMode::Boolean, "red", 2);
    assert_eq!(cache.get(&newer), None);

    let other_mode = QueryKey::new(SearchMode::Vector, "red", 1);
    assert_eq!(cache.get(&other_mode), None);

    let stats = cache.stats();
    assert_eq!(stats.hit_count, 1);
    assert_eq!(stats.miss_count, 2);
    assert_eq!(stats.size, 1);
}

#[test]
fn test_cache_disabled() {
    let cache = QueryCache::new(0);
    let key = QueryKey::new(SearchMode::Boolean, "red", 1);
    cache.put(key.clone(), CachedResult::Boolean(BTreeSet::new()));

    assert!(!cache.is_enabled());
    assert_eq!(cache.get(&key), None);
    assert_eq!(cache.stats().size, 0);
}

#[test]
fn test_cache_clear() {
    let cache = QueryCache::new(2);
    let key = QueryKey::new(SearchMode::Vector, "cat", 3);
    cache.put(key.clone(), CachedResult::Ranked(Vec::new()));
    cache.clear();

    assert_eq!(cache.get(&key), None);
}
