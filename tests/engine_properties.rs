//! Engine-level properties checked over generated corpora.

use std::collections::BTreeSet;
use docsift::core::types::Document;
use docsift::query::matcher::evaluate_boolean;
use docsift::search::ranking::rank_by_similarity;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORDS: [&str; 6] = ["red", "blue", "green", "cat", "dog", "sky"];

fn random_corpus(rng: &mut StdRng, size: usize) -> Vec<Document> {
    (0..size)
        .map(|i| {
            let len = rng.gen_range(1..8);
            let content: Vec<&str> = (0..len).map(|_| WORDS[rng.gen_range(0..WORDS.len())]).collect();
            Document::new(format!("doc{}.txt", i), content.join(" "))
        })
        .collect()
}

fn all_names(docs: &[Document]) -> BTreeSet<String> {
    docs.iter().map(|doc| doc.name.clone()).collect()
}

#[test]
fn boolean_results_are_subsets_of_corpus() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let docs = random_corpus(&mut rng, 15);
        let all = all_names(&docs);

        for query in ["red and not(blue)", "cat or dog", "not(sky) and green or red", "absent"] {
            assert!(evaluate_boolean(query, &docs).is_subset(&all));
        }
    }
}

#[test]
fn or_is_union_and_and_is_intersection() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..20 {
        let docs = random_corpus(&mut rng, 12);
        let a = evaluate_boolean("red", &docs);
        let b = evaluate_boolean("cat", &docs);

        let union: BTreeSet<String> = a.union(&b).cloned().collect();
        let intersection: BTreeSet<String> = a.intersection(&b).cloned().collect();

        assert_eq!(evaluate_boolean("red or cat", &docs), union);
        assert_eq!(evaluate_boolean("red and cat", &docs), intersection);
    }
}

#[test]
fn negation_is_complement() {
    let mut rng = StdRng::seed_from_u64(13);

    for _ in 0..20 {
        let docs = random_corpus(&mut rng, 10);
        let positive = evaluate_boolean("dog", &docs);
        let negative = evaluate_boolean("not(dog)", &docs);

        let expected: BTreeSet<String> = all_names(&docs).difference(&positive).cloned().collect();
        assert_eq!(negative, expected);
    }
}

#[test]
fn boolean_evaluation_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(17);
    let docs = random_corpus(&mut rng, 30);

    let first = evaluate_boolean("blue and not(red) or sky", &docs);
    let second = evaluate_boolean("blue and not(red) or sky", &docs);
    assert_eq!(first, second);
}

#[test]
fn ranking_scores_are_bounded_and_sorted() {
    let mut rng = StdRng::seed_from_u64(19);

    for _ in 0..20 {
        let docs = random_corpus(&mut rng, 25);
        let results = rank_by_similarity("red cat cat", &docs);

        for result in &results {
            assert!(result.score > 0.0 && result.score <= 1.0);
        }
        for pair in results.windows(2) {
            assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].file_name < pair[1].file_name)
            );
        }
    }
}

#[test]
fn ranking_only_returns_documents_sharing_a_term() {
    let mut rng = StdRng::seed_from_u64(23);
    let docs = random_corpus(&mut rng, 40);

    let ranked: BTreeSet<String> = rank_by_similarity("green sky", &docs)
        .into_iter()
        .map(|result| result.file_name)
        .collect();

    assert_eq!(ranked, evaluate_boolean("green or sky", &docs));
}
