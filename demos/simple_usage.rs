/// docsift API Demo
///
/// Demonstrates the library without the HTTP layer:
/// - Uploading documents (with validation errors)
/// - Boolean search
/// - Vector-space ranking
/// - Statistics and clearing

use std::sync::Arc;
use docsift::core::config::Config;
use docsift::core::corpus::DocumentStore;
use docsift::core::types::Upload;
use docsift::search::executor::QueryExecutor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║   docsift - Library Demo                      ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    let config = Config::default();
    let store = Arc::new(DocumentStore::new());
    let executor = QueryExecutor::new(Arc::clone(&store), &config);

    // Step 1: upload
    println!("Step 1: UPLOAD - Adding documents...");
    let report = store.add_documents(vec![
        Upload::new("rust.txt", "Rust is a systems language\nrust rust"),
        Upload::new("web.txt", "building web apps in many languages"),
        Upload::new("pets.txt", "cat cat dog"),
        Upload::new("bad.txt", "not allowed!"),
        Upload::new("empty.txt", ""),
    ]);
    println!("  Stored {} documents: {:?}", store.len(), store.names());
    for error in &report.errors {
        println!("  Rejected: {}", error);
    }
    println!();

    // Step 2: boolean search
    println!("Step 2: BOOLEAN - Querying documents...");
    store.update_terms("rust web cat dog");
    for query in ["rust or web", "cat and not(dog)", "languages and not(rust)"] {
        let names = executor.evaluate_boolean(query)?;
        println!("  '{}': {:?}", query, names);
    }
    println!();

    // Step 3: ranking
    println!("Step 3: RANK - Scoring documents...");
    for query in ["rust", "cat", "web apps"] {
        let ranked = executor.rank(query, Some(3))?;
        println!("  '{}': {} hits in {}ms", query, ranked.total_hits, ranked.took_ms);
        for hit in &ranked.hits {
            println!("    {:<10} {:.4}", hit.file_name, hit.score);
        }
    }
    println!();

    // Step 4: stats
    println!("Step 4: STATS");
    let stats = store.stats();
    println!("  Documents: {}", stats.documents);
    println!("  Total terms: {}", stats.total_terms);
    println!("  Vocabulary: {}", stats.vocabulary_size);
    let cache = executor.cache_stats();
    println!("  Cache: {} hits, {} misses", cache.hit_count, cache.miss_count);
    println!();

    // Step 5: clear
    println!("Step 5: CLEAR");
    executor.clear();
    match executor.rank("rust", None) {
        Ok(_) => println!("  unexpected results"),
        Err(e) => println!("  {}", e.context),
    }

    println!("\nDone!");
    Ok(())
}
