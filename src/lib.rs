pub mod core;
pub mod analysis;
pub mod scoring;
pub mod simd;
pub mod query;
pub mod search;
pub mod server;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                           DOCSIFT ARCHITECTURE                              │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── SERVER LAYER ────────────────────────────────┐
│  router()  ──►  handle_upload_docs / handle_clear_docs / handle_update_terms │
│                 handle_search (boolean)  /  handle_rank (vector)            │
│                 handle_index / handle_stats                                 │
└───────────────────────────────────┬──────────────────────────────────────────┘
                                    │ Extension<Arc<QueryExecutor>>
┌───────────────────────────────────▼──────────────────────────────────────────┐
│  struct QueryExecutor                                                        │
│  • store: Arc<DocumentStore>     lock held for the whole engine call         │
│  • parser: QueryParser           preconditions: terms set, corpus non-empty  │
│  • ranker: VectorSpaceRanker     cache: QueryCache (key includes version)    │
└───────────────┬───────────────────────────────────────┬──────────────────────┘
                │                                       │
┌───────────────▼──────────────┐        ┌───────────────▼──────────────────────┐
│ BOOLEAN ENGINE               │        │ VECTOR-SPACE ENGINE                  │
│ QueryParser → BooleanQuery   │        │ Analyzer → query terms               │
│   OR[ AND[ Literal ] ]       │        │ Vocabulary (per call, sorted)        │
│ BooleanMatcher               │        │ TermCounts → tf * idf vectors        │
│   docs_for_term              │        │ VectorOps::cosine_similarity         │
│   VectorOps::intersect/union │        │ filter > 0, sort desc / name asc     │
└───────────────┬──────────────┘        └───────────────┬──────────────────────┘
                │                                       │
┌───────────────▼───────────────────────────────────────▼──────────────────────┐
│  CORE: Document, DocumentStore (parking_lot::Mutex<CorpusState>),            │
│        Config, Error/ErrorKind, CorpusStats                                  │
│  ANALYSIS: WhitespaceTokenizer, LowercaseFilter, Analyzer                    │
└──────────────────────────────────────────────────────────────────────────────┘
*/
