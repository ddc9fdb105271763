use std::sync::Arc;
use docsift::core::config::Config;
use docsift::core::corpus::DocumentStore;
use docsift::search::executor::QueryExecutor;
use docsift::server::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        eprintln!(
            "Usage: {} [--bind <addr:port>] [--index-page <path>] [--max-upload-bytes <n>]",
            args[0]
        );
        eprintln!(
            "       [--cache-size <n>] [--idf unary|smoothed] [--parallel-threshold <n>]"
        );
        eprintln!("       [--log-level <level>] [--no-terms-check]");
        eprintln!("Example: {} --bind 127.0.0.1:8080 --idf unary", args[0]);
        std::process::exit(1);
    }

    let config = Config::from_args(&args[1..])?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!(
        "Query engines: idf={} cache={} boolean terms check={}",
        config.idf,
        config.result_cache_size,
        config.require_terms_for_boolean
    );

    let store = Arc::new(DocumentStore::new());
    let executor = Arc::new(QueryExecutor::new(store, &config));

    let bind_addr = config.bind_addr;
    let app = router(executor, Arc::new(config));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server started at http://{}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app).await?;

    Ok(())
}
