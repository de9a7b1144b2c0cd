use clap::Parser;
use todo_server::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,todo_server=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::parse();
    if let Err(err) = todo_server::serve(config).await {
        tracing::error!(error = %err, "todo-server stopped");
        std::process::exit(1);
    }
}
