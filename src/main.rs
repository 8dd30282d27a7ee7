// Introspect CLI - query introspect pages from a terminal
use introspect_cli::cli::{build_cli, execute_command};

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    if let Err(e) = execute_command(matches).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
