//! Server command implementation

use anyhow::Result;

pub async fn cmd_serve(host: &str, port: u16) -> Result<()> {
    println!("🚀 Starting Finwell API server...");
    println!("   Listening: http://{}:{}", host, port);

    // Parse allowed CORS origins from environment (comma-separated)
    let allowed_origins: Vec<String> = std::env::var("FINWELL_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if !allowed_origins.is_empty() {
        println!("   CORS origins: {}", allowed_origins.join(", "));
    }

    let config = finwell_server::ServerConfig { allowed_origins };
    finwell_server::serve_with_config(host, port, config).await
}
