//! Basic usage example

use parsenv::EnvConfig;

#[derive(Debug, Default, EnvConfig)]
struct Config {
    // Required field: loaded from DATABASE_URL environment variable
    #[env("required")]
    pub database_url: String,

    // With default value
    #[env("default=127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env("default=10")]
    pub max_connections: u32,

    // Boolean type, left at false when DEBUG_MODE is unset
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
