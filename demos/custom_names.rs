//! Custom environment variable names and derived names

use parsenv::EnvConfig;

#[allow(non_snake_case)]
#[derive(Debug, Default, EnvConfig)]
struct Config {
    // Read from REDIS_URL instead of REDIS_CONNECTION_STRING
    #[env("name=REDIS_URL")]
    pub redis_connection_string: String,

    // camelCase is split into words: REQUEST_TIMEOUT
    pub requestTimeout: u64,

    // The override replaces the derived name entirely: only bAz is read
    #[env("name=bAz;default=6.97")]
    pub baz: f64,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("REDIS_URL", "redis://localhost:6379");
    std::env::set_var("REQUEST_TIMEOUT", "30");
    std::env::set_var("BAZ", "13.37");

    let config = Config::from_env()?;

    println!("Redis URL: {}", config.redis_connection_string);
    println!("Request timeout: {}s", config.requestTimeout);
    println!("Baz: {} (BAZ is not bAz, so the default applies)", config.baz);

    Ok(())
}
