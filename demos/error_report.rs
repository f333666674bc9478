//! Reporting every misconfigured field at once

use parsenv::{EnvConfig, FieldError};

#[derive(Debug, Default, EnvConfig)]
struct Config {
    #[env("required")]
    pub database_url: String,

    #[env("required")]
    pub api_key: String,

    #[env("default=8080")]
    pub port: u16,

    #[env("default=info")]
    pub log_level: String,
}

fn main() {
    std::env::remove_var("DATABASE_URL");
    std::env::remove_var("API_KEY");
    std::env::set_var("PORT", "not-a-port");

    let mut config = Config::default();
    match config.load() {
        Ok(()) => println!("Configuration loaded: {config:?}"),
        Err(err) => {
            eprintln!("{} field(s) failed to load:", err.len());
            for error in &err {
                match error {
                    FieldError::Missing { name, .. } => {
                        eprintln!("  {}: set {name}", error.field());
                    }
                    FieldError::Parse { value, kind, .. } => {
                        eprintln!("  {}: {value:?} is not a valid {kind}", error.field());
                    }
                }
            }
            // Fields that did load are still available
            eprintln!("Partially loaded: {config:?}");
        }
    }
}
