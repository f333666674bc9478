use parsenv::EnvConfig;

#[derive(EnvConfig)]
#[allow(dead_code)]
struct Config {
    #[env("required")]
    tags: Vec<String>,
}

fn main() {}
