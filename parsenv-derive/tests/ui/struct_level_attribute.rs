use parsenv::EnvConfig;

#[derive(EnvConfig)]
#[allow(dead_code)]
#[env("required")]
struct Config {
    foo: String,
}

fn main() {}
