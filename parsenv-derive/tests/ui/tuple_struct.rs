use parsenv::EnvConfig;

#[derive(EnvConfig)]
struct Config(String);

fn main() {
    let config = Config(String::new());
    let _ = config.0;
}
