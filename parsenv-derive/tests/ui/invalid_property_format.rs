use parsenv::EnvConfig;

#[derive(EnvConfig)]
#[allow(dead_code)]
struct Config {
    #[env("a=b=c")]
    foo: String,
}

fn main() {}
