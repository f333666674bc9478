use parsenv::EnvConfig;

#[derive(EnvConfig)]
#[allow(dead_code)]
struct Config {
    #[env("name=FOO;bogus=1")]
    foo: String,
}

fn main() {}
