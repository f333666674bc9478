use parsenv::EnvConfig;

#[derive(EnvConfig)]
enum Mode { Fast }

fn main() {
    let _ = Mode::Fast;
}
