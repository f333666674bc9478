//! Implementing EnvConfig by hand, without the derive macro

use parsenv::{EnvConfig, FieldDescriptor, Scalar, ScalarKind, Value};
use std::collections::HashMap;

#[derive(Debug, Default)]
struct Config {
    host: String,
    port: u16,
    ratio: f32,
}

impl EnvConfig for Config {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("host", ScalarKind::Text, "required"),
        FieldDescriptor::new("port", ScalarKind::U16, "name=LISTEN_PORT;default=8080"),
        FieldDescriptor::new("ratio", ScalarKind::F32, "default=0.5"),
    ];

    fn assign(&mut self, index: usize, value: Value) {
        match index {
            0 => self.host = String::from_value(value).unwrap_or_default(),
            1 => self.port = u16::from_value(value).unwrap_or(self.port),
            2 => self.ratio = f32::from_value(value).unwrap_or(self.ratio),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Any Source works; a map keeps the example independent of the process
    let source: HashMap<String, String> = [
        ("HOST".to_string(), "example.internal".to_string()),
        ("LISTEN_PORT".to_string(), "9090".to_string()),
    ]
    .into();

    let mut config = Config::default();
    config.load_from(&source)?;

    println!("{config:?}");
    Ok(())
}
