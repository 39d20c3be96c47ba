use klass_derive::klass_error;

#[klass_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error, context: String },
}

fn main() {}
