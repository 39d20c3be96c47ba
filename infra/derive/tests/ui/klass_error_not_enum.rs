use klass_derive::klass_error;

#[klass_error]
pub struct DemoError {
    message: String,
}

fn main() {}
