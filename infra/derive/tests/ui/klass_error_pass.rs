use klass_derive::klass_error;
use std::borrow::Cow;

#[klass_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<()> {
    Err::<(), _>(std::io::Error::other("missing")).context("opening settings")?;
    Ok(())
}

fn main() {
    let _ = open();
}
