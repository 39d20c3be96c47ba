use std::borrow::Cow;

#[klass_derive::klass_error]
pub enum ParseError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Int { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal parse error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u8> {
    Ok(raw.parse::<u8>().context("reading connector index")?)
}

#[test]
fn klass_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/klass_error_pass.rs");
    t.compile_fail("tests/ui/klass_error_no_context.rs");
    t.compile_fail("tests/ui/klass_error_bad_context_type.rs");
    t.compile_fail("tests/ui/klass_error_tuple_variant.rs");
    t.compile_fail("tests/ui/klass_error_not_enum.rs");
}

#[test]
fn source_errors_carry_context() {
    let err = parse("nope").expect_err("non-numeric input must fail");
    assert!(matches!(err, ParseError::Int { context: Some(_), .. }));
    assert_eq!(err.to_string(), "Parse error (reading connector index): invalid digit found in string");
}

#[test]
fn question_mark_converts_source_without_context() {
    fn bare(raw: &str) -> Result<u8> {
        Ok(raw.parse::<u8>()?)
    }

    let err = bare("300").expect_err("out of range");
    assert!(matches!(err, ParseError::Int { context: None, .. }));
}

#[test]
fn internal_variant_accepts_strings() {
    let err: ParseError = "broken".into();
    assert_eq!(err.to_string(), "Internal parse error: broken");

    let err = Err::<(), _>(ParseError::from(String::from("late"))).context("second pass");
    assert_eq!(
        err.expect_err("still an error").to_string(),
        "Internal parse error (second pass): late"
    );
}
