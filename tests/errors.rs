use calc::{CalcError, ErrorKind};

#[test]
fn test_invalid_char() {
    let err = calc::scan("3 + a").unwrap_err();
    assert!(matches!(dbg!(&err), CalcError::InvalidCharacter { ch: 'a', col: 4 }));
    assert_eq!(ErrorKind::Syntax, err.kind());
    assert_eq!("invalid character 'a' at column 4", format!("{}", err));
}

#[test]
fn test_number_too_large() {
    let err = calc::scan("1 + 99999999999999999999").unwrap_err();
    assert_eq!(ErrorKind::Syntax, err.kind());
    assert_eq!(
        "number 99999999999999999999 at column 4 does not fit in a 64-bit integer",
        format!("{}", err)
    );
}

#[test]
fn test_parse_errors() -> Result<(), CalcError> {
    let err = calc::evaluate(&calc::scan("+ 3")?).unwrap_err();
    assert_eq!(CalcError::ExpectedInteger, err);
    assert_eq!(ErrorKind::Parse, err.kind());
    assert_eq!("expected integer", format!("{}", err));

    let err = calc::evaluate(&calc::scan("3 +")?).unwrap_err();
    assert_eq!(CalcError::ExpectedIntegerAfterOperator, err);
    assert_eq!("expected integer after operator", format!("{}", err));

    let err = calc::evaluate(&calc::scan("3 4")?).unwrap_err();
    assert_eq!(CalcError::ExpectedOperator, err);
    assert_eq!("expected + or -", format!("{}", err));
    Ok(())
}

#[test]
fn test_overflow() -> Result<(), CalcError> {
    let err = calc::evaluate(&calc::scan("9223372036854775807 + 1")?).unwrap_err();
    assert_eq!(CalcError::Overflow, err);
    assert_eq!(ErrorKind::Limit, err.kind());
    Ok(())
}

#[test]
fn test_extract_through_context() {
    let err = calc::feed("1 + +").unwrap_err();
    assert_eq!(Some(&CalcError::ExpectedInteger), CalcError::extract(&err));
    let chain = err.chain().map(|e| e.to_string()).collect::<Vec<_>>();
    assert_eq!(vec!["evaluating \"1 + +\"", "expected integer"], chain);

    let other = anyhow::anyhow!("unrelated");
    assert_eq!(None, CalcError::extract(&other));
}
