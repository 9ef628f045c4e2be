#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|line: &str| {
    let tokens = calc::scan(line);
    assert_eq!(tokens, calc::scan(line));
    if let Ok(tokens) = tokens {
        let _ = calc::evaluate(&tokens);
    }
});
