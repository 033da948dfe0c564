#![no_main]

use libfuzzer_sys::fuzz_target;
use simplelang::backend::{CompilationContext, generate};
use simplelang::frontend::{lexer, parser};
use simplelang::parser::StatementPolicy;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Lexing is total; the parser and generator may reject but must not panic
        let tokens = lexer::lex(s);
        for policy in [StatementPolicy::Strict, StatementPolicy::SkipUnknown] {
            if let Ok(program) = parser::parse_with_policy(&tokens, policy) {
                let mut out = Vec::new();
                let _ = generate(&program, &mut CompilationContext::new(), &mut out);
            }
        }
    }
});
