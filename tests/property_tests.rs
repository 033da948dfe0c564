//! Property-based tests for the SimpleLang compiler
//!
//! These tests use proptest to verify invariants across many randomly
//! generated programs, catching edge cases that hand-written tests might miss.

use std::collections::HashSet;

use proptest::prelude::*;
use simplelang::backend::{CompilationContext, Instruction, emit_program};
use simplelang::frontend::{lexer, parser};
use simplelang::pipeline::{CompileOptions, compile};

// =============================================================================
// Program generators
// =============================================================================

fn ident() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "total", "x1", "_tmp"]).prop_map(String::from)
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![ident(), (0u32..1000).prop_map(|n| n.to_string())]
}

/// `operand (('+' | '-') operand)*`
fn additive() -> impl Strategy<Value = String> {
    (operand(), prop::collection::vec((prop::bool::ANY, operand()), 0..4)).prop_map(|(first, rest)| {
        let mut out = first;
        for (plus, rhs) in rest {
            out.push_str(if plus { " + " } else { " - " });
            out.push_str(&rhs);
        }
        out
    })
}

/// `additive ('==' additive)?`
fn expression() -> impl Strategy<Value = String> {
    (additive(), prop::option::of(additive())).prop_map(|(lhs, rhs)| match rhs {
        Some(rhs) => format!("{} == {}", lhs, rhs),
        None => lhs,
    })
}

fn simple_statement() -> impl Strategy<Value = String> {
    prop_oneof![
        ident().prop_map(|n| format!("int {};", n)),
        (ident(), expression()).prop_map(|(n, e)| format!("int {} = {};", n, e)),
        (ident(), expression()).prop_map(|(n, e)| format!("{} = {};", n, e)),
    ]
}

fn statement() -> impl Strategy<Value = String> {
    simple_statement().prop_recursive(3, 24, 4, |inner| {
        (
            expression(),
            prop::collection::vec(inner.clone(), 0..3),
            prop::option::of(prop::collection::vec(inner, 0..3)),
        )
            .prop_map(|(cond, then_body, else_body)| {
                let mut out = format!("if ({}) {{ {} }}", cond, then_body.join(" "));
                if let Some(else_body) = else_body {
                    out.push_str(&format!(" else {{ {} }}", else_body.join(" ")));
                }
                out
            })
    })
}

/// A whole program plus its number of top-level statements.
fn program() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(statement(), 0..8).prop_map(|stmts| (stmts.join("\n"), stmts.len()))
}

fn lower(source: &str) -> Vec<Instruction> {
    let program = parser::parse(&lexer::lex(source)).unwrap();
    emit_program(&program, &mut CompilationContext::new()).unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: generated programs parse, with one node per top-level statement
    #[test]
    fn valid_programs_parse((source, count) in program()) {
        let program = parser::parse(&lexer::lex(&source)).unwrap();
        prop_assert_eq!(program.statements.len(), count);
    }

    /// Property: a fresh context makes compilation deterministic
    #[test]
    fn compilation_is_idempotent((source, _) in program()) {
        let first = compile(&source, &CompileOptions::default()).unwrap();
        let second = compile(&source, &CompileOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: every label is defined exactly once and every jump target is defined
    #[test]
    fn labels_are_unique_and_resolved((source, _) in program()) {
        let code = lower(&source);
        let mut defined = HashSet::new();
        for instr in &code {
            if let Instruction::Label(label) = instr {
                prop_assert!(defined.insert(*label), "label {} defined twice", label);
            }
        }
        for instr in &code {
            if let Instruction::Jnz(label) | Instruction::Jmp(label) = instr {
                prop_assert!(defined.contains(label), "jump to undefined label {}", label);
            }
        }
    }

    /// Property: slots are handed out from 1 in the order names first appear in the source
    #[test]
    fn slots_follow_first_use((source, _) in program()) {
        let tokens = lexer::lex(&source);
        let program = parser::parse(&tokens).unwrap();
        let mut ctx = CompilationContext::new();
        emit_program(&program, &mut ctx).unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == lexer::TokenKind::Ident)
            .map(|t| t.text.as_str())
            .filter(|name| seen.insert(*name))
            .collect();
        let names: Vec<&str> = ctx.symbols.iter().map(|(name, _)| name).collect();
        prop_assert_eq!(names, expected);

        let slots: Vec<u32> = ctx.symbols.iter().map(|(_, slot)| slot.index()).collect();
        let numbered: Vec<u32> = (1..=ctx.symbols.len() as u32).collect();
        prop_assert_eq!(slots, numbered);
    }

    /// Property: the lexer never fails and always ends with exactly one Eof
    #[test]
    fn lexing_is_total(source in "\\PC*") {
        let tokens = lexer::lex(&source);
        let eofs = tokens.iter().filter(|t| t.kind == lexer::TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(lexer::TokenKind::Eof));
    }

    /// Property: arbitrary input never panics the pipeline
    #[test]
    fn compile_never_panics(source in "[a-z0-9 =+\\-(){};@]{0,64}") {
        let _ = compile(&source, &CompileOptions::default());
    }
}
