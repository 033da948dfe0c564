//! AST → VM assembly lowering.
//!
//! Code generation is a single walk over the [`Program`] that appends [`Instruction`]s to a buffer. Nothing is written
//! to the caller's sink until the whole program has lowered, so a failed run never leaves partial output behind.
//!
//! ## Expression forms
//!
//! Every expression is lowered in one of two forms:
//!
//! - **value form**: the result ends up in register `A`. Used for initializers, assignment right-hand sides,
//!   `if` conditions and the left operand of a binary node.
//! - **right-operand form**: the result ends up in register `B` with `A` untouched. Only literals and identifiers
//!   have a direct right-operand form (`ldi B n` / `mov B M s`).
//!
//! A compound right operand (only reachable through `x == a + b`) is evaluated first in value form and spilled to
//! [`SCRATCH_SLOT`], then the left operand is evaluated and the spill is reloaded into `B`.
//!
//! ## Slot allocation
//!
//! Names get slots in the order they first appear in the source: an assignment's target before its expression, a
//! binary node's left operand before its right. The spill path loads the right operand first, so it reserves every
//! name of the node up front. A name that is read before it is ever written still gets a slot (its value is
//! whatever the VM holds there).

use std::io::{self, Write};

use simplelang_core::lang::operators::{self, OperatorId};

use super::context::CompilationContext;
use super::errors::CodegenError;
use super::isa::{Instruction, Register, SCRATCH_SLOT, TEXT_SECTION};
use crate::frontend::ast::{Expr, IfStmt, Program, Statement};

/// Lowers one program into a flat instruction list.
///
/// ## Examples
///
/// ```rust
/// use simplelang::backend::{Codegen, CompilationContext};
/// use simplelang::{lexer, parser};
///
/// let program = parser::parse(&lexer::lex("int a = 4;")).unwrap();
/// let mut ctx = CompilationContext::new();
/// let code = Codegen::new(&mut ctx).lower_program(&program).unwrap();
/// let text: Vec<String> = code.iter().map(|i| i.to_string()).collect();
/// assert_eq!(text, ["ldi A 4", "mov M A 1"]);
/// ```
pub struct Codegen<'ctx> {
    ctx: &'ctx mut CompilationContext,
    code: Vec<Instruction>,
    /// Set while a spilled right operand sits in the scratch slot waiting to be reloaded
    scratch_live: bool,
}

impl<'ctx> Codegen<'ctx> {
    pub fn new(ctx: &'ctx mut CompilationContext) -> Self {
        Self {
            ctx,
            code: Vec::new(),
            scratch_live: false,
        }
    }

    /// Lower every statement of `program`, in source order.
    ///
    /// ## Errors
    /// Returns [`CodegenError::UnsupportedOperator`] or [`CodegenError::UnsupportedShape`] for trees the parser
    /// never produces.
    #[tracing::instrument(skip_all, fields(stmt_count = program.statements.len()))]
    pub fn lower_program(mut self, program: &Program) -> Result<Vec<Instruction>, CodegenError> {
        self.statements(&program.statements)?;
        tracing::debug!(
            instruction_count = self.code.len(),
            slot_count = self.ctx.symbols.len(),
            if_count = self.ctx.labels.allocated(),
            "generated code"
        );
        Ok(self.code)
    }

    fn emit(&mut self, instruction: Instruction) {
        self.code.push(instruction);
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statements(&mut self, stmts: &[Statement]) -> Result<(), CodegenError> {
        for stmt in stmts {
            self.statement(stmt)?;
        }
        Ok(())
    }

    fn statement(&mut self, stmt: &Statement) -> Result<(), CodegenError> {
        match stmt {
            Statement::VarDecl { name } => {
                self.ctx.symbols.slot_for(name);
            }
            Statement::VarDeclAssign { name, value } | Statement::Assign { name, value } => {
                let slot = self.ctx.symbols.slot_for(name);
                self.value(value)?;
                self.emit(Instruction::Store(slot));
            }
            Statement::If(stmt) => self.if_stmt(stmt)?,
        }
        Ok(())
    }

    /// `cond; jnz %else_N; then; jmp %endif_N; else_N: else; endif_N:`
    ///
    /// Both labels are emitted even when the else body is empty.
    fn if_stmt(&mut self, stmt: &IfStmt) -> Result<(), CodegenError> {
        let (else_label, endif_label) = self.ctx.labels.next_if_labels();

        self.value(&stmt.condition)?;
        self.emit(Instruction::Jnz(else_label));
        self.statements(&stmt.then_body)?;
        self.emit(Instruction::Jmp(endif_label));
        self.emit(Instruction::Label(else_label));
        self.statements(&stmt.else_body)?;
        self.emit(Instruction::Label(endif_label));
        Ok(())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Lower `expr` so its result lands in `A`.
    fn value(&mut self, expr: &Expr) -> Result<(), CodegenError> {
        match expr {
            Expr::Int(value) => self.emit(Instruction::LoadImm(Register::A, *value)),
            Expr::Ident(name) => {
                let slot = self.ctx.symbols.slot_for(name);
                self.emit(Instruction::Load(Register::A, slot));
            }
            Expr::Binary(left, op, right) => self.binary(left, *op, right)?,
        }
        Ok(())
    }

    fn binary(&mut self, left: &Expr, op: OperatorId, right: &Expr) -> Result<(), CodegenError> {
        let instruction = binary_instruction(op)?;

        match right {
            Expr::Int(value) => {
                self.value(left)?;
                self.emit(Instruction::LoadImm(Register::B, *value));
            }
            Expr::Ident(name) => {
                self.value(left)?;
                let slot = self.ctx.symbols.slot_for(name);
                self.emit(Instruction::Load(Register::B, slot));
            }
            Expr::Binary(..) => {
                self.reserve_names(left);
                self.reserve_names(right);
                self.value(right)?;
                if self.scratch_live {
                    return Err(CodegenError::UnsupportedShape {
                        detail: "left operand needs the scratch slot while it already holds a spilled right operand"
                            .to_string(),
                    });
                }
                self.emit(Instruction::Store(SCRATCH_SLOT));
                self.scratch_live = true;
                self.value(left)?;
                self.scratch_live = false;
                self.emit(Instruction::Load(Register::B, SCRATCH_SLOT));
            }
        }

        self.emit(instruction);
        Ok(())
    }

    /// Give every identifier in `expr` a slot, left to right, without emitting anything.
    fn reserve_names(&mut self, expr: &Expr) {
        match expr {
            Expr::Int(_) => {}
            Expr::Ident(name) => {
                self.ctx.symbols.slot_for(name);
            }
            Expr::Binary(left, _, right) => {
                self.reserve_names(left);
                self.reserve_names(right);
            }
        }
    }
}

/// Map an expression operator to the instruction that applies it to `A` and `B`.
fn binary_instruction(op: OperatorId) -> Result<Instruction, CodegenError> {
    match op {
        OperatorId::Plus => Ok(Instruction::Add),
        OperatorId::Minus => Ok(Instruction::Sub),
        OperatorId::EqEq => Ok(Instruction::Cmp),
        OperatorId::Eq => Err(CodegenError::UnsupportedOperator {
            operator: operators::as_str(op),
        }),
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Lower `program` using (and updating) `ctx`.
///
/// ## Errors
/// See [`Codegen::lower_program`].
pub fn emit_program(program: &Program, ctx: &mut CompilationContext) -> Result<Vec<Instruction>, CodegenError> {
    Codegen::new(ctx).lower_program(program)
}

/// Lower `program` and write one instruction per line to `out`.
///
/// The output is the bare body: no `.text` directive and no trailing `hlt` (see [`render_listing`]).
///
/// ## Errors
/// Returns a lowering error before anything is written, or [`CodegenError::Io`] if `out` fails.
pub fn generate<W: Write + ?Sized>(
    program: &Program,
    ctx: &mut CompilationContext,
    out: &mut W,
) -> Result<(), CodegenError> {
    let code = emit_program(program, ctx)?;
    write_instructions(&code, out)?;
    Ok(())
}

/// Convenience wrapper around [`generate`] that collects the body into a `String`.
///
/// ## Errors
/// See [`generate`].
pub fn generate_to_string(program: &Program, ctx: &mut CompilationContext) -> Result<String, CodegenError> {
    let code = emit_program(program, ctx)?;
    Ok(render_listing(&code, false))
}

/// Write one instruction per line.
pub fn write_instructions<W: Write + ?Sized>(code: &[Instruction], out: &mut W) -> io::Result<()> {
    for instruction in code {
        writeln!(out, "{}", instruction)?;
    }
    Ok(())
}

/// Render instructions as assembly text, one per line with a trailing newline.
///
/// With `wrap`, the body is framed as a complete program: `.text` first, `hlt` last.
pub fn render_listing(code: &[Instruction], wrap: bool) -> String {
    let mut out = String::new();
    if wrap {
        out.push_str(TEXT_SECTION);
        out.push('\n');
    }
    for instruction in code {
        out.push_str(&instruction.to_string());
        out.push('\n');
    }
    if wrap {
        out.push_str(&Instruction::Halt.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::isa::{Label, Slot};
    use crate::frontend::{lexer, parser};

    fn compile(source: &str) -> Vec<String> {
        let program = parser::parse(&lexer::lex(source)).unwrap();
        let mut ctx = CompilationContext::new();
        emit_program(&program, &mut ctx)
            .unwrap()
            .iter()
            .map(|i| i.to_string())
            .collect()
    }

    #[test]
    fn test_declaration_with_literal() {
        assert_eq!(compile("int a = 4;"), ["ldi A 4", "mov M A 1"]);
    }

    #[test]
    fn test_bare_declaration_emits_nothing() {
        assert!(compile("int a;").is_empty());
        // ...but it still reserves the slot.
        assert_eq!(compile("int a; int b = 1;"), ["ldi A 1", "mov M A 2"]);
    }

    #[test]
    fn test_addition_of_literals() {
        assert_eq!(compile("int a = 2 + 3;"), ["ldi A 2", "ldi B 3", "add", "mov M A 1"]);
    }

    #[test]
    fn test_left_associative_subtraction() {
        assert_eq!(
            compile("int a = 5 - 2 - 1;"),
            ["ldi A 5", "ldi B 2", "sub", "ldi B 1", "sub", "mov M A 1"]
        );
    }

    #[test]
    fn test_identifiers_load_from_their_slots() {
        assert_eq!(
            compile("int a = 1; int b = a + a;"),
            ["ldi A 1", "mov M A 1", "mov A M 1", "mov B M 1", "add", "mov M A 2"]
        );
    }

    #[test]
    fn test_undeclared_assignment_target_gets_a_slot() {
        assert_eq!(compile("x = 7;"), ["ldi A 7", "mov M A 1"]);
    }

    #[test]
    fn test_if_else() {
        assert_eq!(
            compile("int a = 1; if (a == 1) { a = 2; } else { a = 3; }"),
            [
                "ldi A 1",
                "mov M A 1",
                "mov A M 1",
                "ldi B 1",
                "cmp",
                "jnz %else_0",
                "ldi A 2",
                "mov M A 1",
                "jmp %endif_0",
                "else_0:",
                "ldi A 3",
                "mov M A 1",
                "endif_0:",
            ]
        );
    }

    #[test]
    fn test_if_without_else_keeps_both_labels() {
        assert_eq!(
            compile("if (1) { }"),
            ["ldi A 1", "jnz %else_0", "jmp %endif_0", "else_0:", "endif_0:"]
        );
    }

    #[test]
    fn test_nested_ifs_number_outer_first() {
        let code = compile("if (a) { if (b) { } } if (c) { }");
        let labels: Vec<&String> = code.iter().filter(|l| l.ends_with(':')).collect();
        assert_eq!(labels, ["else_1:", "endif_1:", "else_0:", "endif_0:", "else_2:", "endif_2:"]);
    }

    #[test]
    fn test_compound_right_operand_spills_to_scratch() {
        assert_eq!(
            compile("int r = x == a + b;"),
            [
                "mov A M 3",
                "mov B M 4",
                "add",
                "mov M A 0",
                "mov A M 2",
                "mov B M 0",
                "cmp",
                "mov M A 1",
            ]
        );
    }

    #[test]
    fn test_spilled_comparison_allocates_slots_in_source_order() {
        let program = parser::parse(&lexer::lex("int r = x == a + b; y = c == c - x;")).unwrap();
        let mut ctx = CompilationContext::new();
        emit_program(&program, &mut ctx).unwrap();
        let order: Vec<(&str, u32)> = ctx.symbols.iter().map(|(name, slot)| (name, slot.index())).collect();
        assert_eq!(order, [("r", 1), ("x", 2), ("a", 3), ("b", 4), ("y", 5), ("c", 6)]);
    }

    #[test]
    fn test_compound_left_operand_of_comparison() {
        assert_eq!(
            compile("int r = a - 1 == b;"),
            ["mov A M 2", "ldi B 1", "sub", "mov B M 3", "cmp", "mov M A 1"]
        );
    }

    #[test]
    fn test_context_is_updated() {
        let program = parser::parse(&lexer::lex("int a; b = 2; if (c) { }")).unwrap();
        let mut ctx = CompilationContext::new();
        emit_program(&program, &mut ctx).unwrap();
        assert_eq!(ctx.symbols.get("a"), Some(Slot(1)));
        assert_eq!(ctx.symbols.get("b"), Some(Slot(2)));
        assert_eq!(ctx.symbols.get("c"), Some(Slot(3)));
        assert_eq!(ctx.labels.next_if_labels().0, Label::else_(1));
    }

    #[test]
    fn test_assignment_operator_in_expression_is_rejected() {
        let program = Program {
            statements: vec![Statement::Assign {
                name: "a".to_string(),
                value: Expr::binary(Expr::Int(1), OperatorId::Eq, Expr::Int(2)),
            }],
        };
        let mut ctx = CompilationContext::new();
        let err = emit_program(&program, &mut ctx).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedOperator { operator: "=" }));
    }

    #[test]
    fn test_nested_spill_in_left_operand_is_rejected() {
        // (a == b + c) == (d + e): the left operand would need the scratch slot while it is occupied.
        let left = Expr::binary(
            Expr::Ident("a".into()),
            OperatorId::EqEq,
            Expr::binary(Expr::Ident("b".into()), OperatorId::Plus, Expr::Ident("c".into())),
        );
        let right = Expr::binary(Expr::Ident("d".into()), OperatorId::Plus, Expr::Ident("e".into()));
        let program = Program {
            statements: vec![Statement::Assign {
                name: "r".to_string(),
                value: Expr::binary(left, OperatorId::EqEq, right),
            }],
        };
        let mut ctx = CompilationContext::new();
        let err = emit_program(&program, &mut ctx).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_generate_writes_nothing_on_error() {
        let program = Program {
            statements: vec![
                Statement::VarDeclAssign {
                    name: "ok".to_string(),
                    value: Expr::Int(1),
                },
                Statement::Assign {
                    name: "bad".to_string(),
                    value: Expr::binary(Expr::Int(1), OperatorId::Eq, Expr::Int(2)),
                },
            ],
        };
        let mut out = Vec::new();
        let mut ctx = CompilationContext::new();
        assert!(generate(&program, &mut ctx, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_generate_to_sink() {
        let program = parser::parse(&lexer::lex("int a = 4;")).unwrap();
        let mut out = Vec::new();
        let mut ctx = CompilationContext::new();
        generate(&program, &mut ctx, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ldi A 4\nmov M A 1\n");
    }

    #[test]
    fn test_render_listing_wrap() {
        let code = [Instruction::LoadImm(Register::A, 4), Instruction::Store(Slot(1))];
        assert_eq!(render_listing(&code, false), "ldi A 4\nmov M A 1\n");
        assert_eq!(render_listing(&code, true), ".text\nldi A 4\nmov M A 1\nhlt\n");
        assert_eq!(render_listing(&[], true), ".text\nhlt\n");
    }

    #[test]
    fn test_empty_program() {
        let mut ctx = CompilationContext::new();
        assert_eq!(generate_to_string(&Program::default(), &mut ctx).unwrap(), "");
    }
}
