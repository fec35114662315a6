use super::*;
use crate::test_helpers::TreeBuilder;
use csx_ir::{Constant, Type};
use pretty_assertions::assert_eq;

#[test]
fn every_binary_kind_has_a_token_except_lowered_ones() {
    for op in BinaryOp::ALL {
        let token = binary_token(op);
        match op {
            BinaryOp::Power | BinaryOp::PowerAssign | BinaryOp::ArrayIndex => {
                assert!(token.is_err(), "{op:?} should have no infix token");
            }
            _ => assert!(token.is_ok(), "{op:?} missing from token table"),
        }
    }
}

#[test]
fn binary_table_has_no_duplicate_kinds() {
    for (i, (op, _)) in BINARY_TOKENS.iter().enumerate() {
        assert!(
            BINARY_TOKENS[i + 1..].iter().all(|(other, _)| other != op),
            "{op:?} listed twice"
        );
    }
    for (i, (op, _)) in UNARY_TOKENS.iter().enumerate() {
        assert!(
            UNARY_TOKENS[i + 1..].iter().all(|(other, _)| other != op),
            "{op:?} listed twice"
        );
    }
}

#[test]
fn checked_kinds_share_unchecked_tokens() {
    let pairs = [
        (BinaryOp::AddChecked, BinaryOp::Add),
        (BinaryOp::SubtractChecked, BinaryOp::Subtract),
        (BinaryOp::MultiplyChecked, BinaryOp::Multiply),
        (BinaryOp::AddAssignChecked, BinaryOp::AddAssign),
        (BinaryOp::SubtractAssignChecked, BinaryOp::SubtractAssign),
        (BinaryOp::MultiplyAssignChecked, BinaryOp::MultiplyAssign),
    ];
    for (checked, unchecked) in pairs {
        assert_eq!(binary_token(checked), binary_token(unchecked));
    }
    assert_eq!(
        unary_token(UnaryOp::NegateChecked),
        unary_token(UnaryOp::Negate)
    );
}

#[test]
fn selected_tokens() {
    assert_eq!(binary_token(BinaryOp::Coalesce), Ok("??"));
    assert_eq!(binary_token(BinaryOp::AndAlso), Ok("&&"));
    assert_eq!(binary_token(BinaryOp::LeftShiftAssign), Ok("<<="));
    assert_eq!(binary_token(BinaryOp::ExclusiveOr), Ok("^"));
    assert_eq!(unary_token(UnaryOp::OnesComplement), Ok("~"));
    assert_eq!(unary_token(UnaryOp::PostDecrementAssign), Ok("--"));
}

#[test]
fn missing_unary_tokens_are_unsupported() {
    for op in [UnaryOp::Quote, UnaryOp::Unbox, UnaryOp::Convert] {
        assert!(matches!(
            unary_token(op),
            Err(RenderError::Unsupported { .. })
        ));
    }
}

#[test]
fn binary_operands_are_parenthesized() {
    let mut t = TreeBuilder::new();
    let a = t.int(1);
    let b = t.int(2);
    for op in BinaryOp::ALL {
        let id = t.binary(op, a, b);
        assert_eq!(
            needs_parens(&t.arena, id),
            op != BinaryOp::ArrayIndex,
            "{op:?}"
        );
    }
}

#[test]
fn unary_parenthesization() {
    let mut t = TreeBuilder::new();
    let x = t.int(1);
    let wrapped = [
        UnaryOp::Negate,
        UnaryOp::Not,
        UnaryOp::Increment,
        UnaryOp::PostIncrementAssign,
        UnaryOp::Convert,
        UnaryOp::TypeAs,
        UnaryOp::IsFalse,
    ];
    for op in wrapped {
        let id = t.unary(op, x, Type::INT);
        assert!(needs_parens(&t.arena, id), "{op:?}");
    }
    let length = t.unary(UnaryOp::ArrayLength, x, Type::INT);
    assert!(!needs_parens(&t.arena, length));
}

#[test]
fn leaves_are_never_parenthesized() {
    let mut t = TreeBuilder::new();
    let v = t.var(Some("x"), Type::INT);
    let param = t.param(v);
    let constant = t.int(7);
    let call = t.write_line(constant);
    let member = t.member(param, "Length", Type::INT);
    for id in [param, constant, call, member] {
        assert!(!needs_parens(&t.arena, id));
    }
}

#[test]
fn only_ternary_conditionals_are_parenthesized() {
    let mut t = TreeBuilder::new();
    let test = t.boolean(true);
    let one = t.int(1);
    let two = t.int(2);
    let ternary = t.cond(test, one, Some(two), Type::INT);
    let statement = t.cond(test, one, Some(two), Type::VOID);
    assert!(needs_parens(&t.arena, ternary));
    assert!(!needs_parens(&t.arena, statement));
}

#[test]
fn lowered_operands() {
    let mut t = TreeBuilder::new();
    let a = t.int(1);
    let sum = t.binary(BinaryOp::Add, a, a);
    let binary = Lowered::Binary {
        op: BinaryOp::Add,
        left: Operand::Expr(a),
        right: Operand::Constant(Constant::Int32(1)),
    };
    let member = Lowered::Member {
        receiver: a,
        member: csx_ir::MemberRef::new(Type::array(Type::INT, 1), "Length"),
    };
    assert!(lowered_needs_parens(&binary));
    assert!(!lowered_needs_parens(&member));
    assert!(operand_needs_parens(
        &t.arena,
        &Operand::Lowered(Box::new(binary))
    ));
    assert!(operand_needs_parens(&t.arena, &Operand::Expr(sum)));
    assert!(!operand_needs_parens(
        &t.arena,
        &Operand::Constant(Constant::Int32(1))
    ));
}
