//! Golden tests for the C# renderer.
//!
//! Each test builds a tree, renders it, and compares the output against the
//! expected source in `tests/golden/`. The same trees are replayed through
//! the recording formatter to check the call protocol.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod common;

use std::fs;
use std::path::PathBuf;

use common::Tree;
use csx_fmt::{render_lambda, FormatterCall, RecordingFormatter, Renderer};
use csx_ir::{
    BinaryOp, CatchBlock, Constant, ElementInit, ExprId, ExprKind, GotoKind, MemberBinding,
    MemberRef, SwitchCase, Type, UnaryOp,
};
use pretty_assertions::assert_eq;

fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

fn read_golden(name: &str) -> String {
    let path = golden_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
        .replace("\r\n", "\n")
}

/// Render `lambda`, compare with the golden file, and replay it through the
/// recording formatter.
fn check(name: &str, tree: &Tree, lambda: ExprId) {
    let text = render_lambda(&tree.arena, lambda).unwrap();
    assert_eq!(text, read_golden(name), "golden mismatch for {name}");

    let mut renderer = Renderer::new(&tree.arena, RecordingFormatter::new());
    renderer.render_lambda(lambda).unwrap();
    let recording = renderer.into_formatter();
    assert_eq!(recording.indent_balance(), 0, "unbalanced indent in {name}");
    assert_eq!(replay(recording.calls()), text, "replay mismatch for {name}");
}

/// Rebuild text from a call sequence with four-space lazy indentation.
fn replay(calls: &[FormatterCall]) -> String {
    let mut out = String::new();
    let mut level = 0usize;
    let mut at_line_start = true;
    for call in calls {
        let text = match call {
            FormatterCall::Token(s)
            | FormatterCall::Keyword(s)
            | FormatterCall::Identifier(s, _)
            | FormatterCall::Reference(s)
            | FormatterCall::Literal(s) => s.as_str(),
            FormatterCall::Space => " ",
            FormatterCall::Line => {
                out.push('\n');
                at_line_start = true;
                continue;
            }
            FormatterCall::Indent => {
                level += 1;
                continue;
            }
            FormatterCall::Dedent => {
                level -= 1;
                continue;
            }
        };
        if at_line_start {
            out.push_str(&"    ".repeat(level));
            at_line_start = false;
        }
        out.push_str(text);
    }
    out
}

#[test]
fn add() {
    let mut t = Tree::new();
    let a = t.var(Some("a"), Type::INT);
    let b = t.var(Some("b"), Type::INT);
    let pa = t.param(a);
    let pb = t.param(b);
    let sum = t.binary(BinaryOp::Add, pa, pb, Type::INT);
    let lambda = t.lambda("Add", vec![a, b], sum, Type::INT);
    check("add.cs", &t, lambda);
}

#[test]
fn power_assign() {
    let mut t = Tree::new();
    let x = t.var(Some("x"), Type::DOUBLE);
    let px = t.param(x);
    let two = t.constant(Constant::Double(2.0));
    let square = t.binary(BinaryOp::PowerAssign, px, two, Type::DOUBLE);
    let body = t.block(vec![], vec![square, px], Type::DOUBLE);
    let lambda = t.lambda("Square", vec![x], body, Type::DOUBLE);
    check("power_assign.cs", &t, lambda);

    let text = render_lambda(&t.arena, lambda).unwrap();
    assert!(!text.contains("**"));
    assert!(!text.contains('^'));
}

#[test]
fn open_generic() {
    let mut t = Tree::new();
    let dictionary = Type::generic_definition(
        Some("System.Collections.Generic"),
        "Dictionary`2",
        &["TKey", "TValue"],
    );
    let token = t.constant(Constant::Type(dictionary));
    let lambda = t.lambda(
        "OpenDictionary",
        vec![],
        token,
        Type::named(Some("System"), "Type"),
    );
    check("open_generic.cs", &t, lambda);
}

#[test]
fn do_while() {
    let mut t = Tree::new();
    let i = t.var(Some("i"), Type::INT);
    let pi = t.param(i);
    let print = t.write_line(pi);
    let step = t.unary(UnaryOp::PostIncrementAssign, pi, Type::INT);
    let body = t.block(vec![], vec![print, step], Type::VOID);
    let ten = t.int(10);
    let test = t.binary(BinaryOp::LessThan, pi, ten, Type::BOOL);
    let lp = t.node(ExprKind::DoWhile { body, test }, Type::VOID);
    let lambda = t.lambda("Count", vec![i], lp, Type::VOID);
    check("do_while.cs", &t, lambda);
}

#[test]
fn switch() {
    let mut t = Tree::new();
    let n = t.var(Some("n"), Type::INT);
    let result = t.var(Some("result"), Type::STRING);
    let pn = t.param(n);
    let pr = t.param(result);
    let section = |t: &mut Tree, text: &str| {
        let value = t.string(text);
        t.assign(pr, value)
    };
    let zero_body = section(&mut t, "zero");
    let small_body = section(&mut t, "small");
    let large_body = section(&mut t, "large");
    let zero = t.int(0);
    let one = t.int(1);
    let two = t.int(2);
    let switch = t.node(
        ExprKind::Switch {
            value: pn,
            cases: vec![
                SwitchCase {
                    test_values: vec![zero],
                    body: zero_body,
                },
                SwitchCase {
                    test_values: vec![one, two],
                    body: small_body,
                },
            ],
            default: Some(large_body),
        },
        Type::VOID,
    );
    let body = t.block(vec![result], vec![switch, pr], Type::STRING);
    let lambda = t.lambda("Classify", vec![n], body, Type::STRING);
    check("switch.cs", &t, lambda);
}

#[test]
fn try_catch() {
    let mut t = Tree::new();
    let text = t.var(Some("text"), Type::STRING);
    let pt = t.param(text);
    let parse = t.static_call(Type::INT, "Parse", vec![pt], Type::INT);
    let fallback = t.int(-1);
    let node = t.node(
        ExprKind::Try {
            body: parse,
            handlers: vec![CatchBlock {
                test: Type::named(Some("System"), "FormatException"),
                variable: None,
                filter: None,
                body: fallback,
            }],
            fault: None,
            finally: None,
        },
        Type::INT,
    );
    let lambda = t.lambda("Parse", vec![text], node, Type::INT);
    check("try_catch.cs", &t, lambda);
}

#[test]
fn labels() {
    let mut t = Tree::new();
    let items = t.var(Some("items"), Type::array(Type::INT, 1));
    let total = t.var(Some("total"), Type::INT);
    let i = t.var(Some("i"), Type::INT);
    let done = t.arena.alloc_label(Some("done"), Type::VOID);
    let p_items = t.param(items);
    let p_total = t.param(total);
    let p_i = t.param(i);

    let zero = t.int(0);
    let init_total = t.assign(p_total, zero);
    let init_i = t.assign(p_i, zero);

    let length = t.unary(UnaryOp::ArrayLength, p_items, Type::INT);
    let at_end = t.binary(BinaryOp::GreaterThanOrEqual, p_i, length, Type::BOOL);
    let leave = t.node(
        ExprKind::Goto {
            kind: GotoKind::Goto,
            target: done,
            value: None,
        },
        Type::VOID,
    );
    let check_end = t.node(
        ExprKind::Conditional {
            test: at_end,
            if_true: leave,
            if_false: None,
        },
        Type::VOID,
    );
    let element = t.binary(BinaryOp::ArrayIndex, p_items, p_i, Type::INT);
    let add = t.binary(BinaryOp::AddAssign, p_total, element, Type::INT);
    let step = t.unary(UnaryOp::PostIncrementAssign, p_i, Type::INT);
    let loop_body = t.block(vec![], vec![check_end, add, step], Type::VOID);
    let lp = t.node(ExprKind::Loop { body: loop_body }, Type::VOID);
    let label = t.node(ExprKind::Label { target: done }, Type::VOID);

    let body = t.block(
        vec![total, i],
        vec![init_total, init_i, lp, label, p_total],
        Type::INT,
    );
    let lambda = t.lambda("Sum", vec![items], body, Type::INT);
    check("labels.cs", &t, lambda);
}

#[test]
fn initializers() {
    let mut t = Tree::new();
    let person = Type::named(Some("Acme"), "Person");
    let create = t.node(ExprKind::New { args: vec![] }, person.clone());
    let name = t.string("Ada");
    let math = t.string("math");
    let poetry = t.string("poetry");
    let init = t.node(
        ExprKind::MemberInit {
            new_expr: create,
            bindings: vec![
                MemberBinding::Assignment {
                    member: MemberRef::new(person.clone(), "Name"),
                    value: name,
                },
                MemberBinding::List {
                    member: MemberRef::new(person.clone(), "Tags"),
                    initializers: vec![
                        ElementInit { args: vec![math] },
                        ElementInit { args: vec![poetry] },
                    ],
                },
            ],
        },
        person.clone(),
    );
    let lambda = t.lambda("Create", vec![], init, person);
    check("initializers.cs", &t, lambda);
}

#[test]
fn anonymous() {
    let mut t = Tree::new();
    let input = t.var(None, Type::INT);
    let local = t.var(None, Type::INT);
    let p_input = t.param(input);
    let p_local = t.param(local);
    let two = t.int(2);
    let doubled = t.binary(BinaryOp::Multiply, p_input, two, Type::INT);
    let store = t.assign(p_local, doubled);
    let body = t.block(vec![local], vec![store, p_local], Type::INT);
    let lambda = t.lambda("", vec![input], body, Type::INT);
    check("anonymous.cs", &t, lambda);
}
