//! FILENAME: tests/test_calculator.rs
//! Integration tests for evaluating expression strings end to end.

mod common;

use common::{demonstration_table, TestHarness};
use opcalc_engine::{CalcError, EvalError, Fixity, IntegerCalculator, ParseError, RealCalculator};

// ============================================================================
// REFERENCE DEMONSTRATIONS
// ============================================================================

#[test]
fn test_integer_demonstration() {
    let calc = IntegerCalculator::new(demonstration_table());
    assert_eq!(calc.evaluate("4*(2*3)+10"), Ok(34));
}

#[test]
fn test_real_demonstration() {
    let calc = RealCalculator::new(demonstration_table());
    assert_eq!(calc.evaluate("4*((2*3)+10)"), Ok(64.0));
}

// ============================================================================
// PRECEDENCE AND GROUPING
// ============================================================================

#[test]
fn test_precedence() {
    let h = TestHarness::new();
    assert_eq!(h.integer("1+2*3"), 7);
    assert_eq!(h.integer("(1+2)*3"), 9);
    assert_eq!(h.integer("2*3+4*5"), 26);
    assert_eq!(h.real("1+6/4"), 2.5);
}

#[test]
fn test_equal_precedence_chains_group_left() {
    let h = TestHarness::new();
    // (10-3)-2, not 10-(3-2)
    assert_eq!(h.integer("10-3-2"), 5);
    assert_eq!(h.real("8/4/2"), 1.0);
    assert_eq!(h.integer("1-2+3"), 2);
    assert_eq!(h.integer("2*6/3"), 4);
}

#[test]
fn test_right_associative_power() {
    let h = TestHarness::scientific();
    assert_eq!(h.integer("2**3**2"), 512);
    assert_eq!(h.integer("(2**3)**2"), 64);
    assert_eq!(h.integer("2*3**2"), 18);
    assert_eq!(h.integer("17%5*2"), 4);
}

#[test]
fn test_non_associative_operator() {
    let h = TestHarness::with_comparison();
    assert_eq!(h.integer("1<2"), 1);
    assert_eq!(h.integer("3<1+1"), 0);
    assert_eq!(h.integer("(1<2)<3"), 1);
    assert_eq!(
        h.real_err("1<2<3"),
        CalcError::Parse(ParseError::NonAssociativeChain {
            operator: "<".to_string(),
            position: 3,
        })
    );
}

#[test]
fn test_whitespace_is_ignored() {
    let h = TestHarness::new();
    assert_eq!(h.real("1 + 2"), h.real("1+2"));
    assert_eq!(h.real("  4 *\t( 2 * 3 ) + 10 "), 34.0);
}

#[test]
fn test_parentheses_are_transparent() {
    let h = TestHarness::new();
    assert_eq!(h.real("(1+2)"), h.real("1+2"));
    assert_eq!(h.real("((((5))))"), 5.0);
}

// ============================================================================
// UNARY OPERATORS
// ============================================================================

#[test]
fn test_unary_minus() {
    let h = TestHarness::new();
    assert_eq!(h.integer("-5+3"), -2);
    assert_eq!(h.integer("--5"), 5);
    assert_eq!(h.integer("2*-3"), -6);
    assert_eq!(h.integer("-(2+3)"), -5);
    assert_eq!(h.integer("+4"), 4);
}

#[test]
fn test_unary_binds_to_simple_operand_only() {
    let h = TestHarness::scientific();
    // Prefix minus applies to the literal before the power is taken
    assert_eq!(h.integer("-2**2"), 4);
    assert_eq!(h.integer("-(2**2)"), -4);
}

#[test]
fn test_meaningless_unary_is_an_error() {
    let h = TestHarness::new();
    assert_eq!(
        h.real_err("/5"),
        CalcError::Eval(EvalError::UnknownOperatorEffect {
            symbol: "/".to_string(),
            fixity: Fixity::Prefix,
        })
    );
}

// ============================================================================
// DIVISION AND NUMBER CONVERSION
// ============================================================================

#[test]
fn test_real_division_by_zero_is_infinite() {
    let h = TestHarness::new();
    assert_eq!(h.real("1/0"), f64::INFINITY);
    assert_eq!(h.real("-1/0"), f64::NEG_INFINITY);
    assert!(h.real("0/0").is_nan());
}

#[test]
fn test_integer_division_by_zero_fails() {
    let h = TestHarness::new();
    assert!(matches!(
        h.integer_err("1/0"),
        CalcError::Eval(EvalError::NotRepresentable { target: "i64", .. })
    ));
    assert!(matches!(
        h.integer_err("0/0"),
        CalcError::Eval(EvalError::NotRepresentable { .. })
    ));
}

#[test]
fn test_integer_results_truncate_toward_zero() {
    let h = TestHarness::new();
    assert_eq!(h.integer("7/2"), 3);
    assert_eq!(h.integer("-7/2"), -3);
    assert_eq!(h.integer("2.9"), 2);
    assert_eq!(h.integer("0.5*3"), 1);
}

#[test]
fn test_decimal_literals() {
    let h = TestHarness::new();
    assert_eq!(h.real("0.25*4"), 1.0);
    assert_eq!(h.real("1.5+1.5"), 3.0);
}

#[test]
fn test_other_number_types() {
    let table = demonstration_table();
    let small = opcalc_engine::Calculator::<i32>::new(table.clone());
    assert_eq!(small.evaluate("6*7"), Ok(42));
    assert!(small.evaluate("100000*100000").is_err());

    let single = opcalc_engine::Calculator::<f32>::new(table);
    assert_eq!(single.evaluate("1/4"), Ok(0.25f32));
}

// ============================================================================
// MALFORMED INPUT
// ============================================================================

#[test]
fn test_unbalanced_parentheses() {
    let h = TestHarness::new();
    assert_eq!(
        h.real_err("(1+2"),
        CalcError::Parse(ParseError::UnexpectedEndOfInput)
    );
    assert_eq!(
        h.real_err("1+2)"),
        CalcError::Parse(ParseError::UnbalancedParentheses { position: 3 })
    );
    assert_eq!(
        h.real_err("(1+2 3)"),
        CalcError::Parse(ParseError::UnbalancedParentheses { position: 0 })
    );
}

#[test]
fn test_missing_operands() {
    let h = TestHarness::new();
    assert_eq!(h.real_err(""), CalcError::Parse(ParseError::UnexpectedEndOfInput));
    assert_eq!(h.real_err("3*"), CalcError::Parse(ParseError::UnexpectedEndOfInput));
    assert_eq!(h.real_err("--"), CalcError::Parse(ParseError::UnexpectedEndOfInput));
}

#[test]
fn test_invalid_literal() {
    let h = TestHarness::new();
    assert_eq!(
        h.real_err("1.2.3+1"),
        CalcError::Eval(EvalError::InvalidLiteral("1.2.3".to_string()))
    );
}

#[test]
fn test_unknown_characters() {
    let h = TestHarness::new();
    assert_eq!(
        h.real_err("2^3"),
        CalcError::Parse(ParseError::UnrecognizedCharacter { ch: '^', position: 1 })
    );
    assert_eq!(
        h.real_err("x+1"),
        CalcError::Parse(ParseError::UnrecognizedCharacter { ch: 'x', position: 0 })
    );
}

#[test]
fn test_deep_nesting_is_rejected() {
    let h = TestHarness::new();
    let input = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
    assert!(matches!(
        h.real_err(&input),
        CalcError::Parse(ParseError::NestingTooDeep { .. })
    ));

    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(h.real(&shallow), 1.0);
}

#[test]
fn test_nested_sums_within_default_depth() {
    let h = TestHarness::scientific();
    let nested = |levels: usize| format!("{}2{}", "(1+".repeat(levels), ")".repeat(levels));

    assert_eq!(h.real(&nested(100)), 102.0);
    assert_eq!(h.integer(&nested(100)), 102);
    assert!(matches!(
        h.real_err(&nested(200)),
        CalcError::Parse(ParseError::NestingTooDeep { limit: 512 })
    ));
}

#[test]
fn test_error_messages() {
    let h = TestHarness::new();
    assert_eq!(h.real_err("(1+2").to_string(), "Unexpected end of expression");
    assert_eq!(
        h.real_err("*2").to_string(),
        "Operator '*' has no unary meaning"
    );
}
