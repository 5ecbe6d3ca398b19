//! Property-based checks of the combinator laws.

use outcome_of::{err, ok, Outcome};
use quickcheck::{QuickCheck, TestResult};

type Out = Outcome<i32, String>;

fn halve(x: i32) -> Out {
    if x % 3 == 0 {
        err(format!("halve:{x}"))
    } else {
        ok(x / 2)
    }
}

fn shift(x: i32) -> Out {
    if x % 5 == 0 {
        err(format!("shift:{x}"))
    } else {
        ok(x.wrapping_sub(7))
    }
}

fn positive(x: i32) -> Out {
    if x < 0 {
        err(format!("negative:{x}"))
    } else {
        ok(x)
    }
}

#[test]
fn prop_and_then_is_associative() {
    fn prop(input: Result<i32, String>) -> bool {
        let r = Out::from(input);
        let left = r.clone().and_then(halve).and_then(shift).and_then(positive);
        let right = r.and_then(|x| halve(x).and_then(|y| shift(y).and_then(positive)));
        left == right
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Result<i32, String>) -> bool);
}

#[test]
fn prop_and_then_identities() {
    fn prop(x: i32, input: Result<i32, String>) -> bool {
        let r = Out::from(input);
        ok(x).and_then(shift) == shift(x) && r.clone().and_then(ok) == r
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(i32, Result<i32, String>) -> bool);
}

#[test]
fn prop_map_ignores_wrong_variant() {
    fn prop(input: Result<i32, String>) -> TestResult {
        let r = Out::from(input);
        let mapped = r.clone().map(|x| x.wrapping_add(1));
        let mapped_err = r.clone().map_err(|e| e.len());
        match r {
            Outcome::Ok(x) => TestResult::from_bool(
                mapped == Outcome::Ok(x.wrapping_add(1))
                    && mapped_err == Outcome::Ok(x),
            ),
            Outcome::Err(e) => TestResult::from_bool(
                mapped_err == Outcome::Err(e.len()) && mapped == Outcome::Err(e),
            ),
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Result<i32, String>) -> TestResult);
}

#[test]
fn prop_map_composes() {
    fn prop(input: Result<i32, String>) -> bool {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x ^ 0x55;
        let r = Out::from(input);
        r.clone().map(f).map(g) == r.map(|x| g(f(x)))
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Result<i32, String>) -> bool);
}

#[test]
fn prop_and_or_select_one_operand() {
    fn prop(a: Result<i32, String>, b: Result<i32, String>) -> bool {
        let (a, b) = (Out::from(a), Out::from(b));
        let and = a.clone().and(b.clone());
        let or = a.clone().or(b.clone());
        if a.is_ok() {
            and == b && or == a
        } else {
            and == a && or == b
        }
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Result<i32, String>, Result<i32, String>) -> bool);
}

#[test]
fn prop_pair_round_trip() {
    fn prop(input: Result<i32, String>) -> bool {
        let r = Out::from(input);
        let (value, failure) = r.clone().into_pair();
        value.is_some() != failure.is_some()
            && Outcome::from_pair(value.unwrap_or_default(), failure) == r
    }

    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(Result<i32, String>) -> bool);
}
