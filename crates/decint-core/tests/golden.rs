//! Golden file tests.
//!
//! Reads tests/testdata/decimal_golden.json and checks literal inputs
//! against their expected outputs for every operation, including the
//! signed truncated-division table and emission canonicalization.

use serde::Deserialize;

use decint_core::{DecInt, DecUint};

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
    signed_divmod: Vec<SignedCase>,
    emit_canonical: Vec<EmitCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    op: String,
    a: String,
    b: String,
    expect: Expect,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Expect {
    Value(String),
    DivMod { q: String, r: String },
}

#[derive(Deserialize)]
struct SignedCase {
    a: String,
    b: String,
    q: String,
    r: String,
}

#[derive(Deserialize)]
struct EmitCase {
    input: String,
    expect: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/decimal_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn dec(s: &str) -> DecUint {
    s.parse().expect("golden operand")
}

#[test]
fn golden_unsigned_operations() {
    let data = load_golden_data();
    for case in &data.cases {
        let a = dec(&case.a);
        let b = dec(&case.b);
        match (case.op.as_str(), &case.expect) {
            ("add", Expect::Value(expect)) => {
                assert_eq!((&a + &b).to_decimal(), *expect, "{} + {}", case.a, case.b);
            }
            ("sub", Expect::Value(expect)) => {
                assert_eq!((&a - &b).to_decimal(), *expect, "{} - {}", case.a, case.b);
            }
            ("mul", Expect::Value(expect)) => {
                assert_eq!((&a * &b).to_decimal(), *expect, "{} * {}", case.a, case.b);
            }
            ("divmod", Expect::DivMod { q, r }) => {
                let (got_q, got_r) = a.divmod(&b);
                assert_eq!(got_q.to_decimal(), *q, "{} / {}", case.a, case.b);
                assert_eq!(got_r.to_decimal(), *r, "{} % {}", case.a, case.b);
            }
            (op, _) => panic!("malformed golden case for op {op}"),
        }
    }
}

#[test]
fn golden_signed_truncated_division() {
    let data = load_golden_data();
    for case in &data.signed_divmod {
        let a: DecInt = case.a.parse().expect("signed operand");
        let b: DecInt = case.b.parse().expect("signed operand");
        let (q, r) = a.divmod(&b);
        assert_eq!(q.to_decimal(), case.q, "{} / {}", case.a, case.b);
        assert_eq!(r.to_decimal(), case.r, "{} % {}", case.a, case.b);
    }
}

#[test]
fn golden_emit_canonicalizes() {
    let data = load_golden_data();
    for case in &data.emit_canonical {
        let v = dec(&case.input);
        assert_eq!(v.to_decimal(), case.expect, "canonicalize {:?}", case.input);
    }
}

#[test]
fn golden_division_law_holds() {
    let data = load_golden_data();
    for case in &data.cases {
        if case.op != "divmod" {
            continue;
        }
        let a = dec(&case.a);
        let b = dec(&case.b);
        let (q, r) = a.divmod(&b);
        assert!(r < b, "remainder bound for {} / {}", case.a, case.b);
        assert_eq!(&q * &b + &r, a, "euclidean law for {} / {}", case.a, case.b);
    }
}
