//! Debug output snapshots

use std::panic::{AssertUnwindSafe, catch_unwind};

use insta::assert_snapshot;
use oneof_core::{Alternatives, Variant};

use crate::common::{FailingProxy, TestClass};

type List = Alternatives![i32, TestClass, String];

#[test]
fn debug_scalar() {
    let variant = Variant::<List>::new(12_i32);
    assert_snapshot!(format!("{variant:?}"), @"Variant { index: 0, value: 12 }");
}

#[test]
fn debug_string() {
    let variant = Variant::<List>::new("abc");
    assert_snapshot!(format!("{variant:?}"), @r#"Variant { index: 2, value: "abc" }"#);
}

#[test]
fn debug_class_pretty() {
    let variant = Variant::<List>::new(TestClass::new(31)).clone();
    assert_snapshot!(format!("{variant:#?}"), @r"
    Variant {
        index: 1,
        value: TestClass {
            a: 31,
            origin: Copied,
        },
    }
    ");
}

#[test]
fn debug_valueless() {
    let mut variant = Variant::<List>::default();
    let _ = catch_unwind(AssertUnwindSafe(|| variant.assign(FailingProxy)));
    assert_snapshot!(format!("{variant:?}"), @"Variant(<valueless>)");
}
