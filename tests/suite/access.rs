//! Checked, type-directed and moving access

use std::any::type_name;

use oneof_core::{AccessError, Alternatives, Variant};

use crate::common::{TestClass, TestClassProxy};

type List = Alternatives![i32, TestClass, String];

#[test]
fn inactive_access_names_both_types() {
    let variant = Variant::<List>::new(String::from("live"));
    let err = variant.try_get_at::<0>().unwrap_err();
    assert_eq!(
        err,
        AccessError::Inactive {
            requested: 0,
            requested_type: "i32",
            active: 2,
            active_type: type_name::<String>(),
        }
    );
    assert!(err.to_string().starts_with("alternative 0 (`i32`) requested"));
}

#[test]
fn typed_access_uses_position_of_type() {
    let variant = Variant::<List>::new(TestClassProxy);
    assert!(variant.holds::<TestClass, _>());
    assert_eq!(variant.try_get_as::<TestClass, _>().map(|class| class.a), Ok(42));

    let err = variant.try_get_as::<String, _>().unwrap_err();
    assert!(matches!(
        err,
        AccessError::Inactive {
            requested: 2,
            active: 1,
            ..
        }
    ));
}

#[test]
fn mutable_access_edits_in_place() {
    let mut variant = Variant::<List>::new(TestClass::new(1));
    if let Some(class) = variant.get_as_mut::<TestClass, _>() {
        class.a += 10;
    }
    assert_eq!(variant.get_at::<1>().map(|class| class.a), Some(11));
    assert!(variant.get_at_mut::<0>().is_none());
}

#[test]
fn into_moves_the_value_out() {
    let variant = Variant::<List>::new(String::from("owned"));
    let variant = variant.into_as::<i32, _>().unwrap_err();
    let text = variant.into_at::<2>().ok();
    assert_eq!(text.as_deref(), Some("owned"));
}

#[test]
fn alternative_reports_catalog_entry() {
    let variant = Variant::<List>::new(TestClass::default());
    let info = variant.alternative().unwrap();
    assert_eq!(info.position, 1);
    assert_eq!(info.type_name, type_name::<TestClass>());
    assert_eq!(info.size, size_of::<TestClass>());
    assert_eq!(Variant::<List>::LEN, 3);
}

#[test]
fn unchecked_access_reads_known_alternative() {
    let variant = Variant::<List>::new(-8_i32);
    assert_eq!(variant.index(), Some(0));
    // SAFETY: index 0 was checked above.
    let value = unsafe { variant.get_at_unchecked::<0>() };
    assert_eq!(*value, -8);
}
