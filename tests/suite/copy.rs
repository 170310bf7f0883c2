//! Copy construction and destruction

use oneof_core::{Alternatives, Variant};

use crate::common::{Origin, Silent, TestClass, Tracker, silent_counts, silent_counts_since};

#[test]
fn clone_copies_active_class_cell() {
    let original = Variant::<Alternatives![TestClass, i32, f64]>::new(TestClass::new(31));
    let copy = original.clone();

    assert_eq!(copy.index(), Some(0));
    let class = copy.get_at::<0>().unwrap();
    assert_eq!(class.a, 31);
    assert_eq!(class.origin, Origin::Copied);
    assert_eq!(copy.get_at::<1>(), None);
    assert_eq!(copy.get_at::<2>(), None);

    assert_eq!(original.get_at::<0>().map(|class| class.origin), Some(Origin::Value));
}

#[test]
fn clone_runs_copy_constructor_once() {
    let tracker = Tracker::new();
    let original =
        Variant::<Alternatives![i32, TestClass]>::new(TestClass::tracked(5, &tracker));
    let _copy = original.clone();
    assert_eq!(tracker.clones(), 1);
}

#[test]
fn clone_of_scalar_touches_no_other_alternative() {
    let before = silent_counts();
    {
        let original = Variant::<Alternatives![Silent, i32]>::new(32_i32);
        let copy = original.clone();
        assert_eq!(copy.index(), Some(1));
        assert_eq!(copy.get_at::<1>(), Some(&32));
        assert_eq!(silent_counts_since(before), (0, 0, 0));
    }
    assert_eq!(silent_counts_since(before), (0, 0, 0));
}

#[test]
fn clone_and_drop_of_silent_are_counted() {
    let before = silent_counts();
    {
        let original = Variant::<Alternatives![Silent, i32]>::default();
        let _copy = original.clone();
        assert_eq!(silent_counts_since(before), (1, 1, 0));
    }
    assert_eq!(silent_counts_since(before), (1, 1, 2));
}

#[test]
fn drop_destroys_class_value_once() {
    let tracker = Tracker::new();
    {
        let _variant =
            Variant::<Alternatives![i32, TestClass]>::new(TestClass::tracked(1, &tracker));
        assert_eq!(tracker.drops(), 0);
    }
    assert_eq!(tracker.drops(), 1);
}

#[test]
fn original_and_copy_drop_independently() {
    let tracker = Tracker::new();
    let original =
        Variant::<Alternatives![i32, TestClass]>::new(TestClass::tracked(2, &tracker));
    let copy = original.clone();
    drop(original);
    assert_eq!(tracker.drops(), 1);
    assert_eq!(copy.get_at::<1>().map(|class| class.a), Some(2));
    drop(copy);
    assert_eq!(tracker.drops(), 2);
}

#[test]
fn scalar_alternatives_have_no_drop_glue() {
    let scalar = Variant::<Alternatives![i32, TestClass]>::new(3_i32);
    let class = Variant::<Alternatives![i32, TestClass]>::new(TestClass::new(3));
    assert_eq!(scalar.alternative().map(|info| info.needs_drop), Some(false));
    assert_eq!(class.alternative().map(|info| info.needs_drop), Some(true));
}

#[test]
fn copy_variants_are_copy() {
    let original = Variant::<Alternatives![u8, char, f64]>::new('q');
    let copy = original;
    assert_eq!(original.index(), copy.index());
    assert_eq!(original.get_at::<1>(), Some(&'q'));
}
