use proptest::prelude::*;
use retrocontext::{ContextValues, DecodingContext, Pointer};

/// Register names: a few fixed ones so contexts share keys, plus arbitrary
/// text including empty names and the `!`, `_` and `\` characters the text
/// form treats specially.
fn register() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["TMReg", "BANK", "MODE", "A", "B"]).prop_map(String::from),
        "[A-Za-z!_\\\\]{0,6}",
        ".*",
    ]
}

fn context() -> impl Strategy<Value = DecodingContext> {
    prop::collection::btree_map(register(), any::<u64>(), 0..5).prop_map(DecodingContext::from)
}

proptest! {
    #[test]
    fn put_then_get(c in context(), r in register(), v in any::<u64>()) {
        let put = c.put_context_reg(r.as_str(), v);

        prop_assert!(put.has_value_for_reg(&r));
        prop_assert_eq!(Ok(v), put.get_context_value(&r));
    }

    #[test]
    fn put_leaves_receiver_alone(c in context(), r in register(), v in any::<u64>()) {
        let before = c.clone();
        let was_present = c.has_value_for_reg(&r);
        let _ = c.put_context_reg(r.as_str(), v);

        prop_assert_eq!(&before, &c);
        prop_assert_eq!(was_present, c.has_value_for_reg(&r));
    }

    #[test]
    fn removal(c in context(), r in register()) {
        let removed = c.context_without_register(&r);

        prop_assert!(!removed.has_value_for_reg(&r));
        if !c.has_value_for_reg(&r) {
            prop_assert_eq!(&removed, &c);
        }
    }

    #[test]
    fn idempotence(c in context(), r in register(), v in any::<u64>()) {
        let once = c.put_context_reg(r.as_str(), v);
        prop_assert_eq!(once.put_context_reg(r.as_str(), v), once.clone());

        let removed = c.context_without_register(&r);
        prop_assert_eq!(removed.context_without_register(&r), removed.clone());
    }

    #[test]
    fn independent_puts_commute(
        c in context(),
        r1 in register(),
        r2 in register(),
        v1 in any::<u64>(),
        v2 in any::<u64>(),
    ) {
        prop_assume!(r1 != r2);

        let forward = c.put_context_reg(r1.as_str(), v1).put_context_reg(r2.as_str(), v2);
        let backward = c.put_context_reg(r2.as_str(), v2).put_context_reg(r1.as_str(), v1);

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn insertion_order_irrelevant(values in prop::collection::btree_map(register(), any::<u64>(), 0..5)) {
        let mut forward = DecodingContext::new();
        for (r, v) in values.iter() {
            forward.update_context_reg(r.as_str(), *v);
        }

        let mut backward = DecodingContext::new();
        for (r, v) in values.iter().rev() {
            backward.update_context_reg(r.as_str(), *v);
        }

        prop_assert_eq!(&forward, &backward);
        prop_assert_eq!(forward.context_values(), &values);
    }

    #[test]
    fn in_place_matches_copy(c in context(), r in register(), v in any::<u64>()) {
        let mut updated = c.clone();
        updated.update_context_reg(r.as_str(), v);
        prop_assert_eq!(&updated, &c.put_context_reg(r.as_str(), v));

        let mut dropped = c.clone();
        dropped.drop_reg(&r);
        prop_assert_eq!(&dropped, &c.context_without_register(&r));
    }

    #[test]
    fn equality_is_an_equivalence(a in context(), b in context(), c in context()) {
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(a == b, b == a);
        if a == b && b == c {
            prop_assert_eq!(&a, &c);
        }
    }

    #[test]
    fn ordering_agrees_with_equality(a in context(), b in context()) {
        prop_assert_eq!(a == b, a.cmp(&b) == std::cmp::Ordering::Equal);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn text_form_reparses(c in context()) {
        prop_assert_eq!(Ok(c.clone()), c.to_string().parse::<DecodingContext>());
    }

    #[test]
    fn pointer_text_form_reparses(c in context(), address in any::<u32>()) {
        let ptr = Pointer::new(address, c);
        let reparsed = ptr.to_string().parse::<Pointer<u32>>();

        prop_assert!(reparsed.is_ok());
        prop_assert_eq!(reparsed.unwrap(), ptr);
    }
}

#[test]
fn thumb_scenario() {
    let c0 = DecodingContext::new();
    let c1 = c0.put_context_reg("thumb", 1);

    assert_eq!(Ok(1), c1.get_context_value("thumb"));
    assert!(!c0.has_value_for_reg("thumb"));

    let c2 = c1.context_without_register("thumb");
    assert_eq!(c0, c2);

    let values: ContextValues = c1.into();
    assert_eq!(Some(&1), values.get("thumb"));
}
