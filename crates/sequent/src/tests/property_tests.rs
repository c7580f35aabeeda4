//! Property-based tests using proptest.
//!
//! Pipeline laws over arbitrary starting values.

use proptest::prelude::*;

use crate::Pipeline;

proptest! {
    /// `new` then `into_value` is the identity.
    #[test]
    fn construction_is_lossless(value: i64) {
        prop_assert_eq!(Pipeline::new(value).into_value(), value);
    }

    /// Chaining two advances equals one advance with the composition.
    #[test]
    fn chaining_equals_composition(value: i64, add: i32, mul in -1000i64..1000) {
        let f = move |n: i64| n.wrapping_add(i64::from(add));
        let g = move |n: i64| n.wrapping_mul(mul);

        let chained = Pipeline::new(value).advance(f).advance(g);
        let composed = Pipeline::new(value).advance(move |n| g(f(n)));

        prop_assert_eq!(chained.value(), composed.value());
    }

    /// `then` and `advance` agree on every input.
    #[test]
    fn then_agrees_with_advance(value: i64, add: i32) {
        let f = move |n: i64| n.wrapping_add(i64::from(add));
        prop_assert_eq!(
            Pipeline::new(value).advance(f).into_value(),
            Pipeline::new(value).then(f).into_value()
        );
    }

    /// Step counting matches the number of advances applied.
    #[test]
    fn steps_count_advances(value: i64, count in 0usize..32) {
        let mut p = Pipeline::new(value);
        for _ in 0..count {
            p = p.advance(|n| n.wrapping_add(1));
        }
        prop_assert_eq!(p.steps(), count);
    }
}
