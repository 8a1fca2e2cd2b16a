//! Stack Calculator - Core Library
//!
//! Public API surface for the calculator engine: a fixed-capacity stack of
//! signed integers and the checked operations applied to its top.

pub mod config;
pub mod engine;
pub mod error;
pub mod ops;

// Re-export commonly used types
pub use config::CalcConfig;
pub use engine::{Calculator, Stack, Value, VALUE_MAX, VALUE_MIN};
pub use error::{CalcError, CalcResult};
pub use ops::Operation;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn push_top_pop_and_space_left() {
        let mut calc = Calculator::new(10).expect("create failed");
        assert_eq!(calc.space_left(), 10);

        for (pushed, value) in [79, 32, 35].into_iter().enumerate() {
            calc.push(value).expect("push failed");
            assert_eq!(calc.top(), Ok(value));
            assert_eq!(calc.space_left(), 10 - pushed - 1);
        }

        assert_eq!(calc.remove(2), 2);
        assert_eq!(calc.top(), Ok(79));
        assert_eq!(calc.space_left(), 9);

        assert_eq!(calc.remove(0), 1);
        assert_eq!(calc.space_left(), 10);
    }

    #[test]
    fn remove_more_than_count_empties() {
        let mut calc = Calculator::new(5).expect("create failed");
        calc.push(1).unwrap();
        calc.push(2).unwrap();
        assert_eq!(calc.remove(9), 2);
        assert!(calc.is_empty());
        assert_eq!(calc.remove(0), 0);
    }

    #[test]
    fn zero_capacity_fails() {
        assert_eq!(
            Calculator::new(0).map(|_| ()),
            Err(CalcError::Allocation { capacity: 0 })
        );
    }

    #[test]
    fn iteration_is_bottom_to_top_and_restartable() {
        let mut calc = Calculator::new(4).unwrap();
        for v in [3, 1, 4] {
            calc.push(v).unwrap();
        }
        let first: Vec<_> = calc.iter().copied().collect();
        let second: Vec<_> = (&calc).into_iter().copied().collect();
        assert_eq!(first, vec![3, 1, 4]);
        assert_eq!(first, second);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CalcError::Domain { value: -1 }.to_string(),
            "square root of -1: complex numbers unsupported"
        );
        assert_eq!(
            CalcError::InsufficientOperands {
                op: Operation::Add,
                required: 2,
                available: 1,
            }
            .to_string(),
            "'+' needs 2 operand(s), 1 on the stack"
        );
        assert_eq!(
            CalcError::InvalidShift { amount: 70 }.to_string(),
            "shift amount 70 is outside 0..64"
        );
    }

    proptest! {
        #[test]
        fn fresh_engine_is_empty(capacity in 1usize..512) {
            let calc = Calculator::new(capacity).unwrap();
            prop_assert_eq!(calc.space_left(), capacity);
            prop_assert_eq!(calc.count(), 0);
        }

        #[test]
        fn pushes_fill_the_stack(values in prop::collection::vec(any::<Value>(), 1..64)) {
            let mut calc = Calculator::new(64).unwrap();
            for (i, &v) in values.iter().enumerate() {
                calc.push(v).unwrap();
                prop_assert_eq!(calc.top(), Ok(v));
                prop_assert_eq!(calc.space_left(), 64 - i - 1);
            }
        }

        #[test]
        fn push_pop_round_trip(prefix in prop::collection::vec(any::<Value>(), 0..16), v in any::<Value>()) {
            let mut calc = Calculator::new(32).unwrap();
            for &p in &prefix {
                calc.push(p).unwrap();
            }
            let before = calc.count();
            calc.push(v).unwrap();
            prop_assert_eq!(calc.pop(), Ok(v));
            prop_assert_eq!(calc.count(), before);
        }

        #[test]
        fn remove_clamps(k in 0usize..32, n in 0usize..64) {
            let mut calc = Calculator::new(32).unwrap();
            for v in 0..k {
                calc.push(v as Value).unwrap();
            }
            let expected = if n == 0 || n > k { k } else { n };
            prop_assert_eq!(calc.remove(n), expected);
            prop_assert_eq!(calc.count(), k - expected);
        }
    }
}
