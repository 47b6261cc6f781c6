//! # Fixture Module Contract
//!
//! Exercises every scalar utility through the crate root, the way a
//! downstream caller would.

#[cfg(test)]
mod tests {
    use act_01_scalar_utils::{
        add_maybe, concatenate_strings, concatenate_strings_with_default,
        convert_float_sequence_to_numbers, NamedValue, DEFAULT_FIRST_OPERAND,
    };
    use proptest::prelude::*;

    #[test]
    fn test_named_value_lowers_argument_not_name() {
        let alice = NamedValue::new("Alice");
        let lowered = alice.to_lower("BOB");

        assert_eq!(lowered, "bob");
        assert_ne!(lowered, "alice");
        assert_eq!(alice.name(), "Alice");
    }

    #[test]
    fn test_add_maybe_table() {
        let cases: [(Option<f64>, Option<f64>, f64); 5] = [
            (None, None, 0.0),
            (None, Some(9.0), 0.0),
            (Some(2.5), None, 2.5),
            (Some(2.5), Some(0.5), 3.0),
            (Some(-1.0), Some(1.0), 0.0),
        ];
        for (a, b, expected) in cases {
            assert_eq!(add_maybe(a, b), expected, "add_maybe({a:?}, {b:?})");
        }
    }

    #[test]
    fn test_concatenate_defaults() {
        assert_eq!(DEFAULT_FIRST_OPERAND, "d");
        assert_eq!(concatenate_strings(Some(""), ""), "");
        assert_eq!(concatenate_strings(None, "b"), "db");
        assert_eq!(concatenate_strings_with_default(None, "", ""), "");
    }

    #[test]
    fn test_float_conversion() {
        assert!(convert_float_sequence_to_numbers(&[]).is_empty());
        assert_eq!(
            convert_float_sequence_to_numbers(&[1.5, -2.25]),
            vec![1.5, -2.25]
        );
    }

    #[test]
    fn test_named_value_json_round_trip() {
        let value = NamedValue::new("");
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "" }));
    }

    #[test]
    fn test_utilities_are_thread_safe() {
        let handles: Vec<_> = (0..4_i32)
            .map(|i| {
                std::thread::spawn(move || {
                    let value = NamedValue::new(format!("Worker{i}"));
                    (
                        add_maybe(Some(i), Some(1)),
                        value.to_lower("MIXED"),
                        concatenate_strings(None, &i.to_string()),
                    )
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let (sum, lowered, joined) = handle.join().unwrap();
            assert_eq!(sum, i as i32 + 1);
            assert_eq!(lowered, "mixed");
            assert_eq!(joined, format!("d{i}"));
        }
    }

    proptest! {
        #[test]
        fn prop_to_lower_ignores_stored_name(stored in ".*", arg in ".*") {
            let value = NamedValue::new(stored.clone());
            prop_assert_eq!(value.to_lower(&arg), arg.to_lowercase());
            prop_assert_eq!(value.name(), stored.as_str());
        }

        #[test]
        fn prop_concatenation_length(a in ".*", b in ".*") {
            let joined = concatenate_strings(Some(&a), &b);
            prop_assert_eq!(joined.len(), a.len() + b.len());
            prop_assert!(joined.starts_with(a.as_str()));
            prop_assert!(joined.ends_with(b.as_str()));
        }
    }
}
