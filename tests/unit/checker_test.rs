//! Tests for the checker service

use lessoncheck::core::models::{Binding, CheckStatus, Value};
use lessoncheck::core::services::{check_multiple_booleans, check_single_value, values_match};

const TOLERANCE: Option<f64> = Some(1e-3);

mod single_value {
    use super::*;

    #[test]
    fn product_of_conversion_is_accepted() {
        let march_precip_in = 1.85;
        let in_to_mm = 25.4;
        let actual = Value::Number(march_precip_in * in_to_mm);

        let result =
            check_single_value("march_precip_mm", Some(&actual), &Value::Number(46.998), TOLERANCE);
        assert!(result.passed(), "{}", result.message);
        assert!(result.failing.is_empty());
    }

    #[test]
    fn rounded_down_value_is_wrong() {
        let result = check_single_value(
            "march_precip_mm",
            Some(&Value::Number(46.0)),
            &Value::Number(46.998),
            TOLERANCE,
        );
        assert_eq!(result.status, CheckStatus::WrongValue);
        assert!(result.message.contains("46.998"));
        assert!(result.message.contains("46.0"));
        assert_eq!(result.failing, vec!["march_precip_mm".to_string()]);
    }

    #[test]
    fn missing_variable_is_unbound_not_wrong() {
        let result = check_single_value("march_precip_mm", None, &Value::Number(46.998), TOLERANCE);
        assert_eq!(result.status, CheckStatus::Unbound);
        assert!(result.message.starts_with("We couldn't find any variable named march_precip_mm"));
        assert!(!result.message.contains("should be"));
    }

    #[test]
    fn wrong_value_never_uses_unbound_message() {
        let result = check_single_value(
            "march_precip_mm",
            Some(&Value::Number(1.0)),
            &Value::Number(46.998),
            TOLERANCE,
        );
        assert!(!result.message.contains("couldn't find"));
    }

    #[test]
    fn combined_sum_is_accepted() {
        let mut annual_avg_precip_nyc = 42.65;
        annual_avg_precip_nyc += 3.58;
        let result = check_single_value(
            "annual_avg_precip_nyc",
            Some(&Value::Number(annual_avg_precip_nyc)),
            &Value::Number(42.65 + 3.58),
            TOLERANCE,
        );
        assert!(result.passed());
    }

    #[test]
    fn base_without_missing_month_is_rejected() {
        let result = check_single_value(
            "annual_avg_precip_nyc",
            Some(&Value::Number(42.65)),
            &Value::Number(42.65 + 3.58),
            TOLERANCE,
        );
        assert_eq!(result.status, CheckStatus::WrongValue);
    }

    #[test]
    fn string_lists_require_exact_sequence() {
        let expected = Value::strings(["January", "February", "March", "April"]);
        let same = Value::strings(["January", "February", "March", "April"]);
        let reordered = Value::strings(["February", "January", "March", "April"]);
        let short = Value::strings(["January", "February"]);

        assert!(check_single_value("months", Some(&same), &expected, None).passed());
        assert!(!check_single_value("months", Some(&reordered), &expected, None).passed());
        assert!(!check_single_value("months", Some(&short), &expected, None).passed());
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let actual = Value::Number(46.0);
        let expected = Value::Number(46.998);
        let first = check_single_value("x", Some(&actual), &expected, TOLERANCE);
        let second = check_single_value("x", Some(&actual), &expected, TOLERANCE);
        assert_eq!(first, second);
    }
}

mod multiple_booleans {
    use super::*;

    const NAMES: [&str; 4] = ["relational", "identity", "membership", "logical"];

    fn bindings(values: [bool; 4]) -> Vec<Binding> {
        NAMES.iter().zip(values).map(|(name, v)| Binding::bound(*name, v)).collect()
    }

    #[test]
    fn all_true_passes() {
        let result = check_multiple_booleans(&bindings([true; 4]));
        assert!(result.passed());
        assert!(result.message.contains("all return true"));
    }

    #[test]
    fn flipping_one_names_that_one() {
        for (i, name) in NAMES.iter().enumerate() {
            let mut values = [true; 4];
            values[i] = false;
            let result = check_multiple_booleans(&bindings(values));
            assert_eq!(result.status, CheckStatus::WrongValue);
            assert_eq!(result.failing, vec![(*name).to_string()]);
            assert!(result.message.contains(name));
            for other in NAMES.iter().filter(|n| *n != name) {
                assert!(!result.message.contains(other), "{other} should not be named");
            }
        }
    }

    #[test]
    fn all_false_names_everything() {
        let result = check_multiple_booleans(&bindings([false; 4]));
        assert_eq!(result.failing.len(), 4);
        assert!(result.message.contains("relational, identity, membership and logical"));
    }

    #[test]
    fn missing_names_are_unbound() {
        let result = check_multiple_booleans(&[
            Binding::bound("relational", true),
            Binding::unbound("identity"),
            Binding::unbound("logical"),
        ]);
        assert_eq!(result.status, CheckStatus::Unbound);
        assert_eq!(result.failing, vec!["identity".to_string(), "logical".to_string()]);
        assert!(result.message.contains("variables named identity and logical"));
    }
}

#[test]
fn numbers_never_match_other_kinds() {
    assert!(!values_match(&Value::Number(1.0), &Value::Bool(true), Some(1.0)));
    assert!(!values_match(&Value::from("46.99"), &Value::Number(46.99), Some(1.0)));
}
