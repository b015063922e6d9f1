//! Check service - compares learner bindings with reference answers
//!
//! This is pure business logic with no I/O. Every function returns a
//! [`CheckResult`]; displaying it is the caller's job.

use crate::core::models::{
    Binding, Bindings, Check, CheckKind, CheckMessages, CheckResult, CheckStatus, Value,
};

/// Default guidance when a single variable was never defined
const UNBOUND_ONE: &str = "We couldn't find any variable named {name}, make sure that you \
                           correctly assigned the variable and ran the cell above.";

/// Default guidance when several variables were never defined
const UNBOUND_MANY: &str = "We couldn't find any variables named {name}, make sure that you \
                            correctly assigned the variables and ran the cell above.";

/// Compare a single learner value with the expected answer
///
/// `actual` is `None` when the learner never defined `name`; that is reported
/// as [`CheckStatus::Unbound`] and the message never reveals the expected
/// value.
///
/// Numbers match within `tolerance` (see [`within_tolerance`]) or exactly when
/// no tolerance is given. Lists match element by element.
#[must_use]
pub fn check_single_value(
    name: &str,
    actual: Option<&Value>,
    expected: &Value,
    tolerance: Option<f64>,
) -> CheckResult {
    let Some(actual) = actual else {
        return CheckResult::unbound(UNBOUND_ONE.replace("{name}", name), vec![name.to_string()]);
    };

    if values_match(actual, expected, tolerance) {
        return CheckResult::pass(format!("Great work! {name} is correct."));
    }

    let message = if actual.same_kind(expected) {
        format!("{name} should be {expected}, but it is {actual}.")
    } else {
        format!(
            "{name} should be {} ({expected}), but it is {} ({actual}).",
            expected.kind(),
            actual.kind()
        )
    };
    CheckResult::wrong(message, vec![name.to_string()])
}

/// Check that every named boolean sub-result is `true`
///
/// Unbound variables take precedence: if any are missing the result is unbound
/// and lists all of them. Otherwise every binding that is not `true` (including
/// non-boolean values) is named in the message and in `failing`.
#[must_use]
pub fn check_multiple_booleans(bindings: &[Binding]) -> CheckResult {
    let missing: Vec<String> =
        bindings.iter().filter(|b| !b.is_bound()).map(|b| b.name.clone()).collect();
    if !missing.is_empty() {
        let template = if missing.len() == 1 { UNBOUND_ONE } else { UNBOUND_MANY };
        return CheckResult::unbound(template.replace("{name}", &join_names(&missing)), missing);
    }

    let failing: Vec<String> = bindings
        .iter()
        .filter(|b| b.value.as_ref().and_then(Value::as_bool) != Some(true))
        .map(|b| b.name.clone())
        .collect();

    if failing.is_empty() {
        let names: Vec<String> = bindings.iter().map(|b| b.name.clone()).collect();
        return CheckResult::pass(match names.len() {
            0 => "Great work!".to_string(),
            1 => format!("Great work! {} returns true.", names[0]),
            _ => format!("Great work! {} all return true.", join_names(&names)),
        });
    }

    let message = if failing.len() == 1 {
        format!(
            "Not quite: {} does not return true yet. Modify that operation so it returns true.",
            failing[0]
        )
    } else {
        format!(
            "Not quite: {} do not return true yet. Modify those operations so they all return \
             true.",
            join_names(&failing)
        )
    };
    CheckResult::wrong(message, failing)
}

/// Evaluate one check against the learner's namespace
#[must_use]
pub fn evaluate(check: &Check, bindings: &Bindings) -> CheckResult {
    log::debug!("Evaluating check {}", check.id);

    let result = match &check.kind {
        CheckKind::Value {
            variable,
            expected,
            tolerance,
        } => check_single_value(variable, bindings.get(variable), expected, *tolerance),
        CheckKind::AllTrue { variables } => {
            let looked_up: Vec<Binding> = variables.iter().map(|v| bindings.binding(v)).collect();
            check_multiple_booleans(&looked_up)
        },
    };

    apply_overrides(result, &check.messages, &check.variables())
}

/// Whether `actual` matches `expected`
///
/// Kinds must agree; a number never matches text or a list.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn values_match(actual: &Value, expected: &Value, tolerance: Option<f64>) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(e)) => match tolerance {
            Some(tol) => within_tolerance(*a, *e, tol),
            None => a == e,
        },
        (Value::Bool(a), Value::Bool(e)) => a == e,
        (Value::Text(a), Value::Text(e)) => a == e,
        (Value::List(a), Value::List(e)) => {
            a.len() == e.len() && a.iter().zip(e).all(|(x, y)| values_match(x, y, tolerance))
        },
        _ => false,
    }
}

/// Relative comparison with an absolute floor
///
/// `|actual - expected| <= tolerance * max(1, |expected|)`. Near zero this
/// behaves as an absolute tolerance. NaN never matches.
#[must_use]
pub fn within_tolerance(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance.abs() * expected.abs().max(1.0)
}

fn apply_overrides(
    mut result: CheckResult,
    messages: &CheckMessages,
    variables: &[&str],
) -> CheckResult {
    let (template, names) = match result.status {
        CheckStatus::Passed => {
            (messages.pass.as_ref(), variables.iter().map(ToString::to_string).collect())
        },
        CheckStatus::Unbound => (messages.unbound.as_ref(), result.failing.clone()),
        CheckStatus::WrongValue => (None, Vec::new()),
    };
    if let Some(template) = template {
        result.message = template.replace("{name}", &join_names(&names));
    }
    result
}

/// "a", "a and b", "a, b and c"
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [one] => one.clone(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}
