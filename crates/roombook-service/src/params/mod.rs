//! Rule-driven mapping of filter state to API query parameters.
//!
//! ## Summary
//! A [`ParameterRuleTable`] lists, per output field, how to compute its value
//! from the caller's filter object. A rule either always applies
//! ([`ParameterRule::Transform`]) or only when a predicate holds
//! ([`ParameterRule::Conditional`]). A rule returning `Ok(None)` produces no
//! field at all; a rule returning JSON `null` produces a field that is then
//! removed by [`prune_nulls`], together with every other null leaf.

mod prune;

pub use prune::{prune_map, prune_nulls};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ServiceError, ServiceResult};

/// Computes a parameter value; `Ok(None)` omits the parameter.
pub type RuleFn<P> = Box<dyn Fn(&P) -> anyhow::Result<Option<Value>> + Send + Sync>;
/// Decides whether a conditional parameter is emitted.
pub type PredicateFn<P> = Box<dyn Fn(&P) -> bool + Send + Sync>;

/// How one output parameter is derived from the input `P`.
pub enum ParameterRule<P> {
    Transform(RuleFn<P>),
    Conditional {
        only_if: PredicateFn<P>,
        serializer: RuleFn<P>,
    },
}

impl<P> ParameterRule<P> {
    pub fn transform<F>(serializer: F) -> Self
    where
        F: Fn(&P) -> anyhow::Result<Option<Value>> + Send + Sync + 'static,
    {
        Self::Transform(Box::new(serializer))
    }

    pub fn conditional<C, F>(only_if: C, serializer: F) -> Self
    where
        C: Fn(&P) -> bool + Send + Sync + 'static,
        F: Fn(&P) -> anyhow::Result<Option<Value>> + Send + Sync + 'static,
    {
        Self::Conditional {
            only_if: Box::new(only_if),
            serializer: Box::new(serializer),
        }
    }

    /// ## Summary
    /// Evaluates the rule against `params`.
    ///
    /// ## Errors
    /// Propagates the error of the serializer closure.
    pub fn evaluate(&self, params: &P) -> anyhow::Result<Option<Value>> {
        match self {
            Self::Transform(serializer) => serializer(params),
            Self::Conditional {
                only_if,
                serializer,
            } => {
                if only_if(params) {
                    serializer(params)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

impl<P> std::fmt::Debug for ParameterRule<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transform(_) => f.write_str("Transform"),
            Self::Conditional { .. } => f.write_str("Conditional"),
        }
    }
}

/// Ordered set of parameter rules for an input type `P`.
#[derive(Debug)]
pub struct ParameterRuleTable<P> {
    rules: Vec<(String, ParameterRule<P>)>,
}

impl<P> Default for ParameterRuleTable<P> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<P> ParameterRuleTable<P> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule for `field`, replacing an earlier rule for the same field.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, rule: ParameterRule<P>) -> Self {
        let field = field.into();
        self.rules.retain(|(existing, _)| *existing != field);
        self.rules.push((field, rule));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterRule<P>)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// ## Summary
/// Converts any serializable value into a rule result.
///
/// ## Errors
/// Returns an error if `value` cannot be represented as JSON.
pub fn to_param<T: Serialize>(value: T) -> anyhow::Result<Option<Value>> {
    Ok(Some(serde_json::to_value(value)?))
}

/// ## Summary
/// Builds the query parameters for `params` from a rule table.
///
/// Fields whose rule yields no value are omitted, then null leaves are pruned
/// recursively.
///
/// ## Errors
/// Returns `ServiceError::RuleError` for the first rule that fails; no
/// partial result is returned.
pub fn preprocess_parameters<P>(
    params: &P,
    rules: &ParameterRuleTable<P>,
) -> ServiceResult<Map<String, Value>> {
    let mut output = Map::new();

    for (field, rule) in rules.iter() {
        let value = rule
            .evaluate(params)
            .map_err(|source| ServiceError::RuleError {
                field: field.to_owned(),
                source,
            })?;

        match value {
            Some(value) => {
                output.insert(field.to_owned(), value);
            }
            None => tracing::trace!(field, "Parameter omitted"),
        }
    }

    let output = prune_map(output);
    tracing::debug!(
        rules = rules.len(),
        parameters = output.len(),
        "Preprocessed query parameters"
    );
    Ok(output)
}
