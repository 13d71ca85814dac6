//! Command-line plusargs forwarded to the simulated design.
//!
//! Process arguments are handed to the design rather than interpreted by the harness.
//! Arguments of the form `+name=value` become keyed values, `+name` becomes a flag,
//! and anything else is kept as a plain argument.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::common::{HarnessError, Result};

/// Parsed process arguments.
///
/// # Examples
///
/// ```
/// use tbsim_core::sim::PlusArgs;
///
/// let args = PlusArgs::parse(["+verbose", "+reset_value=7", "run.log"]);
/// assert!(args.test("verbose"));
/// assert_eq!(args.value("reset_value"), Some("7"));
/// assert_eq!(args.value_as::<u8>("reset_value").unwrap(), Some(7));
/// assert_eq!(args.plain(), ["run.log"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlusArgs {
    values: BTreeMap<String, Option<String>>,
    plain: Vec<String>,
}

impl PlusArgs {
    /// Parses arguments in order; a repeated plusarg keeps its first occurrence.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            match arg.strip_prefix('+') {
                Some(body) if !body.is_empty() => {
                    let (name, value) = match body.split_once('=') {
                        Some((name, value)) => (name, Some(value.to_owned())),
                        None => (body, None),
                    };
                    let _ = parsed.values.entry(name.to_owned()).or_insert(value);
                }
                _ => parsed.plain.push(arg.to_owned()),
            }
        }
        parsed
    }

    /// Whether a plusarg with this name was given, with or without a value.
    pub fn test(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Raw value of `+name=value`, if given with a value.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Option::as_deref)
    }

    /// Value of `+name=value` parsed as `T`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if absent, `Ok(Some(v))` if it parses, `HarnessError::PlusArg` otherwise.
    pub fn value_as<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        self.value(name)
            .map(|raw| {
                raw.parse().map_err(|_| HarnessError::PlusArg {
                    name: name.to_owned(),
                    value: raw.to_owned(),
                })
            })
            .transpose()
    }

    /// Arguments that were not plusargs.
    pub fn plain(&self) -> &[String] {
        &self.plain
    }

    /// Whether no arguments at all were given.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.plain.is_empty()
    }
}
