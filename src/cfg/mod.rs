//! In-memory model of a TLC `.cfg` file.
//!
//! [`Cfg`] holds only what the model checker reads from its configuration
//! file: the specification operator, invariants, temporal properties, constant
//! assignments and model values. Set-like fields are kept as ordered sets so
//! that [`Cfg::merge`] is a plain union and rendering is deterministic without
//! giving positions any meaning.
//!
//! Text conversion lives in [`codec`]; reading templates and writing the
//! generated file lives in [`file`].

pub mod codec;
pub mod errors;
pub mod file;

use std::{
    collections::{BTreeMap, BTreeSet},
    convert::Infallible,
    fmt,
    str::FromStr,
};

pub use codec::{format, parse};
pub use errors::CfgError;
pub use file::{read_template, write_cfg};

/// Specification operator rendered when none has been set.
pub const DEFAULT_SPEC: &str = "Spec";

/// Configuration consumed by TLC.
///
/// `spec` stays `None` until something sets it; [`DEFAULT_SPEC`] is only
/// substituted when the value is rendered, so merging never mistakes the
/// default for an explicit choice. `Some("")` is treated like `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cfg {
    /// Temporal specification operator to check.
    pub spec: Option<String>,
    /// State invariants to check.
    pub invariants: BTreeSet<String>,
    /// Temporal properties to check.
    pub properties: BTreeSet<String>,
    /// Constant assignments; values are opaque TLA+ expressions.
    pub constants: BTreeMap<String, String>,
    /// Constants whose value is their own name.
    pub model_values: BTreeSet<String>,
}

impl Cfg {
    /// Create an empty configuration, the identity for [`Cfg::merge`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Combine two configurations into a new one.
    ///
    /// Invariants, properties and model values are unioned. `other` wins for
    /// `spec` when it has a non-empty one, and for every constant it assigns;
    /// constants only present in `self` are kept. An empty `spec` counts as
    /// unset. Neither operand is modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use tlacli::cfg::Cfg;
    ///
    /// let template = Cfg::new().with_spec("Live").with_constant("N", "3");
    /// let flags = Cfg::new().with_constant("N", "5").with_invariant("TypeOK");
    ///
    /// let merged = template.merge(&flags);
    /// assert_eq!(merged.spec.as_deref(), Some("Live"));
    /// assert_eq!(merged.constants["N"], "5");
    /// assert!(merged.invariants.contains("TypeOK"));
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut constants = self.constants.clone();
        constants.extend(
            other
                .constants
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        Self {
            spec: other
                .explicit_spec()
                .or_else(|| self.explicit_spec())
                .map(str::to_owned),
            invariants: &self.invariants | &other.invariants,
            properties: &self.properties | &other.properties,
            constants,
            model_values: &self.model_values | &other.model_values,
        }
    }

    /// The specification operator, or [`DEFAULT_SPEC`] when unset or empty.
    #[must_use]
    pub fn spec_or_default(&self) -> &str { self.explicit_spec().unwrap_or(DEFAULT_SPEC) }

    /// The specification operator if one was set to a non-empty name.
    fn explicit_spec(&self) -> Option<&str> {
        self.spec.as_deref().filter(|spec| !spec.is_empty())
    }

    /// Set the specification operator.
    #[must_use]
    pub fn with_spec(mut self, spec: impl Into<String>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    /// Add a state invariant.
    #[must_use]
    pub fn with_invariant(mut self, name: impl Into<String>) -> Self {
        self.invariants.insert(name.into());
        self
    }

    /// Add a temporal property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>) -> Self {
        self.properties.insert(name.into());
        self
    }

    /// Assign a constant, replacing any earlier value for the same name.
    #[must_use]
    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.constants.insert(name.into(), value.into());
        self
    }

    /// Declare a model value.
    #[must_use]
    pub fn with_model_value(mut self, name: impl Into<String>) -> Self {
        self.model_values.insert(name.into());
        self
    }
}

impl fmt::Display for Cfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&format(self)) }
}

impl FromStr for Cfg {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(parse(s)) }
}
