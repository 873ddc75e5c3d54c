//! Transfer scenarios and the pessimistic / realistic / optimistic policy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::RangeError;

/// Pessimistic overhead increase and its cap.
const PESSIMISTIC_OVERHEAD: (f64, f64) = (0.10, 0.5);
/// Pessimistic compression decrease (floored at 0).
const PESSIMISTIC_COMPRESSION: f64 = 0.10;
/// Pessimistic parallelism efficacy decrease and its floor.
const PESSIMISTIC_EFFICACY: (f64, f64) = (0.20, 0.3);
/// Pessimistic stream efficiency decrease and its floor.
const PESSIMISTIC_STREAM: (f64, f64) = (0.10, 0.3);

/// Optimistic overhead decrease (floored at 0).
const OPTIMISTIC_OVERHEAD: f64 = 0.05;
/// Optimistic compression increase and its cap.
const OPTIMISTIC_COMPRESSION: (f64, f64) = (0.10, 0.9);
/// Optimistic parallelism efficacy increase (capped at 1).
const OPTIMISTIC_EFFICACY: f64 = 0.20;
/// Optimistic stream efficiency increase (capped at 1).
const OPTIMISTIC_STREAM: f64 = 0.10;

/// The three standard scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// Worse link conditions than the base parameters.
    Pessimistic,
    /// The base parameters as given.
    #[default]
    Realistic,
    /// Better link conditions than the base parameters.
    Optimistic,
}

impl ScenarioKind {
    /// Returns the scenario name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pessimistic => "pessimistic",
            Self::Realistic => "realistic",
            Self::Optimistic => "optimistic",
        }
    }

    /// Returns all scenarios, from worst to best.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Pessimistic, Self::Realistic, Self::Optimistic]
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pessimistic" | "worst" => Ok(Self::Pessimistic),
            "realistic" | "base" => Ok(Self::Realistic),
            "optimistic" | "best" => Ok(Self::Optimistic),
            _ => Err(ScenarioKindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid scenario name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioKindParseError(String);

impl std::fmt::Display for ScenarioKindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid scenario '{}', expected one of: pessimistic, realistic, optimistic",
            self.0
        )
    }
}

impl std::error::Error for ScenarioKindParseError {}

/// The four modeling fractions shared by every scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Fraction of link capacity lost to protocol overhead, in `[0, 1)`.
    pub overhead: f64,
    /// Fraction of the data volume removed by compression, in `[0, 1)`.
    pub compression: f64,
    /// How much each additional stream contributes, in `[0, 1]`.
    pub parallelism_efficacy: f64,
    /// Fraction of usable capacity a single stream achieves, in `[0, 1]`.
    pub stream_efficiency: f64,
}

impl ScenarioParams {
    /// Creates a new parameter set without validation.
    #[must_use]
    pub const fn new(
        overhead: f64,
        compression: f64,
        parallelism_efficacy: f64,
        stream_efficiency: f64,
    ) -> Self {
        Self {
            overhead,
            compression,
            parallelism_efficacy,
            stream_efficiency,
        }
    }

    /// Checks every fraction lies in its allowed interval.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Fraction`] naming the first offending field.
    pub fn validate(&self) -> Result<(), RangeError> {
        check_fraction("overhead", "[0, 1)", self.overhead, false)?;
        check_fraction("compression", "[0, 1)", self.compression, false)?;
        check_fraction(
            "parallelism efficacy",
            "[0, 1]",
            self.parallelism_efficacy,
            true,
        )?;
        check_fraction("stream efficiency", "[0, 1]", self.stream_efficiency, true)
    }

    /// Returns the validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Fraction`] if any field is out of range.
    pub fn validated(self) -> Result<Self, RangeError> {
        self.validate()?;
        Ok(self)
    }

    /// Returns the pessimistic perturbation of these parameters.
    #[must_use]
    pub fn pessimistic(&self) -> Self {
        Self {
            overhead: (self.overhead + PESSIMISTIC_OVERHEAD.0).min(PESSIMISTIC_OVERHEAD.1),
            compression: (self.compression - PESSIMISTIC_COMPRESSION).max(0.0),
            parallelism_efficacy: (self.parallelism_efficacy - PESSIMISTIC_EFFICACY.0)
                .max(PESSIMISTIC_EFFICACY.1),
            stream_efficiency: (self.stream_efficiency - PESSIMISTIC_STREAM.0)
                .max(PESSIMISTIC_STREAM.1),
        }
    }

    /// Returns the optimistic perturbation of these parameters.
    #[must_use]
    pub fn optimistic(&self) -> Self {
        Self {
            overhead: (self.overhead - OPTIMISTIC_OVERHEAD).max(0.0),
            compression: (self.compression + OPTIMISTIC_COMPRESSION.0)
                .min(OPTIMISTIC_COMPRESSION.1),
            parallelism_efficacy: (self.parallelism_efficacy + OPTIMISTIC_EFFICACY).min(1.0),
            stream_efficiency: (self.stream_efficiency + OPTIMISTIC_STREAM).min(1.0),
        }
    }
}

fn check_fraction(
    name: &'static str,
    bounds: &'static str,
    value: f64,
    inclusive: bool,
) -> Result<(), RangeError> {
    let within = if inclusive {
        (0.0..=1.0).contains(&value)
    } else {
        (0.0..1.0).contains(&value)
    };
    if within {
        Ok(())
    } else {
        Err(RangeError::Fraction {
            name,
            bounds,
            value,
        })
    }
}

/// A named set of modeling parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name (one of the standard kinds or caller-defined).
    pub name: String,
    /// Modeling fractions.
    #[serde(flatten)]
    pub params: ScenarioParams,
}

impl Scenario {
    /// Creates a named scenario.
    #[must_use]
    pub fn new(name: impl Into<String>, params: ScenarioParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Creates a scenario named after a standard kind.
    #[must_use]
    pub fn of_kind(kind: ScenarioKind, params: ScenarioParams) -> Self {
        Self::new(kind.as_str(), params)
    }

    /// Returns the overhead fraction.
    #[must_use]
    pub const fn overhead(&self) -> f64 {
        self.params.overhead
    }

    /// Returns the compression fraction.
    #[must_use]
    pub const fn compression(&self) -> f64 {
        self.params.compression
    }

    /// Returns the parallelism efficacy.
    #[must_use]
    pub const fn parallelism_efficacy(&self) -> f64 {
        self.params.parallelism_efficacy
    }

    /// Returns the single-stream efficiency.
    #[must_use]
    pub const fn stream_efficiency(&self) -> f64 {
        self.params.stream_efficiency
    }
}

/// The pessimistic, realistic and optimistic scenarios for one base.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSet {
    /// Worse than the base.
    pub pessimistic: Scenario,
    /// The base itself.
    pub realistic: Scenario,
    /// Better than the base.
    pub optimistic: Scenario,
}

impl ScenarioSet {
    /// Derives the three standard scenarios from one base parameter set.
    ///
    /// The perturbations and their bounds are fixed; see
    /// [`ScenarioParams::pessimistic`] and [`ScenarioParams::optimistic`].
    #[must_use]
    pub fn derive(base: ScenarioParams) -> Self {
        Self {
            pessimistic: Scenario::of_kind(ScenarioKind::Pessimistic, base.pessimistic()),
            realistic: Scenario::of_kind(ScenarioKind::Realistic, base),
            optimistic: Scenario::of_kind(ScenarioKind::Optimistic, base.optimistic()),
        }
    }

    /// Returns the scenario for a kind.
    #[must_use]
    pub const fn get(&self, kind: ScenarioKind) -> &Scenario {
        match kind {
            ScenarioKind::Pessimistic => &self.pessimistic,
            ScenarioKind::Realistic => &self.realistic,
            ScenarioKind::Optimistic => &self.optimistic,
        }
    }

    /// Iterates the scenarios from worst to best.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        ScenarioKind::all().iter().map(|kind| self.get(*kind))
    }

    /// Returns clones of the requested scenarios, in the requested order.
    #[must_use]
    pub fn select(&self, kinds: &[ScenarioKind]) -> Vec<Scenario> {
        kinds.iter().map(|kind| self.get(*kind).clone()).collect()
    }
}

/// Derives the pessimistic, realistic and optimistic scenarios.
#[must_use]
pub fn derive_scenarios(base: ScenarioParams) -> ScenarioSet {
    ScenarioSet::derive(base)
}
