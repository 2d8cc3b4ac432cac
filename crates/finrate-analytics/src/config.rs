//! Solver configuration.
//!
//! Defaults reproduce the reference behaviour of the rate solvers. All
//! structures deserialize from partial JSON, with missing fields taking
//! their defaults.

use serde::{Deserialize, Serialize};

use finrate_math::solvers::{Bracket, BracketLadder, NewtonConfig, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Largest number of decimal places accepted for rounding settings.
const MAX_DECIMALS: u32 = 15;

// =============================================================================
// VALIDATION
// =============================================================================

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    ///
    /// Several failures are folded into one `InvalidConfig` error.
    fn validate_or_error(&self) -> AnalyticsResult<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }

        let field = errors
            .iter()
            .map(|e| e.field.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Err(AnalyticsError::InvalidConfig { field, message })
    }
}

// =============================================================================
// IRR CONFIGURATION
// =============================================================================

/// Configuration for the periodic IRR solver.
///
/// Rates are in percent: `initial_low = -100` is a total loss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrConfig {
    /// Maximum number of NPV evaluations per call.
    #[serde(default = "default_max_evaluations")]
    pub max_evaluations: u32,

    /// Bisection stops once the bracket is no wider than this.
    #[serde(default = "default_precision")]
    pub precision: f64,

    /// Lower end of the starting bracket.
    #[serde(default = "default_initial_low")]
    pub initial_low: f64,

    /// Upper end of the starting bracket.
    #[serde(default = "default_initial_high")]
    pub initial_high: f64,

    /// Linear increment of the upper bound during expansion.
    #[serde(default = "default_ladder_step")]
    pub ladder_step: f64,

    /// Upper bound at which linear expansion switches to doubling.
    #[serde(default = "default_step_ceiling")]
    pub step_ceiling: f64,

    /// Upper bound at which expansion stops.
    #[serde(default = "default_hard_ceiling")]
    pub hard_ceiling: f64,

    /// Decimal places of the reported rate.
    #[serde(default = "default_irr_decimals")]
    pub result_decimals: u32,

    /// Safety cap on bisection halvings.
    #[serde(default = "default_max_bisection_iterations")]
    pub max_bisection_iterations: u32,
}

fn default_max_evaluations() -> u32 {
    1000
}

fn default_precision() -> f64 {
    1e-5
}

fn default_initial_low() -> f64 {
    -100.0
}

fn default_initial_high() -> f64 {
    100.0
}

fn default_ladder_step() -> f64 {
    100.0
}

fn default_step_ceiling() -> f64 {
    10_000.0
}

fn default_hard_ceiling() -> f64 {
    1_000_000.0
}

fn default_irr_decimals() -> u32 {
    6
}

fn default_max_bisection_iterations() -> u32 {
    200
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            max_evaluations: default_max_evaluations(),
            precision: default_precision(),
            initial_low: default_initial_low(),
            initial_high: default_initial_high(),
            ladder_step: default_ladder_step(),
            step_ceiling: default_step_ceiling(),
            hard_ceiling: default_hard_ceiling(),
            result_decimals: default_irr_decimals(),
            max_bisection_iterations: default_max_bisection_iterations(),
        }
    }
}

impl IrrConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the evaluation budget.
    #[must_use]
    pub fn with_max_evaluations(mut self, max_evaluations: u32) -> Self {
        self.max_evaluations = max_evaluations;
        self
    }

    /// Sets the bisection width tolerance.
    #[must_use]
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Starting bracket.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        Bracket::new(self.initial_low, self.initial_high)
    }

    /// Expansion schedule for the upper bound.
    #[must_use]
    pub fn ladder(&self) -> BracketLadder {
        BracketLadder::new(self.ladder_step, self.step_ceiling, self.hard_ceiling)
    }

    /// Smallest bracket width bisection can reach anywhere on the ladder.
    ///
    /// Doubling can overshoot the hard ceiling by up to a factor of two.
    fn resolution(&self) -> f64 {
        let reach = self
            .initial_low
            .abs()
            .max(self.initial_high.abs())
            .max(2.0 * self.hard_ceiling.abs());
        f64::EPSILON * reach
    }

    /// Bisection settings.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.precision, self.max_bisection_iterations)
    }
}

impl Validate for IrrConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.max_evaluations == 0 {
            errors.push(ValidationError::new(
                "max_evaluations",
                "Evaluation budget must be at least 1",
            ));
        }

        if !(self.precision.is_finite() && self.precision > 0.0) {
            errors.push(ValidationError::new(
                "precision",
                format!("Precision must be positive, got {}", self.precision),
            ));
        } else if self.precision < self.resolution() {
            errors.push(ValidationError::new(
                "precision",
                format!(
                    "Precision {} is finer than the float spacing {:e} near the ceiling",
                    self.precision,
                    self.resolution()
                ),
            ));
        }

        if !(self.initial_low.is_finite() && self.initial_high.is_finite())
            || self.initial_low >= self.initial_high
        {
            errors.push(ValidationError::new(
                "initial_low",
                format!(
                    "Starting bracket [{}, {}] must be finite and ordered",
                    self.initial_low, self.initial_high
                ),
            ));
        }

        if !(self.ladder_step.is_finite() && self.ladder_step > 0.0) {
            errors.push(ValidationError::new(
                "ladder_step",
                format!("Ladder step must be positive, got {}", self.ladder_step),
            ));
        }

        if !(self.step_ceiling.is_finite() && self.hard_ceiling.is_finite())
            || self.step_ceiling > self.hard_ceiling
        {
            errors.push(ValidationError::new(
                "step_ceiling",
                format!(
                    "Step ceiling {} must not exceed hard ceiling {}",
                    self.step_ceiling, self.hard_ceiling
                ),
            ));
        }

        if self.result_decimals > MAX_DECIMALS {
            errors.push(ValidationError::new(
                "result_decimals",
                format!("Result decimals cannot exceed {MAX_DECIMALS}"),
            ));
        }

        if self.max_bisection_iterations == 0 {
            errors.push(ValidationError::new(
                "max_bisection_iterations",
                "Bisection iteration cap must be at least 1",
            ));
        }

        errors
    }
}

// =============================================================================
// XIRR CONFIGURATION
// =============================================================================

/// Configuration for the date-weighted XIRR solver.
///
/// `guess` is an unscaled rate: `0.1` means 10%. A NaN or infinite guess
/// starts from 0; a guess at or below -1 never converges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XirrConfig {
    /// Starting guess.
    #[serde(default)]
    pub guess: f64,

    /// Maximum number of Newton updates.
    #[serde(default = "default_xirr_max_iterations")]
    pub max_iterations: u32,

    /// Successive guesses must agree to this many decimal places.
    #[serde(default = "default_convergence_decimals")]
    pub convergence_decimals: u32,

    /// Decimal places of the reported percentage rate.
    #[serde(default = "default_xirr_decimals")]
    pub result_decimals: u32,
}

fn default_xirr_max_iterations() -> u32 {
    100
}

fn default_convergence_decimals() -> u32 {
    5
}

fn default_xirr_decimals() -> u32 {
    2
}

impl Default for XirrConfig {
    fn default() -> Self {
        Self {
            guess: 0.0,
            max_iterations: default_xirr_max_iterations(),
            convergence_decimals: default_convergence_decimals(),
            result_decimals: default_xirr_decimals(),
        }
    }
}

impl XirrConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting guess.
    #[must_use]
    pub fn with_guess(mut self, guess: f64) -> Self {
        self.guess = guess;
        self
    }

    /// Sets the maximum number of Newton updates.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Guess the iteration starts from.
    #[must_use]
    pub fn starting_guess(&self) -> f64 {
        if self.guess.is_finite() {
            self.guess
        } else {
            0.0
        }
    }

    /// Newton settings. Rates at or below -100% are outside the domain of
    /// the date-weighted NPV.
    #[must_use]
    pub fn newton_config(&self) -> NewtonConfig {
        NewtonConfig::default()
            .with_max_iterations(self.max_iterations)
            .with_decimals(self.convergence_decimals)
            .with_lower_bound(-1.0)
    }
}

impl Validate for XirrConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.max_iterations == 0 {
            errors.push(ValidationError::new(
                "max_iterations",
                "Max iterations must be at least 1",
            ));
        }

        if self.convergence_decimals > MAX_DECIMALS {
            errors.push(ValidationError::new(
                "convergence_decimals",
                format!("Convergence decimals cannot exceed {MAX_DECIMALS}"),
            ));
        }

        if self.result_decimals > MAX_DECIMALS {
            errors.push(ValidationError::new(
                "result_decimals",
                format!("Result decimals cannot exceed {MAX_DECIMALS}"),
            ));
        }

        errors
    }
}

// =============================================================================
// SOLVER SETTINGS
// =============================================================================

/// Settings for both rate solvers, as loaded from a configuration file.
///
/// ```rust
/// use finrate_analytics::config::SolverSettings;
///
/// let settings = SolverSettings::from_json(r#"{ "irr": { "max_evaluations": 50 } }"#).unwrap();
/// assert_eq!(settings.irr.max_evaluations, 50);
/// assert_eq!(settings.xirr.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Periodic IRR settings.
    #[serde(default)]
    pub irr: IrrConfig,

    /// Date-weighted XIRR settings.
    #[serde(default)]
    pub xirr: XirrConfig,
}

impl SolverSettings {
    /// Parses and validates settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidConfig` if the JSON is malformed or a
    /// value fails validation.
    pub fn from_json(json: &str) -> AnalyticsResult<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| AnalyticsError::InvalidConfig {
                field: "json".to_string(),
                message: e.to_string(),
            })?;
        settings.validate_or_error()?;
        Ok(settings)
    }

    /// Serializes the settings as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidConfig` if a value cannot be
    /// represented in JSON.
    pub fn to_json(&self) -> AnalyticsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AnalyticsError::InvalidConfig {
            field: "json".to_string(),
            message: e.to_string(),
        })
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let prefixed = |section: &str, errors: Vec<ValidationError>| {
            errors
                .into_iter()
                .map(|e| ValidationError::new(format!("{section}.{}", e.field), e.message))
                .collect::<Vec<_>>()
        };

        let mut errors = prefixed("irr", self.irr.validate());
        errors.extend(prefixed("xirr", self.xirr.validate()));
        errors
    }
}
