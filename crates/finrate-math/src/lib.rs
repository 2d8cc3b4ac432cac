//! # Finrate Math
//!
//! Numerical root-finding for the finrate financial calculations library.
//!
//! This crate provides:
//!
//! - **Solvers**: bisection over a bracket, upward bracket expansion, and
//!   Newton-Raphson with decimal-agreement convergence
//! - **Evaluation budgets**: an explicit counter that bounds how often an
//!   objective may be evaluated across several solver stages
//! - **Rounding**: decimal-place rounding used for convergence tests and
//!   reported results
//!
//! All solvers are generic over the objective function and keep no state
//! between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod rounding;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::rounding::{agree_to, ceil_to, round_to};
    pub use crate::solvers::{
        bisection, expand_bracket, newton_raphson, newton_raphson_ratio, Bracket, BracketLadder,
        EvaluationCounter, NewtonConfig, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
