//! Core data structures for Sieve search bars.
//!
//! A search is a list of token equations. Each equation is either a single
//! keyword or a `[category, operator, value]` triple. This crate resolves
//! what typed input means, checks equations for validity and converts
//! between equations and the flat filters a host application persists.

pub mod catalog;
pub mod convert;
pub mod defaults;
mod equation;
mod errors;
mod filter;
mod operator;
pub mod resolver;
mod suggestions;
mod token;
pub mod validator;

pub use catalog::{Catalog, CategorySpec};
pub use convert::{equation_to_filter, equations_to_filters, filter_to_equation};
pub use equation::{EquationAndTokenIndex, EquationStatus, TokenEquation, all_valid, snapshot};
pub use errors::ConversionError;
pub use filter::Filter;
pub use operator::Operator;
pub use resolver::{TokenMeta, resolve_token_meta};
pub use suggestions::{Suggestion, Suggestions};
pub use token::{Label, Nature, Token, ValueType, split_parts};
pub use validator::{Validator, verify_equations};
