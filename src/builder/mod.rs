//! Builder API for state machine construction.
//!
//! A machine is built by handing a configurator closure to one of the build
//! functions. The configurator registers rules through a staged chain:
//!
//! ```text
//! b.from(state).on(operand).to_const(target)
//! b.from(state).on(operand).to(|ctx, from, operand| ...)
//! b.from(state).on(operand).when(|ctx, from, operand| ...).to_const(target)
//! b.from(state).on_func(|from| { from.on(a).to_const(x); from.on(b).to_const(y); })
//! ```
//!
//! Illegal definitions never panic. The builder records them and the build
//! function returns the first one as an ordinary error.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::DefinitionError;
pub use machine::EfsmBuilder;
pub use transition::{FromBuilder, GuardBuilder, OnBuilder};

use crate::config::EfsmConfig;
use crate::core::{Operand, State};
use crate::engine::Efsm;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Build a machine with the default configuration.
///
/// # Example
///
/// ```
/// use efsm::{build, Efsm};
///
/// let machine: Efsm<(), &str, &str> = build(|b| {
///     b.from("idle").on("start").to_const("running");
///     b.from("running").on("stop").to_const("idle");
/// })
/// .unwrap();
///
/// assert_eq!(machine.transit(&(), "idle", "start").unwrap(), "running");
/// assert!(machine.transit(&(), "idle", "stop").is_err());
/// ```
pub fn build<C, S, O, F>(configure: F) -> Result<Efsm<C, S, O>, DefinitionError>
where
    C: 'static,
    S: State,
    O: Operand,
    F: FnOnce(&EfsmBuilder<C, S, O>),
{
    build_with(EfsmConfig::default(), configure)
}

/// Build a machine with an explicit configuration.
pub fn build_with<C, S, O, F>(
    config: EfsmConfig,
    configure: F,
) -> Result<Efsm<C, S, O>, DefinitionError>
where
    C: 'static,
    S: State,
    O: Operand,
    F: FnOnce(&EfsmBuilder<C, S, O>),
{
    let builder = EfsmBuilder::new(config);
    configure(&builder);
    builder.finish()
}

/// Build a machine from a fallible configurator.
///
/// Errors returned by the configurator itself propagate unchanged; definition
/// faults are converted through `E: From<DefinitionError>`.
///
/// # Example
///
/// ```
/// use efsm::{try_build, DefinitionError, EfsmConfig};
///
/// #[derive(Debug)]
/// enum SetupError {
///     Definition(DefinitionError),
///     MissingTable,
/// }
///
/// impl From<DefinitionError> for SetupError {
///     fn from(err: DefinitionError) -> Self {
///         Self::Definition(err)
///     }
/// }
///
/// let result = try_build::<(), u8, u8, SetupError, _>(EfsmConfig::default(), |_b| {
///     Err(SetupError::MissingTable)
/// });
///
/// assert!(matches!(result, Err(SetupError::MissingTable)));
/// ```
pub fn try_build<C, S, O, E, F>(config: EfsmConfig, configure: F) -> Result<Efsm<C, S, O>, E>
where
    C: 'static,
    S: State,
    O: Operand,
    E: From<DefinitionError>,
    F: FnOnce(&EfsmBuilder<C, S, O>) -> Result<(), E>,
{
    let builder = EfsmBuilder::new(config);
    configure(&builder)?;
    Ok(builder.finish()?)
}

/// Build a machine, reporting every definition fault instead of the first.
pub fn build_validated<C, S, O, F>(
    config: EfsmConfig,
    configure: F,
) -> Validation<Efsm<C, S, O>, NonEmptyVec<DefinitionError>>
where
    C: 'static,
    S: State,
    O: Operand,
    F: FnOnce(&EfsmBuilder<C, S, O>),
{
    let builder = EfsmBuilder::new(config);
    configure(&builder);
    builder.finish_validated()
}
