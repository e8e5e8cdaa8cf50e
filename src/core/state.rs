//! State trait and the state half of the equality layer.
//!
//! Rules match states through [`State::same_state`] rather than raw `==`,
//! so rich wrapper types can be compared by their display form while plain
//! primitives keep their intrinsic equality.

use std::fmt::{self, Debug, Display};
use std::sync::Arc;

/// Trait for state machine states.
///
/// Implementing this trait is what makes a type a *valid* state: the bound
/// is checked at compile time, and [`State::validate`] covers whatever can
/// only be known at runtime.
///
/// # Required Traits
///
/// - `Clone`: states are returned by value from every transit
/// - `Debug`: states appear in errors and logs
/// - `Send` + `Sync`: machines are shared between threads
///
/// # Example
///
/// ```rust
/// use efsm::core::State;
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum TaskState {
///     Pending,
///     Running,
/// }
///
/// impl State for TaskState {
///     fn same_state(&self, other: &Self) -> bool {
///         self == other
///     }
/// }
///
/// assert!(TaskState::Pending.same_state(&TaskState::Pending));
/// assert!(!TaskState::Pending.same_state(&TaskState::Running));
/// ```
pub trait State: Clone + Debug + Send + Sync + 'static {
    /// Whether two values denote the same state for rule matching.
    ///
    /// Must be reflexive, symmetric and transitive.
    fn same_state(&self, other: &Self) -> bool;

    /// Runtime validity check run once when a rule is created.
    ///
    /// Default implementation accepts every value.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

macro_rules! intrinsic_state {
    ($($ty:ty),* $(,)?) => {
        $(
            impl State for $ty {
                fn same_state(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

intrinsic_state!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String,
    &'static str, Arc<str>,
);

/// Compare two values by their rendered [`Display`] form.
///
/// This is the equality used by display-capable states: equal strings mean
/// equal states, whatever the underlying representation.
pub fn display_eq<T: Display + ?Sized>(a: &T, b: &T) -> bool {
    a.to_string() == b.to_string()
}

/// Newtype that turns any displayable value into a state compared by its
/// display form.
///
/// ```rust
/// use efsm::core::{ByDisplay, State};
///
/// let a = ByDisplay(1.50_f32);
/// let b = ByDisplay(1.5_f32);
/// assert!(a.same_state(&b));
/// ```
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByDisplay<T>(pub T);

impl<T> ByDisplay<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Display> Display for ByDisplay<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> State for ByDisplay<T>
where
    T: Display + Clone + Debug + Send + Sync + 'static,
{
    fn same_state(&self, other: &Self) -> bool {
        display_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Code {
        raw: u8,
    }

    impl Display for Code {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.raw {
                1 | 2 => write!(f, "Paid"),
                _ => write!(f, "Unknown"),
            }
        }
    }

    crate::display_state!(Code);

    #[test]
    fn primitives_use_intrinsic_equality() {
        assert!(1_i32.same_state(&1));
        assert!(!1_i32.same_state(&2));
        assert!(true.same_state(&true));
        assert!("idle".same_state(&"idle"));
        assert!(!String::from("idle").same_state(&String::from("busy")));
    }

    #[test]
    fn display_states_compare_rendered_form() {
        let a = Code { raw: 1 };
        let b = Code { raw: 2 };
        let c = Code { raw: 9 };

        assert!(a.same_state(&b));
        assert!(!a.same_state(&c));
    }

    #[test]
    fn by_display_wraps_non_primitive_values() {
        assert!(ByDisplay(1.0_f64).same_state(&ByDisplay(1.0)));
        assert!(!ByDisplay(1.0_f64).same_state(&ByDisplay(1.25)));
        assert_eq!(ByDisplay("x").into_inner(), "x");
    }

    #[test]
    fn validate_accepts_by_default() {
        assert!(42_u8.validate().is_ok());
        assert!(ByDisplay('q').validate().is_ok());
    }
}
