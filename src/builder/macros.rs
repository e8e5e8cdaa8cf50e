//! Macros for declaring state types.

/// Declare an enum usable as a state, compared by its display form.
///
/// Each variant displays as its own name unless a label is given with
/// `=> "label"`. Variants sharing a label are the same state.
///
/// # Example
///
/// ```
/// use efsm::core::State;
/// use efsm::state_enum;
///
/// state_enum! {
///     pub enum OrderState {
///         Pending,
///         Paid,
///         Settled => "Paid",
///         Cancelled,
///     }
/// }
///
/// assert_eq!(OrderState::Pending.to_string(), "Pending");
/// assert!(OrderState::Settled.same_state(&OrderState::Paid));
/// assert!(!OrderState::Paid.same_state(&OrderState::Cancelled));
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $($label)?)),*
                })
            }
        }

        $crate::display_state!($name);
    };
}

/// Implement [`State`](crate::core::State) for existing types by their
/// `Display` form.
///
/// # Example
///
/// ```
/// use efsm::core::State;
/// use efsm::display_state;
/// use std::fmt;
///
/// #[derive(Clone, Debug)]
/// struct Level(u8);
///
/// impl fmt::Display for Level {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "L{}", self.0.min(3))
///     }
/// }
///
/// display_state!(Level);
///
/// assert!(Level(3).same_state(&Level(9)));
/// assert!(!Level(1).same_state(&Level(2)));
/// ```
#[macro_export]
macro_rules! display_state {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::core::State for $ty {
                fn same_state(&self, other: &Self) -> bool {
                    $crate::core::display_eq(self, other)
                }
            }
        )+
    };
}
