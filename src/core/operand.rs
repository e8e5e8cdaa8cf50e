//! Operand half of the equality layer.
//!
//! Operands are compared structurally. Ordinary value types (including
//! `Box<T>` and `Arc<T>`, which compare their pointees) get this for free
//! through `PartialEq`. Open sets of event payloads go through
//! [`AnyOperand`], which erases the payload type but still compares
//! "same type and equal value", never allocation identity. A payload held
//! behind one `Box`, `Arc` or `&'static` reference is compared as its
//! pointee.

use std::any::{self, Any};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Trait for values that select a rule alongside the current state.
pub trait Operand: Debug + Send + Sync + 'static {
    /// Whether two operands are the same for rule matching.
    fn same_operand(&self, other: &Self) -> bool;
}

impl<T> Operand for T
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    fn same_operand(&self, other: &Self) -> bool {
        self == other
    }
}

/// Type-erased structural equality.
///
/// Implemented for every `PartialEq` type; two payloads are equal only when
/// they have the same concrete type and compare equal as that type.
pub trait Payload: Any + Debug + Send + Sync {
    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Whether `other` is this payload's type, or a pointer to it, with an
    /// equal value.
    fn payload_eq(&self, other: &dyn Payload) -> bool;

    /// Name of the concrete type.
    fn type_name(&self) -> &'static str;
}

impl<T> Payload for T
where
    T: PartialEq + Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn payload_eq(&self, other: &dyn Payload) -> bool {
        pointee::<T>(other.as_any()).is_some_and(|other| self == other)
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// Borrow `value` as a `T`, looking through one `Box`, `Arc` or `&'static`.
fn pointee<T: Any>(value: &dyn Any) -> Option<&T> {
    value
        .downcast_ref::<T>()
        .or_else(|| value.downcast_ref::<Box<T>>().map(|boxed| &**boxed))
        .or_else(|| value.downcast_ref::<Arc<T>>().map(|shared| &**shared))
        .or_else(|| value.downcast_ref::<&'static T>().copied())
}

/// Shared, type-erased operand.
///
/// Two operands are equal when either side recognises the other as its own
/// type, directly or behind a single pointer. Prefer the `From` conversions
/// for boxed and shared payloads: they store the pointee itself, so such
/// operands also match each other across pointer kinds.
///
/// ```rust
/// use efsm::core::AnyOperand;
///
/// #[derive(Debug, PartialEq)]
/// struct Add {
///     diff: i32,
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Sub;
///
/// let a = AnyOperand::from(Box::new(Add { diff: 10 }));
/// let b = AnyOperand::new(Add { diff: 10 });
///
/// assert_eq!(a, b);
/// assert_ne!(a, AnyOperand::new(Sub));
/// assert_eq!(a.downcast_ref::<Add>().map(|add| add.diff), Some(10));
/// ```
#[derive(Clone)]
pub struct AnyOperand(Arc<dyn Payload>);

impl AnyOperand {
    /// Wrap a payload.
    pub fn new<T: Payload>(payload: T) -> Self {
        Self(Arc::new(payload))
    }

    /// Borrow the payload as its concrete type.
    pub fn downcast_ref<T: Payload>(&self) -> Option<&T> {
        pointee::<T>((*self.0).as_any())
    }

    /// Whether the payload is a `T`.
    pub fn is<T: Payload>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Name of the concrete payload type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        (*self.0).type_name()
    }
}

impl<T: Payload> From<Box<T>> for AnyOperand {
    fn from(payload: Box<T>) -> Self {
        let payload: Arc<T> = Arc::from(payload);
        Self(payload)
    }
}

impl<T: Payload> From<Arc<T>> for AnyOperand {
    fn from(payload: Arc<T>) -> Self {
        Self(payload)
    }
}

impl PartialEq for AnyOperand {
    fn eq(&self, other: &Self) -> bool {
        (*self.0).payload_eq(&*other.0) || (*other.0).payload_eq(&*self.0)
    }
}

impl Debug for AnyOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}
