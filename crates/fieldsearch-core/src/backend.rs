//! Filter backend — the data-access capability that builds predicates.
//!
//! fieldsearch never evaluates predicates itself. It asks a [`FilterBackend`]
//! for elementary "field contains term" predicates and combines them with the
//! backend's own `or` / `and`. Both combinators must be associative.

/// Trait implemented by each predicate-construction capability.
pub trait FilterBackend {
    /// The combinable filter expression produced by this backend.
    type Predicate;
    /// Failure raised while building an elementary predicate, e.g. an unknown
    /// field name. Returned to the caller unchanged.
    type Error;

    /// Case-insensitive substring match of `term` within `field`.
    fn icontains(&self, field: &str, term: &str) -> Result<Self::Predicate, Self::Error>;

    fn or(&self, lhs: Self::Predicate, rhs: Self::Predicate) -> Self::Predicate;

    fn and(&self, lhs: Self::Predicate, rhs: Self::Predicate) -> Self::Predicate;
}

impl<B: FilterBackend + ?Sized> FilterBackend for &B {
    type Predicate = B::Predicate;
    type Error = B::Error;

    fn icontains(&self, field: &str, term: &str) -> Result<Self::Predicate, Self::Error> {
        (**self).icontains(field, term)
    }

    fn or(&self, lhs: Self::Predicate, rhs: Self::Predicate) -> Self::Predicate {
        (**self).or(lhs, rhs)
    }

    fn and(&self, lhs: Self::Predicate, rhs: Self::Predicate) -> Self::Predicate {
        (**self).and(lhs, rhs)
    }
}
