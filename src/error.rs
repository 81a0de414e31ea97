use core::fmt;

/// Error returned by [`LinkedPtr::validate`] when an ownership ring is not
/// well formed.
///
/// A ring built only through the public API of this crate never produces
/// these errors. They indicate memory corruption or a bug in `linkref`.
///
/// [`LinkedPtr::validate`]: crate::LinkedPtr::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupError {
    /// A node has exactly one of its two sibling links set.
    HalfLinked,
    /// A node names itself as a neighbor. Singletons must have no links.
    SelfLoop,
    /// A `right` link is not mirrored by the matching `left` link.
    Asymmetric,
    /// Following `right` links revisits a node before returning to the start.
    NotCircular,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfLinked => f.write_str("ownership node has a single sibling link"),
            Self::SelfLoop => f.write_str("ownership node links to itself"),
            Self::Asymmetric => f.write_str("ownership ring links are not symmetric"),
            Self::NotCircular => f.write_str("ownership ring does not close"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GroupError {}
