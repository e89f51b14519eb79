use super::Error;

/// Error when two members of a synthesized class end up with the same name
/// but different types.
///
/// This happens when a query references the same parameter name twice and
/// the two references resolve to different C# types, for example one bound
/// to an `integer` column and one to a `text` column.
#[derive(Debug)]
pub(super) struct IncompatibleMemberType {
    member: Box<str>,
    ty: Box<str>,
    other: Box<str>,
}

impl std::error::Error for IncompatibleMemberType {}

impl core::fmt::Display for IncompatibleMemberType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "named param {} has incompatible types: {}, {}",
            self.member, self.ty, self.other
        )
    }
}

impl Error {
    /// Creates an incompatible member type error.
    pub fn incompatible_member_type(
        member: impl Into<String>,
        ty: impl Into<String>,
        other: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::IncompatibleMemberType(
            IncompatibleMemberType {
                member: member.into().into(),
                ty: ty.into().into(),
                other: other.into().into(),
            },
        ))
    }

    /// Returns `true` if this error (or a cause) is an incompatible member
    /// type error.
    pub fn is_incompatible_member_type(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::IncompatibleMemberType(_)))
    }
}
