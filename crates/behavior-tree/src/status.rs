//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// A tick never spans more than one call, so there is no `Running` state:
/// guards answer immediately and actions either record their outcome on the
/// context or fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Guard held, or the action produced its outcome.
    Success,

    /// Guard did not hold, or the action had nothing to do.
    Failure,
}

impl Status {
    /// Maps a boolean guard result onto a status.
    #[inline]
    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_results_map_onto_status() {
        assert_eq!(Status::from_bool(true), Status::Success);
        assert_eq!(Status::from_bool(false).invert(), Status::Success);
        assert!(Status::Success.invert().is_failure());
    }
}
