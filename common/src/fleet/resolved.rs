/// A derived field that either resolved fully or fell back to a documented
/// default after its lookup failed.
///
/// The aggregation service never masks a failed secondary lookup as a
/// plain zero; it records the fallback together with the cause so callers
/// can distinguish the two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved<T> {
    Complete(T),
    Degraded { fallback: T, cause: String },
}

impl<T> Resolved<T> {
    pub fn degraded(fallback: T, cause: impl Into<String>) -> Self {
        Self::Degraded {
            fallback,
            cause: cause.into(),
        }
    }

    /// The resolved value, or the fallback when degraded.
    pub fn value(&self) -> &T {
        match self {
            Self::Complete(value) => value,
            Self::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Complete(value) => value,
            Self::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Complete(_) => None,
            Self::Degraded { cause, .. } => Some(cause),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        match self {
            Self::Complete(value) => Resolved::Complete(f(value)),
            Self::Degraded { fallback, cause } => Resolved::Degraded {
                fallback: f(fallback),
                cause,
            },
        }
    }
}
