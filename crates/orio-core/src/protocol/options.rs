use super::error::FrameError;

/// What the decoder does with the header version field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Accept any version.
    #[default]
    Any,
    /// Reject headers whose version differs.
    Exact(u16),
}

impl VersionPolicy {
    pub fn check(&self, version: u16) -> Result<(), FrameError> {
        match *self {
            VersionPolicy::Any => Ok(()),
            VersionPolicy::Exact(expected) if expected == version => Ok(()),
            VersionPolicy::Exact(expected) => Err(FrameError::UnsupportedVersion {
                expected,
                actual: version,
            }),
        }
    }
}

/// Decoder configuration.
///
/// # Examples
/// ```
/// use orio_core::{DecodeOptions, PROTOCOL_VERSION, VersionPolicy};
///
/// let options = DecodeOptions::default();
/// assert_eq!(options.version_policy, VersionPolicy::Any);
///
/// let strict = DecodeOptions::strict_version(PROTOCOL_VERSION);
/// assert_eq!(strict.version_policy, VersionPolicy::Exact(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub version_policy: VersionPolicy,
}

impl DecodeOptions {
    pub fn strict_version(version: u16) -> Self {
        Self {
            version_policy: VersionPolicy::Exact(version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VersionPolicy;
    use crate::protocol::error::FrameError;

    #[test]
    fn any_accepts_every_version() {
        assert!(VersionPolicy::Any.check(0).is_ok());
        assert!(VersionPolicy::Any.check(u16::MAX).is_ok());
    }

    #[test]
    fn exact_rejects_mismatch() {
        assert!(VersionPolicy::Exact(1).check(1).is_ok());
        let err = VersionPolicy::Exact(1).check(2).unwrap_err();
        assert!(matches!(
            err,
            FrameError::UnsupportedVersion {
                expected: 1,
                actual: 2
            }
        ));
    }
}
