use core::fmt;
use core::str::FromStr;

use crate::{CoreError, CoreResult};

/// Recipe version tag, `major.minor.patch`.
///
/// Ordering follows standard precedence: majors compare first, then
/// minors, then patches, each numerically (so `0.3.10 > 0.3.4`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RecipeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RecipeVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for RecipeVersion {
    type Err = CoreError;

    fn from_str(tag: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidVersion {
            tag: tag.to_string(),
        };

        let mut parts = tag.split('.');
        let major = parts.next().ok_or_else(invalid)?;
        let minor = parts.next().ok_or_else(invalid)?;
        let patch = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
            patch: patch.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for RecipeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_round_trip() {
        let v: RecipeVersion = "0.3.4".parse().expect("valid tag");
        assert_eq!(v, RecipeVersion::new(0, 3, 4));
        assert_eq!(v.to_string(), "0.3.4");
    }

    #[test]
    fn numeric_not_lexicographic() {
        let a: RecipeVersion = "0.3.10".parse().unwrap();
        let b: RecipeVersion = "0.3.4".parse().unwrap();
        assert!(a > b);
    }

    #[test]
    fn equal_versions_compare_equal() {
        let a: RecipeVersion = "0.3.4".parse().unwrap();
        let b: RecipeVersion = "0.3.4".parse().unwrap();
        assert!(a >= b && a <= b);
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in ["", "0.3", "0.3.4.1", "0.3.x", "v0.3.4", "0..4"] {
            assert!(tag.parse::<RecipeVersion>().is_err(), "accepted {tag:?}");
        }
    }

    proptest! {
        #[test]
        fn ordering_matches_component_tuples(
            a in (0u32..100, 0u32..100, 0u32..100),
            b in (0u32..100, 0u32..100, 0u32..100),
        ) {
            let va: RecipeVersion = format!("{}.{}.{}", a.0, a.1, a.2).parse().unwrap();
            let vb: RecipeVersion = format!("{}.{}.{}", b.0, b.1, b.2).parse().unwrap();
            prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        }
    }
}
