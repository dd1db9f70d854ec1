//! VersionLabel — validated version identifier ("0.5.x").
//!
//! Метка используется и как суффикс каталога (`version-<label>`), и как
//! отображаемое имя в dropdown, поэтому разделители путей запрещены.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::CURRENT_VERSION_NAME;
use crate::error::LifecycleError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionLabel(String);

impl VersionLabel {
    pub fn parse(s: &str) -> Result<Self, LifecycleError> {
        let reason = if s.is_empty() {
            Some("must not be empty")
        } else if s.trim() != s {
            Some("must not have surrounding whitespace")
        } else if s.contains('/') || s.contains('\\') {
            Some("must not contain path separators")
        } else if s == "." || s == ".." {
            Some("must not be a relative path component")
        } else if s == CURRENT_VERSION_NAME {
            Some("is reserved for the working tree")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(LifecycleError::InvalidLabel {
                label: s.to_string(),
                reason,
            }),
            None => Ok(Self(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VersionLabel {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionLabel {
    type Error = LifecycleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<VersionLabel> for String {
    fn from(l: VersionLabel) -> Self {
        l.0
    }
}

impl AsRef<str> for VersionLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VersionLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VersionLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_usual_labels() {
        for s in ["0.5.x", "1.0.0", "v2", "2024-01"] {
            assert_eq!(VersionLabel::parse(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn rejects_unusable_labels() {
        for s in ["", " 0.5.x", "a/b", "a\\b", ".", "..", "current"] {
            assert!(
                matches!(
                    VersionLabel::parse(s),
                    Err(LifecycleError::InvalidLabel { .. })
                ),
                "label {s:?} must be rejected"
            );
        }
    }

    #[test]
    fn deserialize_validates() {
        let ok: Vec<VersionLabel> = serde_json::from_str(r#"["0.4.x","0.3.x"]"#).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(serde_json::from_str::<Vec<VersionLabel>>(r#"["../etc"]"#).is_err());
    }
}
