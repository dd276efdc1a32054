//! The fixed license choice set offered by the wizard.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum License {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "MIT OR Apache-2.0")]
    MitOrApache2,
}

impl License {
    /// Menu order for the wizard's license prompt.
    pub const ALL: [License; 5] = [
        License::Mit,
        License::Apache2,
        License::Bsd3,
        License::Gpl3,
        License::MitOrApache2,
    ];

    /// SPDX-style display name.
    pub fn name(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Bsd3 => "BSD-3-Clause",
            License::Gpl3 => "GPL-3.0",
            License::MitOrApache2 => "MIT OR Apache-2.0",
        }
    }

    /// Shields.io badge path segment. Literal hyphens double up, spaces
    /// become underscores.
    pub fn badge_slug(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache--2.0",
            License::Bsd3 => "BSD--3--Clause",
            License::Gpl3 => "GPL--3.0",
            License::MitOrApache2 => "MIT_OR_Apache--2.0",
        }
    }

    /// Resolve a wizard answer: a menu number (1-based) or a license name.
    pub fn from_choice(input: &str) -> Option<License> {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return Self::ALL.get(n.checked_sub(1)?).copied();
        }
        Self::ALL
            .iter()
            .find(|l| l.name().eq_ignore_ascii_case(trimmed))
            .copied()
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
