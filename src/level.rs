// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
The severity scale.

Every message belongs to a [Tier].  A [Logger](crate::Logger) holds a [Verbosity] threshold,
and a message is written when the threshold is at least the tier's rank.
*/

use std::fmt::Display;

/**
A named severity tier.

Tiers are ordered from least to most verbose.  [Tier::Alert] and [Tier::Error] share a rank.
*/
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Something requires immediate attention
    Alert,
    /// A runtime error
    Error,
    /// Suspicious condition
    Warn,
    /// Notable event that should stand out from ordinary output
    Highlight,
    /// Information for operators
    Inform,
    /// Ordinary log output
    Log,
    /// Detailed debugging
    Trace,
}

/// Rank and tag for every tier, in declaration order.
const TIERS: [(Tier, u8, &str); 7] = [
    (Tier::Alert, 1, "ALERT: "),
    (Tier::Error, 1, "ERROR: "),
    (Tier::Warn, 2, "WARN: "),
    (Tier::Highlight, 3, "HIGHLIGHT: "),
    (Tier::Inform, 4, "INFORM: "),
    (Tier::Log, 5, "LOG: "),
    (Tier::Trace, 6, "TRACE: "),
];

impl Tier {
    /// All tiers, least verbose first.
    pub const ALL: [Tier; 7] = [
        Tier::Alert,
        Tier::Error,
        Tier::Warn,
        Tier::Highlight,
        Tier::Inform,
        Tier::Log,
        Tier::Trace,
    ];

    const fn entry(self) -> (Tier, u8, &'static str) {
        TIERS[self as usize]
    }

    /// The threshold a logger needs for this tier to be written.
    pub const fn rank(self) -> u8 {
        self.entry().1
    }

    /// The tag written between the prefix and the message, e.g. `"WARN: "`.
    pub const fn tag(self) -> &'static str {
        self.entry().2
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag().trim_end_matches(": "))
    }
}

/**
A severity threshold.

`Verbosity(0)` suppresses every tier.  `Verbosity(6)` writes every tier.  Values above 6 are
allowed and behave like 6.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Verbosity(pub u8);

impl Verbosity {
    pub const NONE: Verbosity = Verbosity(0);
    pub const ALERT: Verbosity = Verbosity(1);
    pub const WARN: Verbosity = Verbosity(2);
    pub const HIGHLIGHT: Verbosity = Verbosity(3);
    pub const INFORM: Verbosity = Verbosity(4);
    pub const LOG: Verbosity = Verbosity(5);
    pub const TRACE: Verbosity = Verbosity(6);
    /// The most verbose meaningful threshold.
    pub const MAX: Verbosity = Verbosity::TRACE;

    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Whether a message of `tier` passes this threshold.
    pub const fn allows(self, tier: Tier) -> bool {
        self.0 >= tier.rank()
    }
}

impl From<u8> for Verbosity {
    fn from(rank: u8) -> Self {
        Verbosity(rank)
    }
}

impl From<Tier> for Verbosity {
    /// The lowest threshold that writes `tier`.
    fn from(tier: Tier) -> Self {
        Verbosity(tier.rank())
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order() {
        for (i, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(TIERS[i].0, *tier);
        }
    }

    #[test]
    fn ranks_and_tags() {
        assert_eq!(Tier::Alert.rank(), 1);
        assert_eq!(Tier::Error.rank(), 1);
        assert_eq!(Tier::Warn.rank(), 2);
        assert_eq!(Tier::Highlight.rank(), 3);
        assert_eq!(Tier::Inform.rank(), 4);
        assert_eq!(Tier::Log.rank(), 5);
        assert_eq!(Tier::Trace.rank(), 6);
        assert_eq!(Tier::Highlight.tag(), "HIGHLIGHT: ");
        assert_eq!(Tier::Error.to_string(), "ERROR");
    }

    #[test]
    fn gate_is_inclusive() {
        assert!(!Verbosity(2).allows(Tier::Highlight));
        assert!(Verbosity(3).allows(Tier::Highlight));
        assert!(Verbosity(6).allows(Tier::Highlight));
        assert!(Verbosity(200).allows(Tier::Trace));
        for tier in Tier::ALL {
            assert!(!Verbosity::NONE.allows(tier));
            assert!(Verbosity::from(tier).allows(tier));
        }
    }
}
