//! Celestial bodies recognized by the period systems.
//!
//! The 7 classical bodies plus the two lunar nodes. The nodes are computed
//! points, not physical bodies; an ephemeris backend that only carries the
//! north node can derive the south node by adding 180 degrees.

/// The 9 bodies used as period rulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    NorthNode,
    SouthNode,
}

/// All 9 bodies in canonical order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::NorthNode,
    Body::SouthNode,
];

/// The 7 classical bodies, excluding the lunar nodes.
pub const CLASSICAL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// Lowercase name used in output and CLI arguments.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::NorthNode => "north_node",
            Self::SouthNode => "south_node",
        }
    }

    /// 0-based index into ALL_BODIES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::NorthNode => 7,
            Self::SouthNode => 8,
        }
    }

    /// Traditional malefics among the classical bodies.
    pub const fn is_traditional_malefic(self) -> bool {
        matches!(self, Self::Mars | Self::Saturn)
    }

    /// True for the two lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::NorthNode | Self::SouthNode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_canonical_order() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn classical_excludes_nodes() {
        assert_eq!(CLASSICAL_BODIES.len(), 7);
        assert!(CLASSICAL_BODIES.iter().all(|b| !b.is_node()));
    }

    #[test]
    fn malefics() {
        assert!(Body::Mars.is_traditional_malefic());
        assert!(Body::Saturn.is_traditional_malefic());
        assert!(!Body::Jupiter.is_traditional_malefic());
        assert!(!Body::NorthNode.is_traditional_malefic());
    }
}
