//! Zodiac signs and traditional sign rulership.

use crate::angles::normalize_360;
use crate::body::Body;

/// The 12 zodiac signs in zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in zodiacal order.
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// Sign containing the given ecliptic longitude (degrees, any range).
    pub fn from_longitude(lon_deg: f64) -> Self {
        let idx = (normalize_360(lon_deg) / 30.0).floor() as usize;
        ALL_SIGNS[idx.min(11)]
    }

    /// 0-based index (0 = Aries .. 11 = Pisces).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign `n` positions forward in zodiacal order, wrapping Pisces → Aries.
    pub const fn advance(self, n: u8) -> Self {
        ALL_SIGNS[((self as u8 as usize) + n as usize) % 12]
    }

    /// Next sign in zodiacal order.
    pub const fn next(self) -> Self {
        self.advance(1)
    }

    /// Traditional domicile ruler of the sign.
    pub const fn ruler(self) -> Body {
        match self {
            Self::Aries | Self::Scorpio => Body::Mars,
            Self::Taurus | Self::Libra => Body::Venus,
            Self::Gemini | Self::Virgo => Body::Mercury,
            Self::Cancer => Body::Moon,
            Self::Leo => Body::Sun,
            Self::Sagittarius | Self::Pisces => Body::Jupiter,
            Self::Capricorn | Self::Aquarius => Body::Saturn,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Create from 0-based index, wrapping modulo 12.
    pub const fn from_index(idx: u8) -> Self {
        ALL_SIGNS[(idx % 12) as usize]
    }
}
