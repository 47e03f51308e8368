use crate::utils::error::{MarinaError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// Longest trailer tag that fits the persisted format.
pub const MAX_TRAILER_TAG_LEN: usize = 9;

/// Where a boat is kept, without its auxiliary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Slip,
    Land,
    Trailer,
    Storage,
}

impl LocationKind {
    pub const ALL: [LocationKind; 4] = [
        LocationKind::Slip,
        LocationKind::Land,
        LocationKind::Trailer,
        LocationKind::Storage,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            LocationKind::Slip => "slip",
            LocationKind::Land => "land",
            LocationKind::Trailer => "trailor",
            LocationKind::Storage => "storage",
        }
    }

    /// Monthly charge in dollars per foot of boat length.
    pub fn rate_per_foot(self) -> Decimal {
        match self {
            LocationKind::Slip => dec!(12.50),
            LocationKind::Land => dec!(14.00),
            LocationKind::Trailer => dec!(25.00),
            LocationKind::Storage => dec!(11.20),
        }
    }

    /// Builds the full location from the raw auxiliary column.
    pub fn parse_auxiliary(self, raw: &str) -> Result<Location> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(self.invalid(raw, "value is empty"));
        }

        match self {
            LocationKind::Slip => Ok(Location::Slip {
                number: self.parse_number(raw)?,
            }),
            LocationKind::Storage => Ok(Location::Storage {
                number: self.parse_number(raw)?,
            }),
            LocationKind::Land => {
                let bay = raw
                    .chars()
                    .next()
                    .ok_or_else(|| self.invalid(raw, "value is empty"))?;
                Ok(Location::Land { bay })
            }
            LocationKind::Trailer => Ok(Location::Trailer {
                tag: TrailerTag::new(raw)?,
            }),
        }
    }

    fn parse_number(self, raw: &str) -> Result<u32> {
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.invalid(raw, "expected decimal digits"));
        }
        raw.parse::<u32>()
            .map_err(|e| self.invalid(raw, &e.to_string()))
    }

    fn invalid(self, raw: &str, reason: &str) -> MarinaError {
        MarinaError::InvalidAuxiliaryFormat {
            kind: self.keyword().to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl FromStr for LocationKind {
    type Err = MarinaError;

    fn from_str(s: &str) -> Result<Self> {
        let keyword = s.trim();
        LocationKind::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
            .ok_or_else(|| MarinaError::UnknownLocationKind {
                keyword: keyword.to_string(),
            })
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.keyword())
    }
}

/// Tag of a boat kept on a trailer, 1 to 9 bytes, no commas.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrailerTag(String);

impl TrailerTag {
    pub fn new(tag: &str) -> Result<Self> {
        let invalid = |reason: &str| MarinaError::InvalidAuxiliaryFormat {
            kind: LocationKind::Trailer.keyword().to_string(),
            value: tag.to_string(),
            reason: reason.to_string(),
        };

        if tag.is_empty() {
            return Err(invalid("tag is empty"));
        }
        if tag.len() > MAX_TRAILER_TAG_LEN {
            return Err(invalid(&format!(
                "tag is longer than {} bytes",
                MAX_TRAILER_TAG_LEN
            )));
        }
        if tag.contains(',') {
            return Err(invalid("tag contains a comma"));
        }
        Ok(Self(tag.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrailerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A storage location together with the data that only makes sense for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Slip { number: u32 },
    Land { bay: char },
    Trailer { tag: TrailerTag },
    Storage { number: u32 },
}

impl Location {
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Slip { .. } => LocationKind::Slip,
            Location::Land { .. } => LocationKind::Land,
            Location::Trailer { .. } => LocationKind::Trailer,
            Location::Storage { .. } => LocationKind::Storage,
        }
    }

    /// Parses a keyword and its auxiliary column together.
    pub fn parse(keyword: &str, raw_auxiliary: &str) -> Result<Self> {
        keyword.parse::<LocationKind>()?.parse_auxiliary(raw_auxiliary)
    }

    /// Text of the auxiliary column as written to the data file.
    pub fn auxiliary_text(&self) -> String {
        match self {
            Location::Slip { number } | Location::Storage { number } => number.to_string(),
            Location::Land { bay } => bay.to_string(),
            Location::Trailer { tag } => tag.to_string(),
        }
    }
}
