use crate::domain::location::Location;
use crate::utils::error::{MarinaError, Result};
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;
use std::sync::OnceLock;

pub const MAX_NAME_LENGTH: usize = 127;

/// Longest boat the marina records, in feet.
pub const MAX_LENGTH: Decimal = dec!(1000000);

/// Largest balance, owed or credited, a record can carry. Billing stops
/// adding once a balance reaches it.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Parses plain decimal notation with an optional exponent, such as `25`,
/// `-3.50` or `2.5e1`. Separators like `_` are not accepted.
pub fn parse_number(raw: &str) -> Option<Decimal> {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?\d+(\.\d+)?(?:[eE]([+-]?\d{1,2}))?$").expect("number pattern is valid")
    });

    let raw = raw.trim();
    let caps = number.captures(raw)?;
    let mantissa_end = caps.get(2).map_or(raw.len(), |exp| exp.start() - 1);
    let mantissa = raw[..mantissa_end].trim_start_matches('+');
    let mut value = Decimal::from_str(mantissa).ok()?;

    if let Some(exp) = caps.get(2) {
        let exp: i32 = exp.as_str().parse().ok()?;
        if exp >= 0 {
            for _ in 0..exp {
                value = value.checked_mul(Decimal::TEN)?;
            }
        } else {
            value.set_scale(value.scale() + exp.unsigned_abs()).ok()?;
        }
    }
    Some(value)
}

/// Rounds to cents, half away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a value with exactly two fractional digits.
pub fn to_fixed_2(value: Decimal) -> String {
    let mut fixed = round_cents(value);
    fixed.rescale(2);
    fixed.to_string()
}

/// One boat tracked by the marina.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    /// Feet.
    pub length: Decimal,
    pub location: Location,
    /// Dollars.
    pub amount_owed: Decimal,
}

impl Record {
    /// Validates the fields and normalizes numbers to two decimals.
    pub fn new(
        name: &str,
        length: Decimal,
        location: Location,
        amount_owed: Decimal,
    ) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("name", "name cannot be empty"));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(invalid(
                "name",
                &format!("name is longer than {} bytes", MAX_NAME_LENGTH),
            ));
        }
        if name.contains(',') {
            return Err(invalid("name", "name cannot contain a comma"));
        }

        let length = round_cents(length);
        if length <= Decimal::ZERO {
            return Err(invalid("length", "length must be positive"));
        }
        if length > MAX_LENGTH {
            return Err(invalid(
                "length",
                &format!("length cannot exceed {} feet", MAX_LENGTH),
            ));
        }

        let amount_owed = round_cents(amount_owed);
        if amount_owed.abs() > MAX_AMOUNT {
            return Err(invalid(
                "amount_owed",
                &format!("amount cannot exceed {}", MAX_AMOUNT),
            ));
        }

        Ok(Self {
            name: name.to_string(),
            length,
            location,
            amount_owed,
        })
    }

    /// Case-insensitive name match.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Charge for one month at this boat's location, at most [`MAX_AMOUNT`].
    pub fn monthly_charge(&self) -> Decimal {
        self.location
            .kind()
            .rate_per_foot()
            .checked_mul(self.length)
            .map_or(MAX_AMOUNT, round_cents)
            .min(MAX_AMOUNT)
    }
}

fn invalid(field: &str, reason: &str) -> MarinaError {
    MarinaError::InvalidRecord {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
