use crate::core::codec::{decode_record, encode_record};
use crate::domain::model::{Record, MAX_AMOUNT};
use crate::utils::error::{MarinaError, Result};
use rust_decimal::Decimal;
use std::cmp::Ordering;

pub const DEFAULT_CAPACITY: usize = 120;

/// A data-file line that could not be turned into a record.
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based.
    pub line_number: usize,
    pub error: MarinaError,
}

/// What happened while bulk-loading a store.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
    pub ignored_over_capacity: usize,
    pub source_error: Option<MarinaError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.ignored_over_capacity == 0 && self.source_error.is_none()
    }
}

/// Bounded collection of boat records, keyed by case-insensitive name.
///
/// Records keep the order they were added in; that order is what gets
/// persisted. Display order comes from [`Store::sorted_view`].
#[derive(Debug, Clone)]
pub struct Store {
    records: Vec<Record>,
    capacity: usize,
}

impl Default for Store {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Store {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Decodes each line into a new store.
    ///
    /// Bad lines (including ones that are not UTF-8) and duplicate names are
    /// skipped and reported. Once the store is full the remaining lines are
    /// counted but not decoded.
    pub fn load<I>(capacity: usize, lines: I) -> (Self, LoadReport)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut store = Self::with_capacity(capacity);
        let mut report = LoadReport::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            if store.is_full() {
                report.ignored_over_capacity += 1;
                continue;
            }

            let decoded = std::str::from_utf8(line)
                .map_err(|_| MarinaError::MalformedLine {
                    line: String::from_utf8_lossy(line).into_owned(),
                    reason: "invalid UTF-8".to_string(),
                })
                .and_then(decode_record);
            match decoded.and_then(|record| store.add(record)) {
                Ok(()) => report.loaded += 1,
                Err(error) => {
                    tracing::warn!("Skipping line {}: {}", index + 1, error);
                    report.skipped.push(SkippedLine {
                        line_number: index + 1,
                        error,
                    });
                }
            }
        }

        if report.ignored_over_capacity > 0 {
            tracing::warn!(
                "Store reached capacity {}; ignored {} remaining lines",
                capacity,
                report.ignored_over_capacity
            );
        }
        tracing::debug!("Loaded {} records", report.loaded);

        (store, report)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn add(&mut self, record: Record) -> Result<()> {
        if self.is_full() {
            return Err(MarinaError::StoreFull {
                capacity: self.capacity,
            });
        }
        if self.position(&record.name).is_some() {
            return Err(MarinaError::DuplicateName { name: record.name });
        }

        tracing::debug!("Adding boat '{}'", record.name);
        self.records.push(record);
        Ok(())
    }

    /// Removes the record with this name, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        let index = self.position(name).ok_or_else(|| not_found(name))?;
        let removed = self.records.remove(index);
        tracing::debug!("Removed boat '{}'", removed.name);
        Ok(removed)
    }

    pub fn find_by_name(&self, name: &str) -> Result<&Record> {
        self.records
            .iter()
            .find(|record| record.has_name(name))
            .ok_or_else(|| not_found(name))
    }

    /// Subtracts `amount` from the balance and returns the new balance.
    ///
    /// Paying exactly the balance is allowed; paying more is not.
    pub fn apply_payment(&mut self, name: &str, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(MarinaError::InvalidAmount {
                amount: amount.to_string(),
            });
        }

        let index = self.position(name).ok_or_else(|| not_found(name))?;
        let record = &mut self.records[index];
        if amount > record.amount_owed {
            return Err(MarinaError::OverPayment {
                name: record.name.clone(),
                owed: record.amount_owed,
                requested: amount,
            });
        }

        record.amount_owed -= amount;
        tracing::debug!(
            "Payment of {} for '{}', balance now {}",
            amount,
            record.name,
            record.amount_owed
        );
        Ok(record.amount_owed)
    }

    /// Charges every record one month at its location rate and returns the
    /// total charged. A balance never grows past [`MAX_AMOUNT`].
    pub fn apply_monthly_billing(&mut self) -> Decimal {
        let mut total = Decimal::ZERO;
        for record in &mut self.records {
            let charge = record.monthly_charge();
            let billed = match record.amount_owed.checked_add(charge) {
                Some(billed) if billed <= MAX_AMOUNT => billed,
                _ => {
                    tracing::warn!("Balance for '{}' capped at {}", record.name, MAX_AMOUNT);
                    MAX_AMOUNT.max(record.amount_owed)
                }
            };
            total += billed - record.amount_owed;
            record.amount_owed = billed;
        }
        tracing::debug!("Billed {} boats, total {}", self.records.len(), total);
        total
    }

    /// Records ordered by name, ignoring ASCII case.
    pub fn sorted_view(&self) -> Vec<&Record> {
        let mut view: Vec<&Record> = self.records.iter().collect();
        view.sort_by(|a, b| compare_names(&a.name, &b.name));
        view
    }

    /// One encoded row per record, in insertion order.
    pub fn serialize_all(&self) -> Vec<String> {
        self.records.iter().map(encode_record).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.has_name(name))
    }
}

/// Byte-wise comparison after ASCII case folding.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

fn not_found(name: &str) -> MarinaError {
    MarinaError::NotFound {
        name: name.trim().to_string(),
    }
}
