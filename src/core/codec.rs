//! Conversion between a [`Record`] and one row of the data file.
//!
//! A row holds five comma-separated fields in fixed order:
//! `name,length,location,auxiliary,amountOwed`. There is no quoting and no
//! escaping, so names and trailer tags cannot contain commas.

use crate::domain::location::Location;
use crate::domain::model::{parse_number, to_fixed_2, Record};
use crate::utils::error::{MarinaError, Result};
use rust_decimal::Decimal;

const FIELD_COUNT: usize = 5;

pub fn decode_record(line: &str) -> Result<Record> {
    let line = line.trim_end_matches(['\r', '\n']);
    let fields = split_fields(line)?;
    if fields.len() < FIELD_COUNT {
        return Err(malformed(
            line,
            &format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let length = parse_decimal(line, "length", &fields[1])?;
    let location = Location::parse(&fields[2], &fields[3])?;
    let amount_owed = parse_decimal(line, "amount owed", &fields[4])?;

    Record::new(&fields[0], length, location, amount_owed)
}

/// Renders the row for `record`, including the trailing newline.
pub fn encode_record(record: &Record) -> String {
    format!(
        "{},{},{},{},{}\n",
        record.name,
        to_fixed_2(record.length),
        record.location.kind(),
        record.location.auxiliary_text(),
        to_fixed_2(record.amount_owed)
    )
}

fn split_fields(line: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut row = csv::StringRecord::new();
    let found = reader
        .read_record(&mut row)
        .map_err(|e| malformed(line, &e.to_string()))?;
    if !found {
        return Err(malformed(line, "line is empty"));
    }

    Ok(row.iter().map(|field| field.trim().to_string()).collect())
}

fn parse_decimal(line: &str, field: &str, raw: &str) -> Result<Decimal> {
    parse_number(raw).ok_or_else(|| malformed(line, &format!("{} '{}' is not a number", field, raw)))
}

fn malformed(line: &str, reason: &str) -> MarinaError {
    MarinaError::MalformedLine {
        line: line.to_string(),
        reason: reason.to_string(),
    }
}
