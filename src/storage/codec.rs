//! Line codec for ledger records
//!
//! Entries are stored one per line as
//!
//! ```text
//! E ¦¦ 12.50 ¦¦ Lunch ¦¦ 01/10/24 ¦¦ FOOD
//! ```
//!
//! (tag, amount, description, `dd/mm/yy` date, upper-case category) and the
//! budget as a single untagged `amount ¦¦ yyyy-mm-dd` line. Decoding never
//! panics: every way a line can be wrong maps to a [`RecordError`].

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{
    parse_amount, parse_entry_date, Budget, CategorySet, EntryError, EntryKind, Expense,
    ExpenseCategory, FinancialEntry, Income, IncomeCategory, Money, ENTRY_DATE_FORMAT,
};

/// Field separator shared by both files
pub const DELIMITER: &str = " ¦¦ ";

/// Date format of the budget line
pub const BUDGET_DATE_FORMAT: &str = "%Y-%m-%d";

const ENTRY_FIELDS: usize = 5;
const BUDGET_FIELDS: usize = 2;

/// Why a stored line could not be turned back into a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("empty line")]
    EmptyLine,

    #[error("unknown entry type '{0}'")]
    UnknownTag(char),

    #[error("expected {expected} fields, found {found}")]
    MissingField { expected: usize, found: usize },

    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Serialize an entry to its canonical line (without the newline)
pub fn encode_entry(entry: &FinancialEntry) -> String {
    [
        entry.kind().tag().to_string(),
        entry.amount().to_plain_string(),
        entry.description().to_string(),
        entry.date().format(ENTRY_DATE_FORMAT).to_string(),
        entry.category_name().to_string(),
    ]
    .join(DELIMITER)
}

/// Serialize the budget to its canonical line (without the newline)
pub fn encode_budget(budget: &Budget) -> String {
    format!(
        "{}{}{}",
        budget.amount.to_plain_string(),
        DELIMITER,
        budget.set_date.format(BUDGET_DATE_FORMAT)
    )
}

/// Decode one entries-file line, dispatching on its first character
pub fn decode_entry(line: &str, today: NaiveDate) -> Result<FinancialEntry, RecordError> {
    let tag = line.chars().next().ok_or(RecordError::EmptyLine)?;
    let kind = EntryKind::from_tag(tag).ok_or(RecordError::UnknownTag(tag))?;
    let tokens: Vec<&str> = line.split(DELIMITER).collect();

    match kind {
        EntryKind::Expense => decode_expense(&tokens, today).map(FinancialEntry::from),
        EntryKind::Income => decode_income(&tokens, today).map(FinancialEntry::from),
    }
}

/// Build an expense from the split fields of an `E` line
pub fn decode_expense(tokens: &[&str], today: NaiveDate) -> Result<Expense, RecordError> {
    let fields: Fields<'_, ExpenseCategory> = decode_fields(tokens)?;
    Ok(Expense::new_as_of(
        fields.amount,
        fields.description,
        fields.date,
        fields.category,
        today,
    )?)
}

/// Build an income from the split fields of an `I` line
pub fn decode_income(tokens: &[&str], today: NaiveDate) -> Result<Income, RecordError> {
    let fields: Fields<'_, IncomeCategory> = decode_fields(tokens)?;
    Ok(Income::new_as_of(
        fields.amount,
        fields.description,
        fields.date,
        fields.category,
        today,
    )?)
}

/// Decode the budget line
pub fn decode_budget(line: &str) -> Result<Budget, RecordError> {
    if line.trim().is_empty() {
        return Err(RecordError::EmptyLine);
    }
    let tokens: Vec<&str> = line.split(DELIMITER).collect();
    if tokens.len() < BUDGET_FIELDS {
        return Err(RecordError::MissingField {
            expected: BUDGET_FIELDS,
            found: tokens.len(),
        });
    }

    let amount = parse_amount(tokens[0])?;
    let date_token = tokens[1].trim();
    let set_date = NaiveDate::parse_from_str(date_token, BUDGET_DATE_FORMAT)
        .map_err(|_| EntryError::DateFormat(date_token.to_string()))?;
    Budget::validate_amount(amount)?;

    Ok(Budget::new(amount, set_date))
}

struct Fields<'a, C> {
    amount: Money,
    description: &'a str,
    date: NaiveDate,
    category: C,
}

/// Parse the four data fields
///
/// Only the syntactic checks happen here (amount, category, date); range,
/// description and future-date checks are left to the entry constructor so
/// they run in the same order as for interactively created entries.
fn decode_fields<'a, C: CategorySet>(tokens: &[&'a str]) -> Result<Fields<'a, C>, RecordError> {
    if tokens.len() < ENTRY_FIELDS {
        return Err(RecordError::MissingField {
            expected: ENTRY_FIELDS,
            found: tokens.len(),
        });
    }

    let amount = parse_amount(tokens[1])?;
    if amount.is_negative() {
        return Err(EntryError::AmountFormat(tokens[1].trim().to_string()).into());
    }
    let category_token = tokens[4].trim();
    let category = C::parse(category_token)
        .ok_or_else(|| EntryError::UnknownCategory(category_token.to_string()))?;
    let date = parse_entry_date(tokens[3])?;

    Ok(Fields {
        amount,
        description: tokens[2],
        date,
        category,
    })
}
