//! Financial entry models
//!
//! An entry is either an [`Expense`] or an [`Income`]. Both share the same
//! four fields and the same validation rules; they differ only in the
//! category set they draw from. Constructors validate, so any value of these
//! types satisfies every constraint.

use chrono::{Local, NaiveDate};
use std::fmt;
use thiserror::Error;

use super::category::{CategorySet, ExpenseCategory, IncomeCategory};
use super::money::Money;

/// Date format used for entries on disk and on the command line
pub const ENTRY_DATE_FORMAT: &str = "%d/%m/%y";

/// Symbol pair that separates fields on disk; never allowed in a description
pub const RESERVED_SEPARATOR: &str = "¦¦";

/// Domain validation failures for a single entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Invalid amount '{0}': amount should be a non-negative number")]
    AmountFormat(String),

    #[error("Invalid amount {0}: amount must be $9999999.00 or less")]
    AmountOutOfRange(Money),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid date '{0}': expected dd/mm/yy")]
    DateFormat(String),

    #[error("Date {} cannot be after the current date", .0.format(ENTRY_DATE_FORMAT))]
    FutureDate(NaiveDate),

    #[error("Description should not be empty")]
    MissingDescription,

    #[error("Invalid description '{0}': line breaks and '¦¦' are not allowed")]
    DescriptionFormat(String),
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check the shared entry constraints against today's date
///
/// Reports the first violated constraint, in the order: sign, range,
/// description (empty, then unstorable characters), date.
pub fn validate(amount: Money, description: &str, date: NaiveDate) -> Result<(), EntryError> {
    validate_as_of(amount, description, date, today())
}

/// Same as [`validate`] with an explicit notion of "today"
pub fn validate_as_of(
    amount: Money,
    description: &str,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), EntryError> {
    if amount.is_negative() {
        return Err(EntryError::AmountFormat(amount.to_plain_string()));
    }
    if amount > Money::MAX_ENTRY {
        return Err(EntryError::AmountOutOfRange(amount));
    }
    if description.trim().is_empty() {
        return Err(EntryError::MissingDescription);
    }
    if description.contains(|c| c == '\n' || c == '\r') || description.contains(RESERVED_SEPARATOR) {
        return Err(EntryError::DescriptionFormat(description.escape_debug().to_string()));
    }
    if date > today {
        return Err(EntryError::FutureDate(date));
    }
    Ok(())
}

/// Parse an amount as typed or stored, mapping failures to
/// [`EntryError::AmountFormat`]
///
/// Sign and range are not checked here.
pub fn parse_amount(input: &str) -> Result<Money, EntryError> {
    let input = input.trim();
    Money::parse(input).map_err(|_| EntryError::AmountFormat(input.to_string()))
}

/// Parse an entry date in `dd/mm/yy` form
pub fn parse_entry_date(input: &str) -> Result<NaiveDate, EntryError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, ENTRY_DATE_FORMAT)
        .map_err(|_| EntryError::DateFormat(input.to_string()))
}

macro_rules! entry_variant {
    ($(#[$meta:meta])* $name:ident, $category:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            amount: Money,
            description: String,
            date: NaiveDate,
            category: $category,
        }

        impl $name {
            /// Create a validated entry
            pub fn new(
                amount: Money,
                description: impl Into<String>,
                date: NaiveDate,
                category: $category,
            ) -> Result<Self, EntryError> {
                Self::new_as_of(amount, description, date, category, today())
            }

            /// Create a validated entry, judging future dates against `today`
            pub fn new_as_of(
                amount: Money,
                description: impl Into<String>,
                date: NaiveDate,
                category: $category,
                today: NaiveDate,
            ) -> Result<Self, EntryError> {
                let description = description.into();
                validate_as_of(amount, &description, date, today)?;
                Ok(Self {
                    amount,
                    description,
                    date,
                    category,
                })
            }

            pub fn amount(&self) -> Money {
                self.amount
            }

            pub fn description(&self) -> &str {
                &self.description
            }

            pub fn date(&self) -> NaiveDate {
                self.date
            }

            pub fn category(&self) -> $category {
                self.category
            }
        }
    };
}

entry_variant!(
    /// Money spent
    Expense,
    ExpenseCategory
);

entry_variant!(
    /// Money received
    Income,
    IncomeCategory
);

/// Which variant an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Expense,
    Income,
}

impl EntryKind {
    /// One-character tag that opens the entry's storage line
    pub fn tag(&self) -> char {
        match self {
            Self::Expense => 'E',
            Self::Income => 'I',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'E' => Some(Self::Expense),
            'I' => Some(Self::Income),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => f.pad("Expense"),
            Self::Income => f.pad("Income"),
        }
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinancialEntry {
    Expense(Expense),
    Income(Income),
}

impl FinancialEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Expense(_) => EntryKind::Expense,
            Self::Income(_) => EntryKind::Income,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Self::Expense(e) => e.amount(),
            Self::Income(i) => i.amount(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Expense(e) => e.description(),
            Self::Income(i) => i.description(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Expense(e) => e.date(),
            Self::Income(i) => i.date(),
        }
    }

    /// Canonical upper-case category name
    pub fn category_name(&self) -> &'static str {
        match self {
            Self::Expense(e) => e.category().as_str(),
            Self::Income(i) => i.category().as_str(),
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense(_))
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income(_))
    }
}

impl From<Expense> for FinancialEntry {
    fn from(expense: Expense) -> Self {
        Self::Expense(expense)
    }
}

impl From<Income> for FinancialEntry {
    fn from(income: Income) -> Self {
        Self::Income(income)
    }
}

impl fmt::Display for FinancialEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] - {} {} (on {}) [{}]",
            self.kind(),
            self.description(),
            self.amount(),
            self.date().format(ENTRY_DATE_FORMAT),
            self.category_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            Money::from_cents(1250),
            "Lunch",
            date(2024, 10, 1),
            ExpenseCategory::Food,
        )
        .unwrap();

        assert_eq!(expense.amount().cents(), 1250);
        assert_eq!(expense.description(), "Lunch");
        assert_eq!(expense.category(), ExpenseCategory::Food);
    }

    #[test]
    fn test_boundary_amount() {
        let today = date(2024, 10, 1);
        assert!(validate_as_of(Money::MAX_ENTRY, "Car", today, today).is_ok());
        assert_eq!(
            validate_as_of(Money::from_cents(999_999_901), "Car", today, today),
            Err(EntryError::AmountOutOfRange(Money::from_cents(999_999_901)))
        );
        assert!(matches!(
            validate_as_of(Money::from_cents(-1), "Car", today, today),
            Err(EntryError::AmountFormat(_))
        ));
        assert!(validate_as_of(Money::zero(), "Free sample", today, today).is_ok());
    }

    #[test]
    fn test_future_date() {
        let today = today();
        assert!(validate(Money::from_cents(100), "Coffee", today).is_ok());
        assert_eq!(
            validate(Money::from_cents(100), "Coffee", today + Duration::days(1)),
            Err(EntryError::FutureDate(today + Duration::days(1)))
        );
    }

    #[test]
    fn test_missing_description() {
        let today = date(2024, 10, 1);
        assert_eq!(
            validate_as_of(Money::from_cents(100), "", today, today),
            Err(EntryError::MissingDescription)
        );
        assert_eq!(
            validate_as_of(Money::from_cents(100), "   ", today, today),
            Err(EntryError::MissingDescription)
        );
    }

    #[test]
    fn test_unstorable_descriptions_rejected() {
        let today = date(2024, 10, 1);
        for description in [
            "line one\nline two",
            "carriage\rreturn",
            "Fish ¦¦ chips",
            "tail ¦¦",
            "¦¦ head",
        ] {
            assert!(
                matches!(
                    validate_as_of(Money::from_cents(500), description, today, today),
                    Err(EntryError::DescriptionFormat(_))
                ),
                "accepted {:?}",
                description
            );
        }

        let err = Expense::new(
            Money::from_cents(500),
            "Fish ¦¦ chips",
            today,
            ExpenseCategory::Food,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid description 'Fish ¦¦ chips': line breaks and '¦¦' are not allowed"
        );
    }

    #[test]
    fn test_single_broken_bar_allowed() {
        let today = date(2024, 10, 1);
        assert!(validate_as_of(Money::from_cents(500), "a ¦ b", today, today).is_ok());
        assert!(validate_as_of(Money::from_cents(500), " padded ", today, today).is_ok());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 ").unwrap(), Money::from_cents(1250));
        assert_eq!(parse_amount("-3").unwrap(), Money::from_cents(-300));
        assert_eq!(
            parse_amount(" twelve "),
            Err(EntryError::AmountFormat("twelve".to_string()))
        );
    }

    #[test]
    fn test_first_violation_wins() {
        let today = date(2024, 10, 1);
        let err = validate_as_of(
            Money::from_cents(999_999_999),
            "",
            today + Duration::days(3),
            today,
        )
        .unwrap_err();
        assert!(matches!(err, EntryError::AmountOutOfRange(_)));
    }

    #[test]
    fn test_income_rejects_future_date() {
        let tomorrow = today() + Duration::days(1);
        let err = Income::new(
            Money::from_cents(100),
            "Bonus",
            tomorrow,
            IncomeCategory::Salary,
        )
        .unwrap_err();
        assert_eq!(err, EntryError::FutureDate(tomorrow));
    }

    #[test]
    fn test_parse_entry_date() {
        assert_eq!(parse_entry_date("05/11/24").unwrap(), date(2024, 11, 5));
        assert!(matches!(
            parse_entry_date("2024-11-05"),
            Err(EntryError::DateFormat(_))
        ));
        assert!(parse_entry_date("31/02/24").is_err());
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(EntryKind::Expense.tag(), 'E');
        assert_eq!(EntryKind::from_tag('I'), Some(EntryKind::Income));
        assert_eq!(EntryKind::from_tag('D'), None);
    }

    #[test]
    fn test_display() {
        let entry: FinancialEntry = Income::new(
            Money::from_cents(300000),
            "October pay",
            date(2024, 10, 31),
            IncomeCategory::Salary,
        )
        .unwrap()
        .into();

        assert_eq!(
            entry.to_string(),
            "[Income] - October pay $3000.00 (on 31/10/24) [SALARY]"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EntryError::FutureDate(date(2030, 1, 2)).to_string(),
            "Date 02/01/30 cannot be after the current date"
        );
        assert_eq!(
            EntryError::AmountOutOfRange(Money::from_cents(999_999_901)).to_string(),
            "Invalid amount $9999999.01: amount must be $9999999.00 or less"
        );
    }
}
