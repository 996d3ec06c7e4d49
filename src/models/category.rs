//! Expense and income categories
//!
//! Each entry variant draws its category from its own closed set. Input is
//! matched case-insensitively against a fixed table; output always uses the
//! upper-case canonical name.

use std::fmt;

/// A closed, table-backed set of category names
pub trait CategorySet: Copy + Sized + 'static {
    /// Every member of the set, in display order
    const ALL: &'static [Self];

    /// Canonical upper-case name
    fn as_str(&self) -> &'static str;

    /// Look a name up in the table, ignoring case and surrounding whitespace
    fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }

    /// Comma-separated list of all canonical names, for help and error text
    fn names() -> String {
        Self::ALL
            .iter()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Categories an expense can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Education,
    Other,
    #[default]
    Uncategorized,
}

impl CategorySet for ExpenseCategory {
    const ALL: &'static [Self] = &[
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Education,
        Self::Other,
        Self::Uncategorized,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Utilities => "UTILITIES",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Education => "EDUCATION",
            Self::Other => "OTHER",
            Self::Uncategorized => "UNCATEGORIZED",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Categories an income can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IncomeCategory {
    Salary,
    Investment,
    Gift,
    Other,
    #[default]
    Uncategorized,
}

impl CategorySet for IncomeCategory {
    const ALL: &'static [Self] = &[
        Self::Salary,
        Self::Investment,
        Self::Gift,
        Self::Other,
        Self::Uncategorized,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "SALARY",
            Self::Investment => "INVESTMENT",
            Self::Gift => "GIFT",
            Self::Other => "OTHER",
            Self::Uncategorized => "UNCATEGORIZED",
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ExpenseCategory::parse("food"), Some(ExpenseCategory::Food));
        assert_eq!(ExpenseCategory::parse("FoOd"), Some(ExpenseCategory::Food));
        assert_eq!(ExpenseCategory::parse(" TRANSPORT\r"), Some(ExpenseCategory::Transport));
        assert_eq!(IncomeCategory::parse("salary"), Some(IncomeCategory::Salary));
    }

    #[test]
    fn test_sets_are_distinct() {
        assert_eq!(ExpenseCategory::parse("SALARY"), None);
        assert_eq!(IncomeCategory::parse("FOOD"), None);
        assert_eq!(ExpenseCategory::parse(""), None);
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for category in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::parse(category.as_str()), Some(*category));
        }
        for category in IncomeCategory::ALL {
            assert_eq!(IncomeCategory::parse(category.as_str()), Some(*category));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(
            IncomeCategory::names(),
            "SALARY, INVESTMENT, GIFT, OTHER, UNCATEGORIZED"
        );
    }
}
