//! Single-character code tables used by the address record.

/// Beneficiary account type (address record, column 74).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    /// Ordinary deposit account.
    DepositAccount,
    /// Currency account held in the payment currency.
    CurrencyAccount,
}

impl AccountType {
    /// Parse from the single-character wire code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(AccountType::DepositAccount),
            '1' => Some(AccountType::CurrencyAccount),
            _ => None,
        }
    }

    /// The wire code digit.
    pub fn code(&self) -> i64 {
        match self {
            AccountType::DepositAccount => 0,
            AccountType::CurrencyAccount => 1,
        }
    }
}

/// Who carries the transfer costs (address record, column 78).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostResponsibility {
    /// The beneficiary pays the charges.
    BeneficiaryPays,
    /// The sender pays its own charges.
    OwnExpenses,
}

impl CostResponsibility {
    /// Parse from the single-character wire code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(CostResponsibility::BeneficiaryPays),
            '2' => Some(CostResponsibility::OwnExpenses),
            _ => None,
        }
    }

    /// The wire code digit.
    pub fn code(&self) -> i64 {
        match self {
            CostResponsibility::BeneficiaryPays => 1,
            CostResponsibility::OwnExpenses => 2,
        }
    }
}

/// Payment priority (address record, column 80).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Normal processing.
    Normal,
    /// Express processing.
    Express,
}

impl Priority {
    /// Parse from the single-character wire code.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Priority::Normal),
            '1' => Some(Priority::Express),
            _ => None,
        }
    }

    /// The wire code digit.
    pub fn code(&self) -> i64 {
        match self {
            Priority::Normal => 0,
            Priority::Express => 1,
        }
    }
}
