use super::submission::Amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Represents a running monetary balance in FCFA units.
///
/// Unlike [`Amount`], a balance may legitimately be zero (nothing paid yet)
/// or hold accumulated debt figures.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.value())
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// A student's fee position for the school year.
///
/// Tracks the billed total, what has been paid so far, and debt carried over
/// from previous years. The dashboard figures (`remaining_amount`,
/// `total_due`) are derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAccount {
    /// Display name of the student.
    pub student: String,
    /// Total fees billed for the current year.
    pub total_fees: Balance,
    /// Sum of approved payments.
    pub paid_amount: Balance,
    /// Debt carried over from previous years.
    pub previous_debt: Balance,
}

impl StudentAccount {
    pub fn new(student: impl Into<String>, total_fees: Balance, previous_debt: Balance) -> Self {
        Self {
            student: student.into(),
            total_fees,
            paid_amount: Balance::ZERO,
            previous_debt,
        }
    }

    /// Fees still unpaid for the current year.
    pub fn remaining_amount(&self) -> Balance {
        self.total_fees - self.paid_amount
    }

    /// Remaining fees plus carried-over debt.
    pub fn total_due(&self) -> Balance {
        self.remaining_amount() + self.previous_debt
    }

    /// Credits an approved payment.
    pub fn record_payment(&mut self, amount: Amount) {
        self.paid_amount += amount.into();
    }
}
