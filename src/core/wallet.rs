//! Currency ledger.
//!
//! The wallet accumulates sale proceeds. It is a running balance, nothing
//! more; there is no spending or transaction history.

use serde::{Deserialize, Serialize};

/// Player's currency balance.
///
/// ```
/// use card_ledger::core::Wallet;
///
/// let mut wallet = Wallet::new();
/// wallet.deposit(12.5);
/// wallet.deposit(2.5);
/// assert_eq!(wallet.balance(), 15.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    balance: f64,
}

impl Wallet {
    /// Create an empty wallet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wallet with a starting balance.
    #[must_use]
    pub fn with_balance(balance: f64) -> Self {
        Self { balance }
    }

    /// Current balance.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add proceeds and return the new balance.
    pub fn deposit(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        tracing::info!(amount, balance = self.balance, "wallet credited");
        self.balance
    }
}

impl std::fmt::Display for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit() {
        let mut wallet = Wallet::new();
        assert_eq!(wallet.balance(), 0.0);

        assert_eq!(wallet.deposit(3.25), 3.25);
        assert_eq!(wallet.deposit(1.75), 5.0);
    }

    #[test]
    fn test_display() {
        let wallet = Wallet::with_balance(7.5);
        assert_eq!(format!("{}", wallet), "$7.50");
    }
}
