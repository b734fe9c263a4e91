use crate::error::{Result, VendingError, ensure_non_negative};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Holds a non-negative monetary balance.
///
/// Used both for the machine's cash register and for the personal wallets of
/// consumers and operators. Every mutation either succeeds completely or leaves
/// the balance untouched.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Wallet {
    balance: Decimal,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a wallet with an initial balance. A negative opening balance starts at zero.
    pub fn with_balance(initial: Decimal) -> Self {
        Self {
            balance: initial.max(Decimal::ZERO),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credits the wallet. There is no business limit; a sum past `Decimal::MAX`
    /// is refused with the balance unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        let amount = ensure_non_negative(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VendingError::AmountOverflow(amount))?;
        Ok(())
    }

    /// Debits the wallet if the balance covers `amount`.
    ///
    /// Returns `Ok(false)` without touching the balance when funds are insufficient;
    /// only a negative request is an error.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<bool> {
        let amount = ensure_non_negative(amount)?;
        if self.balance >= amount {
            self.balance -= amount;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn reset(&mut self) {
        self.balance = Decimal::ZERO;
    }
}
