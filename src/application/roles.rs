use super::machine::VendingMachine;
use crate::domain::item::ItemId;
use crate::domain::transaction::TransactionRecord;
use crate::domain::wallet::Wallet;
use crate::error::Result;
use rust_decimal::Decimal;

/// Anyone who carries a wallet.
///
/// Both roles get their money operations from here; only the wallet accessors
/// need implementing.
pub trait WalletHolder {
    fn wallet(&self) -> &Wallet;
    fn wallet_mut(&mut self) -> &mut Wallet;

    fn balance(&self) -> Decimal {
        self.wallet().balance()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<()> {
        self.wallet_mut().deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<bool> {
        self.wallet_mut().withdraw(amount)
    }
}

/// A customer of the machine.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumer {
    pub id: u32,
    pub name: String,
    wallet: Wallet,
}

impl Consumer {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self::with_balance(id, name, Decimal::ZERO)
    }

    pub fn with_balance(id: u32, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            wallet: Wallet::with_balance(balance),
        }
    }
}

impl WalletHolder for Consumer {
    fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }
}

/// Services machines: restocks them, collects their takings into its own
/// wallet and reviews their sales.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub id: u32,
    pub name: String,
    wallet: Wallet,
}

impl Operator {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self::with_balance(id, name, Decimal::ZERO)
    }

    pub fn with_balance(id: u32, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            wallet: Wallet::with_balance(balance),
        }
    }

    pub fn restock(&self, machine: &mut VendingMachine, item: ItemId, quantity: i64) -> bool {
        if quantity <= 0 {
            return false;
        }
        machine.restock(item, quantity)
    }

    /// Moves the machine's register into the operator's wallet and returns the amount.
    pub fn collect_funds(&mut self, machine: &mut VendingMachine) -> Result<Decimal> {
        let amount = machine.register_balance();
        self.wallet.deposit(amount)?;
        Ok(machine.collect_funds())
    }

    pub fn review_sales(&self, machine: &VendingMachine) -> Vec<TransactionRecord> {
        machine.ledger().all()
    }
}

impl WalletHolder for Operator {
    fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }
}
