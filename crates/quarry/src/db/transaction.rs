use super::Db;
use crate::Result;

use quarry_core::driver::operation::Transaction;

impl Db {
    /// Starts a transaction.
    pub fn begin(&self) -> Result<()> {
        self.exec_transaction(Transaction::Start)?;
        self.depth.set(self.depth.get() + 1);
        Ok(())
    }

    /// Commits the open transaction. This handle leaves the transaction
    /// even when the COMMIT fails.
    pub fn commit(&self) -> Result<()> {
        self.depth.set(self.depth.get().saturating_sub(1));
        self.exec_transaction(Transaction::Commit)
    }

    pub fn rollback(&self) -> Result<()> {
        // The transaction is over even when the rollback itself fails.
        self.depth.set(self.depth.get().saturating_sub(1));
        self.exec_transaction(Transaction::Rollback)
    }

    /// Returns `true` while a transaction started through this handle is
    /// open.
    pub fn in_transaction(&self) -> bool {
        self.depth.get() > 0
    }

    /// Runs `f` inside a transaction. Commits when `f` returns `Ok` and rolls
    /// back when it returns `Err`, propagating the error. A failed COMMIT is
    /// followed by a rollback and its error is returned.
    ///
    /// When a transaction is already open, `f` joins it and the outer
    /// transaction decides the outcome.
    pub fn transaction<O>(&self, f: impl FnOnce(&Db) -> Result<O>) -> Result<O> {
        if self.in_transaction() {
            return f(self);
        }

        self.begin()?;

        match f(self) {
            Ok(ret) => match self.commit() {
                Ok(()) => Ok(ret),
                Err(err) => {
                    // The database may still hold the transaction open
                    if let Err(rollback_err) = self.exec_transaction(Transaction::Rollback) {
                        tracing::warn!(
                            error = %rollback_err,
                            "rollback after failed commit failed"
                        );
                    }
                    Err(err)
                }
            },
            Err(err) => {
                if let Err(rollback_err) = self.rollback() {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}
