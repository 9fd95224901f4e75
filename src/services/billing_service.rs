use crate::error::{AppError, AppResult};
use crate::models::{
    Bill, BillLineItem, BillStatement, BillStatus, BillTotals, Payment,
};
use crate::repositories::{BillingRepository, UserRepository};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Ledger of member bills: charges, bounded payments, and the derived
/// status transitions.
///
/// Totals are always recomputed from the stored line items and payments;
/// the persisted status is overwritten from those totals after every
/// mutation and never patched incrementally.
pub struct BillingService {
    billing_repo: Arc<BillingRepository>,
    user_repo: Arc<UserRepository>,
}

impl BillingService {
    pub fn new(billing_repo: Arc<BillingRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            billing_repo,
            user_repo,
        }
    }

    /// Open an empty pending bill for a member
    pub async fn create_bill(&self, member_id: Uuid) -> AppResult<Bill> {
        info!("Creating bill for member {}", member_id);

        let member = self
            .user_repo
            .find_by_id(member_id)
            .await
            .map_err(AppError::from)?;
        if !member.map(|m| m.is_member()).unwrap_or(false) {
            return Err(AppError::NotFound("Member not found".into()));
        }

        let bill = Bill::new(member_id);
        self.billing_repo
            .create_bill(&bill)
            .await
            .map_err(AppError::from)
    }

    /// Append a charge to a bill and recompute its status
    pub async fn add_line_item(
        &self,
        bill_id: Uuid,
        description: &str,
        amount: f64,
    ) -> AppResult<BillLineItem> {
        let bill = self.require_bill(bill_id).await?;

        if description.trim().is_empty() {
            return Err(AppError::Validation("Description cannot be empty".into()));
        }

        let item = BillLineItem::new(bill.id, description.to_string(), amount);
        let created = self
            .billing_repo
            .add_line_item(&item)
            .await
            .map_err(AppError::from)?;

        self.refresh_status(bill.id).await?;

        info!("Added line item to bill {}: {}", bill.id, created.description);
        Ok(created)
    }

    /// Record a completed payment against a bill.
    ///
    /// The amount must be positive, the bill must not already be settled,
    /// and the amount may not exceed what is currently due.
    pub async fn record_payment(&self, bill_id: Uuid, amount: f64) -> AppResult<Payment> {
        let bill = self.require_bill(bill_id).await?;

        if amount <= 0.0 {
            return Err(AppError::Validation(
                "Payment amount must be positive".into(),
            ));
        }

        let totals = self.compute_totals(bill.id).await?;

        if totals.amount_due <= 0.0 {
            return Err(AppError::Conflict("Bill is already fully paid".into()));
        }

        if amount > totals.amount_due {
            return Err(AppError::Validation(format!(
                "Payment amount ({}) exceeds amount due ({})",
                amount, totals.amount_due
            )));
        }

        let payment = Payment::new(bill.id, amount);
        let recorded = self
            .billing_repo
            .add_payment(&payment)
            .await
            .map_err(AppError::from)?;

        self.refresh_status(bill.id).await?;

        info!("Recorded payment of {} against bill {}", amount, bill.id);
        Ok(recorded)
    }

    /// Delete a bill and everything hanging off it
    pub async fn delete_bill(&self, bill_id: Uuid) -> AppResult<()> {
        let deleted = self
            .billing_repo
            .delete_bill(bill_id)
            .await
            .map_err(AppError::from)?;

        if !deleted {
            return Err(AppError::NotFound("Bill not found".into()));
        }

        info!("Deleted bill {}", bill_id);
        Ok(())
    }

    /// One bill in statement form (line items, payments, computed totals)
    pub async fn bill_statement(&self, bill_id: Uuid) -> AppResult<BillStatement> {
        let bill = self.require_bill(bill_id).await?;
        self.statement_for(bill).await
    }

    /// Bills in statement form, newest first; optionally limited to one
    /// member
    pub async fn list_bills(&self, member_id: Option<Uuid>) -> AppResult<Vec<BillStatement>> {
        let bills = match member_id {
            Some(member_id) => self
                .billing_repo
                .find_bills_by_member(member_id)
                .await
                .map_err(AppError::from)?,
            None => self
                .billing_repo
                .find_all_bills()
                .await
                .map_err(AppError::from)?,
        };

        let mut statements = Vec::with_capacity(bills.len());
        for bill in bills {
            statements.push(self.statement_for(bill).await?);
        }

        Ok(statements)
    }

    async fn require_bill(&self, bill_id: Uuid) -> AppResult<Bill> {
        self.billing_repo
            .find_bill_by_id(bill_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound("Bill not found".into()))
    }

    async fn compute_totals(&self, bill_id: Uuid) -> AppResult<BillTotals> {
        let line_items = self
            .billing_repo
            .find_line_items(bill_id)
            .await
            .map_err(AppError::from)?;
        let payments = self
            .billing_repo
            .find_payments(bill_id)
            .await
            .map_err(AppError::from)?;

        Ok(BillTotals::compute(&line_items, &payments))
    }

    /// Recompute the status from current totals and persist it
    async fn refresh_status(&self, bill_id: Uuid) -> AppResult<BillStatus> {
        let totals = self.compute_totals(bill_id).await?;
        let status = BillStatus::derive(&totals);

        self.billing_repo
            .update_bill_status(bill_id, status)
            .await
            .map_err(AppError::from)?;

        Ok(status)
    }

    async fn statement_for(&self, mut bill: Bill) -> AppResult<BillStatement> {
        let line_items = self
            .billing_repo
            .find_line_items(bill.id)
            .await
            .map_err(AppError::from)?;
        let payments = self
            .billing_repo
            .find_payments(bill.id)
            .await
            .map_err(AppError::from)?;
        let totals = BillTotals::compute(&line_items, &payments);

        // Displayed status is derived from the totals, never the stored
        // column, so it can't go stale
        bill.status = BillStatus::derive(&totals).as_str().to_string();

        Ok(BillStatement {
            bill,
            line_items,
            payments,
            totals,
        })
    }
}
