use crate::models::{Bill, BillLineItem, BillStatus, Payment};
use sqlx::{Result as SqlxResult, SqlitePool};
use uuid::Uuid;

/// Repository for bill, line item, and payment data access
pub struct BillingRepository {
    pool: SqlitePool,
}

impl BillingRepository {
    /// Create a new BillingRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new bill
    pub async fn create_bill(&self, bill: &Bill) -> SqlxResult<Bill> {
        sqlx::query_as::<_, Bill>(
            r#"
            INSERT INTO bills (id, member_id, status, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, member_id, status, created_at
            "#,
        )
        .bind(bill.id)
        .bind(bill.member_id)
        .bind(&bill.status)
        .bind(bill.created_at)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a bill by UUID
    pub async fn find_bill_by_id(&self, id: Uuid) -> SqlxResult<Option<Bill>> {
        sqlx::query_as::<_, Bill>(
            r#"
            SELECT id, member_id, status, created_at
            FROM bills
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// All bills, newest first
    pub async fn find_all_bills(&self) -> SqlxResult<Vec<Bill>> {
        sqlx::query_as::<_, Bill>(
            r#"
            SELECT id, member_id, status, created_at
            FROM bills
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// One member's bills, newest first
    pub async fn find_bills_by_member(&self, member_id: Uuid) -> SqlxResult<Vec<Bill>> {
        sqlx::query_as::<_, Bill>(
            r#"
            SELECT id, member_id, status, created_at
            FROM bills
            WHERE member_id = ?1
            ORDER BY created_at DESC
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Persist a recomputed bill status
    pub async fn update_bill_status(&self, bill_id: Uuid, status: BillStatus) -> SqlxResult<()> {
        sqlx::query(
            r#"
            UPDATE bills
            SET status = ?2
            WHERE id = ?1
            "#,
        )
        .bind(bill_id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert a new line item
    pub async fn add_line_item(&self, item: &BillLineItem) -> SqlxResult<BillLineItem> {
        sqlx::query_as::<_, BillLineItem>(
            r#"
            INSERT INTO bill_line_items (id, bill_id, description, amount)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, bill_id, description, amount
            "#,
        )
        .bind(item.id)
        .bind(item.bill_id)
        .bind(&item.description)
        .bind(item.amount)
        .fetch_one(&self.pool)
        .await
    }

    /// Line items for a bill in insertion order
    pub async fn find_line_items(&self, bill_id: Uuid) -> SqlxResult<Vec<BillLineItem>> {
        // rowid preserves insertion order; the UUID key does not
        sqlx::query_as::<_, BillLineItem>(
            r#"
            SELECT id, bill_id, description, amount
            FROM bill_line_items
            WHERE bill_id = ?1
            ORDER BY rowid ASC
            "#,
        )
        .bind(bill_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a new payment
    pub async fn add_payment(&self, payment: &Payment) -> SqlxResult<Payment> {
        sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, bill_id, amount, status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, bill_id, amount, status, created_at
            "#,
        )
        .bind(payment.id)
        .bind(payment.bill_id)
        .bind(payment.amount)
        .bind(&payment.status)
        .bind(payment.created_at)
        .fetch_one(&self.pool)
        .await
    }

    /// Payments for a bill in insertion order
    pub async fn find_payments(&self, bill_id: Uuid) -> SqlxResult<Vec<Payment>> {
        sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, bill_id, amount, status, created_at
            FROM payments
            WHERE bill_id = ?1
            ORDER BY rowid ASC
            "#,
        )
        .bind(bill_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Delete a bill together with its line items and payments.
    /// Returns false if the bill did not exist.
    pub async fn delete_bill(&self, bill_id: Uuid) -> SqlxResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM payments WHERE bill_id = ?1")
            .bind(bill_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM bill_line_items WHERE bill_id = ?1")
            .bind(bill_id)
            .execute(&mut *tx)
            .await?;

        let rows_affected = sqlx::query("DELETE FROM bills WHERE id = ?1")
            .bind(bill_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(rows_affected > 0)
    }
}
