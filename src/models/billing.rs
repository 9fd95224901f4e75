//! Billing models: bills, line items, payments, and the derived totals.
//!
//! Amounts due are never stored. They are recomputed from the bill's line
//! items and payments every time they are needed, and the persisted status
//! is always overwritten from those totals after a mutation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Bill status, derived from current totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Partial,
    Paid,
}

impl BillStatus {
    /// Convert from database string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BillStatus::Pending),
            "partial" => Ok(BillStatus::Partial),
            "paid" => Ok(BillStatus::Paid),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }

    /// Convert to database string
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Partial => "partial",
            BillStatus::Paid => "paid",
        }
    }

    /// Derive the status from computed totals. Pure function of the
    /// totals; never patched incrementally.
    pub fn derive(totals: &BillTotals) -> Self {
        if totals.amount_due <= 0.0 && totals.total_amount > 0.0 {
            BillStatus::Paid
        } else if totals.amount_paid > 0.0 {
            BillStatus::Partial
        } else {
            BillStatus::Pending
        }
    }
}

impl From<String> for BillStatus {
    fn from(s: String) -> Self {
        Self::from_str(&s).unwrap_or(BillStatus::Pending)
    }
}

impl From<BillStatus> for String {
    fn from(status: BillStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

impl PaymentStatus {
    /// Convert from database string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }

    /// Convert to database string
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
        }
    }
}

/// Bill header row; charges and payments hang off it
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bill {
    pub id: Uuid,
    pub member_id: Uuid,
    pub status: String, // Stored as TEXT, use BillStatus enum for type safety
    pub created_at: NaiveDateTime,
}

impl Bill {
    /// Create a new empty pending Bill
    pub fn new(member_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            status: BillStatus::Pending.as_str().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Get the status as an enum
    pub fn status_enum(&self) -> BillStatus {
        BillStatus::from_str(&self.status).unwrap_or(BillStatus::Pending)
    }
}

/// Single charge on a bill
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BillLineItem {
    pub id: Uuid,
    pub bill_id: Uuid,
    pub description: String,
    pub amount: f64,
}

impl BillLineItem {
    /// Create a new BillLineItem
    pub fn new(bill_id: Uuid, description: String, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            bill_id,
            description,
            amount,
        }
    }
}

/// Payment recorded against a bill
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub bill_id: Uuid,
    pub amount: f64,
    pub status: String, // Stored as TEXT, use PaymentStatus enum for type safety
    pub created_at: NaiveDateTime,
}

impl Payment {
    /// Create a new completed Payment
    pub fn new(bill_id: Uuid, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            bill_id,
            amount,
            status: PaymentStatus::Completed.as_str().to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Check if the payment counts toward the amount paid
    pub fn is_completed(&self) -> bool {
        PaymentStatus::from_str(&self.status) == Ok(PaymentStatus::Completed)
    }
}

/// Derived financial totals for a bill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillTotals {
    pub total_amount: f64,
    pub amount_paid: f64,
    pub amount_due: f64,
}

impl BillTotals {
    /// Compute totals from the bill's current line items and payments.
    /// Only completed payments count toward the amount paid.
    pub fn compute(line_items: &[BillLineItem], payments: &[Payment]) -> Self {
        let total_amount: f64 = line_items.iter().map(|item| item.amount).sum();
        let amount_paid: f64 = payments
            .iter()
            .filter(|p| p.is_completed())
            .map(|p| p.amount)
            .sum();
        let amount_due = (total_amount - amount_paid).max(0.0);

        Self {
            total_amount,
            amount_paid,
            amount_due,
        }
    }
}

/// Bill with its line items, payments, and computed totals, in the form
/// the presentation layer displays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillStatement {
    pub bill: Bill,
    pub line_items: Vec<BillLineItem>,
    pub payments: Vec<Payment>,
    pub totals: BillTotals,
}
