//! Expense endpoints: creation, listing, detail, deletion.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use spliteasy_core::expense::request::share_map;
use spliteasy_core::expense::{CreateExpenseRequest, ExpenseStatus, SplitType};
use spliteasy_core::split::ShareMap;
use spliteasy_shared::AppResult;
use spliteasy_shared::types::{Currency, ExpenseId, GroupId, Page, PageRequest, UserId};

use crate::ApiClient;
use crate::response::{expect_success, parse_envelope, transport};

/// An expense as returned by the backend.
///
/// Most fields are optional on the wire; the backend fills in what it knows
/// per endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Expense id.
    pub id: ExpenseId,
    /// Total amount.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Currency of the amount.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// What the money was spent on.
    #[serde(default)]
    pub description: Option<String>,
    /// Group the expense belongs to, if any.
    #[serde(default)]
    pub group_id: Option<GroupId>,
    /// Who paid.
    #[serde(default)]
    pub payer_id: Option<UserId>,
    /// Payer display name, when the endpoint expands it.
    #[serde(default)]
    pub payer_name: Option<String>,
    /// Participant roster.
    #[serde(default)]
    pub participant_ids: Vec<UserId>,
    /// Participant display names, aligned with `participant_ids`.
    #[serde(default)]
    pub participant_names: Vec<String>,
    /// How the amount was divided.
    #[serde(default)]
    pub split_type: Option<SplitType>,
    /// Per-participant shares.
    #[serde(default, with = "share_map")]
    pub participant_shares: ShareMap,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<ExpenseStatus>,
    /// Spending category.
    #[serde(default)]
    pub category: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApiClient {
    /// `POST /api/v1/expenses` — submits a new expense.
    ///
    /// The body comes pre-built from
    /// [`CreateExpenseRequest::from_draft`](spliteasy_core::expense::CreateExpenseRequest::from_draft);
    /// nothing is recomputed here.
    pub async fn create_expense(&self, request: &CreateExpenseRequest) -> AppResult<()> {
        let response = self
            .http
            .post(self.url("/api/v1/expenses"))
            .bearer_auth(self.bearer()?)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        expect_success(response).await
    }

    /// `GET /api/v1/expenses` — the signed-in user's expense feed, paged.
    pub async fn expenses(&self, page: PageRequest) -> AppResult<Page<Expense>> {
        let response = self
            .http
            .get(self.url("/api/v1/expenses"))
            .query(&[
                ("pageable.page", page.page.to_string()),
                ("pageable.size", page.size.to_string()),
            ])
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(transport)?;

        parse_envelope(response).await
    }

    /// `GET /api/v1/expenses/{id}` — a single expense.
    pub async fn expense(&self, id: ExpenseId) -> AppResult<Expense> {
        let response = self
            .http
            .get(self.url(&format!("/api/v1/expenses/{id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(transport)?;

        parse_envelope(response).await
    }

    /// `DELETE /api/v1/expenses/{id}` — removes an expense.
    pub async fn delete_expense(&self, id: ExpenseId) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/v1/expenses/{id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await
            .map_err(transport)?;

        expect_success(response).await
    }
}
