//! Lab tests and lab orders.
//!
//! The test catalog is static reference data owned by [`CoreConfig`]; orders
//! reference a catalog entry by id and carry their own status lifecycle
//! (ordered → in-progress → completed, or cancelled).

use crate::config::CoreConfig;
use crate::error::{RecordError, RecordResult};
use crate::store::DocStore;
use chrono::{DateTime, Utc};
use hms_id::RecordId;
use hms_types::{EmailAddress, NonBlankText};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

const COLLECTION: &str = "lab_orders";

/// One entry of the lab test catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabTest {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub preparation_guidelines: String,
    pub duration: String,
    pub category: String,
}

/// Processing status of a lab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LabOrderStatus {
    #[default]
    Ordered,
    InProgress,
    Completed,
    Cancelled,
}

/// A lab order as supplied by an ordering request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewLabOrder {
    /// Patient record id, when the patient is registered.
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub patient_id: Option<RecordId>,
    #[schema(value_type = String)]
    pub patient_name: NonBlankText,
    #[schema(value_type = String)]
    pub patient_email: EmailAddress,
    /// Catalog id of the requested test.
    pub test_id: String,
    #[serde(default)]
    pub notes: String,
}

/// A stored lab order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabOrder {
    #[schema(value_type = String)]
    pub id: RecordId,
    #[serde(flatten)]
    pub details: NewLabOrder,
    /// Denormalised from the catalog at ordering time.
    pub test_name: String,
    pub status: LabOrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Lab catalog lookups and order operations.
#[derive(Clone, Debug)]
pub struct LabService {
    cfg: Arc<CoreConfig>,
    store: DocStore,
}

impl LabService {
    /// Creates a new service bound to the configured data directory.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            store: DocStore::new(cfg.data_dir(), COLLECTION),
            cfg,
        }
    }

    /// The test catalog, in catalog order.
    pub fn catalog(&self) -> &[LabTest] {
        self.cfg.lab_tests()
    }

    /// Places an order for a catalog test.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `test_id` is not in the catalog.
    pub fn order(&self, details: NewLabOrder) -> RecordResult<LabOrder> {
        let test = self.cfg.lab_test(&details.test_id).ok_or_else(|| {
            RecordError::InvalidInput(format!("unknown lab test id '{}'", details.test_id))
        })?;

        let order = LabOrder {
            id: RecordId::new(),
            test_name: test.name.clone(),
            status: LabOrderStatus::Ordered,
            details,
            created_at: Utc::now(),
        };
        self.store.write(&order.id, &order)?;
        tracing::info!("placed lab order {} for test {}", order.id, order.details.test_id);
        Ok(order)
    }

    /// Fetches one order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn get(&self, id: &RecordId) -> RecordResult<LabOrder> {
        self.store
            .read(id)?
            .ok_or_else(|| RecordError::not_found("lab order", id))
    }

    /// Lists all orders.
    pub fn list(&self) -> Vec<LabOrder> {
        self.store.list()
    }

    /// Moves an order to a new status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for `id`.
    pub fn set_status(&self, id: &RecordId, status: LabOrderStatus) -> RecordResult<LabOrder> {
        let mut order = self.get(id)?;
        order.status = status;
        self.store.write(id, &order)?;
        Ok(order)
    }
}
