// src/services/report_service.rs
use std::sync::Arc;

use crate::domain::{ReportReason, ReportReceipt};
use crate::error::AppResult;
use crate::events::{ContentReported, EventBus};
use crate::integrations::CatalogApi;
use crate::repositories::ReportRepository;

const LOCAL_RECEIPT_MESSAGE: &str = "Signalement enregistré (local)";

pub struct ReportService {
    catalog: Arc<dyn CatalogApi>,
    local: Arc<dyn ReportRepository>,
    event_bus: Arc<EventBus>,
}

impl ReportService {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        local: Arc<dyn ReportRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            catalog,
            local,
            event_bus,
        }
    }

    /// Reports a content. When the backend cannot take it, the report is
    /// counted on the device and a local receipt is returned.
    pub async fn report(&self, content_id: i64, reason: ReportReason) -> AppResult<ReportReceipt> {
        let receipt = match self.catalog.report_content(content_id, reason).await {
            Ok(receipt) => receipt,
            Err(e) if e.allows_local_fallback() => {
                log::info!("Recording report for {} locally: {}", content_id, e);
                let count = self.local.increment(content_id, reason)?;
                ReportReceipt {
                    message: LOCAL_RECEIPT_MESSAGE.to_string(),
                    nb_signalements: count,
                    local: true,
                }
            }
            Err(e) => return Err(e),
        };

        self.event_bus.emit(ContentReported::new(
            content_id,
            receipt.nb_signalements,
            receipt.local,
        ));
        Ok(receipt)
    }

    pub fn local_count(&self, content_id: i64) -> AppResult<u32> {
        self.local.count_for(content_id)
    }
}
