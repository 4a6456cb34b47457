use crate::{
    client::{segment, AdminClient},
    envelope::ApiResponse,
    models::{Inspection, InspectionStatusUpdate, ListQuery, Listing},
};
use log::info;
use serde_json::Value;

/// Inspection API operations
pub struct InspectionApi<'a> {
    client: &'a AdminClient,
}

impl<'a> InspectionApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    pub async fn get_inspections(&self, query: &ListQuery) -> ApiResponse<Listing<Inspection>> {
        info!("Listing inspections");
        self.client.get_listing("/inspections", "inspections", query.to_pairs()).await
    }

    pub async fn get_inspection(&self, inspection_id: &str) -> ApiResponse<Inspection> {
        info!("Getting inspection {}", inspection_id);
        let path = format!("/inspections/{}", segment(inspection_id));
        self.client.get(&path, Vec::new()).await
    }

    /// Move an inspection to a new status (e.g. "approved", "completed")
    pub async fn update_inspection_status(
        &self,
        inspection_id: &str,
        update: &InspectionStatusUpdate,
    ) -> ApiResponse<Inspection> {
        info!("Setting inspection {} status to {}", inspection_id, update.status);
        let path = format!("/inspections/{}/status", segment(inspection_id));
        self.client.patch(&path, update).await
    }

    pub async fn delete_inspection(&self, inspection_id: &str) -> ApiResponse<Value> {
        info!("Deleting inspection {}", inspection_id);
        let path = format!("/inspections/{}", segment(inspection_id));
        self.client.delete(&path).await
    }

    pub async fn get_inspection_stats(&self) -> ApiResponse<Value> {
        info!("Getting inspection stats");
        self.client.get("/inspections/stats", Vec::new()).await
    }
}
