use crate::{
    client::{segment, AdminClient},
    envelope::ApiResponse,
    models::{Landowner, ListQuery, Listing, Property, ReasonRequest},
};
use log::info;
use serde::Serialize;
use serde_json::Value;

/// Landowner API operations
pub struct LandownerApi<'a> {
    client: &'a AdminClient,
}

impl<'a> LandownerApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    pub async fn get_landowners(&self, query: &ListQuery) -> ApiResponse<Listing<Landowner>> {
        info!("Listing landowners");
        self.client
            .get_listing("/landowners", "landowners", query.to_pairs())
            .await
    }

    pub async fn get_landowner(&self, landowner_id: &str) -> ApiResponse<Landowner> {
        info!("Getting landowner {}", landowner_id);
        let path = format!("/landowners/{}", segment(landowner_id));
        self.client.get(&path, Vec::new()).await
    }

    pub async fn update_landowner<B>(&self, landowner_id: &str, data: &B) -> ApiResponse<Landowner>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating landowner {}", landowner_id);
        let path = format!("/landowners/{}", segment(landowner_id));
        self.client.put(&path, data).await
    }

    pub async fn delete_landowner(&self, landowner_id: &str) -> ApiResponse<Value> {
        info!("Deleting landowner {}", landowner_id);
        let path = format!("/landowners/{}", segment(landowner_id));
        self.client.delete(&path).await
    }

    pub async fn flag_landowner(&self, landowner_id: &str, reason: &str) -> ApiResponse<Landowner> {
        info!("Flagging landowner {}", landowner_id);
        let path = format!("/landowners/{}/flag", segment(landowner_id));
        self.client.put(&path, &ReasonRequest::new(reason)).await
    }

    /// Properties listed by one landowner
    pub async fn get_landowner_properties(
        &self,
        landowner_id: &str,
        query: &ListQuery,
    ) -> ApiResponse<Listing<Property>> {
        info!("Listing properties of landowner {}", landowner_id);
        let path = format!("/landowners/{}/properties", segment(landowner_id));
        self.client
            .get_listing(&path, "properties", query.to_pairs())
            .await
    }
}
