use crate::{
    client::{segment, AdminClient},
    envelope::ApiResponse,
    models::{Buyer, Inspection, ListQuery, Listing, Preference},
};
use log::info;
use serde::Serialize;
use serde_json::Value;

/// Buyer API operations
pub struct BuyerApi<'a> {
    client: &'a AdminClient,
}

impl<'a> BuyerApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    pub async fn get_buyers(&self, query: &ListQuery) -> ApiResponse<Listing<Buyer>> {
        info!("Listing buyers");
        self.client.get_listing("/buyers", "buyers", query.to_pairs()).await
    }

    pub async fn get_buyer(&self, buyer_id: &str) -> ApiResponse<Buyer> {
        info!("Getting buyer {}", buyer_id);
        let path = format!("/buyers/{}", segment(buyer_id));
        self.client.get(&path, Vec::new()).await
    }

    pub async fn create_buyer<B>(&self, data: &B) -> ApiResponse<Buyer>
    where
        B: Serialize + ?Sized,
    {
        info!("Creating buyer");
        self.client.post("/buyers", data).await
    }

    pub async fn update_buyer<B>(&self, buyer_id: &str, data: &B) -> ApiResponse<Buyer>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating buyer {}", buyer_id);
        let path = format!("/buyers/{}", segment(buyer_id));
        self.client.put(&path, data).await
    }

    pub async fn delete_buyer(&self, buyer_id: &str) -> ApiResponse<Value> {
        info!("Deleting buyer {}", buyer_id);
        let path = format!("/buyers/{}", segment(buyer_id));
        self.client.delete(&path).await
    }

    /// Inspections booked by one buyer
    pub async fn get_buyer_inspections(
        &self,
        buyer_id: &str,
        query: &ListQuery,
    ) -> ApiResponse<Listing<Inspection>> {
        info!("Listing inspections of buyer {}", buyer_id);
        let path = format!("/buyers/{}/inspections", segment(buyer_id));
        self.client
            .get_listing(&path, "inspections", query.to_pairs())
            .await
    }

    /// Matching preferences of one buyer
    pub async fn get_buyer_preferences(&self, buyer_id: &str) -> ApiResponse<Listing<Preference>> {
        info!("Listing preferences of buyer {}", buyer_id);
        let path = format!("/buyers/{}/preferences", segment(buyer_id));
        self.client.get_listing(&path, "preferences", Vec::new()).await
    }

    pub async fn update_buyer_preferences<B>(&self, buyer_id: &str, data: &B) -> ApiResponse<Value>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating preferences of buyer {}", buyer_id);
        let path = format!("/buyers/{}/preferences", segment(buyer_id));
        self.client.put(&path, data).await
    }
}
