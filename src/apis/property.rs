use crate::{
    client::{segment, AdminClient, ApiRequest},
    envelope::ApiResponse,
    models::{ListQuery, Listing, Property, ReasonRequest},
};
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

/// Property API operations
pub struct PropertyApi<'a> {
    client: &'a AdminClient,
}

impl<'a> PropertyApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// List properties
    ///
    /// # Arguments
    /// * `query` - Paging and filters (`status` narrows to e.g. "approved")
    pub async fn get_properties(&self, query: &ListQuery) -> ApiResponse<Listing<Property>> {
        info!("Listing properties");
        debug!("HTTP GET /properties with {:?}", query);
        self.client.get_listing("/properties", "properties", query.to_pairs()).await
    }

    /// List properties awaiting approval
    pub async fn get_pending_properties(&self, query: &ListQuery) -> ApiResponse<Listing<Property>> {
        info!("Listing pending properties");
        self.client
            .get_listing("/properties/pending", "properties", query.to_pairs())
            .await
    }

    /// Get a single property
    ///
    /// # Arguments
    /// * `property_id` - Property id
    pub async fn get_property(&self, property_id: &str) -> ApiResponse<Property> {
        info!("Getting property {}", property_id);
        let path = format!("/properties/{}", segment(property_id));
        self.client.get(&path, Vec::new()).await
    }

    /// Create a property on behalf of an owner
    ///
    /// # Arguments
    /// * `data` - Property fields, forwarded as JSON
    pub async fn create_property<B>(&self, data: &B) -> ApiResponse<Property>
    where
        B: Serialize + ?Sized,
    {
        info!("Creating property");
        self.client.post("/properties", data).await
    }

    /// Update a property
    ///
    /// # Arguments
    /// * `property_id` - Property id
    /// * `data` - Fields to change
    pub async fn update_property<B>(&self, property_id: &str, data: &B) -> ApiResponse<Property>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating property {}", property_id);
        let path = format!("/properties/{}", segment(property_id));
        self.client.put(&path, data).await
    }

    /// Delete a property
    pub async fn delete_property(&self, property_id: &str) -> ApiResponse<Value> {
        info!("Deleting property {}", property_id);
        let path = format!("/properties/{}", segment(property_id));
        self.client.delete(&path).await
    }

    /// Approve a property for public listing
    pub async fn approve_property(&self, property_id: &str) -> ApiResponse<Property> {
        info!("Approving property {}", property_id);
        let path = format!("/properties/{}/approve", segment(property_id));
        self.client.send(ApiRequest::put(path)).await
    }

    /// Reject a property
    ///
    /// # Arguments
    /// * `property_id` - Property id
    /// * `reason` - Explanation shown to the owner
    pub async fn reject_property(&self, property_id: &str, reason: &str) -> ApiResponse<Property> {
        info!("Rejecting property {}", property_id);
        let path = format!("/properties/{}/reject", segment(property_id));
        self.client.put(&path, &ReasonRequest::new(reason)).await
    }
}
