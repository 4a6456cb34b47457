use crate::{
    client::{segment, AdminClient, ApiRequest},
    envelope::ApiResponse,
    models::{Brief, ListQuery, Listing, Property, ReasonRequest},
};
use log::info;
use serde::Serialize;
use serde_json::Value;

/// Brief API operations
pub struct BriefApi<'a> {
    client: &'a AdminClient,
}

impl<'a> BriefApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// List briefs
    ///
    /// # Arguments
    /// * `query` - Paging and filters
    pub async fn get_briefs(&self, query: &ListQuery) -> ApiResponse<Listing<Brief>> {
        info!("Listing briefs");
        self.client.get_listing("/briefs", "briefs", query.to_pairs()).await
    }

    pub async fn get_brief(&self, brief_id: &str) -> ApiResponse<Brief> {
        info!("Getting brief {}", brief_id);
        let path = format!("/briefs/{}", segment(brief_id));
        self.client.get(&path, Vec::new()).await
    }

    pub async fn create_brief<B>(&self, data: &B) -> ApiResponse<Brief>
    where
        B: Serialize + ?Sized,
    {
        info!("Creating brief");
        self.client.post("/briefs", data).await
    }

    pub async fn update_brief<B>(&self, brief_id: &str, data: &B) -> ApiResponse<Brief>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating brief {}", brief_id);
        let path = format!("/briefs/{}", segment(brief_id));
        self.client.put(&path, data).await
    }

    pub async fn delete_brief(&self, brief_id: &str) -> ApiResponse<Value> {
        info!("Deleting brief {}", brief_id);
        let path = format!("/briefs/{}", segment(brief_id));
        self.client.delete(&path).await
    }

    pub async fn approve_brief(&self, brief_id: &str) -> ApiResponse<Brief> {
        info!("Approving brief {}", brief_id);
        let path = format!("/briefs/{}/approve", segment(brief_id));
        self.client.send(ApiRequest::put(path)).await
    }

    pub async fn reject_brief(&self, brief_id: &str, reason: &str) -> ApiResponse<Brief> {
        info!("Rejecting brief {}", brief_id);
        let path = format!("/briefs/{}/reject", segment(brief_id));
        self.client.put(&path, &ReasonRequest::new(reason)).await
    }

    /// Properties the server matched against a brief
    pub async fn get_brief_matches(&self, brief_id: &str) -> ApiResponse<Listing<Property>> {
        info!("Listing matches for brief {}", brief_id);
        let path = format!("/briefs/{}/matches", segment(brief_id));
        self.client.get_listing(&path, "matches", Vec::new()).await
    }
}
