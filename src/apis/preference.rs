use crate::{
    client::{segment, AdminClient},
    envelope::ApiResponse,
    models::{ListQuery, Listing, Preference, PreferenceKind},
};
use log::info;
use serde::Serialize;
use serde_json::Value;

/// Preference API operations
pub struct PreferenceApi<'a> {
    client: &'a AdminClient,
}

impl<'a> PreferenceApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// List preferences of every kind
    pub async fn get_preferences(&self, query: &ListQuery) -> ApiResponse<Listing<Preference>> {
        info!("Listing preferences");
        self.client
            .get_listing("/preferences", "preferences", query.to_pairs())
            .await
    }

    /// List preferences of one kind (global, buyer, tenant or developer)
    ///
    /// # Arguments
    /// * `kind` - Preference variant
    /// * `query` - Paging and filters
    pub async fn get_preferences_by_kind(
        &self,
        kind: PreferenceKind,
        query: &ListQuery,
    ) -> ApiResponse<Listing<Preference>> {
        info!("Listing {} preferences", kind.as_str());
        let path = format!("/preferences/{}", kind.as_str());
        self.client
            .get_listing(&path, "preferences", query.to_pairs())
            .await
    }

    pub async fn get_preference(&self, preference_id: &str) -> ApiResponse<Preference> {
        info!("Getting preference {}", preference_id);
        let path = format!("/preferences/{}", segment(preference_id));
        self.client.get(&path, Vec::new()).await
    }

    /// Create a preference of the given kind
    pub async fn create_preference<B>(&self, kind: PreferenceKind, data: &B) -> ApiResponse<Preference>
    where
        B: Serialize + ?Sized,
    {
        info!("Creating {} preference", kind.as_str());
        let path = format!("/preferences/{}", kind.as_str());
        self.client.post(&path, data).await
    }

    pub async fn update_preference<B>(&self, preference_id: &str, data: &B) -> ApiResponse<Preference>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating preference {}", preference_id);
        let path = format!("/preferences/{}", segment(preference_id));
        self.client.put(&path, data).await
    }

    pub async fn delete_preference(&self, preference_id: &str) -> ApiResponse<Value> {
        info!("Deleting preference {}", preference_id);
        let path = format!("/preferences/{}", segment(preference_id));
        self.client.delete(&path).await
    }
}
