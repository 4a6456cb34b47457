use crate::{
    client::{segment, AdminClient},
    envelope::ApiResponse,
    models::{Admin, AdminCreateRequest, ListQuery, Listing},
};
use log::{debug, info};
use serde::Serialize;
use serde_json::{json, Value};

/// Administrator API operations
pub struct AdminApi<'a> {
    client: &'a AdminClient,
}

impl<'a> AdminApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// List administrators
    ///
    /// # Arguments
    /// * `query` - Paging and filters
    pub async fn get_admins(&self, query: &ListQuery) -> ApiResponse<Listing<Admin>> {
        info!("Listing admins");
        debug!("HTTP GET /admins with {:?}", query);
        self.client.get_listing("/admins", "admins", query.to_pairs()).await
    }

    pub async fn get_admin(&self, admin_id: &str) -> ApiResponse<Admin> {
        info!("Getting admin {}", admin_id);
        let path = format!("/admins/{}", segment(admin_id));
        self.client.get(&path, Vec::new()).await
    }

    /// Create an administrator account
    pub async fn create_admin(&self, request: &AdminCreateRequest) -> ApiResponse<Admin> {
        info!("Creating admin {}", request.email);
        self.client.post("/admins", request).await
    }

    pub async fn update_admin<B>(&self, admin_id: &str, data: &B) -> ApiResponse<Admin>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating admin {}", admin_id);
        let path = format!("/admins/{}", segment(admin_id));
        self.client.put(&path, data).await
    }

    pub async fn delete_admin(&self, admin_id: &str) -> ApiResponse<Value> {
        info!("Deleting admin {}", admin_id);
        let path = format!("/admins/{}", segment(admin_id));
        self.client.delete(&path).await
    }

    /// Activate or deactivate an administrator
    ///
    /// # Arguments
    /// * `admin_id` - Admin id
    /// * `active` - New activation state
    pub async fn set_admin_status(&self, admin_id: &str, active: bool) -> ApiResponse<Admin> {
        info!("Setting admin {} active={}", admin_id, active);
        let path = format!("/admins/{}/status", segment(admin_id));
        self.client.patch(&path, &json!({ "isActive": active })).await
    }
}
