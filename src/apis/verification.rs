use crate::{
    client::{segment, AdminClient, ApiRequest},
    envelope::ApiResponse,
    models::{ListQuery, Listing, ProviderSubmission, ReasonRequest, VerificationDocument},
};
use log::{debug, info};
use serde_json::Value;

/// Verification document API operations
pub struct VerificationApi<'a> {
    client: &'a AdminClient,
}

impl<'a> VerificationApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// List uploaded verification documents
    ///
    /// # Arguments
    /// * `query` - Paging and filters (`status` narrows to e.g. "pending")
    pub async fn get_verification_documents(
        &self,
        query: &ListQuery,
    ) -> ApiResponse<Listing<VerificationDocument>> {
        info!("Listing verification documents");
        self.client
            .get_listing("/verification/documents", "documents", query.to_pairs())
            .await
    }

    pub async fn get_verification_document(
        &self,
        document_id: &str,
    ) -> ApiResponse<VerificationDocument> {
        info!("Getting verification document {}", document_id);
        let path = format!("/verification/documents/{}", segment(document_id));
        self.client.get(&path, Vec::new()).await
    }

    pub async fn approve_document(&self, document_id: &str) -> ApiResponse<VerificationDocument> {
        info!("Approving verification document {}", document_id);
        let path = format!("/verification/documents/{}/approve", segment(document_id));
        self.client.send(ApiRequest::put(path)).await
    }

    pub async fn reject_document(
        &self,
        document_id: &str,
        reason: &str,
    ) -> ApiResponse<VerificationDocument> {
        info!("Rejecting verification document {}", document_id);
        let path = format!("/verification/documents/{}/reject", segment(document_id));
        self.client.put(&path, &ReasonRequest::new(reason)).await
    }

    /// Forward a document to the external verification provider
    ///
    /// The provider endpoint expects `application/x-www-form-urlencoded`
    /// rather than JSON.
    ///
    /// # Arguments
    /// * `document_id` - Document id
    /// * `submission` - Provider fields
    pub async fn submit_to_provider(
        &self,
        document_id: &str,
        submission: &ProviderSubmission,
    ) -> ApiResponse<Value> {
        info!(
            "Submitting verification document {} to {}",
            document_id, submission.provider
        );
        let path = format!("/verification/documents/{}/provider", segment(document_id));
        debug!("HTTP POST {} (form-urlencoded)", path);
        let request = ApiRequest::post(path).form(submission.to_pairs());
        self.client.send(request).await
    }
}
