use crate::{
    client::{segment, AdminClient, ApiRequest},
    envelope::ApiResponse,
    models::{Agent, ListQuery, Listing, ReasonRequest, UpgradeRequest},
};
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

/// Agent API operations
pub struct AgentApi<'a> {
    client: &'a AdminClient,
}

impl<'a> AgentApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// List all agents
    ///
    /// # Arguments
    /// * `query` - Paging and filters
    pub async fn get_agents(&self, query: &ListQuery) -> ApiResponse<Listing<Agent>> {
        info!("Listing agents");
        debug!("HTTP GET /agents with {:?}", query);
        self.client.get_listing("/agents", "agents", query.to_pairs()).await
    }

    /// List agents awaiting onboarding approval
    pub async fn get_pending_agents(&self, query: &ListQuery) -> ApiResponse<Listing<Agent>> {
        info!("Listing pending agents");
        self.client
            .get_listing("/agents/pending", "agents", query.to_pairs())
            .await
    }

    /// List approved agents
    pub async fn get_approved_agents(&self, query: &ListQuery) -> ApiResponse<Listing<Agent>> {
        info!("Listing approved agents");
        self.client
            .get_listing("/agents/approved", "agents", query.to_pairs())
            .await
    }

    /// Get a single agent
    ///
    /// # Arguments
    /// * `agent_id` - Agent id
    pub async fn get_agent(&self, agent_id: &str) -> ApiResponse<Agent> {
        info!("Getting agent {}", agent_id);
        let path = format!("/agents/{}", segment(agent_id));
        self.client.get(&path, Vec::new()).await
    }

    /// Update an agent's profile fields
    ///
    /// # Arguments
    /// * `agent_id` - Agent id
    /// * `data` - Fields to change
    pub async fn update_agent<B>(&self, agent_id: &str, data: &B) -> ApiResponse<Agent>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating agent {}", agent_id);
        let path = format!("/agents/{}", segment(agent_id));
        self.client.put(&path, data).await
    }

    pub async fn delete_agent(&self, agent_id: &str) -> ApiResponse<Value> {
        info!("Deleting agent {}", agent_id);
        let path = format!("/agents/{}", segment(agent_id));
        self.client.delete(&path).await
    }

    /// Approve a pending agent
    pub async fn approve_agent(&self, agent_id: &str) -> ApiResponse<Agent> {
        info!("Approving agent {}", agent_id);
        let path = format!("/agents/{}/approve", segment(agent_id));
        self.client.send(ApiRequest::put(path)).await
    }

    /// Reject a pending agent
    ///
    /// # Arguments
    /// * `agent_id` - Agent id
    /// * `reason` - Explanation shown to the agent
    pub async fn reject_agent(&self, agent_id: &str, reason: &str) -> ApiResponse<Agent> {
        info!("Rejecting agent {}", agent_id);
        let path = format!("/agents/{}/reject", segment(agent_id));
        self.client.put(&path, &ReasonRequest::new(reason)).await
    }

    /// Flag an agent for review
    pub async fn flag_agent(&self, agent_id: &str, reason: &str) -> ApiResponse<Agent> {
        info!("Flagging agent {}", agent_id);
        let path = format!("/agents/{}/flag", segment(agent_id));
        self.client.put(&path, &ReasonRequest::new(reason)).await
    }

    /// List agent requests to upgrade their account type
    pub async fn get_upgrade_requests(
        &self,
        query: &ListQuery,
    ) -> ApiResponse<Listing<UpgradeRequest>> {
        info!("Listing agent upgrade requests");
        self.client
            .get_listing("/agents/upgrade-requests", "requests", query.to_pairs())
            .await
    }

    pub async fn approve_upgrade_request(&self, request_id: &str) -> ApiResponse<UpgradeRequest> {
        info!("Approving upgrade request {}", request_id);
        let path = format!("/agents/upgrade-requests/{}/approve", segment(request_id));
        self.client.send(ApiRequest::put(path)).await
    }

    pub async fn reject_upgrade_request(
        &self,
        request_id: &str,
        reason: &str,
    ) -> ApiResponse<UpgradeRequest> {
        info!("Rejecting upgrade request {}", request_id);
        let path = format!("/agents/upgrade-requests/{}/reject", segment(request_id));
        self.client.put(&path, &ReasonRequest::new(reason)).await
    }
}
