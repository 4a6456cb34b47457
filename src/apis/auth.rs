use crate::{
    client::{AdminClient, ApiRequest},
    envelope::ApiResponse,
    models::{Admin, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, ResetPasswordRequest, Session},
};
use log::{debug, info};
use serde_json::Value;

/// Session API operations
pub struct AuthApi<'a> {
    client: &'a AdminClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Sign in an administrator
    ///
    /// Sent without a bearer credential since no session exists yet. The
    /// returned token is not stored by the client; hand it to the credential
    /// store (or let the server set the `auth-token` cookie).
    ///
    /// # Arguments
    /// * `request` - Email and password
    pub async fn login(&self, request: &LoginRequest) -> ApiResponse<Session> {
        info!("Logging in admin: {}", request.email);
        debug!("HTTP POST /auth/login (unauthenticated)");
        self.client
            .send_json(ApiRequest::post("/auth/login").without_auth(), request)
            .await
    }

    /// End the current session
    pub async fn logout(&self) -> ApiResponse<Value> {
        info!("Logging out");
        self.client.send(ApiRequest::post("/auth/logout")).await
    }

    /// Request a password reset email
    ///
    /// # Arguments
    /// * `email` - Account email address
    pub async fn forgot_password(&self, email: &str) -> ApiResponse<Value> {
        info!("Requesting password reset for: {}", email);
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.client
            .send_json(ApiRequest::post("/auth/forgot-password").without_auth(), &body)
            .await
    }

    /// Complete a password reset with the emailed token
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResponse<Value> {
        info!("Resetting password");
        self.client
            .send_json(ApiRequest::post("/auth/reset-password").without_auth(), request)
            .await
    }

    /// Profile of the signed-in administrator
    pub async fn get_profile(&self) -> ApiResponse<Admin> {
        info!("Getting admin profile");
        self.client.get("/auth/profile", Vec::new()).await
    }

    /// Change the signed-in administrator's password
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResponse<Value> {
        info!("Changing admin password");
        self.client.put("/auth/change-password", request).await
    }

    /// Check that the stored credential is still accepted
    pub async fn verify_session(&self) -> ApiResponse<Value> {
        info!("Verifying session");
        self.client.get("/auth/verify", Vec::new()).await
    }
}
