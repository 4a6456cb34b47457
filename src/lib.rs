/*
 * Admin console API client - typed access to the property-management REST API
 */

// Internal modules
mod client;
pub mod models;  // Make models public
mod apis;
mod auth;
mod config;
mod envelope;
mod error;

// Re-export public types and interfaces
pub use client::{AdminClient, ApiRequest, RequestBody};
pub use models::*;
pub use apis::{
    AdminApi, AgentApi, AnalyticsApi, AuthApi, BriefApi, BuyerApi, InspectionApi, LandownerApi,
    PreferenceApi, PropertyApi, TestimonialApi, VerificationApi,
};
pub use auth::{CookieCredentials, CredentialStore, MemoryCredentials, NoCredentials, AUTH_COOKIE};
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use envelope::{ApiResponse, Pagination};
pub use error::{ClientError, ClientResult, NETWORK_ERROR_MESSAGE};

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AdminClient, ApiRequest, ApiResponse,
        ClientConfig, CookieCredentials, CredentialStore, MemoryCredentials, NoCredentials,
        ClientError, ClientResult,
        // Common model types
        Listing, ListQuery, Admin, Agent, Property, Buyer, Brief,
    };
}
