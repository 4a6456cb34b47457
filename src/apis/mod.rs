pub mod admin;
pub mod agent;
pub mod analytics;
pub mod auth;
pub mod brief;
pub mod buyer;
pub mod inspection;
pub mod landowner;
pub mod preference;
pub mod property;
pub mod testimonial;
pub mod verification;

// Re-export all APIs
pub use admin::AdminApi;
pub use agent::AgentApi;
pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use brief::BriefApi;
pub use buyer::BuyerApi;
pub use inspection::InspectionApi;
pub use landowner::LandownerApi;
pub use preference::PreferenceApi;
pub use property::PropertyApi;
pub use testimonial::TestimonialApi;
pub use verification::VerificationApi;
