use crate::{
    client::{segment, AdminClient},
    envelope::ApiResponse,
    models::{ListQuery, Listing, Testimonial},
};
use log::info;
use serde::Serialize;
use serde_json::{json, Value};

/// Testimonial API operations
pub struct TestimonialApi<'a> {
    client: &'a AdminClient,
}

impl<'a> TestimonialApi<'a> {
    pub fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    pub async fn get_testimonials(&self, query: &ListQuery) -> ApiResponse<Listing<Testimonial>> {
        info!("Listing testimonials");
        self.client
            .get_listing("/testimonials", "testimonials", query.to_pairs())
            .await
    }

    pub async fn get_testimonial(&self, testimonial_id: &str) -> ApiResponse<Testimonial> {
        info!("Getting testimonial {}", testimonial_id);
        let path = format!("/testimonials/{}", segment(testimonial_id));
        self.client.get(&path, Vec::new()).await
    }

    pub async fn create_testimonial<B>(&self, data: &B) -> ApiResponse<Testimonial>
    where
        B: Serialize + ?Sized,
    {
        info!("Creating testimonial");
        self.client.post("/testimonials", data).await
    }

    pub async fn update_testimonial<B>(&self, testimonial_id: &str, data: &B) -> ApiResponse<Testimonial>
    where
        B: Serialize + ?Sized,
    {
        info!("Updating testimonial {}", testimonial_id);
        let path = format!("/testimonials/{}", segment(testimonial_id));
        self.client.put(&path, data).await
    }

    pub async fn delete_testimonial(&self, testimonial_id: &str) -> ApiResponse<Value> {
        info!("Deleting testimonial {}", testimonial_id);
        let path = format!("/testimonials/{}", segment(testimonial_id));
        self.client.delete(&path).await
    }

    /// Publish, hide or otherwise moderate a testimonial
    pub async fn set_testimonial_status(
        &self,
        testimonial_id: &str,
        status: &str,
    ) -> ApiResponse<Testimonial> {
        info!("Setting testimonial {} status to {}", testimonial_id, status);
        let path = format!("/testimonials/{}/status", segment(testimonial_id));
        self.client.patch(&path, &json!({ "status": status })).await
    }
}
