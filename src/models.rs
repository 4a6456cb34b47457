use chrono::NaiveDate;
use serde::{
    de::{self, DeserializeOwned, Deserializer},
    Deserialize, Serialize,
};
use serde_json::{Map, Value};

/// Query parameters as sent on the wire
pub type QueryPairs = Vec<(String, String)>;

// Keys that conventionally hold list rows, tried before any other array field.
const LIST_KEYS: [&str; 4] = ["items", "docs", "results", "rows"];

/// A typed list payload.
///
/// Accepts a bare array or an object carrying the rows under an array-valued
/// key (`items`, `docs`, `results`, `rows`, or otherwise the first array
/// field in document order). List endpoints move their resource key (e.g.
/// `admins`) to `items` first, see [`prefer_rows`]. Remaining keys are kept
/// in `extra`.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl<T> Listing<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (rows, extra) = match Value::deserialize(deserializer)? {
            Value::Array(rows) => (rows, Map::new()),
            Value::Object(mut map) => {
                let key = LIST_KEYS
                    .iter()
                    .find(|key| map.get(**key).is_some_and(Value::is_array))
                    .map(|key| key.to_string())
                    .or_else(|| {
                        map.iter()
                            .find(|(_, value)| value.is_array())
                            .map(|(key, _)| key.clone())
                    });
                let rows = match key.and_then(|key| map.remove(&key)) {
                    Some(Value::Array(rows)) => rows,
                    _ => Vec::new(),
                };
                (rows, map)
            }
            Value::Null => (Vec::new(), Map::new()),
            other => {
                return Err(de::Error::custom(format!("expected a list, found {}", other)));
            }
        };

        let items = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(de::Error::custom)?;

        Ok(Self { items, extra })
    }
}

/// Move the rows stored under `key` to `items` so they win over any other
/// array field in the payload.
pub(crate) fn prefer_rows(payload: &mut Value, key: &str) {
    let Value::Object(map) = payload else {
        return;
    };
    let has_items = map.get("items").is_some_and(Value::is_array);
    if has_items || !map.get(key).is_some_and(Value::is_array) {
        return;
    }
    if let Some(rows) = map.remove(key) {
        map.insert("items".to_string(), rows);
    }
}

/// Number sent either as JSON number or numeric string. Anything else
/// reads as absent.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    })
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(lenient_f64(deserializer)?
        .filter(|f| *f >= 0.0 && f.fract() == 0.0)
        .map(|f| f as u64))
}

/// Paging and filtering for list endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page `page` of size `limit`
    pub fn paged(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_string(), sort.clone()));
        }
        pairs
    }
}

/// Date range and bucket size for analytics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyticsQuery {
    pub period: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AnalyticsQuery {
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(period) = &self.period {
            pairs.push(("period".to_string(), period.clone()));
        }
        if let Some(from) = self.from {
            pairs.push(("from".to_string(), from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to".to_string(), to.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// Preference variants managed by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceKind {
    Global,
    Buyer,
    Tenant,
    Developer,
}

impl PreferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Buyer => "buyer",
            Self::Tenant => "tenant",
            Self::Developer => "developer",
        }
    }
}

/// Login credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Option<String>,
    pub admin: Option<Admin>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Free-text justification for reject and flag actions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReasonRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ReasonRequest {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

/// Inspection status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionStatusUpdate {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Fields forwarded to the external verification provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSubmission {
    pub provider: String,
    pub reference: Option<String>,
    pub callback_url: Option<String>,
}

impl ProviderSubmission {
    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = vec![("provider".to_string(), self.provider.clone())];
        if let Some(reference) = &self.reference {
            pairs.push(("reference".to_string(), reference.clone()));
        }
        if let Some(callback_url) = &self.callback_url {
            pairs.push(("callbackUrl".to_string(), callback_url.clone()));
        }
        pairs
    }
}

/// Console administrator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// New administrator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Agent account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub agent_type: Option<String>,
    pub account_status: Option<String>,
    pub is_account_verified: Option<bool>,
    pub is_flagged: Option<bool>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Agent request to move to a higher account tier
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeRequest {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub agent: Option<Value>,
    pub requested_type: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Landowner account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Landowner {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub is_flagged: Option<bool>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Property listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub property_type: Option<String>,
    pub brief_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    pub location: Option<Value>,
    pub status: Option<String>,
    pub is_approved: Option<bool>,
    pub owner: Option<Value>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Buyer account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Buyer or tenant brief
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brief {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub brief_type: Option<String>,
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub budget: Option<f64>,
    pub location: Option<Value>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Scheduled property inspection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub property_id: Option<Value>,
    pub requested_by: Option<Value>,
    pub inspection_date: Option<String>,
    pub inspection_time: Option<String>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Matching preference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub preference_type: Option<String>,
    pub property_type: Option<String>,
    pub location: Option<Value>,
    pub budget: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Customer testimonial
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Uploaded identity or ownership document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDocument {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub document_type: Option<String>,
    pub document_url: Option<String>,
    pub status: Option<String>,
    pub owner: Option<Value>,
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Headline counters for the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_agents: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pending_agents: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_properties: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pending_properties: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_buyers: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_briefs: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_inspections: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listing_accepts_bare_arrays() {
        let listing: Listing<Agent> =
            serde_json::from_value(json!([{"_id": "a1"}, {"id": "a2"}])).unwrap();
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.items[0].id.as_deref(), Some("a1"));
    }

    #[test]
    fn listing_finds_rows_under_resource_key() {
        let listing: Listing<Admin> = serde_json::from_value(json!({
            "success": true,
            "admins": [{"_id": "x", "email": "x@example.com"}],
            "total": 37
        }))
        .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.items[0].email.as_deref(), Some("x@example.com"));
        assert_eq!(listing.extra["total"], json!(37));
    }

    #[test]
    fn listing_prefers_conventional_keys() {
        let listing: Listing<Value> = serde_json::from_value(json!({
            "tags": ["a", "b", "c"],
            "items": [1]
        }))
        .unwrap();
        assert_eq!(listing.items, vec![json!(1)]);
    }

    #[test]
    fn listing_of_empty_object_is_empty() {
        let listing: Listing<Buyer> = serde_json::from_value(json!({})).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn preferred_rows_beat_earlier_arrays() {
        let mut payload = json!({
            "success": true,
            "ratings": [{"_id": "r5"}],
            "testimonials": [{"_id": "t1"}]
        });
        prefer_rows(&mut payload, "testimonials");
        let listing: Listing<Testimonial> = serde_json::from_value(payload).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.items[0].id.as_deref(), Some("t1"));
        assert!(listing.extra.contains_key("ratings"));
    }

    #[test]
    fn fallback_scan_follows_document_order() {
        let listing: Listing<Value> = serde_json::from_str(
            r#"{"zones": [{"id": 1}], "alerts": [{"id": 2}]}"#,
        )
        .unwrap();
        assert_eq!(listing.items, vec![json!({"id": 1})]);
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let property: Property =
            serde_json::from_value(json!({"_id": "p1", "price": "25,000,000"})).unwrap();
        assert_eq!(property.price, Some(25_000_000.0));

        let stats: DashboardStats =
            serde_json::from_value(json!({"totalAgents": "12", "pendingAgents": 3, "totalBuyers": "n/a"}))
                .unwrap();
        assert_eq!(stats.total_agents, Some(12));
        assert_eq!(stats.pending_agents, Some(3));
        assert_eq!(stats.total_buyers, None);
        assert_eq!(stats.total_briefs, None);
    }

    #[test]
    fn list_query_emits_only_set_fields() {
        let pairs = ListQuery::paged(1, 10).search("lekki").to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("search".to_string(), "lekki".to_string()),
            ]
        );
    }

    #[test]
    fn analytics_dates_use_iso_format() {
        let query = AnalyticsQuery {
            period: Some("monthly".to_string()),
            from: NaiveDate::from_ymd_opt(2024, 1, 5),
            to: None,
        };
        assert_eq!(query.to_pairs()[1], ("from".to_string(), "2024-01-05".to_string()));
    }
}
