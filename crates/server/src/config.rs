//! Server configuration

/// Server configuration loaded from environment variables.
///
/// Read once at startup and treated as read-only afterwards. A missing
/// or malformed Notion setting is not fatal here: it surfaces as a 500
/// on the request that needs it, with the offending value named.
#[derive(Debug, Clone)]
pub struct Config {
    pub notion_token: Option<String>,
    /// Raw configured value; normalized per request so operators see the
    /// original string in error responses.
    pub notion_database_id: Option<String>,
    pub bind_address: String,
    pub cors_origins: Vec<String>,
    /// Extra canonical field labels to require beyond the built-in set.
    pub extra_required_fields: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            notion_token: std::env::var("NOTION_API_TOKEN").ok(),
            notion_database_id: std::env::var("NOTION_DATABASE_ID").ok(),
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| csv(&v))
                .unwrap_or_else(|_| vec!["*".to_string()]),
            extra_required_fields: std::env::var("REQUIRED_FIELDS")
                .map(|v| csv(&v))
                .unwrap_or_default(),
        }
    }
}

fn csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_drops_empty_segments() {
        assert_eq!(csv("Chief Complaint, ,Country"), vec![
            "Chief Complaint",
            "Country"
        ]);
        assert_eq!(csv(""), Vec::<String>::new());
    }
}
