use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://od-api.oxforddictionaries.com:443/api/v2".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Application ID issued by the dictionary service
    pub app_id: String,
    /// Application key issued by the dictionary service
    pub app_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_key: String::new(),
            api_url: default_api_url(),
        }
    }
}
