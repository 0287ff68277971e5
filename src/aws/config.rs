use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub profile: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            access_key_id: None,
            secret_access_key: None,
            profile: None,
        }
    }
}

impl AwsConfig {
    /// Static credentials, only when both key halves are configured
    pub fn get_explicit_credentials(&self) -> Option<Credentials> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Some(Credentials::new(
                access_key_id,
                secret_access_key,
                None,
                None,
                "sales-insight-config",
            )),
            _ => None,
        }
    }

    /// Build the shared SDK config.
    ///
    /// Explicit keys win over a named profile; with neither, the default
    /// credential chain (environment, profile, IAM role) is used.
    pub async fn build_sdk_config(&self) -> SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()));

        if let Some(credentials) = self.get_explicit_credentials() {
            loader = loader.credentials_provider(credentials);
        } else if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }

        loader.load().await
    }

    /// Copy safe to print, with secrets masked
    pub fn redacted(&self) -> Self {
        let mask = |value: &Option<String>| value.as_ref().map(|_| "********".to_string());
        Self {
            region: self.region.clone(),
            access_key_id: mask(&self.access_key_id),
            secret_access_key: mask(&self.secret_access_key),
            profile: self.profile.clone(),
        }
    }
}
