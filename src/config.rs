//! Azure OpenAI credentials and the environment boundary adapter.
//!
//! Credentials are a plain value passed into [`crate::AzureChatClient`];
//! [`AzureCredentials::from_env`] is the only function that touches the
//! process environment.

use crate::error::AzureError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variables read by [`AzureCredentials::from_env`].
pub const ENV_API_KEY: &str = "AZURE_API_KEY";
pub const ENV_INSTANCE_NAME: &str = "AZURE_OPENAI_API_INSTANCE_NAME";
pub const ENV_DEPLOYMENT_NAME: &str = "AZURE_OPENAI_API_DEPLOYMENT_NAME";
pub const ENV_API_VERSION: &str = "AZURE_OPENAI_API_VERSION";

/// Credentials for one Azure OpenAI deployment.
///
/// All four fields are required non-empty strings; nothing is mutated after
/// construction. The API key is held as a [`SecretString`] and masked in
/// `Debug` output and log lines.
#[derive(Clone)]
pub struct AzureCredentials {
    pub(crate) api_key: SecretString,
    /// Azure resource name, used as the DNS subdomain.
    pub instance_name: String,
    /// User-assigned name of the model deployment within the instance.
    pub deployment_name: String,
    /// `api-version` query parameter value, accepted verbatim.
    pub api_version: String,
}

impl std::fmt::Debug for AzureCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureCredentials")
            .field("api_key", &mask_key(self.api_key.expose_secret()))
            .field("instance_name", &self.instance_name)
            .field("deployment_name", &self.deployment_name)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl AzureCredentials {
    pub fn new(
        api_key: impl Into<String>,
        instance_name: impl Into<String>,
        deployment_name: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            instance_name: instance_name.into(),
            deployment_name: deployment_name.into(),
            api_version: api_version.into(),
        }
    }

    /// Read the four `AZURE_*` environment variables.
    ///
    /// Fails with [`AzureError::Configuration`] naming every variable that is
    /// missing or empty; the key's value never appears in the error or logs.
    pub fn from_env() -> Result<Self, AzureError> {
        match (
            read_env(ENV_API_KEY),
            read_env(ENV_INSTANCE_NAME),
            read_env(ENV_DEPLOYMENT_NAME),
            read_env(ENV_API_VERSION),
        ) {
            (Some(api_key), Some(instance_name), Some(deployment_name), Some(api_version)) => {
                let credentials = Self::new(api_key, instance_name, deployment_name, api_version);
                tracing::debug!(
                    api_key = %mask_key(credentials.api_key.expose_secret()),
                    instance_name = %credentials.instance_name,
                    deployment_name = %credentials.deployment_name,
                    api_version = %credentials.api_version,
                    "loaded Azure OpenAI credentials from environment"
                );
                Ok(credentials)
            }
            (api_key, instance_name, deployment_name, api_version) => {
                let missing: Vec<&str> = [
                    (ENV_API_KEY, api_key.is_none()),
                    (ENV_INSTANCE_NAME, instance_name.is_none()),
                    (ENV_DEPLOYMENT_NAME, deployment_name.is_none()),
                    (ENV_API_VERSION, api_version.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                let joined = missing.join(", ");
                tracing::warn!(missing = %joined, "incomplete Azure OpenAI credentials in environment");
                Err(AzureError::configuration(format!(
                    "Incomplete Azure OpenAI credentials: missing or empty {joined}"
                )))
            }
        }
    }

    pub fn validate(&self) -> Result<(), AzureError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(AzureError::configuration(
                "Azure OpenAI api_key cannot be empty",
            ));
        }
        if self.instance_name.trim().is_empty() {
            return Err(AzureError::configuration(
                "Azure OpenAI instance_name cannot be empty",
            ));
        }
        if self.deployment_name.trim().is_empty() {
            return Err(AzureError::configuration(
                "Azure OpenAI deployment_name cannot be empty",
            ));
        }
        if self.api_version.trim().is_empty() {
            return Err(AzureError::configuration(
                "Azure OpenAI api_version cannot be empty",
            ));
        }
        Ok(())
    }

    pub(crate) fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// First four characters of the key, remainder replaced.
pub(crate) fn mask_key(key: &str) -> String {
    if key.chars().count() <= 4 {
        "***".to_string()
    } else {
        let prefix: String = key.chars().take(4).collect();
        format!("{prefix}***")
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;

    fn credentials() -> AzureCredentials {
        AzureCredentials::new("sk-secret-value", "foo", "bar", "2023-05-15")
    }

    #[test]
    fn validate_rejects_each_empty_field() {
        assert!(credentials().validate().is_ok());

        let cases = [
            AzureCredentials::new("", "foo", "bar", "2023-05-15"),
            AzureCredentials::new("key", "", "bar", "2023-05-15"),
            AzureCredentials::new("key", "foo", "", "2023-05-15"),
            AzureCredentials::new("key", "foo", "bar", ""),
        ];
        for c in cases {
            let err = c.validate().expect_err("empty field must be rejected");
            assert!(err.is_configuration(), "unexpected error: {err:?}");
        }
    }

    #[test]
    fn debug_output_masks_the_key() {
        let rendered = format!("{:?}", credentials());
        assert!(!rendered.contains("sk-secret-value"));
        assert!(rendered.contains("sk-s***"));
        assert!(rendered.contains("foo"));
    }

    #[test]
    fn mask_key_keeps_only_a_short_prefix() {
        assert_eq!(mask_key("sk-secret-value"), "sk-s***");
        assert_eq!(mask_key("abc"), "***");
        assert_eq!(mask_key(""), "***");
    }

    // Environment is process-global, so every from_env scenario lives in one
    // test function. Save/restore so other tests are unaffected.
    #[test]
    fn from_env_roundtrip_and_missing_variable_handling() {
        const VARS: [&str; 4] = [
            ENV_API_KEY,
            ENV_INSTANCE_NAME,
            ENV_DEPLOYMENT_NAME,
            ENV_API_VERSION,
        ];
        let saved: Vec<Option<String>> = VARS.iter().map(|v| std::env::var(v).ok()).collect();

        let set_all = || unsafe {
            std::env::set_var(ENV_API_KEY, "env-key");
            std::env::set_var(ENV_INSTANCE_NAME, "env-instance");
            std::env::set_var(ENV_DEPLOYMENT_NAME, "env-deployment");
            std::env::set_var(ENV_API_VERSION, "2023-05-15");
        };

        // All four present: the values come back exactly.
        set_all();
        let creds = AzureCredentials::from_env().expect("all variables set");
        assert_eq!(creds.api_key.expose_secret(), "env-key");
        assert_eq!(creds.instance_name, "env-instance");
        assert_eq!(creds.deployment_name, "env-deployment");
        assert_eq!(creds.api_version, "2023-05-15");

        // Any single variable missing fails, naming the variable but not the
        // key's value.
        for var in VARS {
            set_all();
            unsafe { std::env::remove_var(var) };
            let err = AzureCredentials::from_env().expect_err("missing variable must fail");
            assert!(err.is_configuration(), "unexpected error: {err:?}");
            let rendered = err.to_string();
            assert!(rendered.contains(var), "error does not name {var}: {rendered}");
            assert!(!rendered.contains("env-key"));
        }

        // Empty counts as missing.
        set_all();
        unsafe { std::env::set_var(ENV_INSTANCE_NAME, "") };
        let err = AzureCredentials::from_env().expect_err("empty variable must fail");
        assert!(err.to_string().contains(ENV_INSTANCE_NAME));

        for (var, value) in VARS.iter().zip(saved) {
            unsafe {
                match value {
                    Some(v) => std::env::set_var(var, v),
                    None => std::env::remove_var(var),
                }
            }
        }
    }
}
