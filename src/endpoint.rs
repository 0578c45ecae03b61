//! Endpoint URL construction for Azure OpenAI deployment-based routing.

use crate::config::AzureCredentials;
use crate::error::AzureError;

/// Remove every literal `.` from a model identifier.
///
/// Azure deployment names derived from model ids like `gpt-3.5-turbo` drop
/// the version dots (`gpt-35-turbo`); dotted names are not usable as URL path
/// segments. No other transformation is applied.
pub fn sanitize_model_name(name: &str) -> String {
    name.replace('.', "")
}

/// `https://{instance}.openai.azure.com/openai/deployments/{deployment}`.
pub fn azure_endpoint(instance_name: &str, deployment_name: &str) -> Result<String, AzureError> {
    let instance = instance_name.trim();
    let deployment = deployment_name.trim();
    if instance.is_empty() || deployment.is_empty() {
        return Err(AzureError::configuration(
            "Azure OpenAI endpoint requires both an instance name and a deployment name",
        ));
    }
    Ok(format!(
        "https://{instance}.openai.azure.com/openai/deployments/{deployment}"
    ))
}

/// Full chat-completions URL for the given credentials.
///
/// The `api_version` is appended verbatim; only the instance and deployment
/// names are validated (via [`azure_endpoint`]).
pub fn chat_completion_endpoint(credentials: &AzureCredentials) -> Result<String, AzureError> {
    let base = azure_endpoint(&credentials.instance_name, &credentials.deployment_name)?;
    let url = format!(
        "{base}/chat/completions?api-version={}",
        credentials.api_version
    );
    tracing::debug!(%url, "built Azure chat-completions endpoint");
    Ok(url)
}
