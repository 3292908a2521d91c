/// Environment variable holding an optional GitHub token
pub const ENV_TOKEN_VAR: &str = "GITHUBREPORT_TOKEN";

/// Check for a GitHub token in the GITHUBREPORT_TOKEN environment variable.
/// Returns Some(token) if the env var is set and non-empty, None otherwise.
pub fn get_token_from_env() -> Option<String> {
    normalize_token(std::env::var(ENV_TOKEN_VAR).ok())
}

fn normalize_token(raw: Option<String>) -> Option<String> {
    let trimmed = raw?.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
