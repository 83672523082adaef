//! `placegrid check`: a single geocode call to confirm the key works.

use placegrid_core::AppConfig;
use placegrid_search::PlacesApi;

use crate::search::places_client;

pub(crate) const DEFAULT_CHECK_LOCATION: &str = "Buenos Aires, Argentina";

/// What the health check observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CheckOutcome {
    Ok { resolved: String },
    Upstream { status: String, message: String },
    Unreachable(String),
}

impl CheckOutcome {
    pub(crate) fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    pub(crate) fn summary(&self) -> String {
        match self {
            Self::Ok { resolved } => format!("OK: API key works (resolved \"{resolved}\")"),
            Self::Upstream { status, message } => format!("FAILED: {status}: {message}"),
            Self::Unreachable(reason) => format!("FAILED: request error: {reason}"),
        }
    }
}

pub(crate) async fn check_api<A>(api: &A, location: &str) -> CheckOutcome
where
    A: PlacesApi + ?Sized,
{
    let response = match api.geocode(location).await {
        Ok(response) => response,
        Err(err) => return CheckOutcome::Unreachable(err.to_string()),
    };

    if !response.status.is_ok() {
        return CheckOutcome::Upstream {
            status: response.status.to_string(),
            message: response
                .error_message
                .unwrap_or_else(|| "no error message".to_string()),
        };
    }

    let resolved = response
        .results
        .into_iter()
        .next()
        .and_then(|r| r.formatted_address)
        .unwrap_or_else(|| location.to_string());
    CheckOutcome::Ok { resolved }
}

/// Runs the health check and fails the process when it does not pass.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the check fails.
pub(crate) async fn run_check(config: &AppConfig, location: &str) -> anyhow::Result<()> {
    let client = places_client(config)?;

    let outcome = check_api(&client, location).await;
    println!("{}", outcome.summary());

    if outcome.is_ok() {
        Ok(())
    } else {
        tracing::warn!(location, outcome = ?outcome, "API health check failed");
        anyhow::bail!("API health check failed")
    }
}
