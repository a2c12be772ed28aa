use crate::model::types::*;

pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Fetches every user from [`USERS_ENDPOINT`], one request per call.
///
/// There is no retry and no fallback, any failure goes straight back to the caller.
pub async fn fetch_users(reqwest_client: &reqwest::Client) -> Result<UserCollection, Error> {
    fetch_users_from(reqwest_client, USERS_ENDPOINT).await
}

pub async fn fetch_users_from(
    reqwest_client: &reqwest::Client,
    url: &str,
) -> Result<UserCollection, Error> {
    tracing::debug!(url, "fetching users");

    // the status is not checked, an error page just fails to parse
    let body = match reqwest_client.get(url).send().await {
        Ok(res) => res.text().await,
        Err(e) => Err(e),
    };
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(url, error = %e, "users request failed");
            return Err(Error::Fetch(format!("error while requesting {}: {}", url, e)));
        }
    };

    let users = parse_users(&body).inspect_err(|e| {
        tracing::warn!(url, error = %e, "users response was not a list of users");
    })?;
    tracing::debug!(count = users.len(), "fetched users");
    Ok(users)
}

pub fn parse_users(body: &str) -> Result<UserCollection, Error> {
    Ok(serde_json::from_str(body)?)
}
