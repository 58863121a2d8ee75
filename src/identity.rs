use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::models::error::APIError;

/// Account record as returned by the hosted identity service. Credentials
/// live over there; this backend only keeps the mirrored profile row.
#[derive(Debug, Deserialize)]
pub struct RemoteAccount {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ChangePasswordBody<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct ChangeEmailBody<'a> {
    new_email: &'a str,
}

#[derive(Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

pub async fn sign_in(
    base_url: &str,
    email: &str,
    password: &str,
) -> Result<RemoteAccount, APIError> {
    let url = format!("{}/accounts/sign-in", base_url);
    let response = reqwest::Client::new()
        .post(&url)
        .json(&SignInBody { email, password })
        .send()
        .await?;

    if response.status() == StatusCode::UNAUTHORIZED {
        return Err(APIError::Unauthorized);
    }

    let response = error_for_status(response).await?;
    let account = response.json::<RemoteAccount>().await?;

    Ok(account)
}

pub async fn change_password(
    base_url: &str,
    account_id: &Uuid,
    current_password: &str,
    new_password: &str,
) -> Result<(), APIError> {
    let url = format!("{}/accounts/{}/password", base_url, account_id);
    let response = reqwest::Client::new()
        .patch(&url)
        .json(&ChangePasswordBody {
            current_password,
            new_password,
        })
        .send()
        .await?;

    if response.status() == StatusCode::UNAUTHORIZED {
        return Err(APIError::Unauthorized);
    }

    let _ = error_for_status(response).await?;

    Ok(())
}

pub async fn change_email(
    base_url: &str,
    account_id: &Uuid,
    new_email: &str,
) -> Result<(), APIError> {
    let url = format!("{}/accounts/{}/email", base_url, account_id);
    let response = reqwest::Client::new()
        .patch(&url)
        .json(&ChangeEmailBody { new_email })
        .send()
        .await?;

    let _ = error_for_status(response).await?;

    Ok(())
}

async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, APIError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let message = response
        .json::<UpstreamErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| status.to_string());

    Err(APIError::Upstream {
        description: message,
    })
}
