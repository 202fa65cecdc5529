// src/application/commands/account_commands.rs
//
// Session, profile and subscription commands

use crate::application::dto::*;
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::{LocalProfileKind, NewAccount, PaymentMethod, Plan, ProfileUpdate, User};

pub fn whoami(state: &AppState) -> SessionDto {
    SessionDto::from(state.session.as_ref())
}

pub async fn login(state: &AppState, email: &str, password: &str) -> Result<SessionDto, String> {
    state
        .auth_service
        .login(email, password)
        .await
        .to_error_response()?;
    Ok(whoami(state))
}

pub async fn register(state: &AppState, account: NewAccount) -> Result<User, String> {
    state.auth_service.register(account).await.to_error_response()
}

pub async fn logout(state: &AppState) -> Result<SessionDto, String> {
    state.auth_service.logout().await.to_error_response()?;
    Ok(whoami(state))
}

/// Refreshes the stored account, then reports the session
pub async fn reload_session(state: &AppState) -> SessionDto {
    state.auth_service.restore().await;
    whoami(state)
}

pub fn start_local_profile(
    state: &AppState,
    username: &str,
    nom_complet: Option<String>,
    kind: LocalProfileKind,
) -> Result<SessionDto, String> {
    state
        .auth_service
        .start_local_profile(username, nom_complet, kind)
        .to_error_response()?;
    Ok(whoami(state))
}

pub async fn update_profile(state: &AppState, update: ProfileUpdate) -> Result<User, String> {
    state.auth_service.update_profile(update).await.to_error_response()
}

pub fn list_plans(state: &AppState) -> Vec<PlanDto> {
    state
        .subscription_service
        .plans()
        .into_iter()
        .map(PlanDto::from)
        .collect()
}

pub async fn subscribe(
    state: &AppState,
    plan: Plan,
    method: PaymentMethod,
) -> Result<SubscriptionDto, String> {
    let subscription = state
        .subscription_service
        .pay(plan, method)
        .await
        .to_error_response()?;
    Ok(SubscriptionDto::from(subscription))
}

pub fn cancel_subscription(state: &AppState) -> Result<SessionDto, String> {
    state.subscription_service.cancel().to_error_response()?;
    Ok(whoami(state))
}
