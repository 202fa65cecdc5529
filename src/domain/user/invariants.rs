use super::entity::{LocalProfile, NewAccount, User};
use crate::domain::{DomainError, DomainResult};

const PASSWORD_MIN: usize = 6;
const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 30;

pub fn validate_user(user: &User) -> DomainResult<()> {
    validate_email(&user.email)?;
    validate_username(&user.username)
}

pub fn validate_new_account(account: &NewAccount) -> DomainResult<()> {
    validate_email(&account.email)?;
    validate_username(&account.username)?;
    if account.password.chars().count() < PASSWORD_MIN {
        return Err(DomainError::InvariantViolation(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN
        )));
    }
    Ok(())
}

pub fn validate_local_profile(profile: &LocalProfile) -> DomainResult<()> {
    validate_username(&profile.username)?;
    if let Some(email) = &profile.email {
        validate_email(email)?;
    }
    Ok(())
}

/// Loose shape check: one `@`, non-empty local part, dotted domain
fn validate_email(email: &str) -> DomainResult<()> {
    let valid = match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(DomainError::InvariantViolation(format!(
            "Invalid email address {:?}",
            email
        )));
    }
    Ok(())
}

fn validate_username(username: &str) -> DomainResult<()> {
    let len = username.trim().chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(DomainError::InvariantViolation(format!(
            "Username must be between {} and {} characters",
            USERNAME_MIN, USERNAME_MAX
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::LocalProfileKind;

    fn account(email: &str, password: &str) -> NewAccount {
        NewAccount {
            email: email.to_string(),
            username: "awa_k".to_string(),
            password: password.to_string(),
            nom_complet: None,
        }
    }

    #[test]
    fn test_valid_account() {
        assert!(validate_new_account(&account("awa@ivoculture.ci", "secret1")).is_ok());
    }

    #[test]
    fn test_short_password_fails() {
        assert!(validate_new_account(&account("awa@ivoculture.ci", "12345")).is_err());
    }

    #[test]
    fn test_malformed_email_fails() {
        assert!(validate_new_account(&account("awa.ivoculture.ci", "secret1")).is_err());
        assert!(validate_new_account(&account("awa@ci", "secret1")).is_err());
        assert!(validate_new_account(&account("a@b@c.ci", "secret1")).is_err());
    }

    #[test]
    fn test_local_profile_needs_username() {
        let profile = LocalProfile::new("ab".to_string(), LocalProfileKind::Touriste);
        assert!(validate_local_profile(&profile).is_err());
    }
}
