use crate::{
    auth::claims::{Claims, Role},
    errors::{AppError, AppResult},
};

/// Content authors and admins may see canonical answers outside a session.
pub fn require_author(claims: &Claims) -> AppResult<()> {
    if claims.role != Role::Author && claims.role != Role::Admin {
        return Err(AppError::Unauthenticated(
            "Only content authors can view answer keys".to_string(),
        ));
    }
    Ok(())
}
