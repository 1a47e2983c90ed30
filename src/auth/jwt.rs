use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::{Claims, Role},
    errors::{AppError, AppResult},
};

/// Signature-verified token validation. Tokens are never decoded by hand;
/// an invalid or expired signature is an authentication failure.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            expiration_hours,
        }
    }

    pub fn create_token(&self, learner_id: &str, email: &str, role: Role) -> AppResult<String> {
        let claims = Claims::new(learner_id, email, role, self.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthenticated("Token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::Unauthenticated("Token signature is invalid".to_string())
                }
                _ => AppError::Unauthenticated("Invalid token".to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_jwt_create_and_validate() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 1);

        let token = jwt_service
            .create_token("learner-1", "jo@example.com", Role::Learner)
            .unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "learner-1");
        assert_eq!(claims.email, "jo@example.com");
    }

    #[test]
    fn test_jwt_invalid_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 1);

        let result = jwt_service.validate_token("invalid.token.here");
        match result {
            Err(AppError::Unauthenticated(_)) => {}
            other => panic!("Expected Unauthenticated error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_jwt_wrong_secret_is_rejected() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, 1);
        let other_service =
            JwtService::new(&SecretString::from("another_secret_key".to_string()), 1);

        let token = jwt_service
            .create_token("learner-1", "jo@example.com", Role::Learner)
            .unwrap();

        assert!(other_service.validate_token(&token).is_err());
    }
}
