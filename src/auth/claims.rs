use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identity asserted by the external identity provider. The engine treats
/// token verification as an opaque capability: a valid signature maps the
/// bearer credential to a learner id, nothing else is inferred.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // learner id
    pub email: String,
    pub role: Role,
    pub exp: usize, // expiration (UTC timestamp)
    pub iat: usize, // issued at (UTC timestamp)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Learner,
    Author,
    Admin,
}

impl Claims {
    pub fn new(learner_id: &str, email: &str, role: Role, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: learner_id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}
