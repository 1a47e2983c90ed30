pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod utils;

pub use claims::{Claims, Role};
pub use jwt::JwtService;
pub use middleware::{AuthMiddleware, AuthenticatedLearner};
pub use utils::require_author;
