use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Authenticated player identity extracted from a Bearer access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentPlayer {
    pub id: Uuid,
    pub login: String,
}

impl FromRequest for CurrentPlayer {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // Extract Authorization header
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .ok_or_else(AppError::unauthorized_missing_bearer)?;

            let auth_value = auth_header
                .to_str()
                .map_err(|_| AppError::unauthorized_missing_bearer())?;

            // Parse "Bearer <token>" format
            let parts: Vec<&str> = auth_value.split_whitespace().collect();
            if parts.len() != 2 || parts[0] != "Bearer" {
                return Err(AppError::unauthorized_missing_bearer());
            }

            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState missing from request"))?;

            // Verify the JWT token
            let claims = verify_access_token(parts[1], &state.security)?;

            // The sub claim carries the player id
            let id =
                Uuid::parse_str(&claims.sub).map_err(|_| AppError::unauthorized_invalid_jwt())?;

            Ok(CurrentPlayer {
                id,
                login: claims.login,
            })
        })
    }
}
