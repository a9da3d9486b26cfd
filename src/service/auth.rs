use std::future::{ready, Ready};

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::{Error, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use crate::errors::ApiError;

/// Verified caller identity, attached to the request by `AuthMiddleware`.
#[derive(Debug, Clone)]
pub struct UserAuthData {
    pub user_id: Uuid,
}

/// Identity from the request extensions. Missing data means the request
/// never passed the middleware.
pub fn authed_user(req: &HttpRequest) -> Result<UserAuthData, ApiError> {
    req.extensions()
        .get::<UserAuthData>()
        .cloned()
        .ok_or(ApiError::Unauthorized)
}

/// Bearer-token guard for the meetings scope. Exchanges the Authorization
/// header for a `UserAuthData` extension or answers 401 without calling the
/// wrapped service.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match jwt::verify_request(&req) {
            Ok(claims) => {
                req.extensions_mut().insert(UserAuthData {
                    user_id: claims.user_id,
                });
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(err) => {
                let (request, _) = req.into_parts();
                let response = err.error_response().map_into_right_body();
                Box::pin(ready(Ok(ServiceResponse::new(request, response))))
            }
        }
    }
}

pub mod jwt {
    use std::env;

    use actix_web::dev::ServiceRequest;
    use chrono::Utc;
    use dotenv::dotenv;
    use jsonwebtoken::{
        decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
    };
    use uuid::Uuid;

    use crate::dto::Claims;
    use crate::errors::ApiError;

    const SECRET_ENV: &str = "JWT_SECRET";

    fn get_secret() -> Result<String, ApiError> {
        dotenv().ok();
        env::var(SECRET_ENV).map_err(|_| {
            log::error!("{} is not set", SECRET_ENV);
            ApiError::Internal
        })
    }

    /// Mints a token for `user_id` expiring `exp` seconds from now.
    pub fn create(user_id: &Uuid, exp: usize) -> Result<String, ApiError> {
        let secret = get_secret()?;
        let exp_timestamp = Utc::now().timestamp() as usize + exp;
        let claims = Claims::new(user_id, exp_timestamp);
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .map_err(|err| {
            log::error!("token encoding failed: {}", err);
            ApiError::Internal
        })
    }

    /// Verified claims, or `Unauthorized` for anything undecodable or
    /// expired. Expiry is enforced by `Validation`.
    pub fn decode_claims(token: &str) -> Result<Claims, ApiError> {
        let secret = get_secret()?;
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| ApiError::Unauthorized)
    }

    pub fn parse_request(req: &ServiceRequest, prefix: &str) -> Result<String, ApiError> {
        if let Some(auth_header) = req.headers().get("Authorization") {
            if let Ok(auth_value) = auth_header.to_str() {
                if let Some(token) = auth_value.strip_prefix(prefix) {
                    return Ok(token.trim().to_string());
                }
            }
        }
        Err(ApiError::Unauthorized)
    }

    pub fn verify_request(req: &ServiceRequest) -> Result<Claims, ApiError> {
        let token = parse_request(req, "Bearer ")?;
        decode_claims(&token)
    }
}
