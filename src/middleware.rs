//! Actix shell around the navigation guard.
//!
//! [`RedirectUnauthorized`] consults the session-backed [`AuthStore`] and
//! answers `303 See Other` towards the login page before the wrapped
//! service ever runs. The decision is taken fresh on every request.

use std::future::{Ready, ready};

use actix_session::{Session, SessionExt};
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpResponse};
use futures::future::LocalBoxFuture;

use crate::domain::auth::{
    ACCESS_TOKEN_KEY, AuthStore, NavigationDecision, RouteDescriptor, evaluate,
};

/// [`AuthStore`] reading token presence from the cookie session.
pub struct SessionAuthStore {
    session: Session,
}

impl SessionAuthStore {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl AuthStore for SessionAuthStore {
    fn has_token(&self) -> bool {
        matches!(self.session.get::<String>(ACCESS_TOKEN_KEY), Ok(Some(_)))
    }
}

/// Middleware sending visitors without an access token to the login page.
pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware { service }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
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
        let store = SessionAuthStore::new(req.get_session());
        let route = RouteDescriptor::new(req.path());

        match evaluate(store.has_token(), route) {
            NavigationDecision::Redirect { target } => {
                let response = HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, target))
                    .finish()
                    .map_into_right_body();
                Box::pin(ready(Ok(req.into_response(response))))
            }
            NavigationDecision::Render(_) => {
                let fut = self.service.call(req);
                Box::pin(async move {
                    let response = fut.await?;
                    Ok(response.map_into_left_body())
                })
            }
        }
    }
}
