//! HTTP 메서드 필터 미들웨어
//!
//! 리소스마다 허용 메서드를 정하고, 그 외 메서드는 핸들러에 도달하기 전에
//! `405 Method Not Allowed`와 `{"error": "Invalid Method"}`로 응답합니다.
//! 응답에는 허용 메서드 목록이 `Allow` 헤더로 포함됩니다.
//!
//! ```rust,ignore
//! web::resource("/api/create-user")
//!     .wrap(MethodFilter::new(&[Method::POST]))
//!     .route(web::route().to(users::create_user))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, Method},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

pub struct MethodFilter {
    allowed: Rc<[Method]>,
}

impl MethodFilter {
    pub fn new(allowed: &[Method]) -> Self {
        Self {
            allowed: allowed.into(),
        }
    }

    pub fn only(method: Method) -> Self {
        Self::new(&[method])
    }
}

impl<S, B> Transform<S, ServiceRequest> for MethodFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = MethodFilterService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MethodFilterService {
            service: Rc::new(service),
            allowed: Rc::clone(&self.allowed),
        }))
    }
}

pub struct MethodFilterService<S> {
    service: Rc<S>,
    allowed: Rc<[Method]>,
}

impl<S> MethodFilterService<S> {
    fn allow_header(&self) -> String {
        self.allowed
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<S, B> Service<ServiceRequest> for MethodFilterService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !self.allowed.contains(req.method()) {
            log::warn!("허용되지 않은 메서드: {} {}", req.method(), req.path());

            let response = HttpResponse::MethodNotAllowed()
                .insert_header((header::ALLOW, self.allow_header()))
                .json(serde_json::json!({ "error": "Invalid Method" }));
            let (req, _) = req.into_parts();
            let res = ServiceResponse::new(req, response).map_into_right_body();

            return Box::pin(async move { Ok(res) });
        }

        let service = self.service.clone();
        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
