//! Panic 복구 미들웨어
//!
//! 핸들러 실행 중 발생한 panic을 잡아 로그로 남기고 `AppError::InternalError`로 바꿉니다.
//! 에러는 `ResponseError` 구현을 통해 `500 Internal Server Error` JSON 응답이 됩니다.
//! 워커 스레드와 다른 요청은 영향을 받지 않습니다.
//!
//! 라우터가 요청의 경로 정보를 수정하므로 내부 서비스 호출 전에 `HttpRequest`를 복제하지 않습니다.
//! 로그에 필요한 메서드와 경로만 미리 복사해 둡니다.
//!
//! 가장 바깥쪽 미들웨어로 등록해야 합니다 (`App::wrap`의 마지막 호출).

use std::any::Any;
use std::future::{ready, Ready};
use std::panic::AssertUnwindSafe;
use std::rc::Rc;

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::{future::LocalBoxFuture, FutureExt};

use crate::core::errors::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct PanicRecovery;

impl<S, B> Transform<S, ServiceRequest> for PanicRecovery
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = PanicRecoveryService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(PanicRecoveryService {
            service: Rc::new(service),
        }))
    }
}

pub struct PanicRecoveryService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for PanicRecoveryService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let method = req.method().clone();
        let path = req.path().to_owned();

        Box::pin(async move {
            let outcome = AssertUnwindSafe(async move { service.call(req).await })
                .catch_unwind()
                .await;

            outcome.unwrap_or_else(|panic| {
                log::error!(
                    "요청 처리 중 panic 발생: {} {} - {}",
                    method,
                    path,
                    panic_message(panic.as_ref())
                );

                Err(AppError::InternalError("요청을 처리하는 중 예기치 않은 오류가 발생했습니다".to_string()).into())
            })
        })
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
