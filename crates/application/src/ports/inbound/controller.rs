//! Request handler port, consumed by the transport layer.

use async_trait::async_trait;

use crate::http::{HttpRequest, HttpResponse};

/// Inbound port turning a request into a response envelope.
///
/// Total: every outcome, failures included, is a response.
#[async_trait]
pub trait Controller: Send + Sync {
    type Body: Send;
    type Resource: Send;

    async fn handle(
        &self,
        request: HttpRequest<Self::Body>,
    ) -> HttpResponse<Self::Resource>;
}
