//! Service-layer collaborators: the operations whose arguments are validated before they run.

pub mod author_service;
pub mod constants;
pub mod dto;

use crate::core::interceptor::Validated;
use crate::domain::descriptor::{OperationDescriptor, ParameterDescriptor};
use crate::domain::model::Value;
use crate::domain::ports::DeclaresConstraints;
use crate::service::dto::{AuthorRequest, AuthorResponse};
use crate::utils::error::Result;

pub use author_service::{AuthorServiceImpl, AUTHOR_SERVICE_IMPL_OPERATIONS};

pub trait AuthorService: Send + Sync {
    fn create(&self, request: &AuthorRequest) -> Result<AuthorResponse>;

    fn read_by_id(&self, id: i64) -> Result<AuthorResponse>;

    fn read_by_news_id(&self, news_id: i64) -> Result<AuthorResponse>;

    fn read_all(&self) -> Result<Vec<AuthorResponse>>;

    fn update(&self, request: &AuthorRequest) -> Result<AuthorResponse>;

    fn delete_by_id(&self, id: i64) -> Result<bool>;
}

/// Operations of the `AuthorService` contract. The contract itself declares no constraints;
/// implementations declare them on their own operations.
pub static AUTHOR_SERVICE_CONTRACT: &[OperationDescriptor] = &[
    OperationDescriptor {
        name: "create",
        parameters: &[ParameterDescriptor {
            name: "request",
            constraints: &[],
        }],
    },
    OperationDescriptor {
        name: "read_by_id",
        parameters: &[ParameterDescriptor {
            name: "id",
            constraints: &[],
        }],
    },
    OperationDescriptor {
        name: "read_by_news_id",
        parameters: &[ParameterDescriptor {
            name: "news_id",
            constraints: &[],
        }],
    },
    OperationDescriptor {
        name: "read_all",
        parameters: &[],
    },
    OperationDescriptor {
        name: "update",
        parameters: &[ParameterDescriptor {
            name: "request",
            constraints: &[],
        }],
    },
    OperationDescriptor {
        name: "delete_by_id",
        parameters: &[ParameterDescriptor {
            name: "id",
            constraints: &[],
        }],
    },
];

impl<S> AuthorService for Validated<S>
where
    S: AuthorService + DeclaresConstraints,
{
    fn create(&self, request: &AuthorRequest) -> Result<AuthorResponse> {
        self.call("create", &[Value::object(request)], |inner| inner.create(request))
    }

    fn read_by_id(&self, id: i64) -> Result<AuthorResponse> {
        self.call("read_by_id", &[Value::Int(id)], |inner| inner.read_by_id(id))
    }

    fn read_by_news_id(&self, news_id: i64) -> Result<AuthorResponse> {
        self.call("read_by_news_id", &[Value::Int(news_id)], |inner| {
            inner.read_by_news_id(news_id)
        })
    }

    fn read_all(&self) -> Result<Vec<AuthorResponse>> {
        self.call("read_all", &[], |inner| inner.read_all())
    }

    fn update(&self, request: &AuthorRequest) -> Result<AuthorResponse> {
        self.call("update", &[Value::object(request)], |inner| inner.update(request))
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        self.call("delete_by_id", &[Value::Int(id)], |inner| inner.delete_by_id(id))
    }
}
