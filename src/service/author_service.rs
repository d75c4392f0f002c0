use crate::domain::descriptor::{OperationDescriptor, ParameterDescriptor};
use crate::domain::model::Constraint;
use crate::domain::ports::DeclaresConstraints;
use crate::service::constants::{AUTHOR_ENTITY_NAME, ID_MIN_VALUE, NEWS_ENTITY_NAME};
use crate::service::dto::{AuthorRequest, AuthorResponse};
use crate::service::{AuthorService, AUTHOR_SERVICE_CONTRACT};
use crate::utils::error::{ErrorCode, Result, ServiceError};
use chrono::{Local, NaiveDateTime};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone)]
struct Author {
    id: i64,
    name: String,
    create_date: NaiveDateTime,
    last_update_date: NaiveDateTime,
}

impl Author {
    fn to_response(&self) -> AuthorResponse {
        AuthorResponse {
            id: self.id,
            name: self.name.clone(),
            create_date: self.create_date,
            last_update_date: self.last_update_date,
        }
    }
}

#[derive(Debug, Default)]
struct AuthorStore {
    next_id: i64,
    authors: BTreeMap<i64, Author>,
    /// news id -> author id
    news_authors: BTreeMap<i64, i64>,
}

impl AuthorStore {
    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.authors
            .values()
            .any(|author| author.name == name && Some(author.id) != except)
    }
}

/// In-memory author service. Arguments are expected to be validated by the caller's
/// `Validated` wrapper; this type performs no constraint checks of its own.
#[derive(Debug, Default)]
pub struct AuthorServiceImpl {
    store: RwLock<AuthorStore>,
}

impl AuthorServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_store(&self) -> Result<RwLockReadGuard<'_, AuthorStore>> {
        self.store.read().map_err(|_| ServiceError::Internal {
            message: "author store lock poisoned".to_string(),
        })
    }

    fn write_store(&self) -> Result<RwLockWriteGuard<'_, AuthorStore>> {
        self.store.write().map_err(|_| ServiceError::Internal {
            message: "author store lock poisoned".to_string(),
        })
    }

    /// Records `author_id` as the author of the news item `news_id`.
    pub fn attach_news(&self, news_id: i64, author_id: i64) -> Result<()> {
        let mut store = self.write_store()?;
        if !store.authors.contains_key(&author_id) {
            return Err(ServiceError::not_found(AUTHOR_ENTITY_NAME, author_id));
        }
        store.news_authors.insert(news_id, author_id);
        Ok(())
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn request_name(request: &AuthorRequest) -> &str {
    request.name.as_deref().unwrap_or_default()
}

impl AuthorService for AuthorServiceImpl {
    fn create(&self, request: &AuthorRequest) -> Result<AuthorResponse> {
        let mut store = self.write_store()?;
        let name = request_name(request);
        if store.name_taken(name, None) {
            return Err(ServiceError::conflict(ErrorCode::AuthorConstraintViolation));
        }

        store.next_id += 1;
        let timestamp = now();
        let author = Author {
            id: store.next_id,
            name: name.to_string(),
            create_date: timestamp,
            last_update_date: timestamp,
        };
        let response = author.to_response();
        store.authors.insert(author.id, author);

        tracing::debug!(id = response.id, "author created");
        Ok(response)
    }

    fn read_by_id(&self, id: i64) -> Result<AuthorResponse> {
        self.read_store()?
            .authors
            .get(&id)
            .map(Author::to_response)
            .ok_or_else(|| ServiceError::not_found(AUTHOR_ENTITY_NAME, id))
    }

    fn read_by_news_id(&self, news_id: i64) -> Result<AuthorResponse> {
        let store = self.read_store()?;
        let Some(author_id) = store.news_authors.get(&news_id) else {
            return Err(ServiceError::not_found(NEWS_ENTITY_NAME, news_id));
        };
        store
            .authors
            .get(author_id)
            .map(Author::to_response)
            .ok_or_else(|| ServiceError::not_found(AUTHOR_ENTITY_NAME, news_id))
    }

    fn read_all(&self) -> Result<Vec<AuthorResponse>> {
        Ok(self
            .read_store()?
            .authors
            .values()
            .map(Author::to_response)
            .collect())
    }

    fn update(&self, request: &AuthorRequest) -> Result<AuthorResponse> {
        let Some(id) = request.id else {
            return Err(ServiceError::not_found(AUTHOR_ENTITY_NAME, "null"));
        };

        let mut store = self.write_store()?;
        let name = request_name(request);
        if !store.authors.contains_key(&id) {
            return Err(ServiceError::not_found(AUTHOR_ENTITY_NAME, id));
        }
        if store.name_taken(name, Some(id)) {
            return Err(ServiceError::conflict(ErrorCode::AuthorConstraintViolation));
        }

        let author = store
            .authors
            .get_mut(&id)
            .ok_or_else(|| ServiceError::not_found(AUTHOR_ENTITY_NAME, id))?;
        author.name = name.to_string();
        author.last_update_date = now();
        Ok(author.to_response())
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut store = self.write_store()?;
        if store.authors.remove(&id).is_none() {
            return Err(ServiceError::not_found(AUTHOR_ENTITY_NAME, id));
        }
        store.news_authors.retain(|_, author_id| *author_id != id);
        Ok(true)
    }
}

const REQUEST: &[ParameterDescriptor] = &[ParameterDescriptor {
    name: "request",
    constraints: &[Constraint::NotNull, Constraint::Valid],
}];

const ID: &[ParameterDescriptor] = &[ParameterDescriptor {
    name: "id",
    constraints: &[Constraint::NotNull, Constraint::Min(ID_MIN_VALUE)],
}];

/// Constraints `AuthorServiceImpl` declares on its operations.
pub static AUTHOR_SERVICE_IMPL_OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        name: "create",
        parameters: REQUEST,
    },
    OperationDescriptor {
        name: "read_by_id",
        parameters: ID,
    },
    OperationDescriptor {
        name: "read_by_news_id",
        parameters: &[ParameterDescriptor {
            name: "news_id",
            constraints: &[Constraint::NotNull, Constraint::Min(ID_MIN_VALUE)],
        }],
    },
    OperationDescriptor {
        name: "update",
        parameters: REQUEST,
    },
    OperationDescriptor {
        name: "delete_by_id",
        parameters: ID,
    },
];

impl DeclaresConstraints for AuthorServiceImpl {
    fn contract_operations() -> &'static [OperationDescriptor] {
        AUTHOR_SERVICE_CONTRACT
    }

    fn declared_operations() -> &'static [OperationDescriptor] {
        AUTHOR_SERVICE_IMPL_OPERATIONS
    }

    fn target_name() -> &'static str {
        "AuthorServiceImpl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_read_back() {
        let service = AuthorServiceImpl::new();
        let created = service.create(&AuthorRequest::new(None, "Alice")).unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(service.read_by_id(1).unwrap().name, "Alice");
        assert_eq!(service.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_name_is_a_conflict() {
        let service = AuthorServiceImpl::new();
        service.create(&AuthorRequest::new(None, "Alice")).unwrap();

        let err = service.create(&AuthorRequest::new(None, "Alice")).unwrap_err();
        assert_eq!(err.code(), Some("001001"));
    }

    #[test]
    fn test_update_and_delete_unknown_author() {
        let service = AuthorServiceImpl::new();
        let err = service.update(&AuthorRequest::new(Some(9), "Bob")).unwrap_err();
        assert_eq!(err.to_string(), "Can not find author by id: 9");

        assert!(service.delete_by_id(9).is_err());
    }

    #[test]
    fn test_update_renames_existing_author() {
        let service = AuthorServiceImpl::new();
        let created = service.create(&AuthorRequest::new(None, "Alice")).unwrap();

        let updated = service
            .update(&AuthorRequest::new(Some(created.id), "Alicia"))
            .unwrap();
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.create_date, created.create_date);
        assert!(service.delete_by_id(created.id).unwrap());
    }

    #[test]
    fn test_read_by_news_id() {
        let service = AuthorServiceImpl::new();
        let created = service.create(&AuthorRequest::new(None, "Alice")).unwrap();
        service.attach_news(10, created.id).unwrap();

        assert_eq!(service.read_by_news_id(10).unwrap().name, "Alice");

        let err = service.read_by_news_id(11).unwrap_err();
        assert_eq!(err.to_string(), "Can not find news by id: 11");
        assert!(service.attach_news(12, 99).is_err());

        service.delete_by_id(created.id).unwrap();
        assert!(service.read_by_news_id(10).is_err());
    }

    #[test]
    fn test_constraints_are_declared_by_the_implementation() {
        let contract = AuthorServiceImpl::contract_operations();
        assert!(contract.iter().all(|operation| !operation.requires_validation()));

        let declared = AuthorServiceImpl::declared_operations();
        for name in ["create", "read_by_id", "read_by_news_id", "update", "delete_by_id"] {
            assert!(
                declared
                    .iter()
                    .any(|operation| operation.name == name && operation.requires_validation()),
                "{} is not constrained",
                name
            );
        }
    }
}
