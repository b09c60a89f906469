//! Hand-written collaborator doubles shared by the unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fake::faker::internet::en::{Password, SafeEmail};
use fake::faker::name::en::Name;
use fake::Fake;

use crate::core::decorators::{LogSink, LogSinkError};
use crate::features::signup::error::{HashingError, StorageError};
use crate::features::signup::models::{Account, AddAccountModel, RegistrationRequest};
use crate::features::signup::ports::{AccountStore, CredentialHasher, EmailSyntaxChecker};
use crate::shared::envelope::{Controller, ResponseEnvelope};

/// Valid request with faker data and matching password confirmation
pub fn fake_registration_request() -> RegistrationRequest {
    let password: String = Password(8..16).fake();
    RegistrationRequest {
        name: Name().fake(),
        email: SafeEmail().fake(),
        password: password.clone(),
        password_confirmation: password,
    }
}

pub fn fake_account() -> Account {
    Account {
        id: uuid::Uuid::new_v4().to_string(),
        name: Name().fake(),
        email: SafeEmail().fake(),
        password: "hashed_password".to_string(),
    }
}

/// Hasher that returns a fixed digest, or fails / panics when asked to
#[derive(Clone)]
pub struct StubHasher {
    digest: String,
    behaviour: StubBehaviour,
    pub calls: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StubBehaviour {
    Succeed,
    Fail,
    Panic,
}

impl StubHasher {
    pub fn returning(digest: &str) -> Self {
        Self {
            digest: digest.to_string(),
            behaviour: StubBehaviour::Succeed,
            calls: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            behaviour: StubBehaviour::Fail,
            ..Self::returning("")
        }
    }

    pub fn panicking() -> Self {
        Self {
            behaviour: StubBehaviour::Panic,
            ..Self::returning("")
        }
    }
}

#[async_trait]
impl CredentialHasher for StubHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        self.calls.lock().unwrap().push(plaintext.to_string());
        match self.behaviour {
            StubBehaviour::Succeed => Ok(self.digest.clone()),
            StubBehaviour::Fail => Err(HashingError("any_stack".to_string())),
            StubBehaviour::Panic => panic!("hasher exploded"),
        }
    }
}

/// Store that assigns a fixed id and records every insert
#[derive(Clone)]
pub struct StubAccountStore {
    id: String,
    fail: bool,
    pub added: Arc<Mutex<Vec<AddAccountModel>>>,
}

impl StubAccountStore {
    pub fn assigning(id: &str) -> Self {
        Self {
            id: id.to_string(),
            fail: false,
            added: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::assigning("")
        }
    }
}

#[async_trait]
impl AccountStore for StubAccountStore {
    async fn add(&self, data: AddAccountModel) -> Result<Account, StorageError> {
        self.added.lock().unwrap().push(data.clone());
        if self.fail {
            return Err(StorageError(
                "duplicate key value violates unique constraint".to_string(),
            ));
        }
        Ok(Account {
            id: self.id.clone(),
            name: data.name,
            email: data.email,
            password: data.password,
        })
    }
}

#[derive(Clone)]
pub struct StubEmailChecker {
    valid: bool,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StubEmailChecker {
    pub fn accepting() -> Self {
        Self {
            valid: true,
            calls: Arc::default(),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            valid: false,
            calls: Arc::default(),
        }
    }
}

impl EmailSyntaxChecker for StubEmailChecker {
    fn is_valid(&self, value: &str) -> bool {
        self.calls.lock().unwrap().push(value.to_string());
        self.valid
    }
}

#[derive(Clone, Default)]
pub struct StubLogSink {
    fail: bool,
    panic: bool,
    pub logged: Arc<Mutex<Vec<String>>>,
}

impl StubLogSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn panicking() -> Self {
        Self {
            panic: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl LogSink for StubLogSink {
    async fn log(&self, detail: &str) -> Result<(), LogSinkError> {
        self.logged.lock().unwrap().push(detail.to_string());
        if self.panic {
            panic!("sink exploded");
        }
        if self.fail {
            return Err(LogSinkError("log store unavailable".to_string()));
        }
        Ok(())
    }
}

/// Controller answering every request with the same envelope
#[derive(Clone)]
pub struct StubController {
    response: ResponseEnvelope<Account>,
    pub requests: Arc<Mutex<Vec<RegistrationRequest>>>,
}

impl StubController {
    pub fn responding(response: ResponseEnvelope<Account>) -> Self {
        Self {
            response,
            requests: Arc::default(),
        }
    }
}

#[async_trait]
impl Controller for StubController {
    type Request = RegistrationRequest;
    type Body = Account;

    async fn handle(&self, request: RegistrationRequest) -> ResponseEnvelope<Account> {
        self.requests.lock().unwrap().push(request);
        self.response.clone()
    }
}
