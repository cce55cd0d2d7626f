//! Single-document store
//!
//! Owns the in-memory [`Document`] and its mirror in [`PortalStorage`].
//! Mutators touch memory only; callers persist with [`Store::save`] before
//! their handler returns, which keeps memory and disk identical between
//! events. Business-rule violations come back as [`AppError`] values and
//! leave the document untouched.

use crate::auth::Session;
use crate::storage::{DOCUMENT_KEY, PortalStorage, StorageResult};
use chrono::Local;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Account, AccountCreate, AccountUpdate, Department, DepartmentCreate, Document, Employee,
    EmployeeUpsert, EquipmentRequest, RequestCreate, RequestStatus,
};

/// Minimum accepted password length (admin reset)
pub const MIN_PASSWORD_LEN: usize = 6;

/// The store: one in-memory document plus its persistent mirror
pub struct Store {
    storage: PortalStorage,
    document: Document,
}

impl Store {
    /// Load the document from storage.
    ///
    /// An absent or unparsable blob is treated as "no data": the fixed
    /// seed document replaces it and is persisted immediately, so the
    /// document is always well-formed after this call. Parse failures are
    /// logged, never surfaced.
    pub fn load(storage: PortalStorage) -> StorageResult<Self> {
        let document = match storage.get(DOCUMENT_KEY)? {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(document) => document,
                Err(err) => {
                    tracing::warn!(error = %err, "Stored document unparsable, reseeding");
                    Self::seed(&storage)?
                }
            },
            None => Self::seed(&storage)?,
        };

        Ok(Self { storage, document })
    }

    fn seed(storage: &PortalStorage) -> StorageResult<Document> {
        let document = seed_document();
        storage.put(DOCUMENT_KEY, &serde_json::to_vec(&document)?)?;
        tracing::info!("Seeded fresh portal document");
        Ok(document)
    }

    /// Serialize the whole document and overwrite the persisted blob.
    ///
    /// A storage failure does not roll back the in-memory mutation; the
    /// document stays valid and a later `save` may still succeed.
    pub fn save(&self) -> StorageResult<()> {
        self.storage
            .put(DOCUMENT_KEY, &serde_json::to_vec(&self.document)?)
    }

    /// Read-only view of the document
    pub fn document(&self) -> &Document {
        &self.document
    }

    // ========== Accounts ==========

    /// Find an account by email (case-sensitive exact match)
    pub fn find_account(&self, email: &str) -> Option<&Account> {
        self.document.accounts.iter().find(|a| a.email == email)
    }

    fn find_account_mut(&mut self, email: &str) -> Option<&mut Account> {
        self.document.accounts.iter_mut().find(|a| a.email == email)
    }

    pub fn list_accounts(&self) -> &[Account] {
        &self.document.accounts
    }

    /// Create an account; the email must not be taken
    pub fn create_account(&mut self, payload: AccountCreate) -> AppResult<()> {
        if payload.password.is_empty() {
            return Err(AppError::new(ErrorCode::PasswordRequired));
        }
        if self.find_account(&payload.email).is_some() {
            return Err(AppError::new(ErrorCode::AccountExists));
        }

        tracing::debug!(email = %payload.email, "Account created");
        self.document.accounts.push(Account {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            password: payload.password,
            role: payload.role,
            verified: payload.verified,
        });
        Ok(())
    }

    /// Update the account identified by `email`.
    ///
    /// Changing the email re-checks uniqueness against every other
    /// account. A `None` or empty password keeps the current one.
    pub fn update_account(&mut self, email: &str, update: AccountUpdate) -> AppResult<()> {
        if let Some(new_email) = update.email.as_deref()
            && new_email != email
            && self.find_account(new_email).is_some()
        {
            return Err(AppError::with_message(
                ErrorCode::AccountExists,
                "Email already in use",
            ));
        }

        let Some(account) = self.find_account_mut(email) else {
            return Err(AppError::new(ErrorCode::AccountNotFound));
        };

        if let Some(first_name) = update.first_name {
            account.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            account.last_name = last_name;
        }
        if let Some(new_email) = update.email {
            account.email = new_email;
        }
        if let Some(password) = update.password.filter(|p| !p.is_empty()) {
            account.password = password;
        }
        if let Some(role) = update.role {
            account.role = role;
        }
        if let Some(verified) = update.verified {
            account.verified = verified;
        }

        tracing::debug!(email = %email, "Account updated");
        Ok(())
    }

    /// Delete an account. The account backing the active session cannot
    /// delete itself, unconditionally.
    pub fn delete_account(&mut self, email: &str, session: &Session) -> AppResult<()> {
        if session.email == email {
            return Err(AppError::new(ErrorCode::CannotDeleteSelf));
        }

        let before = self.document.accounts.len();
        self.document.accounts.retain(|a| a.email != email);
        if self.document.accounts.len() == before {
            return Err(AppError::new(ErrorCode::AccountNotFound));
        }

        tracing::debug!(email = %email, "Account deleted");
        Ok(())
    }

    /// Mark the account as verified
    pub fn mark_verified(&mut self, email: &str) -> AppResult<()> {
        let Some(account) = self.find_account_mut(email) else {
            return Err(AppError::new(ErrorCode::AccountNotFound));
        };
        account.verified = true;
        Ok(())
    }

    /// Replace an account's password (admin reset)
    pub fn reset_password(&mut self, email: &str, new_password: &str) -> AppResult<()> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::new(ErrorCode::PasswordTooShort));
        }
        let Some(account) = self.find_account_mut(email) else {
            return Err(AppError::new(ErrorCode::AccountNotFound));
        };
        account.password = new_password.to_string();
        tracing::debug!(email = %email, "Password reset");
        Ok(())
    }

    // ========== Departments ==========

    pub fn list_departments(&self) -> &[Department] {
        &self.document.departments
    }

    /// Create a department; the name must not be taken
    pub fn create_department(&mut self, payload: DepartmentCreate) -> AppResult<()> {
        if self
            .document
            .departments
            .iter()
            .any(|d| d.name == payload.name)
        {
            return Err(AppError::new(ErrorCode::DepartmentExists));
        }

        tracing::debug!(name = %payload.name, "Department created");
        self.document.departments.push(Department {
            name: payload.name,
            description: payload.description,
        });
        Ok(())
    }

    // ========== Employees ==========

    pub fn list_employees(&self) -> &[Employee] {
        &self.document.employees
    }

    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.document.employees.iter().find(|e| e.id == id)
    }

    /// Insert or replace the employee with the payload's id.
    ///
    /// The referenced account must exist; its full name is snapshotted
    /// onto the record. A matching id is replaced in place (by design, not
    /// a conflict); otherwise the record is appended.
    pub fn upsert_employee(&mut self, payload: EmployeeUpsert) -> AppResult<()> {
        let Some(account) = self.find_account(&payload.email) else {
            return Err(AppError::new(ErrorCode::LinkedAccountNotFound));
        };

        let employee = Employee {
            id: payload.id,
            name: account.full_name(),
            email: payload.email,
            position: payload.position,
            dept: payload.dept,
            hire_date: payload.hire_date,
        };

        match self
            .document
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
        {
            Some(existing) => {
                tracing::debug!(id = %employee.id, "Employee replaced");
                *existing = employee;
            }
            None => {
                tracing::debug!(id = %employee.id, "Employee added");
                self.document.employees.push(employee);
            }
        }
        Ok(())
    }

    pub fn delete_employee(&mut self, id: &str) -> AppResult<()> {
        let before = self.document.employees.len();
        self.document.employees.retain(|e| e.id != id);
        if self.document.employees.len() == before {
            return Err(AppError::new(ErrorCode::EmployeeNotFound));
        }

        tracing::debug!(id = %id, "Employee deleted");
        Ok(())
    }

    // ========== Requests ==========

    pub fn list_requests(&self) -> &[EquipmentRequest] {
        &self.document.requests
    }

    /// Requests submitted by the given account
    pub fn requests_for(&self, email: &str) -> Vec<&EquipmentRequest> {
        self.document
            .requests
            .iter()
            .filter(|r| r.employee_email == email)
            .collect()
    }

    /// Append a request for the submitting account.
    ///
    /// Blank-named items are dropped; at least one item must remain.
    /// Status is always `Pending` and the date is stamped here.
    pub fn submit_request(
        &mut self,
        payload: RequestCreate,
        employee_email: &str,
    ) -> AppResult<()> {
        let items: Vec<_> = payload
            .items
            .into_iter()
            .filter(|item| !item.name.is_empty())
            .collect();
        if items.is_empty() {
            return Err(AppError::new(ErrorCode::EmptyRequestItems));
        }

        tracing::debug!(kind = %payload.kind, email = %employee_email, "Request submitted");
        self.document.requests.push(EquipmentRequest {
            kind: payload.kind,
            items,
            status: RequestStatus::Pending,
            date: Local::now().format("%m/%d/%Y").to_string(),
            employee_email: employee_email.to_string(),
        });
        Ok(())
    }
}

/// The fixed seed: one verified admin account and two departments
fn seed_document() -> Document {
    Document {
        accounts: vec![Account {
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            email: "admin@example.com".to_string(),
            password: "Password123!".to_string(),
            role: shared::models::Role::Admin,
            verified: true,
        }],
        departments: vec![
            Department {
                name: "Engineering".to_string(),
                description: "Software team".to_string(),
            },
            Department {
                name: "HR".to_string(),
                description: "Human Resources".to_string(),
            },
        ],
        employees: Vec::new(),
        requests: Vec::new(),
    }
}
