#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String, Vec};

mod events;
mod storage;

pub use storage::{Certificate, DataKey};


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    Unauthorized = 1,
    CertificateNotFound = 2,
    AlreadyInvalidated = 3,
    AlreadyConfigured = 4,
    NotConfigured = 5,
    NumericalOverflow = 6,
}

impl ContractError {
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::Unauthorized => "Only institution can issue certificates",
            ContractError::CertificateNotFound => "Certificate does not exist",
            ContractError::AlreadyInvalidated => "Certificate is already invalid",
            ContractError::AlreadyConfigured => "Institution has already been set",
            ContractError::NotConfigured => "Institution has not been set",
            ContractError::NumericalOverflow => "Numerical overflow occurred",
        }
    }
}

/// Certificate registry for a single issuing institution.
#[contract]
pub struct CertificateRegistry;

#[contractimpl]
impl CertificateRegistry {
    pub fn version(_env: Env) -> u32 {
        1
    }

    // ========================================================================
    // Institution
    // ========================================================================

    /// Record the institution allowed to issue and invalidate certificates.
    ///
    /// Can only be done once; use `transfer_institution` afterwards.
    pub fn set_institution(env: Env, institution: Address) -> Result<(), ContractError> {
        if storage::get_institution(&env).is_some() {
            return Err(ContractError::AlreadyConfigured);
        }
        institution.require_auth();

        storage::set_institution(&env, &institution);
        events::institution_set(&env, &institution);
        log!(&env, "institution set", institution);

        Ok(())
    }

    /// Hand the issuing role over to another address
    pub fn transfer_institution(
        env: Env,
        caller: Address,
        new_institution: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let institution =
            storage::get_institution(&env).ok_or(ContractError::NotConfigured)?;
        if caller != institution {
            return Err(ContractError::Unauthorized);
        }

        storage::set_institution(&env, &new_institution);
        events::institution_transferred(&env, &institution, &new_institution);
        log!(&env, "institution transferred", institution, new_institution);

        Ok(())
    }

    pub fn get_institution(env: Env) -> Result<Address, ContractError> {
        storage::get_institution(&env).ok_or(ContractError::NotConfigured)
    }

    // ========================================================================
    // Issuance
    // ========================================================================

    /// Issue a new certificate and return its id. Ids start at 1.
    pub fn issue_certificate(
        env: Env,
        caller: Address,
        name: String,
        course: String,
        date_of_issue: String,
        did: String,
    ) -> Result<u64, ContractError> {
        Self::require_institution(&env, &caller)?;

        let id = storage::get_certificate_count(&env)
            .checked_add(1)
            .ok_or(ContractError::NumericalOverflow)?;

        let certificate = Certificate {
            id,
            name,
            course,
            date_of_issue,
            issued_by: caller,
            is_valid: true,
            did,
        };

        storage::set_certificate(&env, &certificate);
        storage::set_certificate_count(&env, id);
        events::certificate_issued(&env, &certificate);
        log!(&env, "certificate issued", id);

        Ok(id)
    }

    /// Mark a certificate invalid and keep a snapshot of it in the invalid list.
    pub fn invalidate_certificate(env: Env, caller: Address, id: u64) -> Result<(), ContractError> {
        Self::require_institution(&env, &caller)?;

        let mut certificate =
            storage::get_certificate(&env, id).ok_or(ContractError::CertificateNotFound)?;
        if !certificate.is_valid {
            return Err(ContractError::AlreadyInvalidated);
        }

        certificate.is_valid = false;
        storage::set_certificate(&env, &certificate);
        let index = storage::push_invalid_certificate(&env, &certificate)?;
        events::certificate_invalidated(&env, &certificate);
        log!(&env, "certificate invalidated", id, index);

        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Look up a certificate by id, valid or not.
    pub fn verify_certificate(env: Env, id: u64) -> Result<Certificate, ContractError> {
        storage::get_certificate(&env, id).ok_or(ContractError::CertificateNotFound)
    }

    /// Certificate at a 0-based position in issuance order.
    pub fn certificates(env: Env, index: u64) -> Result<Certificate, ContractError> {
        if index >= storage::get_certificate_count(&env) {
            return Err(ContractError::CertificateNotFound);
        }
        storage::get_certificate(&env, index + 1).ok_or(ContractError::CertificateNotFound)
    }

    /// Snapshot at a 0-based position of the invalid list.
    pub fn invalid_certificates(env: Env, index: u64) -> Result<Certificate, ContractError> {
        storage::get_invalid_certificate(&env, index).ok_or(ContractError::CertificateNotFound)
    }

    pub fn get_valid_certificates(env: Env) -> Vec<Certificate> {
        Self::filter_by_validity(&env, true)
    }

    pub fn get_invalid_certificates(env: Env) -> Vec<Certificate> {
        Self::filter_by_validity(&env, false)
    }

    pub fn certificate_count(env: Env) -> u64 {
        storage::get_certificate_count(&env)
    }

    pub fn invalid_certificate_count(env: Env) -> u64 {
        storage::get_invalid_count(&env)
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn require_institution(env: &Env, caller: &Address) -> Result<(), ContractError> {
        caller.require_auth();

        match storage::get_institution(env) {
            Some(institution) if institution == *caller => Ok(()),
            _ => {
                log!(env, "Only institution can issue certificates", *caller);
                Err(ContractError::Unauthorized)
            }
        }
    }

    fn filter_by_validity(env: &Env, is_valid: bool) -> Vec<Certificate> {
        let mut matching = Vec::new(env);
        for id in 1..=storage::get_certificate_count(env) {
            if let Some(certificate) = storage::get_certificate(env, id) {
                if certificate.is_valid == is_valid {
                    matching.push_back(certificate);
                }
            }
        }
        matching
    }
}
