use soroban_sdk::{contracttype, Address, Env, String};

use crate::ContractError;

/// A course certificate issued by the institution.
///
/// Everything except `is_valid` is fixed at issuance.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    pub id: u64,
    pub name: String,
    pub course: String,
    pub date_of_issue: String,
    pub issued_by: Address,
    pub is_valid: bool,
    pub did: String,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Institution,
    CertificateCount,
    InvalidCount,
    Certificate(u64),
    InvalidCertificate(u64),
}

pub fn get_institution(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Institution)
}

pub fn set_institution(env: &Env, institution: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Institution, institution);
}

pub fn get_certificate_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CertificateCount)
        .unwrap_or(0)
}

pub fn set_certificate_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::CertificateCount, &count);
}

pub fn get_invalid_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::InvalidCount)
        .unwrap_or(0)
}

pub fn set_invalid_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::InvalidCount, &count);
}

pub fn get_certificate(env: &Env, id: u64) -> Option<Certificate> {
    env.storage().persistent().get(&DataKey::Certificate(id))
}

pub fn set_certificate(env: &Env, certificate: &Certificate) {
    env.storage()
        .persistent()
        .set(&DataKey::Certificate(certificate.id), certificate);
}

pub fn get_invalid_certificate(env: &Env, index: u64) -> Option<Certificate> {
    env.storage()
        .persistent()
        .get(&DataKey::InvalidCertificate(index))
}

/// Appends a snapshot to the invalid list and returns its index.
pub fn push_invalid_certificate(
    env: &Env,
    certificate: &Certificate,
) -> Result<u64, ContractError> {
    let index = get_invalid_count(env);
    let count = index
        .checked_add(1)
        .ok_or(ContractError::NumericalOverflow)?;
    env.storage()
        .persistent()
        .set(&DataKey::InvalidCertificate(index), certificate);
    set_invalid_count(env, count);
    Ok(index)
}
