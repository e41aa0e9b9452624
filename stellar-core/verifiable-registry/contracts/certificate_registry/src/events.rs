use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::storage::Certificate;

pub const ISSUED: Symbol = symbol_short!("issued");
pub const INVALIDATED: Symbol = symbol_short!("invalid");
pub const INSTITUTION_SET: Symbol = symbol_short!("inst_set");
pub const INSTITUTION_TRANSFERRED: Symbol = symbol_short!("inst_xfer");

/// Topics `(issued, id)`, data `(name, course, date_of_issue, issued_by, did)`.
pub fn certificate_issued(env: &Env, certificate: &Certificate) {
    env.events().publish(
        (ISSUED, certificate.id),
        (
            certificate.name.clone(),
            certificate.course.clone(),
            certificate.date_of_issue.clone(),
            certificate.issued_by.clone(),
            certificate.did.clone(),
        ),
    );
}

pub fn certificate_invalidated(env: &Env, certificate: &Certificate) {
    env.events().publish(
        (INVALIDATED, certificate.id),
        certificate.issued_by.clone(),
    );
}

pub fn institution_set(env: &Env, institution: &Address) {
    env.events()
        .publish((INSTITUTION_SET,), institution.clone());
}

pub fn institution_transferred(env: &Env, previous: &Address, new_institution: &Address) {
    env.events().publish(
        (INSTITUTION_TRANSFERRED,),
        (previous.clone(), new_institution.clone()),
    );
}
