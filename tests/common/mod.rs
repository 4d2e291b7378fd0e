use fake::Fake;
use fake::faker::address::en::CountryCode;
use gatehouse::gatehouse_models::{AdminAccount, AdminId, AdminStatus, CountryScope, Role};
use uuid::Uuid;

/// Statuses that must never be granted anything.
#[allow(dead_code)]
pub const INACTIVE_STATUSES: [AdminStatus; 2] = [AdminStatus::Suspended, AdminStatus::Disabled];

/// Create a test admin with the given role, status and scopes.
/// Scopes use their wire form: "GLOBAL" or a country code.
pub fn create_test_admin(role: Role, status: AdminStatus, scopes: &[&str]) -> AdminAccount {
    AdminAccount::new(role, status, scopes.iter().map(|s| CountryScope::from(*s)))
        .with_id(AdminId::from_uuid(Uuid::new_v4()))
}

#[allow(dead_code)]
pub fn create_active_admin(role: Role) -> AdminAccount {
    create_test_admin(role, AdminStatus::Active, &["GLOBAL"])
}

/// A random ISO-style country code, never the `GLOBAL` sentinel.
#[allow(dead_code)]
pub fn random_country_code() -> String {
    loop {
        let code: String = CountryCode().fake();
        if code != "GLOBAL" {
            return code;
        }
    }
}
