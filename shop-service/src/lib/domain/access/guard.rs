use std::fmt::Display;

use super::errors::AccessDenied;
use super::models::Owned;
use super::models::Principal;

/// Ownership check shared by every single-resource use case.
///
/// Existence is checked before ownership, so probing an unknown id always
/// yields `NotFound` and never reveals whether access would be forbidden.
///
/// # Arguments
/// * `principal` - Authenticated caller
/// * `id` - Requested resource id (for the error message)
/// * `resource` - Result of the lookup for `id`
///
/// # Errors
/// * `NotFound` - No resource with this id
/// * `Forbidden` - Resource belongs to another user
pub fn authorize<R: Owned>(
    principal: &Principal,
    id: impl Display,
    resource: Option<R>,
) -> Result<R, AccessDenied> {
    let resource = resource.ok_or_else(|| AccessDenied::NotFound {
        kind: R::KIND,
        id: id.to_string(),
    })?;

    if resource.owner_id() != principal.id {
        return Err(AccessDenied::Forbidden);
    }

    Ok(resource)
}
