//! Address Book Use Cases
//!
//! Every operation is scoped to the signed-in user. Addresses of other users
//! behave as if they did not exist.

use std::sync::Arc;

use crate::application::required;
use crate::domain::entity::address::{Address, AddressFields, AddressId};
use crate::domain::repository::AddressRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Address input, shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct AddressInput {
    pub name: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_default: Option<bool>,
}

impl AddressInput {
    fn validate(self) -> AuthResult<AddressFields> {
        let field = |value: Option<String>, label: &str| {
            required(value).ok_or_else(|| AuthError::Validation(format!("{label} is required")))
        };

        Ok(AddressFields {
            name: field(self.name, "Name")?,
            line1: field(self.line1, "Address line 1")?,
            line2: required(self.line2),
            city: field(self.city, "City")?,
            state: required(self.state),
            postal_code: field(self.postal_code, "Postal code")?,
            country: field(self.country, "Country")?,
            is_default: self.is_default.unwrap_or(false),
        })
    }
}

/// Address use cases
pub struct AddressUseCases<A>
where
    A: AddressRepository,
{
    address_repo: Arc<A>,
}

impl<A> AddressUseCases<A>
where
    A: AddressRepository,
{
    pub fn new(address_repo: Arc<A>) -> Self {
        Self { address_repo }
    }

    pub async fn list(&self, user_id: &UserId) -> AuthResult<Vec<Address>> {
        self.address_repo.list_addresses(user_id).await
    }

    pub async fn create(&self, user_id: &UserId, input: AddressInput) -> AuthResult<Address> {
        let fields = input.validate()?;
        let address = Address::new(*user_id, fields);
        self.address_repo.create_address(&address).await?;

        tracing::info!(
            user_id = %user_id,
            address_id = %address.address_id,
            "Address created"
        );
        Ok(address)
    }

    pub async fn update(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
        input: AddressInput,
    ) -> AuthResult<Address> {
        let fields = input.validate()?;
        let mut address = self
            .address_repo
            .find_address(user_id, address_id)
            .await?
            .ok_or(AuthError::NotFound("Address"))?;

        address.apply(fields);
        self.address_repo.update_address(&address).await?;

        tracing::debug!(user_id = %user_id, address_id = %address_id, "Address updated");
        Ok(address)
    }

    pub async fn delete(&self, user_id: &UserId, address_id: &AddressId) -> AuthResult<()> {
        if !self.address_repo.delete_address(user_id, address_id).await? {
            return Err(AuthError::NotFound("Address"));
        }

        tracing::debug!(user_id = %user_id, address_id = %address_id, "Address deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> AddressInput {
        AddressInput {
            name: Some("Home".to_string()),
            line1: Some("1 Main St".to_string()),
            line2: Some("  ".to_string()),
            city: Some("Springfield".to_string()),
            state: None,
            postal_code: Some("12345".to_string()),
            country: Some("US".to_string()),
            is_default: None,
        }
    }

    #[test]
    fn test_validate_complete_input() {
        let fields = complete().validate().unwrap();
        assert_eq!(fields.name, "Home");
        assert_eq!(fields.line2, None);
        assert!(!fields.is_default);
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let input = AddressInput {
            city: Some(" ".to_string()),
            ..complete()
        };
        assert_eq!(input.validate().unwrap_err().to_string(), "City is required");

        let input = AddressInput {
            name: None,
            ..complete()
        };
        assert_eq!(input.validate().unwrap_err().to_string(), "Name is required");
    }
}
