use serde::{Deserialize, Serialize};

use crate::common::validation::{require_email, require_non_empty};
use crate::common::{ApiError, ProviderId};
use crate::domains::providers::models::{CreateProvider, Provider, UpdateProvider};

/// Provider as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderData {
    pub id: ProviderId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub language: String,
    pub currency: String,
}

impl From<Provider> for ProviderData {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id,
            name: provider.name,
            email: provider.email,
            phone_number: provider.phone_number,
            language: provider.language,
            currency: provider.currency,
        }
    }
}

/// Body of `POST /providers/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProviderInput {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub language: String,
    pub currency: String,
}

impl TryFrom<CreateProviderInput> for CreateProvider {
    type Error = ApiError;

    fn try_from(input: CreateProviderInput) -> Result<Self, Self::Error> {
        require_non_empty("name", &input.name)?;
        require_email(&input.email)?;
        require_non_empty("phone_number", &input.phone_number)?;
        require_non_empty("language", &input.language)?;
        require_non_empty("currency", &input.currency)?;

        Ok(Self {
            name: input.name,
            email: input.email.trim().to_string(),
            phone_number: input.phone_number,
            language: input.language,
            currency: input.currency,
        })
    }
}

/// Body of `PUT /providers/{id}`; any subset of fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProviderInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl TryFrom<UpdateProviderInput> for UpdateProvider {
    type Error = ApiError;

    fn try_from(input: UpdateProviderInput) -> Result<Self, Self::Error> {
        if let Some(name) = &input.name {
            require_non_empty("name", name)?;
        }
        if let Some(email) = &input.email {
            require_email(email)?;
        }
        if let Some(phone_number) = &input.phone_number {
            require_non_empty("phone_number", phone_number)?;
        }
        if let Some(language) = &input.language {
            require_non_empty("language", language)?;
        }
        if let Some(currency) = &input.currency {
            require_non_empty("currency", currency)?;
        }

        Ok(Self {
            name: input.name,
            email: input.email.map(|e| e.trim().to_string()),
            phone_number: input.phone_number,
            language: input.language,
            currency: input.currency,
        })
    }
}
