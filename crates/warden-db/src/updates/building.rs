//! Building update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
}

impl BuildingUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none()
    }
}

#[derive(Debug, Default)]
pub struct BuildingUpdateBuilder(BuildingUpdate);

impl BuildingUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(BuildingUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: Option<String>) -> Self {
        self.0.address = Some(address);
        self
    }

    #[must_use]
    pub fn build(self) -> BuildingUpdate {
        self.0
    }
}
