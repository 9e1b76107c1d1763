//! Shipping status value object.

use crate::DocmanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shipping status of a document.
///
/// Stored as a non-negative integer. Only 0, 1 and 2 carry a display
/// meaning; any other non-negative value is accepted and shown as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(try_from = "i32", into = "i32")]
pub struct ShippingStatus(i32);

impl ShippingStatus {
    pub const NOT_SHIPPED: Self = Self(0);
    pub const SHIPPED: Self = Self(1);
    pub const DELIVERED: Self = Self(2);

    /// Creates a shipping status, rejecting negative values.
    pub fn new(value: i32) -> Result<Self, DocmanError> {
        if value < 0 {
            return Err(DocmanError::validation(format!(
                "shippingStatus must be a non-negative integer, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw stored value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns true for one of the three known states.
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self.0, 0..=2)
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "not shipped",
            1 => "shipped",
            2 => "delivered",
            _ => "unknown",
        }
    }
}

impl TryFrom<i32> for ShippingStatus {
    type Error = DocmanError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShippingStatus> for i32 {
    fn from(status: ShippingStatus) -> Self {
        status.0
    }
}

impl fmt::Display for ShippingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
