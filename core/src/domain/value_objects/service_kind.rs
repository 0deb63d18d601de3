//! Service kind discriminator for bookable resources.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of resource a booking refers to.
///
/// A booking always references exactly one resource kind; the service
/// selector enforces this before any availability or pricing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// A rentable residence (villa, apartment, ...)
    Residence,
    /// A rentable vehicle
    Vehicle,
    /// A combined residence + vehicle package offer
    Offer,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Residence => write!(f, "residence"),
            ServiceKind::Vehicle => write!(f, "vehicle"),
            ServiceKind::Offer => write!(f, "offer"),
        }
    }
}
