//! Static location catalog.
//!
//! India first, then its ISO 3166-2 subdivisions in the order the
//! statistics API serves them. The catalog never changes at runtime;
//! persisted state refers to entries by identifier only.

use crate::codec::{self, DecodeError};

/// One selectable location.
///
/// The identifier doubles as the short text on the widget face; `name`
/// is the full text shown in the location picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub identifier: &'static str,
    pub name: &'static str,
}

impl Location {
    pub const fn new(identifier: &'static str, name: &'static str) -> Self {
        Self { identifier, name }
    }

    pub fn encode(&self) -> String {
        codec::encode_list([self.identifier])
    }

    /// Decode an identifier and resolve it against the catalog. An
    /// identifier outside the catalog is corrupt state, not a default.
    pub fn from_encoded(encoded: &str) -> Result<Self, DecodeError> {
        let [identifier] = codec::decode_fields::<1>(encoded, "location")?;
        match find(&identifier) {
            Some(location) => Ok(location),
            None => Err(DecodeError::UnknownLocation { identifier }),
        }
    }
}

/// Every location the widget can show, in picker order.
pub static LOCATIONS: [Location; 38] = [
    Location::new("IN", "India"),
    Location::new("IN-MH", "Maharashtra"),
    Location::new("IN-TN", "Tamil Nadu"),
    Location::new("IN-DL", "Delhi"),
    Location::new("IN-KL", "Kerala"),
    Location::new("IN-TG", "Telangana"),
    Location::new("IN-UP", "Uttar Pradesh"),
    Location::new("IN-RJ", "Rajasthan"),
    Location::new("IN-AP", "Andhra Pradesh"),
    Location::new("IN-MP", "Madhya Pradesh"),
    Location::new("IN-KA", "Karnataka"),
    Location::new("IN-GJ", "Gujarat"),
    Location::new("IN-JK", "Jammu and Kashmir"),
    Location::new("IN-HR", "Haryana"),
    Location::new("IN-PB", "Punjab"),
    Location::new("IN-WB", "West Bengal"),
    Location::new("IN-BR", "Bihar"),
    Location::new("IN-AS", "Assam"),
    Location::new("IN-UT", "Uttarakhand"),
    Location::new("IN-OR", "Odisha"),
    Location::new("IN-CH", "Chandigarh"),
    Location::new("IN-LA", "Ladakh"),
    Location::new("IN-AN", "Andaman and Nicobar Islands"),
    Location::new("IN-CT", "Chhattisgarh"),
    Location::new("IN-GA", "Goa"),
    Location::new("IN-HP", "Himachal Pradesh"),
    Location::new("IN-PY", "Puducherry"),
    Location::new("IN-JH", "Jharkhand"),
    Location::new("IN-MN", "Manipur"),
    Location::new("IN-MZ", "Mizoram"),
    Location::new("IN-AR", "Arunachal Pradesh"),
    Location::new("IN-DN", "Dadra and Nagar Haveli"),
    Location::new("IN-DD", "Daman and Diu"),
    Location::new("IN-LD", "Lakshadweep"),
    Location::new("IN-ML", "Meghalaya"),
    Location::new("IN-NL", "Nagaland"),
    Location::new("IN-SK", "Sikkim"),
    Location::new("IN-TR", "Tripura"),
];

/// Look up a catalog entry by identifier.
pub fn find(identifier: &str) -> Option<Location> {
    LOCATIONS.iter().copied().find(|l| l.identifier == identifier)
}
