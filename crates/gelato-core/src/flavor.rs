//! Flavor records and the validating menu parser
//!
//! The remote menu document decodes into loosely-typed dictionaries
//! ([`RawRecord`]). [`Flavor::from_raw`] turns one dictionary into a typed
//! record, refusing anything that is missing a required key or carries a
//! non-text value. [`parse_menu`] applies that to a whole menu, dropping
//! the rejects and keeping the survivors in document order.

use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Required key: display name of the flavor
pub const KEY_NAME: &str = "name";

/// Required key: scoop image/asset reference for the detail pane
pub const KEY_IMAGE: &str = "image";

/// One loosely-typed menu entry as decoded from the wire
pub type RawRecord = Map<String, Value>;

/// One validated menu entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor {
    /// Display name, shown in the grid cell and the detail label
    pub name: String,

    /// Asset reference for the detail pane art
    pub image: String,
}

impl Flavor {
    /// Build a flavor from a raw dictionary
    ///
    /// Returns `None` if any required key is absent or not a string.
    /// Never panics, never partially constructs.
    pub fn from_raw(raw: &RawRecord) -> Option<Self> {
        let name = raw.get(KEY_NAME)?.as_str()?;
        let image = raw.get(KEY_IMAGE)?.as_str()?;

        Some(Self {
            name: name.to_string(),
            image: image.to_string(),
        })
    }
}

/// Validate a whole raw menu, dropping malformed entries
///
/// Order among surviving entries matches the input order. A dropped entry
/// is never an error: the result just gets shorter. The drop count is
/// logged once per batch for diagnostics.
pub fn parse_menu(raw: Vec<RawRecord>) -> Vec<Flavor> {
    let total = raw.len();

    let flavors: Vec<Flavor> = raw
        .iter()
        .filter_map(|record| {
            let flavor = Flavor::from_raw(record);
            if flavor.is_none() {
                debug!(
                    "Dropping malformed menu entry with keys: [{}]",
                    record.keys().cloned().collect::<Vec<_>>().join(", ")
                );
            }
            flavor
        })
        .collect();

    let dropped = total - flavors.len();
    if dropped > 0 {
        warn!(
            "Dropped {} of {} menu entries missing required fields",
            dropped, total
        );
    }

    flavors
}
