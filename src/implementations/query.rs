use log::{ debug, error };

use crate::implementations::property_ledger::PropertyLedger;
use crate::models::common::PropertyId;
use crate::models::property::Property;
use crate::models::search::SearchCriteria;

/// A lazy search over the ledger in ascending id order.
///
/// Each step reads the ledger afresh from the last id it yielded, so every
/// returned record is a consistent copy and no lock is held between steps.
/// Cloning or calling `restart` gives an independent pass from the beginning.
#[derive(Debug, Clone)]
pub struct PropertySearch<'a> {
    ledger: &'a PropertyLedger,
    criteria: SearchCriteria,
    cursor: Option<PropertyId>,
    exhausted: bool,
}

impl<'a> PropertySearch<'a> {
    pub(crate) fn new(ledger: &'a PropertyLedger, criteria: SearchCriteria) -> Self {
        debug!("Starting property search with {:?}", criteria);
        Self { ledger, criteria, cursor: None, exhausted: false }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Rewind to the first property
    pub fn restart(&mut self) {
        self.cursor = None;
        self.exhausted = false;
    }
}

impl Iterator for PropertySearch<'_> {
    type Item = Property;

    fn next(&mut self) -> Option<Property> {
        if self.exhausted {
            return None;
        }
        match self.ledger.next_match(self.cursor, &self.criteria) {
            Ok(Some(property)) => {
                self.cursor = Some(property.id);
                Some(property)
            }
            Ok(None) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                error!("Property search stopped: {}", e);
                self.exhausted = true;
                None
            }
        }
    }
}
