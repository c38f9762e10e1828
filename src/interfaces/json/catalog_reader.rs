use crate::domain::product::Product;
use crate::error::Result;
use std::collections::BTreeMap;
use std::io::Read;

/// Reads the `category -> [product]` JSON records that seed the catalog.
///
/// Wraps any `Read` source. Prices may be JSON numbers or strings; both
/// deserialize into `Decimal`.
pub struct CatalogReader<R: Read> {
    source: R,
}

impl<R: Read> CatalogReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn categories(self) -> Result<BTreeMap<String, Vec<Product>>> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
