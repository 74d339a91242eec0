//! Persistence for the user's active location selection.

use crate::error::Error;
use crate::model::LocationSpec;

use super::{key, Store};

/// Repository for the single persisted [`LocationSpec`].
pub struct LocationRepository<'a> {
    store: &'a Store,
}

impl<'a> LocationRepository<'a> {
    /// Creates a new instance of [`LocationRepository`]
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Loads the persisted location, if any.
    ///
    /// An undecodable stored value is treated as absent; the user will
    /// simply be asked to pick a location again.
    pub async fn get(&self) -> Result<Option<LocationSpec>, Error> {
        let Some(raw) = self.store.get(key::LOCATION).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(spec) => Ok(Some(spec)),
            Err(err) => {
                tracing::warn!("Discarding undecodable persisted location: {err}");
                self.store.delete(key::LOCATION).await?;
                Ok(None)
            }
        }
    }

    /// Persists `spec`, replacing any previous selection wholesale.
    pub async fn put(&self, spec: &LocationSpec) -> Result<(), Error> {
        let raw = serde_json::to_string(spec)
            .map_err(|err| Error::ParseError(format!("Failed to encode location: {err}")))?;

        self.store.put(key::LOCATION, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Store;
    use crate::model::LocationSpec;

    use super::LocationRepository;

    #[tokio::test]
    async fn round_trips_manual_location() {
        let store = Store::open_in_memory().unwrap();
        let repo = LocationRepository::new(&store);

        assert_eq!(repo.get().await.unwrap(), None);

        let spec = LocationSpec::Manual {
            region: "İstanbul".to_string(),
            subregion: Some("Kadıköy".to_string()),
            country: "Türkiye".to_string(),
        };
        repo.put(&spec).await.unwrap();

        assert_eq!(repo.get().await.unwrap(), Some(spec));
    }

    #[tokio::test]
    async fn corrupt_value_is_discarded() {
        let store = Store::open_in_memory().unwrap();
        store.put(crate::data::key::LOCATION, "{not json").await.unwrap();

        let repo = LocationRepository::new(&store);
        assert_eq!(repo.get().await.unwrap(), None);
    }
}
