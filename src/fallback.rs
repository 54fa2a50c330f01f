use crate::api::ApiClient;
use crate::error::{Error, Result};
use crate::storage::{get_typed, set_typed, LocalStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

/// A record that can live in a fallback collection. Identifiers are string
/// UUIDs, absent until creation and immutable afterwards.
pub trait Record: Serialize + DeserializeOwned + Clone {
    fn id(&self) -> Option<&str>;
    fn set_id(&mut self, id: String);
}

/// Orchestrates one remote attempt per operation and, when the backend is
/// unreachable, emulates the same operation against the local store under the
/// entity's fallback key. Collection and singleton shapes get separate entry
/// points so the emulation is exhaustive at the type level.
#[derive(Clone)]
pub struct Api {
    client: ApiClient,
}

impl Api {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn store(&self) -> &dyn LocalStore {
        self.client.store().as_ref()
    }

    fn read_list<T: Record>(&self, key: &str) -> Vec<T> {
        get_typed(self.store(), key).unwrap_or_default()
    }

    /// GET a collection; offline, the stored list (or an empty one).
    pub async fn get_list<T: Record>(&self, path: &str, key: &str) -> Result<Vec<T>> {
        match self.client.get(path).await {
            Ok(items) => Ok(items),
            Err(e) if e.is_fallback_eligible() => {
                warn!(path, key, error = %e, "remote GET failed, serving local fallback");
                Ok(self.read_list(key))
            }
            Err(e) => Err(e),
        }
    }

    /// POST a new record; offline, a UUID is assigned locally and the record
    /// appended to the stored list.
    pub async fn create<T: Record>(&self, path: &str, key: &str, item: T) -> Result<T> {
        match self.client.post(path, &item).await {
            Ok(created) => Ok(created),
            Err(e) if e.is_fallback_eligible() => {
                warn!(path, key, error = %e, "remote POST failed, creating in local fallback");
                let mut items: Vec<T> = self.read_list(key);
                let mut item = item;
                item.set_id(Uuid::new_v4().to_string());
                items.push(item.clone());
                set_typed(self.store(), key, &items);
                Ok(item)
            }
            Err(e) => Err(e),
        }
    }

    /// PUT/PATCH a record by id. The explicit `id` parameter is canonical:
    /// it is forced into the body before the remote call and used to locate
    /// the local entry. Offline, an unmatched id appends instead of dropping
    /// the write.
    pub async fn update<T: Record>(
        &self,
        method: UpdateMethod,
        path: &str,
        key: &str,
        id: &str,
        mut item: T,
    ) -> Result<T> {
        item.set_id(id.to_string());

        let attempt = match method {
            UpdateMethod::Put => self.client.put(path, &item).await,
            UpdateMethod::Patch => self.client.patch(path, &item).await,
        };

        match attempt {
            Ok(updated) => Ok(updated),
            Err(e) if e.is_fallback_eligible() => {
                warn!(path, key, id, error = %e, "remote update failed, updating local fallback");
                let mut items: Vec<T> = self.read_list(key);
                match items.iter_mut().find(|existing| existing.id() == Some(id)) {
                    Some(existing) => *existing = item.clone(),
                    None => items.push(item.clone()),
                }
                set_typed(self.store(), key, &items);
                Ok(item)
            }
            Err(e) => Err(e),
        }
    }

    /// DELETE by id; offline, entries matching the id are filtered out.
    /// Idempotent either way.
    pub async fn delete<T: Record>(&self, path: &str, key: &str, id: &str) -> Result<()> {
        match self.client.delete(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_fallback_eligible() => {
                warn!(path, key, id, error = %e, "remote DELETE failed, deleting from local fallback");
                let mut items: Vec<T> = self.read_list(key);
                items.retain(|existing| existing.id() != Some(id));
                set_typed(self.store(), key, &items);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// GET a singleton; offline, the stored value or `NotFound`.
    pub async fn get_singleton<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<T> {
        match self.client.get(path).await {
            Ok(value) => Ok(value),
            Err(e) if e.is_fallback_eligible() => {
                warn!(path, key, error = %e, "remote GET failed, serving local singleton");
                get_typed(self.store(), key)
                    .ok_or_else(|| Error::NotFound(format!("no local value under '{}'", key)))
            }
            Err(e) => Err(e),
        }
    }

    /// PUT a singleton; offline, the stored value is replaced wholesale.
    pub async fn put_singleton<T: Serialize + DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        value: T,
    ) -> Result<T> {
        match self.client.put(path, &value).await {
            Ok(updated) => Ok(updated),
            Err(e) if e.is_fallback_eligible() => {
                warn!(path, key, error = %e, "remote PUT failed, replacing local singleton");
                set_typed(self.store(), key, &value);
                Ok(value)
            }
            Err(e) => Err(e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Put,
    Patch,
}
