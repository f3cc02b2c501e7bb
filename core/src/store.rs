//! Callback-driven client for the remote todo collection.
//!
//! # Design
//! Every operation is one `async fn` that issues its request and, only if the
//! request reaches its success status, invokes the callback with the full
//! collection as the backend reports it right then. Writes never hand back
//! the written item; they re-read the list. Failures of any kind (transport,
//! status, body) are logged and the callback is dropped uncalled.
//!
//! The store keeps no copy of the collection and no other state between
//! calls, so concurrent calls are independent and may complete in any order.

use serde::Serialize;
use tracing::{debug, warn};

use crate::client::TodoApi;
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Item, ItemId, Query};

/// Completion callback. Receives the collection (or, for `find`, the
/// matching part of it).
pub type Callback<'a> = Box<dyn FnOnce(Vec<Item>) + Send + 'a>;

/// Box `f` as an optional [`Callback`].
pub fn callback<'a, F>(f: F) -> Option<Callback<'a>>
where
    F: FnOnce(Vec<Item>) + Send + 'a,
{
    Some(Box::new(f))
}

pub struct Store<T> {
    name: String,
    api: TodoApi,
    transport: T,
}

impl<T: Transport> Store<T> {
    /// Build the store and immediately list the collection, handing the
    /// result to `callback`.
    ///
    /// `name` identifies the store in logs; it is not part of any url.
    pub async fn open(
        name: impl Into<String>,
        config: &StoreConfig,
        transport: T,
        callback: Option<Callback<'_>>,
    ) -> Self {
        let store = Self {
            name: name.into(),
            api: TodoApi::new(config),
            transport,
        };
        store.find_all(callback).await;
        store
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn api(&self) -> &TodoApi {
        &self.api
    }

    /// `GET` the collection. `callback` fires on 200 with the parsed items.
    /// With no callback the request is still made and the result discarded.
    pub async fn find_all(&self, callback: Option<Callback<'_>>) {
        let result = self.list().await;
        self.settle("find_all", result, callback);
    }

    /// List the collection and keep the items matching every field of
    /// `query`. Returns at once, without a request, if there is no callback.
    pub async fn find(&self, query: &Query, callback: Option<Callback<'_>>) {
        let Some(callback) = callback else {
            return;
        };
        let result = self.list().await.map(|items| query.filter(items));
        self.settle("find", result, Some(callback));
    }

    /// Create (no `id`) or update (`id` given) an item, then re-list.
    ///
    /// `callback` receives the refreshed collection once both the write
    /// (200) and the list (200) succeed.
    pub async fn save<P>(&self, payload: &P, callback: Option<Callback<'_>>, id: Option<ItemId>)
    where
        P: Serialize + ?Sized,
    {
        let result = self.save_then_list(payload, id.as_ref()).await;
        self.settle("save", result, callback);
    }

    /// `DELETE` one item; on 204 re-list and hand over the collection.
    pub async fn remove(&self, id: impl Into<ItemId>, callback: Option<Callback<'_>>) {
        let id = id.into();
        let result = self.remove_then_list(&id).await;
        self.settle("remove", result, callback);
    }

    /// `DELETE` the whole collection; on 204 re-list and hand over what is
    /// left, normally nothing.
    pub async fn drop_all(&self, callback: Option<Callback<'_>>) {
        let result = self.drop_then_list().await;
        self.settle("drop_all", result, callback);
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let response = self.send(self.api.build_list()).await?;
        Ok(self.api.parse_list(response)?)
    }

    async fn save_then_list<P>(&self, payload: &P, id: Option<&ItemId>) -> Result<Vec<Item>, StoreError>
    where
        P: Serialize + ?Sized,
    {
        let request = self.api.build_save(payload, id)?;
        debug!(store = %self.name, payload = request.body.as_deref().unwrap_or_default(), "sending payload");
        self.api.parse_save(self.send(request).await?)?;
        self.list().await
    }

    async fn remove_then_list(&self, id: &ItemId) -> Result<Vec<Item>, StoreError> {
        self.api.parse_remove(self.send(self.api.build_remove(id)).await?)?;
        self.list().await
    }

    async fn drop_then_list(&self) -> Result<Vec<Item>, StoreError> {
        self.api.parse_drop(self.send(self.api.build_drop()).await?)?;
        self.list().await
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, StoreError> {
        debug!(store = %self.name, method = %request.method, url = %request.path, "sending request");
        Ok(self.transport.execute(request).await?)
    }

    fn settle(&self, operation: &'static str, result: Result<Vec<Item>, StoreError>, callback: Option<Callback<'_>>) {
        match result {
            Ok(items) => {
                if let Some(callback) = callback {
                    callback(items);
                }
            }
            Err(error) => {
                warn!(store = %self.name, operation, %error, "request failed, callback skipped");
            }
        }
    }
}
