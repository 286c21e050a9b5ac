//! Read access to the Paprika sync collections
//!
//! Every operation is a single authenticated GET against the sync API. The
//! service wraps each payload as `{"result": ...}`; the envelope is stripped
//! and the payload decoded into the record types in this module.

mod types;

use std::fmt;

use reqwest::{header::USER_AGENT, Client};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientOptions;
use crate::error::{Error, Result};
use crate::fetch::Fetch;

pub use types::*;

/// Client for the sync API collections
#[derive(Clone)]
pub struct SyncClient {
    /// Account email, sent as the Basic auth user
    email: String,

    /// Account password, sent as the Basic auth password
    password: String,

    /// HTTP client used for requests
    client: Client,

    /// Client options
    options: ClientOptions,
}

impl fmt::Debug for SyncClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncClient")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("options", &self.options)
            .finish()
    }
}

impl SyncClient {
    /// Create a new SyncClient. No request is made until an operation is called.
    pub fn new(email: &str, password: &str, client: Client, options: ClientOptions) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            client,
            options,
        }
    }

    /// The options this client was built with
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Resolve path segments against the base URL, encoding each segment
    fn endpoint_url<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = Url::parse(&self.options.base_url)?;
        url.path_segments_mut()
            .map_err(|_| Error::general(format!("base URL cannot take a path: {}", self.options.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        Fetch::get(&self.client, url)
            .basic_auth(&self.email, &self.password)
            .header(USER_AGENT, &self.options.user_agent)?
            .timeout(self.options.request_timeout)
            .execute::<T>()
            .await
    }

    /// Fetch any sync endpoint and decode its `result` payload
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Path relative to the base URL, e.g. `"recipes"` or `"recipe/<uid>"`
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.endpoint_url(endpoint.split('/').filter(|s| !s.is_empty()))?;
        self.get(url).await
    }

    /// All bookmarks
    pub async fn bookmarks(&self) -> Result<Vec<Bookmark>> {
        self.fetch("bookmarks").await
    }

    /// All recipe categories
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.fetch("categories").await
    }

    /// The grocery list
    pub async fn groceries(&self) -> Result<Vec<GroceryItem>> {
        self.fetch("groceries").await
    }

    /// Planned meals
    pub async fn meals(&self) -> Result<Vec<Meal>> {
        self.fetch("meals").await
    }

    /// All menus
    pub async fn menus(&self) -> Result<Vec<Menu>> {
        self.fetch("menus").await
    }

    /// Items on every menu; match them to menus through `menu_uid`
    pub async fn menu_items(&self) -> Result<Vec<MenuItem>> {
        self.fetch("menuitems").await
    }

    /// Ingredients kept in the pantry
    pub async fn pantry(&self) -> Result<Vec<PantryItem>> {
        self.fetch("pantry").await
    }

    /// Uid and hash of every recipe. Use [`SyncClient::recipe`] for the full record.
    pub async fn recipes(&self) -> Result<Vec<RecipeItem>> {
        self.fetch("recipes").await
    }

    /// A single recipe by uid
    ///
    /// # Arguments
    ///
    /// * `uid` - The recipe uid, used verbatim as one path segment
    pub async fn recipe(&self, uid: &str) -> Result<Recipe> {
        let url = self.endpoint_url(["recipe", uid])?;
        self.get(url).await
    }

    /// Record counts for each collection
    pub async fn status(&self) -> Result<Status> {
        self.fetch("status").await
    }
}
