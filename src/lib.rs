//! Paprika Sync Client Library
//!
//! A Rust client for the Paprika recipe manager's sync API, giving read
//! access to recipes, categories, groceries, meals, menus, pantry items and
//! bookmarks of a Paprika account.

pub mod config;
pub mod error;
pub mod fetch;
pub mod sync;

use reqwest::Client;

use crate::config::ClientOptions;
use crate::sync::SyncClient;

/// The main entry point for the Paprika client
#[derive(Debug, Clone)]
pub struct Paprika {
    /// Sync API client holding the account credentials
    sync: SyncClient,
}

impl Paprika {
    /// Create a new Paprika client
    ///
    /// # Arguments
    ///
    /// * `email` - The Paprika account email
    /// * `password` - The Paprika account password
    ///
    /// # Example
    ///
    /// ```
    /// use paprika_sync::Paprika;
    ///
    /// let paprika = Paprika::new("cook@example.com", "password");
    /// ```
    pub fn new(email: &str, password: &str) -> Self {
        Self::new_with_options(email, password, ClientOptions::default())
    }

    /// Create a new Paprika client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use paprika_sync::{Paprika, config::ClientOptions};
    ///
    /// let options = ClientOptions::default().with_request_timeout(Some(Duration::from_secs(10)));
    /// let paprika = Paprika::new_with_options("cook@example.com", "password", options);
    /// ```
    pub fn new_with_options(email: &str, password: &str, options: ClientOptions) -> Self {
        Self {
            sync: SyncClient::new(email, password, Client::new(), options),
        }
    }

    /// Get the sync API client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paprika_sync::Paprika;
    ///
    /// # async fn run() -> paprika_sync::error::Result<()> {
    /// let paprika = Paprika::new("cook@example.com", "password");
    /// let status = paprika.sync().status().await?;
    /// println!("{} recipes", status.recipes);
    /// # Ok(())
    /// # }
    /// ```
    pub fn sync(&self) -> &SyncClient {
        &self.sync
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::{Error, Result};
    pub use crate::sync::{
        Bookmark, Category, GroceryItem, Meal, Menu, MenuItem, PantryItem, Recipe, RecipeItem,
        Status, SyncClient,
    };
    pub use crate::Paprika;
}
