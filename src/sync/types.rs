//! Record types returned by the sync API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A saved web bookmark
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
    pub uid: String,
    pub order_flag: i64,
}

/// A recipe category. Categories form a tree through `parent_uid`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub uid: String,

    /// The parent category, `None` for top-level categories
    pub parent_uid: Option<String>,

    pub order_flag: i64,
}

/// An entry on the grocery list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroceryItem {
    /// Store aisle the item is filed under
    pub aisle: String,

    pub uid: String,

    pub order_flag: i64,

    /// Name of the recipe the item was added from
    pub recipe: Option<String>,

    /// The full grocery line, e.g. "1 (14.5 ounce) can whole peeled tomatoes"
    pub name: String,

    /// Whether the item has been checked off
    pub purchased: bool,

    /// The recipe the item was added from, `None` for manual entries
    pub recipe_uid: Option<String>,

    /// The bare ingredient, e.g. "tomato"
    pub ingredient: String,
}

/// A meal planned on the calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub uid: String,
    pub order_flag: i64,
    pub recipe_uid: Option<String>,

    /// Planned day as sent by the service, e.g. "2015-05-27 00:00:00"
    pub date: String,

    /// Meal slot code as sent by the service
    #[serde(rename = "type")]
    pub meal_type: i64,

    pub name: String,
}

/// A named menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Menu {
    pub notes: String,
    pub uid: String,
    pub name: String,
    pub order_flag: i64,
}

/// A recipe placed on a menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub recipe_uid: Option<String>,
    pub uid: String,

    /// The [`Menu`] this item belongs to
    pub menu_uid: String,

    pub order_flag: i64,
}

/// An ingredient kept in the pantry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PantryItem {
    pub aisle: String,
    pub uid: String,
    pub ingredient: String,
}

/// A full recipe as returned by `recipe/{uid}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub uid: String,
    pub name: String,

    /// Ingredient lines separated by newlines
    pub ingredients: String,

    /// Directions, paragraphs separated by blank lines
    pub directions: String,

    /// Star rating, 0 when unrated
    pub rating: i64,

    /// File name of the recipe photo
    pub photo: Option<String>,

    pub photo_hash: Option<String>,

    /// Where the service hosts the recipe photo
    pub photo_url: Option<String>,

    /// Image URL picked up from the recipe's source page
    pub image_url: Option<String>,

    pub source: Option<String>,
    pub source_url: Option<String>,

    /// Content hash, matches [`RecipeItem::hash`]
    pub hash: String,

    pub difficulty: String,

    /// Uids of the [`Category`] records the recipe is filed under
    pub categories: Vec<String>,

    pub cook_time: String,
    pub prep_time: String,
    pub servings: String,

    /// Creation time as sent by the service, e.g. "2016-04-02 11:26:43"
    pub created: String,

    pub notes: String,
    pub nutritional_info: String,
    pub on_favorites: bool,
    pub on_grocery_list: Option<bool>,

    /// Scale factor, passed through as sent
    pub scale: Option<Value>,
}

/// Lightweight listing entry returned by `recipes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeItem {
    pub hash: String,
    pub uid: String,
}

/// Record counts per collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Status {
    pub recipes: u64,
    pub pantry: u64,
    pub meals: u64,
    pub menus: u64,
    pub groceries: u64,
    pub bookmarks: u64,
    pub menuitems: u64,
    pub categories: u64,
}
