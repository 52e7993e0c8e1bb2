#[cfg(test)]
#[path = "recipe_test.rs"]
mod tests;

use std::fmt;

use serde::de::Error;
use serde::Deserialize;
use serde::Deserializer;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Value;

/// Opaque identifier assigned by the catalog once a recipe is persisted. The
/// backend hands out UUID strings, but numeric ids are accepted as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: &str) -> RecipeId {
        return RecipeId(id.to_string());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<RecipeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(id) => return Ok(RecipeId(id)),
            Value::Number(id) => return Ok(RecipeId(id.to_string())),
            other => return Err(D::Error::custom(format!("invalid recipe id: {other}"))),
        }
    }
}

/// A recipe as returned by the catalog, or as proposed by the assistant. A
/// suggestion has no `id` until it has been promoted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecipeId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    pub fn summary(&self) -> String {
        return format!(
            "{} ingredients, {} steps",
            self.ingredients.len(),
            self.steps.len()
        );
    }
}

/// Body sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
}

/// Raw text of the recipe form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub ingredients: String,
    pub steps: String,
    pub tags: String,
}

impl RecipeForm {
    pub fn from_recipe(recipe: &Recipe) -> RecipeForm {
        return RecipeForm {
            title: recipe.title.to_string(),
            description: recipe.description.clone().unwrap_or_default(),
            ingredients: recipe.ingredients.join("\n"),
            steps: recipe.steps.join("\n"),
            tags: recipe.tags.join(", "),
        };
    }

    pub fn to_payload(&self) -> RecipePayload {
        let description = self.description.trim();

        return RecipePayload {
            title: self.title.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            ingredients: parse_list(&self.ingredients),
            steps: parse_list(&self.steps),
            tags: parse_tags(&self.tags),
        };
    }
}

fn split_clean(value: &str, separators: &[char]) -> Vec<String> {
    return value
        .split(|c: char| return separators.contains(&c))
        .map(|entry| return entry.trim())
        .filter(|entry| return !entry.is_empty())
        .map(|entry| return entry.to_string())
        .collect();
}

/// Splits ingredients or steps on newlines, dropping blank lines.
pub fn parse_list(value: &str) -> Vec<String> {
    return split_clean(value, &['\n']);
}

/// Splits tags on commas or newlines. Duplicates are kept.
pub fn parse_tags(value: &str) -> Vec<String> {
    return split_clean(value, &[',', '\n']);
}
