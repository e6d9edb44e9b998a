//! Boundary coercion for album records
//!
//! Create, update and seed records all arrive in the same loose shape, where
//! `condition` and `price` may be numbers or numeric strings and `forSale` may
//! be a boolean or `"true"`/`"false"`. [`AlbumInput`] is that shape; it is the
//! only place values are coerced, so every write path stores the same types.

use crate::error::{DiggerError, Result};
use crate::types::{AlbumPatch, NewAlbum};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Album record as received from a client or a seed file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInput {
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub condition: Option<Value>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub for_sale: Option<Value>,
}

impl AlbumInput {
    /// Validate a complete record for insertion
    ///
    /// `artist`, `title`, `condition`, `format` and `price` are required.
    /// `comments` defaults to empty and `forSale` to `true`.
    pub fn into_new_album(self) -> Result<NewAlbum> {
        let artist = non_blank("artist", required("artist", self.artist)?)?;
        let title = non_blank("title", required("title", self.title)?)?;
        let condition = coerce_integer("condition", &required("condition", self.condition)?)?;
        let format = required("format", self.format)?;
        let price = coerce_integer("price", &required("price", self.price)?)?;
        let for_sale = match self.for_sale {
            Some(value) => coerce_bool("forSale", &value)?,
            None => true,
        };

        Ok(NewAlbum {
            artist,
            owner: self.owner,
            title,
            condition,
            format,
            comments: self.comments.unwrap_or_default(),
            price,
            for_sale,
        })
    }

    /// Validate a partial record for an update
    pub fn into_patch(self) -> Result<AlbumPatch> {
        Ok(AlbumPatch {
            artist: self.artist.map(|v| non_blank("artist", v)).transpose()?,
            owner: self.owner,
            title: self.title.map(|v| non_blank("title", v)).transpose()?,
            condition: self
                .condition
                .map(|v| coerce_integer("condition", &v))
                .transpose()?,
            format: self.format,
            comments: self.comments,
            price: self.price.map(|v| coerce_integer("price", &v)).transpose()?,
            for_sale: self
                .for_sale
                .map(|v| coerce_bool("forSale", &v))
                .transpose()?,
        })
    }
}

fn required<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| DiggerError::invalid_input(field, "field is required"))
}

fn non_blank(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(DiggerError::invalid_input(field, "must not be blank"));
    }
    Ok(value)
}

/// Coerce a number or numeric string to an integer
pub fn coerce_integer(field: &str, value: &Value) -> Result<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        DiggerError::invalid_input(field, format!("expected an integer, got {}", value))
    })
}

/// Coerce a boolean or `"true"`/`"false"` string to a boolean
pub fn coerce_bool(field: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
        other => Err(DiggerError::invalid_input(
            field,
            format!("expected true or false, got {}", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> AlbumInput {
        serde_json::from_value(value).unwrap()
    }

    fn smash() -> Value {
        json!({
            "artist": "The Offspring",
            "title": "Smash",
            "condition": "8",
            "format": "CD",
            "comments": "Amazing sophomore album by a great LA band",
            "price": "8",
            "forSale": "true"
        })
    }

    #[test]
    fn test_numeric_strings_become_integers() {
        let album = input(smash()).into_new_album().unwrap();
        assert_eq!(album.condition, 8);
        assert_eq!(album.price, 8);
        assert!(album.for_sale);
    }

    #[test]
    fn test_numbers_pass_through() {
        let mut value = smash();
        value["condition"] = json!(9);
        value["price"] = json!(12.0);
        let album = input(value).into_new_album().unwrap();
        assert_eq!(album.condition, 9);
        assert_eq!(album.price, 12);
    }

    #[test]
    fn test_non_numeric_rejected() {
        for bad in [json!("eight"), json!(8.5), json!(true), json!([8]), json!("")] {
            let mut value = smash();
            value["price"] = bad.clone();
            let err = input(value).into_new_album().unwrap_err();
            match err {
                DiggerError::InvalidInput { field, .. } => assert_eq!(field, "price"),
                other => panic!("unexpected error for {}: {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_for_sale_honours_caller() {
        let mut value = smash();
        value["forSale"] = json!(false);
        assert!(!input(value.clone()).into_new_album().unwrap().for_sale);

        value["forSale"] = json!("FALSE");
        assert!(!input(value.clone()).into_new_album().unwrap().for_sale);

        value["forSale"] = json!("maybe");
        assert!(input(value).into_new_album().is_err());
    }

    #[test]
    fn test_for_sale_defaults_to_true() {
        let mut value = smash();
        value.as_object_mut().unwrap().remove("forSale");
        assert!(input(value).into_new_album().unwrap().for_sale);
    }

    #[test]
    fn test_missing_required_field() {
        let mut value = smash();
        value.as_object_mut().unwrap().remove("title");
        let err = input(value).into_new_album().unwrap_err();
        assert_eq!(err.to_string(), "Invalid title: field is required");
    }

    #[test]
    fn test_blank_artist_rejected() {
        let mut value = smash();
        value["artist"] = json!("   ");
        assert!(input(value).into_new_album().is_err());
    }

    #[test]
    fn test_comments_default_to_empty() {
        let mut value = smash();
        value.as_object_mut().unwrap().remove("comments");
        assert_eq!(input(value).into_new_album().unwrap().comments, "");
    }

    #[test]
    fn test_patch_uses_same_coercion() {
        let patch = input(json!({ "price": "15", "forSale": "false" }))
            .into_patch()
            .unwrap();
        assert_eq!(patch.price, Some(15));
        assert_eq!(patch.for_sale, Some(false));
        assert_eq!(patch.artist, None);

        assert!(input(json!({ "condition": "mint" })).into_patch().is_err());
    }

    #[test]
    fn test_null_means_absent_in_patch() {
        let patch = input(json!({ "price": null, "artist": "X" }))
            .into_patch()
            .unwrap();
        assert_eq!(patch.price, None);
        assert_eq!(patch.artist.as_deref(), Some("X"));
    }
}
