//! Product catalogue types
//!
//! `Product` is the full record as stored; `ProductPatch` carries a merge-style
//! update where every field is either present (overwrite) or absent (keep).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Size classification of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Size::S),
            "M" => Ok(Size::M),
            "L" => Ok(Size::L),
            "XL" => Ok(Size::XL),
            "XXL" => Ok(Size::XXL),
            other => Err(DomainError::Validation(format!("Unknown size: {}", other))),
        }
    }
}

/// Category a product may belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Product data for API responses and writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by storage on first insert
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub size: Size,
    /// Raw image bytes, base64 on the wire
    #[serde(default, with = "base64_image")]
    pub image: Option<Vec<u8>>,
    pub image_content_type: Option<String>,
    pub annotation: String,
    /// `false` means "not available for new orders"; the record still exists
    #[serde(default)]
    pub is_active: bool,
    pub product_category: Option<ProductCategory>,
}

impl Product {
    /// A new, inactive, uncategorised product without an id
    pub fn new(
        name: impl Into<String>,
        price: f64,
        size: Size,
        annotation: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
            size,
            image: None,
            image_content_type: None,
            annotation: annotation.into(),
            is_active: false,
            product_category: None,
        }
    }
}

/// Merge-style update of an existing product.
///
/// `None` means "leave the stored value alone". There is no way to clear a
/// nullable column through a patch; send an empty value instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default, with = "base64_image")]
    pub image: Option<Vec<u8>>,
    #[serde(default)]
    pub image_content_type: Option<String>,
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ProductPatch {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Overwrite every field of `existing` that this patch carries
    pub fn apply(self, existing: &mut Product) {
        if let Some(name) = self.name {
            existing.name = name;
        }
        if let Some(description) = self.description {
            existing.description = Some(description);
        }
        if let Some(price) = self.price {
            existing.price = price;
        }
        if let Some(size) = self.size {
            existing.size = size;
        }
        if let Some(image) = self.image {
            existing.image = Some(image);
        }
        if let Some(content_type) = self.image_content_type {
            existing.image_content_type = Some(content_type);
        }
        if let Some(annotation) = self.annotation {
            existing.annotation = annotation;
        }
        if let Some(is_active) = self.is_active {
            existing.is_active = is_active;
        }
    }

    /// Overwrite only the active flag, ignoring every other field
    pub fn apply_active_flag(&self, existing: &mut Product) {
        if let Some(is_active) = self.is_active {
            existing.is_active = is_active;
        }
    }
}

/// Order line referencing a product. Only used to guard product deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub quantity: i32,
    pub total_price: f64,
    pub status: String,
    pub product_id: i64,
}

mod base64_image {
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(bytes) => serializer.serialize_some(&STANDARD.encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| STANDARD.decode(encoded).map_err(serde::de::Error::custom))
            .transpose()
    }
}
