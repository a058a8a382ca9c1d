use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single artwork in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub brand: String,
    pub company: String,
    #[serde(default)]
    pub featured: bool,
    pub size: Vec<String>,
    pub color: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Price formatted for display, always two decimals.
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Typed view of one field, `None` when the record has no value for it.
    pub fn field(&self, field: ProductField) -> Option<FieldValue<'_>> {
        let value = match field {
            ProductField::Id => FieldValue::Number(self.id as f64),
            ProductField::Name => FieldValue::Text(&self.name),
            ProductField::Price => FieldValue::Number(self.price),
            ProductField::Image => FieldValue::Text(&self.image),
            ProductField::Brand => FieldValue::Text(&self.brand),
            ProductField::Company => FieldValue::Text(&self.company),
            ProductField::Featured => FieldValue::Flag(self.featured),
            ProductField::Size => FieldValue::List(&self.size),
            ProductField::Color => FieldValue::List(&self.color),
            ProductField::Description => FieldValue::Text(self.description.as_deref()?),
        };
        Some(value)
    }

    /// Numeric value of a field, `None` for fields that are not numbers.
    pub fn numeric(&self, field: ProductField) -> Option<f64> {
        match self.field(field)? {
            FieldValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// JSON value of one field, used when projecting records.
    pub fn field_json(&self, field: ProductField) -> Option<Value> {
        let value = match field {
            ProductField::Id => Value::from(self.id),
            ProductField::Name => Value::from(self.name.clone()),
            ProductField::Price => Value::from(self.price),
            ProductField::Image => Value::from(self.image.clone()),
            ProductField::Brand => Value::from(self.brand.clone()),
            ProductField::Company => Value::from(self.company.clone()),
            ProductField::Featured => Value::from(self.featured),
            ProductField::Size => Value::from(self.size.clone()),
            ProductField::Color => Value::from(self.color.clone()),
            ProductField::Description => Value::from(self.description.clone()?),
        };
        Some(value)
    }
}

/// The fixed set of field names clients may filter, sort or project on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Id,
    Name,
    Price,
    Image,
    Brand,
    Company,
    Featured,
    Size,
    Color,
    Description,
}

impl ProductField {
    pub const ALL: [ProductField; 10] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::Price,
        ProductField::Image,
        ProductField::Brand,
        ProductField::Company,
        ProductField::Featured,
        ProductField::Size,
        ProductField::Color,
        ProductField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::Image => "image",
            ProductField::Brand => "brand",
            ProductField::Company => "company",
            ProductField::Featured => "featured",
            ProductField::Size => "size",
            ProductField::Color => "color",
            ProductField::Description => "description",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown product field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for ProductField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Borrowed, typed value of a product field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
    Flag(bool),
    List(&'a [String]),
}

impl FieldValue<'_> {
    /// Ordering used by `sort`. Values of the same field always share a variant;
    /// mixed variants compare equal.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Flag(a), FieldValue::Flag(b)) => a.cmp(b),
            // Tag lists order by their comma-joined text.
            (FieldValue::List(a), FieldValue::List(b)) => a.join(",").cmp(&b.join(",")),
            _ => Ordering::Equal,
        }
    }
}
