use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::access::models::Owned;
use crate::domain::page::Page;
use crate::domain::user::models::UserId;
use crate::product::errors::PriceError;
use crate::product::errors::ProductError;
use crate::product::errors::ProductIdError;
use crate::product::errors::ProductNameError;

/// Product aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub details: ProductDetails,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Owned for Product {
    const KIND: &'static str = "Product";

    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Product unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Parse a product ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(ProductId(id)),
            _ => Err(ProductIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name value type
///
/// Trimmed, non-empty and at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    const MAX_LENGTH: usize = 200;

    pub fn new(name: impl Into<String>) -> Result<Self, ProductNameError> {
        let name = name.into().trim().to_string();
        let length = name.chars().count();
        if length == 0 {
            Err(ProductNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ProductNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Price in integer currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(i32);

impl Price {
    pub fn new(amount: i32) -> Result<Self, PriceError> {
        if amount < 0 {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> i32 {
        self.0
    }
}

/// The caller-supplied fields of a product, used for both create and full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub name: ProductName,
    pub description: String,
    pub price: Price,
    pub in_stock: bool,
}

/// A product about to be inserted; the store assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub details: ProductDetails,
    pub owner_id: UserId,
}

/// Listing criteria. `search` matches names case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub page: Page,
    pub search: Option<String>,
}

/// Parse a product upload, one `name,description,price,in_stock` record per line.
///
/// Lines that do not have exactly four fields (blank lines included) are
/// skipped, as is a leading header row. `in_stock` is true only for the
/// literal `true`, in any case. Any other malformed record rejects the whole
/// upload.
///
/// # Errors
/// * `InvalidCsvRow` - A four-field record has a bad name or price
pub fn parse_product_csv(content: &str) -> Result<Vec<ProductDetails>, ProductError> {
    let mut products = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        let [name, description, price, in_stock] = fields.as_slice() else {
            continue;
        };

        if line_number == 1 && price.eq_ignore_ascii_case("price") {
            continue;
        }

        let invalid = |reason: String| ProductError::InvalidCsvRow {
            line: line_number,
            reason,
        };

        let name = ProductName::new(*name).map_err(|e| invalid(e.to_string()))?;
        let amount = price
            .parse::<i32>()
            .map_err(|_| invalid(format!("price '{}' is not a whole number", price)))?;
        let price = Price::new(amount).map_err(|e| invalid(e.to_string()))?;

        products.push(ProductDetails {
            name,
            description: description.to_string(),
            price,
            in_stock: in_stock.eq_ignore_ascii_case("true"),
        });
    }

    Ok(products)
}
