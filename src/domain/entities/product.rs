//! Savings product entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Commercial category of a savings product.
///
/// Wire names carry the Spanish labels the web client renders, accents
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    Ahorro,
    Programado,
    #[serde(rename = "Inversión")]
    Inversion,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Ahorro => "Ahorro",
            ProductType::Programado => "Programado",
            ProductType::Inversion => "Inversión",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A savings product from the commercial catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub product_type: ProductType,
    pub description: String,
    /// Effective annual rate as a fraction (0.12 = 12% E.A.).
    pub interest_rate: f64,
    /// Smallest opening deposit the product accepts.
    pub min_amount: Decimal,
    pub image_url: String,
}

/// The product a customer picked before opening the simulator.
///
/// Passed explicitly into the simulator pre-fill instead of living in a
/// shared selection store; callers that need cross-page persistence carry
/// this value themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSelection {
    pub name: String,
    pub product_type: ProductType,
    pub interest_rate: f64,
    pub min_amount: Decimal,
}

impl From<&Product> for ProductSelection {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            product_type: product.product_type,
            interest_rate: product.interest_rate,
            min_amount: product.min_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProductType::Inversion).unwrap(),
            "\"Inversión\""
        );
        assert_eq!(
            serde_json::from_str::<ProductType>("\"Ahorro\"").unwrap(),
            ProductType::Ahorro
        );
    }

    #[test]
    fn test_product_type_display_matches_wire_name() {
        assert_eq!(ProductType::Programado.to_string(), "Programado");
        assert_eq!(ProductType::Inversion.to_string(), "Inversión");
    }

    #[test]
    fn test_selection_from_product() {
        let product = Product {
            id: "cuenta-ahorro-flexible".to_string(),
            name: "Cuenta de Ahorro Flexible".to_string(),
            product_type: ProductType::Ahorro,
            description: "Ahorra a tu ritmo".to_string(),
            interest_rate: 0.065,
            min_amount: dec!(10_000),
            image_url: "/images/products/cuenta-ahorro-flexible.webp".to_string(),
        };

        let selection = ProductSelection::from(&product);
        assert_eq!(selection.name, product.name);
        assert_eq!(selection.interest_rate, 0.065);
        assert_eq!(selection.min_amount, dec!(10_000));
    }
}
