//! In-memory catalog repository with the seeded commercial products.

use async_trait::async_trait;
use rust_decimal_macros::dec;

use crate::domain::entities::{Product, ProductType};
use crate::domain::repositories::{ProductFilter, ProductRepository};
use crate::error::AppError;

/// Catalog backed by a fixed in-memory product list.
///
/// The commercial catalog is small and changes through deployments, not at
/// runtime, so it ships as seed data instead of a database table.
pub struct MemoryProductRepository {
    products: Vec<Product>,
}

impl MemoryProductRepository {
    /// Creates a repository over an explicit product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Creates a repository seeded with [`default_catalog`].
    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog())
    }
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(name) = &filter.name
        && !product.name.to_lowercase().contains(&name.to_lowercase())
    {
        return false;
    }

    if let Some(product_type) = filter.product_type
        && product.product_type != product_type
    {
        return false;
    }

    true
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn search(
        &self,
        filter: &ProductFilter,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, AppError> {
        Ok(self
            .products
            .iter()
            .filter(|product| matches(product, filter))
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<i64, AppError> {
        Ok(self
            .products
            .iter()
            .filter(|product| matches(product, filter))
            .count() as i64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, AppError> {
        Ok(self
            .products
            .iter()
            .find(|product| product.id == id)
            .cloned())
    }
}

/// The seeded commercial catalog.
pub fn default_catalog() -> Vec<Product> {
    let seed = [
        (
            "cuenta-ahorro-flexible",
            "Cuenta de Ahorro Flexible",
            ProductType::Ahorro,
            "Cuenta sin cuota de manejo para ahorrar a tu ritmo, con disponibilidad inmediata.",
            0.065,
            dec!(10_000),
        ),
        (
            "cuenta-ahorro-joven",
            "Cuenta de Ahorro Joven",
            ProductType::Ahorro,
            "Pensada para menores de 25 años: cero costos y retiros ilimitados.",
            0.055,
            dec!(10_000),
        ),
        (
            "cuenta-ahorro-premium",
            "Cuenta de Ahorro Premium",
            ProductType::Ahorro,
            "Tasa preferencial para saldos altos y atención prioritaria.",
            0.075,
            dec!(200_000),
        ),
        (
            "ahorro-programado-meta",
            "Ahorro Programado Meta",
            ProductType::Programado,
            "Aportes mensuales automáticos hacia la meta que tú defines.",
            0.082,
            dec!(50_000),
        ),
        (
            "ahorro-programado-vivienda",
            "Ahorro Programado Vivienda",
            ProductType::Programado,
            "Construye la cuota inicial de tu casa con aportes disciplinados.",
            0.09,
            dec!(100_000),
        ),
        (
            "cdt-digital-90",
            "CDT Digital 90 días",
            ProductType::Inversion,
            "Certificado de depósito a término digital, renovable cada 90 días.",
            0.105,
            dec!(500_000),
        ),
        (
            "fondo-inversion-crecimiento",
            "Fondo de Inversión Crecimiento",
            ProductType::Inversion,
            "Portafolio diversificado de mediano plazo administrado por expertos.",
            0.12,
            dec!(1_000_000),
        ),
    ];

    seed.into_iter()
        .map(
            |(id, name, product_type, description, interest_rate, min_amount)| Product {
                id: id.to_string(),
                name: name.to_string(),
                product_type,
                description: description.to_string(),
                interest_rate,
                min_amount,
                image_url: format!("/images/products/{id}.webp"),
            },
        )
        .collect()
}
