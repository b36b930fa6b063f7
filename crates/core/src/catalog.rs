//! The product catalog and the material filter.
//!
//! The catalog is seeded once and never mutated. Filtering returns borrowed
//! views in catalog order.

use serde::{Deserialize, Serialize};

use crate::types::{Material, MaterialFilter, Price, ProductId};

const IMAGE_EVA: &str = "https://cdn.poehali.dev/projects/f1561795-ee59-4f91-81ab-2a7893fd11fb/files/ad0772fe-c0bb-4356-8c3f-534501a39ecb.jpg";
const IMAGE_LEATHER: &str = "https://cdn.poehali.dev/projects/f1561795-ee59-4f91-81ab-2a7893fd11fb/files/11f08fb9-517d-41c0-b2ba-bdaa25df907c.jpg";
const IMAGE_FELT: &str = "https://cdn.poehali.dev/projects/f1561795-ee59-4f91-81ab-2a7893fd11fb/files/b772d378-b921-4770-a1e0-d2dd30823286.jpg";

/// A purchasable set of car mats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub material: Material,
    pub price: Price,
    /// Display image URL. Rendered as-is, never fetched.
    pub image: String,
    pub description: String,
}

impl Product {
    fn seed(
        id: u32,
        name: &str,
        material: Material,
        price: u64,
        image: &str,
        description: &str,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_owned(),
            material,
            price: Price::new(price),
            image: image.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// The fixed list of products offered by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The store's built-in product range.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![
            Product::seed(
                1,
                "Коврики Premium EVA",
                Material::Eva,
                4500,
                IMAGE_EVA,
                "Водонепроницаемые коврики с рельефной поверхностью",
            ),
            Product::seed(
                2,
                "Коврики Eco Leather",
                Material::EcoLeather,
                5500,
                IMAGE_LEATHER,
                "Премиальные коврики из экокожи с прошивкой",
            ),
            Product::seed(
                3,
                "Коврики Comfort Felt",
                Material::Felt,
                3200,
                IMAGE_FELT,
                "Мягкие ворсовые коврики для комфорта",
            ),
            Product::seed(
                4,
                "Коврики Sport EVA",
                Material::Eva,
                4800,
                IMAGE_EVA,
                "Спортивная серия с усиленными бортами",
            ),
            Product::seed(
                5,
                "Коврики Lux Leather",
                Material::EcoLeather,
                6200,
                IMAGE_LEATHER,
                "Люксовая серия с перфорацией",
            ),
            Product::seed(
                6,
                "Коврики Classic Felt",
                Material::Felt,
                2800,
                IMAGE_FELT,
                "Классические ворсовые коврики",
            ),
        ])
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products passing a typed filter, in catalog order.
    #[must_use]
    pub fn filtered(&self, filter: &MaterialFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.material))
            .collect()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Project a product list by material tab.
///
/// `"all"` returns every product; any other value keeps the products whose
/// material label equals `selected` exactly. Order is preserved and an
/// unmatched selection yields an empty list.
#[must_use]
pub fn filter_by_material<'a>(products: &'a [Product], selected: &str) -> Vec<&'a Product> {
    let filter = MaterialFilter::parse(selected);
    products
        .iter()
        .filter(|p| filter.matches(p.material))
        .collect()
}
