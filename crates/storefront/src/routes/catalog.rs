//! Catalog grid and material tabs.

use askama::Template;
use askama_web::WebTemplate;
use automats_core::{ALL_MATERIALS, Material, MaterialFilter, Product};
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone, Debug)]
pub struct ProductView {
    pub id: u32,
    pub name: String,
    pub material: &'static str,
    pub price: String,
    pub image: String,
    pub description: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_u32(),
            name: product.name.clone(),
            material: product.material.label(),
            price: product.price.to_string(),
            image: product.image.clone(),
            description: product.description.clone(),
        }
    }
}

/// A material filter tab.
#[derive(Clone, Debug)]
pub struct TabView {
    pub label: &'static str,
    /// Percent-encoded selection for query strings.
    pub query: String,
    pub active: bool,
}

/// Tab caption for a material. Felt gets the short form.
const fn tab_label(material: Material) -> &'static str {
    match material {
        Material::Felt => "Войлок",
        other => other.label(),
    }
}

/// The "all" tab followed by one tab per material.
#[must_use]
pub fn tabs(selected: &MaterialFilter) -> Vec<TabView> {
    let all = TabView {
        label: "Все",
        query: ALL_MATERIALS.to_string(),
        active: *selected == MaterialFilter::All,
    };

    std::iter::once(all)
        .chain(Material::ALL.into_iter().map(|material| TabView {
            label: tab_label(material),
            query: urlencoding::encode(material.label()).into_owned(),
            active: *selected == MaterialFilter::Only(material),
        }))
        .collect()
}

/// Material selection query (`?material=EVA`). Missing means all.
#[derive(Debug, Default, Deserialize)]
pub struct MaterialQuery {
    pub material: Option<String>,
}

impl MaterialQuery {
    /// The typed filter for this query.
    #[must_use]
    pub fn filter(&self) -> MaterialFilter {
        self.material
            .as_deref()
            .map_or(MaterialFilter::All, MaterialFilter::parse)
    }
}

/// Tabs and product cards for one selection.
#[derive(Clone, Debug)]
pub struct CatalogView {
    /// Raw selection, carried by add-to-cart forms so a plain submit
    /// returns to the same tab.
    pub selected: String,
    pub tabs: Vec<TabView>,
    pub products: Vec<ProductView>,
}

impl CatalogView {
    /// Project the catalog through a filter.
    #[must_use]
    pub fn build(state: &AppState, filter: &MaterialFilter) -> Self {
        Self {
            selected: filter.as_str().to_owned(),
            tabs: tabs(filter),
            products: state
                .catalog()
                .filtered(filter)
                .into_iter()
                .map(ProductView::from)
                .collect(),
        }
    }
}

/// Product grid fragment template (for HTMX tab switches).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub catalog: CatalogView,
}

/// Render the product grid for the selected material.
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<MaterialQuery>,
) -> ProductGridTemplate {
    let filter = query.filter();
    tracing::debug!(material = filter.as_str(), "Filtering catalog");

    ProductGridTemplate {
        catalog: CatalogView::build(&state, &filter),
    }
}

/// Home page location showing the catalog on the given tab.
///
/// The "all" tab and a missing selection both map to the bare anchor.
#[must_use]
pub fn catalog_location(material: Option<&str>) -> String {
    match material {
        Some(selected) if !selected.is_empty() && selected != ALL_MATERIALS => {
            format!("/?material={}#catalog", urlencoding::encode(selected))
        }
        _ => "/#catalog".to_string(),
    }
}
