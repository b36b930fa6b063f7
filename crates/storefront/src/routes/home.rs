//! Home page route handler.
//!
//! The single page carries every section of the shop: hero, materials,
//! catalog, delivery and payment, reviews and contacts.

use askama::Template;
use askama_web::WebTemplate;
use automats_core::{Material, Review};
use axum::extract::{Query, State};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::CspNonce;
use crate::models::load_cart;
use crate::routes::catalog::{CatalogView, MaterialQuery};
use crate::state::AppState;

// =============================================================================
// Static Content
// =============================================================================

/// Hero banner copy.
#[derive(Clone, Debug)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_text: &'static str,
    pub button_url: &'static str,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Премиальные автоковрики для вашего авто",
            subtitle: "EVA, кожзам, автовойлок — выберите идеальную защиту для салона",
            button_text: "Выбрать коврики",
            button_url: "#catalog",
        }
    }
}

/// One card of the materials explainer.
#[derive(Clone, Debug)]
pub struct MaterialCard {
    pub title: &'static str,
    pub tagline: &'static str,
    pub body: &'static str,
}

impl From<Material> for MaterialCard {
    fn from(material: Material) -> Self {
        match material {
            Material::Eva => Self {
                title: "EVA материал",
                tagline: "Водонепроницаемый и прочный",
                body: "Идеален для защиты от грязи, воды и снега. Легко моется и служит долгие годы.",
            },
            Material::EcoLeather => Self {
                title: "Кожзам",
                tagline: "Премиальный внешний вид",
                body: "Экокожа придаёт салону роскошный вид. Прочная прошивка и стильный дизайн.",
            },
            Material::Felt => Self {
                title: "Автовойлок",
                tagline: "Мягкость и комфорт",
                body: "Ворсовая поверхность создаёт уют. Отлично задерживает пыль и грязь.",
            },
        }
    }
}

/// A titled list of short facts (delivery, payment).
#[derive(Clone, Debug)]
pub struct InfoCard {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// Delivery and payment terms.
pub static DELIVERY_INFO: [InfoCard; 2] = [
    InfoCard {
        title: "Доставка",
        lines: &[
            "По Москве — бесплатно при заказе от 5000 ₽",
            "По России — СДЭК, Почта России",
            "Срок доставки — 2-7 дней",
        ],
    },
    InfoCard {
        title: "Оплата",
        lines: &[
            "Банковские карты (Visa, MasterCard, Mir)",
            "Наличные при получении",
            "Безопасная оплата",
        ],
    },
];

/// Store contact details.
#[derive(Clone, Debug)]
pub struct Contacts {
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
}

impl Contacts {
    /// `tel:` link target with formatting stripped.
    #[must_use]
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

/// The shop's contact block.
pub const CONTACTS: Contacts = Contacts {
    phone: "+7 (495) 123-45-67",
    email: "info@automats.ru",
    address: "Москва, ул. Автомобильная, 1",
};

// =============================================================================
// Review Data
// =============================================================================

/// A customer review for display on the homepage.
#[derive(Clone, Debug)]
pub struct ReviewView {
    pub author: String,
    pub stars: String,
    pub rating_label: String,
    pub text: String,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            author: review.author.clone(),
            stars: "★".repeat(usize::from(review.rating.stars())),
            rating_label: review.rating.to_string(),
            text: review.text.clone(),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub hero: Hero,
    pub materials: Vec<MaterialCard>,
    pub catalog: CatalogView,
    pub delivery: Vec<InfoCard>,
    pub reviews: Vec<ReviewView>,
    pub contacts: Contacts,
    pub cart_count: u32,
    pub nonce: String,
}

/// Display the home page.
#[instrument(skip(state, session, nonce))]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
    CspNonce(nonce): CspNonce,
    Query(query): Query<MaterialQuery>,
) -> Result<HomeTemplate> {
    let cart = load_cart(&session).await?;

    Ok(HomeTemplate {
        hero: Hero::default(),
        materials: Material::ALL.into_iter().map(MaterialCard::from).collect(),
        catalog: CatalogView::build(&state, &query.filter()),
        delivery: DELIVERY_INFO.to_vec(),
        reviews: state.reviews().iter().map(ReviewView::from).collect(),
        contacts: CONTACTS,
        cart_count: cart.count(),
        nonce,
    })
}
