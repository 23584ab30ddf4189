//! # Static Catalog
//!
//! Read-only mock data behind the Home feed, the Pharmacy cards and the
//! Product Detail screen. Nothing here is fetched or persisted.
//!
//! ## Product Detail Lookup
//! ```text
//! route param productId ──► Catalog::lookup()
//!                              │
//!                              ├── Some(id) and known ──► that record
//!                              │
//!                              └── None or unknown ─────► default record
//!                                                        ("Azithral 500 tablet")
//! ```
//!
//! A missing match is an expected case, never an error.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::CartLineItem;

/// Id of the fallback record.
pub const DEFAULT_PRODUCT_ID: &str = "default";

const DETAIL_DELIVERY: &str = "Earliest delivery by 10pm, Today";
const DEAL_DELIVERY: &str = "Delivery by tomorrow 11 am";

// =============================================================================
// Product Record
// =============================================================================

/// Everything the Product Detail screen shows for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub manufacturer: String,
    pub image_url: String,
    pub price: Money,
    pub original_price: Money,
    pub discount: String,
    /// "1245 people bought this recently".
    pub people_bought: String,
    pub pack_sizes: Vec<String>,
    pub delivery_time: String,
}

impl ProductRecord {
    /// Builds the line the "Add to cart" button submits.
    ///
    /// `pack_size` defaults to the first listed pack size.
    pub fn to_line_item(&self, pack_size: Option<&str>, quantity: i64) -> CartLineItem {
        let mut line = CartLineItem::new(self.id.as_str(), self.title.as_str(), self.price)
            .with_original_price(self.original_price)
            .with_discount(self.discount.as_str())
            .with_image_url(self.image_url.as_str())
            .with_quantity(quantity);

        if let Some(size) = pack_size.or_else(|| self.pack_sizes.first().map(String::as_str)) {
            line = line.with_pack_size(size);
        }
        line
    }
}

// =============================================================================
// Deal Cards
// =============================================================================

/// A product card in one of the Pharmacy deal carousels.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DealItem {
    /// Catalog-wide product id; also the Product Detail route parameter.
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub discount: Option<String>,
    pub rating: Option<f32>,
    pub rating_count: Option<u32>,
    pub delivery_time: Option<String>,
}

impl DealItem {
    /// Single-unit line, as submitted by the card's "Add to cart".
    ///
    /// A card without an original price is treated as undiscounted.
    pub fn to_line_item(&self) -> CartLineItem {
        let mut line = CartLineItem::new(self.id.as_str(), self.title.as_str(), self.price)
            .with_original_price(self.original_price.unwrap_or(self.price))
            .with_image_url(self.image_url.as_str());

        if let Some(discount) = self.discount.as_deref().filter(|d| !d.is_empty()) {
            line = line.with_discount(discount);
        }
        line
    }
}

/// A titled carousel of deal cards.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DealSection {
    pub title: String,
    pub items: Vec<DealItem>,
}

/// A tile in one of the category grids or Home carousels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub title: String,
    /// Icon key the screen maps to an asset, e.g. "health-plan".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// An entry in the Home "Top brands" strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
}

/// Everything the Home screen lists below the search bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    pub category_cards: Vec<Category>,
    pub health_packages: Vec<Category>,
    pub health_concerns: Vec<Category>,
    pub top_brands: Vec<Brand>,
}

// =============================================================================
// Catalog
// =============================================================================

/// The whole mock catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<ProductRecord>,
    default_product: ProductRecord,
    deal_sections: Vec<DealSection>,
    health_concerns: Vec<Category>,
    popular_categories: Vec<Category>,
    category_cards: Vec<Category>,
    health_packages: Vec<Category>,
    top_brands: Vec<Brand>,
}

impl Catalog {
    /// The catalog shipped with the app.
    pub fn builtin() -> Self {
        Catalog {
            products: builtin_products(),
            default_product: default_product(),
            deal_sections: builtin_deal_sections(),
            health_concerns: categories(&[
                "Diabetes",
                "Heart Care",
                "Stomach Care",
                "Liver Care",
                "Bone, Joint & Muscle",
                "Kidney Care",
                "Derma Care",
                "Respiratory",
                "Eye Care",
            ]),
            popular_categories: categories(&[
                "Vitamins & Supplements",
                "Healthcare Device",
                "Personal Care",
                "Nutritional Drinks",
                "Mega Deals",
                "Sexual Wellness",
                "Skin Care",
                "Summer",
                "Multivitamins",
            ]),
            category_cards: icon_categories(&[
                ("Health Plan", "health-plan"),
                ("Order with Prescription", "prescription"),
                ("Care Plan", "care-plan"),
                ("Pill Reminder", "pill-reminder"),
                ("1 Mg Stores", "store"),
                ("Health Products", "health-products"),
            ]),
            health_packages: icon_categories(&[
                ("Health Concern", "health-concern"),
                ("Health Checkups", "health-checkup"),
                ("Women's Health", "womens-health"),
                ("Men's Health", "mens-health"),
            ]),
            top_brands: builtin_brands(),
        }
    }

    /// Exact lookup, no fallback.
    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        if id == DEFAULT_PRODUCT_ID {
            return Some(&self.default_product);
        }
        self.products.iter().find(|p| p.id == id)
    }

    /// Resolves a Product Detail route parameter, falling back to the
    /// default record when it is absent or unknown.
    pub fn lookup(&self, product_id: Option<&str>) -> &ProductRecord {
        product_id
            .and_then(|id| self.get(id))
            .unwrap_or(&self.default_product)
    }

    pub fn default_product(&self) -> &ProductRecord {
        &self.default_product
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn deal_sections(&self) -> &[DealSection] {
        &self.deal_sections
    }

    /// First deal card with this id in any section.
    pub fn deal(&self, id: &str) -> Option<&DealItem> {
        self.deal_sections
            .iter()
            .flat_map(|s| s.items.iter())
            .find(|d| d.id == id)
    }

    pub fn health_concerns(&self) -> &[Category] {
        &self.health_concerns
    }

    pub fn popular_categories(&self) -> &[Category] {
        &self.popular_categories
    }

    /// Home quick-action cards ("Health Plan", "Order with Prescription", ...).
    pub fn category_cards(&self) -> &[Category] {
        &self.category_cards
    }

    pub fn health_packages(&self) -> &[Category] {
        &self.health_packages
    }

    pub fn top_brands(&self) -> &[Brand] {
        &self.top_brands
    }

    /// The Home screen lists, in display order. Home shares the health
    /// concern grid with the Pharmacy screen.
    pub fn home_feed(&self) -> HomeFeed {
        HomeFeed {
            category_cards: self.category_cards.clone(),
            health_packages: self.health_packages.clone(),
            health_concerns: self.health_concerns.clone(),
            top_brands: self.top_brands.clone(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Builtin Data
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    title: &str,
    subtitle: &str,
    manufacturer: &str,
    image_url: &str,
    price: Money,
    original_price: Money,
    discount: &str,
    bought: u32,
    pack_sizes: [&str; 2],
) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        manufacturer: manufacturer.to_string(),
        image_url: image_url.to_string(),
        price,
        original_price,
        discount: discount.to_string(),
        people_bought: format!("{} people bought this recently", bought),
        pack_sizes: pack_sizes.iter().map(|s| s.to_string()).collect(),
        delivery_time: DETAIL_DELIVERY.to_string(),
    }
}

fn builtin_products() -> Vec<ProductRecord> {
    vec![
        product(
            "1",
            "Cerave Moisturising Cream for dry skin",
            "50 gms",
            "By CeraVe",
            "https://i.postimg.cc/P5gqjH1M/cerave.png",
            Money::from_rupees(599),
            Money::from_rupees(699),
            "15% off",
            1245,
            ["50 gms", "100 gms"],
        ),
        product(
            "2",
            "La Shield SPF40 Sunscreen",
            "50 gms",
            "By La Shield",
            "https://i.postimg.cc/tJ0M6NDz/lashield.png",
            Money::from_rupees(689),
            Money::from_rupees(815),
            "15% off",
            876,
            ["50 gms", "100 gms"],
        ),
        product(
            "3",
            "Cetaphil Moisturising Lotion",
            "100 ml bottle",
            "By Cetaphil",
            "https://i.postimg.cc/mkcT27Yy/cetaphil.png",
            Money::from_rupees(511),
            Money::from_rupees(549),
            "7% off",
            1023,
            ["100 ml", "200 ml"],
        ),
        product(
            "4",
            "Volini Spray for Sprain",
            "100 ml spray",
            "By Volini",
            "https://i.postimg.cc/L8p5f4f7/volini.png",
            Money::from_rupees(150),
            Money::from_rupees(160),
            "6% off",
            789,
            ["100 ml", "50 ml"],
        ),
        product(
            "5",
            "Crocin Pain Relief Tablet",
            "15 tablets in a strip",
            "By Crocin",
            "https://i.postimg.cc/W3s2Ld38/crocin.png",
            Money::from_rupees(50),
            Money::from_rupees(55),
            "9% off",
            1567,
            ["15 tablets", "10 tablets"],
        ),
    ]
}

fn default_product() -> ProductRecord {
    product(
        DEFAULT_PRODUCT_ID,
        "Azithral 500 tablet",
        "5 tablets in a strip",
        "By Alembic Pharmaceuticals Ltd",
        "https://i.postimg.cc/P5gqjH1M/cerave.png",
        Money::from_rupees(123),
        Money::from_major_minor(131, 94),
        "6% off",
        2051,
        ["5 tablets", "3 tablets"],
    )
}

#[allow(clippy::too_many_arguments)]
fn deal(
    id: &str,
    title: &str,
    image_url: &str,
    price_rupees: i64,
    original_rupees: i64,
    discount: &str,
    rating: f32,
    rating_count: u32,
) -> DealItem {
    DealItem {
        id: id.to_string(),
        title: title.to_string(),
        image_url: image_url.to_string(),
        price: Money::from_rupees(price_rupees),
        original_price: Some(Money::from_rupees(original_rupees)),
        discount: Some(discount.to_string()),
        rating: Some(rating),
        rating_count: Some(rating_count),
        delivery_time: Some(DEAL_DELIVERY.to_string()),
    }
}

fn builtin_deal_sections() -> Vec<DealSection> {
    const VOLINI: &str = "https://i.postimg.cc/L8p5f4f7/volini.png";
    const CROCIN: &str = "https://i.postimg.cc/W3s2Ld38/crocin.png";
    const SARIDON: &str = "https://i.postimg.cc/sXyVpWvM/saridon.png";

    let crocin = deal("5", "Crocin Pain Relief Tablet", CROCIN, 50, 55, "9% off", 4.5, 12);

    vec![
        DealSection {
            title: "Best deals in skin care".to_string(),
            items: vec![
                deal(
                    "1",
                    "Cerave Moisturising Cream for dry skin",
                    "https://i.postimg.cc/P5gqjH1M/cerave.png",
                    599,
                    699,
                    "15% off",
                    5.0,
                    11,
                ),
                deal(
                    "2",
                    "La Shield SPF40 Sunscreen",
                    "https://i.postimg.cc/tJ0M6NDz/lashield.png",
                    689,
                    815,
                    "15% off",
                    4.0,
                    8,
                ),
                deal(
                    "3",
                    "Cetaphil Moisturising Lotion 100 ml bottle",
                    "https://i.postimg.cc/mkcT27Yy/cetaphil.png",
                    511,
                    549,
                    "7% off",
                    4.5,
                    9,
                ),
            ],
        },
        DealSection {
            title: "Top deals in Pain relief and cough cold".to_string(),
            items: vec![
                deal("4", "Volini Spray for Sprain", VOLINI, 150, 160, "6% off", 4.0, 7),
                crocin.clone(),
                deal("6", "Saridon Advance Tablet", SARIDON, 40, 45, "11% off", 4.0, 8),
            ],
        },
        DealSection {
            title: "Everyday Genuine Medicine".to_string(),
            items: vec![
                deal(
                    "7",
                    "Otrivin Oxy Fast Relief Nasal Spray",
                    VOLINI,
                    120,
                    135,
                    "11% off",
                    4.2,
                    15,
                ),
                deal("8", "Dolo 650 Tablet", CROCIN, 30, 35, "14% off", 4.8, 42),
                deal("9", "Dabur Chyawanprash 500g", SARIDON, 290, 325, "11% off", 4.5, 28),
            ],
        },
        DealSection {
            title: "Trusted Travel Essentials".to_string(),
            items: vec![
                deal("10", "ENO Digestive Powder Sachets", VOLINI, 85, 95, "11% off", 4.3, 19),
                crocin,
                deal("11", "Dettol Hand Sanitizer 50ml", SARIDON, 75, 85, "12% off", 4.4, 23),
                deal("12", "Colgate MaxFresh Toothpaste", SARIDON, 110, 120, "8% off", 4.2, 17),
            ],
        },
    ]
}

fn categories(titles: &[&str]) -> Vec<Category> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| Category {
            id: (i + 1).to_string(),
            title: title.to_string(),
            icon: None,
        })
        .collect()
}

fn icon_categories(entries: &[(&str, &str)]) -> Vec<Category> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (title, icon))| Category {
            id: (i + 1).to_string(),
            title: title.to_string(),
            icon: Some(icon.to_string()),
        })
        .collect()
}

fn builtin_brands() -> Vec<Brand> {
    [
        ("Mamaearth", "https://miro.medium.com/v2/resize:fit:1400/0*UwLrJr_aQ9tI0PC-.png"),
        ("Wellbeing Nutrition", "https://m.media-amazon.com/images/S/al-eu-726f4d26-7fdb/64a5b29c-aa82-4aab-af22-c8d871bc9bc7.png"),
        ("The Derma Co", "https://airiamall.com/wp-content/uploads/2025/01/The-Derma-Co-Airia-Mall-Gurugram.png"),
        ("Dr. Vaidya's", "https://panel.gokwik.co/storage/app/public/images/screenshot_2024-08-06_at_11.09.15_am-removebg-preview_1722922774.png"),
        ("Himalaya", "https://zerocreativity0.wordpress.com/wp-content/uploads/2017/01/himalaya-logo.jpg?w=736"),
        ("Cetaphil", "https://www.cetaphil.com/on/demandware.static/Sites-Galderma-US-Site/-/default/dw96f659a6/images/Cetaphil_Logo_285.png"),
        ("Dettol", "https://images.squarespace-cdn.com/content/v1/66ad47450527ea3ca863ff9a/1728989279347-V5O75ZEDCNT6UX6XSUTH/Dettol-logo-2010.png"),
        ("Tata 1mg", "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTab9L_gCurShRMjsv-x7sgO5yVlfpS1DvcMg&s"),
        ("mCaffeine", "https://www.amicuscapital.in/wp-content/uploads/2020/09/mCaffeine-Logo-1.png"),
        ("Abbott", "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a4/Abbott_Laboratories_logo.svg/1024px-Abbott_Laboratories_logo.svg.png"),
        ("Dabur", "https://download.logo.wine/logo/Dabur/Dabur-Logo.wine.png"),
        ("Protinex", "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcS15_yCScE3pocRQ_4x4JzT477S762pDlJU9w&s"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (name, logo))| Brand {
        id: (i + 1).to_string(),
        name: name.to_string(),
        logo_url: Some(logo.to_string()),
    })
    .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
