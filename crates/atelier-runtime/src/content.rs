#![forbid(unsafe_code)]

//! Copy and media shown on the page.

use serde::{Deserialize, Serialize};

/// One offered service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub title: String,
    pub description: String,
}

/// One step of the "how we work" FAQ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub title: String,
    pub description: String,
}

/// A lookbook photograph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbookImage {
    pub src: String,
    pub alt: String,
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub services: Vec<ServiceEntry>,
    pub faq: Vec<FaqEntry>,
    pub lookbook: Vec<LookbookImage>,
    pub marquee: Vec<String>,
    pub marquee_icons: Vec<String>,
}

fn service(title: &str, description: &str) -> ServiceEntry {
    ServiceEntry {
        title: title.to_owned(),
        description: description.to_owned(),
    }
}

fn step(title: &str, description: &str) -> FaqEntry {
    FaqEntry {
        title: title.to_owned(),
        description: description.to_owned(),
    }
}

fn image(file: &str, alt: &str) -> LookbookImage {
    LookbookImage {
        src: format!("/images/lookbook/{file}"),
        alt: alt.to_owned(),
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self::studio()
    }
}

impl PageContent {
    /// The studio's published content.
    #[must_use]
    pub fn studio() -> Self {
        Self {
            services: vec![
                service("Consultation", "One-on-one guidance to bring your vision to life."),
                service("Pattern Development", "Expert pattern making for the perfect fit."),
                service("Sample Making", "Transform sketches into tangible prototypes."),
                service("Production", "From small batch to full scale, we handle it all."),
                service("Alterations", "Precision alterations to perfect the fit."),
                service(
                    "Hardware Installation",
                    "Professional installation of eyelets, rivets, grommets, and snaps.",
                ),
            ],
            faq: vec![
                step("Connect", "Share your vision with us."),
                step("Develop", "We create patterns and samples together."),
                step("Produce", "Manufacturing begins with regular updates."),
                step("Deliver", "Final inspection, careful packaging, and delivery."),
            ],
            lookbook: vec![
                image("scarf.jpg", "Elegant scarf design"),
                image("fashion-shoot.webp", "Fashion shoot look"),
                image("custom-garment.jpg", "Custom garment piece"),
                image("celebrity-jacket.jpg", "Celebrity jacket design"),
                image("handcrafted-design.jpg", "Handcrafted design"),
                image("lolita-bell-jeans.jpg", "Lolita bell jeans"),
                image("editorial-fashion.jpg", "Editorial fashion shot"),
                image("fashion-showcase.webp", "Fashion design showcase"),
                image("design-in-progress.png", "Design in progress"),
                image("lolita-jeans.jpg", "Lolita jeans design"),
                image("professional-photoshoot.jpg", "Professional photoshoot"),
                image("tailored-piece.jpg", "Tailored piece"),
            ],
            marquee: [
                "Pattern Development",
                "Sample Making",
                "Small Batch",
                "Full Production",
                "Alteration",
                "Quality Control",
                "Rivets",
                "Grommets",
                "Snaps",
                "Eyelets",
                "Tech Pack",
            ]
            .map(str::to_owned)
            .to_vec(),
            marquee_icons: vec!["◆".to_owned(), "✦".to_owned()],
        }
    }
}
