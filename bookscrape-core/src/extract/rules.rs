//! Where each metadata field lives on the product page

use serde::{Deserialize, Serialize};

/// CSS location rules for every extracted field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionRules {
    /// Single node holding the title
    pub title: String,

    /// Every node holding one author name
    pub authors: String,

    /// Description fragments, concatenated in document order
    pub description: String,

    /// Single node holding the publisher
    pub publisher: String,

    /// Single node holding the language display name
    pub language: String,

    /// Single node holding the localized publication date
    pub publication_date: String,

    /// Image element carrying the cover size mapping
    pub cover_image: String,

    /// Attribute with the `{"url": [width, height]}` JSON mapping
    pub cover_image_attribute: String,
}

impl ExtractionRules {
    /// Rules for amazon.com.br product pages
    pub fn amazon_br() -> Self {
        Self {
            title: "#productTitle".to_string(),
            authors: "#bylineInfo .author > a".to_string(),
            description: "#bookDescription_feature_div span:not(.a-expander-prompt)".to_string(),
            publisher: "#rpi-attribute-book_details-publisher .rpi-attribute-value span"
                .to_string(),
            language: "#rpi-attribute-language .rpi-attribute-value span".to_string(),
            publication_date:
                "#rpi-attribute-book_details-publication_date .rpi-attribute-value span"
                    .to_string(),
            cover_image: "#imgBlkFront, #ebooksImgBlkFront, #landingImage".to_string(),
            cover_image_attribute: "data-a-dynamic-image".to_string(),
        }
    }
}

impl Default for ExtractionRules {
    fn default() -> Self {
        Self::amazon_br()
    }
}
