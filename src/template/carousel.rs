use serde::{Deserialize, Serialize};

use crate::template::common::Thumbnail;
use crate::template::outputs::{BasicCard, CommerceCard, ListCard, TextCard};

/// Cover shown before the first carousel item.
///
/// `title` must stay on one line and `description` on at most two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselHeader {
    pub title: String,
    pub description: String,
    pub thumbnail: Thumbnail,
}

impl CarouselHeader {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, description: D, thumbnail: Thumbnail) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            thumbnail,
        }
    }
}

/// Item kind declared by a carousel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CarouselType {
    BasicCard,
    CommerceCard,
    TextCard,
    ListCard,
}

impl CarouselType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarouselType::BasicCard => "basicCard",
            CarouselType::CommerceCard => "commerceCard",
            CarouselType::TextCard => "textCard",
            CarouselType::ListCard => "listCard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "basicCard" => Some(CarouselType::BasicCard),
            "commerceCard" => Some(CarouselType::CommerceCard),
            "textCard" => Some(CarouselType::TextCard),
            "listCard" => Some(CarouselType::ListCard),
            _ => None,
        }
    }

    /// Only commerce carousels may carry a header
    pub fn allows_header(&self) -> bool {
        matches!(self, CarouselType::CommerceCard)
    }
}

/// Same-kind items; on the wire `{"type": <kind>, "items": [...]}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "items", rename_all = "camelCase")]
pub enum CarouselItems {
    BasicCard(Vec<BasicCard>),
    CommerceCard(Vec<CommerceCard>),
    TextCard(Vec<TextCard>),
    ListCard(Vec<ListCard>),
}

impl CarouselItems {
    pub fn carousel_type(&self) -> CarouselType {
        match self {
            CarouselItems::BasicCard(_) => CarouselType::BasicCard,
            CarouselItems::CommerceCard(_) => CarouselType::CommerceCard,
            CarouselItems::TextCard(_) => CarouselType::TextCard,
            CarouselItems::ListCard(_) => CarouselType::ListCard,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CarouselItems::BasicCard(items) => items.len(),
            CarouselItems::CommerceCard(items) => items.len(),
            CarouselItems::TextCard(items) => items.len(),
            CarouselItems::ListCard(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Horizontally swipeable group of same-kind cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Carousel {
    #[serde(flatten)]
    pub items: CarouselItems,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<CarouselHeader>,
}

impl Carousel {
    pub fn new(items: CarouselItems) -> Self {
        Self { items, header: None }
    }

    pub fn with_header(mut self, header: CarouselHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn carousel_type(&self) -> CarouselType {
        self.items.carousel_type()
    }
}
