use serde::{Deserialize, Serialize};

use crate::template::button::{Button, Extra};
use crate::template::carousel::Carousel;
use crate::template::common::{ButtonLayout, Link, Profile, Thumbnail};

/// Plain text bubble
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimpleText {
    pub text: String,
}

impl SimpleText {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

/// Single image bubble
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleImage {
    pub image_url: String,
    pub alt_text: String,
}

impl SimpleImage {
    pub fn new<U: Into<String>, A: Into<String>>(image_url: U, alt_text: A) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Text card with buttons.
///
/// A card is either titled or described; at least one of `title` and
/// `description` must be present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub buttons: Vec<Button>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_layout: Option<ButtonLayout>,
}

impl TextCard {
    pub fn titled<S: Into<String>>(title: S, buttons: Vec<Button>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            buttons,
            button_layout: None,
        }
    }

    pub fn described<S: Into<String>>(description: S, buttons: Vec<Button>) -> Self {
        Self {
            title: None,
            description: Some(description.into()),
            buttons,
            button_layout: None,
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_layout(mut self, layout: ButtonLayout) -> Self {
        self.button_layout = Some(layout);
        self
    }
}

/// Card with a thumbnail image and optional buttons
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasicCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub thumbnail: Thumbnail,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_layout: Option<ButtonLayout>,
}

impl BasicCard {
    pub fn new(thumbnail: Thumbnail) -> Self {
        Self {
            title: None,
            description: None,
            thumbnail,
            buttons: Vec::new(),
            button_layout: None,
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_layout(mut self, layout: ButtonLayout) -> Self {
        self.button_layout = Some(layout);
        self
    }
}

/// Product card with price information
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommerceCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub description: String,

    pub price: u64,

    /// Only `"won"` is supported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u64>,

    /// Percent, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<u64>,

    /// Exactly one thumbnail
    pub thumbnails: Vec<Thumbnail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    pub buttons: Vec<Button>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_layout: Option<ButtonLayout>,
}

impl CommerceCard {
    pub fn new<S: Into<String>>(description: S, price: u64, thumbnail: Thumbnail, buttons: Vec<Button>) -> Self {
        Self {
            title: None,
            description: description.into(),
            price,
            currency: None,
            discount: None,
            discount_rate: None,
            discounted_price: None,
            thumbnails: vec![thumbnail],
            profile: None,
            buttons,
            button_layout: None,
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_discount(mut self, discount: u64) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_discount_rate(mut self, rate: u64, discounted_price: u64) -> Self {
        self.discount_rate = Some(rate);
        self.discounted_price = Some(discounted_price);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_layout(mut self, layout: ButtonLayout) -> Self {
        self.button_layout = Some(layout);
        self
    }
}

/// Header row of a [`ListCard`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListItemHeader {
    pub title: String,
}

/// What a list row does when tapped
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ListItemAction {
    Block,
    Message,
}

impl ListItemAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListItemAction::Block => "block",
            ListItemAction::Message => "message",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "block" => Some(ListItemAction::Block),
            "message" => Some(ListItemAction::Message),
            _ => None,
        }
    }
}

/// One row of a [`ListCard`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ListItemAction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
}

impl ListItem {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            description: None,
            image_url: None,
            link: None,
            action: None,
            block_id: None,
            message_text: None,
            extra: None,
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url<S: Into<String>>(mut self, image_url: S) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    /// Route to `block_id` when tapped
    pub fn with_block<S: Into<String>>(mut self, block_id: S) -> Self {
        self.action = Some(ListItemAction::Block);
        self.block_id = Some(block_id.into());
        self
    }

    /// Send `message_text` when tapped
    pub fn with_message<S: Into<String>>(mut self, message_text: S) -> Self {
        self.action = Some(ListItemAction::Message);
        self.message_text = Some(message_text.into());
        self
    }

    /// Rows with a link or an action suppress the forward icon
    pub fn is_interactive(&self) -> bool {
        self.link.is_some() || self.action.is_some()
    }
}

/// Titled list of up to five rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListCard {
    pub header: ListItemHeader,

    pub items: Vec<ListItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_layout: Option<ButtonLayout>,
}

impl ListCard {
    pub fn new<S: Into<String>>(title: S, items: Vec<ListItem>) -> Self {
        Self {
            header: ListItemHeader { title: title.into() },
            items,
            buttons: Vec::new(),
            button_layout: None,
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = buttons;
        self
    }
}

/// One displayable unit of a response, keyed by its kind on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Output {
    SimpleText(SimpleText),
    SimpleImage(SimpleImage),
    TextCard(TextCard),
    BasicCard(BasicCard),
    CommerceCard(CommerceCard),
    ListCard(ListCard),
    Carousel(Carousel),
}

/// Wire keys of every output kind
pub const OUTPUT_KINDS: [&str; 7] = [
    "simpleText",
    "simpleImage",
    "textCard",
    "basicCard",
    "commerceCard",
    "listCard",
    "carousel",
];

impl Output {
    pub fn kind(&self) -> &'static str {
        match self {
            Output::SimpleText(_) => "simpleText",
            Output::SimpleImage(_) => "simpleImage",
            Output::TextCard(_) => "textCard",
            Output::BasicCard(_) => "basicCard",
            Output::CommerceCard(_) => "commerceCard",
            Output::ListCard(_) => "listCard",
            Output::Carousel(_) => "carousel",
        }
    }

    /// Whether the output shows a standalone image
    pub fn is_image_bearing(&self) -> bool {
        matches!(
            self,
            Output::SimpleImage(_) | Output::BasicCard(_) | Output::CommerceCard(_)
        )
    }

    pub fn text<S: Into<String>>(text: S) -> Self {
        Output::SimpleText(SimpleText::new(text))
    }

    pub fn image<U: Into<String>, A: Into<String>>(image_url: U, alt_text: A) -> Self {
        Output::SimpleImage(SimpleImage::new(image_url, alt_text))
    }
}

impl From<SimpleText> for Output {
    fn from(value: SimpleText) -> Self {
        Output::SimpleText(value)
    }
}

impl From<SimpleImage> for Output {
    fn from(value: SimpleImage) -> Self {
        Output::SimpleImage(value)
    }
}

impl From<TextCard> for Output {
    fn from(value: TextCard) -> Self {
        Output::TextCard(value)
    }
}

impl From<BasicCard> for Output {
    fn from(value: BasicCard) -> Self {
        Output::BasicCard(value)
    }
}

impl From<CommerceCard> for Output {
    fn from(value: CommerceCard) -> Self {
        Output::CommerceCard(value)
    }
}

impl From<ListCard> for Output {
    fn from(value: ListCard) -> Self {
        Output::ListCard(value)
    }
}

impl From<Carousel> for Output {
    fn from(value: Carousel) -> Self {
        Output::Carousel(value)
    }
}
