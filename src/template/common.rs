use serde::{Deserialize, Serialize};

/// Device class that opens a [`Link`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Pc,
    Mobile,
}

/// External link with per-device targets.
///
/// `web` takes precedence over `pc` and `mobile` whenever it is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

impl Link {
    /// Link that opens the same page everywhere
    pub fn web<S: Into<String>>(url: S) -> Self {
        Self {
            web: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_pc<S: Into<String>>(mut self, url: S) -> Self {
        self.pc = Some(url.into());
        self
    }

    pub fn with_mobile<S: Into<String>>(mut self, url: S) -> Self {
        self.mobile = Some(url.into());
        self
    }

    /// URL the platform opens on `device`
    pub fn resolve(&self, device: Device) -> Option<&str> {
        if let Some(web) = &self.web {
            return Some(web);
        }
        match device {
            Device::Pc => self.pc.as_deref(),
            Device::Mobile => self.mobile.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pc.is_none() && self.mobile.is_none() && self.web.is_none()
    }
}

/// Card thumbnail image
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub image_url: String,

    /// Read aloud by screen readers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    /// Opened when the image is tapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// `true` shows the image square (1:1) with its original ratio;
    /// `false` or absent crops it to a wide 2:1 area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_ratio: Option<bool>,
}

impl Thumbnail {
    pub fn new<S: Into<String>>(image_url: S) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: None,
            link: None,
            fixed_ratio: None,
        }
    }

    pub fn with_alt_text<S: Into<String>>(mut self, alt_text: S) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn with_fixed_ratio(mut self, fixed_ratio: bool) -> Self {
        self.fixed_ratio = Some(fixed_ratio);
        self
    }

    /// Square display; absent means wide
    pub fn is_square(&self) -> bool {
        self.fixed_ratio.unwrap_or(false)
    }
}

/// Chat bot profile shown on commerce cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub nickname: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Profile {
    pub fn new<S: Into<String>>(nickname: S) -> Self {
        Self {
            nickname: nickname.into(),
            image_url: None,
        }
    }

    pub fn with_image_url<S: Into<String>>(mut self, image_url: S) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Button arrangement on a card
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ButtonLayout {
    /// Stacked, up to 3 buttons
    #[default]
    Vertical,
    /// Side by side, up to 2 buttons
    Horizontal,
}

impl ButtonLayout {
    /// Most buttons the layout can show
    pub fn capacity(&self) -> usize {
        match self {
            ButtonLayout::Vertical => 3,
            ButtonLayout::Horizontal => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonLayout::Vertical => "vertical",
            ButtonLayout::Horizontal => "horizontal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "vertical" => Some(ButtonLayout::Vertical),
            "horizontal" => Some(ButtonLayout::Horizontal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_link_web_takes_precedence() {
        let link = Link::web("https://web.example.com")
            .with_pc("https://pc.example.com")
            .with_mobile("https://m.example.com");

        assert_eq!(link.resolve(Device::Pc), Some("https://web.example.com"));
        assert_eq!(link.resolve(Device::Mobile), Some("https://web.example.com"));

        let link = Link::default().with_mobile("https://m.example.com");
        assert_eq!(link.resolve(Device::Mobile), Some("https://m.example.com"));
        assert_eq!(link.resolve(Device::Pc), None);
    }

    #[test]
    fn test_thumbnail_wire_shape() {
        let thumbnail = Thumbnail::new("https://example.com/a.png").with_fixed_ratio(true);
        let value = serde_json::to_value(&thumbnail).unwrap();

        assert_eq!(
            value,
            json!({"imageUrl": "https://example.com/a.png", "fixedRatio": true})
        );
        assert!(thumbnail.is_square());
        assert!(!Thumbnail::new("https://example.com/b.png").is_square());
    }

    #[test]
    fn test_button_layout_capacity() {
        assert_eq!(ButtonLayout::default(), ButtonLayout::Vertical);
        assert_eq!(ButtonLayout::Vertical.capacity(), 3);
        assert_eq!(ButtonLayout::Horizontal.capacity(), 2);
        assert_eq!(ButtonLayout::parse("horizontal"), Some(ButtonLayout::Horizontal));
        assert_eq!(ButtonLayout::parse("diagonal"), None);
        assert_eq!(serde_json::to_value(ButtonLayout::Horizontal).unwrap(), json!("horizontal"));
    }
}
