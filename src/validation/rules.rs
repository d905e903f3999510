/*!
 * Cross-field rules applied where the constrained fields meet: forward icon
 * suppression, thumbnail ratio uniformity and layout button capacity.
 */

use serde_json::{json, Value};

use crate::error::{Violation, ViolationKind};
use crate::template::common::ButtonLayout;

/// Facts gathered while walking a response that decide the forward icon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardableFacts {
    pub carousels: usize,
    pub image_bearing_outputs: usize,
    pub buttons: usize,
    pub interactive_list_items: usize,
}

/// Why the platform cannot show the forward icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    Carousel,
    MultipleImages,
    Buttons,
    InteractiveListItem,
}

impl Suppression {
    pub fn reason(&self) -> &'static str {
        match self {
            Suppression::Carousel => "response contains a carousel",
            Suppression::MultipleImages => "response contains more than one image output",
            Suppression::Buttons => "response contains buttons",
            Suppression::InteractiveListItem => "a list item carries a link or an action",
        }
    }
}

impl ForwardableFacts {
    /// First rule that forbids the forward icon, if any
    pub fn suppression(&self) -> Option<Suppression> {
        if self.carousels > 0 {
            Some(Suppression::Carousel)
        } else if self.image_bearing_outputs > 1 {
            Some(Suppression::MultipleImages)
        } else if self.buttons > 0 {
            Some(Suppression::Buttons)
        } else if self.interactive_list_items > 0 {
            Some(Suppression::InteractiveListItem)
        } else {
            None
        }
    }

    /// Resolve the caller's request against the content shape
    pub fn resolve(&self, requested: Option<bool>) -> bool {
        requested.unwrap_or(false) && self.suppression().is_none()
    }
}

/// All thumbnails of one group must be square or all wide.
///
/// `ratios` holds `(index, fixed_ratio)` pairs; indices that disagree with
/// the first entry are reported.
pub fn check_ratio_uniformity(group_path: &str, ratios: &[(usize, bool)]) -> Option<Violation> {
    let (first_index, first_ratio) = *ratios.first()?;

    let offending: Vec<usize> = ratios
        .iter()
        .filter(|(_, ratio)| *ratio != first_ratio)
        .map(|(index, _)| *index)
        .collect();

    if offending.is_empty() {
        return None;
    }

    let shape = |square: bool| if square { "square (fixedRatio: true)" } else { "wide (fixedRatio: false)" };
    let indices = offending
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Some(
        Violation::new(
            ViolationKind::InconsistentRatio,
            group_path,
            "Grouped thumbnails mix square and wide ratios",
            format!("every thumbnail {} like item {}", shape(first_ratio), first_index),
            json!(offending),
        )
        .with_context(format!("offending indices: {}", indices)),
    )
}

/// Number of buttons a card can show given its layout and thumbnail ratio
pub fn button_capacity(layout: ButtonLayout, square_thumbnail: bool) -> usize {
    if square_thumbnail {
        layout.capacity().min(ButtonLayout::Horizontal.capacity())
    } else {
        layout.capacity()
    }
}

/// Report buttons beyond what the layout can show
pub fn check_button_capacity(
    buttons_path: &str,
    count: usize,
    layout: ButtonLayout,
    square_thumbnail: bool,
) -> Option<Violation> {
    let capacity = button_capacity(layout, square_thumbnail);
    if count <= capacity {
        return None;
    }

    let context = if square_thumbnail && capacity < layout.capacity() {
        format!("{} layout with a fixedRatio thumbnail", layout.as_str())
    } else {
        format!("{} layout", layout.as_str())
    };

    Some(
        Violation::new(
            ViolationKind::ButtonCountExceeded,
            buttons_path,
            format!("Too many buttons for the layout ({} > {})", count, capacity),
            format!("at most {} buttons", capacity),
            Value::from(count),
        )
        .with_context(context),
    )
}
