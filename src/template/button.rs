use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-defined metadata passed through to the skill server untouched
pub type Extra = Map<String, Value>;

/// Card button.
///
/// The active [`ButtonAction`] variant carries exactly the fields the
/// platform requires for that action, so a typed button can never hold a
/// field that belongs to another action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Button {
    pub label: String,

    #[serde(flatten)]
    pub action: ButtonAction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
}

/// What a button does when tapped; the wire discriminant is `action`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ButtonAction {
    WebLink {
        #[serde(rename = "webLinkUrl")]
        web_link_url: String,
    },
    Message {
        #[serde(rename = "messageText")]
        message_text: String,
    },
    Phone {
        #[serde(rename = "phoneNumber")]
        phone_number: String,
    },
    Block {
        #[serde(rename = "messageText")]
        message_text: String,
        #[serde(rename = "blockId")]
        block_id: String,
    },
    Share,
    Operator,
}

/// Wire names of every action-specific button field
pub const ACTION_FIELDS: [&str; 4] = ["webLinkUrl", "messageText", "phoneNumber", "blockId"];

const WEB_LINK_FIELDS: &[&str] = &["webLinkUrl"];
const MESSAGE_FIELDS: &[&str] = &["messageText"];
const PHONE_FIELDS: &[&str] = &["phoneNumber"];
const BLOCK_FIELDS: &[&str] = &["messageText", "blockId"];
const NO_FIELDS: &[&str] = &[];

impl ButtonAction {
    /// Wire discriminant
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonAction::WebLink { .. } => "webLink",
            ButtonAction::Message { .. } => "message",
            ButtonAction::Phone { .. } => "phone",
            ButtonAction::Block { .. } => "block",
            ButtonAction::Share => "share",
            ButtonAction::Operator => "operator",
        }
    }

    /// Action-specific fields the discriminant `action` requires, or `None`
    /// for an unknown action
    pub fn required_fields(action: &str) -> Option<&'static [&'static str]> {
        match action {
            "webLink" => Some(WEB_LINK_FIELDS),
            "message" => Some(MESSAGE_FIELDS),
            "phone" => Some(PHONE_FIELDS),
            "block" => Some(BLOCK_FIELDS),
            "share" | "operator" => Some(NO_FIELDS),
            _ => None,
        }
    }

    /// All wire discriminants
    pub fn names() -> [&'static str; 6] {
        ["webLink", "message", "phone", "block", "share", "operator"]
    }
}

impl Button {
    fn with_action<S: Into<String>>(label: S, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
            extra: None,
        }
    }

    /// Opens `url` in the in-app browser
    pub fn web_link<L: Into<String>, U: Into<String>>(label: L, url: U) -> Self {
        Self::with_action(label, ButtonAction::WebLink { web_link_url: url.into() })
    }

    /// Sends `message_text` as the user's utterance
    pub fn message<L: Into<String>, M: Into<String>>(label: L, message_text: M) -> Self {
        Self::with_action(label, ButtonAction::Message { message_text: message_text.into() })
    }

    /// Dials `phone_number`
    pub fn phone<L: Into<String>, P: Into<String>>(label: L, phone_number: P) -> Self {
        Self::with_action(label, ButtonAction::Phone { phone_number: phone_number.into() })
    }

    /// Sends `message_text` and routes the conversation to `block_id`
    pub fn block<L, M, B>(label: L, message_text: M, block_id: B) -> Self
    where
        L: Into<String>,
        M: Into<String>,
        B: Into<String>,
    {
        Self::with_action(
            label,
            ButtonAction::Block {
                message_text: message_text.into(),
                block_id: block_id.into(),
            },
        )
    }

    pub fn share<L: Into<String>>(label: L) -> Self {
        Self::with_action(label, ButtonAction::Share)
    }

    /// Hands the conversation to a human operator
    pub fn operator<L: Into<String>>(label: L) -> Self {
        Self::with_action(label, ButtonAction::Operator)
    }

    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extra = Some(extra);
        self
    }
}
