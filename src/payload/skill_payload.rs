use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Incoming skill request sent by the platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayload {
    pub bot: Bot,
    pub intent: Intent,
    pub action: Action,
    pub user_request: UserRequest,

    #[serde(default)]
    pub contexts: Vec<Value>,

    /// Conversation flow, sent for button and quick-reply triggers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<Flow>,
}

impl SkillPayload {
    /// The user's utterance as delivered to the bot
    pub fn utterance(&self) -> &str {
        &self.user_request.utterance
    }

    /// Bot-scoped user key
    pub fn user_id(&self) -> &str {
        &self.user_request.user.id
    }

    /// Resolved action parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.action.params.as_ref()?.get(name).map(String::as_str)
    }

    pub fn detail_param(&self, name: &str) -> Option<&DetailParam> {
        self.action.detail_params.as_ref()?.get(name)
    }

    /// Knowledge entries matched for the utterance, empty when none
    pub fn knowledges(&self) -> &[Knowledge] {
        self.intent
            .extra
            .as_ref()
            .and_then(|extra| extra.knowledges.as_ref())
            .map(|knowledges| knowledges.mathead_knowledges.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the user added the bot's channel as a friend
    pub fn is_friend(&self) -> bool {
        self.user_request
            .user
            .properties
            .as_ref()
            .and_then(|properties| properties.is_friend)
            .unwrap_or(false)
    }
}

/// Block the utterance was routed to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    pub id: String,
    pub name: String,
}

/// Bot metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bot {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Intent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<IntentExtra>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntentExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledges: Option<Knowledges>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Knowledges {
    #[serde(rename = "matheadKnowledges", alias = "matchedKnowledges", default)]
    pub mathead_knowledges: Vec<Knowledge>,
}

/// Knowledge-base answer matched to the utterance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Knowledge {
    pub answer: String,
    pub question: String,
    pub categories: String,
    pub landing_url: String,
    pub image_url: String,
}

/// User who sent the utterance.
///
/// `id` identifies the user within one bot only; the same person has a
/// different id on another bot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,

    /// Currently always `"botUserKey"`
    #[serde(rename = "type")]
    pub user_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<UserProperties>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProperties {
    /// Channel-scoped user key
    pub plusfriend_user_key: String,

    /// Present only when an app key is configured for the bot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_friend: Option<bool>,
}

/// Conversation flow that produced the utterance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub trigger: Trigger,
    pub last_block: Block,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    pub referrer_block: Block,
}

/// What generated the utterance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    TextInput,
    CardButtonMessage,
    CardButtonBlock,
    ListItemMessage,
    ListItemBlock,
    #[serde(rename = "LISTMENU_MESSAGE")]
    ListMenuMessage,
    #[serde(rename = "LISTMENU_BLOCK")]
    ListMenuBlock,
    QuickreplyButtonMessage,
    QuickreplyButtonBlock,
}

impl TriggerType {
    /// Whether a button or menu tap (rather than typing) produced the utterance
    pub fn is_button(&self) -> bool {
        !matches!(self, TriggerType::TextInput)
    }
}

/// Skill action resolved for the block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_params: Option<HashMap<String, DetailParam>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_extra: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetailParam {
    pub origin: String,
    pub value: String,
    pub group_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRequest {
    /// e.g. `Asia/Seoul`
    pub timezone: String,
    pub block: Block,
    pub utterance: String,
    /// e.g. `ko`
    pub lang: String,
    pub user: User,
}
