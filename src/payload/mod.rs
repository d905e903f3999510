pub mod payload_parser;
pub mod skill_payload;

pub use payload_parser::PayloadParser;
pub use skill_payload::{
    Action, Block, Bot, DetailParam, Flow, Intent, IntentExtra, Knowledge, Knowledges, SkillPayload,
    Trigger, TriggerType, User, UserProperties, UserRequest,
};
