pub mod button;
pub mod carousel;
pub mod common;
pub mod outputs;
pub mod response;

pub use button::{Button, ButtonAction, Extra};
pub use carousel::{Carousel, CarouselHeader, CarouselItems, CarouselType};
pub use common::{ButtonLayout, Device, Link, Profile, Thumbnail};
pub use outputs::{
    BasicCard, CommerceCard, ListCard, ListItem, ListItemAction, ListItemHeader, Output,
    SimpleImage, SimpleText, TextCard,
};
pub use response::{EncodedResponse, SkillResponse};
