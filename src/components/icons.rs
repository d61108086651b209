//! Centralized icon definitions.
//!
//! Maps semantic icon names to the Lucide set, plus lookups for the icon
//! kinds named in page content.

use icondata::Icon;
use smflx_core::content::{ResourceIcon, Social};

pub use icondata::{
    LuArrowRight as ARROW_RIGHT, LuBookOpen as BOOK, LuImage as IMAGE, LuMail as MAIL,
    LuMapPin as LOCATION, LuMenu as MENU, LuMic as MICROPHONE, LuPhone as PHONE, LuPlay as PLAY,
    LuSparkles as SPARKLES, LuX as CLOSE,
};

/// Icon for a resource card.
pub fn resource(icon: ResourceIcon) -> Icon {
    match icon {
        ResourceIcon::Microphone => MICROPHONE,
        ResourceIcon::Book => BOOK,
        ResourceIcon::Image => IMAGE,
        ResourceIcon::Play => PLAY,
    }
}

/// Icon for a social network link.
pub fn social(network: Social) -> Icon {
    match network {
        Social::Instagram => icondata::LuInstagram,
        Social::Facebook => icondata::LuFacebook,
        Social::Twitter => icondata::LuTwitter,
        Social::Linkedin => icondata::LuLinkedin,
    }
}
