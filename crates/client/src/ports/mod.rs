//! Port traits - the seams between the consent core and the page.

pub mod outbound;
