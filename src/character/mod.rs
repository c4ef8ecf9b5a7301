//! Character model - attributes, point pools and actors
//!
//! Every mutator returns the [`Change`] it made and passes it to the
//! object's subscribers in subscription order.

mod actor;
mod attribute;
mod listeners;
mod points;
mod race;

pub use actor::{
    Ability, Actor, ActorChange, Target, DEFAULT_POOL, INITIATIVE_ROLL_MAX, INITIATIVE_ROLL_MIN,
};
pub use attribute::{Attribute, DEFAULT_LEVEL};
pub use listeners::{Change, Field, ListenerId, Listeners};
pub use points::Points;
pub use race::{Race, DEFAULT_SPEED};
