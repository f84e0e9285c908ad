//! Cricket equipment and its capabilities
//!
//! Each item kind implements only the capability traits it supports. Swinging
//! is shared by bats and balls, so capabilities are separate traits rather
//! than one item hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common surface of every piece of equipment.
pub trait Equipment {
    fn brand(&self) -> &str;

    /// Brand-specific one-line summary.
    fn describe(&self) -> String;

    fn capabilities(&self) -> &'static [Capability];

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Stroke,
    Swing,
    Bounce,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stroke => "stroke",
            Self::Swing => "swing",
            Self::Bounce => "bounce",
        }
    }
}

pub trait Strokeable {
    fn stroke(&self) -> &'static str;

    #[deprecated(note = "use `stroke` instead")]
    fn shot(&self) -> &'static str {
        self.stroke()
    }
}

impl dyn Strokeable {
    pub fn show_info() -> &'static str {
        "This interface represents strokeable cricket equipment."
    }
}

pub trait Swingable {
    fn swing(&self) -> &'static str;
}

pub trait Bounceable {
    fn bounce(&self) -> &'static str;
}

const BAT_CAPABILITIES: &[Capability] = &[Capability::Stroke, Capability::Swing];
const BALL_CAPABILITIES: &[Capability] = &[Capability::Bounce, Capability::Swing];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bat {
    brand: String,
    weight_grams: u32,
}

impl Bat {
    pub fn new(brand: impl Into<String>, weight_grams: u32) -> Self {
        Self { brand: brand.into(), weight_grams }
    }

    pub fn weight_grams(&self) -> u32 {
        self.weight_grams
    }
}

impl Equipment for Bat {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn describe(&self) -> String {
        format!("Brand: {}, Type: Bat, Weight: {} grams", self.brand, self.weight_grams)
    }

    fn capabilities(&self) -> &'static [Capability] {
        BAT_CAPABILITIES
    }
}

impl Strokeable for Bat {
    fn stroke(&self) -> &'static str {
        let message = "Making a stroke with the bat.";
        log::debug!("{}: {}", self.brand, message);
        message
    }
}

impl Swingable for Bat {
    fn swing(&self) -> &'static str {
        let message = "Swinging the bat.";
        log::debug!("{}: {}", self.brand, message);
        message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    brand: String,
    color: String,
}

impl Ball {
    pub fn new(brand: impl Into<String>, color: impl Into<String>) -> Self {
        Self { brand: brand.into(), color: color.into() }
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Equipment for Ball {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn describe(&self) -> String {
        format!("Brand: {}, Type: Ball, Color: {}", self.brand, self.color)
    }

    fn capabilities(&self) -> &'static [Capability] {
        BALL_CAPABILITIES
    }
}

impl Bounceable for Ball {
    fn bounce(&self) -> &'static str {
        let message = "Bouncing the ball.";
        log::debug!("{}: {}", self.brand, message);
        message
    }
}

impl Swingable for Ball {
    fn swing(&self) -> &'static str {
        let message = "Swinging the ball.";
        log::debug!("{}: {}", self.brand, message);
        message
    }
}

/// Any supported item, for mixed collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EquipmentItem {
    Bat(Bat),
    Ball(Ball),
}

impl EquipmentItem {
    pub fn as_strokeable(&self) -> Option<&dyn Strokeable> {
        match self {
            Self::Bat(bat) => Some(bat),
            Self::Ball(_) => None,
        }
    }

    pub fn as_swingable(&self) -> Option<&dyn Swingable> {
        match self {
            Self::Bat(bat) => Some(bat),
            Self::Ball(ball) => Some(ball),
        }
    }

    pub fn as_bounceable(&self) -> Option<&dyn Bounceable> {
        match self {
            Self::Bat(_) => None,
            Self::Ball(ball) => Some(ball),
        }
    }

    /// Run one capability if this item has it, returning its message.
    pub fn perform(&self, capability: Capability) -> Option<&'static str> {
        match capability {
            Capability::Stroke => self.as_strokeable().map(|item| item.stroke()),
            Capability::Swing => self.as_swingable().map(|item| item.swing()),
            Capability::Bounce => self.as_bounceable().map(|item| item.bounce()),
        }
    }

    fn inner(&self) -> &dyn Equipment {
        match self {
            Self::Bat(bat) => bat,
            Self::Ball(ball) => ball,
        }
    }
}

impl Equipment for EquipmentItem {
    fn brand(&self) -> &str {
        self.inner().brand()
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }

    fn capabilities(&self) -> &'static [Capability] {
        self.inner().capabilities()
    }
}

impl From<Bat> for EquipmentItem {
    fn from(bat: Bat) -> Self {
        Self::Bat(bat)
    }
}

impl From<Ball> for EquipmentItem {
    fn from(ball: Ball) -> Self {
        Self::Ball(ball)
    }
}

impl fmt::Display for EquipmentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
