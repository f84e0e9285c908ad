pub mod batting;
pub mod bowling;
pub mod equipment;
pub mod kit_bag;
pub mod participant;
pub mod stats;
pub mod validation;

pub use batting::BattingRecord;
pub use bowling::BowlingRecord;
pub use equipment::{
    Ball, Bat, Bounceable, Capability, Equipment, EquipmentItem, Strokeable, Swingable,
};
pub use kit_bag::KitBag;
pub use participant::{Participant, PlayerProfile};
pub use stats::{batting_average, economy_rate, strike_rate};
pub use validation::RecordValidator;
