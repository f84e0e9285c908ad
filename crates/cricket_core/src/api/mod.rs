pub mod squad_json;

pub use squad_json::{
    build_squad, build_squad_json, build_squad_json_default, summarize, EntrySummary,
    SquadEntryRequest, SquadMember, SquadRequest, SquadResponse, SQUAD_SCHEMA_VERSION,
};
