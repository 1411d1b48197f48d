// src/lib.rs

#![no_std]
#![doc = "Loads OmniLogic MSPConfig (backyard configuration) XML documents."]
#![doc = ""]
#![doc = "This `no_std + alloc` library turns the configuration a pool controller reports"]
#![doc = "into a typed tree rooted at a `Backyard`, and stamps every node with the"]
#![doc = "`bow_id` of the body of water that owns it."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `MspConfig::load_xml`: Parsing, resolving and propagating a document in one call."]
#![doc = "- `parse_document`: Parsing XML into a generic element tree."]
#![doc = "- `propagate_bow_ids`: Re-stamping `bow_id` over a backyard tree."]

extern crate alloc;

// --- Crate Modules ---

mod config;
mod error;
mod model;
mod parser;
mod propagate;
mod registry;
mod resolver;
mod types;

// --- Public API Re-exports ---

pub use config::{LoadOptions, MspConfig, UnknownEntityPolicy};
pub use error::ConfigError;
pub use model::RawElement;
pub use parser::parse_document;
pub use propagate::propagate_bow_ids;
pub use registry::resolve_kind;
pub use types::{
    Backyard, BodyOfWater, BodyOfWaterType, Chlorinator, ChlorinatorEquipment, ChlorinatorType,
    ColorLogicLight, ColorLogicLightType, Csad, CsadEquipment, CsadType, Entity, EntityKind,
    Filter, FilterType, HeaterEquipment, HeaterType, NO_BODY_OF_WATER, Node, Pump, PumpType,
    Relay, RelayType, Sensor, SensorType, SystemSettings, TypeCode, UnknownEntity, VirtualHeater,
};
