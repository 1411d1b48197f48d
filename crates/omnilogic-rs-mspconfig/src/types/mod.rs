// crates/omnilogic-rs-mspconfig/src/types/mod.rs

//! Public, typed data structures for a resolved MSPConfig document.
//!
//! Every entity struct is declared through the `entity!` macro, which generates
//! the struct, its `Node` implementation and its child traversal from a single
//! list of slots. The propagator and the query helpers walk the tree through
//! that traversal only, so a new slot is picked up everywhere by declaring it.

use crate::error::ConfigError;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use log::warn;

/// `bow_id` of every entity that does not belong to a body of water.
///
/// Real `system_id` values are non-negative, so the sentinel never collides
/// with an identifier.
pub const NO_BODY_OF_WATER: i32 = -1;

/// Attribute key holding a `Type` code that no code enum recognizes.
const TYPE_ATTRIBUTE: &str = "Type";

/// Declares an entity struct together with its `Node`/`NodeMut` impls.
///
/// The common fields (`system_id`, `bow_id`, `name`, `type_code`, `attributes`,
/// `other`) are added to every struct; `slots` lists the entity-bearing fields.
macro_rules! entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            kind: $kind:ident,
            type_code: $code:ty,
            slots {
                $( $(#[$slot_meta:meta])* $slot:ident : $slot_ty:ty, )*
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize)]
        pub struct $name {
            /// Identifier assigned by the installation, when the element carries one.
            pub system_id: Option<i32>,
            /// `system_id` of the owning body of water, or `NO_BODY_OF_WATER`.
            pub bow_id: i32,
            pub name: Option<String>,
            /// The `Type` discriminator.
            pub type_code: Option<$code>,
            /// Remaining scalar values, keyed by tag.
            pub attributes: BTreeMap<String, String>,
            $( $(#[$slot_meta])* pub $slot: $slot_ty, )*
            /// Entity children that fit none of the declared slots.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub other: Option<Vec<Entity>>,
        }

        impl $name {
            pub(crate) fn from_header(header: EntityHeader) -> Self {
                let mut attributes = header.attributes;
                let type_code = split_type_code::<$code>(header.type_code, &mut attributes);
                Self {
                    system_id: header.system_id,
                    bow_id: NO_BODY_OF_WATER,
                    name: header.name,
                    type_code,
                    attributes,
                    $( $slot: Default::default(), )*
                    other: None,
                }
            }

            /// Places a built child into the first slot that takes its kind,
            /// falling back to `other`.
            pub(crate) fn adopt(&mut self, child: Entity) {
                $(
                    let child = match Adopt::offer(&mut self.$slot, child) {
                        Ok(()) => return,
                        Err(child) => child,
                    };
                )*
                push_other(&mut self.other, EntityKind::$kind, child);
            }

            /// Returns a scalar value by its XML tag.
            pub fn attribute(&self, tag: &str) -> Option<&str> {
                self.attributes.get(tag).map(String::as_str)
            }
        }

        impl Node for $name {
            fn kind(&self) -> EntityKind {
                EntityKind::$kind
            }

            fn system_id(&self) -> Option<i32> {
                self.system_id
            }

            fn bow_id(&self) -> i32 {
                self.bow_id
            }

            fn name(&self) -> Option<&str> {
                self.name.as_deref()
            }

            fn type_code(&self) -> Option<&str> {
                self.type_code.as_ref().map(TypeCode::as_code)
            }

            fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node)) {
                $( Slot::visit(&self.$slot, f); )*
                Slot::visit(&self.other, f);
            }
        }

        impl NodeMut for $name {
            fn set_bow_id(&mut self, bow_id: i32) {
                self.bow_id = bow_id;
            }

            fn for_each_child_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError> {
                $( Slot::visit_mut(&mut self.$slot, f)?; )*
                Slot::visit_mut(&mut self.other, f)
            }
        }
    };
}

/// Lets an entity sit in another entity's slots: a singular `Option<T>`,
/// an optional collection `Option<Vec<T>>` or a mandatory sequence `Vec<T>`.
macro_rules! entity_slot {
    ($name:ident) => {
        impl Slot for $name {
            fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node)) {
                f(self);
            }

            fn visit_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError> {
                f(self)
            }
        }

        impl Adopt for Option<$name> {
            fn offer(&mut self, child: Entity) -> Result<(), Entity> {
                match child {
                    Entity::$name(inner) if self.is_none() => {
                        *self = Some(inner);
                        Ok(())
                    }
                    other => Err(other),
                }
            }
        }

        impl Adopt for Option<Vec<$name>> {
            fn offer(&mut self, child: Entity) -> Result<(), Entity> {
                match child {
                    Entity::$name(inner) => {
                        self.get_or_insert_with(Vec::new).push(inner);
                        Ok(())
                    }
                    other => Err(other),
                }
            }
        }

        impl Adopt for Vec<$name> {
            fn offer(&mut self, child: Entity) -> Result<(), Entity> {
                match child {
                    Entity::$name(inner) => {
                        self.push(inner);
                        Ok(())
                    }
                    other => Err(other),
                }
            }
        }
    };
}

mod backyard;
mod body_of_water;
mod chemistry;
mod codes;
mod entity;
mod equipment;
mod heater;
mod system;

pub use backyard::Backyard;
pub use body_of_water::BodyOfWater;
pub use chemistry::{Chlorinator, ChlorinatorEquipment, Csad, CsadEquipment};
pub use codes::{
    BodyOfWaterType, ChlorinatorType, ColorLogicLightType, CsadType, FilterType, HeaterType,
    PumpType, RelayType, SensorType, TypeCode,
};
pub use entity::{Entity, UnknownEntity};
pub use equipment::{ColorLogicLight, Filter, Pump, Relay, Sensor};
pub use heater::{HeaterEquipment, VirtualHeater};
pub use system::SystemSettings;

/// The closed set of entity variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Backyard,
    BodyOfWater,
    Filter,
    Pump,
    Relay,
    Sensor,
    ColorLogicLight,
    Chlorinator,
    ChlorinatorEquipment,
    Csad,
    CsadEquipment,
    VirtualHeater,
    HeaterEquipment,
    /// Fallback for elements the registry does not recognize.
    Unknown,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Read-only structural access shared by every node of the tree.
pub trait Node {
    fn kind(&self) -> EntityKind;
    fn system_id(&self) -> Option<i32>;
    fn bow_id(&self) -> i32;
    fn name(&self) -> Option<&str>;
    /// The raw `Type` discriminator code.
    fn type_code(&self) -> Option<&str>;
    /// Calls `f` for every direct child entity, slot by slot in declaration order.
    fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node));
}

/// Callback used by the mutable walk.
pub(crate) type ChildVisitor<'f> = dyn FnMut(&mut dyn NodeMut) -> Result<(), ConfigError> + 'f;

/// Mutable access used by the propagator.
pub(crate) trait NodeMut: Node {
    fn set_bow_id(&mut self, bow_id: i32);
    fn for_each_child_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError>;
}

/// An entity-bearing field: a single entity or a container of them.
pub(crate) trait Slot {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node));
    fn visit_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError>;
}

impl<S: Slot> Slot for Option<S> {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node)) {
        if let Some(inner) = self {
            inner.visit(f);
        }
    }

    fn visit_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError> {
        match self {
            Some(inner) => inner.visit_mut(f),
            None => Ok(()),
        }
    }
}

impl<S: Slot> Slot for Vec<S> {
    fn visit<'a>(&'a self, f: &mut dyn FnMut(&'a dyn Node)) {
        for item in self {
            item.visit(f);
        }
    }

    fn visit_mut(&mut self, f: &mut ChildVisitor<'_>) -> Result<(), ConfigError> {
        for item in self.iter_mut() {
            item.visit_mut(f)?;
        }
        Ok(())
    }
}

/// A slot that can take ownership of a freshly built child.
pub(crate) trait Adopt {
    /// Takes the child if its kind matches, hands it back otherwise.
    fn offer(&mut self, child: Entity) -> Result<(), Entity>;
}

/// Scalars lifted from an element before its typed struct is created.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct EntityHeader {
    pub tag: String,
    pub system_id: Option<i32>,
    pub name: Option<String>,
    pub type_code: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

/// Parses a `Type` code. A code outside the family is kept as the `Type`
/// attribute so it is not lost.
fn split_type_code<C: TypeCode>(
    code: Option<String>,
    attributes: &mut BTreeMap<String, String>,
) -> Option<C> {
    let code = code?;
    let parsed = C::from_code(&code);
    if parsed.is_none() {
        attributes.insert(String::from(TYPE_ATTRIBUTE), code);
    }
    parsed
}

fn push_other(other: &mut Option<Vec<Entity>>, parent: EntityKind, child: Entity) {
    if child.kind() != EntityKind::Unknown {
        warn!(
            "{} (system id {:?}) has no slot for a {}; keeping it under `other`",
            parent,
            child.system_id(),
            child.kind()
        );
    }
    other.get_or_insert_with(Vec::new).push(child);
}
