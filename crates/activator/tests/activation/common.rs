//! Fixture types shared by the activation tests.

use activator::{
    describe_abstract, describe_reference, describe_value, ConstructorInfo, Describe, Instance,
    TypeHandle, TypeInfo, Visibility, Zero,
};

/// Reference type with a public parameterless constructor.
#[derive(Default, Debug, PartialEq)]
pub struct Inventory {
    pub items: Vec<String>,
    pub revision: u32,
}
describe_reference!(Inventory);

/// Value type without a constructor of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Zero for Vec2 {
    const ZERO: Self = Vec2 { x: 0.0, y: 0.0 };
}
describe_value!(Vec2);

/// Value type whose `Default` is not its zero value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thermostat {
    pub celsius: i16,
}

impl Default for Thermostat {
    fn default() -> Self {
        Thermostat { celsius: 20 }
    }
}

impl Zero for Thermostat {
    const ZERO: Self = Thermostat { celsius: 0 };
}
describe_value!(Thermostat);

/// Value type that declares a public parameterless constructor of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dial {
    pub notch: u8,
}

impl Zero for Dial {
    const ZERO: Self = Dial { notch: 0 };
}

fn dial_at_five() -> Instance {
    Instance::new(Dial { notch: 5 })
}

impl Describe for Dial {
    fn describe() -> TypeInfo {
        TypeInfo::value::<Dial>()
            .with_constructor(ConstructorInfo::parameterless(Visibility::Public, dial_at_five))
    }
}

/// Abstract base, never instantiable.
pub trait Widget {}
describe_abstract!(dyn Widget);

/// Reference type whose only constructor takes arguments.
pub struct Socket {
    pub port: u16,
}

impl Socket {
    pub fn bind(port: u16) -> Self {
        Socket { port }
    }
}

impl Describe for Socket {
    fn describe() -> TypeInfo {
        TypeInfo::reference::<Socket>()
            .with_constructor(ConstructorInfo::with_params(Visibility::Public, &["u16"]))
    }
}

/// Handles for a pool of constructible types, used by the property and
/// concurrency tests.
pub fn constructible_handles() -> Vec<TypeHandle> {
    vec![
        TypeHandle::of::<Inventory>(),
        TypeHandle::of::<Vec2>(),
        TypeHandle::of::<String>(),
        TypeHandle::of::<Vec<u64>>(),
        TypeHandle::of::<std::collections::HashMap<String, i32>>(),
        TypeHandle::of::<i32>(),
        TypeHandle::of::<bool>(),
        TypeHandle::of::<[u8; 16]>(),
        TypeHandle::of::<(u16, char)>(),
        TypeHandle::of::<Option<u32>>(),
    ]
}
