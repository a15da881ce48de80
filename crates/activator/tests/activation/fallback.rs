//! Behavior with factory synthesis disabled.

use crate::common::{constructible_handles, Dial, Inventory, Thermostat, Vec2, Widget};
use activator::{
    Activator, ActivatorConfig, ActivationError, CodegenCapability, TypeHandle, UnsupportedReason,
    Zero,
};
use pretty_assertions::assert_eq;

fn reflective() -> Activator {
    Activator::new(ActivatorConfig::from_vars(Some("off"), None))
}

#[test]
fn capability_follows_config() {
    assert_eq!(reflective().capability(), CodegenCapability::Unavailable);
    assert_eq!(Activator::default().capability(), CodegenCapability::Available);
}

#[test]
fn generic_entry_point_still_constructs() {
    let activator = reflective();
    let inventory: Inventory = activator.create();
    assert_eq!(inventory, Inventory::default());
    assert_eq!(activator.create::<i64>(), 0);
    assert_eq!(activator.create::<Vec<u8>>(), Vec::<u8>::new());
}

#[test]
fn dynamic_entry_point_matches_fast_path() {
    let slow = reflective();
    let fast = Activator::default();

    for ty in constructible_handles() {
        let a = slow.create_instance(ty).unwrap();
        let b = fast.create_instance(ty).unwrap();
        assert_eq!(a.type_id(), b.type_id(), "{ty:?}");
    }

    let v = slow.create_instance(TypeHandle::of::<Vec2>()).unwrap();
    let v = v.downcast::<Vec2>().unwrap();
    assert_eq!((v.x, v.y), (0.0, 0.0));
    assert!(slow.cache().is_empty());
}

#[test]
fn errors_are_unchanged() {
    let activator = reflective();
    assert_eq!(
        activator.create_instance(TypeHandle::INVALID).unwrap_err(),
        ActivationError::InvalidArgument
    );
    let err = activator
        .create_instance(TypeHandle::of::<dyn Widget>())
        .unwrap_err();
    assert!(matches!(
        err,
        ActivationError::UnsupportedType {
            reason: UnsupportedReason::Abstract,
            ..
        }
    ));
}

#[test]
fn generic_entry_point_agrees_across_modes() {
    let fast: Thermostat = Activator::default().create();
    let slow: Thermostat = reflective().create();
    assert_eq!(fast, slow);
    assert_eq!(slow.celsius, 20);
}

#[test]
fn dynamic_entry_point_agrees_across_modes() {
    for ty in [TypeHandle::of::<Dial>(), TypeHandle::of::<Thermostat>()] {
        let fast = Activator::default().create_instance(ty).unwrap();
        let slow = reflective().create_instance(ty).unwrap();
        assert_eq!(fast.type_id(), slow.type_id());
    }

    let dial = |activator: Activator| {
        activator
            .create_instance(TypeHandle::of::<Dial>())
            .unwrap()
            .downcast::<Dial>()
            .unwrap()
    };
    assert_eq!(dial(Activator::default()), Dial { notch: 0 });
    assert_eq!(dial(reflective()), Dial { notch: 0 });

    let thermostat = reflective()
        .create_instance(TypeHandle::of::<Thermostat>())
        .unwrap()
        .downcast::<Thermostat>()
        .unwrap();
    assert_eq!(thermostat, Thermostat::ZERO);
}
