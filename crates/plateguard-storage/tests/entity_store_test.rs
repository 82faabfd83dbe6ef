use plateguard_core::errors::{BenefitError, PlateguardError};
use plateguard_core::models::{BenefitKind, SealTier, UserId};
use plateguard_core::traits::IEntityStore;
use plateguard_storage::InMemoryEntityStore;
use test_fixtures::{plate, t0, user_with_seal, vehicle};

#[test]
fn successful_update_is_committed() {
    let store = InMemoryEntityStore::new();
    store
        .put_user(&user_with_seal("u1", SealTier::Yellow, false, t0()))
        .unwrap();

    let updated = store
        .update_user(&UserId::from("u1"), &mut |user| {
            user.benefits.yellow_seal_stolen_alerts_used += 1;
            Ok(())
        })
        .unwrap();
    assert_eq!(updated.benefits.yellow_seal_stolen_alerts_used, 1);

    let stored = store.get_user(&UserId::from("u1")).unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[test]
fn failed_update_leaves_record_untouched() {
    let store = InMemoryEntityStore::new();
    let original = user_with_seal("u1", SealTier::Green, true, t0());
    store.put_user(&original).unwrap();

    let result = store.update_user(&UserId::from("u1"), &mut |user| {
        user.benefits.green_seal_stolen_alerts_used = 99;
        Err(BenefitError::NoCreditsRemaining {
            kind: BenefitKind::TheftAlert,
            used: 2,
            cap: 2,
        }
        .into())
    });
    assert!(matches!(result, Err(PlateguardError::Benefit(_))));
    assert_eq!(store.get_user(&UserId::from("u1")).unwrap().unwrap(), original);
}

#[test]
fn updating_missing_records_is_not_found() {
    let store = InMemoryEntityStore::new();
    let err = store
        .update_user(&UserId::from("ghost"), &mut |_| Ok(()))
        .unwrap_err();
    assert!(matches!(err, PlateguardError::NotFound { .. }));

    let err = store
        .update_vehicle(&plate("ABC1234"), &mut |_| Ok(()))
        .unwrap_err();
    assert!(matches!(err, PlateguardError::NotFound { .. }));
}

#[test]
fn vehicles_round_trip() {
    let store = InMemoryEntityStore::new();
    store.put_vehicle(&vehicle("ABC1234", 500, t0())).unwrap();
    store
        .update_vehicle(&plate("abc-1234"), &mut |v| {
            v.score = 650;
            Ok(())
        })
        .unwrap();
    assert_eq!(
        store.get_vehicle(&plate("ABC1234")).unwrap().unwrap().score,
        650
    );
    assert_eq!(store.vehicle_count(), 1);
    assert_eq!(store.user_count(), 0);
}
