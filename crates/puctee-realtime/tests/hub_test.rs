use puctee_core::errors::RealtimeError;
use puctee_realtime::location::{parse_payload, INVALID_LOCATION_REPLY};
use puctee_realtime::{CloseCode, LocationBroadcast, LocationHub, Participant};

fn alice() -> Participant {
    Participant {
        user_id: 1,
        display_name: "Alice".to_string(),
        profile_image_url: Some("https://img.example/alice.png".to_string()),
    }
}

fn bob() -> Participant {
    Participant {
        user_id: 2,
        display_name: "Bob".to_string(),
        profile_image_url: None,
    }
}

// ── Codec ────────────────────────────────────────────────────────────────

#[test]
fn payload_accepts_numbers_and_numeric_strings() {
    let p = parse_payload(r#"{"latitude": 35.68, "longitude": "139.76", "name": "Tokyo"}"#).unwrap();
    assert!((p.latitude - 35.68).abs() < f64::EPSILON);
    assert!((p.longitude - 139.76).abs() < f64::EPSILON);
    assert_eq!(p.name.as_deref(), Some("Tokyo"));

    let p = parse_payload(r#"{"latitude": 35, "longitude": 139}"#).unwrap();
    assert!(p.name.is_none());
}

#[test]
fn payload_rejects_missing_or_garbage_coordinates() {
    for text in [
        r#"{"latitude": 35.68}"#,
        r#"{"latitude": "north", "longitude": 1.0}"#,
        r#"{"latitude": null, "longitude": 1.0}"#,
        "not json",
    ] {
        let err = parse_payload(text).unwrap_err();
        assert!(matches!(err, RealtimeError::InvalidLocation { .. }), "{text}");
    }
}

#[test]
fn broadcast_uses_wire_field_names() {
    let json = LocationBroadcast {
        user_id: 2,
        display_name: "Bob".to_string(),
        profile_image_url: None,
        latitude: 1.5,
        longitude: 2.5,
    }
    .to_json()
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["user_id"], 2);
    assert_eq!(value["display_name"], "Bob");
    assert!(value["profileImageUrl"].is_null());
    assert_eq!(value["latitude"], 1.5);
}

// ── Admission ────────────────────────────────────────────────────────────

#[test]
fn close_codes_match_wire_values() {
    assert_eq!(CloseCode::Internal.code(), 4000);
    assert_eq!(CloseCode::Unauthenticated.code(), 4001);
    assert_eq!(CloseCode::NotParticipant.code(), 4003);
    assert_eq!(CloseCode::from_code(4003), Some(CloseCode::NotParticipant));
    assert_eq!(CloseCode::from_code(1000), None);
}

#[test]
fn authorize_checks_identity_then_membership() {
    let user = alice();
    assert_eq!(
        LocationHub::authorize(None, Some(&[1, 2][..])),
        Err(CloseCode::Unauthenticated)
    );
    assert_eq!(
        LocationHub::authorize(Some(&user), None),
        Err(CloseCode::NotParticipant)
    );
    assert_eq!(
        LocationHub::authorize(Some(&user), Some(&[2, 3][..])),
        Err(CloseCode::NotParticipant)
    );
    assert_eq!(LocationHub::authorize(Some(&user), Some(&[1, 2][..])), Ok(()));
}

// ── Fan-out ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn publish_stamps_server_identity() {
    let hub = LocationHub::default();
    let (_, mut alice_rx) = hub.join(7, &alice());
    let (_, mut bob_rx) = hub.join(7, &bob());

    let delivered = hub
        .publish(7, &alice(), r#"{"latitude": 1.0, "longitude": 2.0, "user_id": 999}"#)
        .unwrap();
    assert_eq!(delivered, 2);

    let text = bob_rx.recv().await.unwrap();
    let message: LocationBroadcast = serde_json::from_str(&text).unwrap();
    assert_eq!(message.user_id, 1);
    assert_eq!(message.display_name, "Alice");
    assert_eq!(
        message.profile_image_url.as_deref(),
        Some("https://img.example/alice.png")
    );
    // The sender receives its own update too.
    assert_eq!(alice_rx.recv().await.unwrap(), text);
}

#[test]
fn invalid_frame_gets_error_reply_and_no_fanout() {
    let hub = LocationHub::default();
    let (_, mut bob_rx) = hub.join(7, &bob());

    let reply = hub.handle_frame(7, &alice(), r#"{"latitude": "x"}"#);

    assert_eq!(reply, Some(INVALID_LOCATION_REPLY));
    assert_eq!(INVALID_LOCATION_REPLY, r#"{"error":"Invalid location data"}"#);
    assert!(bob_rx.try_recv().is_err());
}

#[test]
fn valid_frame_has_no_reply() {
    let hub = LocationHub::default();
    let (_, _rx) = hub.join(7, &alice());
    assert_eq!(
        hub.handle_frame(7, &alice(), r#"{"latitude": 0, "longitude": 0}"#),
        None
    );
}

#[test]
fn publish_requires_an_open_connection() {
    let hub = LocationHub::default();
    let (_, mut bob_rx) = hub.join(7, &bob());

    let err = hub
        .publish(7, &alice(), r#"{"latitude": 1.0, "longitude": 2.0}"#)
        .unwrap_err();

    assert!(matches!(
        err,
        RealtimeError::NotSubscribed {
            plan_id: 7,
            user_id: 1
        }
    ));
    assert!(bob_rx.try_recv().is_err());
}

#[test]
fn leave_removes_connection() {
    let hub = LocationHub::default();
    let (id, _rx) = hub.join(3, &bob());
    assert!(hub.leave(3, &bob(), id));
    assert!(!hub.leave(3, &bob(), id));
    assert_eq!(hub.registry().plan_count(), 0);
}
