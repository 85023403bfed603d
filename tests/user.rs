//! Account endpoints against a mock server.

mod common;

use common::MockApi;

const SUBSCRIPTION: &str = r#"{
    "tier": "creator",
    "character_count": 5000,
    "character_limit": 100000,
    "can_extend_character_limit": true,
    "allowed_to_extend_character_limit": true,
    "next_character_count_reset_unix": 1700000000,
    "voice_limit": 30,
    "can_extend_voice_limit": false,
    "can_use_instant_voice_cloning": true,
    "available_models": [],
    "status": "active"
}"#;

#[test]
fn user_and_subscription() {
    let mut api = MockApi::new();
    let user_body = format!(
        r#"{{"subscription":{},"is_new_user":false,"xi_api_key":"test-key"}}"#,
        SUBSCRIPTION
    );
    let user_mock = api.json("GET", "/v1/user", 200, &user_body);
    let sub_mock = api.json("GET", "/v1/user/subscription", 200, SUBSCRIPTION);

    let user = api.client.get_user().unwrap();
    assert_eq!(user.subscription.tier, "creator");
    assert!(!user.is_new_user);

    let sub = api.client.get_subscription().unwrap();
    assert_eq!(sub, user.subscription);
    assert_eq!(sub.remaining_characters(), 95_000);

    user_mock.assert();
    sub_mock.assert();
}
