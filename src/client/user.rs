use super::core::ElevenLabsClient;
use crate::request::{GetSubscriptionRequest, GetUserRequest};
use crate::types::{Subscription, User};
use crate::Result;

impl ElevenLabsClient {
    pub fn get_user(&self) -> Result<User> {
        self.execute(&GetUserRequest)
    }

    pub fn get_subscription(&self) -> Result<Subscription> {
        self.execute(&GetSubscriptionRequest)
    }
}
