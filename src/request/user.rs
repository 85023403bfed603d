//! Account requests.

use super::{ApiRequest, Method};
use crate::response::SuccessResponse;
use crate::transformers;
use crate::types::{Subscription, User};
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct GetUserRequest;

impl ApiRequest for GetUserRequest {
    type Output = User;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok("v1/user".to_string())
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::json(&response)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetSubscriptionRequest;

impl ApiRequest for GetSubscriptionRequest {
    type Output = Subscription;

    fn method(&self) -> Method {
        Method::Get
    }

    fn endpoint(&self) -> Result<String> {
        Ok("v1/user/subscription".to_string())
    }

    fn transform(&self, response: SuccessResponse) -> Result<Self::Output> {
        transformers::json(&response)
    }
}
