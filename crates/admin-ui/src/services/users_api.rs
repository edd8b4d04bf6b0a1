//! Roommate-seeker profiles (`/users`)

use crate::models::{AdminResult, MessageResponse, RoommateFilters, User, UserFilters, UserUpdate};
use crate::services::api_client::{encode_segment, get_api_client};
use serde_json::{Value, json};

/// Users API client
pub struct UsersApi;

impl UsersApi {
    pub async fn get_users(filters: &UserFilters) -> AdminResult<Vec<User>> {
        get_api_client()?.get_json_with_query("/users", filters).await
    }

    /// Active users with completed profiles
    pub async fn get_potential_roommates(filters: &RoommateFilters) -> AdminResult<Vec<User>> {
        get_api_client()?.get_json_with_query("/users/roommates", filters).await
    }

    pub async fn get_user(uid: &str) -> AdminResult<User> {
        get_api_client()?.get_json(&format!("/users/{}", encode_segment(uid))).await
    }

    /// Look a user up by phone number.
    ///
    /// A `null` body, an empty body and a 404 all mean "no such user".
    pub async fn get_user_by_phone_number(phone_number: &str) -> AdminResult<Option<User>> {
        let path = format!("/users/phone/{}", encode_segment(phone_number));
        let value: Value = match get_api_client()?.get_json(&path).await {
            Ok(value) => value,
            Err(error) if error.is_not_found() => return Ok(None),
            Err(error) => return Err(error),
        };

        match value {
            Value::Null => Ok(None),
            Value::Object(ref object) if object.is_empty() => Ok(None),
            other => Ok(Some(serde_json::from_value(other)?)),
        }
    }

    pub async fn create_user(user: &User) -> AdminResult<User> {
        get_api_client()?.post_json("/users", user).await
    }

    pub async fn update_user(uid: &str, update: &UserUpdate) -> AdminResult<User> {
        get_api_client()?
            .patch_json(&format!("/users/{}", encode_segment(uid)), update)
            .await
    }

    pub async fn update_fcm_token(uid: &str, fcm_token: &str) -> AdminResult<MessageResponse> {
        get_api_client()?
            .patch_json(
                &format!("/users/{}/fcm-token", encode_segment(uid)),
                &json!({ "fcmToken": fcm_token }),
            )
            .await
    }

    pub async fn update_last_login(uid: &str) -> AdminResult<MessageResponse> {
        get_api_client()?
            .patch_empty(&format!("/users/{}/last-login", encode_segment(uid)))
            .await
    }

    pub async fn remove_user(uid: &str) -> AdminResult<MessageResponse> {
        get_api_client()?.delete(&format!("/users/{}", encode_segment(uid))).await
    }

    pub async fn search_by_city(city: &str) -> AdminResult<Vec<User>> {
        get_api_client()?
            .get_json(&format!("/users/search/city/{}", encode_segment(city)))
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::Gender;
    use crate::services::test_support::mock_backend;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn user_json(uid: &str, name: &str) -> Value {
        json!({"uid": uid, "fullName": name, "phoneNumber": "+919800000000", "isActive": true})
    }

    #[tokio::test]
    async fn test_get_users_with_filters() {
        let server = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("gender", "Female"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json("u1", "Asha")])))
            .expect(1)
            .mount(&server)
            .await;

        let users = UsersApi::get_users(&UserFilters {
            gender: Some(Gender::Female),
            limit: Some(100),
            ..Default::default()
        })
        .await
        .unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].shown_name(), "Asha");
        assert!(users[0].is_active());
    }

    #[tokio::test]
    async fn test_phone_lookup_null_is_none() {
        let server = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/users/phone/%2B911234"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/phone/%2B919800000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_json("u9", "Ravi")))
            .mount(&server)
            .await;

        assert_eq!(UsersApi::get_user_by_phone_number("+911234").await.unwrap(), None);
        let found = UsersApi::get_user_by_phone_number("+919800000000").await.unwrap();
        assert_eq!(found.map(|u| u.uid), Some("u9".to_string()));
    }

    #[tokio::test]
    async fn test_phone_lookup_not_found_is_none() {
        let server = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/users/phone/000"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert_eq!(UsersApi::get_user_by_phone_number("000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_fcm_token() {
        let server = mock_backend().await;
        Mock::given(method("PATCH"))
            .and(path("/users/u1/fcm-token"))
            .and(body_json(json!({"fcmToken": "tok"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "FCM token updated"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = UsersApi::update_fcm_token("u1", "tok").await.unwrap();
        assert_eq!(response.message, "FCM token updated");
    }

    #[tokio::test]
    async fn test_search_by_city_encodes_segment() {
        let server = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/users/search/city/New%20Delhi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert!(UsersApi::search_by_city("New Delhi").await.unwrap().is_empty());
    }
}
