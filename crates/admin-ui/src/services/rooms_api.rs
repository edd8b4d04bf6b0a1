//! Room listings (`/rooms`)

use crate::models::{AdminResult, MessageResponse, NewRoom, Room, RoomFilters, RoomUpdate};
use crate::services::api_client::{encode_segment, get_api_client};

/// Rooms API client
pub struct RoomsApi;

impl RoomsApi {
    pub async fn get_rooms(filters: &RoomFilters) -> AdminResult<Vec<Room>> {
        get_api_client()?.get_json_with_query("/rooms", filters).await
    }

    pub async fn get_room(id: &str) -> AdminResult<Room> {
        get_api_client()?.get_json(&format!("/rooms/{}", encode_segment(id))).await
    }

    pub async fn create_room(room: &NewRoom) -> AdminResult<Room> {
        get_api_client()?.post_json("/rooms", room).await
    }

    pub async fn update_room(id: &str, update: &RoomUpdate) -> AdminResult<Room> {
        get_api_client()?
            .patch_json(&format!("/rooms/{}", encode_segment(id)), update)
            .await
    }

    pub async fn delete_room(id: &str) -> AdminResult<MessageResponse> {
        get_api_client()?.delete(&format!("/rooms/{}", encode_segment(id))).await
    }

    pub async fn get_rooms_by_user_id(user_id: &str) -> AdminResult<Vec<Room>> {
        get_api_client()?
            .get_json(&format!("/rooms/user/{}", encode_segment(user_id)))
            .await
    }

    pub async fn search_by_city(city: &str) -> AdminResult<Vec<Room>> {
        get_api_client()?
            .get_json(&format!("/rooms/search/city/{}", encode_segment(city)))
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::UserType;
    use crate::services::test_support::mock_backend;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn room_json(id: &str) -> serde_json::Value {
        json!({
            "id": id, "userId": "u1", "userType": "Owner", "city": "Pune",
            "sizeOfPlace": "2BHK", "nearbyLandmark": "FC Road", "rentPerHead": 8500,
            "amenities": ["WiFi"], "imageUrls": ["https://img/1.jpg"]
        })
    }

    #[tokio::test]
    async fn test_get_rooms_with_rent_range() {
        let server = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/rooms"))
            .and(query_param("minRent", "5000.5"))
            .and(query_param("maxRent", "9000.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([room_json("r1")])))
            .expect(1)
            .mount(&server)
            .await;

        let rooms = RoomsApi::get_rooms(&RoomFilters {
            min_rent: Some(5000.5),
            max_rent: Some(9000.0),
            ..Default::default()
        })
        .await
        .unwrap();
        assert_eq!(rooms[0].user_type, UserType::Owner);
        assert_eq!(rooms[0].rent_per_head, 8500.0);
        assert_eq!(rooms[0].cover_image(), Some("https://img/1.jpg"));
    }

    #[tokio::test]
    async fn test_update_room_sends_only_changed_fields() {
        let server = mock_backend().await;
        Mock::given(method("PATCH"))
            .and(path("/rooms/r1"))
            .and(body_json(json!({"rentPerHead": 9000.0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(room_json("r1")))
            .expect(1)
            .mount(&server)
            .await;

        let room = RoomsApi::update_room(
            "r1",
            &RoomUpdate {
                rent_per_head: Some(9000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(room.id, "r1");
    }

    #[tokio::test]
    async fn test_rooms_by_user() {
        let server = mock_backend().await;
        Mock::given(method("GET"))
            .and(path("/rooms/user/u1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([room_json("r1"), room_json("r2")])))
            .mount(&server)
            .await;

        assert_eq!(RoomsApi::get_rooms_by_user_id("u1").await.unwrap().len(), 2);
    }
}
