//! Marketplace listings (`/used-items`)

use crate::models::{AdminResult, MessageResponse, NewUsedItem, UsedItem, UsedItemFilters, UsedItemUpdate};
use crate::services::api_client::{encode_segment, get_api_client};

/// Used items API client
pub struct UsedItemsApi;

impl UsedItemsApi {
    pub async fn get_used_items(filters: &UsedItemFilters) -> AdminResult<Vec<UsedItem>> {
        get_api_client()?.get_json_with_query("/used-items", filters).await
    }

    pub async fn get_used_item(id: &str) -> AdminResult<UsedItem> {
        get_api_client()?
            .get_json(&format!("/used-items/{}", encode_segment(id)))
            .await
    }

    pub async fn create_used_item(item: &NewUsedItem) -> AdminResult<UsedItem> {
        get_api_client()?.post_json("/used-items", item).await
    }

    pub async fn update_used_item(id: &str, update: &UsedItemUpdate) -> AdminResult<UsedItem> {
        get_api_client()?
            .patch_json(&format!("/used-items/{}", encode_segment(id)), update)
            .await
    }

    pub async fn remove_used_item(id: &str) -> AdminResult<MessageResponse> {
        get_api_client()?
            .delete(&format!("/used-items/{}", encode_segment(id)))
            .await
    }

    pub async fn get_items_by_user_id(user_id: &str) -> AdminResult<Vec<UsedItem>> {
        get_api_client()?
            .get_json(&format!("/used-items/user/{}", encode_segment(user_id)))
            .await
    }

    pub async fn search_by_city(city: &str) -> AdminResult<Vec<UsedItem>> {
        get_api_client()?
            .get_json(&format!("/used-items/search/city/{}", encode_segment(city)))
            .await
    }

    pub async fn search_by_category(category: &str) -> AdminResult<Vec<UsedItem>> {
        get_api_client()?
            .get_json(&format!("/used-items/search/category/{}", encode_segment(category)))
            .await
    }
}
