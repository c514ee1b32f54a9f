//! 주소 서비스

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::entities::papers::address::Address,
    repositories::papers::address_repo::AddressRepository,
    errors::AppError,
    utils::string_utils::validate_required_string,
};

#[service(name = "address")]
pub struct AddressService {
    address_repo: Arc<AddressRepository>,
}

impl AddressService {
    pub async fn create_address(&self, mut address: Address) -> Result<Address, AppError> {
        address.city = validate_required_string(&address.city, "도로 주소")?;
        address.store = validate_required_string(&address.store, "상호명")?;

        self.address_repo.create(address).await
    }

    pub async fn get_address(&self, id: ObjectId) -> Result<Address, AppError> {
        self.address_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("주소를 찾을 수 없습니다".to_string()))
    }

    pub async fn update_address(&self, id: ObjectId, mut address: Address) -> Result<Address, AppError> {
        address.city = validate_required_string(&address.city, "도로 주소")?;
        address.store = validate_required_string(&address.store, "상호명")?;

        self.address_repo
            .update(id, &address)
            .await?
            .ok_or_else(|| AppError::NotFound("주소를 찾을 수 없습니다".to_string()))
    }

    pub async fn delete_address(&self, id: ObjectId) -> Result<(), AppError> {
        self.address_repo.delete(id).await?;
        Ok(())
    }
}
