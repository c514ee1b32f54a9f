//! 주소 리포지토리

use std::sync::Arc;
use mongodb::bson::{doc, oid::ObjectId};
use singleton_macro::repository;
use crate::{
    core::registry::Repository,
    db::Database,
    domain::entities::papers::address::Address,
    errors::AppError,
};

#[repository(name = "address", collection = "addresses")]
pub struct AddressRepository {
    db: Arc<Database>,
}

impl AddressRepository {
    pub async fn create(&self, mut address: Address) -> Result<Address, AppError> {
        let result = self.collection::<Address>()
            .insert_one(&address)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        address.id = result.inserted_id.as_object_id();

        Ok(address)
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Address>, AppError> {
        self.collection::<Address>()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 주소 필드를 교체하고 수정된 문서를 반환합니다.
    pub async fn update(&self, id: ObjectId, address: &Address) -> Result<Option<Address>, AppError> {
        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<Address>()
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": {
                    "city": &address.city,
                    "store": &address.store,
                    "coordinate_x": address.coordinate_x,
                    "coordinate_y": address.coordinate_y,
                } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn delete(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self.collection::<Address>()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
