//! # 이미지 서비스
//!
//! 페이퍼에 첨부된 이미지 목록을 관리합니다. 수정 시 요청 목록은
//! 전체 교체 의미를 가지며, 기존 목록과의 차이만 저장소에 반영됩니다:
//! 빠진 URL은 삭제, 새 URL은 추가, 유지되는 URL은 순서만 갱신합니다.

use std::collections::HashMap;
use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::entities::papers::image::Image,
    repositories::papers::image_repo::ImageRepository,
    errors::AppError,
};

/// 이미지 차등 반영 계획
#[derive(Debug, Default)]
pub struct ImageDiff {
    /// (유지되는 이미지 ID, 새 시퀀스)
    pub keep: Vec<(ObjectId, i32)>,
    /// 새로 삽입할 이미지
    pub create: Vec<Image>,
    /// 삭제할 이미지 ID
    pub delete: Vec<ObjectId>,
}

#[service(name = "image")]
pub struct ImageService {
    image_repo: Arc<ImageRepository>,
}

impl ImageService {
    pub async fn create_images(
        &self,
        paper_id: ObjectId,
        urls: &[String],
    ) -> Result<Vec<Image>, AppError> {
        let images = urls
            .iter()
            .enumerate()
            .map(|(sequence, url)| Image::new(url.clone(), paper_id, sequence as i32))
            .collect();

        self.image_repo.create_many(images).await
    }

    pub async fn find_by_paper(&self, paper_id: ObjectId) -> Result<Vec<Image>, AppError> {
        self.image_repo.find_by_paper(paper_id).await
    }

    /// 이미지 목록을 요청된 URL 목록으로 교체합니다.
    pub async fn update_images(
        &self,
        paper_id: ObjectId,
        new_urls: &[String],
    ) -> Result<Vec<Image>, AppError> {
        let existing = self.image_repo.find_by_paper(paper_id).await?;
        let diff = Self::diff_images(existing, new_urls, paper_id);

        for (id, sequence) in &diff.keep {
            self.image_repo.update_sequence(*id, *sequence).await?;
        }

        self.image_repo.delete_by_ids(&diff.delete).await?;
        self.image_repo.create_many(diff.create).await?;

        self.image_repo.find_by_paper(paper_id).await
    }

    pub async fn delete_by_paper(&self, paper_id: ObjectId) -> Result<u64, AppError> {
        self.image_repo.delete_by_paper(paper_id).await
    }

    /// 기존 이미지 목록과 새 URL 목록의 차이를 계산합니다.
    ///
    /// 같은 URL이 여러 번 첨부된 경우 앞에서부터 하나씩 매칭됩니다.
    fn diff_images(existing: Vec<Image>, new_urls: &[String], paper_id: ObjectId) -> ImageDiff {
        let mut remaining: HashMap<String, Vec<Image>> = HashMap::new();
        for image in existing {
            remaining.entry(image.url.clone()).or_default().push(image);
        }

        let mut diff = ImageDiff::default();

        for (index, url) in new_urls.iter().enumerate() {
            let sequence = index as i32;

            let matched = remaining.get_mut(url).and_then(|queue| {
                if queue.is_empty() { None } else { Some(queue.remove(0)) }
            });

            match matched {
                Some(image) => {
                    if let Some(id) = image.id {
                        diff.keep.push((id, sequence));
                    }
                }
                None => {
                    diff.create.push(Image::new(url.clone(), paper_id, sequence));
                }
            }
        }

        diff.delete = remaining
            .into_values()
            .flatten()
            .filter_map(|image| image.id)
            .collect();

        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_with_id(url: &str, paper_id: ObjectId, sequence: i32) -> Image {
        let mut image = Image::new(url.to_string(), paper_id, sequence);
        image.id = Some(ObjectId::new());
        image
    }

    #[test]
    fn test_diff_keeps_unchanged_urls() {
        let paper_id = ObjectId::new();
        let a = image_with_id("https://img.ustory.com/a.png", paper_id, 0);
        let b = image_with_id("https://img.ustory.com/b.png", paper_id, 1);
        let a_id = a.id.unwrap();
        let b_id = b.id.unwrap();

        let new_urls = vec![
            "https://img.ustory.com/a.png".to_string(),
            "https://img.ustory.com/b.png".to_string(),
        ];

        let diff = ImageService::diff_images(vec![a, b], &new_urls, paper_id);

        assert_eq!(diff.keep, vec![(a_id, 0), (b_id, 1)]);
        assert!(diff.create.is_empty());
        assert!(diff.delete.is_empty());
    }

    #[test]
    fn test_diff_deletes_removed_and_creates_added() {
        let paper_id = ObjectId::new();
        let old = image_with_id("https://img.ustory.com/old.png", paper_id, 0);
        let kept = image_with_id("https://img.ustory.com/kept.png", paper_id, 1);
        let old_id = old.id.unwrap();
        let kept_id = kept.id.unwrap();

        let new_urls = vec![
            "https://img.ustory.com/kept.png".to_string(),
            "https://img.ustory.com/new.png".to_string(),
        ];

        let diff = ImageService::diff_images(vec![old, kept], &new_urls, paper_id);

        assert_eq!(diff.keep, vec![(kept_id, 0)]);
        assert_eq!(diff.create.len(), 1);
        assert_eq!(diff.create[0].url, "https://img.ustory.com/new.png");
        assert_eq!(diff.create[0].sequence, 1);
        assert_eq!(diff.delete, vec![old_id]);
    }

    #[test]
    fn test_diff_reorders_kept_urls() {
        let paper_id = ObjectId::new();
        let first = image_with_id("https://img.ustory.com/1.png", paper_id, 0);
        let second = image_with_id("https://img.ustory.com/2.png", paper_id, 1);
        let first_id = first.id.unwrap();
        let second_id = second.id.unwrap();

        // 순서만 뒤집힌 요청
        let new_urls = vec![
            "https://img.ustory.com/2.png".to_string(),
            "https://img.ustory.com/1.png".to_string(),
        ];

        let diff = ImageService::diff_images(vec![first, second], &new_urls, paper_id);

        assert_eq!(diff.keep, vec![(second_id, 0), (first_id, 1)]);
        assert!(diff.create.is_empty());
        assert!(diff.delete.is_empty());
    }

    #[test]
    fn test_diff_handles_duplicate_urls() {
        let paper_id = ObjectId::new();
        let only = image_with_id("https://img.ustory.com/dup.png", paper_id, 0);
        let only_id = only.id.unwrap();

        // 같은 URL 두 장: 한 장은 유지, 한 장은 신규
        let new_urls = vec![
            "https://img.ustory.com/dup.png".to_string(),
            "https://img.ustory.com/dup.png".to_string(),
        ];

        let diff = ImageService::diff_images(vec![only], &new_urls, paper_id);

        assert_eq!(diff.keep, vec![(only_id, 0)]);
        assert_eq!(diff.create.len(), 1);
        assert_eq!(diff.create[0].sequence, 1);
        assert!(diff.delete.is_empty());
    }

    #[test]
    fn test_diff_empty_request_deletes_all() {
        let paper_id = ObjectId::new();
        let a = image_with_id("https://img.ustory.com/a.png", paper_id, 0);
        let a_id = a.id.unwrap();

        let diff = ImageService::diff_images(vec![a], &[], paper_id);

        assert!(diff.keep.is_empty());
        assert!(diff.create.is_empty());
        assert_eq!(diff.delete, vec![a_id]);
    }
}
