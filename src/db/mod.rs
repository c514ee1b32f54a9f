//! MongoDB 연결 관리
//!
//! 애플리케이션 전역에서 공유하는 MongoDB 클라이언트 핸들을 제공합니다.
//! 연결 시 ping으로 서버 가용성을 확인합니다.

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수에서 연결 정보를 읽어 MongoDB에 연결합니다.
    ///
    /// * `MONGODB_URI` - 연결 URI (기본값: `mongodb://localhost:27017`)
    /// * `DATABASE_NAME` - 데이터베이스 이름 (기본값: `ustory_dev`)
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "ustory_dev".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;

        client_options.app_name = Some("ustory".to_string());

        let client = Client::with_options(client_options)?;

        // 연결 확인
        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
