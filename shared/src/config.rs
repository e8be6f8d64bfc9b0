use anyhow::Result;

use crate::env::{which, Environment};

/// アプリケーション全体の設定。
/// 環境変数から組み立てる。
pub struct AppConfig {
    pub app: AppMetaConfig,
    pub seed: SeedConfig,
}

pub struct AppMetaConfig {
    pub env: Environment,
}

/// デモ・テスト用のシードデータ投入設定
pub struct SeedConfig {
    pub enabled: bool,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let app = AppMetaConfig { env: which() };
        // SEED_DATA が "false" のときだけ無効化する
        let enabled = std::env::var("SEED_DATA")
            .map(|v| v != "false")
            .unwrap_or(true);
        let seed = SeedConfig { enabled };
        Ok(Self { app, seed })
    }
}
