//! 서버, 저장소, 환경 관련 설정

use std::env;
use std::str::FromStr;

/// `PROFILE`이 없을 때 사용하는 기본 프로필
pub const DEFAULT_PROFILE: &str = "dev";

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::resolve(env::var("ENVIRONMENT").ok(), env::var("PROFILE").ok())
    }

    /// `ENVIRONMENT` → `PROFILE` → 기본 프로필 순으로 실행 환경을 결정합니다
    ///
    /// 알 수 없는 값은 가장 엄격한 `Production`으로 취급합니다.
    pub fn resolve(environment: Option<String>, profile: Option<String>) -> Self {
        environment
            .or(profile)
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
            .parse()
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" | "local" => Ok(Environment::Development),
            "test" | "testing" => Ok(Environment::Test),
            "staging" | "stage" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!("Unknown environment: {}", s)),
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(4)
    }
}

/// 사용자/투자 성향 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageBackend {
    /// MongoDB (기본값)
    MongoDb,
    /// 프로세스 메모리 (로컬 개발용, 재시작 시 초기화)
    Memory,
}

pub struct StorageConfig;

impl StorageConfig {
    pub fn backend() -> StorageBackend {
        Self::parse_backend(&env::var("DATA_STORE").unwrap_or_default())
    }

    pub fn parse_backend(value: &str) -> StorageBackend {
        match value.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }
}

pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분), 없으면 로컬 개발 주소
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(origins) => Self::parse_origins(&origins),
            Err(_) => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://localhost:8080".to_string(),
                "http://127.0.0.1:8080".to_string(),
            ],
        }
    }

    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Rate Limiting 설정
#[derive(Debug)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self { per_second, burst_size };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}
