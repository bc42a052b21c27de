//! 터미널 출력 포맷팅 유틸리티
//!
//! 서비스 시작 시 설정 요약을 박스 형태로 출력합니다.
//! 시크릿 값은 출력하지 않고 설정 여부만 표시합니다.

use crate::config::AppConfig;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다
///
/// Unicode 박스 문자를 사용하며 텍스트는 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               STREAM TOKEN SERVICE               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let border = "═".repeat(50);
    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 서브 항목 한 줄
///
/// ```text
///    ├─ Environment: production
/// ```
pub fn sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

/// 설정 요약을 만듭니다
///
/// Supabase anon 키와 Stream 시크릿은 "configured" / "missing" 으로만 표시합니다.
pub fn config_summary(config: &AppConfig) -> String {
    let configured = |present: bool| if present { "configured" } else { "missing" };

    let ttl = config
        .stream
        .token_ttl_seconds
        .map(|ttl| format!("{}s", ttl))
        .unwrap_or_else(|| "no expiry".to_string());

    let lines = [
        boxed_title("STREAM TOKEN SERVICE"),
        sub_task("Environment", config.environment.as_str()),
        sub_task("Bind address", &config.server.bind_address()),
        sub_task("Workers", &config.server.workers.to_string()),
        sub_task("Supabase URL", &config.identity.url),
        sub_task("Supabase anon key", configured(!config.identity.anon_key.is_empty())),
        sub_task("Stream API key", configured(config.stream.api_key.is_some())),
        sub_task("Stream API secret", configured(config.stream.api_secret.is_some())),
        sub_task("Stream token TTL", &ttl),
    ];

    lines.join("\n")
}

/// 설정 요약을 표준 출력에 출력합니다
pub fn print_config_summary(config: &AppConfig) {
    println!();
    println!("{}", config_summary(config));
    println!();
}
