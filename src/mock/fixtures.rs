//! 模拟模式下返回的固定数据

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::{Value, json};

use crate::dto::response::{AiStatus, AuthResponse, HistoryEntry, UploadResponse};

/// 模拟令牌
pub const MOCK_TOKEN: &str = "fake-token-123";

pub fn register_response() -> AuthResponse {
    AuthResponse {
        message: Some("User created".to_string()),
        token: MOCK_TOKEN.to_string(),
    }
}

pub fn login_response() -> AuthResponse {
    AuthResponse {
        message: None,
        token: MOCK_TOKEN.to_string(),
    }
}

pub fn status_response() -> AiStatus {
    AiStatus {
        ai_status: "running".to_string(),
    }
}

fn iso_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn full_metrics() -> Value {
    json!({
        "acne_spots": 0.0,
        "cyanosis": 0.0,
        "dark_circles": 0.21131442487239838,
        "jaundice": 1.0,
        "mild_acne": 0.21496938350870937,
        "moderate_acne": 0.06450270495214315,
        "oiliness": 0.0,
        "paleness": 0.11042847064870652,
        "pigmentation": 0.8731149555119593,
        "pore_size": 0.4550502348255157,
        "puffiness": 0.7467156611940167,
        "redness": 0.3030783534049988,
        "severe_acne": 0.017834849295523453,
        "texture_roughness": 0.8284447740526998,
        "vascularity": 0.1657451994530646,
        "wrinkles": 0.07295247449039896
    })
}

const FULL_REPORT: &str = "=== МЕТРИКИ АНАЛИЗА КОЖИ ===\n\
acne_spots          : 0.000\n\
cyanosis            : 0.000\n\
dark_circles        : 0.211\n\
jaundice            : 1.000\n\
mild_acne           : 0.215\n\
moderate_acne       : 0.065\n\
oiliness            : 0.000\n\
paleness            : 0.110\n\
pigmentation        : 0.873\n\
pore_size           : 0.455\n\
puffiness           : 0.747\n\
redness             : 0.303\n\
severe_acne         : 0.018\n\
texture_roughness   : 0.828\n\
vascularity         : 0.166\n\
wrinkles            : 0.073\n\
\n\
=== ОБЩАЯ ОЦЕНКА ===\n\
Оценка состояния кожи: 65.13%\n\
\n\
=== РЕКОМЕНДАЦИИ ===\n  \
- SPF защита ежедневно\n  \
- Средства с витамином C и ниацинамидом\n  \
- Лимфодренажный массаж\n  \
- Контроль потребления соли\n  \
- Обратиться к врачу для обследования\n  \
- Мягкие эксфолианты для выравнивания текстуры";

/// 完整的一次分析结果
pub fn full_analysis() -> Value {
    let recommendations = json!([
        "SPF защита ежедневно",
        "Средства с витамином C и ниацинамидом",
        "Лимфодренажный массаж",
        "Контроль потребления соли",
        "Обратиться к врачу для обследования",
        "Мягкие эксфолианты для выравнивания текстуры"
    ]);

    json!({
        "analysis_type": "full_analysis",
        "formatted_report": FULL_REPORT,
        "metrics": full_metrics(),
        "overall_score": 0.6512578355108487,
        "report": {
            "features": [
                ["fatigue_low", "stress_low", "color_good"],
                ["skin_moderate", "eyes_bad", "puffiness_high", "dryness_high"]
            ],
            "metrics_summary": full_metrics(),
            "overall_score": 0.6512578355108487,
            "recommendations": recommendations
        },
        "status": "success"
    })
}

pub fn upload_response(now: DateTime<Utc>) -> UploadResponse {
    UploadResponse {
        status: "success".to_string(),
        result: full_analysis().to_string(),
        timestamp: iso_timestamp(now),
    }
}

fn history_analysis(metrics: [f64; 5], overall_score: f64, second_tip: &str) -> Value {
    let [acne_spots, dark_circles, puffiness, redness, wrinkles] = metrics;
    json!({
        "analysis_type": "full_analysis",
        "formatted_report": "=== МЕТРИКИ АНАЛИЗА КОЖИ ===\n...",
        "metrics": {
            "acne_spots": acne_spots,
            "dark_circles": dark_circles,
            "puffiness": puffiness,
            "redness": redness,
            "wrinkles": wrinkles
        },
        "overall_score": overall_score,
        "report": {
            "recommendations": ["SPF защита ежедневно", second_tip]
        },
        "status": "success"
    })
}

/// 两条历史记录, 日期分别为一天前和两天前
pub fn history_entries(now: DateTime<Utc>) -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            id: "1".to_string(),
            result: history_analysis([0.1, 0.3, 0.5, 0.2, 0.1], 0.72, "Увлажняющие средства")
                .to_string(),
            date: iso_timestamp(now - Duration::days(1)),
        },
        HistoryEntry {
            id: "2".to_string(),
            result: history_analysis(
                [0.2, 0.4, 0.6, 0.3, 0.15],
                0.65,
                "Средства с витамином C",
            )
            .to_string(),
            date: iso_timestamp(now - Duration::days(2)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_full_analysis_shape() {
        let analysis = full_analysis();
        assert_eq!(analysis["status"], "success");
        assert_eq!(analysis["metrics"]["jaundice"], 1.0);
        assert_eq!(analysis["metrics"], analysis["report"]["metrics_summary"]);
        assert_eq!(analysis["report"]["recommendations"].as_array().map(Vec::len), Some(6));
        assert!(
            analysis["formatted_report"]
                .as_str()
                .is_some_and(|r| r.contains("acne_spots          : 0.000\ncyanosis"))
        );
    }

    #[test]
    fn test_history_dates_are_relative() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).single().ok_or("invalid date")?;
        let entries = history_entries(now);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[0].date, "2024-03-09T12:00:00.000Z");
        assert_eq!(entries[1].id, "2");
        assert_eq!(entries[1].date, "2024-03-08T12:00:00.000Z");

        let first = entries[0].analysis()?;
        assert_eq!(first["overall_score"], 0.72);
        assert_eq!(first["report"]["recommendations"][1], "Увлажняющие средства");
        Ok(())
    }

    #[test]
    fn test_upload_response_timestamp() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).single().ok_or("invalid date")?;
        let response = upload_response(now);
        assert_eq!(response.status, "success");
        assert_eq!(response.timestamp, "2024-03-10T12:00:00.000Z");
        assert_eq!(response.analysis()?, full_analysis());
        Ok(())
    }
}
