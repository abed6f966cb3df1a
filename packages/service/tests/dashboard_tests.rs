mod common;

use chrono::NaiveDate;

use hifz_service::{Config, DashboardOverview, DashboardService, DashboardStats};

use common::{now, seeded_store};

async fn overview() -> DashboardOverview {
    let service = DashboardService::new(seeded_store(), Config::default());
    service.overview(now()).await.unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn series(overview: &DashboardOverview) -> Vec<(&str, usize)> {
    overview
        .daily_submissions
        .iter()
        .map(|d| (d.date.as_str(), d.submissions))
        .collect()
}

#[tokio::test]
async fn test_overview_stats_cards() {
    let overview = overview().await;

    assert_eq!(
        overview.stats,
        DashboardStats {
            today_submissions: 3,
            students_revising_today: 1,
            students_memorizing_today: 1,
            total_active_students: 4,
        }
    );
    assert_eq!(overview.total_activities_count, 10);
}

#[tokio::test]
async fn test_overview_ranks_active_students() {
    let overview = overview().await;

    let ids: Vec<&str> = overview.top_students.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s-steady", "s-flat", "s-unlogged", "s-garbled"]);

    let top = &overview.top_students[0];
    assert_eq!(top.current_juz, 12);
    assert_eq!(top.activity_count, 6);
    assert_eq!(top.progress, 40);
}

#[tokio::test]
async fn test_overview_juz_distribution_skips_out_of_range() {
    let overview = overview().await;

    let buckets: Vec<(&str, usize)> = overview
        .juz_distribution
        .iter()
        .map(|b| (b.juz.as_str(), b.students))
        .collect();
    assert_eq!(buckets, vec![("Juz 10", 2), ("Juz 12", 1)]);
}

#[tokio::test]
async fn test_overview_monthly_activity_covers_all_students() {
    let overview = overview().await;

    assert_eq!(overview.monthly_activity.len(), 6);

    let may = &overview.monthly_activity[0];
    assert_eq!(may.month, "May");
    assert_eq!((may.revision, may.memorization), (0, 1));

    let august = &overview.monthly_activity[3];
    assert_eq!((august.revision, august.memorization), (0, 2));

    let october = &overview.monthly_activity[5];
    assert_eq!(october.month, "Oct");
    assert_eq!((october.revision, october.memorization), (4, 1));
}

#[tokio::test]
async fn test_daily_submissions_default_to_last_week() {
    let overview = overview().await;

    let days = series(&overview);
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], ("10/08", 0));
    assert_eq!(days[6], ("10/14", 3));
}

#[tokio::test]
async fn test_daily_submissions_over_explicit_range() {
    let service = DashboardService::new(seeded_store(), Config::default());

    let overview = service
        .overview_with_range(now(), Some(ymd(2026, 9, 30)), Some(ymd(2026, 10, 3)))
        .await
        .unwrap();
    assert_eq!(
        series(&overview),
        vec![("09/30", 0), ("10/01", 0), ("10/02", 1), ("10/03", 1)]
    );

    let overview = service
        .overview_with_range(now(), Some(ymd(2026, 10, 13)), None)
        .await
        .unwrap();
    assert_eq!(series(&overview), vec![("10/13", 0), ("10/14", 3)]);
}

#[tokio::test]
async fn test_overview_serializes() {
    let json = serde_json::to_value(overview().await).unwrap();

    assert_eq!(json["stats"]["total_active_students"], 4);
    assert_eq!(json["stats"]["today_submissions"], 3);
    assert_eq!(json["total_activities_count"], 10);
    assert_eq!(json["daily_submissions"][6]["date"], "10/14");
    assert_eq!(json["juz_distribution"][0]["juz"], "Juz 10");
    assert_eq!(json["monthly_activity"][5]["month"], "Oct");
}
