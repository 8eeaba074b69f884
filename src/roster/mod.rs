mod client;
mod link;

pub use client::RosterClient;
pub use link::parse_next_link;

use crate::error::Result;
use attendance_common::RosterSnapshot;

/// 名簿とコース情報をまとめて取得
///
/// 学生一覧 → コース情報の順に逐次取得し、どちらかが失敗すれば全体が失敗する
pub async fn fetch_snapshot(client: &RosterClient, course_id: u64) -> Result<RosterSnapshot> {
    let students = client.fetch_students(course_id).await?;
    let course = client.fetch_course_info(course_id).await?;
    let fetched_at = chrono::Local::now().to_rfc3339();

    Ok(RosterSnapshot::new(course, students, fetched_at))
}
