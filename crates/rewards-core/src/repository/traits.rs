//! 仓储 Trait 定义
//!
//! 定义仓储接口，便于服务层依赖抽象而非具体实现，支持 mock 测试。

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use campus_shared::error::Result;

use crate::models::{Event, EventCategory, Prize, User};

/// 启动加载的数据快照
///
/// 存储后端在进程启动时提供一份完整快照，目录与账本由此构建。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusSnapshot {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub prizes: Vec<Prize>,
}

impl CampusSnapshot {
    /// 内置演示数据
    ///
    /// 种子文件缺失或加载失败时的兜底数据：3 个活动、2 个用户、
    /// 3 个奖品。
    pub fn sample() -> Self {
        Self {
            events: vec![
                Event {
                    id: 1,
                    title: "Campus Basketball Game vs USC".to_string(),
                    category: EventCategory::Sports,
                    start_time: ts(2024, 2, 15, 19),
                    location: "Gersten Pavilion".to_string(),
                    description: "Cheer on the Lions as they take on USC!".to_string(),
                    rsvp_count: 45,
                    max_capacity: 100,
                },
                Event {
                    id: 2,
                    title: "Spring Concert in the Sunken Garden".to_string(),
                    category: EventCategory::Music,
                    start_time: ts(2024, 2, 20, 18),
                    location: "Sunken Garden".to_string(),
                    description: "Live music under the stars!".to_string(),
                    rsvp_count: 78,
                    max_capacity: 150,
                },
                Event {
                    id: 3,
                    title: "Study Night at the Library".to_string(),
                    category: EventCategory::Academic,
                    start_time: ts(2024, 2, 18, 20),
                    location: "William H. Hannon Library".to_string(),
                    description: "Group study session with snacks provided!".to_string(),
                    rsvp_count: 23,
                    max_capacity: 50,
                },
            ],
            users: vec![
                User {
                    id: 1,
                    name: "Alex Johnson".to_string(),
                    email: "alex.johnson@campus.edu".to_string(),
                    points: 1250,
                    badges: ["First Event", "Sports Fan", "Social Butterfly"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                },
                User {
                    id: 2,
                    name: "Sarah Chen".to_string(),
                    email: "sarah.chen@campus.edu".to_string(),
                    points: 980,
                    badges: ["First Event", "Music Lover"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                },
            ],
            prizes: vec![
                Prize {
                    id: 1,
                    name: "Campus Hoodie".to_string(),
                    points_required: 500,
                    description: "Comfortable campus branded hoodie".to_string(),
                },
                Prize {
                    id: 2,
                    name: "Campus Dining Credit".to_string(),
                    points_required: 300,
                    description: "$25 credit for campus dining".to_string(),
                },
                Prize {
                    id: 3,
                    name: "Bookstore Gift Card".to_string(),
                    points_required: 750,
                    description: "$50 gift card for the campus bookstore".to_string(),
                },
            ],
        }
    }
}

/// 演示数据时间戳构造，参数为编译期常量
fn ts(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("演示数据时间戳无效")
}

/// 快照仓储接口
///
/// 外部存储后端实现本接口即可替换内存参考实现：
/// `load` 是启动加载钩子，`persist_*` 是变更持久化钩子。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// 启动时加载完整快照
    async fn load(&self) -> Result<CampusSnapshot>;

    /// 活动变更后的持久化钩子（RSVP 计数）
    async fn persist_event(&self, event: &Event) -> Result<()>;

    /// 用户变更后的持久化钩子（积分与徽章）
    async fn persist_user(&self, user: &User) -> Result<()>;
}
