//! 活动与奖品目录存储
//!
//! 使用 DashMap 提供线程安全的并发访问，另维护一份在构建时固定的
//! 载入顺序索引，列表操作按载入顺序返回。

use dashmap::DashMap;
use dashmap::mapref::one::RefMut;
use tracing::warn;

use crate::models::{Event, Prize};

/// 目录存储
///
/// Event 与 Prize 记录的唯一属主。除 `Event.rsvp_count` 外全部只读；
/// 该计数器的修改路径仅限 RSVP 引擎通过 `event_mut` 获取的独占 guard，
/// 其他调用方永远无法直接写入。
pub struct CatalogStore {
    events: DashMap<i64, Event>,
    /// 活动载入顺序，构建后不再变化
    event_order: Vec<i64>,
    prizes: DashMap<i64, Prize>,
    /// 奖品载入顺序，构建后不再变化
    prize_order: Vec<i64>,
}

impl CatalogStore {
    /// 从种子数据构建目录
    ///
    /// 重复 id 只保留先出现的记录；超出容量的 RSVP 计数会被
    /// 截断到容量上限，保证不变式在载入时即成立。
    pub fn from_seed(events: Vec<Event>, prizes: Vec<Prize>) -> Self {
        let event_map = DashMap::new();
        let mut event_order = Vec::with_capacity(events.len());
        for mut event in events {
            if event_map.contains_key(&event.id) {
                warn!(event_id = event.id, "种子数据中的活动 id 重复，已跳过");
                continue;
            }
            if event.rsvp_count > event.max_capacity {
                warn!(
                    event_id = event.id,
                    rsvp_count = event.rsvp_count,
                    max_capacity = event.max_capacity,
                    "种子数据中的 RSVP 计数超出容量，已截断"
                );
                event.rsvp_count = event.max_capacity;
            }
            event_order.push(event.id);
            event_map.insert(event.id, event);
        }

        let prize_map = DashMap::new();
        let mut prize_order = Vec::with_capacity(prizes.len());
        for prize in prizes {
            if prize_map.contains_key(&prize.id) {
                warn!(prize_id = prize.id, "种子数据中的奖品 id 重复，已跳过");
                continue;
            }
            prize_order.push(prize.id);
            prize_map.insert(prize.id, prize);
        }

        Self {
            events: event_map,
            event_order,
            prizes: prize_map,
            prize_order,
        }
    }

    /// 查询单个活动
    pub fn get_event(&self, id: i64) -> Option<Event> {
        self.events.get(&id).map(|e| e.clone())
    }

    /// 查询单个奖品
    pub fn get_prize(&self, id: i64) -> Option<Prize> {
        self.prizes.get(&id).map(|p| p.clone())
    }

    /// 按载入顺序列出全部活动
    pub fn list_events(&self) -> Vec<Event> {
        self.event_order
            .iter()
            .filter_map(|id| self.events.get(id).map(|e| e.clone()))
            .collect()
    }

    /// 按载入顺序列出全部奖品
    pub fn list_prizes(&self) -> Vec<Prize> {
        self.prize_order
            .iter()
            .filter_map(|id| self.prizes.get(id).map(|p| p.clone()))
            .collect()
    }

    /// 活动数量
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// 奖品数量
    pub fn prize_count(&self) -> usize {
        self.prizes.len()
    }

    /// RSVP 引擎专用的独占访问入口
    ///
    /// guard 存续期间对应条目被独占锁定，容量检查与计数自增
    /// 在同一 guard 内完成即是一个原子步骤。
    pub(crate) fn event_mut(&self, id: i64) -> Option<RefMut<'_, i64, Event>> {
        self.events.get_mut(&id)
    }
}
