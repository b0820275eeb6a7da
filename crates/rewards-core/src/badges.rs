//! 徽章规则定义与评估
//!
//! 签到成功后按固定顺序评估规则列表，新满足的徽章只发放一次，
//! 已持有的徽章不会重复出现在集合中。徽章发放后不撤销。

use serde::{Deserialize, Serialize};

use crate::models::User;

/// 徽章触发条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BadgeTrigger {
    /// 任意一次成功签到
    AnyCheckin,
    /// 累计积分达到阈值
    PointsAtLeast { threshold: u64 },
}

/// 徽章规则
///
/// 规则列表的顺序即评估顺序，也是结果中徽章的排列顺序。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeRule {
    /// 徽章名称
    pub badge: String,
    /// 触发条件
    pub trigger: BadgeTrigger,
}

impl BadgeRule {
    pub fn new(badge: impl Into<String>, trigger: BadgeTrigger) -> Self {
        Self {
            badge: badge.into(),
            trigger,
        }
    }

    /// 签到后该规则是否满足
    fn is_satisfied(&self, user: &User) -> bool {
        match self.trigger {
            BadgeTrigger::AnyCheckin => true,
            BadgeTrigger::PointsAtLeast { threshold } => user.points >= threshold,
        }
    }
}

/// 默认规则集
pub fn default_rules() -> Vec<BadgeRule> {
    vec![
        BadgeRule::new("First Event", BadgeTrigger::AnyCheckin),
        BadgeRule::new("Point Collector", BadgeTrigger::PointsAtLeast { threshold: 500 }),
        BadgeRule::new("Campus Legend", BadgeTrigger::PointsAtLeast { threshold: 1000 }),
    ]
}

/// 按顺序评估规则，返回本次新发放的徽章
///
/// 已持有的徽章不会重复发放，也不会出现在返回值中。
pub(crate) fn evaluate(rules: &[BadgeRule], user: &mut User) -> Vec<String> {
    let mut granted = Vec::new();
    for rule in rules {
        if rule.is_satisfied(user) && user.grant_badge(&rule.badge) {
            granted.push(rule.badge.clone());
        }
    }
    granted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn user_with_points(points: u64) -> User {
        User {
            id: 1,
            name: "测试用户".to_string(),
            email: "test@campus.edu".to_string(),
            points,
            badges: BTreeSet::new(),
        }
    }

    #[test]
    fn test_first_checkin_grants_first_event() {
        let mut user = user_with_points(30);

        let granted = evaluate(&default_rules(), &mut user);

        assert_eq!(granted, vec!["First Event".to_string()]);
        assert!(user.has_badge("First Event"));
    }

    #[test]
    fn test_threshold_badges_in_rule_order() {
        let mut user = user_with_points(1200);

        let granted = evaluate(&default_rules(), &mut user);

        assert_eq!(
            granted,
            vec![
                "First Event".to_string(),
                "Point Collector".to_string(),
                "Campus Legend".to_string()
            ]
        );
    }

    #[test]
    fn test_grant_is_idempotent() {
        let mut user = user_with_points(600);

        let first = evaluate(&default_rules(), &mut user);
        assert_eq!(first.len(), 2);

        // 第二次评估不再发放任何徽章
        let second = evaluate(&default_rules(), &mut user);
        assert!(second.is_empty());
        assert_eq!(user.badges.len(), 2);
    }

    #[test]
    fn test_below_threshold_not_granted() {
        let mut user = user_with_points(499);

        let granted = evaluate(&default_rules(), &mut user);

        assert_eq!(granted, vec!["First Event".to_string()]);
        assert!(!user.has_badge("Point Collector"));
    }

    #[test]
    fn test_custom_rule_list() {
        let rules = vec![BadgeRule::new(
            "Early Bird",
            BadgeTrigger::PointsAtLeast { threshold: 10 },
        )];
        let mut user = user_with_points(10);

        let granted = evaluate(&rules, &mut user);

        assert_eq!(granted, vec!["Early Bird".to_string()]);
    }

    #[test]
    fn test_trigger_serde() {
        let json = serde_json::to_string(&BadgeTrigger::PointsAtLeast { threshold: 500 }).unwrap();
        assert_eq!(json, r#"{"type":"points_at_least","threshold":500}"#);

        let trigger: BadgeTrigger = serde_json::from_str(r#"{"type":"any_checkin"}"#).unwrap();
        assert_eq!(trigger, BadgeTrigger::AnyCheckin);
    }
}
