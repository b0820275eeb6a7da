//! 兑换资格评估
//!
//! 只做资格列举，不扣减积分：系统没有兑换提交操作，
//! 实际兑换属于外部流程。

use std::sync::Arc;

use tracing::instrument;

use campus_shared::error::{CampusError, Result};

use crate::catalog::CatalogStore;
use crate::ledger::UserLedger;
use crate::models::Prize;

/// 兑换资格评估器
pub struct RedemptionEvaluator {
    ledger: Arc<UserLedger>,
    catalog: Arc<CatalogStore>,
}

impl RedemptionEvaluator {
    pub fn new(ledger: Arc<UserLedger>, catalog: Arc<CatalogStore>) -> Self {
        Self { ledger, catalog }
    }

    /// 列出用户当前积分可兑换的全部奖品
    ///
    /// 返回 `points_required <= user.points` 的奖品，按目录顺序排列。
    /// 本操作从不修改余额。
    #[instrument(skip(self))]
    pub fn eligible_prizes(&self, user_id: i64) -> Result<Vec<Prize>> {
        if user_id <= 0 {
            return Err(CampusError::invalid_argument("user_id", "必须为正整数"));
        }

        let user = self
            .ledger
            .get_user(user_id)
            .ok_or_else(|| CampusError::not_found("User", user_id))?;

        Ok(self
            .catalog
            .list_prizes()
            .into_iter()
            .filter(|prize| prize.points_required <= user.points)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use std::collections::BTreeSet;

    fn sample_prize(id: i64, points_required: u64) -> Prize {
        Prize {
            id,
            name: format!("奖品 {}", id),
            points_required,
            description: String::new(),
        }
    }

    fn evaluator_with(points: u64, prizes: Vec<Prize>) -> RedemptionEvaluator {
        let user = User {
            id: 2,
            name: "Sarah Chen".to_string(),
            email: "sarah.chen@campus.edu".to_string(),
            points,
            badges: BTreeSet::new(),
        };
        RedemptionEvaluator::new(
            Arc::new(UserLedger::from_seed(vec![user])),
            Arc::new(CatalogStore::from_seed(vec![], prizes)),
        )
    }

    #[test]
    fn test_all_prizes_eligible_in_catalog_order() {
        let evaluator = evaluator_with(
            980,
            vec![
                sample_prize(1, 300),
                sample_prize(2, 500),
                sample_prize(3, 750),
            ],
        );

        let ids: Vec<i64> = evaluator
            .eligible_prizes(2)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_only_affordable_prizes() {
        let evaluator = evaluator_with(
            500,
            vec![
                sample_prize(1, 300),
                sample_prize(2, 500),
                sample_prize(3, 750),
            ],
        );

        let ids: Vec<i64> = evaluator
            .eligible_prizes(2)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_zero_points_empty_when_cheapest_costs_more() {
        let evaluator = evaluator_with(0, vec![sample_prize(1, 300)]);

        assert!(evaluator.eligible_prizes(2).unwrap().is_empty());
    }

    #[test]
    fn test_free_prize_always_eligible() {
        let evaluator = evaluator_with(0, vec![sample_prize(1, 0)]);

        assert_eq!(evaluator.eligible_prizes(2).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_user() {
        let evaluator = evaluator_with(100, vec![sample_prize(1, 50)]);

        assert!(matches!(
            evaluator.eligible_prizes(999).unwrap_err(),
            CampusError::NotFound { .. }
        ));
    }

    #[test]
    fn test_invalid_user_id() {
        let evaluator = evaluator_with(100, vec![]);

        assert!(matches!(
            evaluator.eligible_prizes(-1).unwrap_err(),
            CampusError::InvalidArgument { .. }
        ));
    }
}
